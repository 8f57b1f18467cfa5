use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// 归属于某个视图的后台任务
///
/// 被drop时中止任务；用新任务替换旧任务即可取消之前的计划。
#[derive(Debug)]
pub struct ScopedTask {
    handle: JoinHandle<()>,
}

impl ScopedTask {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// 每隔 `period` 发送一次事件，第一次在一个周期之后
    pub fn every<E>(period: Duration, events: mpsc::Sender<E>, event: E) -> Self
    where
        E: Clone + Send + 'static,
    {
        Self::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if events.send(event.clone()).await.is_err() {
                    break;
                }
            }
        })
    }

    /// 延迟 `delay` 后发送一次事件
    pub fn after<E>(delay: Duration, events: mpsc::Sender<E>, event: E) -> Self
    where
        E: Send + 'static,
    {
        Self::spawn(async move {
            time::sleep(delay).await;
            let _ = events.send(event).await;
        })
    }
}

impl Drop for ScopedTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
