//! 首页实时会话
//!
//! 每个连接对应一个 [`HomeSession`]。会话状态只在驱动任务中修改，
//! 驱动任务依次处理命令、定时器和加载完成事件，每次处理后发布一份快照。
//! 会话被drop时驱动任务被中止，它持有的定时器和加载任务随之中止。

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, watch};

use super::{Carousel, IndexUpdate, PresentationSettings, Rotation, ScopedTask};
use crate::content::{BlogService, HERO_SLIDES};

/// 客户端发来的命令
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HomeCommand {
    SelectSlide { index: usize },
    OpenPost { slug: String },
    ClosePost,
}

/// 推送给客户端的状态快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSnapshot {
    pub loading: bool,
    pub active_slide: usize,
    pub slide_count: usize,
    pub post_offset: usize,
    pub fading: bool,
    /// 当前可见文章的slug，第一篇为主推
    pub visible_posts: Vec<String>,
    pub open_post: Option<String>,
    pub error: Option<String>,
}

#[derive(Error, Debug)]
#[error("Home session has stopped")]
pub struct SessionClosed;

#[derive(Debug, Clone)]
enum HomeEvent {
    Command(HomeCommand),
    HeroTick,
    RotationTick,
    FadeElapsed(u64),
    Loaded(Result<Vec<String>, String>),
}

pub struct HomeSession {
    events: mpsc::Sender<HomeEvent>,
    snapshots: watch::Receiver<HomeSnapshot>,
    _driver: ScopedTask,
}

impl HomeSession {
    /// 启动会话：开始加载最新文章，并启动大图轮播
    pub fn start(blog: Arc<dyn BlogService>, settings: PresentationSettings) -> Self {
        let (events_tx, events_rx) = mpsc::channel(32);
        let mut state = HomeState::new(settings, events_tx.clone());
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());

        state.start_loading(blog);
        state.hero_timer = Some(ScopedTask::every(
            state.settings.hero_interval,
            events_tx.clone(),
            HomeEvent::HeroTick,
        ));

        let driver = ScopedTask::spawn(state.run(events_rx, snapshot_tx));
        Self {
            events: events_tx,
            snapshots: snapshot_rx,
            _driver: driver,
        }
    }

    pub async fn send(&self, command: HomeCommand) -> Result<(), SessionClosed> {
        self.events
            .send(HomeEvent::Command(command))
            .await
            .map_err(|_| SessionClosed)
    }

    /// 最新快照
    pub fn snapshot(&self) -> HomeSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<HomeSnapshot> {
        self.snapshots.clone()
    }
}

struct HomeState {
    settings: PresentationSettings,
    events: mpsc::Sender<HomeEvent>,
    carousel: Carousel,
    rotation: Rotation,
    posts: Vec<String>,
    open_post: Option<String>,
    loading: bool,
    error: Option<String>,
    hero_timer: Option<ScopedTask>,
    rotation_timer: Option<ScopedTask>,
    fade_timer: Option<ScopedTask>,
    load_task: Option<ScopedTask>,
}

impl HomeState {
    fn new(settings: PresentationSettings, events: mpsc::Sender<HomeEvent>) -> Self {
        let rotation = Rotation::new(0, settings.rotation_window);
        Self {
            settings,
            events,
            carousel: Carousel::new(HERO_SLIDES.len()),
            rotation,
            posts: Vec::new(),
            open_post: None,
            loading: true,
            error: None,
            hero_timer: None,
            rotation_timer: None,
            fade_timer: None,
            load_task: None,
        }
    }

    fn start_loading(&mut self, blog: Arc<dyn BlogService>) {
        let events = self.events.clone();
        let limit = self.settings.home_post_limit;
        self.load_task = Some(ScopedTask::spawn(async move {
            let result = match blog.latest_posts(limit).await {
                Ok(posts) => Ok(posts.into_iter().map(|post| post.slug).collect()),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load posts for home page");
                    Err(e.user_message().to_string())
                }
            };
            let _ = events.send(HomeEvent::Loaded(result)).await;
        }));
    }

    async fn run(mut self, mut events: mpsc::Receiver<HomeEvent>, snapshots: watch::Sender<HomeSnapshot>) {
        while let Some(event) = events.recv().await {
            self.handle(event);
            snapshots.send_replace(self.snapshot());
        }
    }

    fn handle(&mut self, event: HomeEvent) {
        match event {
            HomeEvent::HeroTick => self.carousel.advance(),
            HomeEvent::RotationTick => {
                // 定时器停止前已入队的tick在弹窗打开后仍可能到达
                if self.rotation.should_autoplay(self.open_post.is_some()) {
                    self.schedule(IndexUpdate::Advance);
                }
            }
            HomeEvent::FadeElapsed(generation) => {
                if self.rotation.complete_transition(generation) {
                    self.fade_timer = None;
                }
            }
            HomeEvent::Loaded(Ok(posts)) => {
                tracing::debug!(posts = posts.len(), "Home posts loaded");
                self.loading = false;
                self.load_task = None;
                self.rotation.reset(posts.len());
                self.posts = posts;
                self.open_post = None;
                self.fade_timer = None;
                self.rotation_timer = None;
                self.sync_autoplay();
            }
            HomeEvent::Loaded(Err(message)) => {
                self.loading = false;
                self.load_task = None;
                self.error = Some(message);
            }
            HomeEvent::Command(command) => self.apply(command),
        }
    }

    fn apply(&mut self, command: HomeCommand) {
        match command {
            HomeCommand::SelectSlide { index } => {
                if !self.carousel.select(index) {
                    tracing::debug!(index, "Ignoring out of range slide");
                }
            }
            HomeCommand::OpenPost { slug } => {
                let Some(index) = self.posts.iter().position(|post| *post == slug) else {
                    tracing::debug!(slug = %slug, "Ignoring unknown post");
                    return;
                };
                self.schedule(IndexUpdate::Jump(index));
                self.open_post = Some(slug);
                self.sync_autoplay();
            }
            HomeCommand::ClosePost => {
                self.open_post = None;
                self.sync_autoplay();
            }
        }
    }

    /// 开始淡出，替换掉尚未完成的切换
    fn schedule(&mut self, update: IndexUpdate) {
        if let Some(generation) = self.rotation.begin_transition(update) {
            self.fade_timer = Some(ScopedTask::after(
                self.settings.fade_duration,
                self.events.clone(),
                HomeEvent::FadeElapsed(generation),
            ));
        }
    }

    fn sync_autoplay(&mut self) {
        let wanted = self.rotation.should_autoplay(self.open_post.is_some());
        if wanted && self.rotation_timer.is_none() {
            self.rotation_timer = Some(ScopedTask::every(
                self.settings.rotation_interval,
                self.events.clone(),
                HomeEvent::RotationTick,
            ));
        } else if !wanted {
            self.rotation_timer = None;
        }
    }

    fn snapshot(&self) -> HomeSnapshot {
        HomeSnapshot {
            loading: self.loading,
            active_slide: self.carousel.active(),
            slide_count: self.carousel.len(),
            post_offset: self.rotation.offset(),
            fading: self.rotation.is_fading(),
            visible_posts: self
                .rotation
                .visible_indices()
                .into_iter()
                .filter_map(|index| self.posts.get(index).cloned())
                .collect(),
            open_post: self.open_post.clone(),
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostView;
    use crate::error::ContentError;
    use crate::localize::HOME_POST;
    use async_trait::async_trait;
    use feelwood_api::ClientError;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;
    use tokio::time::{self, Instant};

    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct FakeBlog {
        slugs: Vec<&'static str>,
        delay: Duration,
        failing: bool,
        completed: Arc<AtomicBool>,
        dropped: Arc<AtomicBool>,
    }

    impl FakeBlog {
        fn with_posts(count: usize) -> Self {
            const SLUGS: [&str; 5] = ["p0", "p1", "p2", "p3", "p4"];
            Self {
                slugs: SLUGS[..count].to_vec(),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl BlogService for FakeBlog {
        async fn list_posts(&self) -> Result<Vec<PostView>, ContentError> {
            unimplemented!()
        }

        async fn latest_posts(&self, limit: usize) -> Result<Vec<PostView>, ContentError> {
            let _guard = DropFlag(self.dropped.clone());
            time::sleep(self.delay).await;
            self.completed.store(true, Ordering::SeqCst);
            if self.failing {
                return Err(ContentError::fetch("posts")(ClientError::Transport("down".into())));
            }
            Ok(self
                .slugs
                .iter()
                .take(limit)
                .filter_map(|slug| {
                    let post = serde_json::from_value(json!({ "_id": slug, "slug": slug })).ok()?;
                    PostView::from_post(&post, HOME_POST, None)
                })
                .collect())
        }

        async fn find_post(&self, _slug: &str) -> Result<PostView, ContentError> {
            unimplemented!()
        }
    }

    fn start(blog: FakeBlog) -> HomeSession {
        HomeSession::start(Arc::new(blog), PresentationSettings::default())
    }

    async fn at(started: Instant, millis: u64) {
        time::sleep_until(started + Duration::from_millis(millis)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_loads_posts_into_snapshot() {
        let session = start(FakeBlog::with_posts(5));
        assert!(session.snapshot().loading);

        let mut snapshots = session.subscribe();
        snapshots.changed().await.unwrap();
        let snapshot = snapshots.borrow().clone();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.slide_count, 3);
        assert_eq!(snapshot.visible_posts, vec!["p0", "p1", "p2", "p3"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hero_autoplay_keeps_cadence_after_manual_select() {
        let started = Instant::now();
        let session = start(FakeBlog::with_posts(1));

        at(started, 3000).await;
        session.send(HomeCommand::SelectSlide { index: 2 }).await.unwrap();
        at(started, 3001).await;
        assert_eq!(session.snapshot().active_slide, 2);

        // 选择不会重置计时，8000ms时照常切换并回绕
        at(started, 8001).await;
        assert_eq!(session.snapshot().active_slide, 0);
        at(started, 16001).await;
        assert_eq!(session.snapshot().active_slide, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_slide_is_ignored() {
        let started = Instant::now();
        let session = start(FakeBlog::with_posts(1));
        session.send(HomeCommand::SelectSlide { index: 7 }).await.unwrap();
        at(started, 10).await;
        assert_eq!(session.snapshot().active_slide, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rotation_fades_before_advancing() {
        let started = Instant::now();
        let session = start(FakeBlog::with_posts(5));

        at(started, 9001).await;
        let snapshot = session.snapshot();
        assert!(snapshot.fading);
        assert_eq!(snapshot.post_offset, 0);

        at(started, 9501).await;
        let snapshot = session.snapshot();
        assert!(!snapshot.fading);
        assert_eq!(snapshot.post_offset, 1);
        assert_eq!(snapshot.visible_posts, vec!["p1", "p2", "p3", "p4"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_post_does_not_rotate() {
        let started = Instant::now();
        let session = start(FakeBlog::with_posts(1));
        at(started, 20_000).await;
        let snapshot = session.snapshot();
        assert_eq!(snapshot.post_offset, 0);
        assert!(!snapshot.fading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_post_jumps_and_suspends_autoplay() {
        let started = Instant::now();
        let session = start(FakeBlog::with_posts(5));

        at(started, 100).await;
        session.send(HomeCommand::OpenPost { slug: "p3".into() }).await.unwrap();
        at(started, 601).await;
        let snapshot = session.snapshot();
        assert_eq!(snapshot.open_post.as_deref(), Some("p3"));
        assert_eq!(snapshot.post_offset, 3);
        assert_eq!(snapshot.visible_posts, vec!["p3", "p4", "p0", "p1"]);

        // 弹窗打开期间不自动轮换
        at(started, 30_000).await;
        assert_eq!(session.snapshot().post_offset, 3);

        session.send(HomeCommand::ClosePost).await.unwrap();
        at(started, 39_501).await;
        let snapshot = session.snapshot();
        assert_eq!(snapshot.open_post, None);
        assert_eq!(snapshot.post_offset, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_rotation_tick_after_open_is_ignored() {
        let (events_tx, mut events_rx) = mpsc::channel(32);
        let mut state = HomeState::new(PresentationSettings::default(), events_tx);
        let slugs = ["p0", "p1", "p2", "p3", "p4"].map(String::from).to_vec();
        state.handle(HomeEvent::Loaded(Ok(slugs)));

        state.handle(HomeEvent::Command(HomeCommand::OpenPost { slug: "p3".into() }));
        state.handle(HomeEvent::RotationTick);

        let event = events_rx.recv().await.unwrap();
        assert!(matches!(event, HomeEvent::FadeElapsed(_)));
        state.handle(event);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.open_post.as_deref(), Some("p3"));
        assert_eq!(snapshot.post_offset, 3);
        assert!(!snapshot.fading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_transition_supersedes_pending_one() {
        let started = Instant::now();
        let session = start(FakeBlog::with_posts(5));

        at(started, 100).await;
        session.send(HomeCommand::OpenPost { slug: "p3".into() }).await.unwrap();
        at(started, 300).await;
        session.send(HomeCommand::OpenPost { slug: "p1".into() }).await.unwrap();

        at(started, 650).await;
        let snapshot = session.snapshot();
        assert!(snapshot.fading);
        assert_eq!(snapshot.post_offset, 0);

        at(started, 801).await;
        let snapshot = session.snapshot();
        assert!(!snapshot.fading);
        assert_eq!(snapshot.post_offset, 1);
        assert_eq!(snapshot.open_post.as_deref(), Some("p1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_post_is_ignored() {
        let started = Instant::now();
        let session = start(FakeBlog::with_posts(3));
        at(started, 10).await;
        session.send(HomeCommand::OpenPost { slug: "missing".into() }).await.unwrap();
        at(started, 20).await;
        let snapshot = session.snapshot();
        assert_eq!(snapshot.open_post, None);
        assert!(!snapshot.fading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_page_load() {
        let blog = FakeBlog {
            delay: Duration::from_secs(5),
            ..FakeBlog::with_posts(3)
        };
        let completed = blog.completed.clone();
        let dropped = blog.dropped.clone();

        let session = start(blog);
        time::sleep(Duration::from_secs(1)).await;
        drop(session);
        time::sleep(Duration::from_secs(10)).await;

        assert!(dropped.load(Ordering::SeqCst));
        assert!(!completed.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_load_reports_error() {
        let session = start(FakeBlog {
            failing: true,
            ..FakeBlog::default()
        });
        let mut snapshots = session.subscribe();
        snapshots.changed().await.unwrap();
        let snapshot = snapshots.borrow().clone();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.error.as_deref(), Some("ไม่สามารถโหลดบทความได้ กรุณาลองใหม่อีกครั้ง"));
        assert!(snapshot.visible_posts.is_empty());
    }

    #[test]
    fn test_command_wire_format() {
        let command: HomeCommand = serde_json::from_str(r#"{"type":"selectSlide","index":2}"#).unwrap();
        assert_eq!(command, HomeCommand::SelectSlide { index: 2 });
        let command: HomeCommand = serde_json::from_str(r#"{"type":"openPost","slug":"oak"}"#).unwrap();
        assert_eq!(command, HomeCommand::OpenPost { slug: "oak".into() });
        let command: HomeCommand = serde_json::from_str(r#"{"type":"closePost"}"#).unwrap();
        assert_eq!(command, HomeCommand::ClosePost);
    }

    #[test]
    fn test_snapshot_wire_format() {
        let value = serde_json::to_value(HomeSnapshot {
            active_slide: 1,
            open_post: Some("oak".into()),
            ..HomeSnapshot::default()
        })
        .unwrap();
        assert_eq!(value["activeSlide"], 1);
        assert_eq!(value["openPost"], "oak");
        assert_eq!(value["visiblePosts"], json!([]));
    }
}
