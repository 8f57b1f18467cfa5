use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use feelwood_service::{HomeCommand, HomeSession, HomeSnapshot};
use futures_util::{Sink, SinkExt, Stream, StreamExt};

use crate::AppState;

/// 首页实时会话 `/live/home`
///
/// 每个连接启动一个 [`HomeSession`]，客户端发送 `selectSlide`、`openPost`、`closePost`
/// 命令，服务端在状态变化时推送JSON快照。连接断开时会话被drop，定时器和加载任务一起中止。
pub async fn live_home(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_live_home(socket, state))
}

async fn handle_live_home(socket: WebSocket, state: AppState) {
    let session = HomeSession::start(state.blog_service.clone(), state.presentation.clone());
    let (sender, receiver) = socket.split();
    run_live_session(&session, sender, receiver).await;
    tracing::debug!("Live home connection closed");
}

/// 转发命令并推送快照，直到连接关闭或会话停止
async fn run_live_session<S, R>(session: &HomeSession, mut sender: S, mut receiver: R)
where
    S: Sink<Message> + Unpin,
    R: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    let mut snapshots = session.subscribe();

    let initial = snapshots.borrow_and_update().clone();
    if send_snapshot(&mut sender, &initial).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                if send_snapshot(&mut sender, &snapshot).await.is_err() {
                    break;
                }
            }
            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => match serde_json::from_str::<HomeCommand>(&text) {
                        Ok(command) => {
                            if session.send(command).await.is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::debug!(error = %e, "Ignoring malformed live command");
                        }
                    },
                    Some(Ok(Message::Ping(data))) => {
                        if sender.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Pong(_))) | Some(Ok(Message::Binary(_))) => {}
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                }
            }
        }
    }
}

async fn send_snapshot<S>(sender: &mut S, snapshot: &HomeSnapshot) -> Result<(), S::Error>
where
    S: Sink<Message> + Unpin,
{
    let payload = match serde_json::to_string(snapshot) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode home snapshot");
            return Ok(());
        }
    };
    sender.send(Message::Text(payload)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{state_with, StubClient};
    use feelwood_service::content::queries;
    use futures_util::{sink, stream};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tokio::sync::mpsc;

    async fn next_snapshot(outgoing: &mut mpsc::UnboundedReceiver<Message>) -> Value {
        match outgoing.recv().await {
            Some(Message::Text(text)) => serde_json::from_str(&text).unwrap(),
            other => panic!("expected a snapshot, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_session_applies_commands_until_close() {
        let state = state_with(
            StubClient::new().respond(
                queries::LATEST_POSTS,
                json!([{ "_id": "a", "slug": "a" }, { "_id": "b", "slug": "b" }]),
            ),
        );
        let session = HomeSession::start(state.blog_service.clone(), state.presentation.clone());

        let (incoming_tx, incoming_rx) = mpsc::unbounded_channel::<Result<Message, axum::Error>>();
        let (outgoing_tx, mut outgoing) = mpsc::unbounded_channel::<Message>();
        let receiver = Box::pin(stream::unfold(incoming_rx, |mut rx| async move {
            rx.recv().await.map(|msg| (msg, rx))
        }));
        let sender = Box::pin(sink::unfold(outgoing_tx, |tx, msg: Message| async move {
            tx.send(msg).map_err(|_| ())?;
            Ok::<_, ()>(tx)
        }));

        let running = tokio::spawn(async move {
            run_live_session(&session, sender, receiver).await;
        });

        let initial = next_snapshot(&mut outgoing).await;
        assert_eq!(initial["activeSlide"], 0);

        // 无法解析的命令被忽略，后续命令照常处理
        incoming_tx.send(Ok(Message::Text("not json".to_string()))).unwrap();
        incoming_tx
            .send(Ok(Message::Text(r#"{"type":"selectSlide","index":2}"#.to_string())))
            .unwrap();

        let mut selected = false;
        for _ in 0..5 {
            if next_snapshot(&mut outgoing).await["activeSlide"] == 2 {
                selected = true;
                break;
            }
        }
        assert!(selected);

        incoming_tx.send(Ok(Message::Close(None))).unwrap();
        tokio::time::timeout(Duration::from_secs(1), running)
            .await
            .unwrap()
            .unwrap();
    }
}
