//! Persistent real-time connection.
//!
//! At most one connection exists per process, opened with the current
//! identity's token after login. [`connect`] splits it into a write half
//! ([`ChatSocket`]) handed to the runtime and a read half
//! ([`SocketReader`]) that runs as an independent task. The reader's
//! channel is the only source of externally triggered history updates,
//! so events are forwarded strictly in transport arrival order.

use banter_core::{Identity, Message};
use futures_util::{SinkExt, Stream, StreamExt, stream::SplitSink, stream::SplitStream};
use tokio::{net::TcpStream, sync::mpsc, task::JoinHandle};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message as WsFrame,
};

use crate::{ConnectError, ReadError, SendError};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Events yielded by the read loop, in arrival order.
#[derive(Debug)]
pub enum SocketEvent {
    /// A chat message decoded from the connection.
    Message(Message),

    /// A transient read failure. The loop has already re-armed; a later
    /// frame can still be delivered.
    ReadError(ReadError),

    /// The connection ended. No further events follow. `reason` is
    /// `None` for an orderly close by the peer.
    Closed {
        /// Terminal failure, if the close was not orderly.
        reason: Option<ReadError>,
    },
}

/// Open the persistent connection for `identity`.
///
/// Returns the send capability and the not-yet-started reader. The
/// caller decides where the reader's events go by picking the channel
/// passed to [`SocketReader::spawn`].
pub async fn connect(
    ws_url: &str,
    identity: &Identity,
) -> Result<(ChatSocket, SocketReader), ConnectError> {
    let url = format!("{}/ws?token={}", ws_url.trim_end_matches('/'), identity.token);
    let (stream, _response) = connect_async(&url).await?;
    tracing::debug!(username = %identity.username, "chat connection open");

    let (writer, reader) = stream.split();
    Ok((ChatSocket { writer }, SocketReader { reader }))
}

/// Write half of the persistent connection.
pub struct ChatSocket {
    writer: SplitSink<WsStream, WsFrame>,
}

impl ChatSocket {
    /// Send one message as a JSON text frame. No implicit retry; the
    /// caller surfaces failures to the user.
    pub async fn send(&mut self, message: &Message) -> Result<(), SendError> {
        let json = serde_json::to_string(message)?;
        self.writer.send(WsFrame::Text(json.into())).await?;
        Ok(())
    }
}

/// Read half of the persistent connection, not yet running.
pub struct SocketReader {
    reader: SplitStream<WsStream>,
}

impl SocketReader {
    /// Start the read loop as a tokio task feeding `events`.
    ///
    /// The task ends when the connection does (or when the receiver is
    /// dropped); abort the handle to tear the reader down early, e.g. on
    /// logout.
    pub fn spawn(self, events: mpsc::UnboundedSender<SocketEvent>) -> JoinHandle<()> {
        tokio::spawn(async move {
            read_loop(self.reader, &events).await;
        })
    }
}

/// Decode frames until the connection ends.
///
/// One suspension point per iteration: each completed read yields at
/// most one event. Decode failures re-arm the loop; transport failures
/// and peer close are terminal, otherwise a dead connection would spin
/// on the same error forever.
async fn read_loop<S>(mut frames: S, events: &mpsc::UnboundedSender<SocketEvent>)
where
    S: Stream<Item = Result<WsFrame, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    loop {
        match frames.next().await {
            Some(Ok(WsFrame::Text(text))) => match serde_json::from_str::<Message>(&text) {
                Ok(message) => {
                    if events.send(SocketEvent::Message(message)).is_err() {
                        return;
                    }
                },
                Err(e) => {
                    tracing::warn!("dropping undecodable frame: {e}");
                    if events.send(SocketEvent::ReadError(ReadError::Decode(e))).is_err() {
                        return;
                    }
                },
            },

            // Control frames carry no chat payload.
            Some(Ok(WsFrame::Ping(_) | WsFrame::Pong(_) | WsFrame::Binary(_) | WsFrame::Frame(_))) => {},

            Some(Ok(WsFrame::Close(_))) | None => {
                tracing::info!("chat connection closed by peer");
                let _ = events.send(SocketEvent::Closed { reason: None });
                return;
            },

            Some(Err(e)) => {
                tracing::warn!("chat connection failed: {e}");
                let _ = events.send(SocketEvent::Closed { reason: Some(ReadError::Transport(e)) });
                return;
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use futures_util::stream;
    use tokio_tungstenite::tungstenite::Error as WsError;

    use super::*;

    fn chat_frame(room_id: &str, body: &str) -> Result<WsFrame, WsError> {
        let json = format!(
            r#"{{"type":"chat","sender_username":"bob","content":"{body}","room_id":"{room_id}"}}"#
        );
        Ok(WsFrame::Text(json.into()))
    }

    async fn collect_events(frames: Vec<Result<WsFrame, WsError>>) -> Vec<SocketEvent> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        read_loop(stream::iter(frames), &tx).await;
        drop(tx);

        let mut out = Vec::new();
        while let Some(event) = rx.recv().await {
            out.push(event);
        }
        out
    }

    #[tokio::test]
    async fn deliveries_preserve_arrival_order() {
        let events = collect_events(vec![
            chat_frame("r1", "one"),
            chat_frame("r1", "two"),
            chat_frame("r1", "three"),
        ])
        .await;

        let bodies: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                SocketEvent::Message(m) => Some(m.body.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(bodies, ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn decode_failure_does_not_stop_the_loop() {
        let events = collect_events(vec![
            Ok(WsFrame::Text("not json".to_string().into())),
            chat_frame("r1", "still alive"),
        ])
        .await;

        assert!(matches!(events.first(), Some(SocketEvent::ReadError(ReadError::Decode(_)))));
        assert!(
            matches!(events.get(1), Some(SocketEvent::Message(m)) if m.body == "still alive"),
            "a good frame after a decode failure must still be delivered"
        );
    }

    #[tokio::test]
    async fn transport_failure_is_terminal() {
        let events = collect_events(vec![
            chat_frame("r1", "last words"),
            Err(WsError::ConnectionClosed),
            // Never reached: the loop must stop at the failure.
            chat_frame("r1", "ghost"),
        ])
        .await;

        assert_eq!(events.len(), 2);
        assert!(matches!(
            events.get(1),
            Some(SocketEvent::Closed { reason: Some(ReadError::Transport(_)) })
        ));
    }

    #[tokio::test]
    async fn peer_close_ends_the_loop_cleanly() {
        let events = collect_events(vec![Ok(WsFrame::Close(None))]).await;

        assert_eq!(events.len(), 1);
        assert!(matches!(events.first(), Some(SocketEvent::Closed { reason: None })));
    }

    #[tokio::test]
    async fn control_frames_are_skipped() {
        let events =
            collect_events(vec![Ok(WsFrame::Ping(Vec::new().into())), chat_frame("r1", "hi")])
                .await;

        let deliveries =
            events.iter().filter(|e| matches!(e, SocketEvent::Message(_))).count();
        assert_eq!(deliveries, 1);
    }
}
