//! WebSocket transport
//!
//! Adapts a `tokio-tungstenite` stream into the text-frame stream the channel
//! pump consumes.

use futures_util::{future, Stream, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info};

use super::error::ChannelError;

/// Text frames of a notification socket
pub type FrameResult = Result<String, ChannelError>;

/// Open a WebSocket and expose its text frames
///
/// Ping, pong, and binary frames are skipped. The stream ends when the peer
/// closes the socket.
pub async fn connect_frames(url: &str) -> Result<impl Stream<Item = FrameResult> + Send, ChannelError> {
    if !(url.starts_with("ws://") || url.starts_with("wss://")) {
        return Err(ChannelError::InvalidUrl(url.to_string()));
    }

    let (socket, response) = connect_async(url)
        .await
        .map_err(|e| ChannelError::connect(url, e))?;

    info!(url = %url, status = %response.status(), "Notification socket connected");

    let frames = socket.filter_map(|message| {
        future::ready(match message {
            Ok(Message::Text(text)) => Some(Ok(text.to_string())),
            Ok(Message::Close(frame)) => {
                debug!(frame = ?frame, "Notification socket closed by peer");
                None
            }
            Ok(_) => None,
            Err(e) => Some(Err(ChannelError::transport(e))),
        })
    });

    Ok(frames)
}
