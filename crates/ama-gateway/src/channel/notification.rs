//! Room notification channel
//!
//! A background pump reads frames from the transport, parses them, and feeds
//! an ordered unbounded queue. The owning session is the queue's only reader.

use ama_common::EndpointConfig;
use ama_core::{RoomEvent, RoomId};
use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::error::ChannelError;
use super::transport::{connect_frames, FrameResult};
use crate::protocol::parse_frame;

/// Channel lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// The pump is reading from the transport
    Open,
    /// The transport ended; already queued events can still be received
    Disconnected,
    /// Closed locally; nothing will be received again
    Closed,
}

/// Notification channel for a single room
pub struct NotificationChannel {
    room_id: RoomId,
    events: mpsc::UnboundedReceiver<RoomEvent>,
    pump: JoinHandle<()>,
    closed: bool,
}

impl NotificationChannel {
    /// Subscribe to a room's notifications over WebSocket
    pub async fn subscribe(endpoints: &EndpointConfig, room_id: &RoomId) -> Result<Self, ChannelError> {
        Self::connect(&endpoints.subscribe_url(room_id), room_id.clone()).await
    }

    /// Connect to an explicit subscribe URL
    pub async fn connect(url: &str, room_id: RoomId) -> Result<Self, ChannelError> {
        let frames = connect_frames(url).await?;
        Ok(Self::from_stream(room_id, frames))
    }

    /// Build a channel over any frame stream
    ///
    /// Spawns the pump, so this must be called inside a Tokio runtime.
    pub fn from_stream<S>(room_id: RoomId, transport: S) -> Self
    where
        S: Stream<Item = FrameResult> + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let pump = tokio::spawn(pump_loop(room_id.clone(), transport, tx));

        info!(room_id = %room_id, "Notification channel opened");

        Self {
            room_id,
            events: rx,
            pump,
            closed: false,
        }
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    pub fn state(&self) -> ChannelState {
        if self.closed {
            ChannelState::Closed
        } else if self.pump.is_finished() {
            ChannelState::Disconnected
        } else {
            ChannelState::Open
        }
    }

    /// Wait for the next event
    ///
    /// Returns `None` once the channel is closed, or once it disconnected and
    /// every queued event has been received. Cancel safe.
    pub async fn recv(&mut self) -> Option<RoomEvent> {
        if self.closed {
            return None;
        }
        self.events.recv().await
    }

    /// Take the next queued event without waiting
    pub fn try_recv(&mut self) -> Option<RoomEvent> {
        if self.closed {
            return None;
        }
        self.events.try_recv().ok()
    }

    /// Tear the channel down
    ///
    /// Stops the pump, closes the queue, and discards anything still buffered.
    /// Once this returns no event is delivered. Calling it again is a no-op.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        self.pump.abort();
        self.events.close();
        let mut discarded = 0usize;
        while self.events.try_recv().is_ok() {
            discarded += 1;
        }

        info!(room_id = %self.room_id, discarded, "Notification channel closed");
    }
}

impl Drop for NotificationChannel {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationChannel")
            .field("room_id", &self.room_id)
            .field("state", &self.state())
            .finish()
    }
}

/// Read frames until the transport ends or the queue's reader goes away
async fn pump_loop<S>(room_id: RoomId, transport: S, tx: mpsc::UnboundedSender<RoomEvent>)
where
    S: Stream<Item = FrameResult> + Send,
{
    let mut transport = std::pin::pin!(transport);

    while let Some(frame) = transport.next().await {
        let text = match frame {
            Ok(text) => text,
            Err(e) => {
                warn!(room_id = %room_id, error = %e, "Notification transport failed");
                break;
            }
        };

        match parse_frame(&text) {
            Ok(event) => {
                if tx.send(event).is_err() {
                    debug!(room_id = %room_id, "Notification queue closed, stopping pump");
                    return;
                }
            }
            Err(e) => {
                warn!(room_id = %room_id, error = %e, frame = %text, "Dropping malformed notification");
            }
        }
    }

    info!(room_id = %room_id, "Notification channel disconnected");
}
