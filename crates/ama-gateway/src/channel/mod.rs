//! Notification channel
//!
//! One push channel per room session, with deterministic teardown.

mod error;
mod notification;
mod transport;

pub use error::ChannelError;
pub use notification::{ChannelState, NotificationChannel};
pub use transport::{connect_frames, FrameResult};
