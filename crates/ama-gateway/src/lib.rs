//! # ama-gateway
//!
//! Realtime side of the AMA client: the per-room notification channel, its
//! wire protocol, and the room session that reconciles notifications with
//! command results.

pub mod channel;
pub mod protocol;
pub mod session;

pub use channel::{ChannelError, ChannelState, NotificationChannel};
pub use protocol::{parse_frame, NotificationMessage, ProtocolError};
pub use session::{RoomSession, SessionError};
