//! Notification protocol
//!
//! Defines the JSON frames a room channel carries and how they map to
//! [`ama_core::RoomEvent`].

mod error;
mod messages;

pub use error::ProtocolError;
pub use messages::{parse_frame, NotificationMessage, NotificationValue};
