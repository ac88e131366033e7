//! Room sessions
//!
//! The scoped context a View holds for the room it is showing.

mod room;

pub use room::{RoomSession, SessionError};
