//! # ama-core
//!
//! Domain layer for the AMA room client: questions, rooms, identifiers, and
//! the events a room's notification channel delivers.
//! This crate has zero dependencies on infrastructure (HTTP, WebSocket, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{parse_server_timestamp, Question, QuestionPage, Room};
pub use error::DomainError;
pub use events::{EventCategory, RoomEvent};
pub use validation::not_blank;
pub use value_objects::{IdParseError, QuestionId, RoomId};
