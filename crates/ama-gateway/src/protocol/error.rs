//! Notification parse errors

use ama_core::{EventCategory, IdParseError};

/// A frame that could not be turned into a room event
///
/// These never tear the channel down; the frame is logged and skipped.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("invalid notification JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("unknown notification category: {0}")]
    UnknownCategory(String),

    #[error("{category} notification is missing `{field}`")]
    MissingField {
        category: EventCategory,
        field: &'static str,
    },

    #[error("negative reaction count: {0}")]
    NegativeCount(i64),

    #[error("invalid question id: {0}")]
    InvalidId(#[from] IdParseError),
}
