//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{IdParseError, QuestionId};

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Question text is required")]
    EmptyQuestionText,

    #[error("Room name is required")]
    EmptyRoomName,

    #[error("Invalid {kind} id: {source}")]
    InvalidId {
        kind: &'static str,
        #[source]
        source: IdParseError,
    },

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Question not found in this room: {0}")]
    QuestionNotFound(QuestionId),
}

impl DomainError {
    /// Get an error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyQuestionText => "EMPTY_QUESTION_TEXT",
            Self::EmptyRoomName => "EMPTY_ROOM_NAME",
            Self::InvalidId { .. } => "INVALID_ID",
            Self::QuestionNotFound(_) => "QUESTION_NOT_FOUND",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyQuestionText | Self::EmptyRoomName | Self::InvalidId { .. }
        )
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::QuestionNotFound(_))
    }

    /// Create an invalid room id error
    pub fn invalid_room_id(source: IdParseError) -> Self {
        Self::InvalidId {
            kind: "room",
            source,
        }
    }

    /// Create an invalid question id error
    pub fn invalid_question_id(source: IdParseError) -> Self {
        Self::InvalidId {
            kind: "question",
            source,
        }
    }
}
