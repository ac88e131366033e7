//! Room event definitions
//!
//! These are the typed form of the notifications a room's channel delivers.
//! Reaction events carry the new absolute count, never a delta.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::QuestionId;

/// Notification categories as named on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    QuestionCreated,
    QuestionReactionIncrease,
    QuestionReactionDecrease,
    QuestionAnswered,
}

impl EventCategory {
    /// Get the string representation of the category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuestionCreated => "question_created",
            Self::QuestionReactionIncrease => "question_reaction_increase",
            Self::QuestionReactionDecrease => "question_reaction_decrease",
            Self::QuestionAnswered => "question_answered",
        }
    }

    /// Parse a category from a string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "question_created" => Some(Self::QuestionCreated),
            "question_reaction_increase" => Some(Self::QuestionReactionIncrease),
            "question_reaction_decrease" => Some(Self::QuestionReactionDecrease),
            "question_answered" => Some(Self::QuestionAnswered),
            _ => None,
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single change observed on a room's notification channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    /// A question was posted (by any client, including this one)
    QuestionCreated { id: QuestionId, text: String },
    /// Reaction count went up; `count` is the new total
    ReactionIncreased { id: QuestionId, count: u64 },
    /// Reaction count went down; `count` is the new total
    ReactionDecreased { id: QuestionId, count: u64 },
    /// The question was marked as answered
    QuestionAnswered { id: QuestionId },
}

impl RoomEvent {
    /// The question this event targets
    pub fn question_id(&self) -> &QuestionId {
        match self {
            Self::QuestionCreated { id, .. }
            | Self::ReactionIncreased { id, .. }
            | Self::ReactionDecreased { id, .. }
            | Self::QuestionAnswered { id } => id,
        }
    }

    /// The wire category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            Self::QuestionCreated { .. } => EventCategory::QuestionCreated,
            Self::ReactionIncreased { .. } => EventCategory::QuestionReactionIncrease,
            Self::ReactionDecreased { .. } => EventCategory::QuestionReactionDecrease,
            Self::QuestionAnswered { .. } => EventCategory::QuestionAnswered,
        }
    }

    /// The absolute reaction count carried by reaction events
    pub fn reaction_count(&self) -> Option<u64> {
        match self {
            Self::ReactionIncreased { count, .. } | Self::ReactionDecreased { count, .. } => {
                Some(*count)
            }
            _ => None,
        }
    }
}
