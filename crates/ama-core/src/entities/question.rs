//! Question entity - a question posted into a room

use crate::value_objects::{QuestionId, RoomId};

/// Question entity
///
/// `reaction_count` is the server-aggregated total across all clients; whether
/// *this* client has reacted is tracked separately and never derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub room_id: RoomId,
    pub text: String,
    pub reaction_count: u64,
    pub is_answered: bool,
}

impl Question {
    /// Create a freshly posted question (no reactions, unanswered)
    pub fn new(id: QuestionId, room_id: RoomId, text: String) -> Self {
        Self {
            id,
            room_id,
            text,
            reaction_count: 0,
            is_answered: false,
        }
    }

    /// Set the reaction count, returning whether it changed
    pub fn set_reaction_count(&mut self, count: u64) -> bool {
        if self.reaction_count == count {
            return false;
        }
        self.reaction_count = count;
        true
    }

    /// Mark the question as answered, returning whether it changed
    ///
    /// There is no way back: an answered question stays answered.
    pub fn mark_answered(&mut self) -> bool {
        if self.is_answered {
            return false;
        }
        self.is_answered = true;
        true
    }
}

/// A room's question list as returned by a bulk fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: u64,
}
