//! This client's own reactions.
//!
//! Whether *this* client has reacted to a question cannot be recovered from
//! the shared reaction count, so it is tracked here and nowhere else.

use ama_core::QuestionId;
use std::collections::HashSet;

/// The command a reaction toggle should issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionToggle {
    Add,
    Remove,
}

impl ReactionToggle {
    /// The flag value to store once the command succeeds
    #[must_use]
    pub const fn reacted_after(self) -> bool {
        matches!(self, Self::Add)
    }
}

/// Per-question "reacted" flags for the local client
#[derive(Debug, Clone, Default)]
pub struct ReactionState {
    reacted: HashSet<QuestionId>,
}

impl ReactionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_reacted(&self, id: &QuestionId) -> bool {
        self.reacted.contains(id)
    }

    /// Which command toggling `id` should send
    pub fn toggle_for(&self, id: &QuestionId) -> ReactionToggle {
        if self.is_reacted(id) {
            ReactionToggle::Remove
        } else {
            ReactionToggle::Add
        }
    }

    /// Record the outcome of a successful add/remove, returning whether it changed
    pub fn set(&mut self, id: &QuestionId, reacted: bool) -> bool {
        if reacted {
            self.reacted.insert(id.clone())
        } else {
            self.reacted.remove(id)
        }
    }

    pub fn len(&self) -> usize {
        self.reacted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reacted.is_empty()
    }
}
