//! Question store.
//!
//! Holds one room's questions keyed by id, in insertion order, plus the
//! room's creation total. Questions are never removed. Ordering for display
//! is computed on read so it always reflects the latest counts.

use ama_core::{Question, QuestionId, RoomId};
use std::collections::HashMap;

/// Result of a field update against the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreUpdate {
    /// The stored value changed
    Changed,
    /// The question already had that value
    Unchanged,
    /// No question with that id is stored
    UnknownTarget,
}

/// Read-only view of the store, ordered for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSnapshot {
    /// Questions by reaction count descending, ties in insertion order
    pub questions: Vec<Question>,
    /// Questions ever created in the room
    pub total: u64,
}

impl QuestionSnapshot {
    /// Ids in display order
    pub fn ids(&self) -> Vec<&str> {
        self.questions.iter().map(|q| q.id.as_str()).collect()
    }
}

/// In-memory question collection for one room
#[derive(Debug, Clone)]
pub struct QuestionStore {
    room_id: RoomId,
    /// Insertion order
    questions: Vec<Question>,
    /// Position of each id in `questions`
    index: HashMap<QuestionId, usize>,
    total: u64,
}

impl QuestionStore {
    /// Create an empty store for a room
    #[must_use]
    pub fn new(room_id: RoomId) -> Self {
        Self {
            room_id,
            questions: Vec::new(),
            index: HashMap::new(),
            total: 0,
        }
    }

    /// The room this store belongs to
    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    /// Snapshot ordered by `reaction_count` descending, ties by insertion order
    pub fn get(&self) -> QuestionSnapshot {
        let mut questions = self.questions.clone();
        // sort_by is stable, so equal counts keep insertion order
        questions.sort_by(|a, b| b.reaction_count.cmp(&a.reaction_count));

        QuestionSnapshot {
            questions,
            total: self.total,
        }
    }

    /// Look up a single question
    pub fn get_question(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|&pos| &self.questions[pos])
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Insert a newly created question
    ///
    /// Returns `false` without touching anything if the id is already stored,
    /// so a creation observed twice is only counted once.
    pub fn upsert_created(&mut self, question: Question) -> bool {
        if self.index.contains_key(&question.id) {
            return false;
        }
        self.insert(question);
        self.total += 1;
        true
    }

    /// Set the absolute reaction count of a question
    pub fn set_reaction_count(&mut self, id: &QuestionId, count: u64) -> StoreUpdate {
        match self.question_mut(id) {
            Some(question) => {
                if question.set_reaction_count(count) {
                    StoreUpdate::Changed
                } else {
                    StoreUpdate::Unchanged
                }
            }
            None => StoreUpdate::UnknownTarget,
        }
    }

    /// Mark a question as answered
    pub fn set_answered(&mut self, id: &QuestionId) -> StoreUpdate {
        match self.question_mut(id) {
            Some(question) => {
                if question.mark_answered() {
                    StoreUpdate::Changed
                } else {
                    StoreUpdate::Unchanged
                }
            }
            None => StoreUpdate::UnknownTarget,
        }
    }

    /// Merge a bulk-fetched question list
    ///
    /// Unknown questions are appended in the fetched order; known ones take
    /// the fetched shared fields. The total never moves backwards and never
    /// drops below the number of stored questions. Returns whether anything
    /// changed.
    pub fn seed(&mut self, questions: Vec<Question>, total: u64) -> bool {
        let mut changed = false;

        for fetched in questions {
            match self.question_mut(&fetched.id) {
                Some(existing) => {
                    changed |= existing.set_reaction_count(fetched.reaction_count);
                    if fetched.is_answered {
                        changed |= existing.mark_answered();
                    }
                }
                None => {
                    self.insert(fetched);
                    changed = true;
                }
            }
        }

        let total = total.max(self.total).max(self.questions.len() as u64);
        if total != self.total {
            self.total = total;
            changed = true;
        }

        changed
    }

    fn insert(&mut self, question: Question) {
        self.index.insert(question.id.clone(), self.questions.len());
        self.questions.push(question);
    }

    fn question_mut(&mut self, id: &QuestionId) -> Option<&mut Question> {
        let pos = *self.index.get(id)?;
        self.questions.get_mut(pos)
    }
}
