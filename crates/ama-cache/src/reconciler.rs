//! Reconciler.
//!
//! Folds two unordered inputs into one room's [`QuestionStore`]:
//!
//! - results of this client's own commands (question created, reaction toggled)
//! - room events pushed by the notification channel
//!
//! Every merge is idempotent, so a creation seen both as a command result and
//! as a `QuestionCreated` event converges regardless of arrival order. Shared
//! fields (`reaction_count`, `is_answered`) are only ever written from room
//! events; a command result never overrides or rolls back a later event.

use ama_core::{Question, QuestionId, QuestionPage, RoomEvent, RoomId};
use tracing::{debug, trace, warn};

use crate::reactions::{ReactionState, ReactionToggle};
use crate::store::{QuestionSnapshot, QuestionStore, StoreUpdate};

/// What a single merge did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// State changed
    Applied,
    /// The creation was already known; nothing changed
    Duplicate,
    /// The target already had this value
    Unchanged,
    /// The target question is not in the store; dropped
    UnknownTarget,
    /// The question belongs to another room; dropped
    ForeignRoom,
}

impl MergeOutcome {
    #[inline]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl From<StoreUpdate> for MergeOutcome {
    fn from(update: StoreUpdate) -> Self {
        match update {
            StoreUpdate::Changed => Self::Applied,
            StoreUpdate::Unchanged => Self::Unchanged,
            StoreUpdate::UnknownTarget => Self::UnknownTarget,
        }
    }
}

/// Merge logic for one room
#[derive(Debug, Clone)]
pub struct Reconciler {
    store: QuestionStore,
    reactions: ReactionState,
    /// Bumped on every applied merge
    revision: u64,
}

impl Reconciler {
    /// Create a reconciler over an empty store
    #[must_use]
    pub fn new(room_id: RoomId) -> Self {
        Self {
            store: QuestionStore::new(room_id),
            reactions: ReactionState::new(),
            revision: 0,
        }
    }

    pub fn room_id(&self) -> &RoomId {
        self.store.room_id()
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    pub fn reactions(&self) -> &ReactionState {
        &self.reactions
    }

    /// Ordered snapshot for rendering
    pub fn snapshot(&self) -> QuestionSnapshot {
        self.store.get()
    }

    /// Monotonic change counter; equal revisions mean equal rendered state
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_reacted(&self, id: &QuestionId) -> bool {
        self.reactions.is_reacted(id)
    }

    /// Which reaction command a toggle on `id` should send
    pub fn toggle_for(&self, id: &QuestionId) -> ReactionToggle {
        self.reactions.toggle_for(id)
    }

    /// Seed from a bulk fetch
    pub fn seed(&mut self, page: QuestionPage) -> MergeOutcome {
        let room_id = self.store.room_id().clone();
        let (own, foreign): (Vec<_>, Vec<_>) = page
            .questions
            .into_iter()
            .partition(|q| q.room_id == room_id);

        if !foreign.is_empty() {
            warn!(
                room_id = %room_id,
                dropped = foreign.len(),
                "Bulk fetch returned questions from another room"
            );
        }

        let count = own.len();
        let outcome = if self.store.seed(own, page.total) {
            MergeOutcome::Applied
        } else {
            MergeOutcome::Unchanged
        };

        debug!(room_id = %room_id, questions = count, total = self.store.total(), "Store seeded");
        self.finish(outcome)
    }

    /// Merge a room event from the notification channel
    pub fn apply_event(&mut self, event: &RoomEvent) -> MergeOutcome {
        let outcome = match event {
            RoomEvent::QuestionCreated { id, text } => {
                let question = Question::new(id.clone(), self.store.room_id().clone(), text.clone());
                if self.store.upsert_created(question) {
                    MergeOutcome::Applied
                } else {
                    MergeOutcome::Duplicate
                }
            }
            RoomEvent::ReactionIncreased { id, count } | RoomEvent::ReactionDecreased { id, count } => {
                self.store.set_reaction_count(id, *count).into()
            }
            RoomEvent::QuestionAnswered { id } => self.store.set_answered(id).into(),
        };

        if outcome == MergeOutcome::UnknownTarget {
            // Expected when an update overtakes the creation it refers to.
            debug!(
                question_id = %event.question_id(),
                category = %event.category(),
                "Dropping event for unknown question"
            );
        } else {
            trace!(
                question_id = %event.question_id(),
                category = %event.category(),
                outcome = ?outcome,
                "Room event merged"
            );
        }

        self.finish(outcome)
    }

    /// Merge the question returned by this client's own create command
    pub fn apply_local_created(&mut self, question: Question) -> MergeOutcome {
        if &question.room_id != self.store.room_id() {
            warn!(
                room_id = %self.store.room_id(),
                question_room_id = %question.room_id,
                question_id = %question.id,
                "Ignoring created question from another room"
            );
            return MergeOutcome::ForeignRoom;
        }

        let id = question.id.clone();
        let outcome = if self.store.upsert_created(question) {
            MergeOutcome::Applied
        } else {
            MergeOutcome::Duplicate
        };

        trace!(question_id = %id, outcome = ?outcome, "Local creation merged");
        self.finish(outcome)
    }

    /// Record that this client's add/remove reaction command succeeded
    ///
    /// Only the local flag moves; the shared count waits for the room event.
    pub fn apply_local_reaction(&mut self, id: &QuestionId, reacted: bool) -> MergeOutcome {
        let outcome = if self.reactions.set(id, reacted) {
            MergeOutcome::Applied
        } else {
            MergeOutcome::Unchanged
        };

        trace!(question_id = %id, reacted, outcome = ?outcome, "Local reaction merged");
        self.finish(outcome)
    }

    fn finish(&mut self, outcome: MergeOutcome) -> MergeOutcome {
        if outcome.is_applied() {
            self.revision += 1;
        }
        outcome
    }
}
