//! Command ports
//!
//! The session depends on these traits rather than on the HTTP client so a
//! test double (or another transport) can stand in.

use ama_common::ClientResult;
use ama_core::{Question, QuestionId, QuestionPage, Room, RoomId};
use async_trait::async_trait;

// ============================================================================
// Command Service
// ============================================================================

/// Fire-and-confirm mutations against the AMA service
///
/// A successful return only means the service accepted the command; the
/// authoritative state change arrives later as a notification.
#[async_trait]
pub trait CommandService: Send + Sync {
    /// Create a room
    async fn create_room(&self, name: &str) -> ClientResult<Room>;

    /// Post a question to a room
    async fn create_question(&self, room_id: &RoomId, text: &str) -> ClientResult<Question>;

    /// Add the caller's reaction to a question
    async fn add_reaction(&self, room_id: &RoomId, question_id: &QuestionId) -> ClientResult<()>;

    /// Remove the caller's reaction from a question
    async fn remove_reaction(&self, room_id: &RoomId, question_id: &QuestionId)
        -> ClientResult<()>;

    /// Mark a question as answered
    ///
    /// Changes nothing locally; the answered notification does.
    async fn mark_answered(&self, room_id: &RoomId, question_id: &QuestionId) -> ClientResult<()>;
}

// ============================================================================
// Bulk Fetch
// ============================================================================

#[async_trait]
pub trait QuestionFetcher: Send + Sync {
    /// Fetch every question of a room, used once to seed a session
    async fn fetch_questions(&self, room_id: &RoomId) -> ClientResult<QuestionPage>;
}
