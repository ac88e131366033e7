//! Wire-to-domain mappers
//!
//! Converts response DTOs into domain entities. Identifiers are validated
//! here; a response carrying an unusable id is treated as undecodable.

use ama_core::{parse_server_timestamp, DomainError, Question, QuestionId, QuestionPage, Room, RoomId};
use serde_json::Value;

use super::responses::{QuestionListResponse, QuestionResponse, RoomResponse};

// ============================================================================
// Room Mappers
// ============================================================================

impl TryFrom<RoomResponse> for Room {
    type Error = DomainError;

    fn try_from(response: RoomResponse) -> Result<Self, Self::Error> {
        let id = RoomId::parse(&response.id).map_err(DomainError::invalid_room_id)?;

        Ok(Self {
            id,
            name: response.name,
            created_at: response.created_at.as_deref().and_then(parse_server_timestamp),
            updated_at: response.updated_at.as_deref().and_then(parse_server_timestamp),
        })
    }
}

// ============================================================================
// Question Mappers
// ============================================================================

impl QuestionResponse {
    /// Map into a domain question, defaulting the room to the one requested
    pub fn into_question(self, requested_room: &RoomId) -> Result<Question, DomainError> {
        let id = QuestionId::parse(&self.id).map_err(DomainError::invalid_question_id)?;
        let room_id = match self.room_id.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                RoomId::parse(raw).map_err(DomainError::invalid_room_id)?
            }
            _ => requested_room.clone(),
        };

        Ok(Question {
            id,
            room_id,
            text: self.text,
            reaction_count: self.reaction_count,
            is_answered: self.answered,
        })
    }
}

impl QuestionListResponse {
    /// Map a bulk-fetch body into a page for `requested_room`
    pub fn into_page(self, requested_room: &RoomId) -> Result<QuestionPage, DomainError> {
        let questions = self
            .list
            .unwrap_or_default()
            .into_iter()
            .map(|item| item.into_question(requested_room))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuestionPage {
            questions,
            total: self.total,
        })
    }
}

// ============================================================================
// Error Bodies
// ============================================================================

/// Best-effort human readable message from an error response body
///
/// The service answers errors with plain text (`Room not found`), but a JSON
/// `{"message": ..}` or `{"error": ..}` body is understood too.
pub fn extract_error_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        let message = value
            .get("message")
            .or_else(|| value.get("error").and_then(|e| e.get("message")))
            .or_else(|| value.get("error"))
            .and_then(Value::as_str);
        if let Some(message) = message {
            return message.to_string();
        }
    }

    trimmed.to_string()
}
