//! Notification message format
//!
//! Every frame on a room channel is one JSON object:
//!
//! ```json
//! { "category": "question_reaction_increase", "value": { "id": "...", "count": 3 } }
//! ```
//!
//! `text` is only meaningful for `question_created`, `count` only for the two
//! reaction categories. Counts are absolute.

use ama_core::{EventCategory, QuestionId, RoomEvent};
use serde::{Deserialize, Serialize};

use super::error::ProtocolError;

/// Raw notification as it travels over the socket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub category: String,
    pub value: NotificationValue,
}

/// Notification payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationValue {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Signed so a negative count is reported as such rather than as a type error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl NotificationMessage {
    /// Convert into a typed room event
    pub fn into_event(self) -> Result<RoomEvent, ProtocolError> {
        let category = EventCategory::from_str(&self.category)
            .ok_or(ProtocolError::UnknownCategory(self.category))?;
        let id = QuestionId::parse(&self.value.id)?;

        let event = match category {
            EventCategory::QuestionCreated => RoomEvent::QuestionCreated {
                id,
                text: self.value.text.ok_or(ProtocolError::MissingField {
                    category,
                    field: "text",
                })?,
            },
            EventCategory::QuestionReactionIncrease => RoomEvent::ReactionIncreased {
                id,
                count: required_count(category, self.value.count)?,
            },
            EventCategory::QuestionReactionDecrease => RoomEvent::ReactionDecreased {
                id,
                count: required_count(category, self.value.count)?,
            },
            EventCategory::QuestionAnswered => RoomEvent::QuestionAnswered { id },
        };

        Ok(event)
    }
}

impl From<&RoomEvent> for NotificationMessage {
    fn from(event: &RoomEvent) -> Self {
        let (text, count) = match event {
            RoomEvent::QuestionCreated { text, .. } => (Some(text.clone()), None),
            RoomEvent::ReactionIncreased { count, .. } | RoomEvent::ReactionDecreased { count, .. } => {
                (None, Some(i64::try_from(*count).unwrap_or(i64::MAX)))
            }
            RoomEvent::QuestionAnswered { .. } => (None, None),
        };

        Self {
            category: event.category().as_str().to_string(),
            value: NotificationValue {
                id: event.question_id().to_string(),
                text,
                count,
            },
        }
    }
}

fn required_count(category: EventCategory, count: Option<i64>) -> Result<u64, ProtocolError> {
    let count = count.ok_or(ProtocolError::MissingField {
        category,
        field: "count",
    })?;
    u64::try_from(count).map_err(|_| ProtocolError::NegativeCount(count))
}

/// Parse one text frame into a room event
pub fn parse_frame(frame: &str) -> Result<RoomEvent, ProtocolError> {
    serde_json::from_str::<NotificationMessage>(frame)?.into_event()
}
