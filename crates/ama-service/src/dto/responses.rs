//! Response DTOs returned by the AMA service
//!
//! Field names follow the service's snake_case. The bulk-fetch endpoint has
//! been seen serializing list items with Go-style field names (`ID`,
//! `ReactionCount`, ...), so those are accepted as aliases.

use serde::Deserialize;

/// Room returned by create-room
#[derive(Debug, Clone, Deserialize)]
pub struct RoomResponse {
    pub id: String,
    /// Older service builds call this `theme`
    #[serde(alias = "theme")]
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Question returned by create-question and inside bulk-fetch lists
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionResponse {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "Text")]
    pub text: String,
    /// Omitted by some endpoints; the requested room is assumed then
    #[serde(default, alias = "RoomID")]
    pub room_id: Option<String>,
    #[serde(default, alias = "ReactionCount")]
    pub reaction_count: u64,
    #[serde(default, alias = "Answered")]
    pub answered: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Bulk-fetch body
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionListResponse {
    /// `null` when the room has no questions yet
    #[serde(default)]
    pub list: Option<Vec<QuestionResponse>>,
    #[serde(default)]
    pub total: u64,
}
