//! Test fixtures and data generators
//!
//! Raw notification frames, including malformed ones, for injecting through
//! the fake service.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub fn unique_room_name() -> String {
    format!("Room {}", unique_suffix())
}

pub fn created_frame(id: &str, text: &str) -> String {
    serde_json::json!({
        "category": "question_created",
        "value": { "id": id, "text": text }
    })
    .to_string()
}

pub fn reaction_frame(id: &str, count: i64) -> String {
    serde_json::json!({
        "category": "question_reaction_increase",
        "value": { "id": id, "count": count }
    })
    .to_string()
}

/// Frames the channel must drop without disconnecting
pub fn malformed_frames() -> Vec<String> {
    vec![
        "{not json".to_string(),
        r#"{"category":"question_deleted","value":{"id":"x"}}"#.to_string(),
        r#"{"category":"question_created","value":{"id":"x"}}"#.to_string(),
        reaction_frame("x", -3),
    ]
}
