//! # ama-service
//!
//! Command client for the AMA service: create rooms and questions, add and
//! remove reactions, and bulk-fetch a room's questions.
//!
//! Wire payloads are snake_case DTOs; translating them into the domain model
//! is a pure mapping in [`dto`].

pub mod dto;
pub mod services;

pub use dto::{CreateQuestionRequest, CreateRoomRequest};
pub use services::{CommandService, HttpCommandClient, QuestionFetcher};
