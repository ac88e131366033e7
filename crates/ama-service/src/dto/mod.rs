//! Data Transfer Objects (DTOs)
//!
//! Request and response bodies exchanged with the AMA service.

mod mappers;
mod requests;
mod responses;

pub use mappers::extract_error_message;
pub use requests::{CreateQuestionRequest, CreateRoomRequest};
pub use responses::{QuestionListResponse, QuestionResponse, RoomResponse};
