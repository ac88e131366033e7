//! Command services
//!
//! The traits the room session depends on, and their HTTP implementation.

mod http;
mod ports;

pub use http::HttpCommandClient;
pub use ports::{CommandService, QuestionFetcher};
