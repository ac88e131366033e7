//! Domain entities - core business objects

mod question;
mod room;

pub use question::{Question, QuestionPage};
pub use room::{parse_server_timestamp, Room};
