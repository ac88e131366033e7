//! Room events - changes pushed to every viewer of a room

mod room_event;

pub use room_event::{EventCategory, RoomEvent};
