//! Integration test utilities for the AMA client
//!
//! This crate runs the real command client and notification channel against
//! an in-process fake of the AMA service.

pub mod fixtures;
pub mod helpers;

pub use fake_service::FakeAma;
pub use fixtures::*;
pub use helpers::*;
