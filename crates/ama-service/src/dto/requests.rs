//! Request DTOs for the command endpoints
//!
//! Both requests validate locally so an empty field never reaches the network.

use ama_core::{not_blank, DomainError};
use serde::Serialize;
use validator::Validate;

/// Create room request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

impl CreateRoomRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Check the request, mapping failures to the domain error the View shows
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate().map_err(|_| DomainError::EmptyRoomName)?;
        Ok(self)
    }
}

/// Create question request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(custom(function = "not_blank"))]
    pub text: String,
}

impl CreateQuestionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Check the request, mapping failures to the domain error the View shows
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate().map_err(|_| DomainError::EmptyQuestionText)?;
        Ok(self)
    }
}
