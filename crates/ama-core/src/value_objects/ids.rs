//! Opaque identifiers for rooms and questions
//!
//! The server hands out UUIDs, but the client never interprets them: an id is
//! compared, hashed, and interpolated into URLs, nothing more.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an identifier from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier contains a path separator")]
    PathSeparator,
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier without checking it
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Parse an identifier, rejecting values that cannot be used in a URL path
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(IdParseError::Empty);
                }
                if trimmed.contains('/') {
                    return Err(IdParseError::PathSeparator);
                }
                Ok(Self(trimmed.to_string()))
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id!(
    /// Identifier of a room; scopes one question store and one notification channel
    RoomId
);

opaque_id!(
    /// Identifier of a question, stable for the question's lifetime
    QuestionId
);
