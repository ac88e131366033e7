//! Client error types
//!
//! Every failure the View can observe from a command is one of these. Passive
//! reconciliation failures (malformed frames, unknown targets) never surface here.

use ama_core::DomainError;
use std::fmt;

/// The command a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    CreateRoom,
    CreateQuestion,
    AddReaction,
    RemoveReaction,
    MarkAnswered,
    FetchQuestions,
}

impl CommandKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateRoom => "create_room",
            Self::CreateQuestion => "create_question",
            Self::AddReaction => "add_reaction",
            Self::RemoveReaction => "remove_reaction",
            Self::MarkAnswered => "mark_answered",
            Self::FetchQuestions => "fetch_questions",
        }
    }

    /// What the user was doing, phrased for an error toast
    #[must_use]
    pub const fn activity(self) -> &'static str {
        match self {
            Self::CreateRoom => "creating the room",
            Self::CreateQuestion => "creating the question",
            Self::AddReaction => "reacting to the question",
            Self::RemoveReaction => "removing the reaction",
            Self::MarkAnswered => "marking the question as answered",
            Self::FetchQuestions => "loading the questions",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client-wide error type
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Rejected locally before any network call
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The service answered with a non-success status
    #[error("{command} failed with status {status}: {message}")]
    Remote {
        command: CommandKind,
        status: u16,
        message: String,
    },

    /// The request never got a response (connect error, timeout, ...)
    #[error("{command} transport error: {message}")]
    Transport {
        command: CommandKind,
        message: String,
    },

    /// The response body could not be decoded
    #[error("{command} returned an unreadable response: {message}")]
    Decode {
        command: CommandKind,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Get error code
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.code(),
            Self::Remote { .. } => "REMOTE_FAILURE",
            Self::Transport { .. } => "TRANSPORT_ERROR",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Check if this failure was caught before reaching the network
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this failure came from the remote service (or the way to it)
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Remote { .. } | Self::Transport { .. } | Self::Decode { .. }
        )
    }

    /// The command that failed, when there is one
    #[must_use]
    pub fn command(&self) -> Option<CommandKind> {
        match self {
            Self::Remote { command, .. }
            | Self::Transport { command, .. }
            | Self::Decode { command, .. } => Some(*command),
            Self::Validation(_) | Self::Config(_) => None,
        }
    }

    /// Text to show the user
    ///
    /// Validation errors are shown inline as-is; remote failures become a
    /// generic toast naming the interrupted activity.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.command() {
            Some(command) => format!("An error occurred while {}", command.activity()),
            None => self.to_string(),
        }
    }

    /// Create a remote failure error
    pub fn remote(command: CommandKind, status: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            command,
            status,
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(command: CommandKind, err: impl fmt::Display) -> Self {
        Self::Transport {
            command,
            message: err.to_string(),
        }
    }

    /// Create a decode error
    pub fn decode(command: CommandKind, err: impl fmt::Display) -> Self {
        Self::Decode {
            command,
            message: err.to_string(),
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
