//! Channel error types

/// Failures opening or reading a notification channel
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    #[error("invalid channel URL: {0}")]
    InvalidUrl(String),

    #[error("failed to connect to {url}: {message}")]
    Connect { url: String, message: String },

    #[error("transport error: {0}")]
    Transport(String),
}

impl ChannelError {
    pub fn connect(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Connect {
            url: url.into(),
            message: err.to_string(),
        }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }
}
