//! Client configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use ama_core::{QuestionId, RoomId};
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::telemetry::TracingConfig;

/// Main client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub app: AppSettings,
    pub endpoints: EndpointConfig,
    /// Upper bound for a single command call, in seconds (0 disables it)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Force JSON log output regardless of environment
    #[serde(default)]
    pub log_json: bool,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Base URLs of the AMA service
///
/// Both are stored without a trailing slash.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    /// REST base, e.g. `http://localhost:8080/api`
    pub api_url: String,
    /// WebSocket base, e.g. `ws://localhost:8080`
    pub ws_url: String,
}

impl EndpointConfig {
    /// Build endpoints, checking the URL schemes
    pub fn new(api_url: impl Into<String>, ws_url: impl Into<String>) -> Result<Self, ConfigError> {
        let api_url = normalize_base(api_url.into());
        let ws_url = normalize_base(ws_url.into());

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("AMA_API_URL", api_url));
        }
        if !(ws_url.starts_with("ws://") || ws_url.starts_with("wss://")) {
            return Err(ConfigError::InvalidValue("AMA_WS_URL", ws_url));
        }

        Ok(Self { api_url, ws_url })
    }

    #[must_use]
    pub fn rooms_url(&self) -> String {
        format!("{}/rooms", self.api_url)
    }

    #[must_use]
    pub fn questions_url(&self, room_id: &RoomId) -> String {
        format!("{}/rooms/{room_id}/questions", self.api_url)
    }

    #[must_use]
    pub fn question_url(&self, room_id: &RoomId, question_id: &QuestionId) -> String {
        format!("{}/rooms/{room_id}/questions/{question_id}", self.api_url)
    }

    #[must_use]
    pub fn answer_url(&self, room_id: &RoomId, question_id: &QuestionId) -> String {
        format!("{}/answer", self.question_url(room_id, question_id))
    }

    #[must_use]
    pub fn subscribe_url(&self, room_id: &RoomId) -> String {
        format!("{}/subscribe/{room_id}", self.ws_url)
    }
}

fn normalize_base(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// Default value functions
fn default_app_name() -> String {
    "ama-client".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    /// Build a configuration for the given service endpoints with defaults elsewhere
    pub fn new(api_url: impl Into<String>, ws_url: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            app: AppSettings {
                name: default_app_name(),
                env: default_env(),
            },
            endpoints: EndpointConfig::new(api_url, ws_url)?,
            request_timeout_secs: default_request_timeout_secs(),
            log_json: false,
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = env::var("AMA_API_URL").map_err(|_| ConfigError::MissingVar("AMA_API_URL"))?;
        let ws_url = env::var("AMA_WS_URL").map_err(|_| ConfigError::MissingVar("AMA_WS_URL"))?;

        let request_timeout_secs = match env::var("AMA_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("AMA_REQUEST_TIMEOUT_SECS", raw))?,
            Err(_) => default_request_timeout_secs(),
        };

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            endpoints: EndpointConfig::new(api_url, ws_url)?,
            request_timeout_secs,
            log_json: env::var("LOG_JSON")
                .ok()
                .is_some_and(|s| matches!(s.trim(), "1" | "true" | "yes")),
        })
    }

    /// Timeout applied to each command call, if any
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// Tracing preset matching this configuration
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        if self.log_json || self.app.env.is_production() {
            TracingConfig::production()
        } else if self.app.env.is_development() {
            TracingConfig::development()
        } else {
            TracingConfig::default()
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
