//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.

use tracing::{Level, Subscriber};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Transport crates that are chatty at debug level
const NOISY_DEPENDENCIES: [&str; 4] = ["tungstenite", "tokio_tungstenite", "hyper", "reqwest"];

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level filter (e.g., "info", "debug", "trace")
    pub level: Level,
    /// Enable JSON output format
    pub json: bool,
    /// Include span events (new, close)
    pub span_events: bool,
    /// Include file and line numbers
    pub file_line: bool,
    /// Include thread names
    pub thread_names: bool,
    /// Keep transport crates at `warn` even when `level` is more verbose
    pub quiet_dependencies: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            span_events: false,
            file_line: true,
            thread_names: false,
            quiet_dependencies: true,
        }
    }
}

impl TracingConfig {
    /// Create a development configuration with debug logging
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            json: false,
            span_events: true,
            file_line: true,
            thread_names: true,
            quiet_dependencies: true,
        }
    }

    /// Create a production configuration with JSON logging
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            json: true,
            span_events: false,
            file_line: false,
            thread_names: false,
            quiet_dependencies: true,
        }
    }

    /// Filter directive used when `RUST_LOG` is not set
    #[must_use]
    pub fn directive(&self) -> String {
        let mut directive = self.level.to_string().to_lowercase();
        if self.quiet_dependencies && self.level > Level::WARN {
            for dependency in NOISY_DEPENDENCIES {
                directive.push_str(&format!(",{dependency}=warn"));
            }
        }
        directive
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directive()))
    }

    fn fmt_layer<S>(&self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        let span_events = if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        if self.json {
            fmt::layer()
                .json()
                .with_file(self.file_line)
                .with_line_number(self.file_line)
                .with_thread_names(self.thread_names)
                .with_span_events(span_events)
                .boxed()
        } else {
            fmt::layer()
                .with_file(self.file_line)
                .with_line_number(self.file_line)
                .with_thread_names(self.thread_names)
                .with_span_events(span_events)
                .boxed()
        }
    }
}

/// Initialize the tracing subscriber with default configuration
///
/// Uses `RUST_LOG` environment variable for filtering if set,
/// otherwise defaults to "info" level.
///
/// # Panics
/// Panics if the subscriber cannot be initialized (usually means it's already set).
pub fn init_tracing() {
    init_tracing_with_config(TracingConfig::default());
}

/// Initialize the tracing subscriber with custom configuration
///
/// # Panics
/// Panics if the subscriber cannot be initialized (usually means it's already set).
pub fn init_tracing_with_config(config: TracingConfig) {
    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(config.fmt_layer())
        .init();
}

/// Try to initialize tracing, returning Ok if successful
///
/// Unlike `init_tracing`, this function will not panic if called multiple times.
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_tracing_with_config(TracingConfig::default())
}

/// Try to initialize tracing with custom configuration
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(config.fmt_layer())
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
