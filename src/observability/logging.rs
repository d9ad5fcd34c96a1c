//! Structured logging for the Watson clients.

use std::collections::HashMap;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level - wire-level detail
    Trace,
    /// Debug level - verbose debugging information
    Debug,
    /// Info level - general information
    Info,
    /// Warn level - warnings
    Warn,
    /// Error level - errors
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Log format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Pretty printed format for development
    Pretty,
    /// JSON format for production
    Json,
    /// Compact format
    Compact,
}

/// Configuration for logging
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level
    pub level: LogLevel,
    /// Log format
    pub format: LogFormat,
    /// Whether to include target (module path)
    pub include_target: bool,
    /// Whether to redact credentials in logged attributes
    pub redact_sensitive: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            include_target: false,
            redact_sensitive: true,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable target
    pub fn with_target(mut self, include: bool) -> Self {
        self.include_target = include;
        self
    }

    /// Enable or disable sensitive data redaction
    pub fn with_redaction(mut self, redact: bool) -> Self {
        self.redact_sensitive = redact;
        self
    }

    /// Create configuration for development
    pub fn development() -> Self {
        Self {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            include_target: true,
            redact_sensitive: false,
        }
    }

    /// Create configuration for production
    pub fn production() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Json,
            include_target: false,
            redact_sensitive: true,
        }
    }

    /// Install a global `tracing` subscriber for this configuration.
    ///
    /// `RUST_LOG` directives are honoured on top of the configured level.
    /// Call once at application startup.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let filter =
            EnvFilter::from_default_env().add_directive(LevelFilter::from(self.level).into());

        match self.format {
            LogFormat::Pretty => tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty().with_target(self.include_target))
                .try_init()?,
            LogFormat::Json => tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(self.include_target))
                .try_init()?,
            LogFormat::Compact => tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_target(self.include_target))
                .try_init()?,
        }

        Ok(())
    }
}

/// Structured logger for request/response events
pub struct StructuredLogger {
    config: LoggingConfig,
}

impl StructuredLogger {
    /// Create a new structured logger
    pub fn new(config: LoggingConfig) -> Self {
        Self { config }
    }

    /// Log an outgoing request
    pub fn log_request(&self, service: &str, operation: &str, attributes: HashMap<String, String>) {
        let attrs = self.redact_attributes(attributes);
        debug!(
            service = service,
            operation = operation,
            attributes = ?attrs,
            "Sending request"
        );
    }

    /// Log a completed response
    pub fn log_response(
        &self,
        service: &str,
        operation: &str,
        status: u16,
        duration_ms: u64,
        attributes: HashMap<String, String>,
    ) {
        let attrs = self.redact_attributes(attributes);
        info!(
            service = service,
            operation = operation,
            status = status,
            duration_ms = duration_ms,
            attributes = ?attrs,
            "Response received"
        );
    }

    /// Log a failed call
    pub fn log_error(
        &self,
        service: &str,
        operation: &str,
        error: &str,
        attributes: HashMap<String, String>,
    ) {
        let attrs = self.redact_attributes(attributes);
        let error = self.redact_message(error);
        error!(
            service = service,
            operation = operation,
            error = %error,
            attributes = ?attrs,
            "Request failed"
        );
    }

    /// Log a warning
    pub fn log_warning(&self, message: &str, attributes: HashMap<String, String>) {
        let attrs = self.redact_attributes(attributes);
        warn!(message = message, attributes = ?attrs, "Warning");
    }

    /// Redact an `apikey=` query value embedded in free text if configured
    fn redact_message(&self, message: &str) -> String {
        if self.config.redact_sensitive && message.contains("apikey=") {
            redact_query_value(message, "apikey")
        } else {
            message.to_string()
        }
    }

    /// Redact credential-bearing attributes if configured
    fn redact_attributes(&self, mut attrs: HashMap<String, String>) -> HashMap<String, String> {
        if !self.config.redact_sensitive {
            return attrs;
        }

        let sensitive_keys = ["apikey", "api_key", "authorization", "password", "secret"];

        for (key, value) in attrs.iter_mut() {
            let key_lower = key.to_lowercase();
            if sensitive_keys.iter().any(|s| key_lower.contains(s)) {
                *value = "[REDACTED]".to_string();
            } else if value.contains("apikey=") {
                *value = redact_query_value(value, "apikey");
            }
        }

        attrs
    }
}

impl Default for StructuredLogger {
    fn default() -> Self {
        Self::new(LoggingConfig::default())
    }
}

/// Replace the value of `name=` inside a URL or query string.
fn redact_query_value(text: &str, name: &str) -> String {
    let needle = format!("{}=", name);
    let Some(start) = text.find(&needle) else {
        return text.to_string();
    };
    let value_start = start + needle.len();
    let value_end = text[value_start..]
        .find(|c: char| c == '&' || c == ')' || c.is_whitespace())
        .map(|i| value_start + i)
        .unwrap_or(text.len());
    format!("{}[REDACTED]{}", &text[..value_start], &text[value_end..])
}
