//! Request spans.
//!
//! Each dispatched call gets a [`RequestSpan`]. With [`DefaultTracer`] the
//! span wraps a real `tracing` span, so events logged while the request is in
//! flight carry the service, operation and span id.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info, Level, Span};

/// Status of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStatus {
    /// Operation is in progress
    InProgress,
    /// Operation completed successfully
    Success,
    /// Operation failed with an error
    Error,
}

/// A span representing one request/response exchange
#[derive(Debug)]
pub struct RequestSpan {
    /// Unique span ID
    pub span_id: String,
    /// Operation name
    pub operation: String,
    /// Service name
    pub service: String,
    /// Start time
    pub start_time: Instant,
    /// End time (if completed)
    pub end_time: Option<Instant>,
    /// Status
    pub status: SpanStatus,
    /// Attributes
    pub attributes: HashMap<String, String>,
    span: Span,
}

impl RequestSpan {
    /// Create a span with no `tracing` counterpart
    pub fn new(operation: impl Into<String>, service: impl Into<String>) -> Self {
        Self::with_span(operation, service, Span::none())
    }

    fn with_span(operation: impl Into<String>, service: impl Into<String>, span: Span) -> Self {
        Self {
            span_id: uuid::Uuid::new_v4().to_string(),
            operation: operation.into(),
            service: service.into(),
            start_time: Instant::now(),
            end_time: None,
            status: SpanStatus::InProgress,
            attributes: HashMap::new(),
            span,
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Add an attribute in place
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// The `tracing` span to instrument the request future with
    pub fn tracing_span(&self) -> &Span {
        &self.span
    }

    /// Mark the span as successful
    pub fn success(mut self) -> Self {
        self.status = SpanStatus::Success;
        self.end_time = Some(Instant::now());
        self
    }

    /// Mark the span as failed
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.status = SpanStatus::Error;
        self.end_time = Some(Instant::now());
        self.attributes.insert("error".to_string(), error.into());
        self
    }

    /// Get the duration of the span
    pub fn duration(&self) -> Duration {
        self.end_time
            .unwrap_or_else(Instant::now)
            .duration_since(self.start_time)
    }
}

/// Trait for tracing operations
pub trait Tracer: Send + Sync {
    /// Start a new span for a request
    fn start_span(&self, operation: &str, service: &str) -> RequestSpan;

    /// End a span
    fn end_span(&self, span: RequestSpan);
}

/// Tracer backed by the `tracing` crate
pub struct DefaultTracer {
    client_name: String,
}

impl DefaultTracer {
    /// Create a new default tracer
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
        }
    }
}

impl Tracer for DefaultTracer {
    fn start_span(&self, operation: &str, service: &str) -> RequestSpan {
        let span_id = uuid::Uuid::new_v4();
        let span = tracing::span!(
            Level::INFO,
            "watson_request",
            client = %self.client_name,
            service = service,
            operation = operation,
            span_id = %span_id,
        );

        debug!(parent: &span, "Starting request span");

        let mut request_span = RequestSpan::with_span(operation, service, span);
        request_span.span_id = span_id.to_string();
        request_span
    }

    fn end_span(&self, span: RequestSpan) {
        let duration_ms = span.duration().as_millis() as u64;
        let _entered = span.span.enter();

        match span.status {
            SpanStatus::Success => {
                info!(
                    operation = %span.operation,
                    service = %span.service,
                    duration_ms = duration_ms,
                    "Request completed successfully"
                );
            }
            SpanStatus::Error => {
                let error = span
                    .attributes
                    .get("error")
                    .map(String::as_str)
                    .unwrap_or("unknown");
                tracing::error!(
                    operation = %span.operation,
                    service = %span.service,
                    duration_ms = duration_ms,
                    error = error,
                    "Request failed"
                );
            }
            SpanStatus::InProgress => {
                tracing::warn!(
                    operation = %span.operation,
                    service = %span.service,
                    duration_ms = duration_ms,
                    "Span ended while still in progress"
                );
            }
        }
    }
}

impl Default for DefaultTracer {
    fn default() -> Self {
        Self::new("watson")
    }
}

/// No-op tracer for testing or when tracing is disabled
#[derive(Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn start_span(&self, operation: &str, service: &str) -> RequestSpan {
        RequestSpan::new(operation, service)
    }

    fn end_span(&self, _span: RequestSpan) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_span() {
        let span = RequestSpan::new("ranked_keywords", "alchemy_language")
            .with_attribute("input_mode", "html");

        assert_eq!(span.operation, "ranked_keywords");
        assert_eq!(span.service, "alchemy_language");
        assert_eq!(span.attributes.get("input_mode"), Some(&"html".to_string()));
        assert_eq!(span.status, SpanStatus::InProgress);
    }

    #[test]
    fn test_request_span_success() {
        let span = RequestSpan::new("message", "conversation").success();

        assert_eq!(span.status, SpanStatus::Success);
        assert!(span.end_time.is_some());
    }

    #[test]
    fn test_request_span_error() {
        let span = RequestSpan::new("title", "alchemy_language").error("Connection failed");

        assert_eq!(span.status, SpanStatus::Error);
        assert_eq!(
            span.attributes.get("error"),
            Some(&"Connection failed".to_string())
        );
    }

    #[test]
    fn test_default_tracer() {
        let tracer = DefaultTracer::new("test-client");
        let span = tracer.start_span("language", "alchemy_language");

        assert_eq!(span.operation, "language");
        assert_eq!(span.service, "alchemy_language");
        assert!(!span.span_id.is_empty());
        tracer.end_span(span.success());
    }

    #[test]
    fn test_noop_tracer() {
        let tracer = NoopTracer;
        let span = tracer.start_span("test", "test");
        assert!(span.tracing_span().is_none());
        tracer.end_span(span.success());
    }
}
