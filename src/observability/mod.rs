//! Observability: logging, request spans and metrics.

mod logging;
mod metrics;
mod tracing_impl;

pub use logging::{LogFormat, LogLevel, LoggingConfig, StructuredLogger};
pub use metrics::{
    Counter, Gauge, Histogram, InMemoryMetricsCollector, MetricsCollector, MetricsSnapshot,
    NoopMetricsCollector,
};
pub use tracing_impl::{DefaultTracer, NoopTracer, RequestSpan, SpanStatus, Tracer};
