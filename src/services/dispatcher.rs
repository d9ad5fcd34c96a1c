//! Shared request pipeline for every service operation.
//!
//! A call runs: build descriptor → apply credentials → send → probe for an
//! error envelope → check HTTP status → decode. It yields exactly one
//! [`WatsonResult`]. Nothing is retried.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use futures::future::{BoxFuture, FutureExt};
use serde::de::DeserializeOwned;
use tracing::Instrument;
use url::Url;

use crate::auth::AuthManager;
use crate::errors::{WatsonError, WatsonResult};
use crate::observability::{
    MetricsCollector, NoopMetricsCollector, NoopTracer, StructuredLogger, Tracer,
};
use crate::response;
use crate::transport::{HttpTransport, RequestDescriptor};

/// Service label for AlchemyLanguage metrics and spans
pub const ALCHEMY_SERVICE: &str = "alchemy_language";

/// Service label for Conversation metrics and spans
pub const CONVERSATION_SERVICE: &str = "conversation";

/// Executes request descriptors against one service.
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    base_url: Url,
    service: &'static str,
    tracer: Arc<dyn Tracer>,
    metrics: Arc<dyn MetricsCollector>,
    logger: Arc<StructuredLogger>,
}

impl Dispatcher {
    /// Create a dispatcher with no-op tracing and metrics
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        base_url: Url,
        service: &'static str,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            base_url,
            service,
            tracer: Arc::new(NoopTracer),
            metrics: Arc::new(NoopMetricsCollector),
            logger: Arc::new(StructuredLogger::default()),
        }
    }

    /// Replace the tracer
    pub fn with_tracer(mut self, tracer: Arc<dyn Tracer>) -> Self {
        self.tracer = tracer;
        self
    }

    /// Replace the metrics collector
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsCollector>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Replace the structured logger
    pub fn with_logger(mut self, logger: Arc<StructuredLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Service label
    pub fn service(&self) -> &'static str {
        self.service
    }

    /// Run one operation.
    ///
    /// `prepared` is the outcome of request construction. A construction
    /// failure is reported through the same channel as any other failure and
    /// never reaches the transport.
    pub async fn dispatch<T>(
        &self,
        operation: &str,
        prepared: WatsonResult<RequestDescriptor>,
    ) -> WatsonResult<T>
    where
        T: DeserializeOwned,
    {
        self.metrics.record_request(self.service, operation);
        let mut span = self.tracer.start_span(operation, self.service);
        let started = Instant::now();

        let result = match prepared {
            Ok(descriptor) => {
                span.set_attribute("path", descriptor.path.clone());
                let tracing_span = span.tracing_span().clone();
                self.execute(operation, descriptor)
                    .instrument(tracing_span)
                    .await
            }
            Err(err) => Err(err),
        };

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => {
                self.metrics
                    .record_success(self.service, operation, duration_ms);
                self.tracer.end_span(span.success());
            }
            Err(err) => {
                self.metrics
                    .record_failure(self.service, operation, err.category().as_str());
                let mut attributes = HashMap::new();
                attributes.insert("category".to_string(), err.category().as_str().to_string());
                self.logger
                    .log_error(self.service, operation, &err.to_string(), attributes);
                self.tracer.end_span(span.error(err.to_string()));
            }
        }

        result
    }

    async fn execute<T>(&self, operation: &str, descriptor: RequestDescriptor) -> WatsonResult<T>
    where
        T: DeserializeOwned,
    {
        let mut headers = descriptor.headers();
        self.auth_manager.add_auth_headers(&mut headers);

        let mut query = descriptor.query.clone();
        self.auth_manager.add_auth_query(&mut query);

        let url = descriptor.url(&self.base_url, &query)?;

        let mut attributes = HashMap::new();
        attributes.insert("method".to_string(), descriptor.method.to_string());
        attributes.insert("url".to_string(), url.to_string());
        if let Some(body) = &descriptor.body {
            attributes.insert("body_bytes".to_string(), body.len().to_string());
        }
        self.logger
            .log_request(self.service, operation, attributes);

        let started = Instant::now();
        let response = self
            .transport
            .send(descriptor.method, url, headers, descriptor.body)
            .await?;
        let duration_ms = started.elapsed().as_millis() as u64;

        let mut attributes = HashMap::new();
        attributes.insert("body_bytes".to_string(), response.body.len().to_string());
        if response.is_success() {
            self.logger.log_response(
                self.service,
                operation,
                response.status,
                duration_ms,
                attributes,
            );
        } else {
            attributes.insert("status".to_string(), response.status.to_string());
            self.logger
                .log_warning("Service returned a non-success status", attributes);
        }

        response::interpret(response.status, &response.body)
    }
}

/// Drive a call to completion and hand its outcome to exactly one of two
/// continuations, exactly once.
///
/// The returned future can be spawned on any executor.
pub fn complete<'a, T, F, S, E>(call: F, on_success: S, on_failure: E) -> BoxFuture<'a, ()>
where
    T: Send + 'a,
    F: Future<Output = WatsonResult<T>> + Send + 'a,
    S: FnOnce(T) + Send + 'a,
    E: FnOnce(WatsonError) + Send + 'a,
{
    async move {
        match call.await {
            Ok(value) => on_success(value),
            Err(err) => on_failure(err),
        }
    }
    .boxed()
}
