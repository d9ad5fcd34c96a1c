//! HTTP transport implementations.

use crate::errors::{WatsonError, WatsonResult};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Response from HTTP transport
#[derive(Debug)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
}

impl TransportResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport trait for the Watson services.
///
/// Implementations return every response the server produced, whatever its
/// status code. Only failures to complete the exchange are errors, and those
/// must be reported as [`WatsonError::Network`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and collect the full response body
    async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> WatsonResult<TransportResponse>;
}

/// Reqwest-based HTTP transport implementation
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new reqwest transport
    pub fn new(timeout: Duration) -> WatsonResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .map_err(|e| WatsonError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, timeout })
    }

    /// Create a new reqwest transport with custom client
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Convert HTTP method to reqwest method
    ///
    /// Extension methods are carried over by name, never substituted.
    fn to_reqwest_method(&self, method: Method) -> WatsonResult<reqwest::Method> {
        Ok(match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PUT => reqwest::Method::PUT,
            Method::DELETE => reqwest::Method::DELETE,
            Method::PATCH => reqwest::Method::PATCH,
            Method::HEAD => reqwest::Method::HEAD,
            Method::OPTIONS => reqwest::Method::OPTIONS,
            Method::TRACE => reqwest::Method::TRACE,
            Method::CONNECT => reqwest::Method::CONNECT,
            other => reqwest::Method::from_bytes(other.as_str().as_bytes()).map_err(|e| {
                WatsonError::validation("method", format!("Unsupported HTTP method: {}", e))
            })?,
        })
    }

    /// Convert HeaderMap to reqwest HeaderMap
    fn to_reqwest_headers(&self, headers: HeaderMap) -> reqwest::header::HeaderMap {
        let mut reqwest_headers = reqwest::header::HeaderMap::new();
        for (name, value) in headers.iter() {
            if let Ok(header_name) =
                reqwest::header::HeaderName::from_bytes(name.as_str().as_bytes())
            {
                if let Ok(header_value) = reqwest::header::HeaderValue::from_bytes(value.as_bytes())
                {
                    reqwest_headers.insert(header_name, header_value);
                }
            }
        }
        reqwest_headers
    }

    /// Convert reqwest headers back to http HeaderMap
    fn from_reqwest_headers(&self, headers: &reqwest::header::HeaderMap) -> HeaderMap {
        let mut http_headers = HeaderMap::new();
        for (name, value) in headers.iter() {
            if let Ok(header_name) = http::header::HeaderName::from_bytes(name.as_str().as_bytes())
            {
                if let Ok(header_value) = http::header::HeaderValue::from_bytes(value.as_bytes()) {
                    http_headers.insert(header_name, header_value);
                }
            }
        }
        http_headers
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> WatsonResult<TransportResponse> {
        let reqwest_method = self.to_reqwest_method(method)?;
        let reqwest_headers = self.to_reqwest_headers(headers);

        let mut request = self
            .client
            .request(reqwest_method, url.as_str())
            .headers(reqwest_headers);

        if let Some(body_data) = body {
            request = request.body(body_data);
        }

        let response = request.send().await?;

        let status = response.status();
        let response_headers = self.from_reqwest_headers(response.headers());
        let body_bytes = response.bytes().await?;

        Ok(TransportResponse {
            status: status.as_u16(),
            headers: response_headers,
            body: body_bytes,
        })
    }
}
