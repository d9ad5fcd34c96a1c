//! Mock implementations for testing.
//!
//! [`MockHttpTransport`] replays queued responses and records every request
//! it receives, so service tests can assert on the exact wire request without
//! a network.

use crate::auth::AuthManager;
use crate::config::{DEFAULT_ALCHEMY_BASE_URL, DEFAULT_CONVERSATION_BASE_URL};
use crate::errors::{WatsonError, WatsonResult};
use crate::transport::{HttpTransport, QueryParams, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use http::{header, HeaderMap, HeaderValue, Method};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use url::Url;

/// API key the mock auth manager sends
pub const MOCK_API_KEY: &str = "mock-api-key";

/// Authorization header the mock Basic auth manager sends (`user:pass`)
pub const MOCK_BASIC_AUTHORIZATION: &str = "Basic dXNlcjpwYXNz";

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    outcomes: Mutex<VecDeque<MockOutcome>>,
    requests: Mutex<Vec<MockRequest>>,
}

enum MockOutcome {
    Response(MockResponse),
    Failure(WatsonError),
}

/// A mock response to return
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
    /// Response headers
    pub headers: HeaderMap,
}

impl MockResponse {
    /// Create a successful JSON response
    pub fn json<T: serde::Serialize>(data: &T) -> Self {
        Self {
            status: 200,
            body: serde_json::to_vec(data).unwrap_or_default(),
            headers: HeaderMap::new(),
        }
    }

    /// Create a Conversation-style error response (`{"error", "code"}`)
    pub fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({
            "error": message,
            "code": status,
        });
        Self {
            status,
            body: serde_json::to_vec(&body).unwrap_or_default(),
            headers: HeaderMap::new(),
        }
    }

    /// Create a response with an arbitrary body
    pub fn raw(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: HeaderMap::new(),
        }
    }
}

/// A recorded request
#[derive(Debug, Clone)]
pub struct MockRequest {
    /// HTTP method
    pub method: Method,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<Vec<u8>>,
}

impl MockRequest {
    /// Value of a query parameter in the recorded URL
    pub fn query_param(&self, name: &str) -> Option<String> {
        let url = Url::parse(&self.url).ok()?;
        let value = url
            .query_pairs()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.into_owned());
        value
    }

    /// Value of a header
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Add a response to return
    pub fn add_response(&self, response: MockResponse) {
        self.outcomes.lock().push_back(MockOutcome::Response(response));
    }

    /// Add a transport failure to return
    pub fn add_failure(&self, error: WatsonError) {
        self.outcomes.lock().push_back(MockOutcome::Failure(error));
    }

    /// Get recorded requests
    pub fn get_requests(&self) -> Vec<MockRequest> {
        self.requests.lock().clone()
    }

    /// Get the last request
    pub fn last_request(&self) -> Option<MockRequest> {
        self.requests.lock().last().cloned()
    }

    /// Clear recorded requests
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> WatsonResult<TransportResponse> {
        self.requests.lock().push(MockRequest {
            method,
            url: url.to_string(),
            headers,
            body: body.as_ref().map(|b| b.to_vec()),
        });

        let outcome = self.outcomes.lock().pop_front();
        match outcome {
            Some(MockOutcome::Response(response)) => Ok(TransportResponse {
                status: response.status,
                headers: response.headers,
                body: Bytes::from(response.body),
            }),
            Some(MockOutcome::Failure(error)) => Err(error),
            None => Ok(TransportResponse {
                status: 500,
                headers: HeaderMap::new(),
                body: Bytes::from_static(b"No mock response configured"),
            }),
        }
    }
}

/// Mock auth manager
pub struct MockAuthManager {
    api_key: Option<&'static str>,
    headers: HeaderMap,
}

impl MockAuthManager {
    /// Key-style credentials: adds `apikey` to the query
    pub fn new() -> Self {
        Self {
            api_key: Some(MOCK_API_KEY),
            headers: HeaderMap::new(),
        }
    }

    /// Basic-style credentials: adds an `Authorization` header
    pub fn basic() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static(MOCK_BASIC_AUTHORIZATION),
        );
        Self {
            api_key: None,
            headers,
        }
    }
}

impl Default for MockAuthManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthManager for MockAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
    }

    fn add_auth_query(&self, query: &mut QueryParams) {
        if let Some(key) = self.api_key {
            query.set("apikey", key);
        }
    }

    fn validate_credentials(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Builder for creating mock services
pub struct MockClientBuilder {
    transport: Arc<MockHttpTransport>,
    auth: Arc<MockAuthManager>,
    base_url: &'static str,
}

impl MockClientBuilder {
    /// Mock AlchemyLanguage setup: key auth against the default gateway
    pub fn new() -> Self {
        Self {
            transport: Arc::new(MockHttpTransport::new()),
            auth: Arc::new(MockAuthManager::new()),
            base_url: DEFAULT_ALCHEMY_BASE_URL,
        }
    }

    /// Mock Conversation setup: Basic auth against the default gateway
    pub fn conversation() -> Self {
        Self {
            transport: Arc::new(MockHttpTransport::new()),
            auth: Arc::new(MockAuthManager::basic()),
            base_url: DEFAULT_CONVERSATION_BASE_URL,
        }
    }

    /// Add a mock response
    pub fn with_response(self, response: MockResponse) -> Self {
        self.transport.add_response(response);
        self
    }

    /// Add a transport failure
    pub fn with_failure(self, error: WatsonError) -> Self {
        self.transport.add_failure(error);
        self
    }

    /// Get the transport for adding more responses
    pub fn transport(&self) -> Arc<MockHttpTransport> {
        self.transport.clone()
    }

    /// Build a mock service
    ///
    /// # Panics
    ///
    /// Panics if the builder's base URL constant does not parse.
    pub fn build<S, F>(self, factory: F) -> (S, Arc<MockHttpTransport>)
    where
        F: FnOnce(Arc<dyn HttpTransport>, Arc<dyn AuthManager>, Url) -> S,
    {
        let transport = self.transport.clone();
        let base_url = Url::parse(self.base_url).expect("mock base URL is valid");
        let service = factory(
            self.transport as Arc<dyn HttpTransport>,
            self.auth as Arc<dyn AuthManager>,
            base_url,
        );
        (service, transport)
    }
}

impl Default for MockClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport() {
        let transport = MockHttpTransport::new();
        transport.add_response(MockResponse::json(&serde_json::json!({"title": "Hello"})));

        let response = transport
            .send(
                Method::POST,
                Url::parse("https://gateway-a.watsonplatform.net/calls/url/URLGetTitle?url=x")
                    .unwrap(),
                HeaderMap::new(),
                None,
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);

        let requests = transport.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].query_param("url").as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_unconfigured_transport_returns_500() {
        let transport = MockHttpTransport::new();
        let response = transport
            .send(
                Method::POST,
                Url::parse("https://example.com").unwrap(),
                HeaderMap::new(),
                None,
            )
            .await
            .unwrap();
        assert_eq!(response.status, 500);
    }

    #[test]
    fn test_mock_auth_managers() {
        let auth = MockAuthManager::new();
        let mut query = QueryParams::new();
        auth.add_auth_query(&mut query);
        assert_eq!(query.get("apikey"), Some(MOCK_API_KEY));
        assert!(auth.get_headers().is_empty());

        let auth = MockAuthManager::basic();
        let mut query = QueryParams::new();
        auth.add_auth_query(&mut query);
        assert!(query.is_empty());
        assert_eq!(
            auth.get_headers().get(header::AUTHORIZATION).unwrap(),
            MOCK_BASIC_AUTHORIZATION
        );
    }
}
