//! Authentication for the Watson services.
//!
//! AlchemyLanguage takes its key as the `apikey` query parameter.
//! Conversation uses HTTP Basic authentication and sends no key parameter.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use http::{header, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::transport::QueryParams;

/// Trait for applying credentials to outgoing requests
#[async_trait]
pub trait AuthManager: Send + Sync {
    /// Get the authentication headers for a request
    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.add_auth_headers(&mut headers);
        headers
    }

    /// Add authentication headers to an existing header map
    fn add_auth_headers(&self, headers: &mut HeaderMap);

    /// Add authentication query parameters
    fn add_auth_query(&self, query: &mut QueryParams);

    /// Validate the credentials (basic format validation only)
    fn validate_credentials(&self) -> Result<(), String>;
}

fn user_agent(client_name: Option<&str>) -> String {
    let base = format!("integrations-watson/{}", env!("CARGO_PKG_VERSION"));
    match client_name {
        Some(name) => format!("{} {}", base, name),
        None => base,
    }
}

fn insert_user_agent(headers: &mut HeaderMap, client_name: Option<&str>) {
    if let Ok(value) = HeaderValue::from_str(&user_agent(client_name)) {
        headers.insert(header::USER_AGENT, value);
    }
}

/// API key authentication for AlchemyLanguage
pub struct ApiKeyAuthManager {
    api_key: SecretString,
    client_name: Option<String>,
}

impl ApiKeyAuthManager {
    /// Create a new API key manager
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            client_name: None,
        }
    }

    /// Create a new API key manager with client name
    pub fn with_client_name(api_key: SecretString, client_name: Option<String>) -> Self {
        Self {
            api_key,
            client_name,
        }
    }
}

#[async_trait]
impl AuthManager for ApiKeyAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        insert_user_agent(headers, self.client_name.as_deref());
    }

    fn add_auth_query(&self, query: &mut QueryParams) {
        query.set("apikey", self.api_key.expose_secret().as_str());
    }

    fn validate_credentials(&self) -> Result<(), String> {
        let key = self.api_key.expose_secret();

        if key.trim().is_empty() {
            return Err("API key cannot be empty".to_string());
        }

        if key.chars().any(char::is_whitespace) {
            return Err("API key cannot contain whitespace".to_string());
        }

        Ok(())
    }
}

/// HTTP Basic authentication for Conversation
pub struct BasicAuthManager {
    username: String,
    password: SecretString,
    client_name: Option<String>,
}

impl BasicAuthManager {
    /// Create a new Basic auth manager
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
            client_name: None,
        }
    }

    /// Create a new Basic auth manager with client name
    pub fn with_client_name(
        username: impl Into<String>,
        password: SecretString,
        client_name: Option<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password,
            client_name,
        }
    }

    fn authorization(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password.expose_secret());
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

#[async_trait]
impl AuthManager for BasicAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        if let Ok(mut value) = HeaderValue::from_str(&self.authorization()) {
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }
        insert_user_agent(headers, self.client_name.as_deref());
    }

    fn add_auth_query(&self, _query: &mut QueryParams) {}

    fn validate_credentials(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username cannot be empty".to_string());
        }
        if self.username.contains(':') {
            return Err("Username cannot contain ':'".to_string());
        }
        if self.password.expose_secret().is_empty() {
            return Err("Password cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_goes_in_query() {
        let manager = ApiKeyAuthManager::new(SecretString::new("test-api-key".to_string()));

        let mut query = QueryParams::new();
        manager.add_auth_query(&mut query);
        assert_eq!(query.get("apikey"), Some("test-api-key"));

        let headers = manager.get_headers();
        assert!(headers.get(header::AUTHORIZATION).is_none());
        assert!(headers.get(header::USER_AGENT).is_some());
    }

    #[test]
    fn test_api_key_validation() {
        let valid = ApiKeyAuthManager::new(SecretString::new("abc123".to_string()));
        assert!(valid.validate_credentials().is_ok());

        let empty = ApiKeyAuthManager::new(SecretString::new(" ".to_string()));
        assert!(empty.validate_credentials().is_err());

        let spaced = ApiKeyAuthManager::new(SecretString::new("abc 123".to_string()));
        assert!(spaced.validate_credentials().is_err());
    }

    #[test]
    fn test_basic_auth_header() {
        let manager = BasicAuthManager::new("user", SecretString::new("pass".to_string()));

        let headers = manager.get_headers();
        // base64("user:pass")
        assert_eq!(
            headers.get(header::AUTHORIZATION).unwrap(),
            "Basic dXNlcjpwYXNz"
        );

        let mut query = QueryParams::new();
        manager.add_auth_query(&mut query);
        assert!(query.is_empty());
    }

    #[test]
    fn test_basic_auth_validation() {
        let ok = BasicAuthManager::new("user", SecretString::new("pass".to_string()));
        assert!(ok.validate_credentials().is_ok());

        let colon = BasicAuthManager::new("us:er", SecretString::new("pass".to_string()));
        assert!(colon.validate_credentials().is_err());

        let no_password = BasicAuthManager::new("user", SecretString::new(String::new()));
        assert!(no_password.validate_credentials().is_err());
    }

    #[test]
    fn test_user_agent_with_client_name() {
        let manager = ApiKeyAuthManager::with_client_name(
            SecretString::new("key".to_string()),
            Some("my-app".to_string()),
        );
        let headers = manager.get_headers();
        let ua = headers.get(header::USER_AGENT).unwrap().to_str().unwrap();
        assert!(ua.starts_with("integrations-watson/"));
        assert!(ua.ends_with("my-app"));
    }
}
