//! Configuration for the AlchemyLanguage and Conversation clients.
//!
//! Both services are configured through a builder or from environment
//! variables. Credentials are held as [`SecretString`] and never printed.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::errors::{WatsonError, WatsonResult};

/// Default base URL for the AlchemyLanguage API.
pub const DEFAULT_ALCHEMY_BASE_URL: &str = "https://gateway-a.watsonplatform.net/calls";

/// Default base URL for the Conversation API.
pub const DEFAULT_CONVERSATION_BASE_URL: &str =
    "https://gateway.watsonplatform.net/conversation-experimental/api";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the AlchemyLanguage client.
#[derive(Clone)]
pub struct AlchemyConfig {
    /// API key sent as the `apikey` query parameter.
    pub(crate) api_key: SecretString,
    /// Base URL for API requests, without trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Optional client name appended to the User-Agent.
    pub client_name: Option<String>,
}

impl AlchemyConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> AlchemyConfigBuilder {
        AlchemyConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ALCHEMY_API_KEY` (required): API key
    /// - `ALCHEMY_BASE_URL` (optional): Custom base URL
    /// - `ALCHEMY_TIMEOUT_SECS` (optional): Request timeout in seconds
    pub fn from_env() -> WatsonResult<Self> {
        let api_key = std::env::var("ALCHEMY_API_KEY").map_err(|_| {
            WatsonError::Configuration {
                message: "ALCHEMY_API_KEY environment variable not set".to_string(),
            }
        })?;

        let mut builder = AlchemyConfigBuilder::new().api_key(api_key);

        if let Ok(base_url) = std::env::var("ALCHEMY_BASE_URL") {
            builder = builder.base_url(base_url);
        }

        if let Some(timeout) = timeout_from_env("ALCHEMY_TIMEOUT_SECS") {
            builder = builder.timeout(timeout);
        }

        builder.build()
    }

    /// Returns the API key (exposing the secret).
    pub(crate) fn api_key(&self) -> &SecretString {
        &self.api_key
    }
}

impl std::fmt::Debug for AlchemyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlchemyConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("client_name", &self.client_name)
            .finish()
    }
}

/// Builder for `AlchemyConfig`.
#[derive(Default)]
pub struct AlchemyConfigBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    client_name: Option<String>,
}

impl AlchemyConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key.into()));
        self
    }

    /// Sets the API key from an existing secret.
    pub fn api_key_secret(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the client name reported in the User-Agent.
    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> WatsonResult<AlchemyConfig> {
        let api_key = self.api_key.ok_or_else(|| WatsonError::Configuration {
            message: "API key is required".to_string(),
        })?;

        if api_key.expose_secret().trim().is_empty() {
            return Err(WatsonError::Configuration {
                message: "API key cannot be empty".to_string(),
            });
        }

        let base_url = normalize_base_url(self.base_url, DEFAULT_ALCHEMY_BASE_URL)?;

        Ok(AlchemyConfig {
            api_key,
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            client_name: self.client_name,
        })
    }
}

/// Configuration for the Conversation client.
#[derive(Clone)]
pub struct ConversationConfig {
    /// Username for HTTP Basic authentication.
    pub username: String,
    /// Password for HTTP Basic authentication.
    pub(crate) password: SecretString,
    /// Base URL for API requests, without trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Optional client name appended to the User-Agent.
    pub client_name: Option<String>,
}

impl ConversationConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ConversationConfigBuilder {
        ConversationConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CONVERSATION_USERNAME` (required): Basic auth username
    /// - `CONVERSATION_PASSWORD` (required): Basic auth password
    /// - `CONVERSATION_BASE_URL` (optional): Custom base URL
    /// - `CONVERSATION_TIMEOUT_SECS` (optional): Request timeout in seconds
    pub fn from_env() -> WatsonResult<Self> {
        let username = std::env::var("CONVERSATION_USERNAME").map_err(|_| {
            WatsonError::Configuration {
                message: "CONVERSATION_USERNAME environment variable not set".to_string(),
            }
        })?;
        let password = std::env::var("CONVERSATION_PASSWORD").map_err(|_| {
            WatsonError::Configuration {
                message: "CONVERSATION_PASSWORD environment variable not set".to_string(),
            }
        })?;

        let mut builder = ConversationConfigBuilder::new()
            .username(username)
            .password(password);

        if let Ok(base_url) = std::env::var("CONVERSATION_BASE_URL") {
            builder = builder.base_url(base_url);
        }

        if let Some(timeout) = timeout_from_env("CONVERSATION_TIMEOUT_SECS") {
            builder = builder.timeout(timeout);
        }

        builder.build()
    }

    /// Returns the password secret.
    pub(crate) fn password(&self) -> &SecretString {
        &self.password
    }
}

impl std::fmt::Debug for ConversationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("client_name", &self.client_name)
            .finish()
    }
}

/// Builder for `ConversationConfig`.
#[derive(Default)]
pub struct ConversationConfigBuilder {
    username: Option<String>,
    password: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    client_name: Option<String>,
}

impl ConversationConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the client name reported in the User-Agent.
    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> WatsonResult<ConversationConfig> {
        let username = self
            .username
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| WatsonError::Configuration {
                message: "Username is required".to_string(),
            })?;

        let password = self
            .password
            .filter(|p| !p.expose_secret().is_empty())
            .ok_or_else(|| WatsonError::Configuration {
                message: "Password is required".to_string(),
            })?;

        let base_url = normalize_base_url(self.base_url, DEFAULT_CONVERSATION_BASE_URL)?;

        Ok(ConversationConfig {
            username,
            password,
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            client_name: self.client_name,
        })
    }
}

fn normalize_base_url(base_url: Option<String>, default: &str) -> WatsonResult<String> {
    let base_url = base_url
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string();

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(WatsonError::Configuration {
            message: "Base URL must start with http:// or https://".to_string(),
        });
    }

    Ok(base_url)
}

fn timeout_from_env(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alchemy_config_builder_success() {
        let config = AlchemyConfig::builder()
            .api_key("test-api-key")
            .base_url("https://alchemy.example.com/calls/")
            .timeout(Duration::from_secs(30))
            .client_name("my-app")
            .build()
            .unwrap();

        assert_eq!(config.api_key().expose_secret(), "test-api-key");
        assert_eq!(config.base_url, "https://alchemy.example.com/calls");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.client_name.as_deref(), Some("my-app"));
    }

    #[test]
    fn test_alchemy_config_defaults() {
        let config = AlchemyConfig::builder().api_key("test-key").build().unwrap();

        assert_eq!(config.base_url, DEFAULT_ALCHEMY_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.client_name.is_none());
    }

    #[test]
    fn test_alchemy_config_missing_or_blank_key() {
        assert!(AlchemyConfig::builder().build().is_err());
        assert!(AlchemyConfig::builder().api_key("  ").build().is_err());
    }

    #[test]
    fn test_alchemy_config_invalid_base_url() {
        let result = AlchemyConfig::builder()
            .api_key("test-key")
            .base_url("gateway-a.watsonplatform.net")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_alchemy_config_debug_redacts_key() {
        let config = AlchemyConfig::builder().api_key("secret-key").build().unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("secret-key"));
    }

    #[test]
    fn test_conversation_config_builder() {
        let config = ConversationConfig::builder()
            .username("user")
            .password("pass")
            .build()
            .unwrap();

        assert_eq!(config.username, "user");
        assert_eq!(config.password().expose_secret(), "pass");
        assert_eq!(config.base_url, DEFAULT_CONVERSATION_BASE_URL);
    }

    #[test]
    fn test_conversation_config_requires_credentials() {
        assert!(ConversationConfig::builder().password("pass").build().is_err());
        assert!(ConversationConfig::builder().username("user").build().is_err());
        assert!(ConversationConfig::builder()
            .username("user")
            .password("")
            .build()
            .is_err());
    }

    #[test]
    fn test_conversation_config_debug_redacts_password() {
        let config = ConversationConfig::builder()
            .username("user")
            .password("hunter2")
            .build()
            .unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("user"));
        assert!(!debug_str.contains("hunter2"));
    }
}
