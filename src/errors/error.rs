//! Error types for the Watson client.

use crate::errors::categories::{ErrorCategory, ValidationDetail};
use thiserror::Error;

/// Result type alias for Watson operations
pub type WatsonResult<T> = Result<T, WatsonError>;

/// Main error type for the Watson client.
///
/// Every failed call surfaces exactly one of these through the result channel.
/// A field missing from an otherwise well-formed response is never an error;
/// it decodes to `None`.
#[derive(Error, Debug, Clone)]
pub enum WatsonError {
    /// Configuration error (invalid settings, missing credentials)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },

    /// Validation error (request rejected locally before any I/O)
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the validation issue
        message: String,
        /// List of specific validation failures
        details: Vec<ValidationDetail>,
    },

    /// The local document could not be read or encoded into a request body
    #[error("Encoding error: {message}")]
    Encoding {
        /// Error message describing the encoding issue
        message: String,
    },

    /// Network error (connection failed, timeout, DNS issues)
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// The remote service reported a logical failure
    #[error("Service error: {message}")]
    Service {
        /// Human-readable reason reported by the service
        message: String,
        /// Status string from a `status`/`statusInfo` envelope
        status: Option<String>,
        /// Numeric code from an `error`/`code` envelope or the HTTP status
        code: Option<i64>,
    },

    /// The response body did not match the expected result shape
    #[error("Decode error: {message}")]
    Decode {
        /// Error message describing the decode failure
        message: String,
        /// Raw response body, if it was valid UTF-8
        body: Option<String>,
    },
}

impl WatsonError {
    /// Build a validation error from a single field failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let detail = ValidationDetail::new(field, message);
        WatsonError::Validation {
            message: format!("{}: {}", detail.field, detail.message),
            details: vec![detail],
        }
    }

    /// Build a decode error, keeping the raw body when it is readable.
    pub fn decode(message: impl Into<String>, body: &[u8]) -> Self {
        WatsonError::Decode {
            message: message.into(),
            body: std::str::from_utf8(body).ok().map(str::to_string),
        }
    }

    /// Category used for metrics labels and retry decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            WatsonError::Configuration { .. } => ErrorCategory::Configuration,
            WatsonError::Validation { .. } => ErrorCategory::Validation,
            WatsonError::Encoding { .. } => ErrorCategory::Encoding,
            WatsonError::Network { .. } => ErrorCategory::Transport,
            WatsonError::Service { .. } => ErrorCategory::Service,
            WatsonError::Decode { .. } => ErrorCategory::Decode,
        }
    }

    /// Returns true if the caller may reasonably retry this call.
    ///
    /// Nothing in this crate retries; the flag is informational.
    /// Retryable errors include:
    /// - Network errors (connection issues, timeouts)
    /// - Service errors carrying a 429 or 5xx code
    pub fn is_retryable(&self) -> bool {
        match self {
            WatsonError::Network { .. } => true,
            WatsonError::Service { code: Some(code), .. } => {
                *code == 429 || (500..=599).contains(code)
            }
            _ => false,
        }
    }

    /// Get the numeric code if one was reported
    pub fn code(&self) -> Option<i64> {
        match self {
            WatsonError::Service { code, .. } => *code,
            _ => None,
        }
    }
}

// Conversions from common error types
// The request URL carries the `apikey` query parameter, so it never reaches
// the message.
impl From<reqwest::Error> for WatsonError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            WatsonError::Network {
                message: format!("Request timed out: {}", err),
            }
        } else if err.is_connect() {
            WatsonError::Network {
                message: format!("Connection failed: {}", err),
            }
        } else {
            WatsonError::Network {
                message: format!("Network error: {}", err),
            }
        }
    }
}

impl From<serde_json::Error> for WatsonError {
    fn from(err: serde_json::Error) -> Self {
        WatsonError::Decode {
            message: format!("JSON error: {}", err),
            body: None,
        }
    }
}

impl From<url::ParseError> for WatsonError {
    fn from(err: url::ParseError) -> Self {
        WatsonError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}

impl From<std::io::Error> for WatsonError {
    fn from(err: std::io::Error) -> Self {
        WatsonError::Encoding {
            message: format!("Unable to read document: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reqwest_error_message_omits_url() {
        let err = reqwest::Client::new()
            .post("http://127.0.0.1:1/calls/url/URLGetTitle?apikey=SUPERSECRETKEY")
            .send()
            .await
            .unwrap_err();

        match WatsonError::from(err) {
            WatsonError::Network { message } => {
                assert!(!message.contains("SUPERSECRETKEY"), "{}", message);
                assert!(!message.contains("apikey"), "{}", message);
            }
            other => panic!("Expected network error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_is_retryable() {
        let network = WatsonError::Network {
            message: "Connection reset".to_string(),
        };
        assert!(network.is_retryable());

        let unavailable = WatsonError::Service {
            message: "Service unavailable".to_string(),
            status: None,
            code: Some(503),
        };
        assert!(unavailable.is_retryable());

        let envelope = WatsonError::Service {
            message: "invalid-api-key".to_string(),
            status: Some("ERROR".to_string()),
            code: None,
        };
        assert!(!envelope.is_retryable());

        let encoding = WatsonError::Encoding {
            message: "bad bytes".to_string(),
        };
        assert!(!encoding.is_retryable());
    }

    #[test]
    fn test_validation_helper() {
        let err = WatsonError::validation("target", "Target cannot be empty");
        match err {
            WatsonError::Validation { message, details } => {
                assert_eq!(message, "target: Target cannot be empty");
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "target");
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_keeps_readable_body() {
        let err = WatsonError::decode("not an object", b"[1,2]");
        match err {
            WatsonError::Decode { body, .. } => assert_eq!(body.as_deref(), Some("[1,2]")),
            other => panic!("Expected decode error, got {:?}", other),
        }

        let err = WatsonError::decode("binary", &[0xff, 0xfe]);
        match err {
            WatsonError::Decode { body, .. } => assert!(body.is_none()),
            other => panic!("Expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_category_and_code() {
        let err = WatsonError::Service {
            message: "Not Found".to_string(),
            status: None,
            code: Some(404),
        };
        assert_eq!(err.category(), ErrorCategory::Service);
        assert_eq!(err.code(), Some(404));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(WatsonError::from(io).category(), ErrorCategory::Encoding);
    }
}
