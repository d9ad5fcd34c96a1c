//! Error categories and validation details for the Watson client.

use serde::{Deserialize, Serialize};

/// Detailed information about a validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationDetail {
    /// The field that failed validation
    pub field: String,
    /// The error message for this field
    pub message: String,
    /// The invalid value (if available and safe to include)
    pub value: Option<String>,
}

impl ValidationDetail {
    /// Create a new validation detail
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    /// Create a new validation detail with a value
    pub fn with_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: Some(value.into()),
        }
    }
}

/// Error category for classification and handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Client configuration errors
    Configuration,
    /// Request rejected before any I/O
    Validation,
    /// Document could not be read or encoded
    Encoding,
    /// Connection-level failures
    Transport,
    /// Logical failures reported by the service
    Service,
    /// Response body did not match the result shape
    Decode,
}

impl ErrorCategory {
    /// Check if errors in this category are generally transient
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Transport)
    }

    /// Short label used in metric keys
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Encoding => "encoding",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Service => "service",
            ErrorCategory::Decode => "decode",
        }
    }

    /// Get a human-readable description of this category
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "Configuration error",
            ErrorCategory::Validation => "Validation error",
            ErrorCategory::Encoding => "Document encoding error",
            ErrorCategory::Transport => "Transport error",
            ErrorCategory::Service => "Service error",
            ErrorCategory::Decode => "Response decode error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_detail() {
        let detail = ValidationDetail::new("url", "URL cannot be empty");
        assert_eq!(detail.field, "url");
        assert_eq!(detail.message, "URL cannot be empty");
        assert!(detail.value.is_none());

        let detail_with_value =
            ValidationDetail::with_value("mode", "Unsupported input mode", "html");
        assert_eq!(detail_with_value.field, "mode");
        assert_eq!(detail_with_value.value, Some("html".to_string()));
    }

    #[test]
    fn test_error_category_retryable() {
        assert!(ErrorCategory::Transport.is_retryable());
        assert!(!ErrorCategory::Service.is_retryable());
        assert!(!ErrorCategory::Decode.is_retryable());
        assert!(!ErrorCategory::Encoding.is_retryable());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ErrorCategory::Transport.as_str(), "transport");
        assert_eq!(ErrorCategory::Decode.description(), "Response decode error");
    }
}
