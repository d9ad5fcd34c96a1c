//! Detection of the services' error envelopes.
//!
//! AlchemyLanguage reports logical failures inside an HTTP 200 body as
//! `{"status": "ERROR", "statusInfo": "invalid-api-key"}`. Conversation uses
//! `{"error": "...", "code": 404}`. Both are probed before the happy-path
//! decode.

use serde_json::Value;

use crate::errors::WatsonError;

/// An error payload returned by one of the services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorEnvelope {
    /// `status` / `statusInfo` pair (AlchemyLanguage)
    Status {
        /// Status string, usually `ERROR`
        status: String,
        /// Reason, e.g. `invalid-api-key`
        status_info: String,
    },
    /// `error` / `code` pair (Conversation)
    Code {
        /// Human-readable reason
        error: String,
        /// Numeric code
        code: i64,
    },
}

impl ErrorEnvelope {
    /// Probe a response body for an error envelope.
    ///
    /// Returns `None` for anything that is not a JSON object carrying one of
    /// the two key pairs, including bodies that fail to parse.
    pub fn detect(body: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(body).ok()?;
        let object = value.as_object()?;

        let status = object.get("status").and_then(Value::as_str);
        let status_info = object.get("statusInfo").and_then(Value::as_str);
        if let (Some(status), Some(status_info)) = (status, status_info) {
            return Some(ErrorEnvelope::Status {
                status: status.to_string(),
                status_info: status_info.to_string(),
            });
        }

        let error = object.get("error").and_then(Value::as_str);
        let code = object.get("code").and_then(as_code);
        if let (Some(error), Some(code)) = (error, code) {
            return Some(ErrorEnvelope::Code {
                error: error.to_string(),
                code,
            });
        }

        None
    }

    /// Human-readable reason
    pub fn message(&self) -> &str {
        match self {
            ErrorEnvelope::Status { status_info, .. } => status_info,
            ErrorEnvelope::Code { error, .. } => error,
        }
    }

    /// Convert into a [`WatsonError::Service`]
    pub fn into_error(self) -> WatsonError {
        match self {
            ErrorEnvelope::Status {
                status,
                status_info,
            } => WatsonError::Service {
                message: status_info,
                status: Some(status),
                code: None,
            },
            ErrorEnvelope::Code { error, code } => WatsonError::Service {
                message: error,
                status: None,
                code: Some(code),
            },
        }
    }
}

fn as_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_envelope() {
        let body = br#"{"status":"ERROR","statusInfo":"cannot-retrieve:http-404","usage":"..."}"#;
        assert_eq!(
            ErrorEnvelope::detect(body),
            Some(ErrorEnvelope::Status {
                status: "ERROR".to_string(),
                status_info: "cannot-retrieve:http-404".to_string(),
            })
        );
    }

    #[test]
    fn test_code_envelope() {
        let body = br#"{"error":"Workspace not found","code":404}"#;
        assert_eq!(
            ErrorEnvelope::detect(body),
            Some(ErrorEnvelope::Code {
                error: "Workspace not found".to_string(),
                code: 404,
            })
        );

        let body = br#"{"error":"Unauthorized","code":"401"}"#;
        assert_eq!(
            ErrorEnvelope::detect(body).map(|e| e.into_error().code()),
            Some(Some(401))
        );
    }

    #[test]
    fn test_success_payload_is_not_an_envelope() {
        let body = br#"{"status":"OK","language":"english","keywords":[]}"#;
        assert_eq!(ErrorEnvelope::detect(body), None);
    }

    #[test]
    fn test_half_envelopes_are_ignored() {
        assert_eq!(ErrorEnvelope::detect(br#"{"statusInfo":"x"}"#), None);
        assert_eq!(ErrorEnvelope::detect(br#"{"error":"x"}"#), None);
        assert_eq!(ErrorEnvelope::detect(br#"{"error":"x","code":"abc"}"#), None);
    }

    #[test]
    fn test_unparseable_bodies_are_ignored() {
        assert_eq!(ErrorEnvelope::detect(b"<html>gateway timeout</html>"), None);
        assert_eq!(ErrorEnvelope::detect(b""), None);
        assert_eq!(ErrorEnvelope::detect(br#"["status","statusInfo"]"#), None);
    }

    #[test]
    fn test_into_error() {
        let err = ErrorEnvelope::Status {
            status: "ERROR".to_string(),
            status_info: "invalid-api-key".to_string(),
        }
        .into_error();

        match err {
            WatsonError::Service {
                message,
                status,
                code,
            } => {
                assert_eq!(message, "invalid-api-key");
                assert_eq!(status.as_deref(), Some("ERROR"));
                assert_eq!(code, None);
            }
            other => panic!("Expected service error, got {:?}", other),
        }
    }
}
