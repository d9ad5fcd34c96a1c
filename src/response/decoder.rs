//! Response decoding.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::envelope::ErrorEnvelope;
use crate::errors::{WatsonError, WatsonResult};

/// Decode a success payload into a result type.
///
/// Malformed JSON and non-object payloads are structural failures and return
/// `Decode`. Within an object, result types decode each field on its own and
/// leave unusable fields as `None`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> WatsonResult<T> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| WatsonError::decode(format!("Malformed JSON: {}", e), body))?;

    if !value.is_object() {
        return Err(WatsonError::decode(
            format!("Expected a JSON object, found {}", kind(&value)),
            body,
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| WatsonError::decode(format!("Unexpected response shape: {}", e), body))
}

/// Turn a raw HTTP response into a result.
///
/// The envelope probe runs first whatever the status code. A non-2xx status
/// without an envelope becomes a `Service` error carrying the status code.
pub fn interpret<T: DeserializeOwned>(status: u16, body: &[u8]) -> WatsonResult<T> {
    if let Some(envelope) = ErrorEnvelope::detect(body) {
        return Err(envelope.into_error());
    }

    if !(200..300).contains(&status) {
        let text = String::from_utf8_lossy(body);
        let message = if text.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            format!("HTTP {}: {}", status, text.trim())
        };
        return Err(WatsonError::Service {
            message,
            status: None,
            code: Some(i64::from(status)),
        });
    }

    decode(body)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Minimal {
        #[serde(default, deserialize_with = "crate::response::lenient::string")]
        language: Option<String>,
    }

    #[test]
    fn test_decode_object() {
        let result: Minimal = decode(br#"{"language":"english"}"#).unwrap();
        assert_eq!(result.language.as_deref(), Some("english"));
    }

    #[test]
    fn test_decode_malformed_json() {
        let result: WatsonResult<Minimal> = decode(b"{not json");
        match result {
            Err(WatsonError::Decode { message, body }) => {
                assert!(message.starts_with("Malformed JSON"));
                assert_eq!(body.as_deref(), Some("{not json"));
            }
            other => panic!("Expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_wrong_top_level() {
        let result: WatsonResult<Minimal> = decode(b"[1,2,3]");
        match result {
            Err(WatsonError::Decode { message, .. }) => assert!(message.contains("an array")),
            other => panic!("Expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_interpret_envelope_before_status() {
        let result: WatsonResult<Minimal> =
            interpret(200, br#"{"status":"ERROR","statusInfo":"unsupported-text-language"}"#);
        match result {
            Err(WatsonError::Service { message, .. }) => {
                assert_eq!(message, "unsupported-text-language")
            }
            other => panic!("Expected service error, got {:?}", other),
        }
    }

    #[test]
    fn test_interpret_http_failure_without_envelope() {
        let result: WatsonResult<Minimal> = interpret(502, b"Bad Gateway");
        match result {
            Err(WatsonError::Service { message, code, .. }) => {
                assert_eq!(code, Some(502));
                assert_eq!(message, "HTTP 502: Bad Gateway");
            }
            other => panic!("Expected service error, got {:?}", other),
        }
    }

    #[test]
    fn test_interpret_success() {
        let result: Minimal = interpret(200, br#"{"status":"OK"}"#).unwrap();
        assert!(result.language.is_none());
    }
}
