//! Wire encoding for document bodies and flag values.

use bytes::Bytes;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::errors::{WatsonError, WatsonResult};

/// RFC 3986 unreserved characters: letters, digits, `-`, `.`, `_` and `~`.
/// Everything else is percent-encoded.
pub const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode text with the unreserved allow-list.
pub fn encode_unreserved(text: &str) -> String {
    utf8_percent_encode(text, UNRESERVED).to_string()
}

/// Reverse of [`encode_unreserved`].
pub fn decode_unreserved(encoded: &str) -> WatsonResult<String> {
    percent_decode_str(encoded)
        .decode_utf8()
        .map(|text| text.into_owned())
        .map_err(|e| WatsonError::Encoding {
            message: format!("Encoded text is not valid UTF-8: {}", e),
        })
}

/// Single-field `application/x-www-form-urlencoded` body: `<field>=<encoded>`.
pub fn form_body(field: &str, text: &str) -> Bytes {
    Bytes::from(format!("{}={}", field, encode_unreserved(text)))
}

/// Wire value of a boolean flag.
pub fn flag_value(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}
