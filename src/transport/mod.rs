//! HTTP transport layer and request construction.

mod encoding;
mod http_transport;
mod request_builder;

pub use encoding::{decode_unreserved, encode_unreserved, flag_value, form_body, UNRESERVED};
pub use http_transport::{HttpTransport, ReqwestTransport, TransportResponse};
pub use request_builder::{
    QueryParams, RequestBuilder, RequestDescriptor, RequestOptions, PLACEHOLDER_COMPANION_URL,
};
