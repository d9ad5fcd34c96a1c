//! Request construction for AlchemyLanguage operations.
//!
//! [`RequestBuilder`] turns an operation, an [`Input`] and an options value
//! into a transport-agnostic [`RequestDescriptor`]. Nothing here touches the
//! network; the only I/O is the scoped read of a local document in HTML and
//! Text modes.

use bytes::Bytes;
use http::{header, HeaderMap, HeaderValue, Method};
use url::Url;

use super::encoding::{flag_value, form_body};
use crate::errors::{ValidationDetail, WatsonError, WatsonResult};
use crate::types::{AlchemyOperation, Input, InputMode};

/// Value the service requires for the companion URL of
/// [`AlchemyOperation::requires_companion_url`] operations when none is given.
pub const PLACEHOLDER_COMPANION_URL: &str = " ";

/// Ordered query parameters without duplicate names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(n, _)| *n == name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((name, value)),
        }
    }

    /// Set a tri-state flag. `None` leaves the parameter out entirely.
    pub fn set_flag(&mut self, name: &str, value: Option<bool>) {
        if let Some(value) = value {
            self.set(name, flag_value(value));
        }
    }

    /// Set a parameter only when a value is present.
    pub fn set_opt(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    /// Look up a parameter value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a parameter is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a parameter, returning its value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(n, _)| n == name)?;
        Some(self.pairs.remove(index).1)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Options values that contribute query parameters to a request.
pub trait RequestOptions {
    /// Write the options into the parameter list.
    fn apply(&self, query: &mut QueryParams);
}

/// Everything needed to issue one HTTP request.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: Method,
    /// Path relative to the service base URL, with a leading `/`
    pub path: String,
    /// Accept header value
    pub accept: Option<mime::Mime>,
    /// Content-Type header value
    pub content_type: Option<mime::Mime>,
    /// Query parameters
    pub query: QueryParams,
    /// Request body
    pub body: Option<Bytes>,
}

impl RequestDescriptor {
    /// POST with a JSON body, as used by the Conversation service.
    pub fn json<T: serde::Serialize>(path: impl Into<String>, body: &T) -> WatsonResult<Self> {
        let body = serde_json::to_vec(body).map_err(|e| WatsonError::Encoding {
            message: format!("Unable to serialize request body: {}", e),
        })?;

        Ok(Self {
            method: Method::POST,
            path: path.into(),
            accept: Some(mime::APPLICATION_JSON),
            content_type: Some(mime::APPLICATION_JSON),
            query: QueryParams::new(),
            body: Some(Bytes::from(body)),
        })
    }

    /// Accept and Content-Type headers for this request
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(accept) = &self.accept {
            if let Ok(value) = HeaderValue::from_str(accept.as_ref()) {
                headers.insert(header::ACCEPT, value);
            }
        }
        if let Some(content_type) = &self.content_type {
            if let Ok(value) = HeaderValue::from_str(content_type.as_ref()) {
                headers.insert(header::CONTENT_TYPE, value);
            }
        }
        headers
    }

    /// Resolve the full URL against a base, appending the given query.
    ///
    /// The path is appended to the base rather than joined, so a base of
    /// `https://host/calls` keeps its `/calls` segment.
    pub fn url(&self, base_url: &Url, query: &QueryParams) -> WatsonResult<Url> {
        let base = base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{}{}", base, self.path))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        Ok(url)
    }
}

/// Builds [`RequestDescriptor`]s for AlchemyLanguage operations.
pub struct RequestBuilder<'a> {
    operation: AlchemyOperation,
    input: Option<&'a Input>,
    query: QueryParams,
}

impl<'a> RequestBuilder<'a> {
    /// Start a request for an operation
    pub fn new(operation: AlchemyOperation) -> Self {
        Self {
            operation,
            input: None,
            query: QueryParams::new(),
        }
    }

    /// Set the document input
    pub fn input(mut self, input: &'a Input) -> Self {
        self.input = Some(input);
        self
    }

    /// Apply an options value
    pub fn options<O: RequestOptions + ?Sized>(mut self, options: &O) -> Self {
        options.apply(&mut self.query);
        self
    }

    /// Set a single string parameter
    pub fn param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.query.set(name, value);
        self
    }

    /// Produce the request descriptor.
    ///
    /// # Errors
    ///
    /// - `Validation` if no input was given, the operation does not accept the
    ///   input mode, or a URL-mode target is blank.
    /// - `Encoding` if an HTML or Text document cannot be read as UTF-8 text.
    pub fn build(self) -> WatsonResult<RequestDescriptor> {
        let input = self
            .input
            .ok_or_else(|| WatsonError::validation("input", "An input document is required"))?;

        let mode = input.mode();
        if !self.operation.supports(mode) {
            return Err(WatsonError::Validation {
                message: format!(
                    "{} does not accept {} input",
                    self.operation.suffix(),
                    mode
                ),
                details: vec![ValidationDetail::with_value(
                    "input",
                    "Unsupported input mode",
                    mode.namespace(),
                )],
            });
        }

        let mut query = self.query;
        for (name, value) in self.operation.fixed_params() {
            query.set(*name, *value);
        }
        query.set("outputMode", "json");

        let body = match input {
            Input::Url(target) => {
                if target.trim().is_empty() {
                    return Err(WatsonError::validation("url", "URL cannot be empty"));
                }
                query.set("url", target.as_str());
                None
            }
            Input::Html { document, url } | Input::Text { document, url } => {
                let text = document.read()?;
                match url {
                    Some(url) => query.set("url", url.as_str()),
                    None if self.operation.requires_companion_url() => {
                        query.set("url", PLACEHOLDER_COMPANION_URL)
                    }
                    None => {}
                }
                let field = if mode == InputMode::Html { "html" } else { "text" };
                Some(form_body(field, &text))
            }
        };

        Ok(RequestDescriptor {
            method: Method::POST,
            path: self.operation.path(mode),
            accept: Some(mime::APPLICATION_JSON),
            content_type: Some(mime::APPLICATION_WWW_FORM_URLENCODED),
            query,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Document;
    use pretty_assertions::assert_eq;

    struct Flags {
        sentiment: Option<bool>,
        quotations: Option<bool>,
    }

    impl RequestOptions for Flags {
        fn apply(&self, query: &mut QueryParams) {
            query.set_flag("sentiment", self.sentiment);
            query.set_flag("quotations", self.quotations);
        }
    }

    #[test]
    fn test_query_params_replace_duplicates() {
        let mut query = QueryParams::new();
        query.set("url", "http://a.example");
        query.set("outputMode", "json");
        query.set("url", "http://b.example");

        assert_eq!(query.len(), 2);
        assert_eq!(query.get("url"), Some("http://b.example"));
        assert_eq!(
            query.iter().collect::<Vec<_>>(),
            vec![("url", "http://b.example"), ("outputMode", "json")]
        );
    }

    #[test]
    fn test_flag_tri_state() {
        let mut query = QueryParams::new();
        query.set_flag("a", Some(true));
        query.set_flag("b", Some(false));
        query.set_flag("c", None);

        assert_eq!(query.get("a"), Some("1"));
        assert_eq!(query.get("b"), Some("0"));
        assert!(!query.contains("c"));
    }

    #[test]
    fn test_url_mode_request() {
        let input = Input::url("http://example.com");
        let descriptor = RequestBuilder::new(AlchemyOperation::RankedNamedEntities)
            .input(&input)
            .options(&Flags {
                sentiment: Some(true),
                quotations: Some(false),
            })
            .build()
            .unwrap();

        assert_eq!(descriptor.method, Method::POST);
        assert_eq!(descriptor.path, "/url/URLGetRankedNamedEntities");
        assert!(descriptor.body.is_none());
        assert_eq!(descriptor.query.get("url"), Some("http://example.com"));
        assert_eq!(descriptor.query.get("outputMode"), Some("json"));
        assert_eq!(descriptor.query.get("sentiment"), Some("1"));
        assert_eq!(descriptor.query.get("quotations"), Some("0"));
    }

    #[test]
    fn test_html_mode_request() {
        let input = Input::html("<p>IBM & Watson</p>").with_url("http://example.com/page");
        let descriptor = RequestBuilder::new(AlchemyOperation::RankedKeywords)
            .input(&input)
            .build()
            .unwrap();

        assert_eq!(descriptor.path, "/html/HTMLGetRankedKeywords");
        assert_eq!(
            descriptor.body.as_deref(),
            Some(&b"html=%3Cp%3EIBM%20%26%20Watson%3C%2Fp%3E"[..])
        );
        assert_eq!(descriptor.query.get("url"), Some("http://example.com/page"));
        assert_eq!(
            descriptor.content_type,
            Some(mime::APPLICATION_WWW_FORM_URLENCODED)
        );
    }

    #[test]
    fn test_text_mode_request_without_companion_url() {
        let input = Input::text("Hello world");
        let descriptor = RequestBuilder::new(AlchemyOperation::TextSentiment)
            .input(&input)
            .build()
            .unwrap();

        assert_eq!(descriptor.path, "/text/TextGetTextSentiment");
        assert_eq!(descriptor.body.as_deref(), Some(&b"text=Hello%20world"[..]));
        assert!(!descriptor.query.contains("url"));
    }

    #[test]
    fn test_companion_url_placeholder() {
        let input = Input::html("<html></html>");
        let descriptor = RequestBuilder::new(AlchemyOperation::FeedLinks)
            .input(&input)
            .build()
            .unwrap();
        assert_eq!(descriptor.query.get("url"), Some(" "));

        let descriptor = RequestBuilder::new(AlchemyOperation::MicroformatData)
            .input(&input)
            .build()
            .unwrap();
        assert_eq!(descriptor.query.get("url"), Some(" "));
    }

    #[test]
    fn test_fixed_params_win_over_options() {
        let input = Input::url("http://example.com");
        let descriptor = RequestBuilder::new(AlchemyOperation::RankedConcepts)
            .input(&input)
            .param("linkedData", "0")
            .build()
            .unwrap();
        assert_eq!(descriptor.query.get("linkedData"), Some("1"));
    }

    #[test]
    fn test_unsupported_mode_is_rejected() {
        let input = Input::text("plain text");
        let result = RequestBuilder::new(AlchemyOperation::Authors)
            .input(&input)
            .build();

        match result {
            Err(WatsonError::Validation { details, .. }) => {
                assert_eq!(details[0].value.as_deref(), Some("text"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_url_is_rejected() {
        let input = Input::url("   ");
        let result = RequestBuilder::new(AlchemyOperation::Title)
            .input(&input)
            .build();
        assert!(matches!(result, Err(WatsonError::Validation { .. })));
    }

    #[test]
    fn test_missing_input_is_rejected() {
        let result = RequestBuilder::new(AlchemyOperation::Title).build();
        assert!(matches!(result, Err(WatsonError::Validation { .. })));
    }

    #[test]
    fn test_unreadable_document_is_encoding_error() {
        let input = Input::text(Document::bytes(vec![0xff, 0xfe, 0xfd]));
        let result = RequestBuilder::new(AlchemyOperation::RankedTaxonomy)
            .input(&input)
            .build();
        assert!(matches!(result, Err(WatsonError::Encoding { .. })));
    }

    #[test]
    fn test_descriptor_url_keeps_base_path() {
        let input = Input::url("http://example.com/a b");
        let descriptor = RequestBuilder::new(AlchemyOperation::Title)
            .input(&input)
            .build()
            .unwrap();

        let base = Url::parse("https://gateway-a.watsonplatform.net/calls").unwrap();
        let url = descriptor.url(&base, &descriptor.query).unwrap();

        assert_eq!(url.path(), "/calls/url/URLGetTitle");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("url".to_string(), "http://example.com/a b".to_string())));
        assert!(pairs.contains(&("outputMode".to_string(), "json".to_string())));
    }

    #[test]
    fn test_descriptor_headers() {
        let input = Input::url("http://example.com");
        let descriptor = RequestBuilder::new(AlchemyOperation::Language)
            .input(&input)
            .build()
            .unwrap();

        let headers = descriptor.headers();
        assert_eq!(headers.get(header::ACCEPT).unwrap(), "application/json");
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn test_json_descriptor() {
        let descriptor =
            RequestDescriptor::json("/v1/workspaces/w/message", &serde_json::json!({"message": "hi"}))
                .unwrap();
        assert_eq!(descriptor.body.as_deref(), Some(&br#"{"message":"hi"}"#[..]));
        assert_eq!(descriptor.content_type, Some(mime::APPLICATION_JSON));
        assert!(descriptor.query.is_empty());
    }
}
