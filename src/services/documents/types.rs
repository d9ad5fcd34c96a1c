//! Types for the documents service.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::response::lenient;
use crate::transport::{QueryParams, RequestOptions};

/// Format of publication dates, e.g. `20150210T000000`.
pub(crate) const PUBLICATION_DATE_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Flags for cleaned text extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Use document metadata (title, description) as hints
    pub use_metadata: Option<bool>,
    /// Keep hyperlinks in the extracted text
    pub extract_links: Option<bool>,
}

impl TextOptions {
    /// Options with every flag unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the use-metadata flag
    pub fn use_metadata(mut self, value: bool) -> Self {
        self.use_metadata = Some(value);
        self
    }

    /// Set the extract-links flag
    pub fn extract_links(mut self, value: bool) -> Self {
        self.extract_links = Some(value);
        self
    }
}

impl RequestOptions for TextOptions {
    fn apply(&self, query: &mut QueryParams) {
        query.set_flag("useMetadata", self.use_metadata);
        query.set_flag("extractLinks", self.extract_links);
    }
}

/// Flags for title extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleOptions {
    /// Use document metadata as a hint
    pub use_metadata: Option<bool>,
}

impl TitleOptions {
    /// Options with every flag unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the use-metadata flag
    pub fn use_metadata(mut self, value: bool) -> Self {
        self.use_metadata = Some(value);
        self
    }
}

impl RequestOptions for TitleOptions {
    fn apply(&self, query: &mut QueryParams) {
        query.set_flag("useMetadata", self.use_metadata);
    }
}

/// Authors of a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentAuthors {
    /// Analyzed URL, if any
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    /// Detected authors
    #[serde(default, deserialize_with = "lenient::object")]
    pub authors: Option<Authors>,
}

/// Author names with a confidence flag.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Authors {
    /// Whether the service is confident in the result
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub confident: Option<bool>,
    /// Author names
    #[serde(default, deserialize_with = "lenient::list")]
    pub names: Option<Vec<String>>,
}

/// Language of a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Transactions billed for this call
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_transactions: Option<i64>,
    /// Analyzed URL, if any
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    /// Language name, e.g. `english`
    #[serde(default, deserialize_with = "lenient::string")]
    pub language: Option<String>,
    /// ISO 639-1 code
    #[serde(default, rename = "iso-639-1", deserialize_with = "lenient::string")]
    pub iso_639_1: Option<String>,
    /// ISO 639-2 code
    #[serde(default, rename = "iso-639-2", deserialize_with = "lenient::string")]
    pub iso_639_2: Option<String>,
    /// ISO 639-3 code
    #[serde(default, rename = "iso-639-3", deserialize_with = "lenient::string")]
    pub iso_639_3: Option<String>,
    /// Ethnologue link
    #[serde(default, deserialize_with = "lenient::string")]
    pub ethnologue: Option<String>,
    /// Estimated number of native speakers
    #[serde(default, rename = "native-speakers", deserialize_with = "lenient::string")]
    pub native_speakers: Option<String>,
    /// Wikipedia link
    #[serde(default, deserialize_with = "lenient::string")]
    pub wikipedia: Option<String>,
}

/// Publication date of a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationResponse {
    /// Analyzed URL, if any
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    /// Detected publication date
    #[serde(default, deserialize_with = "lenient::object")]
    pub publication_date: Option<PublicationDate>,
}

/// A publication date with a confidence flag.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PublicationDate {
    /// Date in `YYYYMMDDTHHMMSS` form
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: Option<String>,
    /// Whether the service is confident in the date
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub confident: Option<bool>,
}

impl PublicationDate {
    /// Parsed date, if present and well formed
    pub fn date_time(&self) -> Option<NaiveDateTime> {
        let date = self.date.as_deref()?.trim();
        NaiveDateTime::parse_from_str(date, PUBLICATION_DATE_FORMAT).ok()
    }
}

/// Microformat fields found in a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Microformats {
    /// Analyzed URL, if any
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    /// Microformat fields
    #[serde(default, deserialize_with = "lenient::list")]
    pub microformats: Option<Vec<Microformat>>,
}

/// A microformat field and its data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Microformat {
    /// Field name
    #[serde(default, deserialize_with = "lenient::string")]
    pub field: Option<String>,
    /// Field data
    #[serde(default, deserialize_with = "lenient::string")]
    pub data: Option<String>,
}

/// Text extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentText {
    /// Analyzed URL, if any
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    /// Detected document language
    #[serde(default, deserialize_with = "lenient::string")]
    pub language: Option<String>,
    /// Extracted text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
}

/// Title of a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentTitle {
    /// Analyzed URL, if any
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    /// Document title
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
}

/// RSS and ATOM feed links found in a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Feeds {
    /// Analyzed URL, if any
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    /// Feed links
    #[serde(default, deserialize_with = "lenient::list")]
    pub feeds: Option<Vec<Feed>>,
}

/// A feed link.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Feed {
    /// Feed URL
    #[serde(default, deserialize_with = "lenient::string")]
    pub feed: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_publication_date_parse() {
        let response: PublicationResponse = serde_json::from_value(serde_json::json!({
            "publicationDate": {"date": "20150210T134500", "confident": "yes"}
        }))
        .unwrap();

        let date = response.publication_date.unwrap();
        assert_eq!(date.confident, Some(true));
        let parsed = date.date_time().unwrap();
        assert_eq!(parsed.year(), 2015);
        assert_eq!(parsed.month(), 2);
        assert_eq!(parsed.hour(), 13);
    }

    #[test]
    fn test_publication_date_unparseable() {
        let date = PublicationDate {
            date: Some("sometime".to_string()),
            confident: Some(false),
        };
        assert!(date.date_time().is_none());
        assert!(PublicationDate::default().date_time().is_none());
    }

    #[test]
    fn test_language_hyphenated_keys() {
        let language: Language = serde_json::from_value(serde_json::json!({
            "language": "english",
            "iso-639-1": "en",
            "iso-639-2": "eng",
            "iso-639-3": "eng",
            "native-speakers": "309-400 million"
        }))
        .unwrap();

        assert_eq!(language.iso_639_1.as_deref(), Some("en"));
        assert_eq!(language.iso_639_3.as_deref(), Some("eng"));
        assert_eq!(language.native_speakers.as_deref(), Some("309-400 million"));
        assert!(language.wikipedia.is_none());
    }

    #[test]
    fn test_microformats_fields() {
        let microformats: Microformats = serde_json::from_value(serde_json::json!({
            "url": "http://example.com/contact",
            "microformats": [
                {"field": "fn", "data": "Ada Lovelace"},
                {"field": "tel", "data": 5551234}
            ]
        }))
        .unwrap();

        assert_eq!(microformats.url.as_deref(), Some("http://example.com/contact"));
        let fields = microformats.microformats.unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field.as_deref(), Some("fn"));
        assert_eq!(fields[0].data.as_deref(), Some("Ada Lovelace"));
        assert_eq!(fields[1].field.as_deref(), Some("tel"));
        assert_eq!(fields[1].data, None);
    }

    #[test]
    fn test_authors_names() {
        let authors: DocumentAuthors = serde_json::from_value(serde_json::json!({
            "authors": {"confident": "no", "names": ["Ada Lovelace", 42, "Alan Turing"]}
        }))
        .unwrap();

        let authors = authors.authors.unwrap();
        assert_eq!(authors.confident, Some(false));
        assert_eq!(
            authors.names,
            Some(vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()])
        );
    }

    #[test]
    fn test_text_and_title_options() {
        let mut query = QueryParams::new();
        TextOptions::new()
            .use_metadata(false)
            .extract_links(true)
            .apply(&mut query);
        assert_eq!(query.get("useMetadata"), Some("0"));
        assert_eq!(query.get("extractLinks"), Some("1"));

        let mut query = QueryParams::new();
        TitleOptions::new().apply(&mut query);
        assert!(query.is_empty());
    }
}
