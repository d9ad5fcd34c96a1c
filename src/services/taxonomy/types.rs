//! Types for the taxonomy service.

use serde::Deserialize;

use crate::response::lenient;

/// Taxonomy categories for a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomies {
    /// Transactions billed for this call
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_transactions: Option<i64>,
    /// Detected document language
    #[serde(default, deserialize_with = "lenient::string")]
    pub language: Option<String>,
    /// Analyzed URL, if any
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    /// Extracted document text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    /// Categories ordered by score
    #[serde(default, deserialize_with = "lenient::list")]
    pub taxonomy: Option<Vec<Taxonomy>>,
}

/// One taxonomy category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Taxonomy {
    /// Slash-separated category, e.g. `/technology and computing/software`
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: Option<String>,
    /// Confidence score, from 0.0 to 1.0
    #[serde(default, deserialize_with = "lenient::number")]
    pub score: Option<f64>,
    /// Whether the service is confident in the label
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub confident: Option<bool>,
}

impl Taxonomy {
    /// Category path segments
    pub fn segments(&self) -> Vec<&str> {
        self.label
            .as_deref()
            .map(|label| label.split('/').filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }
}
