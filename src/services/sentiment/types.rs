//! Types for the sentiment service.

use serde::Deserialize;

use crate::response::lenient;
use crate::types::Sentiment;

/// Sentiment of a whole document or of a target phrase within it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResponse {
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
    /// Sentiment of the document or target
    #[serde(default, deserialize_with = "lenient::object")]
    pub doc_sentiment: Option<Sentiment>,
}
