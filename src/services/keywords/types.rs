//! Types for the keywords service.

use serde::Deserialize;

use crate::response::lenient;
use crate::transport::{QueryParams, RequestOptions};
use crate::types::{KnowledgeGraph, Sentiment};

/// Enrichment flags for ranked keyword extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordOptions {
    /// Include knowledge graph type hierarchies
    pub knowledge_graph: Option<bool>,
    /// Include per-keyword sentiment
    pub sentiment: Option<bool>,
    /// Use strict extraction instead of normal extraction
    pub strict_mode: Option<bool>,
}

impl KeywordOptions {
    /// Options with every flag unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the knowledge graph flag
    pub fn knowledge_graph(mut self, value: bool) -> Self {
        self.knowledge_graph = Some(value);
        self
    }

    /// Set the sentiment flag
    pub fn sentiment(mut self, value: bool) -> Self {
        self.sentiment = Some(value);
        self
    }

    /// Choose strict or normal extraction
    pub fn strict_mode(mut self, value: bool) -> Self {
        self.strict_mode = Some(value);
        self
    }
}

impl RequestOptions for KeywordOptions {
    fn apply(&self, query: &mut QueryParams) {
        query.set_flag("knowledgeGraph", self.knowledge_graph);
        query.set_flag("sentiment", self.sentiment);
        query.set_opt(
            "keywordExtractMode",
            self.strict_mode
                .map(|strict| if strict { "strict" } else { "normal" }),
        );
    }
}

/// Ranked keywords found in a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keywords {
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
    /// Keywords ordered by relevance
    #[serde(default, deserialize_with = "lenient::list")]
    pub keywords: Option<Vec<Keyword>>,
}

/// A ranked keyword.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    /// Keyword text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    /// Relevance, from 0.0 to 1.0
    #[serde(default, deserialize_with = "lenient::number")]
    pub relevance: Option<f64>,
    /// Knowledge graph data
    #[serde(default, deserialize_with = "lenient::object")]
    pub knowledge_graph: Option<KnowledgeGraph>,
    /// Sentiment towards the keyword
    #[serde(default, deserialize_with = "lenient::object")]
    pub sentiment: Option<Sentiment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(None, None ; "unset")]
    #[test_case(Some(true), Some("strict") ; "strict")]
    #[test_case(Some(false), Some("normal") ; "normal")]
    fn test_extract_mode(strict: Option<bool>, expected: Option<&str>) {
        let options = KeywordOptions {
            strict_mode: strict,
            ..Default::default()
        };
        let mut query = QueryParams::new();
        options.apply(&mut query);
        assert_eq!(query.get("keywordExtractMode"), expected);
    }

    #[test]
    fn test_keywords_string_encoded_numbers() {
        let keywords: Keywords = serde_json::from_value(serde_json::json!({
            "totalTransactions": "5",
            "language": "english",
            "keywords": [{"text": "cognitive computing", "relevance": "0.9"}]
        }))
        .unwrap();

        assert_eq!(keywords.total_transactions, Some(5));
        assert_eq!(keywords.language.as_deref(), Some("english"));
        assert!(keywords.url.is_none());
        let first = &keywords.keywords.unwrap()[0];
        assert_eq!(first.relevance, Some(0.9));
        assert!(first.sentiment.is_none());
    }
}
