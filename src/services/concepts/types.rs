//! Types for the concepts service.

use serde::Deserialize;

use crate::response::lenient;
use crate::transport::{QueryParams, RequestOptions};
use crate::types::{DisambiguatedLinks, KnowledgeGraph};

/// Enrichment flags for ranked concept tagging.
///
/// Linked data is always requested for concepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptOptions {
    /// Include knowledge graph type hierarchies
    pub knowledge_graph: Option<bool>,
}

impl ConceptOptions {
    /// Options with every flag unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the knowledge graph flag
    pub fn knowledge_graph(mut self, value: bool) -> Self {
        self.knowledge_graph = Some(value);
        self
    }
}

impl RequestOptions for ConceptOptions {
    fn apply(&self, query: &mut QueryParams) {
        query.set_flag("knowledgeGraph", self.knowledge_graph);
    }
}

/// Ranked concepts for a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptResponse {
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
    /// Concepts ordered by relevance
    #[serde(default, deserialize_with = "lenient::list")]
    pub concepts: Option<Vec<Concept>>,
}

/// A tagged concept. The linked-data links sit inline on the concept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// Concept label
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    /// Relevance, from 0.0 to 1.0
    #[serde(default, deserialize_with = "lenient::number")]
    pub relevance: Option<f64>,
    /// Knowledge graph data
    #[serde(default, deserialize_with = "lenient::object")]
    pub knowledge_graph: Option<KnowledgeGraph>,
    /// Linked-data links
    #[serde(flatten)]
    pub links: DisambiguatedLinks,
}
