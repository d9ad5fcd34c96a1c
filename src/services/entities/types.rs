//! Types for the entities service.

use serde::Deserialize;

use crate::response::lenient;
use crate::transport::{QueryParams, RequestOptions};
use crate::types::{DisambiguatedLinks, KnowledgeGraph, Quotation, Sentiment};

/// Enrichment flags for ranked named entity extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityOptions {
    /// Include knowledge graph type hierarchies
    pub knowledge_graph: Option<bool>,
    /// Disambiguate entities to linked-data resources
    ///
    /// Sent as the `disambiguate` query parameter in every input mode,
    /// including HTML and Text, rather than `disambiguatedEntities`.
    pub disambiguate: Option<bool>,
    /// Include linked-data links for disambiguated entities
    pub linked_data: Option<bool>,
    /// Resolve coreferences (e.g. "he" to a named person)
    pub coreference: Option<bool>,
    /// Include per-entity sentiment
    pub sentiment: Option<bool>,
    /// Include quotations attributed to each entity
    pub quotations: Option<bool>,
    /// Extract structured entities such as quantities and dates
    pub structured_entities: Option<bool>,
}

impl EntityOptions {
    /// Options with every flag unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the knowledge graph flag
    pub fn knowledge_graph(mut self, value: bool) -> Self {
        self.knowledge_graph = Some(value);
        self
    }

    /// Set the disambiguation flag
    pub fn disambiguate(mut self, value: bool) -> Self {
        self.disambiguate = Some(value);
        self
    }

    /// Set the linked data flag
    pub fn linked_data(mut self, value: bool) -> Self {
        self.linked_data = Some(value);
        self
    }

    /// Set the coreference flag
    pub fn coreference(mut self, value: bool) -> Self {
        self.coreference = Some(value);
        self
    }

    /// Set the sentiment flag
    pub fn sentiment(mut self, value: bool) -> Self {
        self.sentiment = Some(value);
        self
    }

    /// Set the quotations flag
    pub fn quotations(mut self, value: bool) -> Self {
        self.quotations = Some(value);
        self
    }

    /// Set the structured entities flag
    pub fn structured_entities(mut self, value: bool) -> Self {
        self.structured_entities = Some(value);
        self
    }
}

impl RequestOptions for EntityOptions {
    fn apply(&self, query: &mut QueryParams) {
        query.set_flag("knowledgeGraph", self.knowledge_graph);
        query.set_flag("disambiguate", self.disambiguate);
        query.set_flag("linkedData", self.linked_data);
        query.set_flag("coreference", self.coreference);
        query.set_flag("sentiment", self.sentiment);
        query.set_flag("quotations", self.quotations);
        query.set_flag("structuredEntities", self.structured_entities);
    }
}

/// Ranked named entities found in a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entities {
    /// Service status string
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: Option<String>,
    /// Analyzed URL, if any
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    /// Detected document language
    #[serde(default, deserialize_with = "lenient::string")]
    pub language: Option<String>,
    /// Extracted document text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    /// Transactions billed for this call
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_transactions: Option<i64>,
    /// Entities ordered by relevance
    #[serde(default, deserialize_with = "lenient::list")]
    pub entities: Option<Vec<Entity>>,
}

/// A named entity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Entity type, e.g. `Person` or `Company`
    #[serde(default, rename = "type", deserialize_with = "lenient::string")]
    pub entity_type: Option<String>,
    /// Surface text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    /// Relevance, from 0.0 to 1.0
    #[serde(default, deserialize_with = "lenient::number")]
    pub relevance: Option<f64>,
    /// Number of mentions
    #[serde(default, deserialize_with = "lenient::number")]
    pub count: Option<i64>,
    /// Knowledge graph data
    #[serde(default, deserialize_with = "lenient::object")]
    pub knowledge_graph: Option<KnowledgeGraph>,
    /// Linked-data disambiguation
    #[serde(default, deserialize_with = "lenient::object")]
    pub disambiguated: Option<DisambiguatedLinks>,
    /// Sentiment towards the entity
    #[serde(default, deserialize_with = "lenient::object")]
    pub sentiment: Option<Sentiment>,
    /// Quotations attributed to the entity
    #[serde(default, deserialize_with = "lenient::list")]
    pub quotations: Option<Vec<Quotation>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_options_apply() {
        let options = EntityOptions::new().sentiment(true).quotations(false);
        let mut query = QueryParams::new();
        options.apply(&mut query);

        assert_eq!(query.get("sentiment"), Some("1"));
        assert_eq!(query.get("quotations"), Some("0"));
        assert!(!query.contains("knowledgeGraph"));
        assert!(!query.contains("structuredEntities"));
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_entity_decodes_nested_records() {
        let entity: Entity = serde_json::from_value(serde_json::json!({
            "type": "Company",
            "text": "IBM",
            "relevance": "0.95",
            "count": "3",
            "knowledgeGraph": {"typeHierarchy": "/companies/IBM"},
            "disambiguated": {"name": "IBM", "subType": ["SoftwareLicense"], "dbpedia": "http://dbpedia.org/resource/IBM"},
            "sentiment": {"type": "positive", "score": "0.4", "mixed": "0"},
            "quotations": [{"quotation": "\"Watson wins\""}]
        }))
        .unwrap();

        assert_eq!(entity.entity_type.as_deref(), Some("Company"));
        assert_eq!(entity.relevance, Some(0.95));
        assert_eq!(entity.count, Some(3));
        assert_eq!(
            entity.knowledge_graph.unwrap().type_hierarchy.as_deref(),
            Some("/companies/IBM")
        );
        let links = entity.disambiguated.unwrap();
        assert_eq!(links.sub_type, Some(vec!["SoftwareLicense".to_string()]));
        let sentiment = entity.sentiment.unwrap();
        assert_eq!(sentiment.score, Some(0.4));
        assert_eq!(sentiment.mixed, Some(false));
        assert_eq!(entity.quotations.unwrap().len(), 1);
    }

    #[test]
    fn test_entity_missing_fields() {
        let entity: Entity = serde_json::from_value(serde_json::json!({"text": "Watson"})).unwrap();
        assert_eq!(entity.text.as_deref(), Some("Watson"));
        assert!(entity.entity_type.is_none());
        assert!(entity.sentiment.is_none());
    }
}
