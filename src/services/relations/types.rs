//! Types for the relations service.

use serde::Deserialize;

use crate::response::lenient;
use crate::transport::{QueryParams, RequestOptions};
use crate::types::{DisambiguatedLinks, KnowledgeGraph, Sentiment};

/// Enrichment flags for relation extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationOptions {
    /// Include knowledge graph type hierarchies
    pub knowledge_graph: Option<bool>,
    /// Disambiguate entities in relation parts
    pub disambiguate: Option<bool>,
    /// Include linked-data links for disambiguated entities
    pub linked_data: Option<bool>,
    /// Resolve coreferences
    pub coreference: Option<bool>,
    /// Include sentiment for subjects and objects
    pub sentiment: Option<bool>,
    /// Extract keywords from relation parts
    pub keywords: Option<bool>,
    /// Extract entities from relation parts
    pub entities: Option<bool>,
    /// Only return relations that involve an entity
    pub require_entities: Option<bool>,
    /// Exclude entity text when computing sentiment
    pub sentiment_exclude_entities: Option<bool>,
}

impl RelationOptions {
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

    /// Set the keywords flag
    pub fn keywords(mut self, value: bool) -> Self {
        self.keywords = Some(value);
        self
    }

    /// Set the entities flag
    pub fn entities(mut self, value: bool) -> Self {
        self.entities = Some(value);
        self
    }

    /// Set the require-entities flag
    pub fn require_entities(mut self, value: bool) -> Self {
        self.require_entities = Some(value);
        self
    }

    /// Set the sentiment-exclude-entities flag
    pub fn sentiment_exclude_entities(mut self, value: bool) -> Self {
        self.sentiment_exclude_entities = Some(value);
        self
    }
}

impl RequestOptions for RelationOptions {
    fn apply(&self, query: &mut QueryParams) {
        query.set_flag("knowledgeGraph", self.knowledge_graph);
        query.set_flag("disambiguate", self.disambiguate);
        query.set_flag("linkedData", self.linked_data);
        query.set_flag("coreference", self.coreference);
        query.set_flag("sentiment", self.sentiment);
        query.set_flag("keywords", self.keywords);
        query.set_flag("entities", self.entities);
        query.set_flag("requireEntities", self.require_entities);
        query.set_flag("sentimentExcludeEntities", self.sentiment_exclude_entities);
    }
}

/// Relations extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaoRelations {
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
    /// Relations in document order
    #[serde(default, deserialize_with = "lenient::list")]
    pub relations: Option<Vec<SaoRelation>>,
}

/// One subject-action-object relation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SaoRelation {
    /// Sentence the relation was found in
    #[serde(default, deserialize_with = "lenient::string")]
    pub sentence: Option<String>,
    /// Who or what acts
    #[serde(default, deserialize_with = "lenient::object")]
    pub subject: Option<RelationSubject>,
    /// The action performed
    #[serde(default, deserialize_with = "lenient::object")]
    pub action: Option<RelationAction>,
    /// Who or what is acted upon
    #[serde(default, deserialize_with = "lenient::object")]
    pub object: Option<RelationObject>,
}

/// Subject of a relation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RelationSubject {
    /// Subject text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    /// Sentiment of the subject
    #[serde(default, deserialize_with = "lenient::object")]
    pub sentiment: Option<Sentiment>,
    /// Entities in the subject
    #[serde(default, deserialize_with = "lenient::list")]
    pub entities: Option<Vec<RelationEntity>>,
    /// Keywords in the subject
    #[serde(default, deserialize_with = "lenient::list")]
    pub keywords: Option<Vec<RelationKeyword>>,
}

/// Action of a relation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RelationAction {
    /// Action text as written
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    /// Lemmatized action text
    #[serde(default, deserialize_with = "lenient::string")]
    pub lemmatized: Option<String>,
    /// Main verb
    #[serde(default, deserialize_with = "lenient::object")]
    pub verb: Option<Verb>,
}

/// Verb of a relation action.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Verb {
    /// Verb text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    /// `past`, `present` or `future`
    #[serde(default, deserialize_with = "lenient::string")]
    pub tense: Option<String>,
    /// Whether the verb is negated
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub negated: Option<bool>,
}

/// Object of a relation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationObject {
    /// Object text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    /// Sentiment of the object
    #[serde(default, deserialize_with = "lenient::object")]
    pub sentiment: Option<Sentiment>,
    /// Sentiment the subject expresses towards the object
    #[serde(default, deserialize_with = "lenient::object")]
    pub sentiment_from_subject: Option<Sentiment>,
    /// Entities in the object
    #[serde(default, deserialize_with = "lenient::list")]
    pub entities: Option<Vec<RelationEntity>>,
    /// Keywords in the object
    #[serde(default, deserialize_with = "lenient::list")]
    pub keywords: Option<Vec<RelationKeyword>>,
}

/// Entity mentioned inside a relation part.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationEntity {
    /// Entity text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    /// Entity type
    #[serde(default, rename = "type", deserialize_with = "lenient::string")]
    pub entity_type: Option<String>,
    /// Knowledge graph data
    #[serde(default, deserialize_with = "lenient::object")]
    pub knowledge_graph: Option<KnowledgeGraph>,
    /// Linked-data disambiguation
    #[serde(default, deserialize_with = "lenient::object")]
    pub disambiguated: Option<DisambiguatedLinks>,
}

/// Keyword found inside a relation part.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationKeyword {
    /// Keyword text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    /// Knowledge graph data
    #[serde(default, deserialize_with = "lenient::object")]
    pub knowledge_graph: Option<KnowledgeGraph>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_options_keys() {
        let options = RelationOptions::new()
            .require_entities(true)
            .sentiment_exclude_entities(false)
            .keywords(true);
        let mut query = QueryParams::new();
        options.apply(&mut query);

        assert_eq!(query.get("requireEntities"), Some("1"));
        assert_eq!(query.get("sentimentExcludeEntities"), Some("0"));
        assert_eq!(query.get("keywords"), Some("1"));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_relation_decode() {
        let relation: SaoRelation = serde_json::from_value(serde_json::json!({
            "sentence": "IBM built Watson.",
            "subject": {
                "text": "IBM",
                "entities": [{"type": "Company", "text": "IBM"}]
            },
            "action": {
                "text": "built",
                "lemmatized": "build",
                "verb": {"text": "build", "tense": "past", "negated": "1"}
            },
            "object": {
                "text": "Watson",
                "sentimentFromSubject": {"type": "positive", "score": "0.3"}
            }
        }))
        .unwrap();

        let subject = relation.subject.unwrap();
        assert_eq!(
            subject.entities.unwrap()[0].entity_type.as_deref(),
            Some("Company")
        );
        let verb = relation.action.unwrap().verb.unwrap();
        assert_eq!(verb.tense.as_deref(), Some("past"));
        assert_eq!(verb.negated, Some(true));
        let object = relation.object.unwrap();
        assert_eq!(object.sentiment_from_subject.unwrap().score, Some(0.3));
        assert!(object.keywords.is_none());
    }
}
