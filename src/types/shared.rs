//! Substructures shared by several AlchemyLanguage results.
//!
//! Ranked items (entities, keywords, concepts, relation parts) embed these
//! records by composition. Every field is optional.

use serde::Deserialize;

use crate::response::lenient;

/// Type hierarchy from the knowledge graph.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeGraph {
    /// Slash-separated path, e.g. `/companies/tech/IBM`
    #[serde(default, deserialize_with = "lenient::string")]
    pub type_hierarchy: Option<String>,
}

/// Sentiment polarity and strength.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sentiment {
    /// `positive`, `negative` or `neutral`
    #[serde(default, rename = "type", deserialize_with = "lenient::string")]
    pub sentiment_type: Option<String>,
    /// Strength, from -1.0 to 1.0
    #[serde(default, deserialize_with = "lenient::number")]
    pub score: Option<f64>,
    /// Whether the sentiment is mixed
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub mixed: Option<bool>,
}

/// A quotation attributed to an entity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Quotation {
    /// The quoted text
    #[serde(default, deserialize_with = "lenient::string")]
    pub quotation: Option<String>,
}

/// Links to linked-data resources for a disambiguated item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisambiguatedLinks {
    /// Disambiguated name
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    /// Entity sub-types
    #[serde(default, deserialize_with = "lenient::list")]
    pub sub_type: Option<Vec<String>>,
    /// Official website
    #[serde(default, deserialize_with = "lenient::string")]
    pub website: Option<String>,
    /// Latitude and longitude
    #[serde(default, deserialize_with = "lenient::string")]
    pub geo: Option<String>,
    /// DBpedia link
    #[serde(default, deserialize_with = "lenient::string")]
    pub dbpedia: Option<String>,
    /// YAGO link
    #[serde(default, deserialize_with = "lenient::string")]
    pub yago: Option<String>,
    /// OpenCyc link
    #[serde(default, deserialize_with = "lenient::string")]
    pub opencyc: Option<String>,
    /// UMBEL link
    #[serde(default, deserialize_with = "lenient::string")]
    pub umbel: Option<String>,
    /// Freebase link
    #[serde(default, deserialize_with = "lenient::string")]
    pub freebase: Option<String>,
    /// CIA World Factbook link
    #[serde(default, deserialize_with = "lenient::string")]
    pub cia_factbook: Option<String>,
    /// US Census link
    #[serde(default, deserialize_with = "lenient::string")]
    pub census: Option<String>,
    /// GeoNames link
    #[serde(default, deserialize_with = "lenient::string")]
    pub geonames: Option<String>,
    /// MusicBrainz link
    #[serde(default, deserialize_with = "lenient::string")]
    pub music_brainz: Option<String>,
    /// CrunchBase link
    #[serde(default, deserialize_with = "lenient::string")]
    pub crunchbase: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentiment_with_string_score() {
        let sentiment: Sentiment =
            serde_json::from_value(json!({"type": "positive", "score": "0.57", "mixed": "1"}))
                .unwrap();
        assert_eq!(sentiment.sentiment_type.as_deref(), Some("positive"));
        assert_eq!(sentiment.score, Some(0.57));
        assert_eq!(sentiment.mixed, Some(true));
    }

    #[test]
    fn test_neutral_sentiment_without_score() {
        let sentiment: Sentiment = serde_json::from_value(json!({"type": "neutral"})).unwrap();
        assert!(sentiment.score.is_none());
        assert!(sentiment.mixed.is_none());
    }

    #[test]
    fn test_disambiguated_links() {
        let links: DisambiguatedLinks = serde_json::from_value(json!({
            "name": "IBM",
            "subType": ["SoftwareLicense", "OperatingSystemDeveloper"],
            "website": "http://www.ibm.com/",
            "dbpedia": "http://dbpedia.org/resource/IBM",
            "ciaFactbook": 12,
            "musicBrainz": "http://zitgist.com/music/artist/x"
        }))
        .unwrap();

        assert_eq!(links.name.as_deref(), Some("IBM"));
        assert_eq!(links.sub_type.as_ref().map(Vec::len), Some(2));
        assert!(links.cia_factbook.is_none());
        assert!(links.music_brainz.is_some());
        assert!(links.yago.is_none());
    }

    #[test]
    fn test_knowledge_graph() {
        let kg: KnowledgeGraph =
            serde_json::from_value(json!({"typeHierarchy": "/companies/IBM"})).unwrap();
        assert_eq!(kg.type_hierarchy.as_deref(), Some("/companies/IBM"));
    }
}
