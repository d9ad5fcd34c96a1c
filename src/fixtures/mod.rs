//! Test fixtures for the Watson clients.
//!
//! Payloads are raw wire JSON as the services send it, numbers encoded as
//! strings included.

use serde_json::{json, Value};

/// Ranked named entities for an IBM article
pub fn entities_response() -> Value {
    json!({
        "status": "OK",
        "usage": "By accessing AlchemyAPI or using information generated by AlchemyAPI, you are agreeing to be bound by the AlchemyAPI Terms of Use",
        "url": "http://www.ibm.com",
        "language": "english",
        "totalTransactions": "2",
        "entities": [
            {
                "type": "Company",
                "relevance": "0.954",
                "count": "4",
                "text": "IBM",
                "sentiment": {"type": "positive", "score": "0.31"},
                "disambiguated": {
                    "name": "IBM",
                    "subType": ["SoftwareLicense", "OperatingSystemDeveloper"],
                    "website": "http://www.ibm.com/",
                    "dbpedia": "http://dbpedia.org/resource/IBM",
                    "freebase": "http://rdf.freebase.com/ns/m.03sc8"
                }
            },
            {
                "type": "Person",
                "relevance": "0.61",
                "count": "1",
                "text": "Thomas J. Watson",
                "quotations": [{"quotation": "\"Think.\""}]
            }
        ]
    })
}

/// Ranked keywords with string-encoded numbers and no URL
pub fn keywords_response() -> Value {
    json!({
        "status": "OK",
        "totalTransactions": "5",
        "language": "english",
        "keywords": [
            {"text": "cognitive computing", "relevance": "0.9"},
            {"text": "natural language", "relevance": "0.72"}
        ]
    })
}

/// Ranked concepts with inline linked data
pub fn concepts_response() -> Value {
    json!({
        "status": "OK",
        "url": "http://www.ibm.com/watson",
        "language": "english",
        "totalTransactions": "2",
        "concepts": [
            {
                "text": "Artificial intelligence",
                "relevance": "0.93",
                "knowledgeGraph": {"typeHierarchy": "/fields/computer science/artificial intelligence"},
                "dbpedia": "http://dbpedia.org/resource/Artificial_intelligence",
                "freebase": "http://rdf.freebase.com/ns/m.0mkz",
                "opencyc": "http://sw.opencyc.org/concept/Mx4rvViMxpwpEbGdrcN5Y29ycA"
            }
        ]
    })
}

/// Document sentiment
pub fn sentiment_response() -> Value {
    json!({
        "status": "OK",
        "language": "english",
        "totalTransactions": "1",
        "docSentiment": {"type": "positive", "score": "0.57", "mixed": "0"}
    })
}

/// Taxonomy classification
pub fn taxonomy_response() -> Value {
    json!({
        "status": "OK",
        "url": "http://www.ibm.com",
        "language": "english",
        "totalTransactions": "1",
        "taxonomy": [
            {"label": "/technology and computing/software", "score": "0.74", "confident": "yes"},
            {"label": "/business and industrial/company", "score": "0.41", "confident": "no"}
        ]
    })
}

/// One subject-action-object relation
pub fn relations_response() -> Value {
    json!({
        "status": "OK",
        "language": "english",
        "totalTransactions": "1",
        "relations": [
            {
                "sentence": "IBM built Watson.",
                "subject": {
                    "text": "IBM",
                    "entities": [{"type": "Company", "text": "IBM"}]
                },
                "action": {
                    "text": "built",
                    "lemmatized": "build",
                    "verb": {"text": "build", "tense": "past"}
                },
                "object": {
                    "text": "Watson",
                    "keywords": [{"text": "Watson"}]
                }
            }
        ]
    })
}

/// A Conversation reply
pub fn message_response() -> Value {
    json!({
        "input": {"text": "Turn on the wipers"},
        "output": {"text": ["I'll turn on the wipers for you."]},
        "intents": [{"intent": "turn_on", "confidence": 0.98}],
        "entities": [{"entity": "appliance", "value": "wipers", "location": [12, 18]}],
        "context": {"conversation_id": "1b7b67c0-90ed-45dc-8508-9488bc483d5b", "turn": 1}
    })
}

/// AlchemyLanguage error envelope
pub fn status_error_envelope(status_info: &str) -> Value {
    json!({
        "status": "ERROR",
        "statusInfo": status_info,
        "usage": "By accessing AlchemyAPI or using information generated by AlchemyAPI, you are agreeing to be bound by the AlchemyAPI Terms of Use"
    })
}

/// Conversation error envelope
pub fn code_error_envelope(error: &str, code: i64) -> Value {
    json!({"error": error, "code": code})
}
