//! Types for the Conversation message service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::response::lenient;

/// A user message with optional conversation state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageRequest {
    /// User input text
    pub message: String,
    /// State carried over from the previous response
    #[serde(skip_serializing_if = "is_empty_context")]
    pub context: Option<Map<String, Value>>,
}

fn is_empty_context(context: &Option<Map<String, Value>>) -> bool {
    context.as_ref().map_or(true, Map::is_empty)
}

impl MessageRequest {
    /// Start a conversation turn with no prior context
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
        }
    }

    /// Attach context from a previous turn
    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context = Some(context);
        self
    }

    /// Set a single context entry
    pub fn context_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

/// The reply to a message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    /// Input the reply was produced for
    #[serde(default, deserialize_with = "lenient::object")]
    pub input: Option<MessageInput>,
    /// Reply text
    #[serde(default, deserialize_with = "lenient::object")]
    pub output: Option<MessageOutput>,
    /// Recognized intents, most confident first
    #[serde(default, deserialize_with = "lenient::list")]
    pub intents: Option<Vec<Intent>>,
    /// Recognized entities
    #[serde(default, deserialize_with = "lenient::list")]
    pub entities: Option<Vec<EntityMention>>,
    /// State to send with the next message
    #[serde(default, deserialize_with = "lenient::map")]
    pub context: Option<Map<String, Value>>,
}

impl MessageResponse {
    /// Reply lines joined with newlines
    pub fn text(&self) -> Option<String> {
        self.output
            .as_ref()
            .and_then(|output| output.text.as_ref())
            .map(|lines| lines.join("\n"))
    }

    /// Most confident intent
    pub fn top_intent(&self) -> Option<&Intent> {
        self.intents.as_ref()?.first()
    }

    /// Request for the next turn carrying this response's context
    pub fn follow_up(&self, message: impl Into<String>) -> MessageRequest {
        MessageRequest {
            message: message.into(),
            context: self.context.clone(),
        }
    }
}

/// Echoed input.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageInput {
    /// Input text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
}

/// Reply output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageOutput {
    /// Reply lines
    #[serde(default, deserialize_with = "lenient::strings")]
    pub text: Option<Vec<String>>,
}

/// A recognized intent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Intent {
    /// Intent name
    #[serde(default, deserialize_with = "lenient::string")]
    pub intent: Option<String>,
    /// Confidence, from 0.0 to 1.0
    #[serde(default, deserialize_with = "lenient::number")]
    pub confidence: Option<f64>,
}

/// A recognized entity value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EntityMention {
    /// Entity name
    #[serde(default, deserialize_with = "lenient::string")]
    pub entity: Option<String>,
    /// Matched value
    #[serde(default, deserialize_with = "lenient::string")]
    pub value: Option<String>,
    /// Character offsets of the mention
    #[serde(default, deserialize_with = "lenient::list")]
    pub location: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_context_is_omitted() {
        let request = MessageRequest::new("Hello");
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"message": "Hello"}));

        let request = MessageRequest::new("Hello").with_context(Map::new());
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"message": "Hello"}));
    }

    #[test]
    fn test_context_is_serialized() {
        let request = MessageRequest::new("Turn on the lights").context_value("turn", 2);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"message": "Turn on the lights", "context": {"turn": 2}})
        );
    }

    #[test]
    fn test_response_helpers() {
        let response: MessageResponse = serde_json::from_value(json!({
            "input": {"text": "lights on"},
            "output": {"text": ["Turning on.", "Anything else?"]},
            "intents": [{"intent": "turn_on", "confidence": "0.97"}],
            "entities": [{"entity": "appliance", "value": "lights", "location": [0, 6]}],
            "context": {"conversation_id": "abc"}
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("Turning on.\nAnything else?"));
        assert_eq!(response.top_intent().unwrap().confidence, Some(0.97));
        assert_eq!(response.entities.as_ref().unwrap()[0].location, Some(vec![0, 6]));

        let next = response.follow_up("thanks");
        assert_eq!(
            next.context.unwrap().get("conversation_id"),
            Some(&json!("abc"))
        );
    }
}
