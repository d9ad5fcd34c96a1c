//! Client interfaces and factory functions for the Watson services.

mod alchemy;
mod conversation;

pub use alchemy::{AlchemyLanguageClient, AlchemyLanguageClientImpl};
pub use conversation::{ConversationClient, ConversationClientImpl};

use crate::config::{AlchemyConfig, ConversationConfig};
use crate::errors::WatsonResult;

/// Create a new AlchemyLanguage client from configuration
pub fn create_alchemy_client(config: AlchemyConfig) -> WatsonResult<AlchemyLanguageClientImpl> {
    AlchemyLanguageClientImpl::new(config)
}

/// Create a new AlchemyLanguage client from environment variables
pub fn create_alchemy_client_from_env() -> WatsonResult<AlchemyLanguageClientImpl> {
    let config = AlchemyConfig::from_env()?;
    create_alchemy_client(config)
}

/// Create a new Conversation client from configuration
pub fn create_conversation_client(
    config: ConversationConfig,
) -> WatsonResult<ConversationClientImpl> {
    ConversationClientImpl::new(config)
}

/// Create a new Conversation client from environment variables
pub fn create_conversation_client_from_env() -> WatsonResult<ConversationClientImpl> {
    let config = ConversationConfig::from_env()?;
    create_conversation_client(config)
}
