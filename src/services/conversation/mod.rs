//! Conversation message exchange.

mod service;
mod types;

pub use service::{MessageService, MessageServiceImpl};
pub use types::{
    EntityMention, Intent, MessageInput, MessageOutput, MessageRequest, MessageResponse,
};
