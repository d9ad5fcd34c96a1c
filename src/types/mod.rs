//! Common types shared across the AlchemyLanguage services.

mod document;
mod input;
mod operation;
mod shared;

pub use document::Document;
pub use input::{Input, InputMode};
pub use operation::AlchemyOperation;
pub use shared::{DisambiguatedLinks, KnowledgeGraph, Quotation, Sentiment};
