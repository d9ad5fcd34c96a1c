//! Service implementations for the Watson APIs.
//!
//! ## AlchemyLanguage
//! - `entities` - Ranked named entity extraction
//! - `keywords` - Ranked keyword extraction
//! - `concepts` - Concept tagging with linked data
//! - `sentiment` - Document and targeted sentiment
//! - `taxonomy` - Taxonomy classification
//! - `relations` - Subject-action-object relations
//! - `documents` - Authors, language, dates, text, title, microformats, feeds
//!
//! ## Conversation
//! - `conversation` - Workspace message exchange
//!
//! Every operation runs through the [`dispatcher`].

pub mod concepts;
pub mod conversation;
pub mod dispatcher;
pub mod documents;
pub mod entities;
pub mod keywords;
pub mod relations;
pub mod sentiment;
pub mod taxonomy;

pub use dispatcher::{complete, Dispatcher, ALCHEMY_SERVICE, CONVERSATION_SERVICE};
