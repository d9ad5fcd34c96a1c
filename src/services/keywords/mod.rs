//! Keyword extraction.

mod service;
mod types;

pub use service::{KeywordsService, KeywordsServiceImpl};
pub use types::{Keyword, KeywordOptions, Keywords};
