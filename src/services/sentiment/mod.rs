//! Document-level and targeted sentiment.

mod service;
mod types;

pub use service::{SentimentService, SentimentServiceImpl};
pub use types::SentimentResponse;
