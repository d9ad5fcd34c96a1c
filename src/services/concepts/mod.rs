//! Concept tagging.

mod service;
mod types;

pub use service::{ConceptsService, ConceptsServiceImpl};
pub use types::{Concept, ConceptOptions, ConceptResponse};
