//! Taxonomy classification.

mod service;
mod types;

pub use service::{TaxonomyService, TaxonomyServiceImpl};
pub use types::{Taxonomies, Taxonomy};
