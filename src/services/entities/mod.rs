//! Named entity extraction.

mod service;
mod types;

pub use service::{EntitiesService, EntitiesServiceImpl};
pub use types::{Entities, Entity, EntityOptions};
