//! Subject-action-object relation extraction.

mod service;
mod types;

pub use service::{RelationsService, RelationsServiceImpl};
pub use types::{
    RelationAction, RelationEntity, RelationKeyword, RelationObject, RelationOptions,
    RelationSubject, SaoRelation, SaoRelations, Verb,
};
