//! Error types for the Watson client.
//!
//! Four kinds reach callers from a dispatched call: `Encoding`, `Network`,
//! `Service` and `Decode`. `Validation` and `Configuration` cover requests
//! and clients rejected locally.

mod categories;
mod error;

pub use categories::{ErrorCategory, ValidationDetail};
pub use error::{WatsonError, WatsonResult};
