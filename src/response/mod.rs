//! Response handling: error-envelope detection, then tolerant decoding.

mod decoder;
mod envelope;
pub mod lenient;

pub use decoder::{decode, interpret};
pub use envelope::ErrorEnvelope;
