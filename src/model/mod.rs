//! Data model.
//!
//! Documents and sentences are produced once and never mutated; the record
//! types are the output rows handed to report writers.

mod document;
mod records;

pub use document::*;
pub use records::*;
