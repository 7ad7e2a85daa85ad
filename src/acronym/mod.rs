//! Acronym recognition.
//!
//! - [`normalize`] - canonical acronym keys (`U.S.A.` and `U S A` are `USA`)
//! - [`definition`] - explicit `Expansion (ACR)` / `ACR (Expansion)` pairs
//! - [`scanner`] - bare acronym occurrences inside prose sentences
//! - [`guess`] - best-effort expansions for undefined acronyms

pub mod definition;
pub mod guess;
pub mod lexicon;
pub mod normalize;
pub mod scanner;

pub use definition::{extract_definitions, DefinitionMatch};
pub use guess::guess_expansion;
pub use normalize::{is_acronym_key, normalize};
pub use scanner::{classify_paren, classify_token, scan_sentence, Rejection};
