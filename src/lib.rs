//! # reqlint
//!
//! Acronym and wording checks for corpora of plain-text software requirements
//! specifications.
//!
//! ## Checks
//!
//! - **Undefined acronyms**: used in a document that never defines them
//! - **Late definitions**: used before the sentence that defines them
//! - **Inconsistent definitions**: one acronym with several expansions, or
//!   one expansion with several acronyms, across the corpus
//! - **Subjective terms and smells**: "fast", "user-friendly", "TBD", ...
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> reqlint::Result<()> {
//!     let report = reqlint::check_dir("data/srs")?;
//!
//!     for issue in &report.issues {
//!         println!("{}: {} ({})", issue.file, issue.acronym, issue.issue_kind);
//!     }
//!
//!     report.write_json("outputs", true)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): analyze documents on the rayon thread pool

pub mod acronym;
pub mod analyzer;
pub mod config;
pub mod corpus;
pub mod error;
pub mod model;
pub mod noise;
pub mod prepare;
pub mod report;
pub mod segment;
pub mod smells;

// Re-exports
pub use analyzer::{DocumentAnalyzer, DocumentReport, KeyOccurrences};
pub use config::{AnalyzerConfig, NoiseConfig, OccurrenceFilter};
pub use corpus::{check_dir, check_dir_with_config, list_documents, Corpus, Relations};
pub use error::{Error, Result};
pub use model::{
    Definition, Document, GlossaryRecord, InconsistencyKind, InconsistencyRecord, IssueKind,
    IssueRecord, Sentence, SmellKind, SmellRecord, SubjectiveFlag,
};
pub use noise::{NoiseDecision, NoiseFilter};
pub use prepare::{prepare, PrepareOptions};
pub use report::{CorpusReport, Summary};

/// Analyzes a single document with default settings.
///
/// # Example
///
/// ```
/// let report = reqlint::analyze_text(
///     "srs.txt",
///     "Use the API to connect. Document the API (Application Programming Interface) here.",
/// );
/// assert_eq!(report.issues.len(), 1);
/// assert_eq!(report.issues[0].issue_kind, reqlint::IssueKind::FirstUseBeforeDefinition);
/// ```
pub fn analyze_text(name: &str, text: &str) -> DocumentReport {
    DocumentAnalyzer::with_defaults().analyze(name, text)
}
