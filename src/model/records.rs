//! Output records.

use serde::Serialize;
use std::fmt;

/// An explicit acronym definition retained for a document.
///
/// At most one definition is kept per key and document: the first one in
/// document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Normalized acronym key
    pub key: String,
    /// Expansion text as captured
    pub expansion: String,
    /// Index of the defining sentence
    pub sentence_index: usize,
}

/// One glossary row per (document, definition).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossaryRecord {
    pub acronym: String,
    pub expansion: String,
    pub file: String,
    pub sentence_index: usize,
    pub sentence_text: String,
}

/// Kind of per-document acronym defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Used but never defined in the document.
    UndefinedInDocument,
    /// Used before the sentence that defines it.
    FirstUseBeforeDefinition,
}

impl IssueKind {
    /// Returns the snake_case name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::UndefinedInDocument => "undefined_in_document",
            IssueKind::FirstUseBeforeDefinition => "first_use_before_definition",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-document acronym defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRecord {
    pub file: String,
    pub acronym: String,
    pub issue_kind: IssueKind,
    /// First offending sentence
    pub sentence_index: usize,
    pub sentence_text: String,
    /// Best-effort expansion; empty when none was found or not applicable.
    pub guessed_expansion: String,
}

/// Kind of corpus-wide conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InconsistencyKind {
    /// One acronym defined with several expansions.
    AcronymMultipleExpansions,
    /// One expansion abbreviated by several acronyms.
    ExpansionMultipleAcronyms,
}

impl InconsistencyKind {
    /// Returns the snake_case name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            InconsistencyKind::AcronymMultipleExpansions => "acronym_multiple_expansions",
            InconsistencyKind::ExpansionMultipleAcronyms => "expansion_multiple_acronyms",
        }
    }
}

impl fmt::Display for InconsistencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A corpus-wide acronym conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InconsistencyRecord {
    pub issue_kind: InconsistencyKind,
    /// The shared acronym or expansion
    pub key: String,
    /// Sorted conflicting values joined with `"; "`
    pub details: String,
}

/// A sentence containing a subjective quality term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectiveFlag {
    pub file: String,
    pub sentence_index: usize,
    pub term: String,
    pub sentence_text: String,
    pub suggestion: String,
}

/// Category of requirement smell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SmellKind {
    Ambiguity,
    Vagueness,
    Incompleteness,
}

impl fmt::Display for SmellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SmellKind::Ambiguity => "Ambiguity",
            SmellKind::Vagueness => "Vagueness",
            SmellKind::Incompleteness => "Incompleteness",
        };
        f.write_str(name)
    }
}

/// A sentence exhibiting a requirement smell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmellRecord {
    pub file: String,
    pub smell: SmellKind,
    pub sentence_index: usize,
    pub sentence_text: String,
}
