//! Corpus report and JSON output.

use crate::error::Result;
use crate::model::{GlossaryRecord, InconsistencyKind, InconsistencyRecord, IssueKind, IssueRecord};
use crate::model::{SmellKind, SmellRecord, SubjectiveFlag};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

pub const GLOSSARY_FILE: &str = "abbreviation_glossary.json";
pub const ISSUES_FILE: &str = "abbrev_issues.json";
pub const INCONSISTENCIES_FILE: &str = "abbrev_inconsistencies.json";
pub const SUBJECTIVE_FILE: &str = "subjective_flags.json";
pub const SMELLS_FILE: &str = "smells.json";
pub const STATS_FILE: &str = "stats.json";

/// Corpus-wide counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_files_processed: usize,
    pub total_files_skipped: usize,
    /// Surviving occurrences summed over keys and documents
    pub total_acronym_occurrences_with_duplicates: usize,
    /// Distinct keys with at least one surviving occurrence
    pub total_unique_acronyms: usize,
    /// Distinct acronyms with an `undefined_in_document` issue
    ///
    /// Counted per acronym rather than per (file, acronym) pair: a document
    /// reports each key at most once, so a pair count would always equal
    /// the `_with_duplicates` count.
    pub total_missing_definitions_unique: usize,
    pub total_missing_definitions_with_duplicates: usize,
    /// Distinct acronyms with a `first_use_before_definition` issue, counted
    /// per acronym like `total_missing_definitions_unique`
    pub total_first_use_before_definition_unique: usize,
    pub total_first_use_before_definition_with_duplicates: usize,
    pub total_inconsistencies_acronym_multiple_expansions: usize,
    pub total_inconsistencies_expansion_multiple_acronyms: usize,
    pub subjective_terms_with_duplicates: usize,
    pub subjective_terms_unique: usize,
    /// Smell records per kind
    pub smells: BTreeMap<SmellKind, usize>,
}

impl Summary {
    /// Compute the summary from accumulated corpus records.
    pub fn compute(
        processed: usize,
        skipped: usize,
        occurrence_totals: &BTreeMap<String, usize>,
        issues: &[IssueRecord],
        inconsistencies: &[InconsistencyRecord],
        subjective: &[SubjectiveFlag],
        smells: &[SmellRecord],
    ) -> Self {
        let issue_counts = |kind: IssueKind| {
            let matching: Vec<&IssueRecord> =
                issues.iter().filter(|i| i.issue_kind == kind).collect();
            let unique: HashSet<&str> = matching.iter().map(|i| i.acronym.as_str()).collect();
            (unique.len(), matching.len())
        };
        let inconsistency_count = |kind: InconsistencyKind| {
            inconsistencies.iter().filter(|r| r.issue_kind == kind).count()
        };

        let (missing_unique, missing_total) = issue_counts(IssueKind::UndefinedInDocument);
        let (early_unique, early_total) = issue_counts(IssueKind::FirstUseBeforeDefinition);

        let mut smell_counts = BTreeMap::new();
        for record in smells {
            *smell_counts.entry(record.smell).or_insert(0) += 1;
        }

        Self {
            total_files_processed: processed,
            total_files_skipped: skipped,
            total_acronym_occurrences_with_duplicates: occurrence_totals.values().sum(),
            total_unique_acronyms: occurrence_totals.len(),
            total_missing_definitions_unique: missing_unique,
            total_missing_definitions_with_duplicates: missing_total,
            total_first_use_before_definition_unique: early_unique,
            total_first_use_before_definition_with_duplicates: early_total,
            total_inconsistencies_acronym_multiple_expansions: inconsistency_count(
                InconsistencyKind::AcronymMultipleExpansions,
            ),
            total_inconsistencies_expansion_multiple_acronyms: inconsistency_count(
                InconsistencyKind::ExpansionMultipleAcronyms,
            ),
            subjective_terms_with_duplicates: subjective.len(),
            subjective_terms_unique: subjective
                .iter()
                .map(|f| f.term.as_str())
                .collect::<HashSet<_>>()
                .len(),
            smells: smell_counts,
        }
    }
}

/// All records produced by a corpus run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorpusReport {
    pub glossary: Vec<GlossaryRecord>,
    pub issues: Vec<IssueRecord>,
    pub inconsistencies: Vec<InconsistencyRecord>,
    pub subjective: Vec<SubjectiveFlag>,
    pub smells: Vec<SmellRecord>,
    pub stats: Summary,
}

impl CorpusReport {
    /// Write one JSON file per record stream into `dir`.
    ///
    /// The directory is created if needed. Returns the written paths.
    pub fn write_json(&self, dir: impl AsRef<Path>, pretty: bool) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let written = vec![
            write_file(dir, GLOSSARY_FILE, &self.glossary, pretty)?,
            write_file(dir, ISSUES_FILE, &self.issues, pretty)?,
            write_file(dir, INCONSISTENCIES_FILE, &self.inconsistencies, pretty)?,
            write_file(dir, SUBJECTIVE_FILE, &self.subjective, pretty)?,
            write_file(dir, SMELLS_FILE, &self.smells, pretty)?,
            write_file(dir, STATS_FILE, &self.stats, pretty)?,
        ];

        tracing::debug!(dir = %dir.display(), files = written.len(), "wrote reports");
        Ok(written)
    }
}

fn write_file<T: Serialize + ?Sized>(
    dir: &Path,
    name: &str,
    value: &T,
    pretty: bool,
) -> Result<PathBuf> {
    let path = dir.join(name);
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    fs::write(&path, json)?;
    Ok(path)
}
