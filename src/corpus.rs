//! Corpus pass over a directory of documents.
//!
//! Each document is analyzed independently; its [`Relations`] are then
//! merged into the corpus relations. Inconsistencies are computed once,
//! in [`Corpus::finish`], after every document has been folded in.

use crate::analyzer::{DocumentAnalyzer, DocumentReport};
use crate::config::AnalyzerConfig;
use crate::error::{Error, Result};
use crate::model::{GlossaryRecord, InconsistencyKind, InconsistencyRecord, IssueRecord};
use crate::model::{SmellRecord, SubjectiveFlag};
use crate::prepare::decode_lossy;
use crate::report::{CorpusReport, Summary};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Acronym/expansion relations, indexed both ways.
///
/// Both maps only ever grow; merging is a set union, so the result does not
/// depend on the order documents are merged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relations {
    expansions_by_acronym: BTreeMap<String, BTreeSet<String>>,
    acronyms_by_expansion: BTreeMap<String, BTreeSet<String>>,
}

impl Relations {
    /// Create empty relations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `key` was defined as `expansion`.
    pub fn record(&mut self, key: &str, expansion: &str) {
        self.expansions_by_acronym
            .entry(key.to_string())
            .or_default()
            .insert(expansion.to_string());
        self.acronyms_by_expansion
            .entry(expansion.to_string())
            .or_default()
            .insert(key.to_string());
    }

    /// Union another set of relations into this one.
    pub fn merge(&mut self, other: Relations) {
        for (key, expansions) in other.expansions_by_acronym {
            self.expansions_by_acronym
                .entry(key)
                .or_default()
                .extend(expansions);
        }
        for (expansion, keys) in other.acronyms_by_expansion {
            self.acronyms_by_expansion
                .entry(expansion)
                .or_default()
                .extend(keys);
        }
    }

    /// Returns the expansions recorded for an acronym.
    pub fn expansions(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.expansions_by_acronym.get(key)
    }

    /// Returns the acronyms recorded for an expansion.
    pub fn acronyms(&self, expansion: &str) -> Option<&BTreeSet<String>> {
        self.acronyms_by_expansion.get(expansion)
    }

    /// Returns true if no definition has been recorded.
    pub fn is_empty(&self) -> bool {
        self.expansions_by_acronym.is_empty()
    }

    /// Every relation entry with two or more distinct values.
    ///
    /// Acronyms with several expansions come first, then expansions with
    /// several acronyms; each group is sorted by key.
    pub fn inconsistencies(&self) -> Vec<InconsistencyRecord> {
        let conflicts = |kind: InconsistencyKind, map: &BTreeMap<String, BTreeSet<String>>| {
            map.iter()
                .filter(|(_, values)| values.len() >= 2)
                .map(move |(key, values)| InconsistencyRecord {
                    issue_kind: kind,
                    key: key.clone(),
                    details: values.iter().map(String::as_str).collect::<Vec<_>>().join("; "),
                })
                .collect::<Vec<_>>()
        };

        let mut records = conflicts(
            InconsistencyKind::AcronymMultipleExpansions,
            &self.expansions_by_acronym,
        );
        records.extend(conflicts(
            InconsistencyKind::ExpansionMultipleAcronyms,
            &self.acronyms_by_expansion,
        ));
        records
    }
}

/// List the `.txt` documents of a directory, sorted by file name.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_txt = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if is_txt && path.is_file() {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Read a document as `(file name, text)`.
///
/// Invalid UTF-8 is replaced, never reported.
pub fn read_document(path: &Path) -> Result<(String, String)> {
    let bytes = fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok((name, decode_lossy(&bytes)))
}

/// Accumulated state of a corpus run.
#[derive(Debug, Default)]
pub struct Corpus {
    analyzer: DocumentAnalyzer,
    relations: Relations,
    glossary: Vec<GlossaryRecord>,
    issues: Vec<IssueRecord>,
    subjective: Vec<SubjectiveFlag>,
    smells: Vec<SmellRecord>,
    occurrence_totals: BTreeMap<String, usize>,
    processed: usize,
    skipped: usize,
}

impl Corpus {
    /// Create an empty corpus with the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            analyzer: DocumentAnalyzer::new(config),
            ..Self::default()
        }
    }

    /// Create an empty corpus with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(AnalyzerConfig::default())
    }

    /// Returns the per-document analyzer.
    pub fn analyzer(&self) -> &DocumentAnalyzer {
        &self.analyzer
    }

    /// Returns the relations merged so far.
    pub fn relations(&self) -> &Relations {
        &self.relations
    }

    /// Number of documents analyzed so far.
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Number of documents skipped because they could not be read.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Analyze one document and fold it into the corpus.
    pub fn add_document(&mut self, name: &str, text: &str) {
        let report = self.analyzer.analyze(name, text);
        self.absorb(report);
    }

    /// Fold an already analyzed document into the corpus.
    pub fn absorb(&mut self, report: DocumentReport) {
        self.relations.merge(report.relations);
        for occ in &report.occurrences {
            *self.occurrence_totals.entry(occ.key.clone()).or_default() += occ.sentences.len();
        }
        self.glossary.extend(report.glossary);
        self.issues.extend(report.issues);
        self.subjective.extend(report.subjective);
        self.smells.extend(report.smells);
        self.processed += 1;
    }

    /// Read and analyze a file.
    ///
    /// Returns `false` if the file could not be read; it is then counted as
    /// skipped and contributes nothing.
    pub fn add_path(&mut self, path: &Path) -> bool {
        let outcome = read_document(path).map(|(name, text)| self.analyzer.analyze(&name, &text));
        self.absorb_outcome(path, outcome)
    }

    /// Analyze files in order, calling `on_done` after each one.
    ///
    /// Uses [`Corpus::add_paths_parallel`] when the configuration asks for it
    /// and the `parallel` feature is enabled.
    pub fn add_paths<F>(&mut self, paths: &[PathBuf], on_done: F)
    where
        F: Fn(&Path) + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if self.analyzer.config().parallel {
                self.add_paths_parallel(paths, on_done);
                return;
            }
        }

        for path in paths {
            self.add_path(path);
            on_done(path);
        }
    }

    /// Analyze files on the rayon pool, then merge in the given order.
    ///
    /// The result is identical to analyzing the files sequentially.
    #[cfg(feature = "parallel")]
    pub fn add_paths_parallel<F>(&mut self, paths: &[PathBuf], on_done: F)
    where
        F: Fn(&Path) + Sync,
    {
        use rayon::prelude::*;

        let analyzer = &self.analyzer;
        let outcomes: Vec<Result<DocumentReport>> = paths
            .par_iter()
            .map(|path| {
                let outcome =
                    read_document(path).map(|(name, text)| analyzer.analyze(&name, &text));
                on_done(path);
                outcome
            })
            .collect();

        for (path, outcome) in paths.iter().zip(outcomes) {
            self.absorb_outcome(path, outcome);
        }
    }

    fn absorb_outcome(&mut self, path: &Path, outcome: Result<DocumentReport>) -> bool {
        match outcome {
            Ok(report) => {
                self.absorb(report);
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable document");
                self.skipped += 1;
                false
            }
        }
    }

    /// Compute inconsistencies and statistics.
    pub fn finish(self) -> CorpusReport {
        let inconsistencies = self.relations.inconsistencies();
        let stats = Summary::compute(
            self.processed,
            self.skipped,
            &self.occurrence_totals,
            &self.issues,
            &inconsistencies,
            &self.subjective,
            &self.smells,
        );

        tracing::info!(
            processed = stats.total_files_processed,
            skipped = stats.total_files_skipped,
            issues = self.issues.len(),
            inconsistencies = inconsistencies.len(),
            "corpus pass complete"
        );

        CorpusReport {
            glossary: self.glossary,
            issues: self.issues,
            inconsistencies,
            subjective: self.subjective,
            smells: self.smells,
            stats,
        }
    }
}

/// Analyze every `.txt` document in a directory with default settings.
pub fn check_dir(dir: impl AsRef<Path>) -> Result<CorpusReport> {
    check_dir_with_config(dir, AnalyzerConfig::default())
}

/// Analyze every `.txt` document in a directory.
pub fn check_dir_with_config(dir: impl AsRef<Path>, config: AnalyzerConfig) -> Result<CorpusReport> {
    let paths = list_documents(dir.as_ref())?;
    let mut corpus = Corpus::new(config);
    corpus.add_paths(&paths, |_| {});
    Ok(corpus.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IssueKind;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, text: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_relations_inconsistencies() {
        let mut relations = Relations::new();
        relations.record("ATM", "Automated Teller Machine");
        relations.record("ATM", "Asynchronous Transfer Mode");
        relations.record("UI", "User Interface");
        relations.record("USI", "User Interface");

        let records = relations.inconsistencies();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].issue_kind, InconsistencyKind::AcronymMultipleExpansions);
        assert_eq!(records[0].key, "ATM");
        assert_eq!(
            records[0].details,
            "Asynchronous Transfer Mode; Automated Teller Machine"
        );
        assert_eq!(records[1].issue_kind, InconsistencyKind::ExpansionMultipleAcronyms);
        assert_eq!(records[1].key, "User Interface");
        assert_eq!(records[1].details, "UI; USI");
    }

    #[test]
    fn test_relations_merge_is_order_independent() {
        let mut a = Relations::new();
        a.record("ATM", "Automated Teller Machine");
        let mut b = Relations::new();
        b.record("ATM", "Asynchronous Transfer Mode");

        let mut ab = Relations::new();
        ab.merge(a.clone());
        ab.merge(b.clone());
        let mut ba = Relations::new();
        ba.merge(b);
        ba.merge(a);

        assert_eq!(ab, ba);
        assert_eq!(ab.inconsistencies(), ba.inconsistencies());
    }

    #[test]
    fn test_same_expansion_twice_is_consistent() {
        let mut relations = Relations::new();
        relations.record("GUI", "Graphical User Interface");
        relations.record("GUI", "Graphical User Interface");
        assert!(relations.inconsistencies().is_empty());
    }

    #[test]
    fn test_conflicting_definitions_across_documents() {
        let mut corpus = Corpus::with_defaults();
        corpus.add_document("doc1.txt", "The Automated Teller Machine (ATM) dispenses cash.");
        corpus.add_document("doc2.txt", "The Asynchronous Transfer Mode (ATM) carries cells.");
        let report = corpus.finish();

        assert_eq!(report.glossary.len(), 2);
        assert_eq!(report.inconsistencies.len(), 1);
        let record = &report.inconsistencies[0];
        assert_eq!(record.issue_kind, InconsistencyKind::AcronymMultipleExpansions);
        assert_eq!(record.key, "ATM");
        assert!(record.details.contains("Automated Teller Machine"));
        assert!(record.details.contains("Asynchronous Transfer Mode"));
    }

    #[test]
    fn test_parenthesized_acronym_adds_no_reverse_relation() {
        let mut corpus = Corpus::with_defaults();
        corpus.add_document("doc1.txt", "USER INTERFACE (UI)\nThe UI is themed.");
        corpus.add_document("doc2.txt", "The GUI (UI) layer is themed.");

        let relations = corpus.relations();
        assert!(relations.expansions("INTERFACE").is_none());
        assert!(relations.expansions("GUI").is_none());
        assert!(relations.acronyms("UI").is_none());

        let report = corpus.finish();
        assert!(report.glossary.iter().all(|g| g.acronym == "UI"));
        assert!(report
            .inconsistencies
            .iter()
            .all(|r| r.issue_kind != InconsistencyKind::ExpansionMultipleAcronyms));
    }

    #[test]
    fn test_list_documents_sorted_txt_only() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b.txt", "B");
        write(&dir, "a.TXT", "A");
        write(&dir, "notes.md", "ignored");
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let names: Vec<_> = list_documents(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.TXT", "b.txt"]);
    }

    #[test]
    fn test_list_documents_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = write(&dir, "a.txt", "x");
        assert!(matches!(list_documents(&file), Err(Error::NotADirectory(_))));
    }

    #[test]
    fn test_unreadable_document_is_skipped() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.txt", "The LAN is slow. The LAN is busy.");
        let missing = dir.path().join("missing.txt");

        let mut corpus = Corpus::with_defaults();
        assert!(!corpus.add_path(&missing));
        assert!(corpus.add_path(&good));
        let report = corpus.finish();

        assert_eq!(report.stats.total_files_processed, 1);
        assert_eq!(report.stats.total_files_skipped, 1);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].file, "good.txt");
        assert_eq!(report.issues[0].issue_kind, IssueKind::UndefinedInDocument);
    }

    #[test]
    fn test_invalid_utf8_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, b"The LAN\xff is slow. The LAN is busy.").unwrap();

        let (name, text) = read_document(&path).unwrap();
        assert_eq!(name, "bad.txt");
        assert!(text.contains('\u{FFFD}'));

        let mut corpus = Corpus::with_defaults();
        assert!(corpus.add_path(&path));
        let report = corpus.finish();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].acronym, "LAN");
    }

    #[test]
    fn test_check_dir() {
        let dir = TempDir::new().unwrap();
        write(&dir, "doc1.txt", "The Automated Teller Machine (ATM) dispenses cash.");
        write(&dir, "doc2.txt", "The Asynchronous Transfer Mode (ATM) carries cells.");

        let report = check_dir(dir.path()).unwrap();
        assert_eq!(report.stats.total_files_processed, 2);
        assert_eq!(report.glossary[0].file, "doc1.txt");
        assert_eq!(report.glossary[1].file, "doc2.txt");
        assert_eq!(report.stats.total_inconsistencies_acronym_multiple_expansions, 1);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let dir = TempDir::new().unwrap();
        for i in 0..8 {
            write(
                &dir,
                &format!("doc{i}.txt"),
                "Use the API to connect. Document the API (Application Programming Interface) here. The LAN is slow. The LAN is busy.",
            );
        }

        let sequential = check_dir_with_config(dir.path(), AnalyzerConfig::default().sequential()).unwrap();
        let parallel = check_dir(dir.path()).unwrap();

        assert_eq!(sequential.glossary, parallel.glossary);
        assert_eq!(sequential.issues, parallel.issues);
        assert_eq!(sequential.inconsistencies, parallel.inconsistencies);
        assert_eq!(sequential.stats, parallel.stats);
    }
}
