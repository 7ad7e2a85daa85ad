//! Per-document acronym analysis.
//!
//! # Passes
//!
//! 1. **Definitions** - every sentence, first definition per key wins
//! 2. **Occurrences** - prose sentences only (see [`crate::noise`])
//! 3. **Filtering** - drop stray undefined keys
//! 4. **Issues** - undefined keys and uses that precede their definition
//!
//! The analyzer holds no corpus state. Each call returns a
//! [`DocumentReport`] carrying the document's contribution to the corpus
//! relations, which the caller merges (see [`crate::corpus::Corpus`]).

use crate::acronym::{extract_definitions, guess_expansion, scan_sentence};
use crate::config::AnalyzerConfig;
use crate::corpus::Relations;
use crate::error::Result;
use crate::model::{Definition, Document, GlossaryRecord, IssueKind, IssueRecord};
use crate::model::{SmellRecord, SubjectiveFlag};
use crate::noise::NoiseFilter;
use crate::prepare::prepare;
use crate::smells;
use regex::Regex;
use std::collections::HashMap;

/// Sentence indices at which a key was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOccurrences {
    /// Normalized acronym key
    pub key: String,
    /// Ascending, distinct sentence indices
    pub sentences: Vec<usize>,
}

impl KeyOccurrences {
    /// First sentence the key appears in.
    pub fn first(&self) -> Option<usize> {
        self.sentences.first().copied()
    }
}

/// Everything one document contributes to a corpus run.
#[derive(Debug, Clone, Default)]
pub struct DocumentReport {
    /// Document identifier
    pub file: String,
    /// Number of sentences after segmentation
    pub sentence_count: usize,
    /// Retained definitions in order of first definition
    pub definitions: Vec<Definition>,
    /// Surviving occurrences in order of first appearance
    pub occurrences: Vec<KeyOccurrences>,
    pub glossary: Vec<GlossaryRecord>,
    pub issues: Vec<IssueRecord>,
    /// Acronym/expansion pairs defined by this document
    pub relations: Relations,
    pub subjective: Vec<SubjectiveFlag>,
    pub smells: Vec<SmellRecord>,
}

impl DocumentReport {
    /// Returns the retained definition for `key`.
    pub fn definition(&self, key: &str) -> Option<&Definition> {
        self.definitions.iter().find(|d| d.key == key)
    }

    /// Returns the surviving occurrences of `key`.
    pub fn occurrences_of(&self, key: &str) -> Option<&KeyOccurrences> {
        self.occurrences.iter().find(|o| o.key == key)
    }

    /// Returns the issues of a given kind.
    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &IssueRecord> {
        self.issues.iter().filter(move |i| i.issue_kind == kind)
    }
}

/// Analyzer for single documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentAnalyzer {
    config: AnalyzerConfig,
    noise: NoiseFilter,
}

impl DocumentAnalyzer {
    /// Create a new analyzer with the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        let noise = NoiseFilter::new(config.noise.clone());
        Self { config, noise }
    }

    /// Create an analyzer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(AnalyzerConfig::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Prepare, segment and analyze raw document text.
    pub fn analyze(&self, name: &str, raw: &str) -> DocumentReport {
        let text = prepare(raw, &self.config.prepare);
        let document = Document::new(name, &text);
        self.analyze_document(&document, &text)
    }

    /// Analyze an already segmented document.
    ///
    /// `text` is the full document text used for the dotted-rendering check.
    pub fn analyze_document(&self, document: &Document, text: &str) -> DocumentReport {
        let mut relations = Relations::new();
        let definitions = self.collect_definitions(document, &mut relations);
        let defined: HashMap<&str, &Definition> =
            definitions.iter().map(|d| (d.key.as_str(), d)).collect();

        let occurrences: Vec<KeyOccurrences> = self
            .collect_occurrences(document)
            .into_iter()
            .filter(|occ| self.keep_occurrences(occ, defined.contains_key(occ.key.as_str()), text))
            .collect();

        let mut issues = Vec::new();
        for occ in &occurrences {
            let Some(first) = occ.first() else {
                continue;
            };
            match defined.get(occ.key.as_str()) {
                None => issues.push(IssueRecord {
                    file: document.name.clone(),
                    acronym: occ.key.clone(),
                    issue_kind: IssueKind::UndefinedInDocument,
                    sentence_index: first,
                    sentence_text: document.sentence_text(first).to_string(),
                    guessed_expansion: guess_expansion(
                        &document.sentences,
                        first,
                        &occ.key,
                        self.config.guess_window,
                    ),
                }),
                Some(def) if first < def.sentence_index => issues.push(IssueRecord {
                    file: document.name.clone(),
                    acronym: occ.key.clone(),
                    issue_kind: IssueKind::FirstUseBeforeDefinition,
                    sentence_index: first,
                    sentence_text: document.sentence_text(first).to_string(),
                    guessed_expansion: String::new(),
                }),
                Some(_) => {}
            }
        }

        let glossary = definitions
            .iter()
            .map(|def| GlossaryRecord {
                acronym: def.key.clone(),
                expansion: def.expansion.clone(),
                file: document.name.clone(),
                sentence_index: def.sentence_index,
                sentence_text: document.sentence_text(def.sentence_index).to_string(),
            })
            .collect();

        let (subjective, smells) = if self.config.scan_subjective {
            (
                smells::scan_subjective(&document.name, &document.sentences),
                smells::scan_smells(&document.name, &document.sentences),
            )
        } else {
            (Vec::new(), Vec::new())
        };

        tracing::debug!(
            file = %document.name,
            sentences = document.sentence_count(),
            definitions = definitions.len(),
            acronyms = occurrences.len(),
            issues = issues.len(),
            "analyzed document"
        );

        DocumentReport {
            file: document.name.clone(),
            sentence_count: document.sentence_count(),
            definitions,
            occurrences,
            glossary,
            issues,
            relations,
            subjective,
            smells,
        }
    }

    fn collect_definitions(&self, document: &Document, relations: &mut Relations) -> Vec<Definition> {
        let mut definitions: Vec<Definition> = Vec::new();

        for sentence in &document.sentences {
            for found in extract_definitions(&sentence.text) {
                if definitions.iter().any(|d| d.key == found.key) {
                    continue;
                }
                relations.record(&found.key, &found.expansion);
                definitions.push(Definition {
                    key: found.key,
                    expansion: found.expansion,
                    sentence_index: sentence.index,
                });
            }
        }

        definitions
    }

    fn collect_occurrences(&self, document: &Document) -> Vec<KeyOccurrences> {
        let mut occurrences: Vec<KeyOccurrences> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for sentence in &document.sentences {
            if !self.noise.classify(&sentence.text).is_prose() {
                continue;
            }
            for key in scan_sentence(&sentence.text) {
                match index.get(&key) {
                    Some(&slot) => occurrences[slot].sentences.push(sentence.index),
                    None => {
                        index.insert(key.clone(), occurrences.len());
                        occurrences.push(KeyOccurrences {
                            key,
                            sentences: vec![sentence.index],
                        });
                    }
                }
            }
        }

        occurrences
    }

    fn keep_occurrences(&self, occ: &KeyOccurrences, defined: bool, text: &str) -> bool {
        let filter = &self.config.occurrence;
        if defined || occ.sentences.len() >= filter.min_distinct_sentences {
            return true;
        }
        if !filter.accept_dotted_rendering {
            return false;
        }
        match has_dotted_rendering(text, &occ.key) {
            Ok(found) => found,
            Err(e) => {
                tracing::debug!(key = %occ.key, error = %e, "dotted rendering check skipped");
                false
            }
        }
    }
}

/// Build the pattern matching a dotted or spaced spelling of `key`.
///
/// `USA` matches `U.S.A.`, `u.s.a.` and `U S A`, but not `USA` itself.
/// Letters must be separated; case is ignored.
pub fn dotted_rendering_pattern(key: &str) -> Result<Regex> {
    let letters: Vec<String> = key
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();
    let pattern = format!(r"(?i)\b{}(?:\.|\b)", letters.join(r"(?:\.\s?|\s)"));
    Ok(Regex::new(&pattern)?)
}

/// Check whether `text` contains a dotted or spaced spelling of `key`.
pub fn has_dotted_rendering(text: &str, key: &str) -> Result<bool> {
    if key.chars().count() < 2 {
        return Ok(false);
    }
    Ok(dotted_rendering_pattern(key)?.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> DocumentReport {
        DocumentAnalyzer::with_defaults().analyze("doc.txt", text)
    }

    #[test]
    fn test_defined_before_use_has_no_issue() {
        let report = analyze(
            "The Graphical User Interface (GUI) must load fast. The GUI shall support 10 users.",
        );
        assert_eq!(report.glossary.len(), 1);
        assert_eq!(report.glossary[0].acronym, "GUI");
        assert_eq!(report.glossary[0].expansion, "Graphical User Interface");
        assert_eq!(report.glossary[0].sentence_index, 0);
        assert!(report.issues.is_empty());
        assert_eq!(report.occurrences_of("GUI").unwrap().sentences, vec![0, 1]);
    }

    #[test]
    fn test_first_use_before_definition() {
        let report = analyze(
            "Use the API to connect. Document the API (Application Programming Interface) in section 2.",
        );
        assert_eq!(report.issues.len(), 1);
        let issue = &report.issues[0];
        assert_eq!(issue.acronym, "API");
        assert_eq!(issue.issue_kind, IssueKind::FirstUseBeforeDefinition);
        assert_eq!(issue.sentence_index, 0);
        assert_eq!(issue.sentence_text, "Use the API to connect.");
        assert!(issue.guessed_expansion.is_empty());
    }

    #[test]
    fn test_undefined_with_guess() {
        let report = analyze(
            "Requests pass through the Request Routing Layer. The RRL balances load. The RRL logs errors.",
        );
        let undefined: Vec<_> = report.issues_of(IssueKind::UndefinedInDocument).collect();
        assert_eq!(undefined.len(), 1);
        assert_eq!(undefined[0].acronym, "RRL");
        assert_eq!(undefined[0].sentence_index, 1);
        assert_eq!(undefined[0].guessed_expansion, "Request Routing Layer");
    }

    #[test]
    fn test_first_definition_wins() {
        let report = analyze(
            "The Central Processing Unit (CPU) is fast. A Computer Power Unit (CPU) is unrelated.",
        );
        assert_eq!(report.glossary.len(), 1);
        assert_eq!(report.glossary[0].expansion, "Central Processing Unit");
        assert_eq!(
            report.relations.expansions("CPU").map(|s| s.len()),
            Some(1)
        );
    }

    #[test]
    fn test_singleton_undefined_is_dropped() {
        let report = analyze("The data is stored via the ORM layer today.");
        assert!(report.occurrences.is_empty());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_singleton_rescued_by_dotted_rendering() {
        let report = analyze("Shipping within the U.S.A. is free for members.");
        let occ = report.occurrences_of("USA").expect("USA kept");
        assert_eq!(occ.sentences, vec![0]);

        let single = analyze("Orders ship to the U.S. only.");
        assert!(single.occurrences_of("US").is_some());
        assert_eq!(single.issues.len(), 1);
    }

    #[test]
    fn test_lowercase_dotted_singleton_is_kept() {
        let report = analyze("Shipping within the u.s.a. is free.");
        let occ = report.occurrences_of("USA").expect("USA kept");
        assert_eq!(occ.sentences, vec![0]);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].issue_kind, IssueKind::UndefinedInDocument);
    }

    #[test]
    fn test_dotted_rendering_can_be_disabled() {
        let config = AnalyzerConfig::default().with_dotted_rendering(false);
        let report = DocumentAnalyzer::new(config).analyze("d.txt", "Orders ship to the U.S. only.");
        assert!(report.occurrences.is_empty());
    }

    #[test]
    fn test_heading_contributes_nothing() {
        let report = analyze("SYSTEM REQUIREMENTS OVERVIEW");
        assert!(report.definitions.is_empty());
        assert!(report.occurrences.is_empty());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_definition_found_in_heading() {
        let report = analyze("USER INTERFACE (UI)\nThe UI is themed. The UI scales.");
        assert_eq!(report.glossary.len(), 1);
        assert_eq!(report.glossary[0].acronym, "UI");
        assert_eq!(report.glossary[0].sentence_index, 0);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_issue_kinds_exclusive_per_key() {
        let report = analyze(
            "The DBMS stores rows. The DBMS (Database Management System) is shared. The LAN is slow. The LAN is busy.",
        );
        let dbms: Vec<_> = report.issues.iter().filter(|i| i.acronym == "DBMS").collect();
        assert_eq!(dbms.len(), 1);
        assert_eq!(dbms[0].issue_kind, IssueKind::FirstUseBeforeDefinition);

        let lan: Vec<_> = report.issues.iter().filter(|i| i.acronym == "LAN").collect();
        assert_eq!(lan.len(), 1);
        assert_eq!(lan[0].issue_kind, IssueKind::UndefinedInDocument);
    }

    #[test]
    fn test_min_distinct_sentences_configurable() {
        let config = AnalyzerConfig::default().with_min_distinct_sentences(3);
        let analyzer = DocumentAnalyzer::new(config);
        let report = analyzer.analyze("d.txt", "The LAN is slow. The LAN is busy.");
        assert!(report.occurrences.is_empty());
    }

    #[test]
    fn test_dotted_rendering_pattern() {
        assert!(has_dotted_rendering("made in the U.S.A. today", "USA").unwrap());
        assert!(has_dotted_rendering("made in the U. S. A. today", "USA").unwrap());
        assert!(has_dotted_rendering("the U S A flag", "USA").unwrap());
        assert!(has_dotted_rendering("shipping to the u.s.a. today", "USA").unwrap());
        assert!(!has_dotted_rendering("the USA flag", "USA").unwrap());
        assert!(!has_dotted_rendering("the usa flag", "USA").unwrap());
        assert!(!has_dotted_rendering("the U S Army", "USA").unwrap());
        assert!(!has_dotted_rendering("anything", "U").unwrap());
    }

    #[test]
    fn test_empty_document() {
        let report = analyze("");
        assert_eq!(report.sentence_count, 0);
        assert!(report.glossary.is_empty());
        assert!(report.issues.is_empty());
    }
}
