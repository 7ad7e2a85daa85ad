//! Subjective quality terms and requirement smells.
//!
//! Both scans look at every sentence, headings included, and match whole
//! words case-insensitively.

use crate::model::{Sentence, SmellKind, SmellRecord, SubjectiveFlag};
use regex::Regex;
use std::sync::LazyLock;

/// Subjective terms with a suggested measurable replacement.
pub const SUBJECTIVE_TERMS: &[(&str, &str)] = &[
    (
        "user-friendly",
        "Replace with measurable usability criteria, e.g., 'Novice user completes task X in ≤ 90s with ≥90% success.'",
    ),
    (
        "user friendly",
        "Replace with measurable usability criteria, e.g., 'Novice user completes task X in ≤ 90s with ≥90% success.'",
    ),
    (
        "fast",
        "Replace with quantifiable timing, e.g., 'Response time ≤ 200 ms under N concurrent users.'",
    ),
    (
        "efficient",
        "Replace with resource bound, e.g., 'CPU ≤ 10% at normal load' or 'throughput ≥ 100 req/s'.",
    ),
    (
        "intuitive",
        "Replace with usability metric, e.g., 'Task success rate ≥ 85% in usability test.'",
    ),
    (
        "simple",
        "Replace with concrete steps or complexity limit, e.g., '≤ 3 steps to complete X'.",
    ),
    (
        "robust",
        "Specify failure modes and recovery time, e.g., 'recovers within 5s after transient failure'.",
    ),
    (
        "reliable",
        "Specify reliability target, e.g., 'availability ≥ 99.9% monthly'.",
    ),
    (
        "secure",
        "Specify exact controls / standards, e.g., 'TLS1.2+; AES-256 for data at rest'.",
    ),
    (
        "scalable",
        "Quantify scale, e.g., 'supports 10k concurrent users with <X latency'.",
    ),
    (
        "easy",
        "Specify what 'easy' means (install, learn, use) with measurable criteria.",
    ),
];

/// Words that leave a requirement open to interpretation.
pub const AMBIGUOUS_WORDS: &[&str] = &[
    "appropriate",
    "adequate",
    "as soon as possible",
    "normally",
    "reasonable",
    "sufficient",
    "some",
    "various",
    "typical",
    "often",
    "usually",
    "commonly",
];

/// Unquantified quality adjectives. Entries are regex fragments.
pub const VAGUE_WORDS: &[&str] = &[
    r"user[- ]?friendly",
    "fast",
    "efficient",
    "robust",
    "easy",
    "quick",
    "intuitive",
    "simple",
    "reliable",
    "powerful",
];

/// Placeholders for missing content. Entries are regex fragments.
pub const INCOMPLETE_PATTERNS: &[&str] = &[
    r"etc",
    "and so on",
    "to be determined",
    "TBD",
    "as required",
    "if necessary",
];

static RE_SUBJECTIVE: LazyLock<Vec<(Regex, &'static str, &'static str)>> = LazyLock::new(|| {
    SUBJECTIVE_TERMS
        .iter()
        .map(|&(term, suggestion)| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))).unwrap();
            (re, term, suggestion)
        })
        .collect()
});

static RE_SMELLS: LazyLock<Vec<(SmellKind, Regex)>> = LazyLock::new(|| {
    vec![
        (SmellKind::Ambiguity, word_alternation(AMBIGUOUS_WORDS)),
        (SmellKind::Vagueness, word_alternation(VAGUE_WORDS)),
        (SmellKind::Incompleteness, word_alternation(INCOMPLETE_PATTERNS)),
    ]
});

fn word_alternation(words: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{})\b", words.join("|"))).unwrap()
}

/// Subjective terms found in a sentence, in table order.
pub fn subjective_terms(sentence: &str) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
    RE_SUBJECTIVE
        .iter()
        .filter(move |(re, _, _)| re.is_match(sentence))
        .map(|&(_, term, suggestion)| (term, suggestion))
}

/// Smell kinds exhibited by a sentence, each at most once.
pub fn classify_smells(sentence: &str) -> Vec<SmellKind> {
    RE_SMELLS
        .iter()
        .filter(|(_, re)| re.is_match(sentence))
        .map(|(kind, _)| *kind)
        .collect()
}

/// Flag every sentence containing a subjective term, once per term.
pub fn scan_subjective(file: &str, sentences: &[Sentence]) -> Vec<SubjectiveFlag> {
    sentences
        .iter()
        .flat_map(|s| {
            subjective_terms(&s.text).map(move |(term, suggestion)| SubjectiveFlag {
                file: file.to_string(),
                sentence_index: s.index,
                term: term.to_string(),
                sentence_text: s.text.clone(),
                suggestion: suggestion.to_string(),
            })
        })
        .collect()
}

/// Record every smell of every sentence.
pub fn scan_smells(file: &str, sentences: &[Sentence]) -> Vec<SmellRecord> {
    sentences
        .iter()
        .flat_map(|s| {
            classify_smells(&s.text)
                .into_iter()
                .map(move |smell| SmellRecord {
                    file: file.to_string(),
                    smell,
                    sentence_index: s.index,
                    sentence_text: s.text.clone(),
                })
        })
        .collect()
}
