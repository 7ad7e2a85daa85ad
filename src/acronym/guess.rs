//! Expansion guessing for undefined acronyms.

use crate::model::Sentence;
use regex::Regex;
use std::sync::LazyLock;

static RE_CAPITALIZED_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[A-Z][a-z0-9_\-]{2,}\s+){1,5}[A-Z][a-z0-9_\-]{2,}").unwrap()
});

/// Propose an expansion for `key` from the sentences around `index`.
///
/// Searches sentences `index - window ..= index + window` for a run of two
/// to six capitalized words whose first letter matches the acronym's. The
/// first such run is returned; an empty string means nothing plausible was
/// found. The result is advisory and never becomes a definition.
///
/// # Example
///
/// ```
/// use reqlint::acronym::guess_expansion;
/// use reqlint::Document;
///
/// let doc = Document::new("a.txt", "Data flows through the Message Queue Broker. The MQB retries.");
/// assert_eq!(guess_expansion(&doc.sentences, 1, "MQB", 1), "Message Queue Broker");
/// ```
pub fn guess_expansion(sentences: &[Sentence], index: usize, key: &str, window: usize) -> String {
    let Some(initial) = key.chars().next() else {
        return String::new();
    };

    let start = index.saturating_sub(window);
    let end = index.saturating_add(window).saturating_add(1).min(sentences.len());
    if start >= end {
        return String::new();
    }

    sentences[start..end]
        .iter()
        .flat_map(|s| RE_CAPITALIZED_RUN.find_iter(&s.text))
        .map(|m| m.as_str().trim())
        .find(|candidate| {
            candidate
                .chars()
                .next()
                .is_some_and(|c| c.to_ascii_uppercase() == initial)
        })
        .map(str::to_string)
        .unwrap_or_default()
}
