//! Sentence segmentation.
//!
//! A sentence ends at `.`, `?` or `!` followed by whitespace, or at any run
//! of newlines. The terminating punctuation stays with its sentence. There is
//! no abbreviation handling: requirement documents are dense with dotted
//! forms, and a spurious split only costs one sentence index.

use regex::Regex;
use std::sync::LazyLock;

static RE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.?!]\s+|\n+").unwrap());

/// Split text into trimmed, non-empty sentences in document order.
///
/// # Example
///
/// ```
/// use reqlint::segment::split_sentences;
///
/// let sentences = split_sentences("Use the API. Is it fast?\nYes");
/// assert_eq!(sentences, vec!["Use the API.", "Is it fast?", "Yes"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in RE_BOUNDARY.find_iter(text) {
        // Boundary punctuation is ASCII, so +1 stays on a char boundary.
        let end = if text.as_bytes()[m.start()] == b'\n' {
            m.start()
        } else {
            m.start() + 1
        };
        push_trimmed(&mut sentences, &text[start..end]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
