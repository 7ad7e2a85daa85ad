//! Explicit acronym definitions.
//!
//! Two mirrored parenthetical patterns are recognized:
//!
//! - `Graphical User Interface (GUI)` - expansion first
//! - `API (Application Programming Interface)` - acronym first
//!
//! Both are applied to every sentence, headings included; the patterns are
//! precise enough that noise filtering is unnecessary.

use super::normalize::{is_acronym_key, normalize};
use regex::Regex;
use std::sync::LazyLock;

static RE_EXPANSION_ACRONYM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z][A-Za-z0-9&\-\s]{1,120}?)\s*\(\s*([A-Z][A-Z0-9.\-]{1,8})\s*\)").unwrap()
});

static RE_ACRONYM_EXPANSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][A-Z0-9.\-]{1,8})\s*\(\s*([A-Za-z][A-Za-z0-9&\-\s]{1,120}?)\s*\)").unwrap()
});

static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());

/// A definition pattern match within one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionMatch {
    /// Normalized acronym key
    pub key: String,
    /// Expansion text
    pub expansion: String,
}

/// Find all acronym definitions in a sentence.
///
/// Expansion-first matches come before acronym-first matches; within each
/// pattern, matches are in text order. Keys that do not normalize to a 2-10
/// letter alphabetic string are dropped.
///
/// # Example
///
/// ```
/// use reqlint::acronym::extract_definitions;
///
/// let found = extract_definitions("The Graphical User Interface (GUI) must load fast.");
/// assert_eq!(found[0].key, "GUI");
/// assert_eq!(found[0].expansion, "Graphical User Interface");
/// ```
pub fn extract_definitions(sentence: &str) -> Vec<DefinitionMatch> {
    let mut found = Vec::new();

    for caps in RE_EXPANSION_ACRONYM.captures_iter(sentence) {
        let key = normalize(&caps[2]);
        let expansion = trim_to_initials(caps[1].trim(), &key);
        push_match(&mut found, key, expansion);
    }

    for caps in RE_ACRONYM_EXPANSION.captures_iter(sentence) {
        let expansion = caps[2].trim();
        if is_acronym_shaped(expansion) {
            continue;
        }
        push_match(&mut found, normalize(&caps[1]), expansion);
    }

    found
}

fn push_match(found: &mut Vec<DefinitionMatch>, key: String, expansion: &str) {
    if expansion.is_empty() || !is_acronym_key(&key, 2..=10) {
        return;
    }
    found.push(DefinitionMatch {
        key,
        expansion: expansion.to_string(),
    });
}

/// A single all-caps token such as the `UI` in `USER INTERFACE (UI)`.
///
/// Such a parenthetical is the acronym of an expansion-first definition,
/// never the expansion of an acronym-first one.
fn is_acronym_shaped(text: &str) -> bool {
    !text.chars().any(char::is_whitespace)
        && !text.chars().any(char::is_lowercase)
        && is_acronym_key(&normalize(text), 2..=10)
}

/// Drop leading words that precede the expansion proper.
///
/// The expansion-first pattern captures from the first word of the clause
/// ("The Graphical User Interface"). The expansion is cut to start at the
/// latest word sharing the acronym's initial that still leaves at least as
/// many words as the acronym has letters; failing that, at the first such
/// word. Without any word sharing the initial the text is kept whole.
fn trim_to_initials<'a>(expansion: &'a str, key: &str) -> &'a str {
    let Some(initial) = key.chars().next() else {
        return expansion;
    };

    let words: Vec<_> = RE_WORD.find_iter(expansion).collect();
    let starts: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, w)| {
            w.as_str()
                .chars()
                .next()
                .is_some_and(|c| c.eq_ignore_ascii_case(&initial))
        })
        .map(|(i, _)| i)
        .collect();

    let needed = key.chars().count().min(words.len());
    let chosen = starts
        .iter()
        .rev()
        .find(|&&i| words.len() - i >= needed)
        .or(starts.first());

    match chosen {
        Some(&i) => &expansion[words[i].start()..],
        None => expansion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(sentence: &str) -> Vec<(String, String)> {
        extract_definitions(sentence)
            .into_iter()
            .map(|m| (m.key, m.expansion))
            .collect()
    }

    #[test]
    fn test_expansion_first() {
        assert_eq!(
            pairs("The Graphical User Interface (GUI) must load fast."),
            vec![("GUI".to_string(), "Graphical User Interface".to_string())]
        );
    }

    #[test]
    fn test_acronym_first() {
        assert_eq!(
            pairs("Document the API (Application Programming Interface) in section 2."),
            vec![(
                "API".to_string(),
                "Application Programming Interface".to_string()
            )]
        );
    }

    #[test]
    fn test_dotted_acronym_normalized() {
        assert_eq!(
            pairs("Funded by the United States of America (U.S.A.) government."),
            vec![(
                "USA".to_string(),
                "United States of America".to_string()
            )]
        );
    }

    #[test]
    fn test_trim_keeps_repeated_initials() {
        assert_eq!(
            pairs("This Application Access Control (AAC) layer is new."),
            vec![(
                "AAC".to_string(),
                "Application Access Control".to_string()
            )]
        );
        assert_eq!(
            pairs("We use the Hypertext Markup Language (HTML) for pages."),
            vec![(
                "HTML".to_string(),
                "Hypertext Markup Language".to_string()
            )]
        );
    }

    #[test]
    fn test_no_initial_match_keeps_text() {
        assert_eq!(
            pairs("Simple Object Access Protocol (XSOAP) is deprecated."),
            vec![(
                "XSOAP".to_string(),
                "Simple Object Access Protocol".to_string()
            )]
        );
    }

    #[test]
    fn test_non_alphabetic_keys_dropped() {
        assert!(pairs("The audio codec (MP3) is supported.").is_empty());
        assert!(pairs("Nothing defined here.").is_empty());
    }

    #[test]
    fn test_lowercase_parenthetical_not_definition() {
        assert!(pairs("The module (see below) handles input.").is_empty());
    }

    #[test]
    fn test_parenthesized_acronym_is_not_an_expansion() {
        assert_eq!(
            pairs("USER INTERFACE (UI)"),
            vec![("UI".to_string(), "USER INTERFACE".to_string())]
        );
        assert_eq!(
            pairs("The GUI (UI) layer is themed."),
            vec![("UI".to_string(), "The GUI".to_string())]
        );
    }

    #[test]
    fn test_multiple_definitions_in_order() {
        let found = pairs("Automated Teller Machine (ATM) and Personal Identification Number (PIN) flows.");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], ("ATM".to_string(), "Automated Teller Machine".to_string()));
        assert_eq!(found[1], ("PIN".to_string(), "Personal Identification Number".to_string()));
    }
}
