//! Bare acronym occurrence scanning.
//!
//! A prose sentence is scanned in two passes whose results are merged in
//! first-appearance order without duplicates:
//!
//! 1. **Parenthesized tokens** - `(...)` spans of 2-20 characters
//! 2. **Free tokens** - every 2-10 character word-like token
//!
//! Each pass runs its candidates through an ordered chain of independent
//! rules. The first rule that fails names the [`Rejection`]; a candidate
//! that passes every rule contributes its normalized key.

use super::lexicon::{is_domain_suffix, is_noisy_token, is_skip_word, is_stopword};
use super::normalize::{is_acronym_key, normalize};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static RE_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([A-Za-z0-9.\-]{2,20})\)").unwrap());

static RE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9.\-]{2,10}\b").unwrap());

static RE_CAMEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z][a-z]+[A-Z]").unwrap());

static RE_URL_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://|www\.|\.(com|org|net|htm|html|php|asp|jsp|txt|pdf|xml)\b").unwrap()
});

static RE_PERSONAL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]\.[A-Z][a-z]").unwrap());

static RE_ALL_CAPS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{2,}$").unwrap());

static RE_CAPS_LEAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[A-Z]{2,}").unwrap());

/// Why a candidate token was not accepted as an acronym.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Digits only.
    Numeric,
    /// File extension or domain suffix such as `(pdf)`.
    DomainSuffix,
    /// Entirely lowercase.
    Lowercase,
    /// Ordinary capitalized word.
    Capitalized,
    /// Part of a URL or file name.
    UrlFragment,
    /// Ends in a digit (version numbers, part numbers).
    TrailingDigit,
    /// Normalized key is not alphabetic or has the wrong length.
    KeyShape,
    /// Initial followed by a surname (`J.Smith`).
    PersonalName,
    /// Latin abbreviation or heading vocabulary.
    SkipWord,
    /// Known false positive.
    NoisyToken,
    /// All-caps token in a sentence that opens with an all-caps run.
    HeadingFragment,
    /// No dot, no second capital, not all caps.
    NoAbbreviationSignal,
    /// Common word.
    Stopword,
}

struct Candidate<'a> {
    raw: &'a str,
    key: String,
    sentence: &'a str,
}

type Rule = fn(&Candidate<'_>) -> Result<(), Rejection>;

const PAREN_RULES: &[Rule] = &[
    reject_numeric,
    reject_domain_suffix,
    reject_lowercase,
    reject_capitalized,
    require_paren_signal,
    require_paren_key_shape,
    reject_stopword,
    reject_noisy,
];

const TOKEN_RULES: &[Rule] = &[
    reject_url_fragment,
    reject_trailing_digit,
    require_token_key_shape,
    reject_personal_name,
    reject_skip_word,
    reject_noisy,
    reject_heading_fragment,
    require_token_signal,
    reject_stopword,
];

/// Scan a prose sentence for acronym keys.
///
/// The caller is responsible for skipping headings and bibliography lines.
///
/// # Example
///
/// ```
/// use reqlint::acronym::scan_sentence;
///
/// let keys = scan_sentence("Use the API and the (U.S.A.) mirror.");
/// assert_eq!(keys, vec!["USA", "API"]);
/// ```
pub fn scan_sentence(sentence: &str) -> Vec<String> {
    let paren = RE_PAREN
        .captures_iter(sentence)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| classify_paren(sentence, m.as_str()).ok());

    let free = RE_TOKEN
        .find_iter(sentence)
        .filter_map(|m| classify_token(sentence, m.as_str()).ok());

    let mut seen = HashSet::new();
    paren
        .chain(free)
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

/// Classify the content of a parenthesized span.
pub fn classify_paren(sentence: &str, raw: &str) -> Result<String, Rejection> {
    run_rules(PAREN_RULES, sentence, raw)
}

/// Classify a free token.
pub fn classify_token(sentence: &str, raw: &str) -> Result<String, Rejection> {
    run_rules(TOKEN_RULES, sentence, raw.trim())
}

fn run_rules(rules: &[Rule], sentence: &str, raw: &str) -> Result<String, Rejection> {
    let candidate = Candidate {
        raw,
        key: normalize(raw),
        sentence,
    };
    rules.iter().try_for_each(|rule| rule(&candidate))?;
    Ok(candidate.key)
}

fn reject_if(condition: bool, rejection: Rejection) -> Result<(), Rejection> {
    if condition {
        Err(rejection)
    } else {
        Ok(())
    }
}

fn uppercase_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_uppercase()).count()
}

/// Has cased characters and none of them uppercase.
fn is_all_lower(s: &str) -> bool {
    s.chars().any(char::is_lowercase) && !s.chars().any(char::is_uppercase)
}

/// Has cased characters and none of them lowercase.
fn is_all_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

fn reject_numeric(c: &Candidate<'_>) -> Result<(), Rejection> {
    reject_if(c.raw.chars().all(|ch| ch.is_ascii_digit()), Rejection::Numeric)
}

fn reject_domain_suffix(c: &Candidate<'_>) -> Result<(), Rejection> {
    reject_if(is_domain_suffix(c.raw), Rejection::DomainSuffix)
}

fn reject_lowercase(c: &Candidate<'_>) -> Result<(), Rejection> {
    reject_if(is_all_lower(c.raw), Rejection::Lowercase)
}

fn reject_capitalized(c: &Candidate<'_>) -> Result<(), Rejection> {
    let mut chars = c.raw.chars();
    let capitalized = chars.next().is_some_and(char::is_uppercase) && is_all_lower(chars.as_str());
    reject_if(capitalized, Rejection::Capitalized)
}

fn require_paren_signal(c: &Candidate<'_>) -> Result<(), Rejection> {
    let signal =
        uppercase_count(c.raw) >= 2 || c.raw.contains('.') || RE_CAMEL.is_match(c.raw);
    reject_if(!signal, Rejection::NoAbbreviationSignal)
}

fn require_paren_key_shape(c: &Candidate<'_>) -> Result<(), Rejection> {
    reject_if(!is_acronym_key(&c.key, 2..=10), Rejection::KeyShape)
}

fn reject_stopword(c: &Candidate<'_>) -> Result<(), Rejection> {
    reject_if(is_stopword(&c.key), Rejection::Stopword)
}

fn reject_noisy(c: &Candidate<'_>) -> Result<(), Rejection> {
    reject_if(is_noisy_token(&c.key), Rejection::NoisyToken)
}

fn reject_url_fragment(c: &Candidate<'_>) -> Result<(), Rejection> {
    reject_if(RE_URL_FRAGMENT.is_match(c.raw), Rejection::UrlFragment)
}

fn reject_trailing_digit(c: &Candidate<'_>) -> Result<(), Rejection> {
    let trailing = c.raw.chars().last().is_some_and(|ch| ch.is_ascii_digit());
    reject_if(trailing, Rejection::TrailingDigit)
}

fn require_token_key_shape(c: &Candidate<'_>) -> Result<(), Rejection> {
    reject_if(!is_acronym_key(&c.key, 2..=6), Rejection::KeyShape)
}

fn reject_personal_name(c: &Candidate<'_>) -> Result<(), Rejection> {
    reject_if(RE_PERSONAL_NAME.is_match(c.raw), Rejection::PersonalName)
}

fn reject_skip_word(c: &Candidate<'_>) -> Result<(), Rejection> {
    reject_if(is_skip_word(&c.key), Rejection::SkipWord)
}

fn reject_heading_fragment(c: &Candidate<'_>) -> Result<(), Rejection> {
    let fragment = RE_ALL_CAPS.is_match(c.raw) && RE_CAPS_LEAD.is_match(c.sentence);
    reject_if(fragment, Rejection::HeadingFragment)
}

fn require_token_signal(c: &Candidate<'_>) -> Result<(), Rejection> {
    let signal = c.raw.contains('.')
        || uppercase_count(c.raw) >= 2
        || (is_all_upper(c.raw) && c.key.chars().count() <= 6);
    reject_if(!signal, Rejection::NoAbbreviationSignal)
}
