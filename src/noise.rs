//! Sentence noise filter.
//!
//! Headings and bibliography lines are dense with all-caps tokens that are
//! not domain abbreviations ("SYSTEM REQUIREMENTS OVERVIEW", "ISBN 0-13-...").
//! Sentences classified here as anything other than [`NoiseDecision::Prose`]
//! are excluded from occurrence scanning. Definition extraction ignores this
//! filter entirely.
//!
//! # Decision order
//!
//! 1. **Heading** - empty, or short and mostly uppercase
//! 2. **Bibliography** - URL/publisher markers, caps-token density, number
//!    runs in long lines, slash or colon density

use crate::config::NoiseConfig;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static RE_BIB_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://|www\.|ISBN|doi:|Publisher:|Edition:|Published").unwrap()
});

static RE_CAPS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][A-Z0-9\-]+\b").unwrap());

static RE_NUMBER_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{2,}").unwrap());

/// Why a line looks like bibliography or link noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BibliographySignal {
    /// URL, ISBN, DOI or publisher marker.
    Marker,
    /// Too many distinct all-caps tokens.
    CapsDensity,
    /// Several multi-digit runs in a long sentence.
    NumberRuns,
    /// Too many slashes or colons.
    Separators,
}

/// Result of noise classification for a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseDecision {
    /// Ordinary prose; scan it for acronyms.
    Prose,
    /// Heading or empty line.
    Heading,
    /// Bibliography, URL or reference-list line.
    Bibliography(BibliographySignal),
}

impl NoiseDecision {
    /// Check if the sentence should be scanned for occurrences.
    pub fn is_prose(&self) -> bool {
        matches!(self, NoiseDecision::Prose)
    }
}

/// Classifier for heading and bibliography sentences.
#[derive(Debug, Clone, Default)]
pub struct NoiseFilter {
    config: NoiseConfig,
}

impl NoiseFilter {
    /// Create a new filter with the given thresholds.
    pub fn new(config: NoiseConfig) -> Self {
        Self { config }
    }

    /// Create a filter with default thresholds.
    pub fn with_defaults() -> Self {
        Self::new(NoiseConfig::default())
    }

    /// Classify a sentence.
    pub fn classify(&self, sentence: &str) -> NoiseDecision {
        if self.is_heading(sentence) {
            return NoiseDecision::Heading;
        }
        match self.bibliography_signal(sentence) {
            Some(signal) => NoiseDecision::Bibliography(signal),
            None => NoiseDecision::Prose,
        }
    }

    /// Check if a sentence is a heading.
    ///
    /// Blank sentences count as headings. A sentence with no letters at all
    /// is not a heading (it is left for the bibliography check).
    pub fn is_heading(&self, sentence: &str) -> bool {
        if sentence.trim().is_empty() {
            return true;
        }

        let (letters, upper) = sentence
            .chars()
            .filter(|c| c.is_alphabetic())
            .fold((0usize, 0usize), |(letters, upper), c| {
                (letters + 1, upper + usize::from(c.is_uppercase()))
            });
        if letters == 0 {
            return false;
        }

        let ratio = upper as f64 / letters as f64;
        sentence.chars().count() < self.config.heading_max_length
            && ratio >= self.config.heading_uppercase_ratio
    }

    /// Check if a sentence is bibliography or URL heavy.
    pub fn is_bibliography_or_url_heavy(&self, sentence: &str) -> bool {
        self.bibliography_signal(sentence).is_some()
    }

    fn bibliography_signal(&self, sentence: &str) -> Option<BibliographySignal> {
        if RE_BIB_MARKER.is_match(sentence) {
            return Some(BibliographySignal::Marker);
        }

        let caps: HashSet<&str> = RE_CAPS_TOKEN
            .find_iter(sentence)
            .map(|m| m.as_str())
            .collect();
        if caps.len() >= self.config.max_caps_tokens {
            return Some(BibliographySignal::CapsDensity);
        }

        if sentence.chars().count() > self.config.number_run_min_length
            && RE_NUMBER_RUN.find_iter(sentence).count() >= self.config.max_number_runs
        {
            return Some(BibliographySignal::NumberRuns);
        }

        let slashes = sentence.matches('/').count();
        let colons = sentence.matches(':').count();
        if slashes >= self.config.max_slashes || colons >= self.config.max_colons {
            return Some(BibliographySignal::Separators);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> NoiseFilter {
        NoiseFilter::with_defaults()
    }

    #[test]
    fn test_heading_all_caps() {
        assert!(filter().is_heading("SYSTEM REQUIREMENTS OVERVIEW"));
        assert_eq!(
            filter().classify("SYSTEM REQUIREMENTS OVERVIEW"),
            NoiseDecision::Heading
        );
    }

    #[test]
    fn test_blank_is_heading() {
        assert!(filter().is_heading(""));
        assert!(filter().is_heading("   "));
    }

    #[test]
    fn test_no_letters_not_heading() {
        assert!(!filter().is_heading("1.2.3"));
    }

    #[test]
    fn test_long_caps_line_not_heading() {
        let long = "THIS LINE IS WRITTEN ENTIRELY IN CAPITALS BUT IS FAR TOO LONG TO BE A HEADING";
        assert!(!filter().is_heading(long));
    }

    #[test]
    fn test_prose_not_heading() {
        let sentence = "The Graphical User Interface (GUI) must load fast.";
        assert!(!filter().is_heading(sentence));
        assert!(filter().classify(sentence).is_prose());
    }

    #[test]
    fn test_url_marker() {
        assert_eq!(
            filter().classify("See https://example.org for the latest release notes."),
            NoiseDecision::Bibliography(BibliographySignal::Marker)
        );
        assert!(filter().is_bibliography_or_url_heavy("Addison-Wesley, isbn 0201633612 reprint."));
    }

    #[test]
    fn test_caps_density_counts_distinct_tokens() {
        let distinct = "The NASA and ESA teams use JPL and DLR tooling daily.";
        assert_eq!(
            filter().classify(distinct),
            NoiseDecision::Bibliography(BibliographySignal::CapsDensity)
        );

        let repeated = "The API calls the API which wraps the API for the API users.";
        assert!(filter().classify(repeated).is_prose());
    }

    #[test]
    fn test_number_runs_need_long_sentence() {
        let short = "Released 1999 and revised 2004 by the team.";
        assert!(filter().classify(short).is_prose());

        let long = "Smith and Jones, Software requirements engineering practice, volume 12, pages 113 to 140, in the annual review.";
        assert_eq!(
            filter().classify(long),
            NoiseDecision::Bibliography(BibliographySignal::NumberRuns)
        );
    }

    #[test]
    fn test_separators() {
        assert_eq!(
            filter().classify("Input/output and read/write paths are covered here."),
            NoiseDecision::Bibliography(BibliographySignal::Separators)
        );
        assert_eq!(
            filter().classify("Author: X. Title: Y. Year: unknown value for now"),
            NoiseDecision::Bibliography(BibliographySignal::Separators)
        );
    }

    #[test]
    fn test_custom_threshold() {
        let config = NoiseConfig::default().with_heading_max_length(10);
        let filter = NoiseFilter::new(config);
        assert!(!filter.is_heading("SYSTEM REQUIREMENTS OVERVIEW"));
    }
}
