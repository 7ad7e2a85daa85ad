//! Analysis options.
//!
//! Every heuristic threshold lives here rather than inline in the rules so
//! that corpora with unusual conventions can be tuned without code changes.

use crate::prepare::PrepareOptions;

/// Thresholds for the sentence noise filter (headings, bibliography lines).
#[derive(Debug, Clone)]
pub struct NoiseConfig {
    /// Sentences shorter than this (in characters) may be headings.
    pub heading_max_length: usize,

    /// Minimum ratio of uppercase letters for a short sentence to be a heading.
    pub heading_uppercase_ratio: f64,

    /// Number of distinct all-caps tokens that marks a line as noise.
    pub max_caps_tokens: usize,

    /// Number of 2+ digit runs that marks a long line as noise.
    pub max_number_runs: usize,

    /// Length a sentence must exceed before number runs count.
    pub number_run_min_length: usize,

    /// Number of slashes that marks a line as noise.
    pub max_slashes: usize,

    /// Number of colons that marks a line as noise.
    pub max_colons: usize,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            heading_max_length: 60,
            heading_uppercase_ratio: 0.6,
            max_caps_tokens: 4,
            max_number_runs: 2,
            number_run_min_length: 80,
            max_slashes: 2,
            max_colons: 3,
        }
    }
}

impl NoiseConfig {
    /// Creates a noise config with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the heading length threshold.
    pub fn with_heading_max_length(mut self, length: usize) -> Self {
        self.heading_max_length = length;
        self
    }

    /// Sets the heading uppercase ratio (clamped to 0.0-1.0).
    pub fn with_heading_uppercase_ratio(mut self, ratio: f64) -> Self {
        self.heading_uppercase_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the all-caps token limit.
    pub fn with_max_caps_tokens(mut self, count: usize) -> Self {
        self.max_caps_tokens = count.max(1);
        self
    }
}

/// Per-document occurrence filtering.
///
/// A key found by the scanner survives only if it is defined in the
/// document, seen in enough distinct sentences, or written out in dotted or
/// spaced form somewhere in the raw text.
#[derive(Debug, Clone)]
pub struct OccurrenceFilter {
    /// Minimum number of distinct sentences for an undefined key to survive.
    pub min_distinct_sentences: usize,

    /// Keep singleton keys whose letters appear dotted or spaced (`U.S.A.`).
    pub accept_dotted_rendering: bool,
}

impl Default for OccurrenceFilter {
    fn default() -> Self {
        Self {
            min_distinct_sentences: 2,
            accept_dotted_rendering: true,
        }
    }
}

/// Options for analyzing documents and corpora.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Sentence noise filter thresholds.
    pub noise: NoiseConfig,

    /// Per-document occurrence filter.
    pub occurrence: OccurrenceFilter,

    /// Text preparation applied before segmentation.
    pub prepare: PrepareOptions,

    /// Sentences on each side of an undefined use searched for an expansion.
    pub guess_window: usize,

    /// Whether to scan sentences for subjective terms and smells.
    pub scan_subjective: bool,

    /// Whether corpus runs may analyze documents in parallel.
    pub parallel: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            noise: NoiseConfig::default(),
            occurrence: OccurrenceFilter::default(),
            prepare: PrepareOptions::default(),
            guess_window: 1,
            scan_subjective: true,
            parallel: cfg!(feature = "parallel"),
        }
    }
}

impl AnalyzerConfig {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the noise filter thresholds.
    pub fn with_noise(mut self, noise: NoiseConfig) -> Self {
        self.noise = noise;
        self
    }

    /// Sets the minimum distinct sentence count for undefined keys.
    pub fn with_min_distinct_sentences(mut self, count: usize) -> Self {
        self.occurrence.min_distinct_sentences = count.max(1);
        self
    }

    /// Enables or disables the dotted-rendering rescue rule.
    pub fn with_dotted_rendering(mut self, accept: bool) -> Self {
        self.occurrence.accept_dotted_rendering = accept;
        self
    }

    /// Replaces the text preparation options.
    pub fn with_prepare(mut self, prepare: PrepareOptions) -> Self {
        self.prepare = prepare;
        self
    }

    /// Sets the expansion guess window.
    pub fn with_guess_window(mut self, window: usize) -> Self {
        self.guess_window = window;
        self
    }

    /// Disables subjective term and smell scanning.
    pub fn without_subjective(mut self) -> Self {
        self.scan_subjective = false;
        self
    }

    /// Disables parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
