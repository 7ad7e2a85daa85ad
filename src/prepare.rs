//! # Input Preparation
//!
//! Converted requirement documents arrive with the usual extraction debris:
//! decomposed Unicode, control characters, replacement characters left by
//! lossy decoding, and fullwidth punctuation. This stage folds all of that
//! into plain text the acronym heuristics can rely on.
//!
//! 1. Unicode NFC normalization
//! 2. Control character removal
//! 3. Fullwidth ASCII folding (`（ＧＵＩ）` becomes `(GUI)`)
//! 4. Optional whitespace collapse

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Preparation options.
#[derive(Debug, Clone)]
pub struct PrepareOptions {
    /// Apply Unicode NFC normalization.
    pub normalize_unicode: bool,
    /// Remove control characters and U+FFFD.
    pub remove_control: bool,
    /// Fold fullwidth ASCII variants to ASCII.
    pub fold_fullwidth: bool,
    /// Collapse every whitespace run (newlines included) into one space.
    ///
    /// Off by default: newlines are sentence boundaries for the segmenter.
    pub collapse_whitespace: bool,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            remove_control: true,
            fold_fullwidth: true,
            collapse_whitespace: false,
        }
    }
}

impl PrepareOptions {
    /// Leaves the text untouched.
    pub fn raw() -> Self {
        Self {
            normalize_unicode: false,
            remove_control: false,
            fold_fullwidth: false,
            collapse_whitespace: false,
        }
    }

    /// Enables whitespace collapsing.
    pub fn with_collapse_whitespace(mut self) -> Self {
        self.collapse_whitespace = true;
        self
    }
}

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Prepare raw document text for analysis.
///
/// # Example
///
/// ```
/// use reqlint::prepare::{prepare, PrepareOptions};
///
/// let text = prepare("Graphical User Interface （ＧＵＩ）", &PrepareOptions::default());
/// assert_eq!(text, "Graphical User Interface (GUI)");
/// ```
pub fn prepare(input: &str, options: &PrepareOptions) -> String {
    let mut result = String::with_capacity(input.len());

    let chars: Box<dyn Iterator<Item = char>> = if options.normalize_unicode {
        Box::new(input.nfc())
    } else {
        Box::new(input.chars())
    };

    for c in chars {
        if options.remove_control && is_control_char(c) {
            continue;
        }

        if options.fold_fullwidth {
            if let Some(folded) = fold_fullwidth(c) {
                result.push(folded);
                continue;
            }
        }

        result.push(c);
    }

    if options.collapse_whitespace {
        result = RE_WHITESPACE.replace_all(result.trim(), " ").into_owned();
    }

    result
}

/// Decode file bytes, replacing invalid UTF-8 sequences.
///
/// The replacement characters are dropped later by [`prepare`].
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Check if character is a control character that should be removed
fn is_control_char(c: char) -> bool {
    matches!(
        c,
        '\0'
        | '\x0B'
        | '\x0C'
        | '\u{FEFF}' // BOM
        | '\u{FFFD}' // Replacement character
        | '\u{00AD}' // Soft hyphen
        | '\u{200B}' // Zero width space
    )
}

/// Normalize fullwidth characters to ASCII equivalents
fn fold_fullwidth(c: char) -> Option<char> {
    match c {
        '\u{3000}' => Some(' '),
        '\u{FF01}'..='\u{FF5E}' => {
            let offset = c as u32 - 0xFF01;
            char::from_u32(0x21 + offset)
        }
        _ => None,
    }
}
