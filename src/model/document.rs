//! Document structure.

use crate::segment::split_sentences;
use serde::Serialize;

/// A requirements document split into sentences.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    /// Document identifier (file name)
    pub name: String,
    /// Sentences in document order
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// Segments `text` into a new document.
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        let sentences = split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| Sentence { index, text })
            .collect();

        Self {
            name: name.into(),
            sentences,
        }
    }

    /// Returns the number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Returns the sentence at `index`.
    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    /// Returns the text of the sentence at `index`, or an empty string.
    pub fn sentence_text(&self, index: usize) -> &str {
        self.sentence(index).map_or("", |s| s.text.as_str())
    }

    /// Returns true if the document has no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A sentence with its stable 0-based position in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Sentence index (0-based)
    pub index: usize,
    /// Trimmed sentence text
    pub text: String,
}
