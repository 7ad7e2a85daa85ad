//! Error types for reqlint library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for reqlint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for reqlint library.
///
/// Heuristic analysis itself never fails: a sentence that defeats every rule
/// simply yields no candidates. Errors only arise around the edges of a run
/// (reading the corpus directory, writing reports).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The corpus path is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A per-acronym pattern could not be compiled.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
