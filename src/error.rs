//! Error types

use thiserror::Error;

/// Errors from lexicon loading and batch I/O
///
/// Address decomposition itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input or a CSV write failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A lexicon row could not be used
    #[error("Invalid lexicon entry at line {line}: {reason}")]
    InvalidLexicon { line: u64, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
