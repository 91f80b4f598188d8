use std::io;
use thiserror::Error;

use crate::record::{Isbn, RecordError};

/// Errors reported by catalog operations
///
/// None of these leave the index in an inconsistent state: a rejected
/// operation leaves the tree exactly as it was.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Invalid ISBN format: {0:?} (ISBN should be an integer)")]
    InvalidKey(String),

    #[error("A book with ISBN {0} already exists")]
    DuplicateKey(Isbn),

    #[error("Book with ISBN {0} not found")]
    NotFound(Isbn),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<RecordError> for LibraryError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::InvalidKey(text) => LibraryError::InvalidKey(text),
        }
    }
}

pub type LibraryResult<T> = Result<T, LibraryError>;
