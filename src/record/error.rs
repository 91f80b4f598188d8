use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Invalid ISBN format: {0:?} (ISBN should be an integer)")]
    InvalidKey(String),
}

pub type RecordResult<T> = Result<T, RecordError>;
