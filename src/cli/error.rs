use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::library::LibraryError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Library(#[from] LibraryError),
}

pub type CliResult<T> = Result<T, CliError>;
