use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{RecordError, RecordResult};

/// Key type for the catalog (ISBNs are treated as plain integers)
pub type Isbn = i64;

/// Parse an ISBN from user-supplied text
///
/// Surrounding whitespace is ignored and an optional sign is accepted.
/// There is no checksum or digit-count validation.
pub fn parse_isbn(text: &str) -> RecordResult<Isbn> {
    text.trim()
        .parse::<Isbn>()
        .map_err(|_| RecordError::InvalidKey(text.to_string()))
}

/// A single book entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        isbn: Isbn,
        title: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            isbn,
            title: title.into(),
            author: author.into(),
            publisher: publisher.into(),
            year: year.into(),
        }
    }

    /// Create a record from a textual ISBN
    ///
    /// # Returns
    /// * `Ok(Record)` - The record with its parsed key
    /// * `Err(RecordError::InvalidKey)` - If `isbn` is not an integer
    pub fn parse(
        isbn: &str,
        title: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
        year: impl Into<String>,
    ) -> RecordResult<Self> {
        Ok(Self::new(parse_isbn(isbn)?, title, author, publisher, year))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ISBN: {}, Title: {}, Author: {}, Publisher: {}, Year: {}",
            self.isbn, self.title, self.author, self.publisher, self.year
        )
    }
}
