//! Book catalog backed by the ordered index
//!
//! This is the text-facing boundary: ISBNs arrive as user-typed strings
//! and every outcome comes back as a value. Malformed keys, duplicates
//! and misses are reported through `LibraryError` and never change the
//! tree.

mod error;
mod persist;
mod seed;

pub use error::{LibraryError, LibraryResult};
pub use persist::ImportSummary;
pub use seed::{SEED_BOOKS, seed_records};

use log::debug;

use crate::bst::{InsertOutcome, OrderedIndex, TraversalOrder};
use crate::record::{Record, parse_isbn};

/// A catalog of books keyed by ISBN
#[derive(Debug, Default)]
pub struct Library {
    index: OrderedIndex,
}

impl Library {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the ten seed books
    pub fn seeded() -> Self {
        let mut library = Self::new();
        for record in seed_records() {
            library.index.insert(record.isbn, record, false);
        }
        debug!("Seeded catalog with {} books", library.len());
        library
    }

    /// The underlying index
    pub fn index(&self) -> &OrderedIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Add a book from user-supplied fields
    ///
    /// # Returns
    /// * `Ok(InsertOutcome::Inserted)` - New book added
    /// * `Ok(InsertOutcome::Updated)` - Existing book replaced (`overwrite` only)
    /// * `Err(LibraryError::DuplicateKey)` - ISBN exists and `overwrite` is false
    /// * `Err(LibraryError::InvalidKey)` - `isbn` is not an integer
    pub fn insert(
        &mut self,
        isbn: &str,
        title: &str,
        author: &str,
        publisher: &str,
        year: &str,
        overwrite: bool,
    ) -> LibraryResult<InsertOutcome> {
        let record = Record::parse(isbn, title, author, publisher, year)?;
        self.insert_record(record, overwrite)
    }

    /// Add an already-built record
    pub fn insert_record(
        &mut self,
        record: Record,
        overwrite: bool,
    ) -> LibraryResult<InsertOutcome> {
        let isbn = record.isbn;
        match self.index.insert_with_outcome(isbn, record, overwrite) {
            InsertOutcome::Rejected => {
                debug!("Rejected duplicate ISBN {}", isbn);
                Err(LibraryError::DuplicateKey(isbn))
            }
            outcome => {
                debug!("Insert ISBN {}: {:?}", isbn, outcome);
                Ok(outcome)
            }
        }
    }

    /// Remove a book, returning it
    pub fn delete(&mut self, isbn: &str) -> LibraryResult<Record> {
        let isbn = parse_isbn(isbn)?;
        let removed = self
            .index
            .delete(isbn)
            .ok_or(LibraryError::NotFound(isbn))?;
        debug!("Deleted ISBN {}", isbn);
        Ok(removed)
    }

    /// Look up a book; a missing ISBN is `Ok(None)`
    pub fn search(&self, isbn: &str) -> LibraryResult<Option<&Record>> {
        let isbn = parse_isbn(isbn)?;
        Ok(self.index.search(isbn))
    }

    /// All books in the requested order
    pub fn traverse(&self, order: TraversalOrder) -> Vec<&Record> {
        self.index.traverse(order)
    }
}
