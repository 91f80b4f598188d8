pub mod bst;
pub mod cli;
pub mod library;
pub mod record;

pub use bst::{InsertOutcome, Node, OrderedIndex, TraversalOrder};
pub use library::{ImportSummary, Library, LibraryError, LibraryResult};
pub use record::{Isbn, Record, RecordError, RecordResult, parse_isbn};
