use crate::record::{Isbn, Record};

/// Initial catalog contents, in insertion order
///
/// Inserting these in order yields a four-level tree rooted at 10, which
/// the tests use as a fixture.
pub const SEED_BOOKS: [(Isbn, &str, &str, &str, &str); 10] = [
    (10, "Book One", "Author A", "Publisher X", "2001"),
    (5, "Book Two", "Author B", "Publisher Y", "2002"),
    (2, "Book Three", "Author C", "Publisher Z", "2003"),
    (8, "Book Four", "Author D", "Publisher W", "2004"),
    (15, "Book Five", "Author E", "Publisher V", "2005"),
    (12, "Book Six", "Author F", "Publisher U", "2006"),
    (18, "Book Seven", "Author G", "Publisher T", "2007"),
    (11, "Book Eight", "Author H", "Publisher S", "2008"),
    (14, "Book Nine", "Author I", "Publisher R", "2009"),
    (20, "Book Ten", "Author J", "Publisher Q", "2010"),
];

/// The seed entries as records
pub fn seed_records() -> impl Iterator<Item = Record> {
    SEED_BOOKS
        .iter()
        .map(|&(isbn, title, author, publisher, year)| {
            Record::new(isbn, title, author, publisher, year)
        })
}
