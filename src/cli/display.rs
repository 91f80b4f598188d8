use prettytable::format::consts::FORMAT_BOX_CHARS;
use prettytable::{Cell, Row, Table};

use crate::bst::TraversalOrder;
use crate::record::Record;

pub const EMPTY_LIBRARY: &str = "No books in the library.";

/// Render a traversal result as a titled table
pub fn render_books(records: &[&Record], order: TraversalOrder) -> String {
    if records.is_empty() {
        return format!("{}\n", EMPTY_LIBRARY);
    }

    let mut table = Table::new();
    table.set_format(*FORMAT_BOX_CHARS);
    table.set_titles(Row::new(
        ["ISBN", "Title", "Author", "Publisher", "Year"]
            .into_iter()
            .map(|title| Cell::new(title).style_spec("b"))
            .collect(),
    ));

    for record in records {
        table.add_row(Row::new(vec![
            Cell::new(&record.isbn.to_string()).style_spec("r"),
            Cell::new(&record.title),
            Cell::new(&record.author),
            Cell::new(&record.publisher),
            Cell::new(&record.year),
        ]));
    }

    format!("Books ({} Traversal)\n{}", order, table)
}
