mod error;
mod record;

pub use error::{RecordError, RecordResult};
pub use record::{Isbn, Record, parse_isbn};
