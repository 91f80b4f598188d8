//! Loading and saving catalogs
//!
//! - JSON: an array of records, written in ascending ISBN order
//! - CSV: `isbn,title,author,publisher,year` with a header row

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::info;
use serde::Deserialize;

use super::Library;
use super::error::LibraryResult;
use crate::bst::InsertOutcome;
use crate::record::Record;

/// Per-outcome counts from a bulk load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub updated: usize,
    pub rejected: usize,
}

impl ImportSummary {
    fn record(&mut self, outcome: InsertOutcome) {
        match outcome {
            InsertOutcome::Inserted => self.inserted += 1,
            InsertOutcome::Updated => self.updated += 1,
            InsertOutcome::Rejected => self.rejected += 1,
        }
    }

    /// Total rows seen
    pub fn total(&self) -> usize {
        self.inserted + self.updated + self.rejected
    }
}

/// Raw CSV row; the ISBN stays text until validated
#[derive(Debug, Deserialize)]
struct CsvRow {
    isbn: String,
    title: String,
    author: String,
    publisher: String,
    year: String,
}

impl Library {
    /// Insert every record of a JSON array, in file order
    ///
    /// Keys already present are left untouched and counted as rejected.
    pub fn load_json(&mut self, path: &Path) -> LibraryResult<ImportSummary> {
        let content = fs::read_to_string(path)?;
        let records: Vec<Record> = serde_json::from_str(&content)?;

        let mut summary = ImportSummary::default();
        for record in records {
            summary.record(self.index.insert_with_outcome(record.isbn, record, false));
        }

        info!(
            "Loaded {} books from {} ({} duplicates skipped)",
            summary.inserted,
            path.display(),
            summary.rejected
        );
        Ok(summary)
    }

    /// Write the catalog as a JSON array in ascending ISBN order
    pub fn save_json(&self, path: &Path) -> LibraryResult<()> {
        let records: Vec<&Record> = self.index.inorder().collect();
        let content = serde_json::to_string_pretty(&records)?;
        fs::write(path, content)?;
        info!("Saved {} books to {}", records.len(), path.display());
        Ok(())
    }

    /// Import a CSV file with a header row
    ///
    /// Rows are applied in order. A row with a malformed ISBN aborts the
    /// import with `InvalidKey`; rows before it stay applied.
    pub fn import_csv(&mut self, path: &Path, overwrite: bool) -> LibraryResult<ImportSummary> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_path(path)?;

        let mut summary = ImportSummary::default();
        for row in reader.deserialize::<CsvRow>() {
            let row = row?;
            let record = Record::parse(&row.isbn, row.title, row.author, row.publisher, row.year)?;
            summary.record(self.index.insert_with_outcome(record.isbn, record, overwrite));
        }

        info!(
            "Imported {} rows from {}: {} inserted, {} updated, {} rejected",
            summary.total(),
            path.display(),
            summary.inserted,
            summary.updated,
            summary.rejected
        );
        Ok(summary)
    }
}
