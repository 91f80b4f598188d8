//! Command-line front end: options, catalog setup and the menu loop

mod display;
mod error;
mod menu;
mod prompt;

pub use display::render_books;
pub use error::{CliError, CliResult};
pub use menu::{Menu, MenuChoice};
pub use prompt::{HISTORY_ENV_VAR, LinePrompt, Prompt, ScriptedPrompt, history_path};

use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, info};

use crate::library::Library;

/// Library catalog backed by a binary search tree
#[derive(Debug, Parser)]
#[command(name = "shelf", version)]
pub struct Args {
    /// Start with an empty catalog instead of the ten sample books
    #[arg(long)]
    pub no_seed: bool,

    /// Seed the catalog from a JSON array of books instead of the samples
    #[arg(long, value_name = "JSON", conflicts_with = "no_seed")]
    pub seed_file: Option<PathBuf>,

    /// Import books from a CSV file (isbn,title,author,publisher,year) at startup
    #[arg(long, value_name = "CSV")]
    pub import_csv: Option<PathBuf>,

    /// Let CSV rows replace books with the same ISBN
    #[arg(long, requires = "import_csv")]
    pub overwrite: bool,

    /// Write the catalog as JSON when the session ends
    #[arg(long, value_name = "JSON")]
    pub save: Option<PathBuf>,

    /// Line-editor history file (empty disables history)
    #[arg(long, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace, off); overrides RUST_LOG
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LevelFilter>,
}

impl Args {
    /// Build the starting catalog from the seeding and import options
    pub fn build_library(&self) -> CliResult<Library> {
        let mut library = match (&self.seed_file, self.no_seed) {
            (Some(path), _) => {
                let mut library = Library::new();
                library.load_json(path)?;
                library
            }
            (None, true) => Library::new(),
            (None, false) => Library::seeded(),
        };

        if let Some(path) = &self.import_csv {
            library.import_csv(path, self.overwrite)?;
        }

        Ok(library)
    }
}

/// Run an interactive session on stdin/stdout
pub fn run(args: &Args) -> CliResult<()> {
    let mut library = args.build_library()?;
    info!("Starting with {} books", library.len());

    let prompt = LinePrompt::new(history_path(args.history.as_deref()))?;
    let mut menu = Menu::new(&mut library, prompt, io::stdout());
    let result = menu.run();

    let (mut prompt, _) = menu.into_parts();
    prompt.save_history();
    result?;

    if let Some(path) = &args.save {
        library.save_json(path)?;
    }

    Ok(())
}
