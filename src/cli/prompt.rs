//! Line input for the menu
//!
//! The menu reads through the `Prompt` trait so sessions can be scripted.
//! Interactive use goes through rustyline, which also keeps the history
//! file. The history location is resolved once at startup:
//!
//! 1. `--history <path>` (an empty path disables history)
//! 2. `$SHELF_HISTORY` (empty disables history)
//! 3. `~/.shelf_history`

use std::collections::VecDeque;
use std::env;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use super::error::CliResult;

const DEFAULT_HISTORY_FILE: &str = ".shelf_history";
pub const HISTORY_ENV_VAR: &str = "SHELF_HISTORY";

/// Source of user input lines
pub trait Prompt {
    /// Show `prompt` and read one line
    ///
    /// Returns `Ok(None)` once input is exhausted (Ctrl-D, Ctrl-C, end of script).
    fn read_line(&mut self, prompt: &str) -> CliResult<Option<String>>;
}

/// Interactive prompt backed by rustyline
pub struct LinePrompt {
    editor: DefaultEditor,
    history: Option<PathBuf>,
}

impl LinePrompt {
    pub fn new(history: Option<PathBuf>) -> CliResult<Self> {
        let mut editor = DefaultEditor::new()?;

        if let Some(path) = &history {
            if let Err(err) = editor.load_history(path) {
                debug!("No history loaded from {}: {}", path.display(), err);
            }
        }

        Ok(Self { editor, history })
    }

    /// Persist the session history, if enabled
    pub fn save_history(&mut self) {
        if let Some(path) = &self.history {
            if let Err(err) = self.editor.save_history(path) {
                warn!("Failed to save history to {}: {}", path.display(), err);
            }
        }
    }
}

impl Prompt for LinePrompt {
    fn read_line(&mut self, prompt: &str) -> CliResult<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Prompt that replays a fixed list of answers
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> CliResult<Option<String>> {
        self.asked.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

/// Resolve the history file location
pub fn history_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_history(
        explicit,
        env::var(HISTORY_ENV_VAR).ok(),
        env::var("HOME").ok().map(PathBuf::from),
    )
}

fn resolve_history(
    explicit: Option<&Path>,
    from_env: Option<String>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return (!path.as_os_str().is_empty()).then(|| path.to_path_buf());
    }

    if let Some(custom_path) = from_env {
        if custom_path.is_empty() {
            return None;
        }
        return Some(PathBuf::from(custom_path));
    }

    home.map(|home| home.join(DEFAULT_HISTORY_FILE))
}
