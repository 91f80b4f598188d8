//! Interactive catalog menu
//!
//! ```text
//! 1. Insert Book
//! 2. Delete Book
//! 3. Search Book
//! 4. Display All Books (Inorder)
//! 5. Display All Books (Preorder)
//! 6. Display All Books (Postorder)
//! 7. Display All Books (Level Order)
//! 8. Exit
//! ```
//!
//! An empty choice means Exit. Rejected operations are reported and the
//! loop carries on; only I/O failures end the session early.

use std::io::Write;

use log::debug;

use super::display::render_books;
use super::error::CliResult;
use super::prompt::Prompt;
use crate::bst::{InsertOutcome, TraversalOrder};
use crate::library::{Library, LibraryError};

const RULE: &str = "==================================================";
const MENU_WIDTH: usize = 50;

const INSERT_QUESTIONS: [&str; 5] = [
    "Enter ISBN",
    "Enter Title",
    "Enter Author",
    "Enter Publisher",
    "Enter Year",
];

const INVALID_ISBN: &str = "Invalid ISBN format. ISBN should be an integer.";

/// One menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Insert,
    Delete,
    Search,
    Display(TraversalOrder),
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection; empty input selects Exit
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Insert),
            "2" => Some(MenuChoice::Delete),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Display(TraversalOrder::Inorder)),
            "5" => Some(MenuChoice::Display(TraversalOrder::Preorder)),
            "6" => Some(MenuChoice::Display(TraversalOrder::Postorder)),
            "7" => Some(MenuChoice::Display(TraversalOrder::LevelOrder)),
            "8" | "" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu session over a catalog
pub struct Menu<'a, P, W> {
    library: &'a mut Library,
    prompt: P,
    out: W,
}

impl<'a, P: Prompt, W: Write> Menu<'a, P, W> {
    pub fn new(library: &'a mut Library, prompt: P, out: W) -> Self {
        Self {
            library,
            prompt,
            out,
        }
    }

    /// Give back the prompt and output sink
    pub fn into_parts(self) -> (P, W) {
        (self.prompt, self.out)
    }

    /// Run until Exit or end of input
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt.read_line("Enter your choice [1-8] (8): ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.out, "Invalid choice, please try again.")?;
                continue;
            };
            debug!("Menu choice: {:?}", choice);

            let keep_going = match choice {
                MenuChoice::Insert => self.insert_book()?,
                MenuChoice::Delete => self.delete_book()?,
                MenuChoice::Search => self.search_book()?,
                MenuChoice::Display(order) => {
                    let books = self.library.traverse(order);
                    write!(self.out, "{}", render_books(&books, order))?;
                    true
                }
                MenuChoice::Exit => false,
            };

            if !keep_going {
                break;
            }
        }

        Ok(())
    }

    fn print_menu(&mut self) -> CliResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(
            self.out,
            "{:=^width$}",
            " Library Management System ",
            width = MENU_WIDTH
        )?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "1. Insert Book")?;
        writeln!(self.out, "2. Delete Book")?;
        writeln!(self.out, "3. Search Book")?;
        for (i, order) in TraversalOrder::ALL.iter().enumerate() {
            writeln!(self.out, "{}. Display All Books ({})", i + 4, order)?;
        }
        writeln!(self.out, "8. Exit")?;
        writeln!(self.out, "{}", RULE)?;
        Ok(())
    }

    /// Ask one question; `None` means input ended
    fn ask(&mut self, question: &str) -> CliResult<Option<String>> {
        Ok(self
            .prompt
            .read_line(&format!("{}: ", question))?
            .map(|line| line.trim().to_string()))
    }

    /// Ask a yes/no question until answered, empty meaning no
    fn confirm(&mut self, question: &str) -> CliResult<Option<bool>> {
        loop {
            let Some(answer) = self.ask(&format!("{} (yes/no) [no]", question))? else {
                return Ok(None);
            };
            match answer.to_ascii_lowercase().as_str() {
                "yes" | "y" => return Ok(Some(true)),
                "no" | "n" | "" => return Ok(Some(false)),
                _ => writeln!(self.out, "Please answer yes or no.")?,
            }
        }
    }

    fn insert_book(&mut self) -> CliResult<bool> {
        let mut fields: [String; 5] = Default::default();
        for (field, question) in fields.iter_mut().zip(INSERT_QUESTIONS) {
            match self.ask(question)? {
                Some(answer) => *field = answer,
                None => return Ok(false),
            }
        }
        let Some(overwrite) =
            self.confirm("Do you want to overwrite if a book with the same ISBN exists?")?
        else {
            return Ok(false);
        };

        let [isbn, title, author, publisher, year] = &fields;
        match self
            .library
            .insert(isbn, title, author, publisher, year, overwrite)
        {
            Ok(InsertOutcome::Updated) => {
                writeln!(self.out, "Overwriting the existing book.")?;
                writeln!(self.out, "Book inserted successfully.")?;
            }
            Ok(_) => writeln!(self.out, "Book inserted successfully.")?,
            Err(LibraryError::DuplicateKey(_)) => writeln!(
                self.out,
                "A book with the same ISBN already exists. Skipping insertion."
            )?,
            Err(LibraryError::InvalidKey(_)) => writeln!(self.out, "{}", INVALID_ISBN)?,
            Err(err) => return Err(err.into()),
        }

        Ok(true)
    }

    fn delete_book(&mut self) -> CliResult<bool> {
        let Some(isbn) = self.ask("Enter ISBN to delete")? else {
            return Ok(false);
        };

        match self.library.delete(&isbn) {
            Ok(_) => writeln!(self.out, "Book deleted successfully.")?,
            Err(LibraryError::NotFound(_)) => writeln!(
                self.out,
                "Book with ISBN {} does not exist. Deletion failed.",
                isbn
            )?,
            Err(LibraryError::InvalidKey(_)) => writeln!(self.out, "{}", INVALID_ISBN)?,
            Err(err) => return Err(err.into()),
        }

        Ok(true)
    }

    fn search_book(&mut self) -> CliResult<bool> {
        let Some(isbn) = self.ask("Enter ISBN to search")? else {
            return Ok(false);
        };

        match self.library.search(&isbn) {
            Ok(Some(record)) => {
                writeln!(self.out, "Book found:")?;
                writeln!(self.out, "{}", record)?;
            }
            Ok(None) => writeln!(self.out, "Book not found.")?,
            Err(LibraryError::InvalidKey(_)) => writeln!(self.out, "{}", INVALID_ISBN)?,
            Err(err) => return Err(err.into()),
        }

        Ok(true)
    }
}
