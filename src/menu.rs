//! The interactive menu loop. It owns all console I/O and turns [`TreeError`]s into messages;
//! the tree itself never prints anything.
//!
//! A menu choice that isn't a number ends the loop with "Error: Invalid input. Exiting.", but
//! running out of input (EOF, e.g. the end of a piped script) ends it without a message.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use bst_engine::{Tree, TreeError};
use tracing::{debug, info};

/// One entry of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Insert,
    Search,
    Delete,
    Display,
    Exit,
}

impl Choice {
    fn from_number(n: i64) -> Option<Self> {
        Some(match n {
            1 => Self::Insert,
            2 => Self::Search,
            3 => Self::Delete,
            4 => Self::Display,
            5 => Self::Exit,
            _ => return None,
        })
    }

    fn prompt(self) -> &'static str {
        match self {
            Self::Insert => "Enter value to insert: ",
            Self::Search => "Enter value to search: ",
            Self::Delete => "Enter value to delete: ",
            Self::Display | Self::Exit => "",
        }
    }
}

const BANNER: &str = "\n--- Binary Search Tree Menu ---\n\
                      1. Insert\n2. Search\n3. Delete\n4. Display (In-order)\n5. Exit\n\
                      Enter choice: ";

/// Reads menu choices and values line by line and writes one result line per operation.
pub struct Menu<R, W> {
    input: R,
    output: W,
    quiet: bool,
}

impl<R, W> Menu<R, W>
where
    R: BufRead,
    W: Write,
{
    /// With `quiet` set the banner and prompts are not written, only results.
    pub fn new(input: R, output: W, quiet: bool) -> Self {
        Self {
            input,
            output,
            quiet,
        }
    }

    /// Drives `tree` until the user picks "Exit", enters something that isn't a number as a
    /// menu choice, or the input runs out. Only I/O failures are errors.
    pub fn run(&mut self, tree: &mut Tree<i64>) -> Result<()> {
        loop {
            self.prompt(BANNER)?;
            let Some(line) = self.read_line()? else {
                debug!("input closed at the menu");
                return Ok(());
            };
            let choice = match line.parse::<i64>() {
                Ok(n) => Choice::from_number(n),
                Err(_) => {
                    writeln!(self.output, "Error: Invalid input. Exiting.")?;
                    return Ok(());
                }
            };
            let Some(choice) = choice else {
                writeln!(self.output, "Error: Invalid choice.")?;
                continue;
            };

            match choice {
                Choice::Exit => {
                    writeln!(self.output, "Exiting...")?;
                    info!(keys = tree.len(), "menu exited");
                    return Ok(());
                }
                Choice::Display => self.display(tree)?,
                Choice::Insert | Choice::Search | Choice::Delete => {
                    self.prompt(choice.prompt())?;
                    let Some(line) = self.read_line()? else {
                        debug!("input closed at a value prompt");
                        return Ok(());
                    };
                    match line.parse::<i64>() {
                        Ok(value) => self.apply(tree, choice, value)?,
                        Err(_) => writeln!(self.output, "Error: Invalid integer.")?,
                    }
                }
            }
        }
    }

    fn apply(&mut self, tree: &mut Tree<i64>, choice: Choice, value: i64) -> Result<()> {
        let out = &mut self.output;
        match choice {
            Choice::Insert => match tree.insert(value) {
                Ok(()) => writeln!(out, "Value {} inserted.", value)?,
                Err(TreeError::DuplicateKey(_)) => {
                    writeln!(out, "Warning: Duplicate value {} ignored.", value)?
                }
                Err(e) => writeln!(out, "Error: {}.", e)?,
            },
            Choice::Search => match tree.search(&value) {
                Ok(_) => writeln!(out, "Value {} found in BST.", value)?,
                Err(_) => writeln!(out, "Value {} not found.", value)?,
            },
            Choice::Delete => match tree.delete(&value) {
                Ok(_) => writeln!(out, "Value {} deleted.", value)?,
                Err(_) => writeln!(out, "Error: Cannot delete {} (not found).", value)?,
            },
            Choice::Display | Choice::Exit => {}
        }
        Ok(())
    }

    fn display(&mut self, tree: &Tree<i64>) -> Result<()> {
        if tree.is_empty() {
            writeln!(self.output, "BST is empty.")?;
        } else {
            writeln!(self.output, "In-order traversal: {}", tree)?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        if !self.quiet && !text.is_empty() {
            self.output.write_all(text.as_bytes())?;
            self.output.flush().context("failed to flush prompt")?;
        }
        Ok(())
    }

    /// Reads the next line, trimmed. `None` means the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        Ok((read > 0).then(|| line.trim().to_string()))
    }
}
