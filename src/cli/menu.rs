//! Interactive contact menu.
//!
//! The menu reads whitespace-delimited tokens, so an option and its word may
//! arrive on one line or on separate lines. Every word is validated before
//! it reaches the trie; invalid tokens are reported and the loop continues.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::data_structures::contact_trie::alphabet::{validate_prefix, validate_word};
use crate::data_structures::{ContactTrie, Suggestions};
use crate::error::DirectoryResult;

/// A menu entry, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Store a contact name
    Insert,
    /// List names starting with a prefix
    Suggest,
    /// Look up a contact name
    Search,
    /// Remove a contact name
    Delete,
    /// Leave the menu
    Exit,
}

impl MenuOption {
    /// Parses a menu choice token (`1`-`5`).
    pub fn parse(token: &str) -> Option<Self> {
        match token.parse::<u8>().ok()? {
            1 => Some(Self::Insert),
            2 => Some(Self::Suggest),
            3 => Some(Self::Search),
            4 => Some(Self::Delete),
            5 => Some(Self::Exit),
            _ => None,
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            Self::Insert => "Type a word: ",
            Self::Suggest => "Type something: ",
            Self::Search | Self::Delete => "Type contact name: ",
            Self::Exit => "",
        }
    }
}

/// Splits a line-oriented reader into whitespace-delimited tokens.
#[derive(Debug)]
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// The interactive menu loop over a contact trie.
#[derive(Debug)]
pub struct Menu<R, W> {
    trie: ContactTrie,
    tokens: Tokens<R>,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a menu reading from `input` and rendering to `output`.
    pub fn new(trie: ContactTrie, input: R, output: W) -> Self {
        Self {
            trie,
            tokens: Tokens::new(input),
            output,
        }
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run(&mut self) -> DirectoryResult<()> {
        info!("contact menu started");

        loop {
            self.print_menu()?;

            let Some(token) = self.tokens.next_token()? else {
                break;
            };

            let option = match MenuOption::parse(&token) {
                Some(MenuOption::Exit) => {
                    writeln!(self.output, "\n\n\t**Big thanks for using this program**\n")?;
                    break;
                }
                Some(option) => option,
                None => {
                    writeln!(self.output, "\n\n\tWrong option... try again!\n")?;
                    continue;
                }
            };

            write!(self.output, "\n\n {}", option.prompt())?;
            self.output.flush()?;

            let Some(word) = self.tokens.next_token()? else {
                break;
            };
            self.dispatch(option, &word)?;
        }

        self.output.flush()?;
        info!(contacts = self.trie.len(), "contact menu finished");
        Ok(())
    }

    /// Returns the trie, with every change made through the menu.
    pub fn into_trie(self) -> ContactTrie {
        self.trie
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "\t Trie\n")?;
        writeln!(self.output, "\t.::MENU::.\n")?;
        writeln!(self.output, " [1] Insert word")?;
        writeln!(self.output, " [2] Suggestions")?;
        writeln!(self.output, " [3] Search Word")?;
        writeln!(self.output, " [4] Delete Word")?;
        writeln!(self.output, " [5] Exit")?;
        write!(self.output, "\n Choose: ")?;
        self.output.flush()
    }

    fn dispatch(&mut self, option: MenuOption, word: &str) -> DirectoryResult<()> {
        let max_length = self.trie.config().max_word_length;
        let checked = if option == MenuOption::Suggest {
            validate_prefix(word, max_length)
        } else {
            validate_word(word, max_length)
        };
        if let Err(e) = checked {
            warn!(token = word, error = %e, "rejected menu input");
            writeln!(self.output, "\n\n [Warning]-Invalid input: {e}\n")?;
            return Ok(());
        }

        // The token already passed the trie's own validation, so the `?` below only
        // forwards errors that cannot occur for a checked token.
        match option {
            MenuOption::Insert => {
                self.trie.insert(word)?;
                writeln!(self.output, "\n [Info]-contact {word} saved\n")?;
            }
            MenuOption::Suggest => match self.trie.suggest(word)? {
                Suggestions::NoMatch => {
                    writeln!(self.output, "\n\n [Warning]-No word found with this prefix\n")?;
                }
                suggestions => {
                    for suggestion in suggestions.iter() {
                        writeln!(self.output, "\n {suggestion}")?;
                    }
                    writeln!(self.output, "\n")?;
                }
            },
            MenuOption::Search => {
                if self.trie.search(word)? {
                    writeln!(self.output, "\n\n [Info]-Result: {word}\n")?;
                } else {
                    writeln!(self.output, "\n\n [Warning]-No results \n")?;
                }
            }
            MenuOption::Delete => {
                if self.trie.delete(word)? {
                    writeln!(self.output, "\n\n [Info]-Result: {word} removed\n")?;
                } else {
                    writeln!(self.output, "\n\n [Warning]-No results \n")?;
                }
            }
            MenuOption::Exit => {}
        }

        Ok(())
    }
}
