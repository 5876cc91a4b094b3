//! Command-line surface of the contact directory.
//!
//! The binary parses [`Args`] and, for the default `shell` command, hands
//! stdin/stdout to a [`Menu`].

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod menu;

pub use menu::{Menu, MenuOption};

/// Command line arguments for the contact directory.
#[derive(Parser, Debug)]
#[clap(name = "contact_trie", version, author, about)]
pub struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    pub config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive contact menu
    Shell,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_no_command() {
        let args = Args::try_parse_from(["contact_trie"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_gen_config() {
        let args =
            Args::try_parse_from(["contact_trie", "-c", "dir.toml", "gen-config", "-o", "out.toml"])
                .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("dir.toml")));
        assert_eq!(
            args.command,
            Some(Command::GenConfig {
                output: PathBuf::from("out.toml")
            })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(Args::try_parse_from(["contact_trie", "serve"]).is_err());
    }
}
