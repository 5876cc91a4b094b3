// Copyright (c) 2025 Contact Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the contact trie.
//!
//! Absence of a word is never an error; these variants only describe input
//! that falls outside the lowercase `a`-`z` contract.

/// Errors that can occur in contact trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactTrieError {
    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a word exceeds the configured maximum length.
    #[error("Word '{word}' exceeds maximum length of {max_length}")]
    WordTooLong {
        /// The word that was too long.
        word: String,
        /// The maximum allowed length.
        max_length: usize,
    },

    /// Error when a word contains a character outside `a`-`z`.
    #[error("Invalid character {character:?} at position {position} in '{word}'")]
    InvalidCharacter {
        /// The offending word.
        word: String,
        /// The first character outside the alphabet.
        character: char,
        /// Character position of the offending character.
        position: usize,
    },
}
