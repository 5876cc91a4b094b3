// Copyright (c) 2025 Contact Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Letter/offset mapping and input validation for the contact trie.
//!
//! Every public trie operation runs its input through [`validate_word`] or
//! [`validate_prefix`] before touching a node, so slot indices computed by
//! [`letter_index`] are always in `0..ALPHABET_SIZE`.

use super::error::ContactTrieError;
use super::ContactTrieResult;

/// Number of child slots per node, one per lowercase letter.
pub const ALPHABET_SIZE: usize = 26;

/// Maps a lowercase ASCII letter to its slot offset (`'a'` is 0).
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Maps a slot offset back to its letter.
///
/// # Panics
///
/// Panics if `index >= ALPHABET_SIZE`.
pub fn index_letter(index: usize) -> char {
    assert!(index < ALPHABET_SIZE, "slot index {index} out of range");
    (b'a' + index as u8) as char
}

/// Validates a word for insert, search or delete.
///
/// Returns the slot offsets of the word's letters in order.
pub fn validate_word(word: &str, max_length: usize) -> ContactTrieResult<Vec<usize>> {
    if word.is_empty() {
        return Err(ContactTrieError::EmptyWord);
    }
    validate_prefix(word, max_length)
}

/// Validates a suggestion prefix. Unlike [`validate_word`], the empty prefix is accepted.
pub fn validate_prefix(prefix: &str, max_length: usize) -> ContactTrieResult<Vec<usize>> {
    let mut indices = Vec::with_capacity(prefix.len());
    for (position, character) in prefix.chars().enumerate() {
        match letter_index(character) {
            Some(index) => indices.push(index),
            None => {
                return Err(ContactTrieError::InvalidCharacter {
                    word: prefix.to_string(),
                    character,
                    position,
                })
            }
        }
    }

    // All characters are ASCII at this point, so bytes == chars
    if indices.len() > max_length {
        return Err(ContactTrieError::WordTooLong {
            word: prefix.to_string(),
            max_length,
        });
    }

    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('a', Some(0) ; "first letter")]
    #[test_case('m', Some(12) ; "middle letter")]
    #[test_case('z', Some(25) ; "last letter")]
    #[test_case('A', None ; "uppercase")]
    #[test_case('`', None ; "just below a")]
    #[test_case('{', None ; "just above z")]
    #[test_case('é', None ; "non ascii")]
    fn test_letter_index(c: char, expected: Option<usize>) {
        assert_eq!(letter_index(c), expected);
    }

    #[test]
    fn test_index_letter_inverts_letter_index() {
        for index in 0..ALPHABET_SIZE {
            assert_eq!(letter_index(index_letter(index)), Some(index));
        }
    }

    #[test]
    fn test_validate_word() {
        assert_eq!(validate_word("cab", 10).unwrap(), vec![2, 0, 1]);
        assert_eq!(validate_word("", 10), Err(ContactTrieError::EmptyWord));
        assert_eq!(
            validate_word("abcd", 3),
            Err(ContactTrieError::WordTooLong {
                word: "abcd".to_string(),
                max_length: 3,
            })
        );
        assert_eq!(
            validate_word("ab1", 10),
            Err(ContactTrieError::InvalidCharacter {
                word: "ab1".to_string(),
                character: '1',
                position: 2,
            })
        );
    }

    #[test]
    fn test_validate_prefix_accepts_empty() {
        assert!(validate_prefix("", 10).unwrap().is_empty());
        assert!(validate_prefix("a b", 10).is_err());
    }
}
