// Copyright (c) 2025 Contact Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Contact Trie Implementation
//!
//! This module provides a 26-way prefix tree over lowercase ASCII names with
//! insertion, exact-match search, logical deletion and prefix suggestions.
//!
//! # Deletion policy
//!
//! Deleting a word only clears its terminal flag. No node or edge is ever
//! removed, so a deleted word leaves its path behind as dead weight until the
//! whole trie is cleared or dropped. [`ContactTrie::node_count`] reports that
//! weight.
//!
//! # Concurrency
//!
//! The trie carries no internal synchronization. Mutating operations take
//! `&mut self`; callers that need to share a trie across threads must wrap it
//! themselves, e.g. in a `parking_lot::Mutex`.

pub mod alphabet;
mod config;
mod error;
mod node;
mod suggest;

pub use config::{
    ContactTrieConfig, SuggestionPolicy, DEFAULT_MAX_WORD_LENGTH, MAX_WORD_LENGTH_LIMIT,
};
pub use error::ContactTrieError;
pub use node::TrieNode;
pub use suggest::Suggestions;

use alphabet::{validate_prefix, validate_word};
use tracing::{debug, warn};

/// Result type for contact trie operations
pub type ContactTrieResult<T> = Result<T, ContactTrieError>;

/// A prefix tree of contact names.
///
/// Key features:
/// * Fixed 26-slot children per node, visited in letter order
/// * Inputs outside `a`-`z` are rejected before any traversal
/// * Logical delete that never frees nodes
/// * Suggestions in lexicographic order of the completed suffix
#[derive(Debug, Clone)]
pub struct ContactTrie {
    /// The root node, standing for the empty prefix
    root: TrieNode,

    /// Configuration options
    config: ContactTrieConfig,
}

impl ContactTrie {
    /// Creates a new empty `ContactTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(ContactTrieConfig::default())
    }

    /// Creates a new empty `ContactTrie` with the specified configuration.
    ///
    /// `max_word_length` is clamped to `1..=MAX_WORD_LENGTH_LIMIT`, which bounds
    /// the depth of the tree and of every recursive walk over it.
    pub fn with_config(mut config: ContactTrieConfig) -> Self {
        let clamped = config.max_word_length.clamp(1, MAX_WORD_LENGTH_LIMIT);
        if clamped != config.max_word_length {
            warn!(
                requested = config.max_word_length,
                clamped, "max_word_length out of range, clamping"
            );
            config.max_word_length = clamped;
        }

        Self {
            root: TrieNode::root(),
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &ContactTrieConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a word, creating any missing nodes along its path.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was not stored before (or had been deleted).
    /// * `Ok(false)` - The word was already stored; the trie is unchanged.
    /// * `Err(ContactTrieError)` - The word is empty, too long or not `a`-`z`.
    pub fn insert(&mut self, word: &str) -> ContactTrieResult<bool> {
        let indices = validate_word(word, self.config.max_word_length)?;

        let mut node = &mut self.root;
        let mut created = 0usize;
        for index in indices {
            let (child, is_new) = node.child_or_insert(index);
            created += usize::from(is_new);
            node = child;
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;

        debug!(word, is_new, nodes_created = created, "inserted word");
        Ok(is_new)
    }

    /// Checks whether a word is currently stored.
    ///
    /// A path that exists only as the prefix of a longer word does not count.
    pub fn search(&self, word: &str) -> ContactTrieResult<bool> {
        let indices = validate_word(word, self.config.max_word_length)?;
        Ok(self.find_node(&indices).is_some_and(|node| node.is_terminal))
    }

    /// Logically deletes a word by clearing its terminal flag.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was stored and is now removed.
    /// * `Ok(false)` - The word was never stored or was already deleted.
    /// * `Err(ContactTrieError)` - The word is empty, too long or not `a`-`z`.
    pub fn delete(&mut self, word: &str) -> ContactTrieResult<bool> {
        let indices = validate_word(word, self.config.max_word_length)?;

        let removed = match self.find_node_mut(&indices) {
            Some(node) if node.is_terminal => {
                node.is_terminal = false;
                true
            }
            _ => false,
        };

        debug!(word, removed, "deleted word");
        Ok(removed)
    }

    /// Suggests stored words starting with `prefix`.
    ///
    /// The empty prefix enumerates every stored word. Which words are visited
    /// below a terminal node depends on the configured [`SuggestionPolicy`].
    pub fn suggest(&self, prefix: &str) -> ContactTrieResult<Suggestions> {
        let indices = validate_prefix(prefix, self.config.max_word_length)?;

        let result = match self.find_node(&indices) {
            Some(node) => suggest::suggest_from(node, prefix, self.config.suggestion_policy),
            None => Suggestions::NoMatch,
        };

        debug!(prefix, count = result.len(), "suggested words");
        Ok(result)
    }

    /// Checks whether any path, live or deleted, starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> ContactTrieResult<bool> {
        let indices = validate_prefix(prefix, self.config.max_word_length)?;
        Ok(self.find_node(&indices).is_some())
    }

    /// Returns every stored word in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        suggest::suggest_from(&self.root, "", SuggestionPolicy::Complete).into_vec()
    }

    /// Returns the number of stored words.
    ///
    /// This walks the whole trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.root.terminal_count()
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of allocated nodes, root and deleted paths included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Drops every node and starts over from an empty root.
    pub fn clear(&mut self) {
        self.root = TrieNode::root();
    }

    /// Walks from the root along `indices` without creating nodes.
    fn find_node(&self, indices: &[usize]) -> Option<&TrieNode> {
        indices
            .iter()
            .try_fold(&self.root, |node, &index| node.child(index))
    }

    fn find_node_mut(&mut self, indices: &[usize]) -> Option<&mut TrieNode> {
        indices
            .iter()
            .try_fold(&mut self.root, |node, &index| node.child_mut(index))
    }
}

impl Default for ContactTrie {
    fn default() -> Self {
        Self::new()
    }
}
