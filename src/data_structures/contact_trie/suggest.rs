// Copyright (c) 2025 Contact Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix suggestion enumeration.
//!
//! Enumeration is a depth-first walk below the node reached by the prefix. The
//! walk owns a single buffer holding the word spelled so far: a letter is pushed
//! before descending into a child and popped on the way back, so siblings never
//! see each other's extensions.

use super::config::SuggestionPolicy;
use super::node::TrieNode;

/// Outcome of a suggestion query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions {
    /// No stored word starts with the prefix.
    NoMatch,

    /// The prefix is itself a stored word and nothing extends it.
    Exact(String),

    /// Stored words under the prefix, in ascending order of the appended suffix.
    Completions(Vec<String>),
}

impl Suggestions {
    /// Returns `true` for [`Suggestions::NoMatch`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Suggestions::NoMatch)
    }

    /// Number of suggested words.
    pub fn len(&self) -> usize {
        match self {
            Suggestions::NoMatch => 0,
            Suggestions::Exact(_) => 1,
            Suggestions::Completions(words) => words.len(),
        }
    }

    /// Iterates over the suggested words in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let slice: &[String] = match self {
            Suggestions::NoMatch => &[],
            Suggestions::Exact(word) => std::slice::from_ref(word),
            Suggestions::Completions(words) => words.as_slice(),
        };
        slice.iter().map(String::as_str)
    }

    /// Consumes the result into a plain list of words.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Suggestions::NoMatch => Vec::new(),
            Suggestions::Exact(word) => vec![word],
            Suggestions::Completions(words) => words,
        }
    }
}

impl IntoIterator for Suggestions {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Classifies the node reached by `prefix` and enumerates the words below it.
pub(crate) fn suggest_from(node: &TrieNode, prefix: &str, policy: SuggestionPolicy) -> Suggestions {
    if node.is_leaf() {
        // A childless node left non-terminal by a logical delete has nothing to offer
        return if node.is_terminal {
            Suggestions::Exact(prefix.to_string())
        } else {
            Suggestions::NoMatch
        };
    }

    let mut buffer = String::with_capacity(prefix.len() + 16);
    buffer.push_str(prefix);

    let mut words = Vec::new();
    collect(node, &mut buffer, policy, &mut words);

    if words.is_empty() {
        Suggestions::NoMatch
    } else {
        Suggestions::Completions(words)
    }
}

/// Depth-first collection of terminal nodes below `node`.
fn collect(node: &TrieNode, buffer: &mut String, policy: SuggestionPolicy, words: &mut Vec<String>) {
    if node.is_terminal {
        words.push(buffer.clone());
        if policy == SuggestionPolicy::ShortestCompletions {
            return;
        }
    }

    for child in node.children() {
        buffer.push(child.label());
        collect(child, buffer, policy, words);
        buffer.pop();
    }
}
