// Copyright (c) 2025 Contact Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the contact trie.

use serde::{Deserialize, Serialize};

/// Default upper bound on word length, which also bounds enumeration depth.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 64;

/// Hard ceiling on `max_word_length`; node teardown and enumeration recurse once per letter.
pub const MAX_WORD_LENGTH_LIMIT: usize = 1024;

/// How suggestion enumeration treats a terminal node that has children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionPolicy {
    /// Emit the terminal node's word and keep descending, so every stored
    /// word under the prefix is suggested.
    #[default]
    Complete,

    /// Emit the terminal node's word and stop, so only the shortest
    /// completion along each branch is suggested.
    ShortestCompletions,
}

/// Configuration for the contact trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactTrieConfig {
    /// Maximum word (and prefix) length accepted by any operation
    pub max_word_length: usize,

    /// Enumeration rule used by `suggest`
    pub suggestion_policy: SuggestionPolicy,
}

impl ContactTrieConfig {
    /// Creates the default configuration.
    ///
    /// Default values:
    /// - max_word_length: 64
    /// - suggestion_policy: complete
    pub fn new() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            suggestion_policy: SuggestionPolicy::default(),
        }
    }

    /// Sets the maximum accepted word length.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = max_word_length;
        self
    }

    /// Sets the suggestion enumeration policy.
    pub fn with_suggestion_policy(mut self, policy: SuggestionPolicy) -> Self {
        self.suggestion_policy = policy;
        self
    }
}

impl Default for ContactTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
