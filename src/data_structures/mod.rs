//! Data structures for the contact directory.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Explicit, typed errors for malformed input
//! - Single ownership of every node

pub mod contact_trie;

// Re-export common data structures
pub use contact_trie::{ContactTrie, ContactTrieError, ContactTrieResult, Suggestions};
