// Copyright (c) 2025 Contact Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the contact trie.
//!
//! Each node owns its children outright through `Box`, so the tree is a strict
//! out-tree: no shared children, no back references. Nodes are only ever created
//! by insertion and are dropped together with their parent.

use super::alphabet::{index_letter, ALPHABET_SIZE};

/// Label carried by the root node, which stands for the empty prefix.
pub const ROOT_LABEL: char = ' ';

/// A node in the contact trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// One slot per letter, indexed by `c - 'a'`
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether the path from the root to this node spells a stored word
    pub is_terminal: bool,

    /// Letter on the incoming edge
    label: char,
}

impl TrieNode {
    /// Creates a new childless, non-terminal node for the given edge label.
    pub fn new(label: char) -> Self {
        Self {
            children: Default::default(),
            is_terminal: false,
            label,
        }
    }

    /// Creates a root node.
    pub fn root() -> Self {
        Self::new(ROOT_LABEL)
    }

    /// Letter on this node's incoming edge.
    pub fn label(&self) -> char {
        self.label
    }

    /// A node is a leaf when none of its slots is populated, whatever its terminal flag.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Returns the child in slot `index`, if any.
    pub fn child(&self, index: usize) -> Option<&TrieNode> {
        self.children[index].as_deref()
    }

    /// Returns the child in slot `index` mutably, if any.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut TrieNode> {
        self.children[index].as_deref_mut()
    }

    /// Returns the child in slot `index`, creating it first if the slot is empty.
    ///
    /// The second element is `true` when a node was created.
    pub fn child_or_insert(&mut self, index: usize) -> (&mut TrieNode, bool) {
        let slot = &mut self.children[index];
        let created = slot.is_none();
        if created {
            tracing::trace!(letter = %index_letter(index), "creating trie node");
        }
        let child: &mut TrieNode =
            slot.get_or_insert_with(|| Box::new(TrieNode::new(index_letter(index))));
        (child, created)
    }

    /// Iterates over populated slots in ascending letter order.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> + '_ {
        self.children.iter().filter_map(|slot| slot.as_deref())
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn subtree_size(&self) -> usize {
        1 + self.children().map(TrieNode::subtree_size).sum::<usize>()
    }

    /// Number of terminal nodes in the subtree rooted here.
    pub fn terminal_count(&self) -> usize {
        usize::from(self.is_terminal)
            + self.children().map(TrieNode::terminal_count).sum::<usize>()
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::root()
    }
}
