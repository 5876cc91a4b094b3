//! Test modules for the contact directory.
//!
//! This module contains crate-internal tests that span more than one module:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests of the contact trie
//! - Shared fixtures and strategies

pub mod config_tests;
pub mod test_utils;

pub use test_utils::{contact_strategy, contacts_strategy, TestFixture};
