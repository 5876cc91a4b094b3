//! Test utilities and fixtures for the contact directory.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use tempfile::TempDir;

use crate::data_structures::ContactTrie;

/// Maximum length of a generated contact name.
const MAX_CONTACT_LENGTH: usize = 12;

/// Maximum number of contacts in a generated directory.
const MAX_CONTACTS: usize = 40;

/// Generate a strategy for valid contact names.
///
/// Names are drawn from a small alphabet so that generated sets share prefixes often.
pub fn contact_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex(&format!("[a-e]{{1,{MAX_CONTACT_LENGTH}}}"))
        .expect("valid regex")
        .boxed()
}

/// Generate a strategy for a list of contact names, duplicates allowed.
pub fn contacts_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(contact_strategy(), 0..MAX_CONTACTS).boxed()
}

/// Build a trie from a list of names.
pub fn trie_from<S: AsRef<str>>(words: &[S]) -> ContactTrie {
    let mut trie = ContactTrie::new();
    for word in words {
        trie.insert(word.as_ref()).expect("valid contact name");
    }
    trie
}

/// Test fixture for tests that write configuration files and set environment variables.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write a file with the given name into the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
