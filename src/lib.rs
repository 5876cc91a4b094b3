//! Contact Trie Library
//!
//! This library contains the core components of the contact directory:
//! the 26-way prefix tree, the configuration and error layers, and the
//! interactive menu used by the binary crate.
//!
//! # Architecture
//!
//! - `data_structures::contact_trie` is self-contained and knows nothing of I/O
//! - `cli` validates user tokens and renders results
//! - `config` and `error` are shared ambient layers

pub mod cli;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

use std::sync::Arc;

/// Version information for the contact directory.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization: installs the tracing error reporter and the global configuration.
pub fn init(config: config::DirectoryConfig) {
    error::set_error_reporter(Arc::new(error::TracingErrorReporter));
    config::init_global_config(config);
}
