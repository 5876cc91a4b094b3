//! Contact trie configuration validation.

use super::{ConfigResult, Validate};
use crate::data_structures::contact_trie::{ContactTrieConfig, MAX_WORD_LENGTH_LIMIT};
use crate::error::config::ConfigError;

impl Validate for ContactTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_word_length must be greater than 0".to_string(),
            ));
        }

        if self.max_word_length > MAX_WORD_LENGTH_LIMIT {
            return Err(ConfigError::ValidationError(format!(
                "max_word_length must not exceed {MAX_WORD_LENGTH_LIMIT}"
            )));
        }

        Ok(())
    }
}
