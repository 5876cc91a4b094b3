//! Tests for the configuration module.

use crate::config::{ConfigLoader, DirectoryConfig, Validate};
use crate::data_structures::contact_trie::SuggestionPolicy;
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration is valid.
#[test]
fn test_default_config_is_valid() {
    let config = DirectoryConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.trie.max_word_length, 64);
    assert_eq!(config.trie.suggestion_policy, SuggestionPolicy::Complete);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = DirectoryConfig::default();

    config.trie.max_word_length = 0;
    assert!(config.validate().is_err());

    config.trie.max_word_length = 100_000;
    assert!(config.validate().is_err());

    config.trie.max_word_length = 32;
    config.log.level = "verbose".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "directory.toml",
            r#"
            [trie]
            max_word_length = 20
            suggestion_policy = "shortest_completions"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_FILE").load().unwrap();

    assert_eq!(config.trie.max_word_length, 20);
    assert_eq!(config.trie.suggestion_policy, SuggestionPolicy::ShortestCompletions);
    assert_eq!(config.log.level, "debug");

    // Untouched values keep their defaults
    assert!(!config.log.json);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("directory.json", r#"{ "trie": { "max_word_length": 9 } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_JSON").load().unwrap();
    assert_eq!(config.trie.max_word_length, 9);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("directory_env.toml", "[trie]\nmax_word_length = 20\n")
        .unwrap();

    fixture.set_env("TEST_ENV__TRIE__MAX_WORD_LENGTH", "12");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "warn");

    let config = ConfigLoader::new(Some(&path), "TEST_ENV").load().unwrap();

    assert_eq!(config.trie.max_word_length, 12);
    assert_eq!(config.log.level, "warn");
}

/// Test the failure modes of the loader.
#[test]
fn test_load_errors() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("missing.toml");
    assert!(matches!(
        ConfigLoader::new(Some(&missing), "TEST_MISSING").load(),
        Err(ConfigError::FileNotFound(_))
    ));

    let invalid = fixture
        .create_file("invalid.toml", "[trie\nmax_word_length = ")
        .unwrap();
    assert!(ConfigLoader::new(Some(&invalid), "TEST_INVALID").load().is_err());

    let unsupported = fixture.create_file("directory.ini", "").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&unsupported), "TEST_UNSUPPORTED").load(),
        Err(ConfigError::ParseError(_))
    ));

    let out_of_range = fixture
        .create_file("zero.toml", "[trie]\nmax_word_length = 0\n")
        .unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&out_of_range), "TEST_ZERO").load(),
        Err(ConfigError::ValidationError(_))
    ));

    assert!(matches!(
        ConfigLoader::new(Some(fixture.temp_dir.path()), "TEST_DIR").load(),
        Err(ConfigError::FileReadError(_))
    ));
}

/// Test that the generated default configuration round-trips through TOML.
#[test]
fn test_default_config_toml() {
    let rendered = toml::to_string_pretty(&DirectoryConfig::default()).unwrap();
    assert!(rendered.contains("suggestion_policy = \"complete\""));

    let parsed: DirectoryConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, DirectoryConfig::default());
}
