//! Contact Trie - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs the requested command.

use anyhow::Context;
use clap::Parser;
use contact_trie_lib::cli::{Args, Command, Menu};
use contact_trie_lib::config::{self, ConfigLoader, DirectoryConfig, LogConfig};
use contact_trie_lib::data_structures::ContactTrie;
use contact_trie_lib::error::{report_error, ErrorContext};
use std::process;
use tracing::info;

/// Initialize the logging system.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.context("Failed to set global tracing subscriber")
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = config_loader.load();

    // Logging comes up even when the configuration is broken, so the failure gets logged
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;

    match args.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let config = match loaded {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Configuration error: {}", e);
                    process::exit(1);
                }
            };

            contact_trie_lib::init(config);
            let config = config::get_global_config();
            info!(
                max_word_length = config.trie.max_word_length,
                policy = ?config.trie.suggestion_policy,
                "Starting contact directory {}",
                contact_trie_lib::VERSION
            );

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let trie = ContactTrie::with_config(config.trie.clone());
            let mut menu = Menu::new(trie, stdin.lock(), stdout.lock());

            if let Err(e) = menu.run() {
                report_error(ErrorContext::new(e, "menu").with_details("interactive session aborted"));
                process::exit(1);
            }
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            match loaded {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = DirectoryConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .context("Failed to serialize config")?;
            std::fs::write(&output, toml)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
