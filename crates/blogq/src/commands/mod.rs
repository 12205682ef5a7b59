//! Command implementations for the blogq CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod comments;
pub mod completions;
pub mod config;
pub mod filter;
pub mod init;
pub mod parse;
pub mod posts;
pub mod show;
pub mod stats;

use std::env;
use std::path::PathBuf;

use blog_store_rs::PostStore;

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Data store error.
    #[error("store error: {0}")]
    Store(#[from] blog_store_rs::StoreError),

    /// A post or other resource does not exist.
    #[error("{resource_type} not found: {identifier}")]
    NotFound {
        /// The type of resource (e.g., "Post").
        resource_type: &'static str,
        /// The ID that was looked up.
        identifier: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input that is readable but not usable (e.g. a JSON object where an array is expected).
    #[error("invalid input: {0}")]
    Input(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// Blog data file given on the command line.
    pub data_file: Option<PathBuf>,
    /// Loaded configuration.
    pub config: Config,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and configuration.
    ///
    /// Colors are off when `--no-color` is given, when `NO_COLOR` is set, or
    /// when the config sets `output.color = false`.
    pub fn from_cli(cli: &Cli, config: Config) -> Self {
        let use_colors = !cli.no_color
            && env::var_os("NO_COLOR").is_none()
            && config.output.color.unwrap_or(true);

        Self {
            json_output: cli.json,
            use_colors,
            quiet: cli.quiet,
            verbose: cli.verbose,
            data_file: cli.data.clone(),
            config,
        }
    }

    /// Opens the blog data store.
    ///
    /// The path is resolved from `--data` (or `BLOGQ_DATA`), then the
    /// `data_file` config key, then the platform data directory.
    pub fn store(&self) -> Result<PostStore> {
        if let Some(path) = self.data_file.as_ref().or(self.config.data_file.as_ref()) {
            return Ok(PostStore::with_path(path));
        }
        Ok(PostStore::new()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_store_prefers_flag_over_config() {
        let cli = Cli::parse_from(["blogq", "--data", "/tmp/flag.json", "posts"]);
        let config = Config {
            data_file: Some(PathBuf::from("/tmp/config.json")),
            ..Config::default()
        };

        let ctx = CommandContext::from_cli(&cli, config);
        assert_eq!(ctx.store().unwrap().path(), PathBuf::from("/tmp/flag.json"));
    }

    #[test]
    fn test_store_falls_back_to_config() {
        let mut cli = Cli::parse_from(["blogq", "posts"]);
        cli.data = None;
        let config = Config {
            data_file: Some(PathBuf::from("/tmp/config.json")),
            ..Config::default()
        };

        let ctx = CommandContext::from_cli(&cli, config);
        assert_eq!(ctx.store().unwrap().path(), PathBuf::from("/tmp/config.json"));
    }

    #[test]
    fn test_config_can_disable_colors() {
        let cli = Cli::parse_from(["blogq", "posts"]);
        let mut config = Config::default();
        config.output.color = Some(false);

        let ctx = CommandContext::from_cli(&cli, config);
        assert!(!ctx.use_colors);
    }

    #[test]
    fn test_no_color_flag_disables_colors() {
        let cli = Cli::parse_from(["blogq", "--no-color", "posts"]);
        let ctx = CommandContext::from_cli(&cli, Config::default());
        assert!(!ctx.use_colors);
    }
}
