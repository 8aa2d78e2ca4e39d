//! Command implementations for the tdv CLI.

pub mod add;
pub mod completions;
pub mod config;
pub mod done;
pub mod projects;
pub mod query;
pub mod render;
pub mod reopen;
pub mod sections;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// API/transport error from the sync client.
    #[error("API error: {0}")]
    Api(#[from] todoist_sync_rs::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

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
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// Resolves the API token: CLI flag / env var first, then the config file.
pub fn resolve_token(cli: &Cli) -> Result<String> {
    if let Some(token) = &cli.token {
        return Ok(token.clone());
    }

    let config = config::load_config()?;
    config.token.ok_or_else(|| {
        CommandError::Config(
            "no API token configured; set TODOIST_TOKEN or add one with `tdv config init`"
                .to_string(),
        )
    })
}
