//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/tdv/config.toml.

use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};
use crate::cli::ConfigCommands;

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Minimum token length to apply masking (show first and last N characters).
const TOKEN_MASK_MIN_LENGTH: usize = 8;

/// Number of characters to show at start/end of a masked token.
const TOKEN_MASK_VISIBLE_CHARS: usize = 4;

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# tdv - Todoist note-view configuration

# Config schema version (do not modify)
version = 1

# API token (can also use TODOIST_TOKEN env var)
# token = "your-api-token-here"

# Directive applied when a query block is empty
# default_query = "filter: today | overdue"
"#;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// API token (optional, can use env var instead).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Directive substituted when a parsed query is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_query: Option<String>,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            token: None,
            default_query: None,
        }
    }
}

/// Returns the config file path (~/.config/tdv/config.toml).
pub fn config_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new()
        .ok_or_else(|| CommandError::Config("could not determine home directory".to_string()))?;
    Ok(base_dirs.home_dir().join(".config").join("tdv").join("config.toml"))
}

/// Loads the config file, returning defaults if it does not exist.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    load_config_from(&path)
}

/// Loads a config file from an explicit path.
pub fn load_config_from(path: &PathBuf) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| CommandError::Config(format!("invalid config: {e}")))
}

/// Masks a token for display, keeping a few characters at each end.
fn mask_token(token: &str) -> String {
    if token.len() < TOKEN_MASK_MIN_LENGTH {
        return "****".to_string();
    }
    format!(
        "{}...{}",
        &token[..TOKEN_MASK_VISIBLE_CHARS],
        &token[token.len() - TOKEN_MASK_VISIBLE_CHARS..]
    )
}

/// Executes the config command.
pub fn execute(ctx: &CommandContext, command: Option<&ConfigCommands>) -> Result<()> {
    match command.unwrap_or(&ConfigCommands::Show) {
        ConfigCommands::Show => show(ctx),
        ConfigCommands::Path => {
            println!("{}", config_path()?.display());
            Ok(())
        }
        ConfigCommands::Init => init(ctx),
    }
}

fn show(ctx: &CommandContext) -> Result<()> {
    let path = config_path()?;
    let config = load_config()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "version": config.version,
            "token": config.token.as_deref().map(mask_token),
            "default_query": config.default_query,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !ctx.quiet {
        println!("Config file: {}", path.display());
        match &config.token {
            Some(token) => println!("Token: {}", mask_token(token)),
            None => println!("Token: (not set)"),
        }
        match &config.default_query {
            Some(query) => println!("Default query: {query}"),
            None => println!("Default query: (not set)"),
        }
    }
    Ok(())
}

fn init(ctx: &CommandContext) -> Result<()> {
    let path = config_path()?;
    if path.exists() {
        return Err(CommandError::Config(format!(
            "config file already exists at {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, DEFAULT_CONFIG)?;

    if !ctx.quiet {
        println!("Created {}", path.display());
    }
    Ok(())
}
