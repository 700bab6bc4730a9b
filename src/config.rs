use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, ViewError};

pub const DEFAULT_MESSAGE: &str = "No results found.";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug, Default)]
#[command(name = "queryview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with the result rows (array of arrays, or null). Use `-` for stdin
    #[arg(long)]
    pub data: Option<PathBuf>,
    /// JSON state file exposing the database metadata under `meta`
    #[arg(long)]
    pub meta: Option<PathBuf>,
    /// Message shown when there is no result set
    #[arg(long)]
    pub message: Option<String>,
    /// Print the rendered table and drawer as JSON instead of starting the TUI
    #[arg(long)]
    pub json: bool,
    /// Start with the database information drawer hidden
    #[arg(long)]
    pub no_drawer: bool,
    /// Log filter used when RUST_LOG is not set
    #[arg(long)]
    pub log_level: Option<String>,
    /// Save the effective settings as the new defaults
    #[arg(long)]
    pub save: bool,
    /// Remove the saved configuration and exit
    #[arg(long)]
    pub reset: bool,
}

/// Persisted defaults, stored as JSON in the user's config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedConfig {
    pub fallback_message: String,
    pub show_drawer: bool,
    pub log_level: String,
}

impl Default for SavedConfig {
    fn default() -> Self {
        Self {
            fallback_message: DEFAULT_MESSAGE.to_string(),
            show_drawer: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Effective settings: command line first, then saved config, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub fallback_message: String,
    pub show_drawer: bool,
    pub log_level: String,
}

impl Settings {
    pub fn resolve(cli: &Cli, saved: Option<SavedConfig>) -> Self {
        let saved = saved.unwrap_or_default();
        Self {
            fallback_message: cli.message.clone().unwrap_or(saved.fallback_message),
            show_drawer: saved.show_drawer && !cli.no_drawer,
            log_level: cli.log_level.clone().unwrap_or(saved.log_level),
        }
    }

    pub fn to_saved(&self) -> SavedConfig {
        SavedConfig {
            fallback_message: self.fallback_message.clone(),
            show_drawer: self.show_drawer,
            log_level: self.log_level.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("queryview").join("config.json"))
        .ok_or(ViewError::NoConfigDir)
}

/// Load the saved config. Missing or unreadable files count as "no config".
pub fn load_config() -> Option<SavedConfig> {
    let path = config_path().ok()?;
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Option<SavedConfig> {
    let contents = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(config) => Some(config),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring malformed config");
            None
        }
    }
}

pub fn save_config(config: &SavedConfig) -> Result<PathBuf> {
    let path = config_path()?;
    save_config_to(&path, config)?;
    Ok(path)
}

pub fn save_config_to(path: &Path, config: &SavedConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ViewError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| ViewError::Config(e.to_string()))?;
    fs::write(path, json).map_err(|e| ViewError::io(path, e))?;
    info!(path = %path.display(), "saved configuration");
    Ok(())
}

/// Remove the saved config. Returns whether a file was removed.
pub fn reset_config() -> Result<bool> {
    let path = config_path()?;
    reset_config_at(&path)
}

pub fn reset_config_at(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| ViewError::io(path, e))?;
    Ok(true)
}
