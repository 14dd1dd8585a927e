// SPDX-License-Identifier: Apache-2.0

//! Configuration management for labelsync.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `LABELSYNC_`)
//! 2. Config file: `~/.config/labelsync/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Point at a different template for one run
//! LABELSYNC_LABELS__TEMPLATE_URL=https://example.com/labels.json labelsync labels sync owner/repo
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::LabelSyncError;

/// Default label template, the shared gist the tool has always synced from.
pub const DEFAULT_TEMPLATE_URL: &str =
    "https://gist.githubusercontent.com/iforwms/fabbbe262c344cbee3cde07360e84f34/raw/labels.json";

/// Media type that unlocks label descriptions on older GitHub Enterprise servers.
pub const SYMMETRA_PREVIEW_ACCEPT: &str = "application/vnd.github.symmetra-preview+json";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// Label template settings.
    pub labels: LabelsConfig,
}

/// GitHub API settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API base URL (change for GitHub Enterprise).
    pub api_url: String,
    /// `Accept` header sent with every API request.
    pub accept: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Optional API token. Environment variables take precedence.
    pub token: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            accept: "application/vnd.github+json".to_string(),
            timeout_seconds: 5,
            token: None,
        }
    }
}

/// Label template settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// URL of the JSON label template.
    pub template_url: String,
    /// Repositories synced when `labels sync` is run without arguments.
    pub repos: Vec<String>,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            template_url: DEFAULT_TEMPLATE_URL.to_string(),
            repos: Vec::new(),
        }
    }
}

/// Returns the labelsync configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/labelsync`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("labelsync");
    }
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".config")
        .join("labelsync")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `LABELSYNC_` and double underscore
/// for nested keys (e.g., `LABELSYNC_GITHUB__TIMEOUT_SECONDS`).
///
/// # Errors
///
/// Returns `LabelSyncError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, LabelSyncError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("LABELSYNC")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("labels.repos")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
