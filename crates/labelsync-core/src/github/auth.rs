// SPDX-License-Identifier: Apache-2.0

//! GitHub token resolution.
//!
//! Resolves a token through a priority chain and hands it to the caller; no
//! token is cached in process-wide state.
//!
//! 1. Environment variable (`GH_TOKEN` or `GITHUB_TOKEN`)
//! 2. `github.token` from the config file
//! 3. GitHub CLI (`gh auth token`)

use std::process::Command;

use secrecy::SecretString;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::LabelSyncError;

/// Source of the GitHub authentication token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    /// Token from `GH_TOKEN` or `GITHUB_TOKEN` environment variable.
    Environment,
    /// Token from the `github.token` config key.
    ConfigFile,
    /// Token from `gh auth token` command.
    GhCli,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Environment => write!(f, "environment variable"),
            TokenSource::ConfigFile => write!(f, "config file"),
            TokenSource::GhCli => write!(f, "GitHub CLI"),
        }
    }
}

/// Attempts to get a token from the GitHub CLI (`gh auth token`).
///
/// Returns `None` if `gh` is not installed, not authenticated, or fails.
#[instrument]
fn get_token_from_gh_cli() -> Option<SecretString> {
    debug!("Attempting to get token from gh CLI");

    let output = Command::new("gh").args(["auth", "token"]).output();

    match output {
        Ok(output) if output.status.success() => {
            let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if token.is_empty() {
                debug!("gh auth token returned empty output");
                None
            } else {
                debug!("Successfully retrieved token from gh CLI");
                Some(SecretString::from(token))
            }
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(
                status = ?output.status,
                stderr = %stderr.trim(),
                "gh auth token failed"
            );
            None
        }
        Err(e) => {
            debug!(error = %e, "Failed to execute gh command");
            None
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Resolves a GitHub token using the priority chain.
///
/// `config_token` is the `github.token` value from the loaded configuration.
///
/// Returns the token and its source, or `None` if no token is found.
#[instrument(skip(config_token))]
pub fn resolve_token(config_token: Option<&str>) -> Option<(SecretString, TokenSource)> {
    for var in ["GH_TOKEN", "GITHUB_TOKEN"] {
        if let Some(token) = non_empty_env(var) {
            debug!("Using token from {var} environment variable");
            return Some((SecretString::from(token), TokenSource::Environment));
        }
    }

    if let Some(token) = config_token.filter(|t| !t.is_empty()) {
        debug!("Using token from config file");
        return Some((SecretString::from(token.to_string()), TokenSource::ConfigFile));
    }

    if let Some(token) = get_token_from_gh_cli() {
        debug!("Using token from GitHub CLI");
        return Some((token, TokenSource::GhCli));
    }

    debug!("No token found in any source");
    None
}

/// Like [`resolve_token`], but fails when no token is available.
///
/// # Errors
///
/// Returns `LabelSyncError::NotAuthenticated` if no source yields a token.
pub fn require_token(config_token: Option<&str>) -> crate::Result<(SecretString, TokenSource)> {
    resolve_token(config_token).ok_or(LabelSyncError::NotAuthenticated)
}
