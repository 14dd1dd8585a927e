// SPDX-License-Identifier: Apache-2.0

//! Error types for labelsync.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during labelsync operations.
#[derive(Error, Debug)]
pub enum LabelSyncError {
    /// GitHub API error from octocrab.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
    },

    /// No GitHub token could be resolved.
    #[error(
        "Authentication required - set GH_TOKEN or GITHUB_TOKEN, add `github.token` to the config file, or log in with `gh auth login`"
    )]
    NotAuthenticated,

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// The template document could not be fetched.
    #[error("Failed to fetch label template from {url} (HTTP {status})")]
    Template {
        /// Template URL.
        url: String,
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The template document is not a JSON array of labels.
    #[error("Invalid label template")]
    InvalidTemplate(#[source] serde_json::Error),

    /// A template entry is unusable (e.g. empty name).
    #[error("Invalid label template entry at index {index}: {reason}")]
    InvalidTemplateEntry {
        /// Position of the entry in the template.
        index: usize,
        /// Why the entry was rejected.
        reason: String,
    },

    /// Repository identifier is not in `owner/name` form.
    #[error("Invalid repository '{input}' - expected owner/name")]
    InvalidRepo {
        /// The rejected input.
        input: String,
    },

    /// Network/HTTP error from reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl From<octocrab::Error> for LabelSyncError {
    fn from(err: octocrab::Error) -> Self {
        LabelSyncError::GitHub {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for LabelSyncError {
    fn from(err: config::ConfigError) -> Self {
        LabelSyncError::Config {
            message: err.to_string(),
        }
    }
}
