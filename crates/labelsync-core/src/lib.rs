// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Labelsync Core
//!
//! Core library for the labelsync CLI - keep GitHub issue labels in line with
//! a shared template.
//!
//! This crate provides reusable components for:
//! - Fetching and validating a label template
//! - Reconciling template labels against a repository's labels
//! - Applying the resulting actions through the GitHub REST API
//! - Copying open issues between repositories
//! - Configuration and token resolution
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use labelsync_core::{
//!     ClientSettings, OctocrabApi, RepoRef, fetch_template, load_config, require_token,
//!     sync_labels,
//! };
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = load_config()?;
//! let (token, _source) = require_token(config.github.token.as_deref())?;
//! let api = OctocrabApi::new(&ClientSettings::from_config(&config.github, token))?;
//!
//! let template = fetch_template(&config.labels.template_url, Duration::from_secs(5)).await?;
//! let repo: RepoRef = "octocat/hello-world".parse()?;
//!
//! let report = sync_labels(&api, &repo, &template, false, false, |_, line| {
//!     println!("{line}");
//! })
//! .await?;
//! println!("{} actions applied", report.applied);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and paths
//! - [`copy`] - Copying open issues between repositories
//! - [`error`] - Error types
//! - [`github`] - GitHub API (auth, labels, issues)
//! - [`label`] - Label model and name/color normalization
//! - [`reconcile`] - Template vs. remote diffing
//! - [`sync`] - Executing label actions
//! - [`template`] - Template fetching and parsing

// ============================================================================
// Error Handling
// ============================================================================

pub use error::LabelSyncError;

/// Convenience Result type for labelsync operations.
///
/// This is equivalent to `std::result::Result<T, LabelSyncError>`.
pub type Result<T> = std::result::Result<T, LabelSyncError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, DEFAULT_TEMPLATE_URL, GitHubConfig, LabelsConfig, SYMMETRA_PREVIEW_ACCEPT,
    config_dir, config_file_path, load_config,
};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::auth::{TokenSource, require_token, resolve_token};
pub use github::{
    ClientSettings, CreatedIssue, GitHubApi, NewIssue, OctocrabApi, RepoRef, SourceIssue,
};

// ============================================================================
// Labels
// ============================================================================

pub use label::{Label, LabelPayload, ORPHAN_COLOR, normalize_color, normalize_name};
pub use reconcile::{ActionKind, ActionSummary, LabelAction, reconcile, summarize};
pub use sync::{SyncReport, execute_actions, sync_labels};
pub use template::{fetch_template, parse_template};

// ============================================================================
// Issues
// ============================================================================

pub use copy::{CopiedIssue, CopyReport, copy_issues};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod copy;
pub mod error;
pub mod github;
pub mod label;
pub mod reconcile;
pub mod sync;
pub mod template;

#[cfg(test)]
mod test_support;
