// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `LabelSyncError` and appends a hint for the
//! error kinds a user can act on. The library keeps the structured data; the
//! CLI owns the presentation.

use anyhow::Error;
use labelsync_core::LabelSyncError;
use labelsync_core::config::config_file_path;

/// Formats an error for CLI display with helpful hints.
///
/// The full context chain is always shown. When a [`LabelSyncError`] is found
/// anywhere in the chain, a "Tip:" line is appended.
pub fn format_error(error: &Error) -> String {
    let message = format!("{error:#}");

    match error.downcast_ref::<LabelSyncError>().and_then(hint) {
        Some(tip) => format!("{message}\n\nTip: {tip}"),
        None => message,
    }
}

/// Returns the hint for an error kind, if there is one.
fn hint(error: &LabelSyncError) -> Option<String> {
    match error {
        LabelSyncError::NotAuthenticated => {
            Some("Create a token at https://github.com/settings/tokens and export GH_TOKEN.".to_string())
        }
        LabelSyncError::Config { .. } => Some(format!(
            "Check your config file at {}",
            config_file_path().display()
        )),
        LabelSyncError::Template { .. } => Some(format!(
            "Check `labels.template_url` in {} or pass --template-url.",
            config_file_path().display()
        )),
        LabelSyncError::InvalidTemplate(_) | LabelSyncError::InvalidTemplateEntry { .. } => Some(
            "The template must be a JSON array of {\"name\", \"color\", \"description\"} objects."
                .to_string(),
        ),
        LabelSyncError::InvalidRepo { .. } => {
            Some("Repositories are written as owner/name, e.g. octocat/hello-world.".to_string())
        }
        LabelSyncError::Network(_) => {
            Some("Check your internet connection and try again.".to_string())
        }
        LabelSyncError::GitHub { .. } => {
            Some("Check that your token has write access to the repository.".to_string())
        }
    }
}
