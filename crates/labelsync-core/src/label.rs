// SPDX-License-Identifier: Apache-2.0

//! Label model shared by the template, the remote snapshot and write payloads.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Color applied to orphaned labels instead of deleting them.
pub const ORPHAN_COLOR: &str = "22292f";

/// Leading emoji shortcode such as `:bug: ` in `:bug: Bug`.
static SHORTCODE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:[\w+-]+:\s+").expect("shortcode pattern is valid"));

/// A repository label, as found in the template or on GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Display name. Matched against other labels through [`normalize_name`].
    pub name: String,
    /// Hex color, with or without a leading `#`.
    pub color: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Label {
    /// Creates a label without a description.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The color as the API expects it, without a leading `#`.
    #[must_use]
    pub fn normalized_color(&self) -> &str {
        normalize_color(&self.color)
    }

    /// Builds the request body for a create or update call.
    #[must_use]
    pub fn to_payload(&self) -> LabelPayload {
        LabelPayload {
            name: self.name.clone(),
            color: self.normalized_color().to_string(),
            description: self.description.clone(),
        }
    }
}

/// Body of `POST labels` and `PATCH labels/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelPayload {
    /// New label name.
    pub name: String,
    /// Hex color without `#`.
    pub color: String,
    /// Description, omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Normalizes a label name for identity comparison.
///
/// Strips a leading emoji shortcode followed by whitespace, trims, and
/// lower-cases, so `":bug: Bug"` and `"bug"` compare equal.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    SHORTCODE_PREFIX.replace(name, "").trim().to_lowercase()
}

/// Strips any leading `#` from a hex color.
#[must_use]
pub fn normalize_color(color: &str) -> &str {
    color.trim_start_matches('#')
}
