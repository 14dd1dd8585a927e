// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Defines the [`GitHubApi`] capability the sync and copy operations write
//! through, its octocrab-backed implementation, and token resolution.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use async_trait::async_trait;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;

use crate::error::LabelSyncError;
use crate::label::{Label, LabelPayload};

pub mod auth;
pub mod client;
pub mod issues;

pub use client::{ClientSettings, OctocrabApi};
pub use issues::{CreatedIssue, NewIssue, SourceIssue};

/// Characters escaped when a label name is used as a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A repository identified by `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub name: String,
}

impl RepoRef {
    /// Creates a repository reference from its parts.
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// REST route for this repository with `path` appended.
    #[must_use]
    pub fn route(&self, path: &str) -> String {
        format!("/repos/{}/{}/{path}", self.owner, self.name)
    }

    /// REST route for a single label, with the name percent-encoded.
    #[must_use]
    pub fn label_route(&self, label_name: &str) -> String {
        self.route(&format!(
            "labels/{}",
            utf8_percent_encode(label_name, PATH_SEGMENT)
        ))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = LabelSyncError;

    /// Parses `owner/name`: exactly one `/`, non-empty parts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parts = trimmed.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self::new(owner, name))
            }
            _ => Err(LabelSyncError::InvalidRepo {
                input: s.to_string(),
            }),
        }
    }
}

/// Write and read operations against the hosting API.
///
/// Every method performs exactly one HTTP request. Implementations must not
/// retry; a failure is returned to the caller, which aborts the run.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// `GET repos/{repo}/labels`
    async fn list_labels(&self, repo: &RepoRef) -> Result<Vec<Label>>;

    /// `POST repos/{repo}/labels`
    async fn create_label(&self, repo: &RepoRef, label: &LabelPayload) -> Result<()>;

    /// `PATCH repos/{repo}/labels/{current_name}`
    async fn update_label(
        &self,
        repo: &RepoRef,
        current_name: &str,
        label: &LabelPayload,
    ) -> Result<()>;

    /// `DELETE repos/{repo}/labels/{name}`
    async fn delete_label(&self, repo: &RepoRef, name: &str) -> Result<()>;

    /// `GET repos/{repo}/issues?state=open` (single page)
    async fn list_open_issues(&self, repo: &RepoRef) -> Result<Vec<SourceIssue>>;

    /// `POST repos/{repo}/issues`
    async fn create_issue(&self, repo: &RepoRef, issue: &NewIssue) -> Result<CreatedIssue>;

    /// `PATCH repos/{repo}/issues/{number}` with `{"state": "closed"}`
    async fn close_issue(&self, repo: &RepoRef, number: u64) -> Result<()>;
}
