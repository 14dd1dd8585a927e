// SPDX-License-Identifier: Apache-2.0

//! Issue payloads for copying issues between repositories.

use serde::{Deserialize, Serialize};

/// Login of an assigned user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Assignee {
    /// GitHub login.
    pub login: String,
}

/// Label reference on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IssueLabel {
    /// Label name.
    pub name: String,
}

/// An issue as listed by `GET repos/{repo}/issues`.
///
/// Only the fields needed to recreate the issue are decoded; comments,
/// milestone, state and timestamps are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceIssue {
    /// Issue number in the source repository.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Issue body (markdown), absent for empty issues.
    #[serde(default)]
    pub body: Option<String>,
    /// Assigned users.
    #[serde(default)]
    pub assignees: Vec<Assignee>,
    /// Applied labels.
    #[serde(default)]
    pub labels: Vec<IssueLabel>,
    /// Present when the entry is actually a pull request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<serde_json::Value>,
}

impl SourceIssue {
    /// Whether the issues endpoint returned a pull request for this entry.
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Body of `POST repos/{repo}/issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssue {
    /// Issue title.
    pub title: String,
    /// Issue body; `null` when the source had none.
    pub body: Option<String>,
    /// Assignee logins.
    pub assignees: Vec<String>,
    /// Label names.
    pub labels: Vec<String>,
}

impl From<&SourceIssue> for NewIssue {
    fn from(issue: &SourceIssue) -> Self {
        Self {
            title: issue.title.clone(),
            body: issue.body.clone(),
            assignees: issue.assignees.iter().map(|a| a.login.clone()).collect(),
            labels: issue.labels.iter().map(|l| l.name.clone()).collect(),
        }
    }
}

/// The part of a created issue we report back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreatedIssue {
    /// Number assigned in the target repository.
    pub number: u64,
    /// Web URL of the new issue.
    #[serde(default)]
    pub html_url: String,
}
