// SPDX-License-Identifier: Apache-2.0

//! In-memory [`GitHubApi`] that records every call.

use std::sync::Mutex;

use anyhow::{Result, bail};
use async_trait::async_trait;

use crate::github::{CreatedIssue, GitHubApi, NewIssue, RepoRef, SourceIssue};
use crate::label::{Label, LabelPayload};

/// One recorded API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListLabels(String),
    CreateLabel(String, LabelPayload),
    UpdateLabel(String, String, LabelPayload),
    DeleteLabel(String, String),
    ListIssues(String),
    CreateIssue(String, NewIssue),
    CloseIssue(String, u64),
}

/// Fake API serving canned labels and issues.
#[derive(Default)]
pub struct RecordingApi {
    pub labels: Vec<Label>,
    pub issues: Vec<SourceIssue>,
    /// Zero-based index of the write call that should fail.
    pub fail_on_write: Option<usize>,
    calls: Mutex<Vec<Call>>,
    writes: Mutex<usize>,
}

impl RecordingApi {
    pub fn with_labels(labels: Vec<Label>) -> Self {
        Self {
            labels,
            ..Self::default()
        }
    }

    pub fn with_issues(issues: Vec<SourceIssue>) -> Self {
        Self {
            issues,
            ..Self::default()
        }
    }

    /// Fails the `write_index`-th write call (zero-based).
    pub fn failing_on(write_index: usize) -> Self {
        Self {
            fail_on_write: Some(write_index),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn write(&self, call: Call) -> Result<()> {
        let mut writes = self.writes.lock().unwrap();
        let index = *writes;
        *writes += 1;
        if self.fail_on_write == Some(index) {
            bail!("422 Unprocessable Entity: {call:?}");
        }
        self.record(call);
        Ok(())
    }
}

#[async_trait]
impl GitHubApi for RecordingApi {
    async fn list_labels(&self, repo: &RepoRef) -> Result<Vec<Label>> {
        self.record(Call::ListLabels(repo.to_string()));
        Ok(self.labels.clone())
    }

    async fn create_label(&self, repo: &RepoRef, label: &LabelPayload) -> Result<()> {
        self.write(Call::CreateLabel(repo.to_string(), label.clone()))
    }

    async fn update_label(
        &self,
        repo: &RepoRef,
        current_name: &str,
        label: &LabelPayload,
    ) -> Result<()> {
        self.write(Call::UpdateLabel(
            repo.to_string(),
            current_name.to_string(),
            label.clone(),
        ))
    }

    async fn delete_label(&self, repo: &RepoRef, name: &str) -> Result<()> {
        self.write(Call::DeleteLabel(repo.to_string(), name.to_string()))
    }

    async fn list_open_issues(&self, repo: &RepoRef) -> Result<Vec<SourceIssue>> {
        self.record(Call::ListIssues(repo.to_string()));
        Ok(self.issues.clone())
    }

    async fn create_issue(&self, repo: &RepoRef, issue: &NewIssue) -> Result<CreatedIssue> {
        self.write(Call::CreateIssue(repo.to_string(), issue.clone()))?;
        let number = 1000 + self.calls().len() as u64;
        Ok(CreatedIssue {
            number,
            html_url: format!("https://github.com/{repo}/issues/{number}"),
        })
    }

    async fn close_issue(&self, repo: &RepoRef, number: u64) -> Result<()> {
        self.write(Call::CloseIssue(repo.to_string(), number))
    }
}
