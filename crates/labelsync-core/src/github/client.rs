// SPDX-License-Identifier: Apache-2.0

//! Octocrab-backed implementation of [`GitHubApi`].
//!
//! All calls go through octocrab's generic route methods so the request bodies
//! are exactly the payload types defined in this crate.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, instrument};

use super::{CreatedIssue, GitHubApi, NewIssue, RepoRef, SourceIssue};
use crate::config::GitHubConfig;
use crate::label::{Label, LabelPayload};

/// Everything needed to build an authenticated API client.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// REST API base URL.
    pub api_url: String,
    /// `Accept` header for every request.
    pub accept: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// API token.
    pub token: SecretString,
}

impl ClientSettings {
    /// Builds settings from the `[github]` config section and a resolved token.
    #[must_use]
    pub fn from_config(config: &GitHubConfig, token: SecretString) -> Self {
        Self {
            api_url: config.api_url.clone(),
            accept: config.accept.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            token,
        }
    }
}

/// Page size for list calls; only the first page is read.
const PER_PAGE: u8 = 100;

#[derive(Serialize)]
struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'static str>,
    per_page: u8,
}

#[derive(Serialize)]
struct StatePatch {
    state: &'static str,
}

/// [`GitHubApi`] over an authenticated octocrab client.
#[derive(Debug, Clone)]
pub struct OctocrabApi {
    client: Octocrab,
}

impl OctocrabApi {
    /// Creates an authenticated client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the client cannot be built.
    #[instrument(skip(settings), fields(api_url = %settings.api_url))]
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let client = Octocrab::builder()
            .base_uri(settings.api_url.as_str())
            .context("Invalid GitHub API URL")?
            .personal_token(settings.token.expose_secret().to_string())
            .add_header(ACCEPT, settings.accept.clone())
            .set_connect_timeout(Some(settings.timeout))
            .set_read_timeout(Some(settings.timeout))
            .set_write_timeout(Some(settings.timeout))
            .build()
            .context("Failed to build GitHub client")?;

        debug!("Created authenticated GitHub client");
        Ok(Self { client })
    }
}

#[async_trait]
impl GitHubApi for OctocrabApi {
    #[instrument(skip(self), fields(repo = %repo))]
    async fn list_labels(&self, repo: &RepoRef) -> Result<Vec<Label>> {
        let labels: Vec<Label> = self
            .client
            .get(
                repo.route("labels"),
                Some(&ListParams {
                    state: None,
                    per_page: PER_PAGE,
                }),
            )
            .await
            .with_context(|| format!("Failed to fetch labels from {repo}"))?;

        debug!(count = labels.len(), "Fetched remote labels");
        Ok(labels)
    }

    #[instrument(skip(self, label), fields(repo = %repo, name = %label.name))]
    async fn create_label(&self, repo: &RepoRef, label: &LabelPayload) -> Result<()> {
        self.client
            .post::<_, serde_json::Value>(repo.route("labels"), Some(label))
            .await
            .with_context(|| format!("Failed to create label '{}' in {repo}", label.name))?;
        Ok(())
    }

    #[instrument(skip(self, label), fields(repo = %repo, current_name = %current_name))]
    async fn update_label(
        &self,
        repo: &RepoRef,
        current_name: &str,
        label: &LabelPayload,
    ) -> Result<()> {
        self.client
            .patch::<serde_json::Value, _, _>(repo.label_route(current_name), Some(label))
            .await
            .with_context(|| format!("Failed to update label '{current_name}' in {repo}"))?;
        Ok(())
    }

    #[instrument(skip(self), fields(repo = %repo))]
    async fn delete_label(&self, repo: &RepoRef, name: &str) -> Result<()> {
        // DELETE answers 204 with no body, so skip response decoding
        let response = self
            .client
            ._delete(repo.label_route(name), None::<&()>)
            .await
            .with_context(|| format!("Failed to delete label '{name}' in {repo}"))?;
        octocrab::map_github_error(response)
            .await
            .with_context(|| format!("Failed to delete label '{name}' in {repo}"))?;
        Ok(())
    }

    #[instrument(skip(self), fields(repo = %repo))]
    async fn list_open_issues(&self, repo: &RepoRef) -> Result<Vec<SourceIssue>> {
        let params = ListParams {
            state: Some("open"),
            per_page: PER_PAGE,
        };
        let issues: Vec<SourceIssue> = self
            .client
            .get(repo.route("issues"), Some(&params))
            .await
            .with_context(|| format!("Failed to fetch issues from {repo}"))?;

        debug!(count = issues.len(), "Fetched open issues");
        Ok(issues)
    }

    #[instrument(skip(self, issue), fields(repo = %repo, title = %issue.title))]
    async fn create_issue(&self, repo: &RepoRef, issue: &NewIssue) -> Result<CreatedIssue> {
        let created: CreatedIssue = self
            .client
            .post(repo.route("issues"), Some(issue))
            .await
            .with_context(|| format!("Failed to create issue '{}' in {repo}", issue.title))?;

        debug!(number = created.number, url = %created.html_url, "Issue created");
        Ok(created)
    }

    #[instrument(skip(self), fields(repo = %repo, number = number))]
    async fn close_issue(&self, repo: &RepoRef, number: u64) -> Result<()> {
        self.client
            .patch::<serde_json::Value, _, _>(
                repo.route(&format!("issues/{number}")),
                Some(&StatePatch { state: "closed" }),
            )
            .await
            .with_context(|| format!("Failed to close issue #{number} in {repo}"))?;
        Ok(())
    }
}
