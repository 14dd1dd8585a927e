// SPDX-License-Identifier: Apache-2.0

//! Copying open issues from one repository to another.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::github::{GitHubApi, NewIssue, RepoRef};

/// One issue recreated in the target repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedIssue {
    /// Issue number in the source repository.
    pub source_number: u64,
    /// Issue title.
    pub title: String,
    /// Number of the new issue in the target repository.
    pub new_number: u64,
    /// URL of the new issue.
    pub new_url: String,
    /// Whether the source issue was closed after copying.
    pub closed: bool,
}

/// Outcome of copying issues between two repositories.
#[derive(Debug, Clone, Serialize)]
pub struct CopyReport {
    /// Source repository.
    pub from: String,
    /// Target repository.
    pub to: String,
    /// Issues copied, in source order.
    pub copied: Vec<CopiedIssue>,
    /// Pull requests listed by the issues endpoint and left alone.
    pub skipped_pull_requests: usize,
}

/// Copies every open issue of `from` into `to`.
///
/// Only title, body, assignees and labels are carried over. When
/// `close_source` is set, each source issue is closed right after its copy
/// was created. There is no duplicate detection: running twice copies twice.
///
/// `on_copied` is called after each issue has been fully handled.
///
/// # Errors
///
/// Returns the first API error; issues handled before it stay copied.
#[instrument(skip(api, on_copied), fields(from = %from, to = %to))]
pub async fn copy_issues<F>(
    api: &dyn GitHubApi,
    from: &RepoRef,
    to: &RepoRef,
    close_source: bool,
    mut on_copied: F,
) -> Result<CopyReport>
where
    F: FnMut(&CopiedIssue),
{
    let issues = api.list_open_issues(from).await?;
    let total = issues.len();

    let mut copied = Vec::new();
    let mut skipped_pull_requests = 0;

    for issue in &issues {
        if issue.is_pull_request() {
            debug!(number = issue.number, "Skipping pull request");
            skipped_pull_requests += 1;
            continue;
        }

        info!("Copying issue from '{from}' to '{to}': {}", issue.title);
        let created = api
            .create_issue(to, &NewIssue::from(issue))
            .await
            .with_context(|| format!("Failed to copy issue #{} from {from}", issue.number))?;

        if close_source {
            info!("{from} Closing issue: {}", issue.title);
            api.close_issue(from, issue.number).await?;
        }

        let entry = CopiedIssue {
            source_number: issue.number,
            title: issue.title.clone(),
            new_number: created.number,
            new_url: created.html_url,
            closed: close_source,
        };
        on_copied(&entry);
        copied.push(entry);
    }

    debug!(
        total,
        copied = copied.len(),
        skipped_pull_requests,
        "Issue copy complete"
    );

    Ok(CopyReport {
        from: from.to_string(),
        to: to.to_string(),
        copied,
        skipped_pull_requests,
    })
}
