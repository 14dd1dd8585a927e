// SPDX-License-Identifier: Apache-2.0

//! `issues` command handlers.

use anyhow::{Result, bail};
use console::style;
use labelsync_core::{GitHubApi, RepoRef, copy_issues};

use super::types::CopyResult;
use crate::cli::OutputContext;

/// Parses and checks the source and target repositories.
pub fn parse_repos(from: &str, to: &str) -> Result<(RepoRef, RepoRef)> {
    let from: RepoRef = from.parse()?;
    let to: RepoRef = to.parse()?;
    if from == to {
        bail!("Source and target repository are the same: {from}");
    }
    Ok((from, to))
}

/// Copies open issues, printing each copy as it happens in text mode.
pub async fn run_copy(
    api: &dyn GitHubApi,
    from: &RepoRef,
    to: &RepoRef,
    close_source: bool,
    ctx: &OutputContext,
) -> Result<CopyResult> {
    let stream = ctx.is_text();

    let report = copy_issues(api, from, to, close_source, |copied| {
        if stream {
            println!(
                "{} #{} {} -> #{}",
                style("Copied").green(),
                copied.source_number,
                copied.title,
                copied.new_number
            );
        }
    })
    .await?;

    Ok(CopyResult {
        report,
        close_source,
    })
}
