// SPDX-License-Identifier: Apache-2.0

//! `labels` command handlers.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use console::style;
use labelsync_core::config::config_file_path;
use labelsync_core::{
    ActionKind, AppConfig, GitHubApi, Label, LabelAction, RepoRef, fetch_template, sync_labels,
};
use tracing::debug;

use super::maybe_spinner;
use super::types::SyncResult;
use crate::cli::OutputContext;

/// Parses the repositories to sync.
///
/// Explicit arguments win; otherwise the configured `labels.repos` list is
/// used. Every entry is validated before any request is made.
pub fn resolve_repos(args: &[String], configured: &[String]) -> Result<Vec<RepoRef>> {
    let source = if args.is_empty() { configured } else { args };

    if source.is_empty() {
        bail!(
            "No repositories given. Pass owner/name arguments or set `labels.repos` in {}",
            config_file_path().display()
        );
    }

    source
        .iter()
        .map(|repo| repo.parse::<RepoRef>().map_err(anyhow::Error::from))
        .collect()
}

/// Fetches the template from the configured URL.
pub async fn load_template(ctx: &OutputContext, config: &AppConfig) -> Result<Vec<Label>> {
    let url = &config.labels.template_url;
    let timeout = Duration::from_secs(config.github.timeout_seconds);

    let spinner = maybe_spinner(ctx, "Fetching label template...");
    let result = fetch_template(url, timeout).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    let template = result.with_context(|| format!("Failed to load label template from {url}"))?;
    debug!(count = template.len(), "Loaded label template");
    Ok(template)
}

/// Prints one applied action, colored by kind.
fn print_action(action: &LabelAction, line: &str) {
    let styled = match action.kind() {
        ActionKind::Create => style(line).green(),
        ActionKind::Update => style(line).cyan(),
        ActionKind::Recolor => style(line).yellow(),
        ActionKind::Delete => style(line).red(),
    };
    println!("{styled}");
}

/// Syncs each repository in turn, stopping at the first failure.
///
/// In text mode every applied action is printed as it happens.
pub async fn run_sync(
    api: &dyn GitHubApi,
    repos: &[RepoRef],
    template: &[Label],
    force_delete: bool,
    dry_run: bool,
    ctx: &OutputContext,
) -> Result<SyncResult> {
    let stream = ctx.is_text();
    let mut reports = Vec::with_capacity(repos.len());

    for repo in repos {
        let report = sync_labels(api, repo, template, force_delete, dry_run, |action, line| {
            if stream {
                print_action(action, line);
            }
        })
        .await?;
        reports.push(report);
    }

    Ok(SyncResult::new(reports, dry_run))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn arguments_win_over_config() {
        let repos =
            resolve_repos(&strings(&["acme/web"]), &strings(&["acme/api", "acme/docs"])).unwrap();
        assert_eq!(repos, vec![RepoRef::new("acme", "web")]);
    }

    #[test]
    fn falls_back_to_configured_repos() {
        let repos = resolve_repos(&[], &strings(&["acme/api", "acme/docs"])).unwrap();
        assert_eq!(
            repos,
            vec![RepoRef::new("acme", "api"), RepoRef::new("acme", "docs")]
        );
    }

    #[test]
    fn no_repos_anywhere_is_an_error() {
        let err = resolve_repos(&[], &[]).unwrap_err();
        assert!(err.to_string().contains("No repositories given"));
    }

    #[test]
    fn one_bad_repo_rejects_the_batch() {
        let err = resolve_repos(&strings(&["acme/web", "acme"]), &[]).unwrap_err();
        assert!(err.to_string().contains("Invalid repository 'acme'"));
    }
}
