// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the labelsync CLI.

pub mod completion;
pub mod issues;
pub mod labels;
pub mod types;

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use labelsync_core::{AppConfig, ClientSettings, OctocrabApi, require_token};
use tracing::debug;

use crate::cli::{Commands, IssuesCommand, LabelsCommand, OutputContext};
use crate::output;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Resolves a token and builds the authenticated API client.
fn github_client(config: &AppConfig) -> Result<OctocrabApi> {
    let (token, source) = require_token(config.github.token.as_deref())?;
    debug!(%source, "Resolved GitHub token");
    OctocrabApi::new(&ClientSettings::from_config(&config.github, token))
}

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, ctx: OutputContext, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Labels(labels_cmd) => match labels_cmd {
            LabelsCommand::Sync {
                repos,
                force_delete,
                dry_run,
            } => {
                let repos = labels::resolve_repos(&repos, &config.labels.repos)?;
                let template = labels::load_template(&ctx, config).await?;
                let api = github_client(config)?;
                let result =
                    labels::run_sync(&api, &repos, &template, force_delete, dry_run, &ctx).await?;
                output::render(&result, &ctx)
            }
            LabelsCommand::Diff { repo, force_delete } => {
                let repos = labels::resolve_repos(&[repo], &[])?;
                let template = labels::load_template(&ctx, config).await?;
                let api = github_client(config)?;
                let result =
                    labels::run_sync(&api, &repos, &template, force_delete, true, &ctx).await?;
                output::render(&result, &ctx)
            }
            LabelsCommand::Template => {
                let labels = labels::load_template(&ctx, config).await?;
                let result = types::TemplateResult {
                    url: config.labels.template_url.clone(),
                    labels,
                };
                output::render(&result, &ctx)
            }
        },

        Commands::Issues(issues_cmd) => match issues_cmd {
            IssuesCommand::Copy { from, to, close } => {
                let (from, to) = issues::parse_repos(&from, &to)?;
                let api = github_client(config)?;
                let result = issues::run_copy(&api, &from, &to, close, &ctx).await?;
                output::render(&result, &ctx)
            }
        },

        Commands::Completion { shell } => {
            completion::run_generate(shell);
            Ok(())
        }
    }
}
