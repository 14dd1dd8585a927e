// SPDX-License-Identifier: Apache-2.0

//! labelsync - keep GitHub issue labels in line with a shared template.
//!
//! A CLI tool that syncs repository labels against a JSON template and copies
//! open issues between repositories.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;
mod table;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use labelsync_core::config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

async fn run(cli: Cli) -> Result<()> {
    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet);

    let mut config = config::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    if let Some(url) = &cli.template_url {
        config.labels.template_url.clone_from(url);
        debug!("Overriding template URL to: {url}");
    }

    commands::run(cli.command, output_ctx, &config).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", errors::format_error(&e));
            ExitCode::FAILURE
        }
    }
}
