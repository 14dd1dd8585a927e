// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for labelsync.
//!
//! Uses clap's derive API with noun-verb subcommands (`labels sync`,
//! `issues copy`).

use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Extended help text for the completion subcommand with shell-specific examples.
const COMPLETION_HELP: &str = r#"EXAMPLES

  bash
    Add to ~/.bashrc or ~/.bash_profile:
      eval "$(labelsync completion bash)"

  zsh
    Generate completion file:
      mkdir -p ~/.zsh/completions
      labelsync completion zsh > ~/.zsh/completions/_labelsync

    Add to ~/.zshrc (before compinit):
      fpath=(~/.zsh/completions $fpath)
      autoload -U compinit && compinit -i

  fish
    labelsync completion fish > ~/.config/fish/completions/labelsync.fish
"#;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners, summaries)
    pub quiet: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool) -> Self {
        Self {
            format,
            quiet,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && self.is_text()
    }

    /// Returns true for the human-readable format.
    pub fn is_text(&self) -> bool {
        matches!(self.format, OutputFormat::Text)
    }
}

/// labelsync - keep GitHub issue labels in line with a shared template.
///
/// Creates, renames and recolors labels so every repository matches the
/// template, and copies open issues between repositories.
#[derive(Parser)]
#[command(name = "labelsync")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners, summaries)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Log each applied action to stderr (info-level tracing)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Override the configured label template URL
    #[arg(long, global = true, value_name = "URL")]
    pub template_url: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Sync repository labels with the template
    #[command(subcommand)]
    Labels(LabelsCommand),

    /// Work with issues across repositories
    #[command(subcommand)]
    Issues(IssuesCommand),

    /// Print a shell completion script to stdout
    #[command(after_long_help = COMPLETION_HELP)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Label subcommands
#[derive(Subcommand)]
pub enum LabelsCommand {
    /// Create, rename and recolor labels to match the template
    Sync {
        /// Repositories in owner/name format (defaults to `labels.repos` from config)
        #[arg(value_name = "REPO")]
        repos: Vec<String>,

        /// Delete labels that are not in the template instead of recoloring them
        #[arg(long)]
        force_delete: bool,

        /// Show the planned actions without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the actions a sync would perform on one repository
    Diff {
        /// Repository in owner/name format
        repo: String,

        /// Plan deletions instead of recoloring for labels not in the template
        #[arg(long)]
        force_delete: bool,
    },

    /// Fetch and print the label template
    Template,
}

/// Issue subcommands
#[derive(Subcommand)]
pub enum IssuesCommand {
    /// Copy every open issue from one repository to another
    Copy {
        /// Source repository in owner/name format
        from: String,

        /// Target repository in owner/name format
        to: String,

        /// Close each source issue after it has been copied
        #[arg(long)]
        close: bool,
    },
}
