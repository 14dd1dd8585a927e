// SPDX-License-Identifier: Apache-2.0

//! Rendering for `labels` command results.

use std::io::{self, Write};

use console::style;
use labelsync_core::ActionSummary;

use super::Renderable;
use crate::cli::OutputContext;
use crate::commands::types::{SyncResult, TemplateResult};
use crate::table::TablePrinter;

fn summary_line(summary: &ActionSummary) -> String {
    format!(
        "{} updated, {} created, {} recolored, {} deleted",
        summary.updated, summary.created, summary.recolored, summary.deleted
    )
}

impl Renderable for SyncResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        // Applied actions were already streamed; a dry run lists the plan here
        if self.dry_run {
            for report in &self.repos {
                for action in &report.actions {
                    writeln!(w, "{}", action.describe(&report.repo))?;
                }
            }
        }

        if ctx.quiet {
            return Ok(());
        }

        for report in &self.repos {
            writeln!(
                w,
                "{} {}",
                style(format!("{}:", report.repo)).bold(),
                summary_line(&report.summary)
            )?;
        }

        if self.repos.len() > 1 {
            writeln!(w, "{} {}", style("Total:").bold(), summary_line(&self.totals))?;
        }

        if self.dry_run {
            writeln!(w, "{}", style("Dry run - no changes were made.").dim())?;
        }

        Ok(())
    }
}

impl Renderable for TemplateResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        let mut table = TablePrinter::new(3);
        table.add_row(&["NAME", "COLOR", "DESCRIPTION"]);
        for label in &self.labels {
            table.add_row(&[
                label.name.as_str(),
                label.normalized_color(),
                label.description.as_deref().unwrap_or(""),
            ]);
        }
        write!(w, "{}", table.render())?;

        if !ctx.quiet {
            writeln!(
                w,
                "{}",
                style(format!("{} labels from {}", self.labels.len(), self.url)).dim()
            )?;
        }
        Ok(())
    }
}
