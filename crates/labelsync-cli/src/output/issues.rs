// SPDX-License-Identifier: Apache-2.0

//! Rendering for `issues` command results.

use std::io::{self, Write};

use console::style;

use super::Renderable;
use crate::cli::OutputContext;
use crate::commands::types::CopyResult;

impl Renderable for CopyResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        if ctx.quiet {
            return Ok(());
        }

        let report = &self.report;
        if report.copied.is_empty() {
            writeln!(w, "No open issues to copy from {}.", report.from)?;
            return Ok(());
        }

        let mut line = format!(
            "Copied {} issue(s) from {} to {}",
            report.copied.len(),
            report.from,
            report.to
        );
        if self.close_source {
            line.push_str(" and closed the originals");
        }
        writeln!(w, "{}", style(line).bold())?;

        if report.skipped_pull_requests > 0 {
            writeln!(
                w,
                "{}",
                style(format!(
                    "Skipped {} pull request(s).",
                    report.skipped_pull_requests
                ))
                .dim()
            )?;
        }
        Ok(())
    }
}
