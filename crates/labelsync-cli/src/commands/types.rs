// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers and passed to the renderers.

use labelsync_core::{ActionSummary, CopyReport, Label, SyncReport};
use serde::Serialize;

/// Result of `labels sync` or `labels diff`.
#[derive(Serialize)]
pub struct SyncResult {
    /// One report per repository, in processing order.
    pub repos: Vec<SyncReport>,
    /// Action counts across all repositories.
    pub totals: ActionSummary,
    /// Whether writes were skipped.
    pub dry_run: bool,
}

impl SyncResult {
    /// Builds the result and sums the per-repository summaries.
    pub fn new(repos: Vec<SyncReport>, dry_run: bool) -> Self {
        let totals = repos
            .iter()
            .fold(ActionSummary::default(), |mut totals, report| {
                totals.created += report.summary.created;
                totals.updated += report.summary.updated;
                totals.recolored += report.summary.recolored;
                totals.deleted += report.summary.deleted;
                totals
            });
        Self {
            repos,
            totals,
            dry_run,
        }
    }
}

/// Result of `labels template`.
#[derive(Serialize)]
pub struct TemplateResult {
    /// Where the template was fetched from.
    pub url: String,
    /// Template labels in document order.
    pub labels: Vec<Label>,
}

/// Result of `issues copy`.
#[derive(Serialize)]
pub struct CopyResult {
    /// Copy outcome.
    #[serde(flatten)]
    pub report: CopyReport,
    /// Whether source issues were closed.
    pub close_source: bool,
}
