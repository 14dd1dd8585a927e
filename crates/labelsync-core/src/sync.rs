// SPDX-License-Identifier: Apache-2.0

//! Applying reconciled label actions to a repository.
//!
//! [`execute_actions`] performs exactly one write per action, in order, and
//! stops at the first failure. [`sync_labels`] wraps the whole
//! snapshot/reconcile/execute sequence for one repository.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::github::{GitHubApi, RepoRef};
use crate::label::Label;
use crate::reconcile::{ActionSummary, LabelAction, reconcile, summarize};

/// Outcome of syncing one repository.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Repository in `owner/name` form.
    pub repo: String,
    /// Every action decided for the repository, in execution order.
    pub actions: Vec<LabelAction>,
    /// Counts per action kind.
    pub summary: ActionSummary,
    /// Number of actions actually written (0 on a dry run).
    pub applied: usize,
    /// Whether writes were skipped.
    pub dry_run: bool,
}

/// Performs the write call for a single action.
async fn apply_action(api: &dyn GitHubApi, repo: &RepoRef, action: &LabelAction) -> Result<()> {
    match action {
        LabelAction::Create { label } => api.create_label(repo, &label.to_payload()).await,
        LabelAction::Update {
            label,
            current_name,
        } => {
            api.update_label(repo, current_name, &label.to_payload())
                .await
        }
        LabelAction::Recolor { label, color } => {
            let recolored = Label {
                color: color.clone(),
                ..label.clone()
            };
            api.update_label(repo, &label.name, &recolored.to_payload())
                .await
        }
        LabelAction::Delete { name } => api.delete_label(repo, name).await,
    }
}

/// Executes `actions` against `repo`, one write call each.
///
/// After every successful write the action's log line is emitted at info level
/// and `on_applied` is called with the action and that line. The first failing
/// write aborts the run; actions already applied are not rolled back.
///
/// Returns the number of actions applied.
///
/// # Errors
///
/// Returns the first write error, annotated with the failing action.
#[instrument(skip(api, actions, on_applied), fields(repo = %repo, actions = actions.len()))]
pub async fn execute_actions<F>(
    api: &dyn GitHubApi,
    repo: &RepoRef,
    actions: &[LabelAction],
    mut on_applied: F,
) -> Result<usize>
where
    F: FnMut(&LabelAction, &str),
{
    let repo_name = repo.to_string();

    for (index, action) in actions.iter().enumerate() {
        apply_action(api, repo, action).await.with_context(|| {
            format!(
                "Failed to {} label '{}' in {repo_name} ({} of {} actions applied)",
                action.kind(),
                action.target_name(),
                index,
                actions.len()
            )
        })?;

        let line = action.describe(&repo_name);
        info!(repo = %repo_name, action = %action.kind(), "{line}");
        on_applied(action, &line);
    }

    Ok(actions.len())
}

/// Syncs the labels of `repo` with `template`.
///
/// Takes one snapshot of the repository's labels, reconciles it against the
/// template and, unless `dry_run` is set, executes the resulting actions.
///
/// # Errors
///
/// Returns an error if the labels cannot be fetched or any write fails.
#[instrument(skip(api, template, on_applied), fields(repo = %repo))]
pub async fn sync_labels<F>(
    api: &dyn GitHubApi,
    repo: &RepoRef,
    template: &[Label],
    force_delete: bool,
    dry_run: bool,
    on_applied: F,
) -> Result<SyncReport>
where
    F: FnMut(&LabelAction, &str),
{
    let remote = api.list_labels(repo).await?;
    let actions = reconcile(template, &remote, force_delete);
    let summary = summarize(&actions);

    debug!(
        created = summary.created,
        updated = summary.updated,
        recolored = summary.recolored,
        deleted = summary.deleted,
        dry_run,
        "Planned label actions"
    );

    let applied = if dry_run {
        0
    } else {
        execute_actions(api, repo, &actions, on_applied).await?
    };

    Ok(SyncReport {
        repo: repo.to_string(),
        actions,
        summary,
        applied,
        dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LabelPayload;
    use crate::test_support::{Call, RecordingApi};

    fn repo() -> RepoRef {
        RepoRef::new("acme", "web")
    }

    fn payload(name: &str, color: &str) -> LabelPayload {
        LabelPayload {
            name: name.to_string(),
            color: color.to_string(),
            description: None,
        }
    }

    fn template() -> Vec<Label> {
        vec![Label::new("bug", "d73a4a"), Label::new("feature", "#a2eeef")]
    }

    fn remote() -> Vec<Label> {
        vec![Label::new("Bug", "ff0000"), Label::new("old", "000000")]
    }

    #[tokio::test]
    async fn sync_issues_one_write_per_action_in_order() {
        let api = RecordingApi::with_labels(remote());
        let mut lines = Vec::new();

        let report = sync_labels(&api, &repo(), &template(), false, false, |_, line| {
            lines.push(line.to_string());
        })
        .await
        .unwrap();

        assert_eq!(report.applied, 3);
        assert_eq!(
            api.calls(),
            vec![
                Call::ListLabels("acme/web".to_string()),
                Call::UpdateLabel(
                    "acme/web".to_string(),
                    "Bug".to_string(),
                    payload("bug", "d73a4a")
                ),
                Call::CreateLabel("acme/web".to_string(), payload("feature", "a2eeef")),
                Call::UpdateLabel(
                    "acme/web".to_string(),
                    "old".to_string(),
                    payload("old", "22292f")
                ),
            ]
        );
        assert_eq!(
            lines,
            vec![
                "acme/web Updating label: 'Bug' to 'bug'",
                "acme/web Creating new label: feature",
                "acme/web Setting label color to black: old",
            ]
        );
    }

    #[tokio::test]
    async fn force_delete_removes_orphans() {
        let api = RecordingApi::with_labels(remote());

        sync_labels(&api, &repo(), &template(), true, false, |_, _| {})
            .await
            .unwrap();

        assert_eq!(
            api.calls().last(),
            Some(&Call::DeleteLabel("acme/web".to_string(), "old".to_string()))
        );
    }

    #[tokio::test]
    async fn dry_run_performs_no_writes() {
        let api = RecordingApi::with_labels(remote());
        let mut applied = 0;

        let report = sync_labels(&api, &repo(), &template(), true, true, |_, _| applied += 1)
            .await
            .unwrap();

        assert_eq!(api.calls(), vec![Call::ListLabels("acme/web".to_string())]);
        assert_eq!(applied, 0);
        assert_eq!(report.applied, 0);
        assert_eq!(report.actions.len(), 3);
        assert!(report.dry_run);
    }

    #[tokio::test]
    async fn recolor_keeps_name_and_description() {
        let orphan = Label::new("wontfix", "#ffffff").with_description("Will not be worked on");
        let api = RecordingApi::with_labels(vec![orphan]);

        sync_labels(&api, &repo(), &[], false, false, |_, _| {})
            .await
            .unwrap();

        assert_eq!(
            api.calls()[1],
            Call::UpdateLabel(
                "acme/web".to_string(),
                "wontfix".to_string(),
                LabelPayload {
                    name: "wontfix".to_string(),
                    color: "22292f".to_string(),
                    description: Some("Will not be worked on".to_string()),
                }
            )
        );
    }

    #[tokio::test]
    async fn first_failure_aborts_remaining_actions() {
        let mut api = RecordingApi::failing_on(1);
        api.labels = remote();
        let mut lines = Vec::new();

        let err = sync_labels(&api, &repo(), &template(), true, false, |_, line| {
            lines.push(line.to_string());
        })
        .await
        .unwrap_err();

        // Update succeeded, create failed, delete never attempted
        assert_eq!(api.calls().len(), 2);
        assert_eq!(lines, vec!["acme/web Updating label: 'Bug' to 'bug'"]);
        let message = format!("{err:#}");
        assert!(message.contains("Failed to create label 'feature' in acme/web"));
        assert!(message.contains("1 of 3 actions applied"));
    }

    #[tokio::test]
    async fn duplicate_matches_update_each_remote_label() {
        let api = RecordingApi::with_labels(vec![
            Label::new("bug", "111111"),
            Label::new(":bug: Bug", "222222"),
        ]);

        let report = sync_labels(&api, &repo(), &[Label::new("bug", "d73a4a")], false, false, |_, _| {})
            .await
            .unwrap();

        assert_eq!(report.summary.updated, 2);
        assert_eq!(
            &api.calls()[1..],
            &[
                Call::UpdateLabel(
                    "acme/web".to_string(),
                    "bug".to_string(),
                    payload("bug", "d73a4a")
                ),
                Call::UpdateLabel(
                    "acme/web".to_string(),
                    ":bug: Bug".to_string(),
                    payload("bug", "d73a4a")
                ),
            ]
        );
    }

    #[tokio::test]
    async fn execute_with_no_actions_is_a_no_op() {
        let api = RecordingApi::default();
        let applied = execute_actions(&api, &repo(), &[], |_, _| {}).await.unwrap();
        assert_eq!(applied, 0);
        assert!(api.calls().is_empty());
    }
}
