// SPDX-License-Identifier: Apache-2.0

//! Label reconciliation.
//!
//! Compares a template against a snapshot of a repository's labels and decides,
//! per label, what write is needed to bring the repository in line:
//!
//! 1. Every template label is matched against the remote labels by normalized
//!    name. Each match becomes an [`LabelAction::Update`] addressed by the
//!    remote label's current name (so renames work); no match becomes a
//!    [`LabelAction::Create`].
//! 2. Every remote label without a template counterpart is orphaned. It is
//!    deleted when `force_delete` is set, otherwise recolored to
//!    [`ORPHAN_COLOR`] so it stands out without losing issue associations.
//!
//! Updates are unconditional: a repository already matching the template still
//! yields one update per label. Several remote labels normalizing to the same
//! template name each get their own update.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::label::{Label, ORPHAN_COLOR, normalize_name};

/// A single write decided by [`reconcile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LabelAction {
    /// Create a template label missing from the repository.
    Create {
        /// Label to create.
        label: Label,
    },
    /// Rename and overwrite an existing label with the template's values.
    Update {
        /// Template label supplying the new name, color and description.
        label: Label,
        /// Name the label currently has in the repository.
        current_name: String,
    },
    /// Recolor an orphaned label.
    Recolor {
        /// The remote label as fetched.
        label: Label,
        /// Replacement color.
        color: String,
    },
    /// Delete an orphaned label.
    Delete {
        /// Name of the label to delete.
        name: String,
    },
}

impl LabelAction {
    /// Short verb for this kind of action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            LabelAction::Create { .. } => ActionKind::Create,
            LabelAction::Update { .. } => ActionKind::Update,
            LabelAction::Recolor { .. } => ActionKind::Recolor,
            LabelAction::Delete { .. } => ActionKind::Delete,
        }
    }

    /// Name of the label in the repository before the action is applied.
    #[must_use]
    pub fn target_name(&self) -> &str {
        match self {
            LabelAction::Create { label } | LabelAction::Recolor { label, .. } => &label.name,
            LabelAction::Update { current_name, .. } => current_name,
            LabelAction::Delete { name } => name,
        }
    }

    /// Human-readable log line for this action applied to `repo`.
    #[must_use]
    pub fn describe(&self, repo: &str) -> String {
        match self {
            LabelAction::Create { label } => {
                format!("{repo} Creating new label: {}", label.name)
            }
            LabelAction::Update {
                label,
                current_name,
            } => format!("{repo} Updating label: '{current_name}' to '{}'", label.name),
            LabelAction::Recolor { label, .. } => {
                format!("{repo} Setting label color to black: {}", label.name)
            }
            LabelAction::Delete { name } => format!("{repo} Deleting label: {name}"),
        }
    }
}

/// Discriminant of a [`LabelAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// See [`LabelAction::Create`].
    Create,
    /// See [`LabelAction::Update`].
    Update,
    /// See [`LabelAction::Recolor`].
    Recolor,
    /// See [`LabelAction::Delete`].
    Delete,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Create => write!(f, "create"),
            ActionKind::Update => write!(f, "update"),
            ActionKind::Recolor => write!(f, "recolor"),
            ActionKind::Delete => write!(f, "delete"),
        }
    }
}

/// Per-kind action counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActionSummary {
    /// Labels created.
    pub created: usize,
    /// Labels renamed or updated.
    pub updated: usize,
    /// Orphaned labels recolored.
    pub recolored: usize,
    /// Orphaned labels deleted.
    pub deleted: usize,
}

impl ActionSummary {
    /// Total number of actions.
    #[must_use]
    pub fn total(&self) -> usize {
        self.created + self.updated + self.recolored + self.deleted
    }
}

/// Counts actions per kind.
#[must_use]
pub fn summarize(actions: &[LabelAction]) -> ActionSummary {
    actions
        .iter()
        .fold(ActionSummary::default(), |mut summary, action| {
            match action.kind() {
                ActionKind::Create => summary.created += 1,
                ActionKind::Update => summary.updated += 1,
                ActionKind::Recolor => summary.recolored += 1,
                ActionKind::Delete => summary.deleted += 1,
            }
            summary
        })
}

/// Computes the actions needed to align `remote` with `template`.
///
/// Pure: performs no I/O. Template-driven actions come first in template
/// order, followed by orphan handling in remote order.
#[must_use]
pub fn reconcile(template: &[Label], remote: &[Label], force_delete: bool) -> Vec<LabelAction> {
    let template_keys: Vec<String> = template.iter().map(|t| normalize_name(&t.name)).collect();
    let remote_keys: Vec<String> = remote.iter().map(|r| normalize_name(&r.name)).collect();

    let mut actions = Vec::with_capacity(template.len() + remote.len());

    for (label, key) in template.iter().zip(&template_keys) {
        let mut matched = false;
        for (remote_label, remote_key) in remote.iter().zip(&remote_keys) {
            if key == remote_key {
                matched = true;
                actions.push(LabelAction::Update {
                    label: label.clone(),
                    current_name: remote_label.name.clone(),
                });
            }
        }
        if !matched {
            actions.push(LabelAction::Create {
                label: label.clone(),
            });
        }
    }

    for (remote_label, remote_key) in remote.iter().zip(&remote_keys) {
        if template_keys.contains(remote_key) {
            continue;
        }
        if force_delete {
            actions.push(LabelAction::Delete {
                name: remote_label.name.clone(),
            });
        } else {
            actions.push(LabelAction::Recolor {
                label: remote_label.clone(),
                color: ORPHAN_COLOR.to_string(),
            });
        }
    }

    debug!(
        template = template.len(),
        remote = remote.len(),
        force_delete,
        actions = actions.len(),
        "Reconciled labels"
    );

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str, color: &str) -> Label {
        Label::new(name, color)
    }

    fn sample_template() -> Vec<Label> {
        vec![label("bug", "d73a4a"), label("feature", "a2eeef")]
    }

    fn sample_remote() -> Vec<Label> {
        vec![label("bug", "ff0000"), label("old", "000000")]
    }

    #[test]
    fn empty_remote_creates_every_template_label() {
        let template = vec![
            label("bug", "d73a4a"),
            label("feature", "a2eeef"),
            label("docs", "0075ca"),
        ];
        let actions = reconcile(&template, &[], false);

        assert_eq!(actions.len(), template.len());
        assert!(
            actions
                .iter()
                .all(|a| matches!(a, LabelAction::Create { .. }))
        );
        let names: Vec<&str> = actions.iter().map(LabelAction::target_name).collect();
        assert_eq!(names, vec!["bug", "feature", "docs"]);
    }

    #[test]
    fn empty_template_with_force_delete_deletes_everything() {
        let remote = sample_remote();
        let actions = reconcile(&[], &remote, true);

        assert_eq!(
            actions,
            vec![
                LabelAction::Delete {
                    name: "bug".to_string()
                },
                LabelAction::Delete {
                    name: "old".to_string()
                },
            ]
        );
    }

    #[test]
    fn empty_template_without_force_delete_recolors_everything() {
        let remote = sample_remote();
        let actions = reconcile(&[], &remote, false);

        assert_eq!(actions.len(), remote.len());
        for action in &actions {
            match action {
                LabelAction::Recolor { color, .. } => assert_eq!(color, "22292f"),
                other => panic!("expected recolor, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_inputs_yield_no_actions() {
        assert!(reconcile(&[], &[], true).is_empty());
        assert!(reconcile(&[], &[], false).is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let actions = reconcile(&[label("Bug", "f00")], &[label("bug", "000")], false);

        assert_eq!(
            actions,
            vec![LabelAction::Update {
                label: label("Bug", "f00"),
                current_name: "bug".to_string(),
            }]
        );
    }

    #[test]
    fn shortcode_prefixed_remote_is_renamed() {
        let actions = reconcile(&[label("bug", "d73a4a")], &[label(":bug: Bug", "000")], false);

        assert_eq!(
            actions,
            vec![LabelAction::Update {
                label: label("bug", "d73a4a"),
                current_name: ":bug: Bug".to_string(),
            }]
        );
    }

    #[test]
    fn duplicate_remote_matches_each_get_an_update() {
        let remote = vec![label("Bug", "111111"), label(":bug: bug", "222222")];
        let actions = reconcile(&[label("bug", "d73a4a")], &remote, true);

        assert_eq!(
            actions,
            vec![
                LabelAction::Update {
                    label: label("bug", "d73a4a"),
                    current_name: "Bug".to_string(),
                },
                LabelAction::Update {
                    label: label("bug", "d73a4a"),
                    current_name: ":bug: bug".to_string(),
                },
            ]
        );
    }

    #[test]
    fn end_to_end_without_force_delete() {
        let actions = reconcile(&sample_template(), &sample_remote(), false);

        assert_eq!(
            actions,
            vec![
                LabelAction::Update {
                    label: label("bug", "d73a4a"),
                    current_name: "bug".to_string(),
                },
                LabelAction::Create {
                    label: label("feature", "a2eeef"),
                },
                LabelAction::Recolor {
                    label: label("old", "000000"),
                    color: "22292f".to_string(),
                },
            ]
        );
    }

    #[test]
    fn end_to_end_with_force_delete() {
        let actions = reconcile(&sample_template(), &sample_remote(), true);

        assert_eq!(
            actions,
            vec![
                LabelAction::Update {
                    label: label("bug", "d73a4a"),
                    current_name: "bug".to_string(),
                },
                LabelAction::Create {
                    label: label("feature", "a2eeef"),
                },
                LabelAction::Delete {
                    name: "old".to_string()
                },
            ]
        );
    }

    #[test]
    fn second_run_against_synced_remote_only_updates() {
        let template = vec![
            label("bug", "#d73a4a").with_description("Something is broken"),
            label("feature", "a2eeef"),
        ];
        // What the repository looks like after the first run was applied
        let synced: Vec<Label> = template
            .iter()
            .map(|t| Label {
                name: t.name.clone(),
                color: t.normalized_color().to_string(),
                description: t.description.clone(),
            })
            .collect();

        let actions = reconcile(&template, &synced, true);
        let summary = summarize(&actions);

        assert_eq!(summary.updated, template.len());
        assert_eq!(summary.created, 0);
        assert_eq!(summary.recolored, 0);
        assert_eq!(summary.deleted, 0);
    }

    #[test]
    fn describe_matches_log_format() {
        let repo = "acme/web";
        assert_eq!(
            LabelAction::Create {
                label: label("feature", "a2eeef")
            }
            .describe(repo),
            "acme/web Creating new label: feature"
        );
        assert_eq!(
            LabelAction::Update {
                label: label("bug", "d73a4a"),
                current_name: ":bug: Bug".to_string()
            }
            .describe(repo),
            "acme/web Updating label: ':bug: Bug' to 'bug'"
        );
        assert_eq!(
            LabelAction::Recolor {
                label: label("old", "000000"),
                color: ORPHAN_COLOR.to_string()
            }
            .describe(repo),
            "acme/web Setting label color to black: old"
        );
        assert_eq!(
            LabelAction::Delete {
                name: "old".to_string()
            }
            .describe(repo),
            "acme/web Deleting label: old"
        );
    }

    #[test]
    fn actions_serialize_with_tag() {
        let json = serde_json::to_value(LabelAction::Delete {
            name: "old".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"action": "delete", "name": "old"}));
    }

    #[test]
    fn summarize_counts_each_kind() {
        let summary = summarize(&reconcile(&sample_template(), &sample_remote(), false));
        assert_eq!(
            summary,
            ActionSummary {
                created: 1,
                updated: 1,
                recolored: 1,
                deleted: 0,
            }
        );
        assert_eq!(summary.total(), 3);
    }
}
