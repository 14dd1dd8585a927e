// SPDX-License-Identifier: Apache-2.0

//! Label template loading.
//!
//! The template is a JSON array of `{name, color, description?}` objects served
//! from a plain URL (usually a gist). It is fetched once per run without
//! authentication.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::error::LabelSyncError;
use crate::label::Label;

/// Parses a template document.
///
/// # Errors
///
/// Returns `LabelSyncError::InvalidTemplate` if the document is not a JSON
/// array of labels, or `LabelSyncError::InvalidTemplateEntry` if a label has
/// an empty name or color.
pub fn parse_template(document: &str) -> crate::Result<Vec<Label>> {
    let labels: Vec<Label> =
        serde_json::from_str(document).map_err(LabelSyncError::InvalidTemplate)?;

    for (index, label) in labels.iter().enumerate() {
        if label.name.trim().is_empty() {
            return Err(LabelSyncError::InvalidTemplateEntry {
                index,
                reason: "label name is empty".to_string(),
            });
        }
        if label.normalized_color().is_empty() {
            return Err(LabelSyncError::InvalidTemplateEntry {
                index,
                reason: format!("label '{}' has no color", label.name),
            });
        }
    }

    Ok(labels)
}

/// Fetches and parses the label template at `url`.
///
/// # Errors
///
/// Returns an error if the request fails or times out, the server answers
/// with a non-success status, or the body is not a valid template.
#[instrument(skip(timeout))]
pub async fn fetch_template(url: &str, timeout: Duration) -> crate::Result<Vec<Label>> {
    debug!("Fetching label template");

    let http = reqwest::Client::builder().timeout(timeout).build()?;
    let response = http.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LabelSyncError::Template {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    let labels = parse_template(&body)?;

    debug!(count = labels.len(), "Fetched label template");
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_template_preserves_order() {
        let labels = parse_template(
            r##"[
                {"name": "bug", "color": "#d73a4a", "description": "Something is broken"},
                {"name": "feature", "color": "a2eeef"}
            ]"##,
        )
        .unwrap();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].name, "bug");
        assert_eq!(labels[0].normalized_color(), "d73a4a");
        assert_eq!(labels[0].description.as_deref(), Some("Something is broken"));
        assert_eq!(labels[1].name, "feature");
        assert!(labels[1].description.is_none());
    }

    #[test]
    fn parse_template_accepts_empty_array() {
        assert!(parse_template("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_template_rejects_non_array() {
        let err = parse_template(r#"{"name": "bug"}"#).unwrap_err();
        assert!(matches!(err, LabelSyncError::InvalidTemplate(_)));
    }

    #[test]
    fn parse_template_rejects_missing_color() {
        let err = parse_template(r#"[{"name": "bug"}]"#).unwrap_err();
        assert!(matches!(err, LabelSyncError::InvalidTemplate(_)));
    }

    #[test]
    fn parse_template_rejects_empty_name() {
        let err = parse_template(r#"[{"name": "bug", "color": "f00"}, {"name": " ", "color": "f00"}]"#)
            .unwrap_err();
        assert!(matches!(
            err,
            LabelSyncError::InvalidTemplateEntry { index: 1, .. }
        ));
    }

    #[test]
    fn parse_template_rejects_bare_hash_color() {
        let err = parse_template(r##"[{"name": "bug", "color": "#"}]"##).unwrap_err();
        assert!(matches!(
            err,
            LabelSyncError::InvalidTemplateEntry { index: 0, .. }
        ));
    }

    #[tokio::test]
    async fn fetch_template_reports_unreachable_host() {
        let result = fetch_template("http://127.0.0.1:9/labels.json", Duration::from_secs(1)).await;
        assert!(matches!(result, Err(LabelSyncError::Network(_))));
    }
}
