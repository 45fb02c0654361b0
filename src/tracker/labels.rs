// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::TaskType;

/// Prefix of the partner tag on tracker issues
pub const PARTNER_TAG_PREFIX: &str = "partner:";

/// Prefix of the task-type tag on tracker issues
pub const TYPE_TAG_PREFIX: &str = "type:";

/// Sanitizes a value for use inside a tracker label.
///
/// Whitespace runs become single hyphens, every character outside
/// `[A-Za-z0-9_-]` is dropped, and the result is capped at 100
/// characters. The mapping is lossy, so recovery matches
/// case-insensitively on the sanitized form.
pub fn sanitize_for_label(value: &str) -> String {
    let mut sanitized = String::with_capacity(value.len());
    let mut in_whitespace = false;

    for ch in value.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                sanitized.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            sanitized.push(ch);
        }
    }

    sanitized.chars().take(100).collect()
}

/// Builds the label list for a tracker issue: the fixed tracking label,
/// then optional partner and task-type tags.
pub fn build_labels(
    tracking_label: &str,
    partner_name: Option<&str>,
    task_type: Option<TaskType>,
) -> Vec<String> {
    let mut labels = vec![tracking_label.to_string()];

    if let Some(name) = partner_name {
        labels.push(format!("{}{}", PARTNER_TAG_PREFIX, sanitize_for_label(name)));
    }

    if let Some(task_type) = task_type {
        labels.push(format!("{}{}", TYPE_TAG_PREFIX, task_type));
    }

    labels
}

/// Builds the human-readable metadata header and prepends it to the
/// description.
///
/// The header looks like `[Partner: Acme | Type: Infrastructure]` and
/// exists purely for display inside the tracker, the labels being the
/// machine-readable channel. Header and body are joined by one blank
/// line; with neither partner nor type the description passes through
/// untouched.
pub fn compose_description(
    description: Option<&str>,
    partner_name: Option<&str>,
    task_type: Option<TaskType>,
) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(name) = partner_name {
        parts.push(format!("Partner: {}", name));
    }

    if let Some(task_type) = task_type {
        parts.push(format!("Type: {}", task_type.label()));
    }

    if parts.is_empty() {
        return description.map(|d| d.to_string());
    }

    let header = format!("[{}]", parts.join(" | "));

    match description {
        Some(body) if !body.is_empty() => Some(format!("{}\n\n{}", header, body)),
        _ => Some(header),
    }
}

/// Recovers the sanitized partner slug from an issue's labels.
pub fn extract_partner_slug(labels: &[String]) -> Option<&str> {
    labels
        .iter()
        .find_map(|label| label.strip_prefix(PARTNER_TAG_PREFIX))
}

/// Recovers the task type from an issue's labels.
///
/// Unknown type codes are treated as absent rather than failing the
/// containing sync run.
pub fn extract_task_type(labels: &[String]) -> Option<TaskType> {
    labels
        .iter()
        .find_map(|label| label.strip_prefix(TYPE_TAG_PREFIX))
        .and_then(|code| code.parse().ok())
}

#[cfg(test)]
#[path = "labels_test.rs"]
mod tests;
