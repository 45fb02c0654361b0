// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::tracker::rich_text::RichTextDoc;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Issue as returned by the tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub key: String,
    pub fields: IssueFields,
}

/// Field block of a tracker issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueFields {
    pub summary: String,
    #[serde(default)]
    pub description: Option<RichTextDoc>,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    #[serde(default)]
    pub assignee: Option<IssueAssignee>,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Workflow status of an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueStatus {
    pub name: String,
}

/// Priority of an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuePriority {
    pub name: String,
}

/// Issue assignee
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueAssignee {
    #[serde(default)]
    pub email_address: Option<String>,
}

/// Reference returned by the issue-creation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
}

/// Search response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Workflow transition available on an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transition {
    pub id: String,
    pub name: String,
    pub to: TransitionTarget,
}

/// Status a transition leads to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionTarget {
    pub name: String,
    pub status_category: StatusCategory,
}

/// Status category grouping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCategory {
    pub key: String,
}

/// Transition list response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionList {
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

/// Comment as returned by the tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteComment {
    pub id: String,
    pub author: CommentAuthor,
    pub body: RichTextDoc,
    pub created: String,
    pub updated: String,
}

/// Author block of a tracker comment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    pub display_name: String,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub avatar_urls: Option<HashMap<String, String>>,
}

impl CommentAuthor {
    /// Medium-resolution avatar URL, the size the dashboard renders
    pub fn avatar(&self) -> Option<String> {
        self.avatar_urls
            .as_ref()
            .and_then(|urls| urls.get("48x48").cloned())
    }
}

/// Comment list response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentList {
    #[serde(default)]
    pub comments: Vec<RemoteComment>,
}

/// Input for creating a tracker issue
///
/// The description is the final plain text, metadata header included;
/// the labels are the final tag list. Both are produced by the
/// reconciliation engine before the call.
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub summary: String,
    pub description: Option<String>,
    pub priority: String,
    pub labels: Vec<String>,
}

/// Parses a tracker timestamp such as `2026-03-02T09:15:00.000+0000`.
///
/// The tracker emits offsets without a colon, which RFC 3339 parsing
/// rejects, so both spellings are tried. Falls back to the current
/// time rather than failing the whole sync over one bad timestamp.
pub fn parse_remote_timestamp(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.3f%z"))
        .unwrap_or_else(|_| Utc::now().into())
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
