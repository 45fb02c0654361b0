// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::tracker::types::{CreatedIssue, Issue, NewIssue, RemoteComment, Transition};
use anyhow::Result;
use async_trait::async_trait;

/// Tracker client trait
///
/// One method per tracker REST operation. Implementations hold the
/// endpoint configuration but no other state; every call is
/// independent.
#[async_trait]
pub trait TrackerClient: Send + Sync {
    /// Creates an issue and returns its key reference
    async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue>;
    /// Fetches one issue with its full field block
    async fn fetch_issue(&self, issue_key: &str) -> Result<Issue>;
    /// Fetches every issue carrying the tracking label, newest first
    async fn search_tracked_issues(&self) -> Result<Vec<Issue>>;
    /// Lists the workflow transitions available on an issue
    async fn list_transitions(&self, issue_key: &str) -> Result<Vec<Transition>>;
    /// Executes a workflow transition on an issue
    async fn execute_transition(&self, issue_key: &str, transition_id: &str) -> Result<()>;
    /// Lists the comments of an issue, oldest first
    async fn list_comments(&self, issue_key: &str) -> Result<Vec<RemoteComment>>;
    /// Adds a comment to an issue
    async fn add_comment(&self, issue_key: &str, body: &str) -> Result<RemoteComment>;
    /// Replaces the body of an issue comment
    async fn update_comment(
        &self,
        issue_key: &str,
        comment_id: &str,
        body: &str,
    ) -> Result<RemoteComment>;
    /// Deletes an issue comment
    async fn delete_comment(&self, issue_key: &str, comment_id: &str) -> Result<()>;
}
