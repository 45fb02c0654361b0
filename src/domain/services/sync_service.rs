// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::comment::Comment;
use crate::domain::models::partner::Partner;
use crate::domain::models::task::{Task, TaskType};
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::partner_repository::{PartnerQueryParams, PartnerRepository};
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use crate::tracker::labels;
use crate::tracker::rich_text;
use crate::tracker::traits::TrackerClient;
use crate::tracker::types::{parse_remote_timestamp, Issue, NewIssue, RemoteComment, Transition};
use anyhow::{anyhow, Result};
use chrono::{DateTime, FixedOffset, Utc};
use metrics::{counter, histogram};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Input for creating a task
#[derive(Debug, Clone, Default)]
pub struct NewTaskInput {
    /// Issue summary
    pub summary: String,
    /// Issue description, stored locally without the metadata header
    pub description: Option<String>,
    /// Priority name, defaults to "Medium"
    pub priority: Option<String>,
    /// Task type classification
    pub task_type: Option<TaskType>,
    /// Owning partner
    pub partner_id: Option<Uuid>,
}

/// Aggregate result of a full sync run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Issues processed
    pub synced: usize,
    /// Tasks inserted
    pub created: usize,
    /// Tasks refreshed
    pub updated: usize,
}

impl SyncOutcome {
    /// Human summary line for the sync response
    pub fn summary(&self) -> String {
        format!(
            "Synced {} tasks ({} created, {} updated)",
            self.synced, self.created, self.updated
        )
    }
}

/// Reconciliation service
///
/// Keeps local task and comment mirrors consistent with the external
/// tracker. The tracker is authoritative for summary, description,
/// status, priority and assignee; the local store is authoritative for
/// the partner association and task type once they are set, so sync
/// only fills those two fields when they are currently null.
pub struct SyncService {
    /// Tracker protocol adapter
    tracker: Arc<dyn TrackerClient>,
    /// Task mirror store
    task_repo: Arc<dyn TaskRepository>,
    /// Partner store, used for tag recovery
    partner_repo: Arc<dyn PartnerRepository>,
    /// Comment mirror store
    comment_repo: Arc<dyn CommentRepository>,
    /// Fixed label identifying issues owned by this system
    tracking_label: String,
}

impl SyncService {
    /// Creates a new reconciliation service instance
    pub fn new(
        tracker: Arc<dyn TrackerClient>,
        task_repo: Arc<dyn TaskRepository>,
        partner_repo: Arc<dyn PartnerRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        tracking_label: String,
    ) -> Self {
        Self {
            tracker,
            task_repo,
            partner_repo,
            comment_repo,
            tracking_label,
        }
    }

    /// Creates a tracker issue and its local task mirror.
    ///
    /// The partner is resolved before any tracker call so an unknown
    /// partner id cannot leave an orphaned issue behind. The tracker
    /// copy of the description carries the metadata header; the local
    /// row stores the user's raw trimmed text.
    pub async fn create_task(&self, input: NewTaskInput, user_id: Uuid) -> Result<Task> {
        let partner = match input.partner_id {
            Some(id) => Some(
                self.partner_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| anyhow!("Partner not found"))?,
            ),
            None => None,
        };
        let partner_name = partner.as_ref().map(|p| p.name.as_str());

        let description = input
            .description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        let new_issue = NewIssue {
            summary: input.summary.trim().to_string(),
            description: labels::compose_description(
                description.as_deref(),
                partner_name,
                input.task_type,
            ),
            priority: input.priority.unwrap_or_else(|| "Medium".to_string()),
            labels: labels::build_labels(&self.tracking_label, partner_name, input.task_type),
        };

        let created = self.tracker.create_issue(&new_issue).await?;
        // Creation responses are partial, so re-fetch the canonical fields
        let issue = self.tracker.fetch_issue(&created.key).await?;

        let now: DateTime<FixedOffset> = Utc::now().into();
        let task = Task {
            id: Uuid::new_v4(),
            issue_key: issue.key.clone(),
            issue_id: issue.id.clone(),
            summary: issue.fields.summary.clone(),
            description,
            status: issue.fields.status.name.clone(),
            priority: issue.fields.priority.name.clone(),
            task_type: input.task_type,
            assignee: assignee_email(&issue),
            partner_id: input.partner_id,
            user_id,
            last_synced_at: Some(now),
            created_at: now,
            updated_at: now,
        };

        self.task_repo.create(&task).await?;

        tracing::info!("Created task {} for issue {}", task.id, task.issue_key);
        Ok(task)
    }

    /// Reconciles every tracked issue into the local store.
    ///
    /// Idempotent: a second run with no upstream changes updates every
    /// row in place and creates none. Tasks are never deleted here,
    /// even when their issue has vanished upstream. Newly discovered
    /// issues are owned by the user who triggered the run.
    pub async fn sync_all(&self, user_id: Uuid) -> Result<SyncOutcome> {
        let started = Instant::now();
        let issues = self.tracker.search_tracked_issues().await?;
        let partner_lookup = self.partner_lookup().await?;

        let mut outcome = SyncOutcome {
            synced: issues.len(),
            ..Default::default()
        };

        for issue in &issues {
            let partner_id = labels::extract_partner_slug(&issue.fields.labels)
                .and_then(|slug| partner_lookup.get(&slug.to_lowercase()).copied());
            let task_type = labels::extract_task_type(&issue.fields.labels);
            let now: DateTime<FixedOffset> = Utc::now().into();

            match self.task_repo.find_by_issue_key(&issue.key).await? {
                Some(mut task) => {
                    apply_issue_fields(&mut task, issue, partner_id, task_type, now);
                    self.task_repo.update(&task).await?;
                    outcome.updated += 1;
                }
                None => {
                    let task = task_from_issue(issue, partner_id, task_type, user_id, now);
                    match self.task_repo.create(&task).await {
                        Ok(_) => outcome.created += 1,
                        // A concurrent run inserted the same issue first;
                        // converge by taking the update path instead
                        Err(RepositoryError::Conflict(_)) => {
                            tracing::warn!(
                                "Issue {} was inserted concurrently, updating instead",
                                issue.key
                            );
                            if let Some(mut task) =
                                self.task_repo.find_by_issue_key(&issue.key).await?
                            {
                                apply_issue_fields(&mut task, issue, partner_id, task_type, now);
                                self.task_repo.update(&task).await?;
                                outcome.updated += 1;
                            }
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
            }
        }

        counter!("sync_runs_total").increment(1);
        counter!("sync_tasks_created_total").increment(outcome.created as u64);
        counter!("sync_tasks_updated_total").increment(outcome.updated as u64);
        histogram!("sync_duration_seconds").record(started.elapsed().as_secs_f64());

        tracing::info!("{}", outcome.summary());
        Ok(outcome)
    }

    /// Executes a workflow transition and refreshes the local status
    pub async fn transition_task(&self, task_id: Uuid, transition_id: &str) -> Result<Task> {
        let mut task = self
            .task_repo
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| anyhow!("Task not found"))?;

        self.tracker
            .execute_transition(&task.issue_key, transition_id)
            .await?;
        let issue = self.tracker.fetch_issue(&task.issue_key).await?;

        let now: DateTime<FixedOffset> = Utc::now().into();
        task.status = issue.fields.status.name.clone();
        task.last_synced_at = Some(now);
        task.updated_at = now;

        Ok(self.task_repo.update(&task).await?)
    }

    /// Transitions available on a task, restricted to those ending in
    /// the tracker's "done" status category
    pub async fn available_transitions(&self, task: &Task) -> Result<Vec<Transition>> {
        let transitions = self.tracker.list_transitions(&task.issue_key).await?;

        Ok(transitions
            .into_iter()
            .filter(|t| t.to.status_category.key == "done")
            .collect())
    }

    /// Mirrors the tracker's comments for a task and returns the result.
    ///
    /// Upserts every remote comment by its tracker id, then prunes
    /// local rows whose remote counterpart disappeared. Unlike tasks,
    /// comments are hard-deleted to stay exactly consistent.
    pub async fn refresh_comments(&self, task: &Task) -> Result<Vec<Comment>> {
        let remote_comments = self.tracker.list_comments(&task.issue_key).await?;
        let now: DateTime<FixedOffset> = Utc::now().into();

        for remote in &remote_comments {
            match self.comment_repo.find_by_remote_id(&remote.id).await? {
                Some(mut existing) => {
                    existing.body = rich_text::plain_text(&remote.body);
                    existing.remote_updated_at = parse_remote_timestamp(&remote.updated);
                    existing.updated_at = now;
                    self.comment_repo.update(&existing).await?;
                }
                None => {
                    let comment = comment_from_remote(remote, task.id, now);
                    self.comment_repo.create(&comment).await?;
                }
            }
        }

        let live_ids: Vec<String> = remote_comments.iter().map(|c| c.id.clone()).collect();
        let pruned = self.comment_repo.prune_stale(task.id, &live_ids).await?;
        if pruned > 0 {
            tracing::info!("Pruned {} stale comments for task {}", pruned, task.id);
        }

        Ok(self.comment_repo.list_by_task(task.id).await?)
    }

    /// Adds a comment to the tracker issue, then mirrors it locally
    pub async fn add_comment(&self, task: &Task, content: &str) -> Result<Comment> {
        let remote = self.tracker.add_comment(&task.issue_key, content).await?;

        let now: DateTime<FixedOffset> = Utc::now().into();
        let comment = comment_from_remote(&remote, task.id, now);
        self.comment_repo.create(&comment).await?;

        Ok(comment)
    }

    /// Replaces a comment's body in the tracker, then mirrors it locally
    pub async fn update_comment(
        &self,
        task: &Task,
        comment: &Comment,
        content: &str,
    ) -> Result<Comment> {
        let remote = self
            .tracker
            .update_comment(&task.issue_key, &comment.remote_id, content)
            .await?;

        let mut updated = comment.clone();
        updated.body = rich_text::plain_text(&remote.body);
        updated.remote_updated_at = parse_remote_timestamp(&remote.updated);
        updated.updated_at = Utc::now().into();

        Ok(self.comment_repo.update(&updated).await?)
    }

    /// Deletes a comment from the tracker, then removes the local mirror
    pub async fn delete_comment(&self, task: &Task, comment: &Comment) -> Result<()> {
        self.tracker
            .delete_comment(&task.issue_key, &comment.remote_id)
            .await?;

        Ok(self.comment_repo.delete(comment.id).await?)
    }

    /// Builds the recovery lookup from lower-cased sanitized partner
    /// names to partner ids
    async fn partner_lookup(&self) -> Result<HashMap<String, Uuid>> {
        let partners: Vec<Partner> = self
            .partner_repo
            .list(PartnerQueryParams::default())
            .await?;

        Ok(partners
            .iter()
            .map(|p| (labels::sanitize_for_label(&p.name).to_lowercase(), p.id))
            .collect())
    }
}

/// Assignee email of an issue, if any
fn assignee_email(issue: &Issue) -> Option<String> {
    issue
        .fields
        .assignee
        .as_ref()
        .and_then(|a| a.email_address.clone())
}

/// Plain-text description of an issue, empty mapped to none
fn issue_description(issue: &Issue) -> Option<String> {
    issue
        .fields
        .description
        .as_ref()
        .map(rich_text::plain_text)
        .filter(|text| !text.is_empty())
}

/// Overwrites the tracker-authoritative fields of a task and fills the
/// locally-authoritative ones only where they are still null
fn apply_issue_fields(
    task: &mut Task,
    issue: &Issue,
    partner_id: Option<Uuid>,
    task_type: Option<TaskType>,
    now: DateTime<FixedOffset>,
) {
    task.summary = issue.fields.summary.clone();
    task.description = issue_description(issue);
    task.status = issue.fields.status.name.clone();
    task.priority = issue.fields.priority.name.clone();
    task.assignee = assignee_email(issue);

    if task.partner_id.is_none() {
        task.partner_id = partner_id;
    }
    if task.task_type.is_none() {
        task.task_type = task_type;
    }

    task.last_synced_at = Some(now);
    task.updated_at = now;
}

/// Builds a task mirror for an issue discovered during sync
fn task_from_issue(
    issue: &Issue,
    partner_id: Option<Uuid>,
    task_type: Option<TaskType>,
    user_id: Uuid,
    now: DateTime<FixedOffset>,
) -> Task {
    Task {
        id: Uuid::new_v4(),
        issue_key: issue.key.clone(),
        issue_id: issue.id.clone(),
        summary: issue.fields.summary.clone(),
        description: issue_description(issue),
        status: issue.fields.status.name.clone(),
        priority: issue.fields.priority.name.clone(),
        task_type,
        assignee: assignee_email(issue),
        partner_id,
        user_id,
        last_synced_at: Some(now),
        created_at: now,
        updated_at: now,
    }
}

/// Builds a comment mirror from a tracker comment
fn comment_from_remote(remote: &RemoteComment, task_id: Uuid, now: DateTime<FixedOffset>) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        remote_id: remote.id.clone(),
        task_id,
        author_name: remote.author.display_name.clone(),
        author_email: remote.author.email_address.clone(),
        author_avatar: remote.author.avatar(),
        body: rich_text::plain_text(&remote.body),
        remote_created_at: parse_remote_timestamp(&remote.created),
        remote_updated_at: parse_remote_timestamp(&remote.updated),
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
#[path = "sync_service_test.rs"]
mod tests;
