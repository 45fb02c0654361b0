// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::partner::{Partner, PartnerStatus, Platform};
use crate::domain::models::task::{Task, TaskType};
use crate::domain::models::user::User;
use crate::tracker::types::Transition;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use uuid::Uuid;

/// Creator profile embedded in task responses
#[derive(Debug, Serialize)]
pub struct TaskCreatorDto {
    /// Display name
    pub name: Option<String>,
    /// Email address
    pub email: String,
    /// Avatar image URL
    pub image: Option<String>,
}

/// Partner summary embedded in task responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPartnerDto {
    /// Partner identifier
    pub id: Uuid,
    /// Partner display name
    pub name: String,
    /// Hosting platform
    pub platform: Option<Platform>,
    /// Lifecycle status
    pub partner_status: PartnerStatus,
}

/// Task response DTO
///
/// Task row plus the embedded creator profile and, when the task is
/// associated with one, the owning partner summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Task identifier
    pub id: Uuid,
    /// External issue key
    pub issue_key: String,
    /// External issue id
    pub issue_id: String,
    /// Issue summary
    pub summary: String,
    /// Plain-text description
    pub description: Option<String>,
    /// Current workflow status
    pub status: String,
    /// Priority name
    pub priority: String,
    /// Task type classification
    pub task_type: Option<TaskType>,
    /// Assignee email
    pub assignee: Option<String>,
    /// Owning partner id
    pub partner_id: Option<Uuid>,
    /// Creating user id
    pub user_id: Uuid,
    /// Last reconciliation timestamp
    pub last_synced_at: Option<DateTime<FixedOffset>>,
    /// Creation timestamp
    pub created_at: DateTime<FixedOffset>,
    /// Last update timestamp
    pub updated_at: DateTime<FixedOffset>,
    /// Creator profile
    pub created_by: Option<TaskCreatorDto>,
    /// Owning partner summary
    pub partner: Option<TaskPartnerDto>,
}

impl TaskDto {
    /// Maps a task entity with its relations to the response shape
    pub fn from_task(task: &Task, creator: Option<&User>, partner: Option<&Partner>) -> Self {
        Self {
            id: task.id,
            issue_key: task.issue_key.clone(),
            issue_id: task.issue_id.clone(),
            summary: task.summary.clone(),
            description: task.description.clone(),
            status: task.status.clone(),
            priority: task.priority.clone(),
            task_type: task.task_type,
            assignee: task.assignee.clone(),
            partner_id: task.partner_id,
            user_id: task.user_id,
            last_synced_at: task.last_synced_at,
            created_at: task.created_at,
            updated_at: task.updated_at,
            created_by: creator.map(|user| TaskCreatorDto {
                name: user.name.clone(),
                email: user.email.clone(),
                image: user.image.clone(),
            }),
            partner: partner.map(|partner| TaskPartnerDto {
                id: partner.id,
                name: partner.name.clone(),
                platform: partner.platform,
                partner_status: partner.partner_status,
            }),
        }
    }
}

/// Workflow transition DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionDto {
    /// Transition id
    pub id: String,
    /// Transition name
    pub name: String,
    /// Status the transition leads to
    pub to_status: String,
}

impl TransitionDto {
    /// Maps a tracker transition to the response shape
    pub fn from_transition(transition: &Transition) -> Self {
        Self {
            id: transition.id.clone(),
            name: transition.name.clone(),
            to_status: transition.to.name.clone(),
        }
    }
}

/// Task detail response DTO
#[derive(Debug, Serialize)]
pub struct TaskDetailDto {
    pub task: TaskDto,
    pub transitions: Vec<TransitionDto>,
}

/// Full reconciliation run response DTO
#[derive(Debug, Serialize)]
pub struct SyncResponseDto {
    /// Human-readable run summary
    pub message: String,
    /// Number of issues reconciled
    pub synced: usize,
    /// Number of tasks created
    pub created: usize,
    /// Number of tasks updated
    pub updated: usize,
    /// Full post-sync task listing
    pub tasks: Vec<TaskDto>,
}
