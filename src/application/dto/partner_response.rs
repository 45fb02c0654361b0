// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::partner::{Partner, PartnerConfig, PartnerStatus, PartnerType, Platform};
use crate::domain::models::task::Task;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use uuid::Uuid;

/// Partner response DTO
///
/// Full partner row plus the number of tasks associated with it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerDto {
    /// Partner identifier
    pub id: Uuid,
    /// Partner display name
    pub name: String,
    /// Opaque upload key
    pub upload_key: String,
    /// Date the partnership was established
    pub date_added: DateTime<FixedOffset>,
    /// Hosting platform
    pub platform: Option<Platform>,
    /// Commercial relationship classification
    pub partner_type: Option<PartnerType>,
    /// Configuration profile
    pub config: Option<PartnerConfig>,
    /// Lifecycle status
    pub partner_status: PartnerStatus,
    /// Whether a landing page has been built
    pub has_landing_page: bool,
    /// Support channel
    pub support_channel: Option<String>,
    /// Primary contact name
    pub contact_name: Option<String>,
    /// Primary contact email
    pub contact_email: Option<String>,
    /// Commission percentage
    pub commission: Option<f64>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<FixedOffset>,
    /// Last update timestamp
    pub updated_at: DateTime<FixedOffset>,
    /// Number of tasks associated with this partner
    pub task_count: i64,
}

impl PartnerDto {
    /// Maps a partner entity and its task count to the response shape
    pub fn from_partner(partner: &Partner, task_count: i64) -> Self {
        Self {
            id: partner.id,
            name: partner.name.clone(),
            upload_key: partner.upload_key.clone(),
            date_added: partner.date_added,
            platform: partner.platform,
            partner_type: partner.partner_type,
            config: partner.config,
            partner_status: partner.partner_status,
            has_landing_page: partner.has_landing_page,
            support_channel: partner.support_channel.clone(),
            contact_name: partner.contact_name.clone(),
            contact_email: partner.contact_email.clone(),
            commission: partner.commission,
            notes: partner.notes.clone(),
            created_at: partner.created_at,
            updated_at: partner.updated_at,
            task_count,
        }
    }
}

/// Recent task summary embedded in the partner detail response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerTaskDto {
    /// Task identifier
    pub id: Uuid,
    /// External issue key
    pub issue_key: String,
    /// Issue summary
    pub summary: String,
    /// Current workflow status
    pub status: String,
    /// Creation timestamp
    pub created_at: DateTime<FixedOffset>,
}

impl PartnerTaskDto {
    /// Maps a task entity to the embedded summary shape
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            issue_key: task.issue_key.clone(),
            summary: task.summary.clone(),
            status: task.status.clone(),
            created_at: task.created_at,
        }
    }
}

/// Partner detail response DTO
///
/// Partner fields at the top level plus the five most recent tasks.
#[derive(Debug, Serialize)]
pub struct PartnerDetailDto {
    #[serde(flatten)]
    pub partner: PartnerDto,
    pub tasks: Vec<PartnerTaskDto>,
}
