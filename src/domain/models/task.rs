// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Task entity
///
/// Local mirror of an issue in the external tracker. The tracker is the
/// source of truth for summary, status, priority and assignee; the local
/// store is the source of truth for the partner association and task
/// type. Tasks are created locally (which creates the tracker issue) or
/// discovered during a full sync, and are never deleted by sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task unique identifier
    pub id: Uuid,
    /// External issue key, e.g. `PART-42`, globally unique
    pub issue_key: String,
    /// External issue id
    pub issue_id: String,
    /// Issue summary
    pub summary: String,
    /// Plain-text issue description
    pub description: Option<String>,
    /// Current workflow status name, sourced from the tracker
    pub status: String,
    /// Priority name, sourced from the tracker
    pub priority: String,
    /// Task type classification
    pub task_type: Option<TaskType>,
    /// Assignee email, if the issue is assigned
    pub assignee: Option<String>,
    /// Owning partner, null means no specific partner
    pub partner_id: Option<Uuid>,
    /// Local user who created or discovered the task
    pub user_id: Uuid,
    /// When the task was last reconciled with the tracker
    pub last_synced_at: Option<DateTime<FixedOffset>>,
    /// Creation timestamp
    pub created_at: DateTime<FixedOffset>,
    /// Last update timestamp
    pub updated_at: DateTime<FixedOffset>,
}

/// Task type classification
///
/// Carried redundantly on the tracker issue as a `type:<CODE>` label so
/// the association survives a local database loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    /// Initial configuration of a new product
    NewProductConfig,
    /// Change to an existing configuration
    ConfigUpdate,
    /// Infrastructure work
    Infrastructure,
    /// Anything else
    Other,
}

impl TaskType {
    /// Human-readable display name, used in the issue description header
    pub fn label(&self) -> &'static str {
        match self {
            TaskType::NewProductConfig => "New Product Config",
            TaskType::ConfigUpdate => "Config Update",
            TaskType::Infrastructure => "Infrastructure",
            TaskType::Other => "Other",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskType::NewProductConfig => write!(f, "NEW_PRODUCT_CONFIG"),
            TaskType::ConfigUpdate => write!(f, "CONFIG_UPDATE"),
            TaskType::Infrastructure => write!(f, "INFRASTRUCTURE"),
            TaskType::Other => write!(f, "OTHER"),
        }
    }
}

impl FromStr for TaskType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW_PRODUCT_CONFIG" => Ok(TaskType::NewProductConfig),
            "CONFIG_UPDATE" => Ok(TaskType::ConfigUpdate),
            "INFRASTRUCTURE" => Ok(TaskType::Infrastructure),
            "OTHER" => Ok(TaskType::Other),
            _ => Err(()),
        }
    }
}
