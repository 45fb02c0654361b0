// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment entity
///
/// Mirror of a comment on the parent task's tracker issue. The tracker
/// wins every reconciliation: bodies are refreshed from it and local
/// rows whose remote counterpart disappeared are pruned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Comment unique identifier
    pub id: Uuid,
    /// Comment id in the external tracker, globally unique
    pub remote_id: String,
    /// Parent task
    pub task_id: Uuid,
    /// Author display name as reported by the tracker
    pub author_name: String,
    /// Author email, if the tracker exposes it
    pub author_email: Option<String>,
    /// Author avatar URL
    pub author_avatar: Option<String>,
    /// Comment body as plain text
    pub body: String,
    /// Creation timestamp in the external tracker
    pub remote_created_at: DateTime<FixedOffset>,
    /// Last update timestamp in the external tracker
    pub remote_updated_at: DateTime<FixedOffset>,
    /// Local creation timestamp
    pub created_at: DateTime<FixedOffset>,
    /// Local update timestamp
    pub updated_at: DateTime<FixedOffset>,
}
