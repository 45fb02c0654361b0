// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task creation request DTO
///
/// Creating a task also creates the mirrored issue in the external
/// tracker, so the fields here become the issue fields.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskDto {
    /// Issue summary, required
    pub summary: Option<String>,
    /// Plain-text issue description
    pub description: Option<String>,
    /// Priority name, defaults to `Medium`
    pub priority: Option<String>,
    /// Task type code
    pub task_type: Option<String>,
    /// Owning partner id, absent means no specific partner
    pub partner_id: Option<Uuid>,
}

/// Workflow transition request DTO
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionTaskDto {
    /// Transition id picked from the available transition list
    pub transition_id: Option<String>,
}
