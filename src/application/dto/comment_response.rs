// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::comment::Comment;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use uuid::Uuid;

/// Comment response DTO
///
/// Mirrored comment row in the shape the tracker reconciliation keeps
/// it: body and author data come from the tracker.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    /// Comment identifier
    pub id: Uuid,
    /// Comment id in the external tracker
    pub remote_id: String,
    /// Parent task id
    pub task_id: Uuid,
    /// Author display name
    pub author_name: String,
    /// Author email
    pub author_email: Option<String>,
    /// Author avatar URL
    pub author_avatar: Option<String>,
    /// Comment body as plain text
    pub body: String,
    /// Creation timestamp in the tracker
    pub remote_created_at: DateTime<FixedOffset>,
    /// Last update timestamp in the tracker
    pub remote_updated_at: DateTime<FixedOffset>,
    /// Local creation timestamp
    pub created_at: DateTime<FixedOffset>,
    /// Local update timestamp
    pub updated_at: DateTime<FixedOffset>,
}

impl CommentDto {
    /// Maps a comment entity to the response shape
    pub fn from_comment(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            remote_id: comment.remote_id.clone(),
            task_id: comment.task_id,
            author_name: comment.author_name.clone(),
            author_email: comment.author_email.clone(),
            author_avatar: comment.author_avatar.clone(),
            body: comment.body.clone(),
            remote_created_at: comment.remote_created_at,
            remote_updated_at: comment.remote_updated_at,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
