// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::task_repository::RepositoryError;
use crate::domain::models::comment::Comment;
use async_trait::async_trait;
use uuid::Uuid;

/// Comment repository trait
///
/// Defines the comment data access interface
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Creates a new comment row
    async fn create(&self, comment: &Comment) -> Result<Comment, RepositoryError>;
    /// Finds a comment by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepositoryError>;
    /// Finds a comment by its tracker comment id
    async fn find_by_remote_id(&self, remote_id: &str)
        -> Result<Option<Comment>, RepositoryError>;
    /// Lists the comments of one task, oldest first
    async fn list_by_task(&self, task_id: Uuid) -> Result<Vec<Comment>, RepositoryError>;
    /// Overwrites a comment row
    async fn update(&self, comment: &Comment) -> Result<Comment, RepositoryError>;
    /// Deletes a comment row
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Deletes every comment of a task whose tracker id is not in the
    /// live set, returning how many rows were removed
    async fn prune_stale(
        &self,
        task_id: Uuid,
        live_remote_ids: &[String],
    ) -> Result<u64, RepositoryError>;
}
