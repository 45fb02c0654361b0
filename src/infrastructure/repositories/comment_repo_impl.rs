// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::comment::Comment;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::comment as comment_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// Comment repository implementation
///
/// SeaORM-backed comment data access layer
#[derive(Clone)]
pub struct CommentRepositoryImpl {
    /// Database connection
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryImpl {
    /// Creates a new comment repository instance
    ///
    /// # Arguments
    ///
    /// * `db` - Database connection
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<comment_entity::Model> for Comment {
    fn from(model: comment_entity::Model) -> Self {
        Self {
            id: model.id,
            remote_id: model.remote_id,
            task_id: model.task_id,
            author_name: model.author_name,
            author_email: model.author_email,
            author_avatar: model.author_avatar,
            body: model.body,
            remote_created_at: model.remote_created_at,
            remote_updated_at: model.remote_updated_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Comment> for comment_entity::ActiveModel {
    fn from(comment: Comment) -> Self {
        Self {
            id: Set(comment.id),
            remote_id: Set(comment.remote_id.clone()),
            task_id: Set(comment.task_id),
            author_name: Set(comment.author_name.clone()),
            author_email: Set(comment.author_email.clone()),
            author_avatar: Set(comment.author_avatar.clone()),
            body: Set(comment.body.clone()),
            remote_created_at: Set(comment.remote_created_at),
            remote_updated_at: Set(comment.remote_updated_at),
            created_at: Set(comment.created_at),
            updated_at: Set(comment.updated_at),
        }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryImpl {
    async fn create(&self, comment: &Comment) -> Result<Comment, RepositoryError> {
        let model: comment_entity::ActiveModel = comment.clone().into();

        model.insert(self.db.as_ref()).await?;
        Ok(comment.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepositoryError> {
        let model = comment_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_remote_id(
        &self,
        remote_id: &str,
    ) -> Result<Option<Comment>, RepositoryError> {
        let model = comment_entity::Entity::find()
            .filter(comment_entity::Column::RemoteId.eq(remote_id))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list_by_task(&self, task_id: Uuid) -> Result<Vec<Comment>, RepositoryError> {
        let models = comment_entity::Entity::find()
            .filter(comment_entity::Column::TaskId.eq(task_id))
            .order_by(comment_entity::Column::RemoteCreatedAt, Order::Asc)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, comment: &Comment) -> Result<Comment, RepositoryError> {
        let model: comment_entity::ActiveModel = comment.clone().into();

        let updated_model = model.update(self.db.as_ref()).await?;
        Ok(updated_model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = comment_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn prune_stale(
        &self,
        task_id: Uuid,
        live_remote_ids: &[String],
    ) -> Result<u64, RepositoryError> {
        let result = comment_entity::Entity::delete_many()
            .filter(comment_entity::Column::TaskId.eq(task_id))
            .filter(comment_entity::Column::RemoteId.is_not_in(live_remote_ids.iter().cloned()))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }
}
