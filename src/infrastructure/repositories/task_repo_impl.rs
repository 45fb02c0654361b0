// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::Task;
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use crate::infrastructure::database::entities::task as task_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

/// Task repository implementation
///
/// SeaORM-backed task data access layer
#[derive(Clone)]
pub struct TaskRepositoryImpl {
    /// Database connection
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryImpl {
    /// Creates a new task repository instance
    ///
    /// # Arguments
    ///
    /// * `db` - Database connection
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<task_entity::Model> for Task {
    fn from(model: task_entity::Model) -> Self {
        Self {
            id: model.id,
            issue_key: model.issue_key,
            issue_id: model.issue_id,
            summary: model.summary,
            description: model.description,
            status: model.status,
            priority: model.priority,
            task_type: model.task_type.as_deref().and_then(|s| s.parse().ok()),
            assignee: model.assignee,
            partner_id: model.partner_id,
            user_id: model.user_id,
            last_synced_at: model.last_synced_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Task> for task_entity::ActiveModel {
    fn from(task: Task) -> Self {
        Self {
            id: Set(task.id),
            issue_key: Set(task.issue_key.clone()),
            issue_id: Set(task.issue_id.clone()),
            summary: Set(task.summary.clone()),
            description: Set(task.description.clone()),
            status: Set(task.status.clone()),
            priority: Set(task.priority.clone()),
            task_type: Set(task.task_type.map(|t| t.to_string())),
            assignee: Set(task.assignee.clone()),
            partner_id: Set(task.partner_id),
            user_id: Set(task.user_id),
            last_synced_at: Set(task.last_synced_at),
            created_at: Set(task.created_at),
            updated_at: Set(task.updated_at),
        }
    }
}

#[async_trait]
impl TaskRepository for TaskRepositoryImpl {
    async fn create(&self, task: &Task) -> Result<Task, RepositoryError> {
        let model: task_entity::ActiveModel = task.clone().into();

        match model.insert(self.db.as_ref()).await {
            Ok(_) => Ok(task.clone()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(RepositoryError::Conflict(
                    format!("A task for issue {} already exists", task.issue_key),
                )),
                _ => Err(RepositoryError::Database(err)),
            },
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, RepositoryError> {
        let model = task_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_issue_key(&self, issue_key: &str) -> Result<Option<Task>, RepositoryError> {
        let model = task_entity::Entity::find()
            .filter(task_entity::Column::IssueKey.eq(issue_key))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list_recent(&self) -> Result<Vec<Task>, RepositoryError> {
        let models = task_entity::Entity::find()
            .order_by(task_entity::Column::CreatedAt, Order::Desc)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_recent_by_partner(
        &self,
        partner_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Task>, RepositoryError> {
        let models = task_entity::Entity::find()
            .filter(task_entity::Column::PartnerId.eq(partner_id))
            .order_by(task_entity::Column::CreatedAt, Order::Desc)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, task: &Task) -> Result<Task, RepositoryError> {
        let model: task_entity::ActiveModel = task.clone().into();

        let updated_model = model.update(self.db.as_ref()).await?;
        Ok(updated_model.into())
    }

    async fn count_by_partner(&self, partner_id: Uuid) -> Result<u64, RepositoryError> {
        let count = task_entity::Entity::find()
            .filter(task_entity::Column::PartnerId.eq(partner_id))
            .count(self.db.as_ref())
            .await?;

        Ok(count)
    }

    async fn count_grouped_by_partner(&self) -> Result<Vec<(Uuid, i64)>, RepositoryError> {
        let rows: Vec<(Uuid, i64)> = task_entity::Entity::find()
            .select_only()
            .column(task_entity::Column::PartnerId)
            .column_as(task_entity::Column::Id.count(), "task_count")
            .filter(task_entity::Column::PartnerId.is_not_null())
            .group_by(task_entity::Column::PartnerId)
            .into_tuple()
            .all(self.db.as_ref())
            .await?;

        Ok(rows)
    }
}
