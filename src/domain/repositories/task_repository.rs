// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::Task;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Repository error type
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// Record not found
    #[error("Record not found")]
    NotFound,
    /// Unique constraint violated
    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Task repository trait
///
/// Defines the task data access interface
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Creates a new task; a duplicate issue key yields `Conflict`
    async fn create(&self, task: &Task) -> Result<Task, RepositoryError>;
    /// Finds a task by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, RepositoryError>;
    /// Finds a task by its external issue key
    async fn find_by_issue_key(&self, issue_key: &str) -> Result<Option<Task>, RepositoryError>;
    /// Lists all tasks, newest first
    async fn list_recent(&self) -> Result<Vec<Task>, RepositoryError>;
    /// Lists the newest tasks of one partner
    async fn list_recent_by_partner(
        &self,
        partner_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Task>, RepositoryError>;
    /// Overwrites a task row
    async fn update(&self, task: &Task) -> Result<Task, RepositoryError>;
    /// Counts the tasks referencing one partner
    async fn count_by_partner(&self, partner_id: Uuid) -> Result<u64, RepositoryError>;
    /// Counts tasks per partner across all partners
    async fn count_grouped_by_partner(&self) -> Result<Vec<(Uuid, i64)>, RepositoryError>;
}
