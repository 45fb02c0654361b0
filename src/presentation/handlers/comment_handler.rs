// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::comment_request::CommentContentDto;
use crate::application::dto::comment_response::CommentDto;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::task_repository::TaskRepository;
use crate::domain::services::sync_service::SyncService;
use crate::presentation::errors::AppError;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Fetches a task's comments from the tracker, mirroring and pruning
/// the local rows in the process
pub async fn list_comments<T>(
    Extension(sync_service): Extension<Arc<SyncService>>,
    Extension(task_repo): Extension<Arc<T>>,
    Path(task_id): Path<Uuid>,
) -> Result<Json<Vec<CommentDto>>, AppError>
where
    T: TaskRepository,
{
    let task = task_repo
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Task not found"))?;

    let comments = sync_service.refresh_comments(&task).await?;

    Ok(Json(
        comments.iter().map(CommentDto::from_comment).collect(),
    ))
}

/// Adds a comment to the tracker issue, then mirrors it locally
pub async fn create_comment<T>(
    Extension(sync_service): Extension<Arc<SyncService>>,
    Extension(task_repo): Extension<Arc<T>>,
    Path(task_id): Path<Uuid>,
    Json(request): Json<CommentContentDto>,
) -> Result<(StatusCode, Json<CommentDto>), AppError>
where
    T: TaskRepository,
{
    let content = require_content(request)?;

    let task = task_repo
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Task not found"))?;

    let comment = sync_service.add_comment(&task, &content).await?;

    Ok((StatusCode::CREATED, Json(CommentDto::from_comment(&comment))))
}

/// Replaces a comment's body in the tracker, then mirrors it locally
pub async fn update_comment<T, C>(
    Extension(sync_service): Extension<Arc<SyncService>>,
    Extension(task_repo): Extension<Arc<T>>,
    Extension(comment_repo): Extension<Arc<C>>,
    Path((task_id, comment_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<CommentContentDto>,
) -> Result<Json<CommentDto>, AppError>
where
    T: TaskRepository,
    C: CommentRepository,
{
    let content = require_content(request)?;

    let task = task_repo
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Task not found"))?;

    let comment = comment_repo
        .find_by_id(comment_id)
        .await?
        .filter(|comment| comment.task_id == task.id)
        .ok_or_else(|| anyhow::anyhow!("Comment not found"))?;

    let updated = sync_service.update_comment(&task, &comment, &content).await?;

    Ok(Json(CommentDto::from_comment(&updated)))
}

/// Deletes a comment from the tracker, then removes the local mirror
pub async fn delete_comment<T, C>(
    Extension(sync_service): Extension<Arc<SyncService>>,
    Extension(task_repo): Extension<Arc<T>>,
    Extension(comment_repo): Extension<Arc<C>>,
    Path((task_id, comment_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, AppError>
where
    T: TaskRepository,
    C: CommentRepository,
{
    let task = task_repo
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Task not found"))?;

    let comment = comment_repo
        .find_by_id(comment_id)
        .await?
        .filter(|comment| comment.task_id == task.id)
        .ok_or_else(|| anyhow::anyhow!("Comment not found"))?;

    sync_service.delete_comment(&task, &comment).await?;

    Ok(Json(json!({ "success": true })))
}

fn require_content(request: CommentContentDto) -> Result<String, AppError> {
    match request
        .content
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(content) => Ok(content.to_string()),
        None => Err(AppError::from(anyhow::anyhow!(
            "Comment content is required"
        ))),
    }
}
