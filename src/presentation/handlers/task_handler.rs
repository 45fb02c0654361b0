// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::parse_code;
use crate::application::dto::task_request::{CreateTaskDto, TransitionTaskDto};
use crate::application::dto::task_response::{
    SyncResponseDto, TaskDetailDto, TaskDto, TransitionDto,
};
use crate::domain::models::partner::Partner;
use crate::domain::models::task::{Task, TaskType};
use crate::domain::models::user::User;
use crate::domain::repositories::partner_repository::PartnerRepository;
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::services::sync_service::{NewTaskInput, SyncService};
use crate::presentation::errors::AppError;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Lists tasks newest-first with embedded creator and partner data
pub async fn list_tasks<T, U, P>(
    Extension(task_repo): Extension<Arc<T>>,
    Extension(user_repo): Extension<Arc<U>>,
    Extension(partner_repo): Extension<Arc<P>>,
) -> Result<Json<Vec<TaskDto>>, AppError>
where
    T: TaskRepository,
    U: UserRepository,
    P: PartnerRepository,
{
    let tasks = task_repo.list_recent().await?;
    let rows = load_task_dtos(&tasks, user_repo.as_ref(), partner_repo.as_ref()).await?;
    Ok(Json(rows))
}

/// Creates a task together with its tracker issue
pub async fn create_task<P>(
    Extension(sync_service): Extension<Arc<SyncService>>,
    Extension(partner_repo): Extension<Arc<P>>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateTaskDto>,
) -> Result<(StatusCode, Json<TaskDto>), AppError>
where
    P: PartnerRepository,
{
    let summary = match request
        .summary
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(summary) => summary.to_string(),
        None => return Err(AppError::from(anyhow::anyhow!("Summary is required"))),
    };

    let task_type = parse_code::<TaskType>(request.task_type.as_deref(), "taskType")?;

    let task = sync_service
        .create_task(
            NewTaskInput {
                summary,
                description: request.description,
                priority: request.priority,
                task_type,
                partner_id: request.partner_id,
            },
            user.id,
        )
        .await?;

    let partner = match task.partner_id {
        Some(partner_id) => partner_repo.find_by_id(partner_id).await?,
        None => None,
    };

    Ok((
        StatusCode::CREATED,
        Json(TaskDto::from_task(&task, Some(&user), partner.as_ref())),
    ))
}

/// Returns one task and its done-category transitions
pub async fn get_task<T, U, P>(
    Extension(sync_service): Extension<Arc<SyncService>>,
    Extension(task_repo): Extension<Arc<T>>,
    Extension(user_repo): Extension<Arc<U>>,
    Extension(partner_repo): Extension<Arc<P>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskDetailDto>, AppError>
where
    T: TaskRepository,
    U: UserRepository,
    P: PartnerRepository,
{
    let task = task_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Task not found"))?;

    let transitions = sync_service.available_transitions(&task).await?;

    let creator = user_repo.find_by_id(task.user_id).await?;
    let partner = match task.partner_id {
        Some(partner_id) => partner_repo.find_by_id(partner_id).await?,
        None => None,
    };

    Ok(Json(TaskDetailDto {
        task: TaskDto::from_task(&task, creator.as_ref(), partner.as_ref()),
        transitions: transitions
            .iter()
            .map(TransitionDto::from_transition)
            .collect(),
    }))
}

/// Executes a workflow transition and refreshes the local status
pub async fn transition_task<U, P>(
    Extension(sync_service): Extension<Arc<SyncService>>,
    Extension(user_repo): Extension<Arc<U>>,
    Extension(partner_repo): Extension<Arc<P>>,
    Path(id): Path<Uuid>,
    Json(request): Json<TransitionTaskDto>,
) -> Result<Json<TaskDto>, AppError>
where
    U: UserRepository,
    P: PartnerRepository,
{
    let transition_id = match request
        .transition_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(transition_id) => transition_id.to_string(),
        None => return Err(AppError::from(anyhow::anyhow!("Transition ID is required"))),
    };

    let task = sync_service.transition_task(id, &transition_id).await?;

    let creator = user_repo.find_by_id(task.user_id).await?;
    let partner = match task.partner_id {
        Some(partner_id) => partner_repo.find_by_id(partner_id).await?,
        None => None,
    };

    Ok(Json(TaskDto::from_task(
        &task,
        creator.as_ref(),
        partner.as_ref(),
    )))
}

/// Runs a full reconciliation pass and returns the refreshed listing
pub async fn sync_tasks<T, U, P>(
    Extension(sync_service): Extension<Arc<SyncService>>,
    Extension(task_repo): Extension<Arc<T>>,
    Extension(user_repo): Extension<Arc<U>>,
    Extension(partner_repo): Extension<Arc<P>>,
    Extension(user): Extension<User>,
) -> Result<Json<SyncResponseDto>, AppError>
where
    T: TaskRepository,
    U: UserRepository,
    P: PartnerRepository,
{
    let outcome = sync_service.sync_all(user.id).await?;

    let tasks = task_repo.list_recent().await?;
    let rows = load_task_dtos(&tasks, user_repo.as_ref(), partner_repo.as_ref()).await?;

    Ok(Json(SyncResponseDto {
        message: outcome.summary(),
        synced: outcome.synced,
        created: outcome.created,
        updated: outcome.updated,
        tasks: rows,
    }))
}

/// Joins tasks with their creators and partners, memoizing lookups
async fn load_task_dtos<U, P>(
    tasks: &[Task],
    user_repo: &U,
    partner_repo: &P,
) -> Result<Vec<TaskDto>, RepositoryError>
where
    U: UserRepository,
    P: PartnerRepository,
{
    let mut users: HashMap<Uuid, Option<User>> = HashMap::new();
    let mut partners: HashMap<Uuid, Option<Partner>> = HashMap::new();
    let mut rows = Vec::with_capacity(tasks.len());

    for task in tasks {
        if !users.contains_key(&task.user_id) {
            let user = user_repo.find_by_id(task.user_id).await?;
            users.insert(task.user_id, user);
        }
        let creator = users.get(&task.user_id).and_then(|user| user.as_ref());

        let partner = match task.partner_id {
            Some(partner_id) => {
                if !partners.contains_key(&partner_id) {
                    let partner = partner_repo.find_by_id(partner_id).await?;
                    partners.insert(partner_id, partner);
                }
                partners
                    .get(&partner_id)
                    .and_then(|partner| partner.as_ref())
            }
            None => None,
        };

        rows.push(TaskDto::from_task(task, creator, partner));
    }

    Ok(rows)
}
