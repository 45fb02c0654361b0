// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::parse_code;
use crate::application::dto::partner_request::{
    CreatePartnerDto, PartnerQueryDto, UpdatePartnerDto,
};
use crate::application::dto::partner_response::{PartnerDetailDto, PartnerDto, PartnerTaskDto};
use crate::domain::models::partner::{Partner, PartnerConfig, PartnerStatus, PartnerType, Platform};
use crate::domain::repositories::partner_repository::{
    PartnerQueryParams, PartnerRepository, PartnerSortBy, SortOrder,
};
use crate::domain::repositories::task_repository::TaskRepository;
use crate::presentation::errors::AppError;
use crate::utils::upload_key::generate_upload_key;
use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Number of recent tasks embedded in the partner detail response
const RECENT_TASK_LIMIT: u64 = 5;

/// Lists partners with filtering, sorting and per-partner task counts
pub async fn list_partners<P, T>(
    Extension(partner_repo): Extension<Arc<P>>,
    Extension(task_repo): Extension<Arc<T>>,
    Query(query): Query<PartnerQueryDto>,
) -> Result<Json<Vec<PartnerDto>>, AppError>
where
    P: PartnerRepository,
    T: TaskRepository,
{
    let params = PartnerQueryParams {
        platform: query.platform.filter(|v| !v.is_empty()),
        partner_type: query.partner_type.filter(|v| !v.is_empty()),
        partner_status: query.status.filter(|v| !v.is_empty()),
        sort_by: match query.sort_by.as_deref() {
            Some("dateAdded") => PartnerSortBy::DateAdded,
            Some("partnerStatus") => PartnerSortBy::PartnerStatus,
            _ => PartnerSortBy::Name,
        },
        sort_order: match query.sort_order.as_deref() {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        },
    };

    let mut partners = partner_repo.list(params).await?;

    // Name search stays in application code for SQLite portability
    if let Some(search) = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let needle = search.to_lowercase();
        partners.retain(|partner| partner.name.to_lowercase().contains(&needle));
    }

    let counts: HashMap<Uuid, i64> = task_repo
        .count_grouped_by_partner()
        .await?
        .into_iter()
        .collect();

    let rows = partners
        .iter()
        .map(|partner| {
            PartnerDto::from_partner(partner, counts.get(&partner.id).copied().unwrap_or(0))
        })
        .collect();

    Ok(Json(rows))
}

/// Creates a partner with a server-generated upload key
pub async fn create_partner<P>(
    Extension(partner_repo): Extension<Arc<P>>,
    Json(request): Json<CreatePartnerDto>,
) -> Result<(StatusCode, Json<PartnerDto>), AppError>
where
    P: PartnerRepository,
{
    if let Err(errors) = request.validate() {
        return Err(AppError::from(anyhow::anyhow!(
            "Validation error: {:?}",
            errors
        )));
    }

    let name = match request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(name) => name.to_string(),
        None => return Err(AppError::from(anyhow::anyhow!("Partner name is required"))),
    };

    if partner_repo.find_by_name(&name).await?.is_some() {
        return Err(AppError::from(anyhow::anyhow!(
            "A partner with this name already exists"
        )));
    }

    let mut partner = Partner::new(name, generate_upload_key());
    partner.platform = parse_code::<Platform>(request.platform.as_deref(), "platform")?;
    partner.partner_type =
        parse_code::<PartnerType>(request.partner_type.as_deref(), "partnerType")?;
    partner.config = parse_code::<PartnerConfig>(request.config.as_deref(), "config")?;
    if let Some(status) =
        parse_code::<PartnerStatus>(request.partner_status.as_deref(), "partnerStatus")?
    {
        partner.partner_status = status;
    }
    partner.has_landing_page = request.has_landing_page.unwrap_or(false);
    partner.support_channel = clean(request.support_channel);
    partner.contact_name = clean(request.contact_name);
    partner.contact_email = clean(request.contact_email);
    partner.commission = Partner::effective_commission(partner.partner_type, request.commission);
    partner.notes = clean(request.notes);

    let created = partner_repo.create(&partner).await?;
    info!("Created partner {} ({})", created.name, created.id);

    Ok((
        StatusCode::CREATED,
        Json(PartnerDto::from_partner(&created, 0)),
    ))
}

/// Returns one partner with its task count and five most recent tasks
pub async fn get_partner<P, T>(
    Extension(partner_repo): Extension<Arc<P>>,
    Extension(task_repo): Extension<Arc<T>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PartnerDetailDto>, AppError>
where
    P: PartnerRepository,
    T: TaskRepository,
{
    let partner = partner_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Partner not found"))?;

    let task_count = task_repo.count_by_partner(id).await? as i64;
    let recent = task_repo
        .list_recent_by_partner(id, RECENT_TASK_LIMIT)
        .await?;

    Ok(Json(PartnerDetailDto {
        partner: PartnerDto::from_partner(&partner, task_count),
        tasks: recent.iter().map(PartnerTaskDto::from_task).collect(),
    }))
}

/// Partially updates a partner
///
/// The upload key is never regenerated here and the commission is
/// forced to null unless the resulting partner type is `AFFILIATE`.
pub async fn update_partner<P, T>(
    Extension(partner_repo): Extension<Arc<P>>,
    Extension(task_repo): Extension<Arc<T>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePartnerDto>,
) -> Result<Json<PartnerDto>, AppError>
where
    P: PartnerRepository,
    T: TaskRepository,
{
    if let Err(errors) = request.validate() {
        return Err(AppError::from(anyhow::anyhow!(
            "Validation error: {:?}",
            errors
        )));
    }

    let mut partner = partner_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Partner not found"))?;

    if let Some(name) = request.name {
        let trimmed = name.trim().to_string();
        if trimmed.is_empty() {
            return Err(AppError::from(anyhow::anyhow!("Partner name is required")));
        }
        if trimmed != partner.name && partner_repo.find_by_name(&trimmed).await?.is_some() {
            return Err(AppError::from(anyhow::anyhow!(
                "A partner with this name already exists"
            )));
        }
        partner.name = trimmed;
    }

    if let Some(platform) = request.platform.as_deref() {
        partner.platform = parse_code::<Platform>(Some(platform), "platform")?;
    }
    if let Some(partner_type) = request.partner_type.as_deref() {
        partner.partner_type = parse_code::<PartnerType>(Some(partner_type), "partnerType")?;
    }
    if let Some(config) = request.config.as_deref() {
        partner.config = parse_code::<PartnerConfig>(Some(config), "config")?;
    }
    if let Some(status) =
        parse_code::<PartnerStatus>(request.partner_status.as_deref(), "partnerStatus")?
    {
        partner.partner_status = status;
    }
    if let Some(flag) = request.has_landing_page {
        partner.has_landing_page = flag;
    }
    if let Some(value) = request.support_channel {
        partner.support_channel = clean(Some(value));
    }
    if let Some(value) = request.contact_name {
        partner.contact_name = clean(Some(value));
    }
    if let Some(value) = request.contact_email {
        partner.contact_email = clean(Some(value));
    }
    if let Some(value) = request.notes {
        partner.notes = clean(Some(value));
    }

    // Commission only survives on affiliates
    if partner.partner_type == Some(PartnerType::Affiliate) {
        if request.commission.is_some() {
            partner.commission = request.commission;
        }
    } else {
        partner.commission = None;
    }

    partner.updated_at = Utc::now().into();
    let updated = partner_repo.update(&partner).await?;
    let task_count = task_repo.count_by_partner(id).await? as i64;

    Ok(Json(PartnerDto::from_partner(&updated, task_count)))
}

/// Deletes a partner unless tasks still reference it
pub async fn delete_partner<P, T>(
    Extension(partner_repo): Extension<Arc<P>>,
    Extension(task_repo): Extension<Arc<T>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError>
where
    P: PartnerRepository,
    T: TaskRepository,
{
    let partner = partner_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Partner not found"))?;

    let task_count = task_repo.count_by_partner(id).await?;
    if task_count > 0 {
        let suffix = if task_count == 1 { "" } else { "s" };
        return Err(AppError::from(anyhow::anyhow!(
            "Cannot delete partner with {} associated task{}. Reassign tasks first.",
            task_count,
            suffix
        )));
    }

    partner_repo.delete(id).await?;
    info!("Deleted partner {} ({})", partner.name, partner.id);

    Ok(Json(json!({ "success": true })))
}

/// Trims a client string, storing blanks as nulls
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
