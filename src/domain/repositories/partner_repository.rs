// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::task_repository::RepositoryError;
use crate::domain::models::partner::Partner;
use async_trait::async_trait;
use uuid::Uuid;

/// Partner list sort column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartnerSortBy {
    /// Sort by partner name
    #[default]
    Name,
    /// Sort by the date the partnership was established
    DateAdded,
    /// Sort by lifecycle status, in precedence order
    PartnerStatus,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

/// Partner list query parameters
///
/// Filter values are matched verbatim against the stored codes, so an
/// unknown code matches no rows rather than being rejected.
#[derive(Debug, Default, Clone)]
pub struct PartnerQueryParams {
    pub platform: Option<String>,
    pub partner_type: Option<String>,
    pub partner_status: Option<String>,
    pub sort_by: PartnerSortBy,
    pub sort_order: SortOrder,
}

/// Partner repository trait
///
/// Defines the partner data access interface
#[async_trait]
pub trait PartnerRepository: Send + Sync {
    /// Creates a new partner; a duplicate name or upload key yields `Conflict`
    async fn create(&self, partner: &Partner) -> Result<Partner, RepositoryError>;
    /// Finds a partner by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Partner>, RepositoryError>;
    /// Finds a partner by exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Partner>, RepositoryError>;
    /// Finds a partner by upload key
    async fn find_by_upload_key(&self, upload_key: &str)
        -> Result<Option<Partner>, RepositoryError>;
    /// Lists partners matching the query parameters
    async fn list(&self, params: PartnerQueryParams) -> Result<Vec<Partner>, RepositoryError>;
    /// Overwrites a partner row
    async fn update(&self, partner: &Partner) -> Result<Partner, RepositoryError>;
    /// Deletes a partner row
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
