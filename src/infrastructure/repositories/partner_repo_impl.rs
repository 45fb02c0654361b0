// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::partner::Partner;
use crate::domain::repositories::partner_repository::{
    PartnerQueryParams, PartnerRepository, PartnerSortBy, SortOrder,
};
use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::partner as partner_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

/// Partner repository implementation
///
/// SeaORM-backed partner data access layer
#[derive(Clone)]
pub struct PartnerRepositoryImpl {
    /// Database connection
    db: Arc<DatabaseConnection>,
}

impl PartnerRepositoryImpl {
    /// Creates a new partner repository instance
    ///
    /// # Arguments
    ///
    /// * `db` - Database connection
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<partner_entity::Model> for Partner {
    fn from(model: partner_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            upload_key: model.upload_key,
            date_added: model.date_added,
            platform: model.platform.as_deref().and_then(|s| s.parse().ok()),
            partner_type: model.partner_type.as_deref().and_then(|s| s.parse().ok()),
            config: model.config.as_deref().and_then(|s| s.parse().ok()),
            partner_status: model.partner_status.parse().unwrap_or_default(),
            has_landing_page: model.has_landing_page,
            support_channel: model.support_channel,
            contact_name: model.contact_name,
            contact_email: model.contact_email,
            commission: model.commission,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Partner> for partner_entity::ActiveModel {
    fn from(partner: Partner) -> Self {
        Self {
            id: Set(partner.id),
            name: Set(partner.name.clone()),
            upload_key: Set(partner.upload_key.clone()),
            date_added: Set(partner.date_added),
            platform: Set(partner.platform.map(|p| p.to_string())),
            partner_type: Set(partner.partner_type.map(|t| t.to_string())),
            config: Set(partner.config.map(|c| c.to_string())),
            partner_status: Set(partner.partner_status.to_string()),
            has_landing_page: Set(partner.has_landing_page),
            support_channel: Set(partner.support_channel.clone()),
            contact_name: Set(partner.contact_name.clone()),
            contact_email: Set(partner.contact_email.clone()),
            commission: Set(partner.commission),
            notes: Set(partner.notes.clone()),
            created_at: Set(partner.created_at),
            updated_at: Set(partner.updated_at),
        }
    }
}

#[async_trait]
impl PartnerRepository for PartnerRepositoryImpl {
    async fn create(&self, partner: &Partner) -> Result<Partner, RepositoryError> {
        let model: partner_entity::ActiveModel = partner.clone().into();

        match model.insert(self.db.as_ref()).await {
            Ok(_) => Ok(partner.clone()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(RepositoryError::Conflict(
                    "A partner with this name already exists".to_string(),
                )),
                _ => Err(RepositoryError::Database(err)),
            },
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Partner>, RepositoryError> {
        let model = partner_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Partner>, RepositoryError> {
        let model = partner_entity::Entity::find()
            .filter(partner_entity::Column::Name.eq(name))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_upload_key(
        &self,
        upload_key: &str,
    ) -> Result<Option<Partner>, RepositoryError> {
        let model = partner_entity::Entity::find()
            .filter(partner_entity::Column::UploadKey.eq(upload_key))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self, params: PartnerQueryParams) -> Result<Vec<Partner>, RepositoryError> {
        let mut query = partner_entity::Entity::find();

        if let Some(ref platform) = params.platform {
            query = query.filter(partner_entity::Column::Platform.eq(platform.clone()));
        }

        if let Some(ref partner_type) = params.partner_type {
            query = query.filter(partner_entity::Column::PartnerType.eq(partner_type.clone()));
        }

        if let Some(ref partner_status) = params.partner_status {
            query = query.filter(partner_entity::Column::PartnerStatus.eq(partner_status.clone()));
        }

        let order = match params.sort_order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        query = match params.sort_by {
            PartnerSortBy::Name => query.order_by(partner_entity::Column::Name, order),
            PartnerSortBy::DateAdded => query.order_by(partner_entity::Column::DateAdded, order),
            // Status ordering follows the precedence ranking, applied below
            PartnerSortBy::PartnerStatus => query.order_by(partner_entity::Column::Name, Order::Asc),
        };

        let mut partners: Vec<Partner> = query
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        if params.sort_by == PartnerSortBy::PartnerStatus {
            partners.sort_by_key(|p| p.partner_status.precedence());
            if params.sort_order == SortOrder::Desc {
                partners.reverse();
            }
        }

        Ok(partners)
    }

    async fn update(&self, partner: &Partner) -> Result<Partner, RepositoryError> {
        let model: partner_entity::ActiveModel = partner.clone().into();

        let updated_model = model.update(self.db.as_ref()).await?;
        Ok(updated_model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = partner_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
