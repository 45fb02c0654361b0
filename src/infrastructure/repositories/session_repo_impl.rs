// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::session::Session;
use crate::domain::repositories::session_repository::SessionRepository;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::session as session_entity;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// Session repository implementation
///
/// SeaORM-backed session data access layer
#[derive(Clone)]
pub struct SessionRepositoryImpl {
    /// Database connection
    db: Arc<DatabaseConnection>,
}

impl SessionRepositoryImpl {
    /// Creates a new session repository instance
    ///
    /// # Arguments
    ///
    /// * `db` - Database connection
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<session_entity::Model> for Session {
    fn from(model: session_entity::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            token_hash: model.token_hash,
            totp_verified: model.totp_verified,
            expires_at: model.expires_at,
            created_at: model.created_at,
        }
    }
}

impl From<Session> for session_entity::ActiveModel {
    fn from(session: Session) -> Self {
        Self {
            id: Set(session.id),
            user_id: Set(session.user_id),
            token_hash: Set(session.token_hash.clone()),
            totp_verified: Set(session.totp_verified),
            expires_at: Set(session.expires_at),
            created_at: Set(session.created_at),
        }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn create(&self, session: &Session) -> Result<Session, RepositoryError> {
        let model: session_entity::ActiveModel = session.clone().into();

        model.insert(self.db.as_ref()).await?;
        Ok(session.clone())
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Session>, RepositoryError> {
        let model = session_entity::Entity::find()
            .filter(session_entity::Column::TokenHash.eq(token_hash))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn mark_totp_verified(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = session_entity::Entity::update_many()
            .col_expr(session_entity::Column::TotpVerified, Expr::value(true))
            .filter(session_entity::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = session_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_expired(&self) -> Result<u64, RepositoryError> {
        let now: DateTime<FixedOffset> = Utc::now().into();
        let result = session_entity::Entity::delete_many()
            .filter(session_entity::Column::ExpiresAt.lt(now))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }
}
