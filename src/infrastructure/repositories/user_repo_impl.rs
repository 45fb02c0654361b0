// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::User;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::database::entities::user as user_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// User repository implementation
///
/// SeaORM-backed user data access layer
#[derive(Clone)]
pub struct UserRepositoryImpl {
    /// Database connection
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    /// Creates a new user repository instance
    ///
    /// # Arguments
    ///
    /// * `db` - Database connection
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<user_entity::Model> for User {
    fn from(model: user_entity::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            image: model.image,
            role: model.role.parse().unwrap_or_default(),
            totp_secret: model.totp_secret,
            totp_enabled: model.totp_enabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<User> for user_entity::ActiveModel {
    fn from(user: User) -> Self {
        Self {
            id: Set(user.id),
            email: Set(user.email.clone()),
            name: Set(user.name.clone()),
            image: Set(user.image.clone()),
            role: Set(user.role.to_string()),
            totp_secret: Set(user.totp_secret.clone()),
            totp_enabled: Set(user.totp_enabled),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let model: user_entity::ActiveModel = user.clone().into();

        model.insert(self.db.as_ref()).await?;
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let model = user_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let model = user_entity::Entity::find()
            .filter(user_entity::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, user: &User) -> Result<User, RepositoryError> {
        let model: user_entity::ActiveModel = user.clone().into();

        let updated_model = model.update(self.db.as_ref()).await?;
        Ok(updated_model.into())
    }
}
