// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::task_repository::RepositoryError;
use crate::domain::models::user::User;
use async_trait::async_trait;
use uuid::Uuid;

/// User repository trait
///
/// Defines the user data access interface
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user row
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;
    /// Finds a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    /// Finds a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    /// Overwrites a user row
    async fn update(&self, user: &User) -> Result<User, RepositoryError>;
}
