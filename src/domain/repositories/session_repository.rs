// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::task_repository::RepositoryError;
use crate::domain::models::session::Session;
use async_trait::async_trait;
use uuid::Uuid;

/// Session repository trait
///
/// Defines the session data access interface
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Creates a new session row
    async fn create(&self, session: &Session) -> Result<Session, RepositoryError>;
    /// Finds a session by the SHA-256 hash of its token
    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Session>, RepositoryError>;
    /// Marks the session's TOTP challenge as passed
    async fn mark_totp_verified(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Deletes a session row
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Deletes every expired session, returning how many rows were removed
    async fn delete_expired(&self) -> Result<u64, RepositoryError>;
}
