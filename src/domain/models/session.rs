// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session entity
///
/// Database-backed login session. Only the SHA-256 hash of the opaque
/// session token is stored; the token itself lives in the browser
/// cookie. Sessions for users with 2FA enabled start unverified and
/// are upgraded after the TOTP challenge passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// SHA-256 hash of the session token, globally unique
    pub token_hash: String,
    /// Whether the TOTP challenge has been passed
    pub totp_verified: bool,
    /// Expiry timestamp
    pub expires_at: DateTime<FixedOffset>,
    /// Creation timestamp
    pub created_at: DateTime<FixedOffset>,
}

impl Session {
    /// Creates a new session for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - Owning user
    /// * `token_hash` - SHA-256 hash of the session token
    /// * `totp_verified` - Initial 2FA verification state
    /// * `ttl_days` - Session lifetime in days
    pub fn new(user_id: Uuid, token_hash: String, totp_verified: bool, ttl_days: i64) -> Self {
        let now: DateTime<FixedOffset> = Utc::now().into();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            totp_verified,
            expires_at: now + Duration::days(ttl_days),
            created_at: now,
        }
    }

    /// Whether the session has passed its expiry timestamp
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}
