// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{User, UserRole};
use serde::Serialize;
use uuid::Uuid;

/// Current user profile DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeDto {
    /// User identifier
    pub user_id: Uuid,
    /// Email address
    pub email: String,
    /// Display name
    pub name: Option<String>,
    /// Authorization role
    pub role: UserRole,
    /// Whether the TOTP challenge is required at login
    pub two_factor_enabled: bool,
}

impl MeDto {
    /// Maps a user entity to the profile shape
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            two_factor_enabled: user.totp_enabled,
        }
    }
}

/// 2FA enrollment response DTO
///
/// The otpauth URL is what the authenticator app consumes; rendering it
/// as a QR code is a client concern.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorSetupDto {
    /// Base32-encoded TOTP secret
    pub secret: String,
    /// Provisioning URL for authenticator apps
    pub otpauth_url: String,
    /// Instruction shown to the user
    pub message: String,
}

/// 2FA state change response DTO
#[derive(Debug, Serialize)]
pub struct TwoFactorStatusDto {
    pub success: bool,
    pub message: String,
}

/// Per-session 2FA verification response DTO
#[derive(Debug, Serialize)]
pub struct TwoFactorVerifyDto {
    pub success: bool,
    pub verified: bool,
}
