// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::auth_request::TwoFactorCodeDto;
use crate::application::dto::auth_response::{
    TwoFactorSetupDto, TwoFactorStatusDto, TwoFactorVerifyDto,
};
use crate::domain::models::session::Session;
use crate::domain::models::user::User;
use crate::domain::services::auth_service::AuthService;
use crate::presentation::errors::AppError;
use axum::extract::Extension;
use axum::Json;
use std::sync::Arc;

/// Starts 2FA enrollment and returns the provisioning URL
pub async fn setup_two_factor(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Extension(user): Extension<User>,
) -> Result<Json<TwoFactorSetupDto>, AppError> {
    let setup = auth_service.initiate_two_factor(&user).await?;

    Ok(Json(TwoFactorSetupDto {
        secret: setup.secret,
        otpauth_url: setup.otpauth_url,
        message: "Scan this QR code with Google Authenticator".to_string(),
    }))
}

/// Confirms enrollment with a first valid code
pub async fn confirm_two_factor(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Extension(user): Extension<User>,
    Json(request): Json<TwoFactorCodeDto>,
) -> Result<Json<TwoFactorStatusDto>, AppError> {
    let code = require_code(request)?;
    auth_service.confirm_two_factor(&user, &code).await?;

    Ok(Json(TwoFactorStatusDto {
        success: true,
        message: "Two-factor authentication enabled successfully".to_string(),
    }))
}

/// Disables 2FA for the authenticated user
pub async fn disable_two_factor(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Extension(user): Extension<User>,
) -> Result<Json<TwoFactorStatusDto>, AppError> {
    auth_service.disable_two_factor(&user).await?;

    Ok(Json(TwoFactorStatusDto {
        success: true,
        message: "Two-factor authentication disabled".to_string(),
    }))
}

/// Passes the login-time TOTP challenge for the current session
pub async fn verify_two_factor(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Extension(user): Extension<User>,
    Extension(session): Extension<Session>,
    Json(request): Json<TwoFactorCodeDto>,
) -> Result<Json<TwoFactorVerifyDto>, AppError> {
    let code = require_code(request)?;
    auth_service.verify_two_factor(&user, &session, &code).await?;

    Ok(Json(TwoFactorVerifyDto {
        success: true,
        verified: true,
    }))
}

fn require_code(request: TwoFactorCodeDto) -> Result<String, AppError> {
    match request
        .code
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(code) => Ok(code.to_string()),
        None => Err(AppError::from(anyhow::anyhow!(
            "Verification code is required"
        ))),
    }
}
