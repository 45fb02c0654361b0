// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::auth_service::AuthService;
use crate::presentation::cookies::{read_cookie, SESSION_COOKIE};
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;

use std::sync::Arc;

/// State shared with the session guard
#[derive(Clone)]
pub struct AuthState {
    /// Authentication service resolving cookies to users
    pub auth_service: Arc<AuthService>,
}

/// Session guard middleware
///
/// Resolves the session cookie to a user and rejects requests that
/// carry no valid session. Sessions of 2FA-enabled users must pass the
/// TOTP challenge before any route other than the challenge itself.
///
/// # Arguments
///
/// * `state` - Guard state
/// * `req` - HTTP request
/// * `next` - Next middleware
pub async fn auth_middleware(State(state): State<AuthState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path();
    debug!("Session guard processing path: {}", path);

    // Allow public endpoints
    if matches!(
        path,
        "/health" | "/version" | "/metrics" | "/auth/login" | "/auth/callback"
    ) {
        return next.run(req).await;
    }

    let token = match read_cookie(req.headers(), SESSION_COOKIE) {
        Some(token) => token,
        None => return unauthorized("Authentication required"),
    };

    match state.auth_service.session_user(&token).await {
        Ok(Some((user, session))) => {
            if !session.totp_verified && path != "/2fa/verify" {
                return unauthorized("Two-factor verification required");
            }
            req.extensions_mut().insert(user);
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        Ok(None) => {
            tracing::warn!("Rejected request with unknown or expired session");
            unauthorized("Authentication required")
        }
        Err(e) => {
            tracing::error!("Database error resolving session: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": message })),
    )
        .into_response()
}
