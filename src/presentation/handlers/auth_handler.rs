// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::auth_request::OAuthCallbackDto;
use crate::application::dto::auth_response::MeDto;
use crate::domain::models::user::User;
use crate::domain::services::auth_service::AuthService;
use crate::presentation::cookies::{
    clear_oauth_state_cookie, clear_session_cookie, oauth_state_cookie, read_cookie,
    session_cookie, OAUTH_STATE_COOKIE, SESSION_COOKIE,
};
use crate::presentation::errors::AppError;
use axum::extract::{Extension, Query};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Redirects to the identity provider's consent screen
///
/// The anti-forgery state is pinned in a short-lived cookie so the
/// callback can reject forged responses.
pub async fn login(
    Extension(auth_service): Extension<Arc<AuthService>>,
) -> Result<Response, AppError> {
    let (url, state) = auth_service.login_redirect();

    let mut response = Redirect::temporary(&url).into_response();
    response
        .headers_mut()
        .append(SET_COOKIE, HeaderValue::from_str(&oauth_state_cookie(&state))?);

    Ok(response)
}

/// Completes the OAuth code flow and installs the session cookie
pub async fn callback(
    Extension(auth_service): Extension<Arc<AuthService>>,
    headers: HeaderMap,
    Query(query): Query<OAuthCallbackDto>,
) -> Result<Response, AppError> {
    if query.error.is_some() {
        return Err(AppError::from(anyhow::anyhow!(
            "Access denied: sign-in was cancelled"
        )));
    }

    let code = match query.code.as_deref().filter(|code| !code.is_empty()) {
        Some(code) => code.to_string(),
        None => {
            return Err(AppError::from(anyhow::anyhow!(
                "Authorization code is required"
            )))
        }
    };

    let pinned_state = read_cookie(&headers, OAUTH_STATE_COOKIE);
    if pinned_state.is_none() || query.state != pinned_state {
        return Err(AppError::from(anyhow::anyhow!("Invalid OAuth state")));
    }

    let (user, token) = auth_service.complete_login(&code).await?;
    info!("User {} logged in", user.email);

    let ttl_days = auth_service.session_ttl_days();
    let mut response = Json(MeDto::from_user(&user)).into_response();
    let response_headers = response.headers_mut();
    response_headers.append(
        SET_COOKIE,
        HeaderValue::from_str(&session_cookie(&token, ttl_days))?,
    );
    response_headers.append(
        SET_COOKIE,
        HeaderValue::from_str(&clear_oauth_state_cookie())?,
    );

    Ok(response)
}

/// Deletes the session row and clears the cookie
pub async fn logout(
    Extension(auth_service): Extension<Arc<AuthService>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(token) = read_cookie(&headers, SESSION_COOKIE) {
        auth_service.logout(&token).await?;
    }

    let mut response = Json(json!({ "success": true })).into_response();
    response
        .headers_mut()
        .append(SET_COOKIE, HeaderValue::from_str(&clear_session_cookie())?);

    Ok(response)
}

/// Returns the profile of the authenticated user
pub async fn me(Extension(user): Extension<User>) -> Json<MeDto> {
    Json(MeDto::from_user(&user))
}
