// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    create_test_app, create_test_app_for_email, set_cookie_header, set_cookie_value,
};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use partner_tracker::domain::models::session::Session;
use partner_tracker::domain::repositories::session_repository::SessionRepository;
use partner_tracker::domain::repositories::user_repository::UserRepository;
use partner_tracker::domain::services::auth_service::hash_token;
use serde_json::Value;

/// The login redirect carries the anti-forgery state both in the
/// consent URL and in a short-lived cookie.
#[tokio::test]
async fn test_login_redirects_with_state_cookie() {
    let app = create_test_app().await;

    let response = app.server.get("/auth/login").await;
    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);

    let headers = response.headers();
    let location = headers.get(LOCATION).unwrap().to_str().unwrap().to_string();
    assert!(location.starts_with("https://auth.invalid/consent?state="));

    let cookie = set_cookie_header(&response, "oauth_state").unwrap();
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=600"));

    let state = set_cookie_value(&response, "oauth_state").unwrap();
    assert!(location.ends_with(&state));
}

/// The callback installs a month-long session cookie, drops the state
/// cookie and returns the signed-in profile.
#[tokio::test]
async fn test_callback_installs_session_cookie() {
    let app = create_test_app().await;

    let response = app.server.get("/auth/login").await;
    let state = set_cookie_value(&response, "oauth_state").unwrap();

    let response = app
        .server
        .get("/auth/callback")
        .add_query_param("code", "test-code")
        .add_query_param("state", &state)
        .add_header("Cookie", format!("oauth_state={}", state))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let me: Value = response.json();
    assert_eq!(me["email"], "jane@thinkhuge.net");
    assert_eq!(me["name"], "Test User");
    assert_eq!(me["role"], "user");
    assert_eq!(me["twoFactorEnabled"], false);

    let session = set_cookie_header(&response, "session").unwrap();
    assert!(session.contains("HttpOnly"));
    assert!(session.contains("SameSite=Lax"));
    assert!(session.contains("Max-Age=2592000"));

    // The state cookie is cleared in the same response
    let state_cookie = set_cookie_header(&response, "oauth_state").unwrap();
    assert!(state_cookie.starts_with("oauth_state=;"));
    assert!(state_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_callback_rejects_forged_state() {
    let app = create_test_app().await;

    let response = app.server.get("/auth/login").await;
    let state = set_cookie_value(&response, "oauth_state").unwrap();

    // State mismatch
    let response = app
        .server
        .get("/auth/callback")
        .add_query_param("code", "test-code")
        .add_query_param("state", "forged")
        .add_header("Cookie", format!("oauth_state={}", state))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["error"], "Invalid OAuth state");

    // Missing state cookie entirely
    let response = app
        .server
        .get("/auth/callback")
        .add_query_param("code", "test-code")
        .add_query_param("state", &state)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_callback_requires_authorization_code() {
    let app = create_test_app().await;

    let response = app.server.get("/auth/login").await;
    let state = set_cookie_value(&response, "oauth_state").unwrap();

    let response = app
        .server
        .get("/auth/callback")
        .add_query_param("state", &state)
        .add_header("Cookie", format!("oauth_state={}", state))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["error"], "Authorization code is required");
}

#[tokio::test]
async fn test_callback_reports_cancelled_signin() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/auth/callback")
        .add_query_param("error", "access_denied")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let error: Value = response.json();
    assert_eq!(error["error"], "Access denied: sign-in was cancelled");
}

/// Accounts outside the staff domain are denied before anything is
/// written.
#[tokio::test]
async fn test_login_outside_allowed_domain_is_denied() {
    let app = create_test_app_for_email("mallory@attacker.example").await;

    let response = app.server.get("/auth/login").await;
    let state = set_cookie_value(&response, "oauth_state").unwrap();

    let response = app
        .server
        .get("/auth/callback")
        .add_query_param("code", "test-code")
        .add_query_param("state", &state)
        .add_header("Cookie", format!("oauth_state={}", state))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let error: Value = response.json();
    assert_eq!(error["error"], "Access denied: email domain not allowed");

    // No account was provisioned for the rejected login
    let user = app
        .user_repo
        .find_by_email("mallory@attacker.example")
        .await
        .unwrap();
    assert!(user.is_none());
}

/// The configured bootstrap account is promoted on first login, other
/// staff start as plain users.
#[tokio::test]
async fn test_bootstrap_admin_is_promoted_on_first_login() {
    let app = create_test_app_for_email("duff@thinkhuge.net").await;
    let token = app.login().await;

    let response = app
        .server
        .get("/auth/me")
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let me: Value = response.json();
    assert_eq!(me["email"], "duff@thinkhuge.net");
    assert_eq!(me["role"], "superadmin");
}

#[tokio::test]
async fn test_logout_clears_session() {
    let app = create_test_app().await;
    let token = app.login().await;

    let response = app
        .server
        .post("/auth/logout")
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);

    let cookie = set_cookie_header(&response, "session").unwrap();
    assert!(cookie.starts_with("session=;"));
    assert!(cookie.contains("Max-Age=0"));

    // The token is dead server-side, not just in the browser
    let response = app
        .server
        .get("/auth/me")
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_routes_require_a_session() {
    let app = create_test_app().await;

    let response = app.server.get("/partners").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let error: Value = response.json();
    assert_eq!(error["error"], "Authentication required");

    let response = app
        .server
        .get("/partners")
        .add_header("Cookie", "session=not-a-real-token")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_endpoints_skip_the_session_guard() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");

    let response = app.server.get("/version").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(!response.text().is_empty());

    // No recorder is installed in tests, the endpoint still answers
    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

/// A session past its expiry is rejected even though the row still
/// exists when the request arrives.
#[tokio::test]
async fn test_expired_session_is_rejected() {
    let app = create_test_app().await;
    let token = app.login().await;
    let user_id = app.current_user_id(&token).await;

    let stale_token = "0123456789abcdef0123456789abcdef";
    let expired = Session::new(user_id, hash_token(stale_token), true, -1);
    app.session_repo.create(&expired).await.unwrap();

    let response = app
        .server
        .get("/auth/me")
        .add_header("Cookie", format!("session={}", stale_token))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let error: Value = response.json();
    assert_eq!(error["error"], "Authentication required");

    // The lookup dropped the dead row
    let remaining = app
        .session_repo
        .find_by_token_hash(&hash_token(stale_token))
        .await
        .unwrap();
    assert!(remaining.is_none());
}
