// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Name of the login session cookie
pub const SESSION_COOKIE: &str = "session";

/// Name of the OAuth anti-forgery state cookie
pub const OAUTH_STATE_COOKIE: &str = "oauth_state";

/// Lifetime of the OAuth state cookie in seconds
const OAUTH_STATE_MAX_AGE: i64 = 600;

/// Reads a cookie value from the request headers
///
/// # Arguments
///
/// * `headers` - Request header map
/// * `name` - Cookie name to look up
///
/// # Returns
///
/// The cookie value, or `None` when the cookie is absent
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Builds the `Set-Cookie` value that installs the session cookie
pub fn session_cookie(token: &str, ttl_days: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        ttl_days * 86_400
    )
}

/// Builds the `Set-Cookie` value that clears the session cookie
pub fn clear_session_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE
    )
}

/// Builds the `Set-Cookie` value that installs the OAuth state cookie
pub fn oauth_state_cookie(state: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        OAUTH_STATE_COOKIE, state, OAUTH_STATE_MAX_AGE
    )
}

/// Builds the `Set-Cookie` value that clears the OAuth state cookie
pub fn clear_oauth_state_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        OAUTH_STATE_COOKIE
    )
}
