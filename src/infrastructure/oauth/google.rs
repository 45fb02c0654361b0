// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::AuthSettings;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Google's consent page
const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
/// Google's code-for-token exchange endpoint
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
/// OpenID Connect userinfo endpoint
const USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Profile returned by the identity provider after a completed code flow
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthProfile {
    /// Verified account email
    pub email: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar image URL
    #[serde(default)]
    pub picture: Option<String>,
}

/// Token exchange response, reduced to what the profile fetch needs
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// OAuth provider trait
///
/// Covers the two provider-facing steps of the login flow; everything
/// between them (state cookie, user provisioning, session issue) is
/// the auth service's concern.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Consent URL the login endpoint redirects to
    fn authorize_url(&self, state: &str) -> String;
    /// Exchanges an authorization code and fetches the account profile
    async fn exchange_code(&self, code: &str) -> Result<OAuthProfile>;
}

/// Google OAuth client
pub struct GoogleOAuthClient {
    /// HTTP client
    client: reqwest::Client,
    /// OAuth credentials and redirect target
    settings: AuthSettings,
}

impl GoogleOAuthClient {
    /// Creates a new Google OAuth client
    pub fn new(settings: AuthSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, settings }
    }
}

/// Drains a failed response into an error with the upstream text intact
async fn upstream_error(operation: &str, response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    anyhow!("{} failed with status {}: {}", operation, status, body)
}

#[async_trait]
impl OAuthProvider for GoogleOAuthClient {
    fn authorize_url(&self, state: &str) -> String {
        let mut url = Url::parse(AUTH_URL).expect("Invalid consent URL");
        url.query_pairs_mut()
            .append_pair("client_id", &self.settings.google_client_id)
            .append_pair("redirect_uri", &self.settings.redirect_url)
            .append_pair("response_type", "code")
            .append_pair("scope", "openid email profile")
            .append_pair("state", state);

        url.to_string()
    }

    async fn exchange_code(&self, code: &str) -> Result<OAuthProfile> {
        let response = self
            .client
            .post(TOKEN_URL)
            .form(&[
                ("code", code),
                ("client_id", &self.settings.google_client_id),
                ("client_secret", &self.settings.google_client_secret),
                ("redirect_uri", &self.settings.redirect_url),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error("Token exchange", response).await);
        }

        let token: TokenResponse = response.json().await?;

        let response = self
            .client
            .get(USERINFO_URL)
            .bearer_auth(&token.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error("Profile fetch", response).await);
        }

        Ok(response.json().await?)
    }
}
