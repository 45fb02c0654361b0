// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::AuthSettings;
use crate::domain::models::session::Session;
use crate::domain::models::user::{User, UserRole};
use crate::domain::repositories::session_repository::SessionRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::oauth::google::OAuthProvider;
use crate::utils::two_factor;
use anyhow::{anyhow, Result};
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Pending 2FA enrollment, returned by the setup endpoint
#[derive(Debug, Clone)]
pub struct TwoFactorSetup {
    /// Base32 secret, shown once for manual entry
    pub secret: String,
    /// Provisioning URL for authenticator apps
    pub otpauth_url: String,
}

/// Authentication service
///
/// Owns the login flow around the identity provider: the domain
/// allow-list, user provisioning, session issue and the optional TOTP
/// second factor. Session tokens are opaque; only their SHA-256 hash
/// ever reaches the database.
pub struct AuthService {
    /// Identity provider adapter
    oauth: Arc<dyn OAuthProvider>,
    /// User store
    user_repo: Arc<dyn UserRepository>,
    /// Session store
    session_repo: Arc<dyn SessionRepository>,
    /// Domain allow-list, bootstrap admin and TTL configuration
    settings: AuthSettings,
}

impl AuthService {
    /// Creates a new authentication service instance
    pub fn new(
        oauth: Arc<dyn OAuthProvider>,
        user_repo: Arc<dyn UserRepository>,
        session_repo: Arc<dyn SessionRepository>,
        settings: AuthSettings,
    ) -> Self {
        Self {
            oauth,
            user_repo,
            session_repo,
            settings,
        }
    }

    /// Consent URL plus the anti-forgery state the caller must pin in a
    /// short-lived cookie
    pub fn login_redirect(&self) -> (String, String) {
        let state = hex::encode(rand::random::<[u8; 16]>());
        (self.oauth.authorize_url(&state), state)
    }

    /// Configured session lifetime, used for the cookie max-age
    pub fn session_ttl_days(&self) -> i64 {
        self.settings.session_ttl_days
    }

    /// Completes the code flow: profile fetch, allow-list check, user
    /// provisioning and session issue.
    ///
    /// Returns the user together with the raw session token for the
    /// cookie. Accounts outside the configured email domain are
    /// rejected before any row is written.
    pub async fn complete_login(&self, code: &str) -> Result<(User, String)> {
        let profile = self.oauth.exchange_code(code).await?;

        let domain_suffix = format!("@{}", self.settings.allowed_domain);
        if !profile.email.ends_with(&domain_suffix) {
            tracing::warn!("Rejected sign-in for {}", profile.email);
            return Err(anyhow!("Access denied: email domain not allowed"));
        }

        let user = match self.user_repo.find_by_email(&profile.email).await? {
            Some(mut user) => {
                user.name = profile.name;
                user.image = profile.picture;
                user.updated_at = Utc::now().into();
                self.user_repo.update(&user).await?
            }
            None => {
                let mut user = User::new(profile.email, profile.name, profile.picture);
                if user.email == self.settings.bootstrap_admin_email {
                    user.role = UserRole::Superadmin;
                }
                tracing::info!("Created user {} with role {}", user.email, user.role);
                self.user_repo.create(&user).await?
            }
        };

        let token = generate_token();
        let session = Session::new(
            user.id,
            hash_token(&token),
            !user.totp_enabled,
            self.settings.session_ttl_days,
        );
        self.session_repo.create(&session).await?;

        Ok((user, token))
    }

    /// Resolves a session token to its user and session.
    ///
    /// Missing, expired and orphaned sessions all resolve to `None`;
    /// expired rows are deleted on the way.
    pub async fn session_user(&self, raw_token: &str) -> Result<Option<(User, Session)>> {
        let Some(session) = self
            .session_repo
            .find_by_token_hash(&hash_token(raw_token))
            .await?
        else {
            return Ok(None);
        };

        if session.is_expired() {
            self.session_repo.delete(session.id).await?;
            return Ok(None);
        }

        let Some(user) = self.user_repo.find_by_id(session.user_id).await? else {
            return Ok(None);
        };

        Ok(Some((user, session)))
    }

    /// Deletes the session behind a token; unknown tokens are a no-op
    pub async fn logout(&self, raw_token: &str) -> Result<()> {
        if let Some(session) = self
            .session_repo
            .find_by_token_hash(&hash_token(raw_token))
            .await?
        {
            self.session_repo.delete(session.id).await?;
        }

        Ok(())
    }

    /// Removes expired session rows
    pub async fn purge_expired_sessions(&self) -> Result<u64> {
        let removed = self.session_repo.delete_expired().await?;
        if removed > 0 {
            tracing::info!("Purged {} expired sessions", removed);
        }

        Ok(removed)
    }

    /// Starts 2FA enrollment: a fresh secret is stored unconfirmed and
    /// any previous enrollment is invalidated
    pub async fn initiate_two_factor(&self, user: &User) -> Result<TwoFactorSetup> {
        let secret = two_factor::generate_secret();
        let otpauth_url = two_factor::otpauth_url(&self.settings.totp_issuer, &user.email, &secret);

        let mut updated = user.clone();
        updated.totp_secret = Some(secret.clone());
        updated.totp_enabled = false;
        updated.updated_at = Utc::now().into();
        self.user_repo.update(&updated).await?;

        Ok(TwoFactorSetup {
            secret,
            otpauth_url,
        })
    }

    /// Confirms enrollment with a first valid code and enables 2FA
    pub async fn confirm_two_factor(&self, user: &User, code: &str) -> Result<()> {
        let secret = user
            .totp_secret
            .as_deref()
            .ok_or_else(|| anyhow!("2FA setup not initiated. Please generate QR code first."))?;

        if !two_factor::verify_code(secret, code) {
            return Err(anyhow!("Invalid verification code"));
        }

        let mut updated = user.clone();
        updated.totp_enabled = true;
        updated.updated_at = Utc::now().into();
        self.user_repo.update(&updated).await?;

        tracing::info!("2FA enabled for {}", user.email);
        Ok(())
    }

    /// Disables 2FA and discards the secret
    pub async fn disable_two_factor(&self, user: &User) -> Result<()> {
        let mut updated = user.clone();
        updated.totp_secret = None;
        updated.totp_enabled = false;
        updated.updated_at = Utc::now().into();
        self.user_repo.update(&updated).await?;

        tracing::info!("2FA disabled for {}", user.email);
        Ok(())
    }

    /// Passes the login-time TOTP challenge and upgrades the session
    pub async fn verify_two_factor(
        &self,
        user: &User,
        session: &Session,
        code: &str,
    ) -> Result<()> {
        let Some(secret) = user.totp_secret.as_deref().filter(|_| user.totp_enabled) else {
            return Err(anyhow!("2FA is not enabled for this account"));
        };

        if !two_factor::verify_code(secret, code) {
            return Err(anyhow!("Invalid verification code"));
        }

        Ok(self.session_repo.mark_totp_verified(session.id).await?)
    }
}

/// SHA-256 hex digest of a session token
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Fresh opaque session token, 32 random bytes hex-encoded
fn generate_token() -> String {
    hex::encode(rand::random::<[u8; 32]>())
}

#[cfg(test)]
#[path = "auth_service_test.rs"]
mod tests;
