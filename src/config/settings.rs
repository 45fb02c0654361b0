// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration settings
///
/// Covers the HTTP server, database pool, external tracker endpoint
/// and the authentication layer
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Database configuration
    pub database: DatabaseSettings,
    /// Server configuration
    pub server: ServerSettings,
    /// External tracker configuration
    pub tracker: TrackerSettings,
    /// Authentication configuration
    pub auth: AuthSettings,
}

/// Database configuration settings
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,
    /// Maximum pool connections
    pub max_connections: Option<u32>,
    /// Minimum pool connections
    pub min_connections: Option<u32>,
    /// Connect timeout in seconds
    pub connect_timeout: Option<u64>,
    /// Idle connection timeout in seconds
    pub idle_timeout: Option<u64>,
}

/// Server configuration settings
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// External tracker configuration settings
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerSettings {
    /// Tracker site base URL, e.g. `https://example.atlassian.net`
    pub base_url: String,
    /// Account email for basic authentication
    pub email: String,
    /// API token for basic authentication
    pub api_token: String,
    /// Project key issues are created under
    pub project_key: String,
    /// Label identifying issues owned by this system
    pub tracking_label: String,
    /// Issue type name for locally-created issues
    pub issue_type: String,
}

/// Authentication configuration settings
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// OAuth client id
    pub google_client_id: String,
    /// OAuth client secret
    pub google_client_secret: String,
    /// Redirect URL registered with the OAuth provider
    pub redirect_url: String,
    /// Email domain allowed to sign in
    pub allowed_domain: String,
    /// Email promoted to superadmin on first sign-in
    pub bootstrap_admin_email: String,
    /// Session lifetime in days
    pub session_ttl_days: i64,
    /// Issuer shown in authenticator apps
    pub totp_issuer: String,
}

impl Settings {
    /// Loads the configuration from files and the environment
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Loaded configuration
    /// * `Err(ConfigError)` - Configuration failure
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB pool settings
            .set_default("database.max_connections", 50)?
            .set_default("database.min_connections", 5)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default tracker settings
            .set_default("tracker.tracking_label", "partner-tasks")?
            .set_default("tracker.issue_type", "Task")?
            // Default auth settings
            .set_default("auth.allowed_domain", "thinkhuge.net")?
            .set_default("auth.bootstrap_admin_email", "duff@thinkhuge.net")?
            .set_default("auth.session_ttl_days", 30)?
            .set_default("auth.totp_issuer", "ThinkHuge B2B Tracker")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PARTNER_TRACKER").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
