// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use migration::{Migrator, MigratorTrait};
use partner_tracker::config::settings::Settings;
use partner_tracker::domain::services::auth_service::AuthService;
use partner_tracker::domain::services::sync_service::SyncService;
use partner_tracker::infrastructure::database::connection;
use partner_tracker::infrastructure::metrics::init_metrics;
use partner_tracker::infrastructure::oauth::google::GoogleOAuthClient;
use partner_tracker::infrastructure::repositories::comment_repo_impl::CommentRepositoryImpl;
use partner_tracker::infrastructure::repositories::partner_repo_impl::PartnerRepositoryImpl;
use partner_tracker::infrastructure::repositories::session_repo_impl::SessionRepositoryImpl;
use partner_tracker::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use partner_tracker::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use partner_tracker::presentation::routes;
use partner_tracker::tracker::rest_client::RestTrackerClient;
use partner_tracker::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Application entry point
///
/// Wires configuration, database, tracker client and identity provider
/// into the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting partner-tracker...");

    // Initialize Prometheus Metrics
    let metrics_handle = init_metrics();

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize repositories
    let partner_repo = Arc::new(PartnerRepositoryImpl::new(db.clone()));
    let task_repo = Arc::new(TaskRepositoryImpl::new(db.clone()));
    let comment_repo = Arc::new(CommentRepositoryImpl::new(db.clone()));
    let user_repo = Arc::new(UserRepositoryImpl::new(db.clone()));
    let session_repo = Arc::new(SessionRepositoryImpl::new(db.clone()));

    // 5. Initialize services
    let tracker = Arc::new(RestTrackerClient::new(settings.tracker.clone()));
    let sync_service = Arc::new(SyncService::new(
        tracker,
        task_repo.clone(),
        partner_repo.clone(),
        comment_repo.clone(),
        settings.tracker.tracking_label.clone(),
    ));

    let oauth = Arc::new(GoogleOAuthClient::new(settings.auth.clone()));
    let auth_service = Arc::new(AuthService::new(
        oauth,
        user_repo.clone(),
        session_repo.clone(),
        settings.auth.clone(),
    ));

    // Expired sessions accumulate between restarts; drop them up front
    auth_service.purge_expired_sessions().await?;

    // 6. Start HTTP server
    let app = routes::app(
        auth_service,
        sync_service,
        partner_repo,
        task_repo,
        user_repo,
        comment_repo,
        metrics_handle,
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
