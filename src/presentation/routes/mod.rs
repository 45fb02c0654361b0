// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::auth_service::AuthService;
use crate::domain::services::sync_service::SyncService;
use crate::infrastructure::repositories::comment_repo_impl::CommentRepositoryImpl;
use crate::infrastructure::repositories::partner_repo_impl::PartnerRepositoryImpl;
use crate::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use crate::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use crate::presentation::handlers::{
    auth_handler, comment_handler, metrics_handler, partner_handler, task_handler,
    two_factor_handler,
};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use axum::{
    extract::Extension,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Builds the application router
///
/// Public routes bypass the session guard; everything else requires a
/// valid session cookie. The same construction backs the binary and
/// the integration tests.
pub fn app(
    auth_service: Arc<AuthService>,
    sync_service: Arc<SyncService>,
    partner_repo: Arc<PartnerRepositoryImpl>,
    task_repo: Arc<TaskRepositoryImpl>,
    user_repo: Arc<UserRepositoryImpl>,
    comment_repo: Arc<CommentRepositoryImpl>,
    metrics_handle: Option<PrometheusHandle>,
) -> Router {
    let auth_state = AuthState {
        auth_service: auth_service.clone(),
    };

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/metrics", get(metrics_handler::metrics))
        .route("/auth/login", get(auth_handler::login))
        .route("/auth/callback", get(auth_handler::callback));

    let protected_routes = Router::new()
        .route("/auth/logout", post(auth_handler::logout))
        .route("/auth/me", get(auth_handler::me))
        .route(
            "/partners",
            get(partner_handler::list_partners::<PartnerRepositoryImpl, TaskRepositoryImpl>)
                .post(partner_handler::create_partner::<PartnerRepositoryImpl>),
        )
        .route(
            "/partners/{id}",
            get(partner_handler::get_partner::<PartnerRepositoryImpl, TaskRepositoryImpl>)
                .patch(
                    partner_handler::update_partner::<PartnerRepositoryImpl, TaskRepositoryImpl>,
                )
                .delete(
                    partner_handler::delete_partner::<PartnerRepositoryImpl, TaskRepositoryImpl>,
                ),
        )
        .route(
            "/tasks",
            get(task_handler::list_tasks::<
                TaskRepositoryImpl,
                UserRepositoryImpl,
                PartnerRepositoryImpl,
            >)
            .post(task_handler::create_task::<PartnerRepositoryImpl>),
        )
        .route(
            "/tasks/sync",
            post(
                task_handler::sync_tasks::<
                    TaskRepositoryImpl,
                    UserRepositoryImpl,
                    PartnerRepositoryImpl,
                >,
            ),
        )
        .route(
            "/tasks/{id}",
            get(task_handler::get_task::<
                TaskRepositoryImpl,
                UserRepositoryImpl,
                PartnerRepositoryImpl,
            >)
            .patch(task_handler::transition_task::<UserRepositoryImpl, PartnerRepositoryImpl>),
        )
        .route(
            "/tasks/{id}/comments",
            get(comment_handler::list_comments::<TaskRepositoryImpl>)
                .post(comment_handler::create_comment::<TaskRepositoryImpl>),
        )
        .route(
            "/tasks/{id}/comments/{comment_id}",
            put(comment_handler::update_comment::<TaskRepositoryImpl, CommentRepositoryImpl>)
                .delete(
                    comment_handler::delete_comment::<TaskRepositoryImpl, CommentRepositoryImpl>,
                ),
        )
        .route(
            "/2fa/setup",
            get(two_factor_handler::setup_two_factor)
                .post(two_factor_handler::confirm_two_factor)
                .delete(two_factor_handler::disable_two_factor),
        )
        .route("/2fa/verify", post(two_factor_handler::verify_two_factor));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .layer(Extension(auth_service))
        .layer(Extension(sync_service))
        .layer(Extension(partner_repo))
        .layer(Extension(task_repo))
        .layer(Extension(user_repo))
        .layer(Extension(comment_repo))
        .layer(Extension(metrics_handle))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
