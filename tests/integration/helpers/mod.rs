// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use chrono::{DateTime, FixedOffset, Utc};
use migration::{Migrator, MigratorTrait};
use partner_tracker::config::settings::{AuthSettings, DatabaseSettings, TrackerSettings};
use partner_tracker::domain::models::task::Task;
use partner_tracker::domain::repositories::task_repository::TaskRepository;
use partner_tracker::domain::services::auth_service::AuthService;
use partner_tracker::domain::services::sync_service::SyncService;
use partner_tracker::infrastructure::database::connection;
use partner_tracker::infrastructure::oauth::google::{OAuthProfile, OAuthProvider};
use partner_tracker::infrastructure::repositories::comment_repo_impl::CommentRepositoryImpl;
use partner_tracker::infrastructure::repositories::partner_repo_impl::PartnerRepositoryImpl;
use partner_tracker::infrastructure::repositories::session_repo_impl::SessionRepositoryImpl;
use partner_tracker::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use partner_tracker::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use partner_tracker::presentation::routes;
use partner_tracker::tracker::rest_client::RestTrackerClient;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Identity provider stub
///
/// Every code exchange resolves to the configured profile, so tests
/// drive the real login flow without touching the network.
struct StubOAuth {
    email: String,
}

#[async_trait]
impl OAuthProvider for StubOAuth {
    fn authorize_url(&self, state: &str) -> String {
        format!("https://auth.invalid/consent?state={}", state)
    }

    async fn exchange_code(&self, _code: &str) -> anyhow::Result<OAuthProfile> {
        Ok(OAuthProfile {
            email: self.email.clone(),
            name: Some("Test User".to_string()),
            picture: None,
        })
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    pub tracker: MockServer,
    pub partner_repo: Arc<PartnerRepositoryImpl>,
    pub task_repo: Arc<TaskRepositoryImpl>,
    pub comment_repo: Arc<CommentRepositoryImpl>,
    pub user_repo: Arc<UserRepositoryImpl>,
    pub session_repo: Arc<SessionRepositoryImpl>,
}

pub async fn create_test_app() -> TestApp {
    create_test_app_for_email("jane@thinkhuge.net").await
}

pub async fn create_test_app_for_email(email: &str) -> TestApp {
    let tracker_server = MockServer::start().await;

    // A single pooled connection keeps the in-memory database alive and
    // shared for the whole test
    let db_settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: Some(5),
        idle_timeout: None,
    };
    let db = Arc::new(
        connection::create_pool(&db_settings)
            .await
            .expect("Failed to open test database"),
    );
    Migrator::up(db.as_ref(), None).await.unwrap();

    let partner_repo = Arc::new(PartnerRepositoryImpl::new(db.clone()));
    let task_repo = Arc::new(TaskRepositoryImpl::new(db.clone()));
    let comment_repo = Arc::new(CommentRepositoryImpl::new(db.clone()));
    let user_repo = Arc::new(UserRepositoryImpl::new(db.clone()));
    let session_repo = Arc::new(SessionRepositoryImpl::new(db.clone()));

    let tracker_settings = TrackerSettings {
        base_url: tracker_server.uri(),
        email: "bot@thinkhuge.net".to_string(),
        api_token: "test-token".to_string(),
        project_key: "PART".to_string(),
        tracking_label: "partner-tasks".to_string(),
        issue_type: "Task".to_string(),
    };
    let tracker = Arc::new(RestTrackerClient::new(tracker_settings));
    let sync_service = Arc::new(SyncService::new(
        tracker,
        task_repo.clone(),
        partner_repo.clone(),
        comment_repo.clone(),
        "partner-tasks".to_string(),
    ));

    let auth_settings = AuthSettings {
        google_client_id: "client-id".to_string(),
        google_client_secret: "client-secret".to_string(),
        redirect_url: "http://localhost:3000/auth/callback".to_string(),
        allowed_domain: "thinkhuge.net".to_string(),
        bootstrap_admin_email: "duff@thinkhuge.net".to_string(),
        session_ttl_days: 30,
        totp_issuer: "ThinkHuge B2B Tracker".to_string(),
    };
    let oauth = Arc::new(StubOAuth {
        email: email.to_string(),
    });
    let auth_service = Arc::new(AuthService::new(
        oauth,
        user_repo.clone(),
        session_repo.clone(),
        auth_settings,
    ));

    let app = routes::app(
        auth_service,
        sync_service,
        partner_repo.clone(),
        task_repo.clone(),
        user_repo.clone(),
        comment_repo.clone(),
        None,
    );

    TestApp {
        server: TestServer::new(app).unwrap(),
        db,
        tracker: tracker_server,
        partner_repo,
        task_repo,
        comment_repo,
        user_repo,
        session_repo,
    }
}

impl TestApp {
    /// Runs the full login flow against the stub provider and returns
    /// the raw session token for the cookie
    pub async fn login(&self) -> String {
        let response = self.server.get("/auth/login").await;
        assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
        let state = set_cookie_value(&response, "oauth_state").expect("missing state cookie");

        let response = self
            .server
            .get("/auth/callback")
            .add_query_param("code", "test-code")
            .add_query_param("state", &state)
            .add_header("Cookie", format!("oauth_state={}", state))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);

        set_cookie_value(&response, "session").expect("missing session cookie")
    }

    /// Creates a partner through the API and returns the response row
    pub async fn create_partner(&self, token: &str, body: Value) -> Value {
        let response = self
            .server
            .post("/partners")
            .add_header("Cookie", format!("session={}", token))
            .json(&body)
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        response.json()
    }

    /// Id of the authenticated user behind a session token
    pub async fn current_user_id(&self, token: &str) -> Uuid {
        let response = self
            .server
            .get("/auth/me")
            .add_header("Cookie", format!("session={}", token))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let me: Value = response.json();
        Uuid::parse_str(me["userId"].as_str().unwrap()).unwrap()
    }

    /// Inserts a task mirror row directly, bypassing the tracker
    pub async fn seed_task(
        &self,
        issue_key: &str,
        partner_id: Option<Uuid>,
        user_id: Uuid,
    ) -> Task {
        let now: DateTime<FixedOffset> = Utc::now().into();
        let task = Task {
            id: Uuid::new_v4(),
            issue_key: issue_key.to_string(),
            issue_id: format!("id-{}", issue_key),
            summary: format!("{} summary", issue_key),
            description: None,
            status: "To Do".to_string(),
            priority: "Medium".to_string(),
            task_type: None,
            assignee: None,
            partner_id,
            user_id,
            last_synced_at: None,
            created_at: now,
            updated_at: now,
        };
        self.task_repo.create(&task).await.unwrap()
    }
}

/// Full Set-Cookie header for a named cookie, attributes included
pub fn set_cookie_header(response: &TestResponse, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    let headers = response.headers();
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with(&prefix))
        .map(|value| value.to_string())
}

/// Value of a named cookie from the response's Set-Cookie headers
pub fn set_cookie_value(response: &TestResponse, name: &str) -> Option<String> {
    let header = set_cookie_header(response, name)?;
    let pair = header.split(';').next()?;
    pair.split_once('=').map(|(_, value)| value.to_string())
}

/// Structured-document payload for a plain text body
pub fn doc(text: &str) -> Value {
    json!({
        "type": "doc",
        "version": 1,
        "content": [{
            "type": "paragraph",
            "content": [{ "type": "text", "text": text }]
        }]
    })
}

/// Issue payload in the tracker's wire shape
pub fn issue_json(id: &str, key: &str, summary: &str, status: &str, labels: &[&str]) -> Value {
    json!({
        "id": id,
        "key": key,
        "fields": {
            "summary": summary,
            "description": null,
            "status": { "name": status },
            "priority": { "name": "Medium" },
            "assignee": null,
            "labels": labels,
        }
    })
}

/// Comment payload in the tracker's wire shape
pub fn comment_json(id: &str, author: &str, text: &str) -> Value {
    json!({
        "id": id,
        "author": {
            "displayName": author,
            "emailAddress": "staff@thinkhuge.net",
            "avatarUrls": { "48x48": "https://avatars.invalid/48.png" }
        },
        "body": doc(text),
        "created": "2026-03-02T09:15:00.000+0000",
        "updated": "2026-03-02T09:15:00.000+0000"
    })
}

/// Mounts the tracked-issue search endpoint with a fixed result set
pub async fn mock_search(tracker: &MockServer, issues: Vec<Value>) {
    Mock::given(method("POST"))
        .and(path("/rest/api/3/search/jql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "issues": issues })))
        .mount(tracker)
        .await;
}

/// Mounts the issue-creation endpoint
pub async fn mock_issue_create(tracker: &MockServer, id: &str, key: &str) {
    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": id, "key": key })))
        .mount(tracker)
        .await;
}

/// Mounts the single-issue fetch endpoint for the issue's key
pub async fn mock_issue_fetch(tracker: &MockServer, issue: Value) {
    let key = issue["key"].as_str().unwrap().to_string();
    Mock::given(method("GET"))
        .and(path(format!("/rest/api/3/issue/{}", key)))
        .respond_with(ResponseTemplate::new(200).set_body_json(issue))
        .mount(tracker)
        .await;
}

/// Mounts the transition listing for an issue: one done-category
/// transition among others
pub async fn mock_transitions(tracker: &MockServer, key: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/rest/api/3/issue/{}/transitions", key)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transitions": [
                {
                    "id": "21",
                    "name": "Start Progress",
                    "to": { "name": "In Progress", "statusCategory": { "key": "indeterminate" } }
                },
                {
                    "id": "31",
                    "name": "Done",
                    "to": { "name": "Done", "statusCategory": { "key": "done" } }
                }
            ]
        })))
        .mount(tracker)
        .await;
}

/// Mounts the comment listing for an issue
pub async fn mock_comments(tracker: &MockServer, key: &str, comments: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(format!("/rest/api/3/issue/{}/comment", key)))
        .and(query_param("orderBy", "created"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "comments": comments })))
        .mount(tracker)
        .await;
}
