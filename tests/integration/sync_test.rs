// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, issue_json, mock_search};
use axum::http::StatusCode;
use partner_tracker::domain::models::task::TaskType;
use partner_tracker::domain::repositories::task_repository::TaskRepository;
use serde_json::{json, Value};

/// A full sync turns every tracked issue into a local task, recovering
/// the partner association and task type from the labels.
#[tokio::test]
async fn test_sync_creates_tasks_from_tracked_issues() {
    let app = create_test_app().await;
    let token = app.login().await;
    let partner = app.create_partner(&token, json!({ "name": "Acme Ltd" })).await;
    let partner_id = partner["id"].as_str().unwrap().to_string();

    mock_search(
        &app.tracker,
        vec![
            issue_json(
                "10010",
                "PART-10",
                "Provision sandbox",
                "To Do",
                &["partner-tasks", "partner:Acme-Ltd", "type:INFRASTRUCTURE"],
            ),
            issue_json(
                "10011",
                "PART-11",
                "Untagged request",
                "In Progress",
                &["partner-tasks"],
            ),
        ],
    )
    .await;

    let response = app
        .server
        .post("/tasks/sync")
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["message"], "Synced 2 tasks (2 created, 0 updated)");
    assert_eq!(body["synced"], 2);
    assert_eq!(body["created"], 2);
    assert_eq!(body["updated"], 0);

    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    for task in tasks {
        match task["issueKey"].as_str().unwrap() {
            "PART-10" => {
                assert_eq!(task["partnerId"], partner_id.as_str());
                assert_eq!(task["taskType"], "INFRASTRUCTURE");
                assert_eq!(task["partner"]["name"], "Acme Ltd");
            }
            "PART-11" => {
                assert_eq!(task["partnerId"], Value::Null);
                assert_eq!(task["taskType"], Value::Null);
            }
            other => panic!("unexpected issue key {}", other),
        }
        assert!(task["lastSyncedAt"].is_string());
    }
}

/// A second run over an unchanged tracker refreshes rows in place and
/// creates nothing.
#[tokio::test]
async fn test_sync_is_idempotent() {
    let app = create_test_app().await;
    let token = app.login().await;

    mock_search(
        &app.tracker,
        vec![issue_json(
            "10010",
            "PART-10",
            "Provision sandbox",
            "To Do",
            &["partner-tasks"],
        )],
    )
    .await;

    let response = app
        .server
        .post("/tasks/sync")
        .add_header("Cookie", format!("session={}", token))
        .await;
    let first: Value = response.json();
    assert_eq!(first["created"], 1);

    let original = app
        .task_repo
        .find_by_issue_key("PART-10")
        .await
        .unwrap()
        .unwrap();

    let response = app
        .server
        .post("/tasks/sync")
        .add_header("Cookie", format!("session={}", token))
        .await;
    let second: Value = response.json();
    assert_eq!(second["message"], "Synced 1 tasks (0 created, 1 updated)");
    assert_eq!(second["created"], 0);
    assert_eq!(second["updated"], 1);

    // The same row was refreshed, not replaced
    let refreshed = app
        .task_repo
        .find_by_issue_key("PART-10")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(refreshed.id, original.id);
    assert_eq!(second["tasks"].as_array().unwrap().len(), 1);
}

/// Sync overwrites the tracker-authoritative fields but never
/// reassigns a partner or task type that is already set locally.
#[tokio::test]
async fn test_sync_fills_gaps_without_reassigning() {
    let app = create_test_app().await;
    let token = app.login().await;
    let user_id = app.current_user_id(&token).await;

    let alpha = app.create_partner(&token, json!({ "name": "Alpha" })).await;
    let alpha_id = uuid::Uuid::parse_str(alpha["id"].as_str().unwrap()).unwrap();
    app.create_partner(&token, json!({ "name": "Beta Corp" }))
        .await;

    let mut task = app.seed_task("PART-1", Some(alpha_id), user_id).await;
    task.task_type = Some(TaskType::Other);
    app.task_repo.update(&task).await.unwrap();

    // Upstream labels point somewhere else and the summary moved on
    mock_search(
        &app.tracker,
        vec![issue_json(
            "id-PART-1",
            "PART-1",
            "Renamed upstream",
            "In Progress",
            &["partner-tasks", "partner:Beta-Corp", "type:INFRASTRUCTURE"],
        )],
    )
    .await;

    let response = app
        .server
        .post("/tasks/sync")
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let stored = app.task_repo.find_by_id(task.id).await.unwrap().unwrap();
    assert_eq!(stored.summary, "Renamed upstream");
    assert_eq!(stored.status, "In Progress");
    assert_eq!(stored.partner_id, Some(alpha_id));
    assert_eq!(stored.task_type, Some(TaskType::Other));
}

/// Null local fields are recovered from the labels, matching partner
/// slugs case-insensitively; an unknown slug stays unassigned.
#[tokio::test]
async fn test_sync_recovers_null_fields_from_labels() {
    let app = create_test_app().await;
    let token = app.login().await;
    let user_id = app.current_user_id(&token).await;

    let partner = app.create_partner(&token, json!({ "name": "Acme Ltd" })).await;
    let partner_id = uuid::Uuid::parse_str(partner["id"].as_str().unwrap()).unwrap();

    let orphan = app.seed_task("PART-2", None, user_id).await;

    mock_search(
        &app.tracker,
        vec![
            issue_json(
                "id-PART-2",
                "PART-2",
                "PART-2 summary",
                "To Do",
                &["partner-tasks", "partner:acme-ltd", "type:CONFIG_UPDATE"],
            ),
            issue_json(
                "10030",
                "PART-3",
                "Stranger things",
                "To Do",
                &["partner-tasks", "partner:Ghost-Co", "type:OTHER"],
            ),
        ],
    )
    .await;

    let response = app
        .server
        .post("/tasks/sync")
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let recovered = app.task_repo.find_by_id(orphan.id).await.unwrap().unwrap();
    assert_eq!(recovered.partner_id, Some(partner_id));
    assert_eq!(recovered.task_type, Some(TaskType::ConfigUpdate));

    // A slug with no matching partner leaves the association empty
    let stranger = app
        .task_repo
        .find_by_issue_key("PART-3")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stranger.partner_id, None);
    assert_eq!(stranger.task_type, Some(TaskType::Other));
}

/// Tasks whose issue disappeared upstream survive the sync untouched.
#[tokio::test]
async fn test_sync_keeps_vanished_tasks() {
    let app = create_test_app().await;
    let token = app.login().await;
    let user_id = app.current_user_id(&token).await;
    let task = app.seed_task("PART-9", None, user_id).await;

    mock_search(&app.tracker, vec![]).await;

    let response = app
        .server
        .post("/tasks/sync")
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["message"], "Synced 0 tasks (0 created, 0 updated)");

    // The stale mirror still exists and still shows up in the listing
    assert!(app
        .task_repo
        .find_by_id(task.id)
        .await
        .unwrap()
        .is_some());
    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["issueKey"], "PART-9");
}
