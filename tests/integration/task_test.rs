// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    create_test_app, issue_json, mock_issue_create, mock_issue_fetch, mock_transitions,
};
use axum::http::StatusCode;
use partner_tracker::domain::repositories::task_repository::TaskRepository;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

/// Creating a task posts the issue with the tag side-channel and
/// metadata header, then stores the canonical fields re-fetched from
/// the tracker.
#[tokio::test]
async fn test_create_task_creates_tracker_issue() {
    let app = create_test_app().await;
    let token = app.login().await;
    let partner = app.create_partner(&token, json!({ "name": "Acme Ltd" })).await;
    let partner_id = partner["id"].as_str().unwrap().to_string();

    mock_issue_create(&app.tracker, "10001", "PART-10").await;
    mock_issue_fetch(
        &app.tracker,
        issue_json(
            "10001",
            "PART-10",
            "Configure portal",
            "To Do",
            &["partner-tasks", "partner:Acme-Ltd", "type:CONFIG_UPDATE"],
        ),
    )
    .await;

    let response = app
        .server
        .post("/tasks")
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({
            "summary": "Configure portal",
            "description": "Set up the white-label portal",
            "taskType": "CONFIG_UPDATE",
            "partnerId": partner_id
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let task: Value = response.json();
    assert_eq!(task["issueKey"], "PART-10");
    assert_eq!(task["issueId"], "10001");
    assert_eq!(task["summary"], "Configure portal");
    assert_eq!(task["status"], "To Do");
    assert_eq!(task["priority"], "Medium");
    assert_eq!(task["taskType"], "CONFIG_UPDATE");
    assert_eq!(task["partnerId"], partner_id.as_str());
    // The local row keeps the raw text without the metadata header
    assert_eq!(task["description"], "Set up the white-label portal");
    assert_eq!(task["createdBy"]["name"], "Test User");
    assert_eq!(task["partner"]["name"], "Acme Ltd");

    // The tracker got the labels and the display header
    let requests = app.tracker.received_requests().await.unwrap();
    let create = requests
        .iter()
        .find(|r| r.url.path() == "/rest/api/3/issue")
        .expect("issue creation request not recorded");
    let body: Value = serde_json::from_slice(&create.body).unwrap();
    assert_eq!(
        body["fields"]["labels"],
        json!(["partner-tasks", "partner:Acme-Ltd", "type:CONFIG_UPDATE"])
    );
    let description = serde_json::to_string(&body["fields"]["description"]).unwrap();
    assert!(description.contains("[Partner: Acme Ltd | Type: Config Update]"));
    assert!(description.contains("Set up the white-label portal"));
}

#[tokio::test]
async fn test_create_task_requires_summary() {
    let app = create_test_app().await;
    let token = app.login().await;

    let response = app
        .server
        .post("/tasks")
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "summary": "  " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["error"], "Summary is required");
}

/// An unknown partner id fails before any tracker call, so no orphaned
/// issue can be created.
#[tokio::test]
async fn test_create_task_unknown_partner_skips_tracker() {
    let app = create_test_app().await;
    let token = app.login().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.tracker)
        .await;

    let response = app
        .server
        .post("/tasks")
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "summary": "Orphan", "partnerId": uuid::Uuid::new_v4() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let error: Value = response.json();
    assert_eq!(error["error"], "Partner not found");
}

#[tokio::test]
async fn test_create_task_rejects_unknown_task_type() {
    let app = create_test_app().await;
    let token = app.login().await;

    let response = app
        .server
        .post("/tasks")
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "summary": "Broken", "taskType": "BOGUS" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["error"], "Invalid taskType value");
}

/// The task detail offers only transitions that land in the done
/// status category.
#[tokio::test]
async fn test_get_task_detail_lists_done_transitions() {
    let app = create_test_app().await;
    let token = app.login().await;
    let user_id = app.current_user_id(&token).await;
    let task = app.seed_task("PART-5", None, user_id).await;

    mock_transitions(&app.tracker, "PART-5").await;

    let response = app
        .server
        .get(&format!("/tasks/{}", task.id))
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let detail: Value = response.json();
    assert_eq!(detail["task"]["issueKey"], "PART-5");
    assert_eq!(detail["task"]["createdBy"]["name"], "Test User");
    assert_eq!(detail["task"]["partner"], Value::Null);

    let transitions = detail["transitions"].as_array().unwrap();
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0]["id"], "31");
    assert_eq!(transitions[0]["name"], "Done");
    assert_eq!(transitions[0]["toStatus"], "Done");
}

#[tokio::test]
async fn test_get_task_unknown_id_is_not_found() {
    let app = create_test_app().await;
    let token = app.login().await;

    let response = app
        .server
        .get(&format!("/tasks/{}", uuid::Uuid::new_v4()))
        .add_header("Cookie", format!("session={}", token))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let error: Value = response.json();
    assert_eq!(error["error"], "Task not found");
}

/// Executing a transition re-fetches the issue and stores the status
/// the workflow actually produced.
#[tokio::test]
async fn test_transition_task_refreshes_status() {
    let app = create_test_app().await;
    let token = app.login().await;
    let user_id = app.current_user_id(&token).await;
    let task = app.seed_task("PART-7", None, user_id).await;
    assert_eq!(task.status, "To Do");

    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue/PART-7/transitions"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&app.tracker)
        .await;
    mock_issue_fetch(
        &app.tracker,
        issue_json("id-PART-7", "PART-7", "PART-7 summary", "Done", &["partner-tasks"]),
    )
    .await;

    let response = app
        .server
        .patch(&format!("/tasks/{}", task.id))
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "transitionId": "31" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let updated: Value = response.json();
    assert_eq!(updated["status"], "Done");
    assert!(updated["lastSyncedAt"].is_string());

    let stored = app.task_repo.find_by_id(task.id).await.unwrap().unwrap();
    assert_eq!(stored.status, "Done");
}

#[tokio::test]
async fn test_transition_task_requires_transition_id() {
    let app = create_test_app().await;
    let token = app.login().await;
    let user_id = app.current_user_id(&token).await;
    let task = app.seed_task("PART-8", None, user_id).await;

    let response = app
        .server
        .patch(&format!("/tasks/{}", task.id))
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "transitionId": "  " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["error"], "Transition ID is required");
}

#[tokio::test]
async fn test_list_tasks_embeds_creator_and_partner() {
    let app = create_test_app().await;
    let token = app.login().await;
    let user_id = app.current_user_id(&token).await;
    let partner = app.create_partner(&token, json!({ "name": "Acme Ltd" })).await;
    let partner_id = uuid::Uuid::parse_str(partner["id"].as_str().unwrap()).unwrap();

    app.seed_task("PART-1", Some(partner_id), user_id).await;
    app.seed_task("PART-2", None, user_id).await;

    let response = app
        .server
        .get("/tasks")
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let tasks: Vec<Value> = response.json();
    assert_eq!(tasks.len(), 2);
    for task in &tasks {
        assert_eq!(task["createdBy"]["name"], "Test User");
        match task["issueKey"].as_str().unwrap() {
            "PART-1" => assert_eq!(task["partner"]["name"], "Acme Ltd"),
            "PART-2" => assert_eq!(task["partner"], Value::Null),
            other => panic!("unexpected issue key {}", other),
        }
    }
}
