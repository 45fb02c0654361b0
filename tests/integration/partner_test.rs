// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

/// Creating a partner returns the stored row with a generated upload
/// key and a zero task count.
#[tokio::test]
async fn test_create_partner_returns_created_row() {
    let app = create_test_app().await;
    let token = app.login().await;

    let partner = app
        .create_partner(
            &token,
            json!({
                "name": "Acme Ltd",
                "platform": "WHMCS",
                "partnerType": "AFFILIATE",
                "commission": 12.5,
                "hasLandingPage": true,
                "contactEmail": "ops@acme.example"
            }),
        )
        .await;

    assert_eq!(partner["name"], "Acme Ltd");
    assert_eq!(partner["platform"], "WHMCS");
    assert_eq!(partner["partnerType"], "AFFILIATE");
    assert_eq!(partner["partnerStatus"], "PRE_SALES");
    assert_eq!(partner["commission"], 12.5);
    assert_eq!(partner["hasLandingPage"], true);
    assert_eq!(partner["taskCount"], 0);

    let upload_key = partner["uploadKey"].as_str().unwrap();
    assert_eq!(upload_key.len(), 32);
    assert!(upload_key.bytes().all(|b| b.is_ascii_alphanumeric()));
}

/// A missing or blank name is rejected before anything is stored.
#[tokio::test]
async fn test_create_partner_requires_name() {
    let app = create_test_app().await;
    let token = app.login().await;

    for body in [json!({}), json!({ "name": "   " })] {
        let response = app
            .server
            .post("/partners")
            .add_header("Cookie", format!("session={}", token))
            .json(&body)
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let error: Value = response.json();
        assert_eq!(error["error"], "Partner name is required");
    }
}

#[tokio::test]
async fn test_create_partner_rejects_duplicate_name() {
    let app = create_test_app().await;
    let token = app.login().await;
    app.create_partner(&token, json!({ "name": "Acme Ltd" }))
        .await;

    let response = app
        .server
        .post("/partners")
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "name": "Acme Ltd" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["error"], "A partner with this name already exists");
}

#[tokio::test]
async fn test_create_partner_rejects_unknown_codes() {
    let app = create_test_app().await;
    let token = app.login().await;

    let response = app
        .server
        .post("/partners")
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "name": "Acme Ltd", "platform": "MAINFRAME" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["error"], "Invalid platform value");
}

/// The commission column only ever holds a value for affiliates.
#[tokio::test]
async fn test_commission_is_dropped_for_non_affiliates() {
    let app = create_test_app().await;
    let token = app.login().await;

    let partner = app
        .create_partner(
            &token,
            json!({ "name": "Broker House", "partnerType": "BROKER", "commission": 10.0 }),
        )
        .await;

    assert_eq!(partner["commission"], Value::Null);
}

#[tokio::test]
async fn test_list_partners_filters_and_sorts() {
    let app = create_test_app().await;
    let token = app.login().await;

    app.create_partner(
        &token,
        json!({ "name": "Alpha", "platform": "WHMCS", "partnerStatus": "INACTIVE" }),
    )
    .await;
    app.create_partner(
        &token,
        json!({ "name": "Beta", "platform": "BROKER_PANEL", "partnerStatus": "LIVE" }),
    )
    .await;
    app.create_partner(
        &token,
        json!({ "name": "Gamma", "platform": "WHMCS", "partnerStatus": "PRE_SALES" }),
    )
    .await;

    // Default listing sorts by name ascending
    let response = app
        .server
        .get("/partners")
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let rows: Vec<Value> = response.json();
    let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);

    // Platform filter matches stored codes verbatim
    let response = app
        .server
        .get("/partners")
        .add_query_param("platform", "WHMCS")
        .add_header("Cookie", format!("session={}", token))
        .await;
    let rows: Vec<Value> = response.json();
    let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Alpha", "Gamma"]);

    // Name search is a case-insensitive substring match
    let response = app
        .server
        .get("/partners")
        .add_query_param("search", "ETA")
        .add_header("Cookie", format!("session={}", token))
        .await;
    let rows: Vec<Value> = response.json();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Beta");

    // Status ordering groups live partnerships first
    let response = app
        .server
        .get("/partners")
        .add_query_param("sortBy", "partnerStatus")
        .add_header("Cookie", format!("session={}", token))
        .await;
    let rows: Vec<Value> = response.json();
    let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Beta", "Gamma", "Alpha"]);

    let response = app
        .server
        .get("/partners")
        .add_query_param("sortOrder", "desc")
        .add_header("Cookie", format!("session={}", token))
        .await;
    let rows: Vec<Value> = response.json();
    let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Gamma", "Beta", "Alpha"]);
}

/// The detail view carries the task count and the five most recent
/// tasks of the partner.
#[tokio::test]
async fn test_get_partner_detail_includes_recent_tasks() {
    let app = create_test_app().await;
    let token = app.login().await;
    let user_id = app.current_user_id(&token).await;

    let partner = app.create_partner(&token, json!({ "name": "Acme Ltd" })).await;
    let partner_id = uuid::Uuid::parse_str(partner["id"].as_str().unwrap()).unwrap();

    app.seed_task("PART-1", Some(partner_id), user_id).await;
    app.seed_task("PART-2", Some(partner_id), user_id).await;

    let response = app
        .server
        .get(&format!("/partners/{}", partner_id))
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let detail: Value = response.json();
    assert_eq!(detail["name"], "Acme Ltd");
    assert_eq!(detail["taskCount"], 2);
    let tasks = detail["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(tasks[0]["issueKey"].as_str().unwrap().starts_with("PART-"));
}

#[tokio::test]
async fn test_get_partner_unknown_id_is_not_found() {
    let app = create_test_app().await;
    let token = app.login().await;

    let response = app
        .server
        .get(&format!("/partners/{}", uuid::Uuid::new_v4()))
        .add_header("Cookie", format!("session={}", token))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let error: Value = response.json();
    assert_eq!(error["error"], "Partner not found");
}

/// Absent fields stay untouched, blank strings clear nullable fields
/// and the upload key survives every edit.
#[tokio::test]
async fn test_update_partner_patch_semantics() {
    let app = create_test_app().await;
    let token = app.login().await;

    let partner = app
        .create_partner(
            &token,
            json!({ "name": "Acme Ltd", "platform": "WHMCS", "notes": "legacy notes" }),
        )
        .await;
    let id = partner["id"].as_str().unwrap().to_string();
    let upload_key = partner["uploadKey"].as_str().unwrap().to_string();

    // Blank string clears a nullable field, everything else is untouched
    let response = app
        .server
        .patch(&format!("/partners/{}", id))
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "notes": "" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["notes"], Value::Null);
    assert_eq!(updated["platform"], "WHMCS");
    assert_eq!(updated["uploadKey"], upload_key.as_str());

    // Absent fields are not modified
    let response = app
        .server
        .patch(&format!("/partners/{}", id))
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "platform": "PARTNER_PORTAL" }))
        .await;
    let updated: Value = response.json();
    assert_eq!(updated["platform"], "PARTNER_PORTAL");
    assert_eq!(updated["notes"], Value::Null);
    assert_eq!(updated["uploadKey"], upload_key.as_str());

    // The status column is not nullable, so a blank value is ignored
    let response = app
        .server
        .patch(&format!("/partners/{}", id))
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "partnerStatus": "" }))
        .await;
    let updated: Value = response.json();
    assert_eq!(updated["partnerStatus"], "PRE_SALES");

    // A provided-but-blank name is an error, not a clear
    let response = app
        .server
        .patch(&format!("/partners/{}", id))
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "name": "  " }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["error"], "Partner name is required");
}

#[tokio::test]
async fn test_update_partner_commission_follows_type() {
    let app = create_test_app().await;
    let token = app.login().await;

    let partner = app
        .create_partner(
            &token,
            json!({ "name": "Acme Ltd", "partnerType": "AFFILIATE", "commission": 20.0 }),
        )
        .await;
    let id = partner["id"].as_str().unwrap().to_string();
    assert_eq!(partner["commission"], 20.0);

    // An affiliate keeps its commission when the patch leaves it out
    let response = app
        .server
        .patch(&format!("/partners/{}", id))
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "notes": "still an affiliate" }))
        .await;
    let updated: Value = response.json();
    assert_eq!(updated["commission"], 20.0);

    // Switching away from affiliate wipes the commission
    let response = app
        .server
        .patch(&format!("/partners/{}", id))
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "partnerType": "BROKER" }))
        .await;
    let updated: Value = response.json();
    assert_eq!(updated["partnerType"], "BROKER");
    assert_eq!(updated["commission"], Value::Null);
}

#[tokio::test]
async fn test_update_partner_rejects_duplicate_name() {
    let app = create_test_app().await;
    let token = app.login().await;
    app.create_partner(&token, json!({ "name": "Acme Ltd" }))
        .await;
    let other = app
        .create_partner(&token, json!({ "name": "Beta Corp" }))
        .await;
    let other_id = other["id"].as_str().unwrap().to_string();

    let response = app
        .server
        .patch(&format!("/partners/{}", other_id))
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "name": "Acme Ltd" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["error"], "A partner with this name already exists");

    // Re-submitting the unchanged name is not a conflict
    let response = app
        .server
        .patch(&format!("/partners/{}", other_id))
        .add_header("Cookie", format!("session={}", token))
        .json(&json!({ "name": "Beta Corp" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

/// Partners with tasks cannot be deleted; the error names the exact
/// task count.
#[tokio::test]
async fn test_delete_partner_guarded_by_task_count() {
    let app = create_test_app().await;
    let token = app.login().await;
    let user_id = app.current_user_id(&token).await;

    let partner = app.create_partner(&token, json!({ "name": "Acme Ltd" })).await;
    let partner_id = uuid::Uuid::parse_str(partner["id"].as_str().unwrap()).unwrap();
    app.seed_task("PART-1", Some(partner_id), user_id).await;
    app.seed_task("PART-2", Some(partner_id), user_id).await;

    let response = app
        .server
        .delete(&format!("/partners/{}", partner_id))
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(
        error["error"],
        "Cannot delete partner with 2 associated tasks. Reassign tasks first."
    );

    // The singular form for a single task
    let single = app.create_partner(&token, json!({ "name": "Solo" })).await;
    let single_id = uuid::Uuid::parse_str(single["id"].as_str().unwrap()).unwrap();
    app.seed_task("PART-3", Some(single_id), user_id).await;

    let response = app
        .server
        .delete(&format!("/partners/{}", single_id))
        .add_header("Cookie", format!("session={}", token))
        .await;
    let error: Value = response.json();
    assert_eq!(
        error["error"],
        "Cannot delete partner with 1 associated task. Reassign tasks first."
    );
}

#[tokio::test]
async fn test_delete_partner_without_tasks_succeeds() {
    let app = create_test_app().await;
    let token = app.login().await;

    let partner = app.create_partner(&token, json!({ "name": "Acme Ltd" })).await;
    let id = partner["id"].as_str().unwrap().to_string();

    let response = app
        .server
        .delete(&format!("/partners/{}", id))
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);

    let response = app
        .server
        .get(&format!("/partners/{}", id))
        .add_header("Cookie", format!("session={}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
