// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::TrackerSettings;
use crate::tracker::rich_text;
use crate::tracker::traits::TrackerClient;
use crate::tracker::types::{
    CommentList, CreatedIssue, Issue, NewIssue, RemoteComment, SearchResults, Transition,
    TransitionList,
};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::json;
use std::time::Duration;

/// Fields requested when searching tracked issues
const SEARCH_FIELDS: [&str; 8] = [
    "summary",
    "description",
    "status",
    "priority",
    "assignee",
    "created",
    "updated",
    "labels",
];

/// Tracker client
///
/// REST implementation of [`TrackerClient`] against the external
/// tracker's v3 API, authenticating with basic credentials.
pub struct RestTrackerClient {
    /// HTTP client
    client: reqwest::Client,
    /// Endpoint configuration
    settings: TrackerSettings,
}

impl RestTrackerClient {
    /// Creates a new tracker client
    pub fn new(settings: TrackerSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, settings }
    }

    /// Basic authentication header value
    fn auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.settings.email, self.settings.api_token);
        format!("Basic {}", BASE64.encode(credentials))
    }

    /// Absolute URL for an API path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    /// Attaches the common headers to a request
    fn with_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
    }
}

/// Drains a failed response into an error with the upstream text intact
async fn upstream_error(operation: &str, response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    anyhow!("{} failed with status {}: {}", operation, status, body)
}

#[async_trait]
impl TrackerClient for RestTrackerClient {
    async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue> {
        let description = issue
            .description
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(rich_text::document);

        let mut fields = json!({
            "project": { "key": self.settings.project_key },
            "summary": issue.summary,
            "issuetype": { "name": self.settings.issue_type },
            "priority": { "name": issue.priority },
            "labels": issue.labels,
        });

        // An absent description must be omitted, not sent as null
        if let Some(doc) = description {
            fields["description"] = serde_json::to_value(doc)?;
        }

        let body = json!({ "fields": fields });

        let response = self
            .with_headers(self.client.post(self.url("/rest/api/3/issue")))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error("Issue creation", response).await);
        }

        Ok(response.json().await?)
    }

    async fn fetch_issue(&self, issue_key: &str) -> Result<Issue> {
        let response = self
            .with_headers(
                self.client
                    .get(self.url(&format!("/rest/api/3/issue/{}", issue_key))),
            )
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error("Issue fetch", response).await);
        }

        Ok(response.json().await?)
    }

    async fn search_tracked_issues(&self) -> Result<Vec<Issue>> {
        let jql = format!(
            "project = {} AND labels = \"{}\" ORDER BY created DESC",
            self.settings.project_key, self.settings.tracking_label
        );

        let response = self
            .with_headers(self.client.post(self.url("/rest/api/3/search/jql")))
            .json(&json!({
                "jql": jql,
                "fields": SEARCH_FIELDS,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error("Issue search", response).await);
        }

        let results: SearchResults = response.json().await?;
        Ok(results.issues)
    }

    async fn list_transitions(&self, issue_key: &str) -> Result<Vec<Transition>> {
        let response = self
            .with_headers(
                self.client
                    .get(self.url(&format!("/rest/api/3/issue/{}/transitions", issue_key))),
            )
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error("Transition fetch", response).await);
        }

        let list: TransitionList = response.json().await?;
        Ok(list.transitions)
    }

    async fn execute_transition(&self, issue_key: &str, transition_id: &str) -> Result<()> {
        let response = self
            .with_headers(
                self.client
                    .post(self.url(&format!("/rest/api/3/issue/{}/transitions", issue_key))),
            )
            .json(&json!({
                "transition": { "id": transition_id }
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error("Transition", response).await);
        }

        Ok(())
    }

    async fn list_comments(&self, issue_key: &str) -> Result<Vec<RemoteComment>> {
        let response = self
            .with_headers(self.client.get(self.url(&format!(
                "/rest/api/3/issue/{}/comment?orderBy=created",
                issue_key
            ))))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error("Comment fetch", response).await);
        }

        let list: CommentList = response.json().await?;
        Ok(list.comments)
    }

    async fn add_comment(&self, issue_key: &str, body: &str) -> Result<RemoteComment> {
        let response = self
            .with_headers(
                self.client
                    .post(self.url(&format!("/rest/api/3/issue/{}/comment", issue_key))),
            )
            .json(&json!({ "body": rich_text::document(body) }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error("Comment creation", response).await);
        }

        Ok(response.json().await?)
    }

    async fn update_comment(
        &self,
        issue_key: &str,
        comment_id: &str,
        body: &str,
    ) -> Result<RemoteComment> {
        let response = self
            .with_headers(self.client.put(self.url(&format!(
                "/rest/api/3/issue/{}/comment/{}",
                issue_key, comment_id
            ))))
            .json(&json!({ "body": rich_text::document(body) }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error("Comment update", response).await);
        }

        Ok(response.json().await?)
    }

    async fn delete_comment(&self, issue_key: &str, comment_id: &str) -> Result<()> {
        let response = self
            .with_headers(self.client.delete(self.url(&format!(
                "/rest/api/3/issue/{}/comment/{}",
                issue_key, comment_id
            ))))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error("Comment deletion", response).await);
        }

        Ok(())
    }
}
