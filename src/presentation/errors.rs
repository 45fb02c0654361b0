// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::repositories::task_repository::RepositoryError;

/// Application error type
///
/// Wraps every handler-level error and renders the `{"error": message}`
/// JSON shape with a status derived from the error.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = self.0.to_string();
        let lowered = error_message.to_lowercase();

        let status = match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::Database(_db_err)) => StatusCode::INTERNAL_SERVER_ERROR,
            Some(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            Some(RepositoryError::Conflict(_)) => StatusCode::BAD_REQUEST,
            None => {
                if lowered.starts_with("access denied") {
                    StatusCode::UNAUTHORIZED
                } else if lowered.contains("not found") {
                    StatusCode::NOT_FOUND
                } else if lowered.contains("cannot be empty")
                    || lowered.contains("invalid")
                    || lowered.contains("required")
                    || lowered.contains("validation")
                    || lowered.contains("already exists")
                    || lowered.contains("not enabled")
                    || lowered.contains("not initiated")
                    || lowered.contains("cannot delete")
                {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
#[path = "errors_test.rs"]
mod tests;
