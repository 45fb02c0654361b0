// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Data transfer object module
///
/// Request and response shapes for the HTTP API. Field names follow the
/// camelCase convention of the JSON surface.
pub mod auth_request;
pub mod auth_response;
pub mod comment_request;
pub mod comment_response;
pub mod partner_request;
pub mod partner_response;
pub mod task_request;
pub mod task_response;

use std::str::FromStr;

/// Parses an optional wire code into a domain enum
///
/// Blank values map to `None` so clients can clear a field, unknown
/// codes are rejected with the JSON field name in the message.
pub fn parse_code<T: FromStr>(value: Option<&str>, field: &str) -> anyhow::Result<Option<T>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(code) => T::from_str(code)
            .map(Some)
            .map_err(|_| anyhow::anyhow!("Invalid {} value", field)),
    }
}
