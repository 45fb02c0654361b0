// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::Extension;
use metrics_exporter_prometheus::PrometheusHandle;

/// Renders the Prometheus exposition text
///
/// Responds with an empty body when no recorder could be installed at
/// startup.
pub async fn metrics(Extension(handle): Extension<Option<PrometheusHandle>>) -> String {
    match handle {
        Some(handle) => handle.render(),
        None => String::new(),
    }
}
