// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

/// Installs the Prometheus recorder and registers the metric set.
///
/// The returned handle renders the scrape text for `GET /metrics`.
/// Installation fails when a recorder is already registered, which the
/// test harness triggers; in that case metrics are simply disabled.
pub fn init_metrics() -> Option<PrometheusHandle> {
    let builder = PrometheusBuilder::new();

    match builder.install_recorder() {
        Ok(handle) => {
            describe_counter!("sync_runs_total", "Total number of reconciliation runs");
            describe_counter!(
                "sync_tasks_created_total",
                "Tasks created by reconciliation runs"
            );
            describe_counter!(
                "sync_tasks_updated_total",
                "Tasks refreshed by reconciliation runs"
            );
            describe_histogram!(
                "sync_duration_seconds",
                "Duration of reconciliation runs in seconds"
            );

            info!("Metrics recorder installed");
            Some(handle)
        }
        Err(e) => {
            tracing::warn!("Failed to install Prometheus recorder: {}", e);
            None
        }
    }
}
