// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Partner CSV import tool
//!
//! Usage: import-partners <path-to-csv>
//!
//! Upload keys present in the CSV are preserved verbatim. Rows without
//! a key are skipped rather than given a generated one, so links that
//! partners already hold keep working after the import.

use anyhow::Context;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use migration::{Migrator, MigratorTrait};
use partner_tracker::config::settings::Settings;
use partner_tracker::domain::models::partner::{
    Partner, PartnerConfig, PartnerStatus, PartnerType, Platform,
};
use partner_tracker::domain::repositories::partner_repository::PartnerRepository;
use partner_tracker::infrastructure::database::connection;
use partner_tracker::infrastructure::repositories::partner_repo_impl::PartnerRepositoryImpl;
use partner_tracker::utils::telemetry;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// One spreadsheet row, keyed by the export's column headers
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date Added", default)]
    date_added: Option<String>,
    #[serde(rename = "Partner Name", default)]
    name: Option<String>,
    #[serde(rename = "Upload Key", default)]
    upload_key: Option<String>,
    #[serde(rename = "Platform", default)]
    platform: Option<String>,
    #[serde(rename = "Partner Type", default)]
    partner_type: Option<String>,
    #[serde(rename = "Config", default)]
    config: Option<String>,
    #[serde(rename = "Landing Page", default)]
    landing_page: Option<String>,
    #[serde(rename = "Partner Status", default)]
    partner_status: Option<String>,
    #[serde(rename = "Support Channel", default)]
    support_channel: Option<String>,
    #[serde(rename = "Contact Name", default)]
    contact_name: Option<String>,
    #[serde(rename = "Contact Email", default)]
    contact_email: Option<String>,
    #[serde(rename = "Commission", default)]
    commission: Option<String>,
    #[serde(rename = "Notes", default)]
    notes: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();

    let csv_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: import-partners <path-to-csv>");
            std::process::exit(1);
        }
    };

    let settings = Settings::new()?;
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    Migrator::up(db.as_ref(), None).await?;
    let partner_repo = PartnerRepositoryImpl::new(db);

    info!("Reading CSV from: {}", csv_path);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&csv_path)
        .with_context(|| format!("Failed to read file: {}", csv_path))?;

    let mut total = 0usize;
    let mut created = 0usize;
    let mut skipped = 0usize;
    let mut errors = 0usize;
    let mut no_name = 0usize;
    let mut no_key = 0usize;

    for result in reader.deserialize::<CsvRow>() {
        total += 1;
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping malformed row: {}", e);
                errors += 1;
                continue;
            }
        };

        let name = match clean(row.name) {
            Some(name) => name,
            None => {
                no_name += 1;
                continue;
            }
        };
        let upload_key = match clean(row.upload_key) {
            Some(key) => key,
            None => {
                warn!("Skipping \"{}\": no upload key in CSV", name);
                no_key += 1;
                continue;
            }
        };

        if partner_repo.find_by_name(&name).await?.is_some() {
            info!("Skipping \"{}\": already exists", name);
            skipped += 1;
            continue;
        }
        if let Some(existing) = partner_repo.find_by_upload_key(&upload_key).await? {
            warn!(
                "Skipping \"{}\": upload key already in use by \"{}\"",
                name, existing.name
            );
            skipped += 1;
            continue;
        }

        let mut partner = Partner::new(name.clone(), upload_key);
        partner.date_added = parse_date(row.date_added.as_deref());
        partner.platform = row.platform.as_deref().and_then(map_platform);
        partner.partner_type = row.partner_type.as_deref().and_then(map_partner_type);
        partner.config = row.config.as_deref().and_then(map_config);
        partner.partner_status = row
            .partner_status
            .as_deref()
            .and_then(map_status)
            .unwrap_or_default();
        partner.has_landing_page = parse_flag(row.landing_page.as_deref());
        partner.commission = Partner::effective_commission(
            partner.partner_type,
            parse_commission(row.commission.as_deref()),
        );
        partner.support_channel = clean(row.support_channel);
        partner.contact_name = clean(row.contact_name);
        partner.contact_email = clean(row.contact_email);
        partner.notes = clean(row.notes);

        match partner_repo.create(&partner).await {
            Ok(saved) => {
                let key_prefix: String = saved.upload_key.chars().take(8).collect();
                info!("Created: {} ({}...)", saved.name, key_prefix);
                created += 1;
            }
            Err(e) => {
                error!("Failed to import \"{}\": {}", name, e);
                errors += 1;
            }
        }
    }

    println!("========================================");
    println!("Import Summary:");
    println!("========================================");
    println!("Total rows in CSV:     {}", total);
    println!("Rows without name:     {}", no_name);
    println!("Rows without key:      {}", no_key);
    println!("Created:               {}", created);
    println!("Skipped (duplicate):   {}", skipped);
    println!("Errors:                {}", errors);
    println!("========================================");

    Ok(())
}

/// Trims a cell and drops it entirely when blank
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn map_platform(value: &str) -> Option<Platform> {
    match value.trim().to_lowercase().as_str() {
        "whmcs" => Some(Platform::Whmcs),
        "broker panel" => Some(Platform::BrokerPanel),
        "partner portal" => Some(Platform::PartnerPortal),
        _ => None,
    }
}

fn map_partner_type(value: &str) -> Option<PartnerType> {
    match value.trim().to_lowercase().as_str() {
        "broker" => Some(PartnerType::Broker),
        "affiliate" => Some(PartnerType::Affiliate),
        "ea" => Some(PartnerType::Ea),
        "other" => Some(PartnerType::Other),
        _ => None,
    }
}

fn map_config(value: &str) -> Option<PartnerConfig> {
    match value.trim().to_lowercase().as_str() {
        "locked-down" => Some(PartnerConfig::LockedDown),
        "standard" => Some(PartnerConfig::Standard),
        "custom" => Some(PartnerConfig::Custom),
        _ => None,
    }
}

/// Maps spreadsheet status wording, including the legacy phrases the
/// sheet used before the status column was normalized
fn map_status(value: &str) -> Option<PartnerStatus> {
    match value.trim().to_lowercase().as_str() {
        "live" => Some(PartnerStatus::Live),
        "in-progress" => Some(PartnerStatus::InProgress),
        "pre-sales" => Some(PartnerStatus::PreSales),
        "inactive" => Some(PartnerStatus::Inactive),
        "pending requirements" | "pending partner reply" | "build in progress" => {
            Some(PartnerStatus::InProgress)
        }
        "pending contract" => Some(PartnerStatus::PreSales),
        _ => None,
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("yes") | Some("true") | Some("1")
    )
}

/// Accepts "15", "15%" or "12.5", clamped to the valid range
fn parse_commission(value: Option<&str>) -> Option<f64> {
    let cleaned = value?.replace('%', "");
    let number: f64 = cleaned.trim().parse().ok()?;
    Some(number.clamp(0.0, 100.0))
}

/// Parses a YYYY-MM-DD cell, falling back to today
fn parse_date(value: Option<&str>) -> DateTime<FixedOffset> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_else(Utc::now)
        .into()
}
