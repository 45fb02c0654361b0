// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Partner entity
///
/// Represents a business partner that tasks can be associated with.
/// Partners carry classification enums, contact details and an opaque
/// upload key that external systems use to submit files on the
/// partner's behalf. The key is generated once at creation and is
/// never rotated by an edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
    /// Unique partner identifier
    pub id: Uuid,
    /// Partner display name, globally unique
    pub name: String,
    /// Opaque upload key, globally unique
    pub upload_key: String,
    /// Date the partnership was established
    pub date_added: DateTime<FixedOffset>,
    /// Hosting platform the partner runs on
    pub platform: Option<Platform>,
    /// Commercial relationship classification
    pub partner_type: Option<PartnerType>,
    /// Configuration profile applied to the partner's deployment
    pub config: Option<PartnerConfig>,
    /// Lifecycle status of the partnership
    pub partner_status: PartnerStatus,
    /// Whether a landing page has been built for the partner
    pub has_landing_page: bool,
    /// Support channel used to reach the partner
    pub support_channel: Option<String>,
    /// Primary contact name
    pub contact_name: Option<String>,
    /// Primary contact email
    pub contact_email: Option<String>,
    /// Commission percentage, only meaningful for affiliates
    pub commission: Option<f64>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<FixedOffset>,
    /// Last update timestamp
    pub updated_at: DateTime<FixedOffset>,
}

impl Partner {
    /// Creates a new partner with default classification values
    ///
    /// # Arguments
    ///
    /// * `name` - Partner display name
    /// * `upload_key` - Generated upload key
    ///
    /// # Returns
    ///
    /// A new partner in the `PreSales` status
    pub fn new(name: String, upload_key: String) -> Self {
        let now: DateTime<FixedOffset> = Utc::now().into();
        Self {
            id: Uuid::new_v4(),
            name,
            upload_key,
            date_added: now,
            platform: None,
            partner_type: None,
            config: None,
            partner_status: PartnerStatus::default(),
            has_landing_page: false,
            support_channel: None,
            contact_name: None,
            contact_email: None,
            commission: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the commission rule: only affiliate partners carry a
    /// commission percentage, every other type stores null.
    pub fn effective_commission(
        partner_type: Option<PartnerType>,
        commission: Option<f64>,
    ) -> Option<f64> {
        match partner_type {
            Some(PartnerType::Affiliate) => commission,
            _ => None,
        }
    }
}

/// Hosting platform classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    /// WHMCS billing platform
    Whmcs,
    /// In-house broker panel
    BrokerPanel,
    /// In-house partner portal
    PartnerPortal,
}

impl Platform {
    /// Human-readable display name
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Whmcs => "WHMCS",
            Platform::BrokerPanel => "Broker Panel",
            Platform::PartnerPortal => "Partner Portal",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Platform::Whmcs => write!(f, "WHMCS"),
            Platform::BrokerPanel => write!(f, "BROKER_PANEL"),
            Platform::PartnerPortal => write!(f, "PARTNER_PORTAL"),
        }
    }
}

impl FromStr for Platform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WHMCS" => Ok(Platform::Whmcs),
            "BROKER_PANEL" => Ok(Platform::BrokerPanel),
            "PARTNER_PORTAL" => Ok(Platform::PartnerPortal),
            _ => Err(()),
        }
    }
}

/// Commercial relationship classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartnerType {
    /// Introducing broker
    Broker,
    /// Commission-based affiliate
    Affiliate,
    /// Expert advisor vendor
    Ea,
    /// Anything else
    Other,
}

impl PartnerType {
    /// Human-readable display name
    pub fn label(&self) -> &'static str {
        match self {
            PartnerType::Broker => "Broker",
            PartnerType::Affiliate => "Affiliate",
            PartnerType::Ea => "EA",
            PartnerType::Other => "Other",
        }
    }
}

impl fmt::Display for PartnerType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PartnerType::Broker => write!(f, "BROKER"),
            PartnerType::Affiliate => write!(f, "AFFILIATE"),
            PartnerType::Ea => write!(f, "EA"),
            PartnerType::Other => write!(f, "OTHER"),
        }
    }
}

impl FromStr for PartnerType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BROKER" => Ok(PartnerType::Broker),
            "AFFILIATE" => Ok(PartnerType::Affiliate),
            "EA" => Ok(PartnerType::Ea),
            "OTHER" => Ok(PartnerType::Other),
            _ => Err(()),
        }
    }
}

/// Configuration profile applied to a partner deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartnerConfig {
    /// Restricted feature set
    LockedDown,
    /// Standard feature set
    Standard,
    /// Bespoke configuration
    Custom,
}

impl PartnerConfig {
    /// Human-readable display name
    pub fn label(&self) -> &'static str {
        match self {
            PartnerConfig::LockedDown => "Locked-down",
            PartnerConfig::Standard => "Standard",
            PartnerConfig::Custom => "Custom",
        }
    }
}

impl fmt::Display for PartnerConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PartnerConfig::LockedDown => write!(f, "LOCKED_DOWN"),
            PartnerConfig::Standard => write!(f, "STANDARD"),
            PartnerConfig::Custom => write!(f, "CUSTOM"),
        }
    }
}

impl FromStr for PartnerConfig {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOCKED_DOWN" => Ok(PartnerConfig::LockedDown),
            "STANDARD" => Ok(PartnerConfig::Standard),
            "CUSTOM" => Ok(PartnerConfig::Custom),
            _ => Err(()),
        }
    }
}

/// Lifecycle status of a partnership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartnerStatus {
    /// Still in negotiation
    #[default]
    PreSales,
    /// Being onboarded
    InProgress,
    /// Live and trading
    Live,
    /// Relationship ended or on hold
    Inactive,
}

impl PartnerStatus {
    /// Human-readable display name
    pub fn label(&self) -> &'static str {
        match self {
            PartnerStatus::PreSales => "Pre-sales",
            PartnerStatus::InProgress => "In-Progress",
            PartnerStatus::Live => "LIVE",
            PartnerStatus::Inactive => "Inactive",
        }
    }

    /// Grouping rank, live partnerships first
    pub fn precedence(&self) -> u8 {
        match self {
            PartnerStatus::Live => 0,
            PartnerStatus::InProgress => 1,
            PartnerStatus::PreSales => 2,
            PartnerStatus::Inactive => 3,
        }
    }
}

impl fmt::Display for PartnerStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PartnerStatus::PreSales => write!(f, "PRE_SALES"),
            PartnerStatus::InProgress => write!(f, "IN_PROGRESS"),
            PartnerStatus::Live => write!(f, "LIVE"),
            PartnerStatus::Inactive => write!(f, "INACTIVE"),
        }
    }
}

impl FromStr for PartnerStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRE_SALES" => Ok(PartnerStatus::PreSales),
            "IN_PROGRESS" => Ok(PartnerStatus::InProgress),
            "LIVE" => Ok(PartnerStatus::Live),
            "INACTIVE" => Ok(PartnerStatus::Inactive),
            _ => Err(()),
        }
    }
}
