// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Partner creation request DTO
///
/// Client-supplied fields for a new partner. The upload key is always
/// generated server-side and cannot be set through this payload.
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartnerDto {
    /// Partner display name, required and globally unique
    pub name: Option<String>,
    /// Hosting platform code
    pub platform: Option<String>,
    /// Commercial relationship code
    pub partner_type: Option<String>,
    /// Configuration profile code
    pub config: Option<String>,
    /// Lifecycle status code, defaults to `PRE_SALES`
    pub partner_status: Option<String>,
    /// Whether a landing page has been built
    pub has_landing_page: Option<bool>,
    /// Support channel used to reach the partner
    pub support_channel: Option<String>,
    /// Primary contact name
    pub contact_name: Option<String>,
    /// Primary contact email
    pub contact_email: Option<String>,
    /// Commission percentage, only stored when the type is `AFFILIATE`
    #[validate(range(min = 0.0, max = 100.0))]
    pub commission: Option<f64>,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Partner update request DTO
///
/// Every field is optional and absent fields are left untouched. Blank
/// strings clear the stored value. The upload key is immutable and the
/// commission is forced to null unless the resulting partner type is
/// `AFFILIATE`.
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePartnerDto {
    /// New partner name, still unique across partners
    pub name: Option<String>,
    /// Hosting platform code
    pub platform: Option<String>,
    /// Commercial relationship code
    pub partner_type: Option<String>,
    /// Configuration profile code
    pub config: Option<String>,
    /// Lifecycle status code
    pub partner_status: Option<String>,
    /// Whether a landing page has been built
    pub has_landing_page: Option<bool>,
    /// Support channel used to reach the partner
    pub support_channel: Option<String>,
    /// Primary contact name
    pub contact_name: Option<String>,
    /// Primary contact email
    pub contact_email: Option<String>,
    /// Commission percentage, only stored when the type is `AFFILIATE`
    #[validate(range(min = 0.0, max = 100.0))]
    pub commission: Option<f64>,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Partner list query parameters
///
/// Filters are exact matches against the stored codes. The name search
/// is applied case-insensitively in application code.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerQueryDto {
    /// Case-insensitive substring match on the partner name
    pub search: Option<String>,
    /// Platform code filter
    pub platform: Option<String>,
    /// Partner type code filter
    pub partner_type: Option<String>,
    /// Lifecycle status code filter
    pub status: Option<String>,
    /// Sort column: `name`, `dateAdded` or `partnerStatus`
    pub sort_by: Option<String>,
    /// Sort direction: `asc` or `desc`
    pub sort_order: Option<String>,
}
