// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// User entity
///
/// Local identity for a staff member. Authentication happens at the
/// identity provider; a row is created on first login and the profile
/// fields are refreshed on every subsequent login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User unique identifier
    pub id: Uuid,
    /// Email address, globally unique
    pub email: String,
    /// Display name from the identity provider
    pub name: Option<String>,
    /// Avatar image URL from the identity provider
    pub image: Option<String>,
    /// Authorization role
    pub role: UserRole,
    /// Base32 TOTP secret, set once 2FA setup has been initiated
    pub totp_secret: Option<String>,
    /// Whether the TOTP challenge is required at login
    pub totp_enabled: bool,
    /// Creation timestamp
    pub created_at: DateTime<FixedOffset>,
    /// Last update timestamp
    pub updated_at: DateTime<FixedOffset>,
}

impl User {
    /// Creates a new user with the default role and 2FA disabled
    pub fn new(email: String, name: Option<String>, image: Option<String>) -> Self {
        let now: DateTime<FixedOffset> = Utc::now().into();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            image,
            role: UserRole::default(),
            totp_secret: None,
            totp_enabled: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Authorization role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular staff member
    #[default]
    User,
    /// Unrestricted administrator
    Superadmin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UserRole::User => write!(f, "user"),
            UserRole::Superadmin => write!(f, "superadmin"),
        }
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "superadmin" => Ok(UserRole::Superadmin),
            _ => Err(()),
        }
    }
}
