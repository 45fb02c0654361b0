// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// TOTP code submission DTO
///
/// Used by 2FA setup confirmation and by the per-session verification
/// challenge.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TwoFactorCodeDto {
    /// Six-digit code from the authenticator app, required
    pub code: Option<String>,
}

/// OAuth callback query parameters
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OAuthCallbackDto {
    /// Authorization code issued by the identity provider
    pub code: Option<String>,
    /// Anti-forgery state echoed back by the provider
    pub state: Option<String>,
    /// Error code when the user denied the consent screen
    pub error: Option<String>,
}
