// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Utility modules
///
/// Shared helpers with no dependencies on the domain layer: telemetry
/// bootstrap, TOTP primitives and upload key generation.
pub mod telemetry;
pub mod two_factor;
pub mod upload_key;
