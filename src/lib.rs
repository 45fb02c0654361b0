// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Application module
///
/// Data transfer objects between the HTTP surface and the domain
pub mod application;

/// Configuration module
///
/// Layered settings from files and environment variables
pub mod config;

/// Domain module
///
/// Core business entities, services and repository interfaces
pub mod domain;

/// Infrastructure module
///
/// Database, identity provider and metrics integrations
pub mod infrastructure;

/// Presentation module
///
/// HTTP routing, handlers, middleware and error rendering
pub mod presentation;

/// Tracker module
///
/// REST adapter for the external issue tracker
pub mod tracker;

/// Utility module
///
/// Telemetry, TOTP primitives and key generation helpers
pub mod utils;
