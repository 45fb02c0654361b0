// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain services module
///
/// Core business logic services coordinating several domain objects
/// per operation.
///
/// Included services:
/// - Authentication service (auth_service): login flow, sessions and
///   the optional TOTP second factor
/// - Reconciliation service (sync_service): keeps local task and
///   comment mirrors consistent with the external tracker
///
/// Domain services hold pure business rules; transport and storage
/// details stay behind the repository and client traits they consume.
pub mod auth_service;
pub mod sync_service;
