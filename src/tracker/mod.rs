// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Tracker integration module
///
/// Protocol adapter for the external issue tracker. The adapter is
/// stateless: each method performs exactly one REST call and returns
/// the decoded wire type. Orchestration (create-then-fetch, sync
/// reconciliation) belongs to the domain services.
///
/// Submodules:
/// - traits: the `TrackerClient` interface
/// - rest_client: HTTP implementation of `TrackerClient`
/// - types: wire types shared by the interface and implementation
/// - rich_text: the tracker's structured document format
/// - labels: label side-channel encoding and recovery
pub mod labels;
pub mod rest_client;
pub mod rich_text;
pub mod traits;
pub mod types;
