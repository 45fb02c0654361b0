// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Infrastructure layer module
///
/// Technical implementations behind the domain abstractions: database
/// connection and entity mapping, repository implementations, the
/// identity provider adapter and the metrics recorder.
///
/// The layer depends on the domain's interfaces, never the other way
/// around, keeping business logic free of storage and transport
/// concerns.
pub mod database;
pub mod metrics;
pub mod oauth;
pub mod repositories;
