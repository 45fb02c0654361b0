// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain layer
///
/// Business entities, repository interfaces and the services that
/// carry the reconciliation and authentication rules. Nothing in here
/// depends on a concrete database or HTTP stack.
pub mod models;
pub mod repositories;
pub mod services;
