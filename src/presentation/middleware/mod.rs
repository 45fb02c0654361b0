// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Middleware module
///
/// Session-cookie authentication guard applied to every protected
/// route.
pub mod auth_middleware;
