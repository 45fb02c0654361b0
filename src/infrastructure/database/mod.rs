// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Database module
///
/// Provides the connection pool and the entity definitions.
pub mod connection;
pub mod entities;
