// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// OAuth module
///
/// Identity provider adapters for the login flow
pub mod google;
