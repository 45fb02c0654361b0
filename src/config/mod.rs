// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Configuration module
///
/// Loads the layered application settings: defaults, config files and
/// environment variable overrides
pub mod settings;
