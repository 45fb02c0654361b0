// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Application layer
///
/// Data transfer objects that sit between the HTTP surface and the
/// domain models, keeping wire shapes out of the domain layer.
pub mod dto;
