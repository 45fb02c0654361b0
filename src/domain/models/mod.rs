// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain model module
///
/// Defines the core business entities of the system:
/// - Partner (partner): a business partner tasks belong to
/// - Task (task): local mirror of an external tracker issue
/// - Comment (comment): local mirror of a tracker issue comment
/// - User (user): staff identity authenticated by the identity provider
/// - Session (session): database-backed login session
///
/// These models are the data backbone of the system and define the
/// structure and behavior of its business concepts.
pub mod comment;
pub mod partner;
pub mod session;
pub mod task;
pub mod user;
