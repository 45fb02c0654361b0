// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Repository interface module
///
/// Defines the domain layer's repository interfaces, following the
/// dependency inversion principle. The interfaces are the abstract
/// persistence contract; concrete implementations live in the
/// infrastructure layer.
///
/// Included interfaces:
/// - Partner repository (partner_repository): partner records
/// - Task repository (task_repository): task mirror records
/// - Comment repository (comment_repository): comment mirror records
/// - User repository (user_repository): staff identities
/// - Session repository (session_repository): login sessions
pub mod comment_repository;
pub mod partner_repository;
pub mod session_repository;
pub mod task_repository;
pub mod user_repository;
