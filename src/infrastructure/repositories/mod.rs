// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Repository implementation module
///
/// Provides the concrete database-backed implementations of the
/// domain repository interfaces.
pub mod comment_repo_impl;
pub mod partner_repo_impl;
pub mod session_repo_impl;
pub mod task_repo_impl;
pub mod user_repo_impl;
