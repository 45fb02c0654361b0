// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP request handler module
///
/// One handler module per resource; each maps requests onto the domain
/// services and repositories and shapes the JSON responses.
pub mod auth_handler;
pub mod comment_handler;
pub mod metrics_handler;
pub mod partner_handler;
pub mod task_handler;
pub mod two_factor_handler;
