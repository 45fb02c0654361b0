// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Comment create/update request DTO
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CommentContentDto {
    /// Comment body as plain text, required
    pub content: Option<String>,
}
