// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Structured document, the tracker's rich-text wire format
///
/// Descriptions and comment bodies travel in this format. Locally only
/// plain text is stored, so the two functions below convert in both
/// directions and are deliberately lossy: formatting nodes without
/// text content disappear on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextDoc {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: i64,
    #[serde(default)]
    pub content: Vec<RichTextBlock>,
}

/// Block node of a structured document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Vec<RichTextInline>,
}

/// Inline node of a structured document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextInline {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Flattens a structured document to plain text.
///
/// Inline text runs are concatenated per block, blocks that yield no
/// text are dropped, and the remaining blocks are joined with single
/// newlines.
pub fn plain_text(doc: &RichTextDoc) -> String {
    doc.content
        .iter()
        .map(|block| {
            block
                .content
                .iter()
                .filter_map(|inline| inline.text.as_deref())
                .collect::<String>()
        })
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps plain text into a minimal structured document: one paragraph
/// holding one text run.
pub fn document(text: &str) -> RichTextDoc {
    RichTextDoc {
        kind: "doc".to_string(),
        version: 1,
        content: vec![RichTextBlock {
            kind: "paragraph".to_string(),
            content: vec![RichTextInline {
                kind: "text".to_string(),
                text: Some(text.to_string()),
            }],
        }],
    }
}

#[cfg(test)]
#[path = "rich_text_test.rs"]
mod tests;
