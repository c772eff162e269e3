//! Block model for editor documents
//!
//! This module defines the structures deserialized from the block editor's
//! JSON output: block nodes, inline segments, table content and the
//! per-type props records. The model is read-only once loaded.

use std::path::Path;

// Submodules
mod block;
mod error;
mod inline;
mod props;
mod table;
mod validation;

// Re-export public types
pub use block::{Block, BlockNode, Blocks, ListKind};
pub use error::LoadError;
pub use inline::{InlineSegment, InlineStyles};
pub use props::{AlertKind, AlertProps, HeadingProps, MediaProps, TextAlignment, TextProps};
pub use table::{CellGroup, TableContent, TableRow};
pub use validation::{validate, ValidationError};

/// A document loaded from disk or received from the backend
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Optional page title
    pub title: Option<String>,

    /// Top-level blocks in display order
    pub blocks: Vec<BlockNode>,
}

/// Object form of a stored page (`{"title": ..., "blocks": [...]}`)
#[derive(serde::Deserialize)]
struct PageRepr {
    #[serde(default)]
    title: Option<String>,
    #[serde(alias = "content")]
    blocks: Vec<BlockNode>,
}

impl Document {
    /// Create a document from a list of top-level blocks
    pub fn new(blocks: Vec<BlockNode>) -> Self {
        Self {
            title: None,
            blocks,
        }
    }

    /// Parse a document from JSON text
    ///
    /// Accepts either a bare array of blocks or a page object carrying
    /// `title` and `blocks`.
    ///
    /// # Parameters
    /// * `json` - The JSON text to parse
    ///
    /// # Returns
    /// * `Ok(Document)` - Successfully parsed document
    /// * `Err(serde_json::Error)` - The text is not valid JSON or does not match the block model
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        if value.is_array() {
            let blocks: Vec<BlockNode> = serde_json::from_value(value)?;
            return Ok(Self::new(blocks));
        }

        let page: PageRepr = serde_json::from_value(value)?;
        Ok(Self {
            title: page.title,
            blocks: page.blocks,
        })
    }

    /// Load a document from a JSON file
    ///
    /// # Parameters
    /// * `path` - Path to the JSON file
    ///
    /// # Returns
    /// * `Ok(Document)` - Successfully loaded document
    /// * `Err(LoadError)` - Error reading or parsing the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Iterate over every block in the document, depth first, in document order
    pub fn iter_blocks(&self) -> Blocks<'_> {
        Blocks::new(&self.blocks)
    }

    /// Total number of blocks, nested ones included
    pub fn block_count(&self) -> usize {
        self.iter_blocks().count()
    }

    /// Number of whitespace-separated words across all textual content
    pub fn word_count(&self) -> usize {
        self.iter_blocks().map(BlockNode::word_count).sum()
    }

    /// Number of image, video, audio and file blocks
    pub fn media_count(&self) -> usize {
        self.iter_blocks().filter(|node| node.block.is_media()).count()
    }

    /// Number of table blocks
    pub fn table_count(&self) -> usize {
        self.iter_blocks()
            .filter(|node| matches!(node.block, Block::Table { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "title": "Getting started",
        "blocks": [
            {
                "id": "p1",
                "type": "paragraph",
                "props": { "textColor": "default", "textAlignment": "left" },
                "content": [ { "type": "text", "text": "Install the tool first", "styles": {} } ],
                "children": []
            },
            {
                "id": "l1",
                "type": "bulletListItem",
                "props": {},
                "content": [ { "type": "text", "text": "one", "styles": {} } ],
                "children": [
                    {
                        "id": "l1a",
                        "type": "bulletListItem",
                        "props": {},
                        "content": [ { "type": "text", "text": "nested item", "styles": {} } ],
                        "children": []
                    }
                ]
            },
            {
                "id": "img",
                "type": "image",
                "props": { "url": "https://x/img.png", "name": "pic", "showPreview": true, "previewWidth": 320 },
                "children": []
            }
        ]
    }"#;

    #[test]
    fn test_parse_page_object() {
        let doc = Document::from_json_str(PAGE).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Getting started"));
        assert_eq!(doc.blocks.len(), 3);
        assert_eq!(doc.blocks[1].children.len(), 1);
    }

    #[test]
    fn test_parse_bare_array() {
        let doc = Document::from_json_str(
            r#"[{"id": "a", "type": "paragraph", "props": {}, "content": []}]"#,
        )
        .unwrap();
        assert!(doc.title.is_none());
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.blocks[0].id, "a");
    }

    #[test]
    fn test_document_statistics() {
        let doc = Document::from_json_str(PAGE).unwrap();
        assert_eq!(doc.block_count(), 4);
        assert_eq!(doc.word_count(), 7);
        assert_eq!(doc.media_count(), 1);
        assert_eq!(doc.table_count(), 0);
    }

    #[test]
    fn test_iter_blocks_is_preorder() {
        let doc = Document::from_json_str(PAGE).unwrap();
        let ids: Vec<&str> = doc.iter_blocks().map(|node| node.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "l1", "l1a", "img"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Document::load("/nonexistent/page.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Document::from_json_str("{ not json").is_err());
        assert!(Document::from_json_str(r#"{"title": "no blocks"}"#).is_err());
    }
}
