//! Structural validation of a block tree

use super::{AlertKind, Block, BlockNode, Document, InlineSegment, TextAlignment};
use itertools::Itertools;
use std::collections::HashSet;
use thiserror::Error;

/// Problems found in a block tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two blocks share the same id
    #[error("Duplicate block id '{id}'")]
    DuplicateId {
        /// The repeated id
        id: String,
    },

    /// A block has a type the renderer does not handle
    #[error("Block '{id}' has an unsupported type and will not be rendered")]
    UnsupportedBlock {
        /// Id of the offending block
        id: String,
    },

    /// A block contains inline segments of a type the renderer does not handle
    #[error("Block '{id}' has {count} inline segment(s) of an unsupported type")]
    UnsupportedInline {
        /// Id of the offending block
        id: String,
        /// Number of skipped segments
        count: usize,
    },

    /// A block's `textAlignment` is not a known alignment
    #[error("Block '{id}' has an unknown text alignment; the default is used")]
    UnknownAlignment {
        /// Id of the offending block
        id: String,
    },

    /// An alert's `type` is not a known alert kind
    #[error("Alert '{id}' has an unknown type and is rendered without icon")]
    UnknownAlertKind {
        /// Id of the offending block
        id: String,
    },

    /// A block is nested deeper than the renderer will descend
    #[error("Block '{id}' is nested {depth} levels deep (limit is {limit})")]
    TooDeep {
        /// Id of the offending block
        id: String,
        /// Nesting depth of the block (top level is 0)
        depth: usize,
        /// Configured limit
        limit: usize,
    },

    /// Multiple validation errors
    #[error("Multiple validation errors:\n{}", .0.iter().map(|e| format!("  - {e}")).join("\n"))]
    Multiple(Vec<ValidationError>),
}

/// Check a document against the block model invariants
///
/// Every problem is collected; a single problem is returned as-is, several
/// are wrapped in [`ValidationError::Multiple`].
///
/// # Parameters
/// * `document` - The document to check
/// * `max_depth` - Deepest nesting level the renderer descends into
///
/// # Returns
/// * `Ok(())` - Ids are unique, every block type is supported and nesting is within the limit
/// * `Err(ValidationError)` - One or more problems were found
pub fn validate(document: &Document, max_depth: usize) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    let mut stack: Vec<(&BlockNode, usize)> =
        document.blocks.iter().rev().map(|node| (node, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        if !node.id.is_empty() && !seen.insert(node.id.as_str()) && reported.insert(node.id.as_str())
        {
            errors.push(ValidationError::DuplicateId {
                id: node.id.clone(),
            });
        }

        if node.block == Block::Unsupported {
            errors.push(ValidationError::UnsupportedBlock {
                id: node.id.clone(),
            });
        }

        if text_alignment(&node.block) == Some(TextAlignment::Unknown) {
            errors.push(ValidationError::UnknownAlignment {
                id: node.id.clone(),
            });
        }

        if let Block::Alert { props, .. } = &node.block {
            if props.kind == AlertKind::Other {
                errors.push(ValidationError::UnknownAlertKind {
                    id: node.id.clone(),
                });
            }
        }

        let count = unsupported_segments(&node.block);
        if count > 0 {
            errors.push(ValidationError::UnsupportedInline {
                id: node.id.clone(),
                count,
            });
        }

        if depth > max_depth {
            errors.push(ValidationError::TooDeep {
                id: node.id.clone(),
                depth,
                limit: max_depth,
            });
            // Descendants are not reported separately
            continue;
        }

        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

/// The authored alignment of a block, if its type has one
fn text_alignment(block: &Block) -> Option<TextAlignment> {
    match block {
        Block::Paragraph { props, .. }
        | Block::NumberedListItem { props, .. }
        | Block::BulletListItem { props, .. }
        | Block::Table { props, .. } => props.text_alignment,
        Block::Heading { props, .. } => props.text.text_alignment,
        Block::Image { props }
        | Block::Video { props }
        | Block::Audio { props }
        | Block::File { props } => props.text_alignment,
        Block::Alert { props, .. } => props.text_alignment,
        Block::Unsupported => None,
    }
}

/// Number of unsupported segments in a block's inline content, links and table cells included
fn unsupported_segments(block: &Block) -> usize {
    fn count(segments: &[InlineSegment]) -> usize {
        segments
            .iter()
            .map(|segment| match segment {
                InlineSegment::Unsupported => 1,
                InlineSegment::Link { content, .. } => count(content),
                InlineSegment::Text { .. } => 0,
            })
            .sum()
    }

    match block {
        Block::Table { content, .. } => content
            .rows
            .iter()
            .flat_map(|row| &row.cells)
            .map(|cell| count(cell.segments()))
            .sum(),
        block => count(block.inline_content()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_model::{InlineSegment, TextProps};

    fn paragraph(id: &str) -> BlockNode {
        BlockNode::new(
            id,
            Block::Paragraph {
                props: TextProps::default(),
                content: vec![InlineSegment::text(id)],
            },
        )
    }

    #[test]
    fn test_valid_document() {
        let doc = Document::new(vec![paragraph("a"), paragraph("b")]);
        assert_eq!(validate(&doc, 8), Ok(()));
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let doc = Document::new(vec![paragraph("a"), paragraph("a"), paragraph("a")]);
        assert_eq!(
            validate(&doc, 8),
            Err(ValidationError::DuplicateId {
                id: "a".to_string()
            })
        );
    }

    #[test]
    fn test_empty_ids_are_not_duplicates() {
        let doc = Document::new(vec![paragraph(""), paragraph("")]);
        assert_eq!(validate(&doc, 8), Ok(()));
    }

    #[test]
    fn test_nested_too_deep() {
        let doc = Document::new(vec![paragraph("a").with_children(vec![
            paragraph("b").with_children(vec![paragraph("c")]),
        ])]);
        assert_eq!(
            validate(&doc, 1),
            Err(ValidationError::TooDeep {
                id: "c".to_string(),
                depth: 2,
                limit: 1,
            })
        );
        assert_eq!(validate(&doc, 2), Ok(()));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let doc = Document::new(vec![
            paragraph("a"),
            BlockNode::new("x", Block::Unsupported),
            paragraph("a"),
        ]);

        let Err(ValidationError::Multiple(errors)) = validate(&doc, 8) else {
            panic!("expected multiple errors");
        };
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::UnsupportedBlock { .. }));
        assert!(matches!(errors[1], ValidationError::DuplicateId { .. }));

        let message = ValidationError::Multiple(errors).to_string();
        assert!(message.starts_with("Multiple validation errors:"));
        assert!(message.contains("  - Duplicate block id 'a'"));
    }

    #[test]
    fn test_unrecognized_values_reported() {
        let doc = Document::from_json_str(
            r#"[
                {"id": "p", "type": "paragraph", "props": {"textAlignment": "start"},
                 "content": [{"type": "text", "text": "a"}]},
                {"id": "al", "type": "alert", "props": {"type": "note"}, "content": []},
                {"id": "m", "type": "paragraph", "content": [
                    {"type": "mention"},
                    {"type": "link", "href": "x", "content": [{"type": "emoji"}]}
                ]}
            ]"#,
        )
        .unwrap();

        let Err(ValidationError::Multiple(errors)) = validate(&doc, 8) else {
            panic!("expected multiple errors");
        };
        assert_eq!(
            errors,
            vec![
                ValidationError::UnknownAlignment {
                    id: "p".to_string()
                },
                ValidationError::UnknownAlertKind {
                    id: "al".to_string()
                },
                ValidationError::UnsupportedInline {
                    id: "m".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_unsupported_segment_in_table_cell() {
        let doc = Document::from_json_str(
            r#"[{"id": "t", "type": "table", "content": {"rows": [{"cells": [[{"type": "mention"}]]}]}}]"#,
        )
        .unwrap();
        assert_eq!(
            validate(&doc, 8),
            Err(ValidationError::UnsupportedInline {
                id: "t".to_string(),
                count: 1
            })
        );
    }
}
