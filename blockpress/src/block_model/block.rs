//! Block nodes
//!
//! A block node is one unit of authored content. The `type` discriminator
//! of the editor JSON maps onto the [`Block`] enum; `id` and `children`
//! are shared by every block type and live on [`BlockNode`].

use super::inline::InlineSegment;
use super::props::{AlertProps, HeadingProps, MediaProps, TextProps};
use super::table::TableContent;
use serde::Deserialize;

/// One node of the authored content tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlockNode {
    /// Opaque identifier assigned by the editor, used as a render key only
    #[serde(default)]
    pub id: String,

    /// Type-specific payload (props and content)
    #[serde(flatten)]
    pub block: Block,

    /// Nested blocks, in display order
    #[serde(default)]
    pub children: Vec<BlockNode>,
}

/// Type-specific part of a block node, keyed by the JSON `type` field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// A paragraph of inline segments
    Paragraph {
        /// Color and alignment
        #[serde(default)]
        props: TextProps,
        /// Inline text and links
        #[serde(default)]
        content: Vec<InlineSegment>,
    },

    /// A heading of inline segments
    Heading {
        /// Color, alignment and heading level
        #[serde(default)]
        props: HeadingProps,
        /// Inline text and links
        #[serde(default)]
        content: Vec<InlineSegment>,
    },

    /// An item of an ordered list
    NumberedListItem {
        /// Color and alignment
        #[serde(default)]
        props: TextProps,
        /// Inline text and links
        #[serde(default)]
        content: Vec<InlineSegment>,
    },

    /// An item of an unordered list
    BulletListItem {
        /// Color and alignment
        #[serde(default)]
        props: TextProps,
        /// Inline text and links
        #[serde(default)]
        content: Vec<InlineSegment>,
    },

    /// A table of rows and cell groups
    Table {
        /// Color and alignment
        #[serde(default)]
        props: TextProps,
        /// Rows of the table
        #[serde(default)]
        content: TableContent,
    },

    /// An image with optional preview and caption
    Image {
        /// Media props
        #[serde(default)]
        props: MediaProps,
    },

    /// A video with optional preview and caption
    Video {
        /// Media props
        #[serde(default)]
        props: MediaProps,
    },

    /// An audio clip with optional preview and caption
    Audio {
        /// Media props
        #[serde(default)]
        props: MediaProps,
    },

    /// A downloadable file
    File {
        /// Media props
        #[serde(default)]
        props: MediaProps,
    },

    /// A callout box with an icon and a color scheme
    Alert {
        /// Alert kind, colors and alignment
        #[serde(default)]
        props: AlertProps,
        /// Inline text and links
        #[serde(default)]
        content: Vec<InlineSegment>,
    },

    /// Any block type this renderer does not know about
    #[serde(other)]
    Unsupported,
}

/// Ordered vs unordered list items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `numberedListItem`
    Numbered,
    /// `bulletListItem`
    Bullet,
}

impl ListKind {
    /// HTML element wrapping a list of this kind
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Numbered => "ol",
            ListKind::Bullet => "ul",
        }
    }
}

impl Block {
    /// The list kind of a list item block, `None` for every other type
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Block::NumberedListItem { .. } => Some(ListKind::Numbered),
            Block::BulletListItem { .. } => Some(ListKind::Bullet),
            _ => None,
        }
    }

    /// Whether this is an image, video, audio or file block
    pub fn is_media(&self) -> bool {
        matches!(
            self,
            Block::Image { .. } | Block::Video { .. } | Block::Audio { .. } | Block::File { .. }
        )
    }

    /// Inline content of blocks that carry text
    pub fn inline_content(&self) -> &[InlineSegment] {
        match self {
            Block::Paragraph { content, .. }
            | Block::Heading { content, .. }
            | Block::NumberedListItem { content, .. }
            | Block::BulletListItem { content, .. }
            | Block::Alert { content, .. } => content.as_slice(),
            _ => &[],
        }
    }
}

impl BlockNode {
    /// Create a block node without children
    pub fn new(id: impl Into<String>, block: Block) -> Self {
        Self {
            id: id.into(),
            block,
            children: Vec::new(),
        }
    }

    /// Attach nested blocks to this node
    pub fn with_children(mut self, children: Vec<BlockNode>) -> Self {
        self.children = children;
        self
    }

    /// The list kind of this node, if it is a list item
    pub fn list_kind(&self) -> Option<ListKind> {
        self.block.list_kind()
    }

    /// Props and content of a list item, `None` for every other type
    pub fn list_item(&self) -> Option<(&TextProps, &[InlineSegment])> {
        match &self.block {
            Block::NumberedListItem { props, content } | Block::BulletListItem { props, content } => {
                Some((props, content.as_slice()))
            }
            _ => None,
        }
    }

    /// Number of words in this node's own text (children excluded)
    pub fn word_count(&self) -> usize {
        let inline_words: usize = self
            .block
            .inline_content()
            .iter()
            .map(InlineSegment::word_count)
            .sum();

        let table_words: usize = match &self.block {
            Block::Table { content, .. } => content
                .rows
                .iter()
                .flat_map(|row| &row.cells)
                .flat_map(|cell| cell.segments())
                .map(InlineSegment::word_count)
                .sum(),
            _ => 0,
        };

        inline_words + table_words
    }
}

/// Depth-first, pre-order iterator over a block tree
///
/// Uses an explicit stack so arbitrarily deep trees cannot overflow the call stack.
pub struct Blocks<'a> {
    stack: Vec<&'a BlockNode>,
}

impl<'a> Blocks<'a> {
    pub(crate) fn new(roots: &'a [BlockNode]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a BlockNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
