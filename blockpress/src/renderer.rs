//! HTML renderer for block documents
//!
//! Every renderer is a pure function of its block and a [`RenderContext`];
//! output is appended to a `String`. Nothing here fails: missing or
//! malformed fields degrade to empty output.

use crate::block_model::{Block, BlockNode};
use serde::{Deserialize, Serialize};

mod alert;
mod heading;
mod inline;
mod list;
mod media;
mod page;
mod paragraph;
mod table;

pub use alert::render_alert;
pub use heading::render_heading;
pub use inline::{render_segment, render_segments, InlineOptions};
pub use list::{render_list, render_numbered_list};
pub use media::{render_audio, render_file, render_image, render_media, render_video, MediaKind};
pub use page::render_page;
pub use paragraph::render_paragraph;
pub use table::render_table;

/// Default limit on block and link nesting
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// How nested list items are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    /// Children of list items become nested lists, with per-depth markers
    #[default]
    Nested,
    /// Only each item's own content is rendered; children are dropped
    Flat,
}

/// Inputs shared by every renderer besides the block itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Whether the page is shown with the dark theme
    pub dark_mode: bool,

    /// Nested list handling
    pub list_mode: ListMode,

    /// Deepest block or link nesting that is rendered
    pub max_depth: usize,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            dark_mode: false,
            list_mode: ListMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderContext {
    /// Create a context with default settings and the given theme
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }

    /// Use the given list mode
    pub fn with_list_mode(mut self, list_mode: ListMode) -> Self {
        self.list_mode = list_mode;
        self
    }

    /// Use the given nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Render a sequence of top-level blocks to an HTML fragment
///
/// Consecutive list items are rendered as one list whose type (`<ol>` or
/// `<ul>`) is decided by the first item of the run.
///
/// # Parameters
/// * `blocks` - Top-level blocks in display order
/// * `ctx` - Theme, list mode and nesting limit
///
/// # Returns
/// * The HTML fragment
pub fn render_document(blocks: &[BlockNode], ctx: &RenderContext) -> String {
    let mut output = String::new();
    write_blocks(&mut output, blocks, 0, ctx);
    output
}

/// Render a single block (and its children) to an HTML fragment
pub fn render_block(block: &BlockNode, ctx: &RenderContext) -> String {
    render_document(std::slice::from_ref(block), ctx)
}

/// Write sibling blocks at the given nesting depth
pub(crate) fn write_blocks(
    output: &mut String,
    blocks: &[BlockNode],
    depth: usize,
    ctx: &RenderContext,
) {
    if depth > ctx.max_depth {
        log::warn!(
            "Skipping {} block(s) nested deeper than {}",
            blocks.len(),
            ctx.max_depth
        );
        return;
    }

    let both_list_items =
        |a: &BlockNode, b: &BlockNode| a.list_kind().is_some() && b.list_kind().is_some();

    for run in blocks.chunk_by(both_list_items) {
        if run[0].list_kind().is_some() {
            list::render_list(output, run, depth, ctx);
        } else {
            write_block(output, &run[0], depth, ctx);
        }
    }
}

/// Write a single non-list block followed by its children
fn write_block(output: &mut String, node: &BlockNode, depth: usize, ctx: &RenderContext) {
    log::debug!("Rendering block '{}' at depth {}", node.id, depth);

    match &node.block {
        Block::Paragraph { props, content } => render_paragraph(output, props, content, ctx),
        Block::Heading { props, content } => render_heading(output, props, content, ctx),
        Block::NumberedListItem { .. } | Block::BulletListItem { .. } => {
            // Lists own their children
            list::render_list(output, std::slice::from_ref(node), depth, ctx);
            return;
        }
        Block::Table { props, content } => render_table(output, props, content, ctx),
        Block::Image { props } => render_image(output, props, ctx),
        Block::Video { props } => render_video(output, props, ctx),
        Block::Audio { props } => render_audio(output, props, ctx),
        Block::File { props } => render_file(output, props, ctx),
        Block::Alert { props, content } => render_alert(output, props, content, ctx),
        Block::Unsupported => {
            log::warn!("Skipping block '{}' with an unsupported type", node.id);
            return;
        }
    }

    write_nested_children(output, &node.children, depth, ctx);
}

/// Write the children of a non-list block in an indented container
fn write_nested_children(
    output: &mut String,
    children: &[BlockNode],
    depth: usize,
    ctx: &RenderContext,
) {
    if children.is_empty() {
        return;
    }
    output.push_str("<div class=\"nested-blocks ml-6\">\n");
    write_blocks(output, children, depth + 1, ctx);
    output.push_str("</div>\n");
}

/// Escape HTML special characters
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
