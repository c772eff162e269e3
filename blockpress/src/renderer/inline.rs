//! Inline segment rendering

use super::{escape_html, RenderContext};
use crate::block_model::{InlineSegment, InlineStyles};
use crate::style::ClassList;

/// Appearance every link gets regardless of its own styles
const LINK_CLASSES: [&str; 2] = ["underline", "text-blue-600"];

/// Per-block differences in inline rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineOptions {
    /// Whether the calling block type supports italic text
    pub italic: bool,

    /// Deepest link-in-link nesting rendered as markup
    pub max_depth: usize,
}

impl InlineOptions {
    /// Options for text blocks (paragraph, heading, list item, alert)
    pub fn new(ctx: &RenderContext) -> Self {
        Self {
            italic: true,
            max_depth: ctx.max_depth,
        }
    }

    /// Drop italic support (table cells)
    pub fn without_italic(mut self) -> Self {
        self.italic = false;
        self
    }
}

/// Render a sequence of segments, in order
pub fn render_segments(output: &mut String, segments: &[InlineSegment], options: InlineOptions) {
    for (index, segment) in segments.iter().enumerate() {
        render_segment(output, segment, index, options);
    }
}

/// Render one segment
///
/// # Parameters
/// * `output` - Buffer the markup is appended to
/// * `segment` - The text run or link
/// * `index` - Position among its siblings, written as the `data-key` render key
/// * `options` - Italic support and nesting limit of the calling block
pub fn render_segment(
    output: &mut String,
    segment: &InlineSegment,
    index: usize,
    options: InlineOptions,
) {
    write_segment(output, segment, index, options, 0);
}

fn write_segment(
    output: &mut String,
    segment: &InlineSegment,
    index: usize,
    options: InlineOptions,
    depth: usize,
) {
    match segment {
        InlineSegment::Text { text, styles } => {
            let classes = style_classes(ClassList::new(), styles, options);
            output.push_str(&format!(
                "<span{} data-key=\"{}\">{}</span>",
                classes.attr(),
                index,
                escape_html(text)
            ));
        }

        InlineSegment::Link {
            href,
            text,
            content,
            styles,
        } => {
            let base = LINK_CLASSES
                .iter()
                .fold(ClassList::new(), |classes, class| classes.with(*class));
            let classes = style_classes(base, styles, options);
            output.push_str(&format!(
                "<a href=\"{}\"{} data-key=\"{}\">",
                escape_html(href),
                classes.attr(),
                index
            ));

            if content.is_empty() {
                output.push_str(&escape_html(text));
            } else if depth >= options.max_depth {
                log::warn!(
                    "Link label nested deeper than {}; rendering as plain text",
                    options.max_depth
                );
                output.push_str(&escape_html(&segment.plain_text()));
            } else {
                for (inner_index, inner) in content.iter().enumerate() {
                    write_segment(output, inner, inner_index, options, depth + 1);
                }
            }

            output.push_str("</a>");
        }

        InlineSegment::Unsupported => {
            log::warn!("Skipping inline segment {} with an unsupported type", index);
        }
    }
}

/// Add the formatting classes of a segment to `classes`
fn style_classes(mut classes: ClassList, styles: &InlineStyles, options: InlineOptions) -> ClassList {
    if styles.bold {
        classes.push("font-bold");
    }
    if styles.italic && options.italic {
        classes.push("italic");
    }
    if styles.underline {
        classes.push("underline");
    }
    if styles.strike {
        classes.push("line-through");
    }
    if styles.code {
        classes.push("font-mono");
    }
    classes.with_colors(styles.text_color.as_deref(), styles.background_color.as_deref())
}
