//! Paragraph blocks

use super::inline::{render_segments, InlineOptions};
use super::RenderContext;
use crate::block_model::{InlineSegment, TextAlignment, TextProps};
use crate::style::ClassList;

/// Write a paragraph block
///
/// The container carries the resolved text and background colors, the
/// alignment class (left by default) and a bottom margin.
pub fn render_paragraph(
    output: &mut String,
    props: &TextProps,
    content: &[InlineSegment],
    ctx: &RenderContext,
) {
    let classes = ClassList::new()
        .with_colors(props.text_color.as_deref(), props.background_color.as_deref())
        .with(TextAlignment::resolve(props.text_alignment, TextAlignment::Left).text_class())
        .with("mb-4");

    output.push_str(&format!("<p{}>", classes.attr()));
    render_segments(output, content, InlineOptions::new(ctx));
    output.push_str("</p>\n");
}
