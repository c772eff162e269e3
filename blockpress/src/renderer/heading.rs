//! Heading blocks

use super::inline::{render_segments, InlineOptions};
use super::RenderContext;
use crate::block_model::{HeadingProps, InlineSegment, TextAlignment};
use crate::style::ClassList;

/// Write a heading block as `<h1>`..`<h6>`
pub fn render_heading(
    output: &mut String,
    props: &HeadingProps,
    content: &[InlineSegment],
    ctx: &RenderContext,
) {
    let level = props.level.clamp(1, 6);
    let size = match level {
        1 => "text-3xl",
        2 => "text-2xl",
        3 => "text-xl",
        _ => "text-lg",
    };

    let classes = ClassList::new()
        .with_colors(
            props.text.text_color.as_deref(),
            props.text.background_color.as_deref(),
        )
        .with(TextAlignment::resolve(props.text.text_alignment, TextAlignment::Left).text_class())
        .with(size)
        .with("font-bold")
        .with("mb-4");

    output.push_str(&format!("<h{}{}>", level, classes.attr()));
    render_segments(output, content, InlineOptions::new(ctx));
    output.push_str(&format!("</h{}>\n", level));
}
