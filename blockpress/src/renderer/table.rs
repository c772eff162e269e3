//! Table blocks

use super::inline::{render_segments, InlineOptions};
use super::RenderContext;
use crate::block_model::{TableContent, TextAlignment, TextProps};
use crate::style::ClassList;

/// Write a table block
///
/// The table sits in a centered, horizontally scrollable wrapper. Each row
/// becomes a `<tr>` and each cell group a `<td>`, in row-major order. Table
/// cells do not support italic text.
pub fn render_table(
    output: &mut String,
    props: &TextProps,
    content: &TableContent,
    ctx: &RenderContext,
) {
    let wrapper = ClassList::new()
        .with("flex")
        .with("justify-center")
        .with("overflow-x-auto")
        .with("mb-4");
    let table = ClassList::new()
        .with_colors(props.text_color.as_deref(), props.background_color.as_deref())
        .with(TextAlignment::resolve(props.text_alignment, TextAlignment::Left).text_class())
        .with("table-auto")
        .with("border-collapse");
    let options = InlineOptions::new(ctx).without_italic();

    output.push_str(&format!("<div{}>\n", wrapper.attr()));
    output.push_str(&format!("<table{}>\n<tbody>\n", table.attr()));

    for row in &content.rows {
        output.push_str("<tr>\n");
        for cell in &row.cells {
            output.push_str("<td class=\"border px-3 py-2\">");
            render_segments(output, cell.segments(), options);
            output.push_str("</td>\n");
        }
        output.push_str("</tr>\n");
    }

    output.push_str("</tbody>\n</table>\n</div>\n");
}
