//! List rendering
//!
//! Two renderers live here. [`render_list`] wraps a run of sibling list
//! items in a single `<ol>`/`<ul>`; in [`ListMode::Nested`] item children
//! become nested lists whose marker style changes with depth, in
//! [`ListMode::Flat`] they are dropped. [`render_numbered_list`] renders one
//! root item as an outline with explicit `depth + 1` numerals.

use super::inline::{render_segments, InlineOptions};
use super::{write_blocks, ListMode, RenderContext};
use crate::block_model::{BlockNode, ListKind, TextAlignment, TextProps};
use crate::style::ClassList;

const BULLET_MARKERS: [&str; 3] = ["list-disc", "list-circle", "list-square"];
const NUMBER_MARKERS: [&str; 3] = ["list-decimal", "list-lower-alpha", "list-lower-roman"];

/// Write a list of sibling items
///
/// The first list-typed item decides between `<ol>` and `<ul>` for the whole
/// run; when no item is a list item nothing is written. Non-list blocks in
/// `items` are skipped.
///
/// # Parameters
/// * `output` - Buffer the markup is appended to
/// * `items` - Sibling blocks forming the list
/// * `depth` - Nesting depth of the list (0 for top level)
/// * `ctx` - Theme, list mode and nesting limit
pub fn render_list(output: &mut String, items: &[BlockNode], depth: usize, ctx: &RenderContext) {
    let Some(kind) = items.iter().find_map(BlockNode::list_kind) else {
        return;
    };

    let markers = match kind {
        ListKind::Numbered => &NUMBER_MARKERS,
        ListKind::Bullet => &BULLET_MARKERS,
    };
    let classes = ClassList::new()
        .with(markers[depth % markers.len()])
        .with("pl-6")
        .with(if depth == 0 { "mb-4" } else { "" });

    output.push_str(&format!("<{}{}>\n", kind.tag(), classes.attr()));
    for item in items {
        write_list_item(output, item, depth, ctx);
    }
    output.push_str(&format!("</{}>\n", kind.tag()));
}

/// Write one `<li>` of a list
fn write_list_item(output: &mut String, item: &BlockNode, depth: usize, ctx: &RenderContext) {
    let Some((props, content)) = item.list_item() else {
        log::debug!("Skipping non-list block '{}' inside a list", item.id);
        return;
    };

    output.push_str(&format!("<li{}>", item_classes(props).attr()));
    render_segments(output, content, InlineOptions::new(ctx));

    if ctx.list_mode == ListMode::Nested && !item.children.is_empty() {
        output.push('\n');
        write_blocks(output, &item.children, depth + 1, ctx);
    }

    output.push_str("</li>\n");
}

/// Write a single root item and its descendants as a numbered outline
///
/// Each item carries an explicit `depth + 1.` marker; children are written
/// as a nested ordered list one level deeper. Nothing is written when `root`
/// is not a list item.
///
/// # Parameters
/// * `output` - Buffer the markup is appended to
/// * `root` - The root list item
/// * `depth` - Depth of the root item (0 for top level)
/// * `ctx` - Theme and nesting limit
pub fn render_numbered_list(
    output: &mut String,
    root: &BlockNode,
    depth: usize,
    ctx: &RenderContext,
) {
    if root.list_kind().is_none() {
        return;
    }

    output.push_str("<ol class=\"list-none pl-6\">\n");
    write_numbered_item(output, root, depth, ctx);
    output.push_str("</ol>\n");
}

fn write_numbered_item(output: &mut String, item: &BlockNode, depth: usize, ctx: &RenderContext) {
    let Some((props, content)) = item.list_item() else {
        return;
    };

    output.push_str(&format!(
        "<li{}><span class=\"list-marker\">{}.</span> ",
        item_classes(props).attr(),
        depth + 1
    ));
    render_segments(output, content, InlineOptions::new(ctx));

    if !item.children.is_empty() {
        if depth + 1 > ctx.max_depth {
            log::warn!(
                "Skipping children of list item '{}' nested deeper than {}",
                item.id,
                ctx.max_depth
            );
        } else {
            output.push_str("\n<ol class=\"list-none pl-6\">\n");
            for child in &item.children {
                write_numbered_item(output, child, depth + 1, ctx);
            }
            output.push_str("</ol>\n");
        }
    }

    output.push_str("</li>\n");
}

fn item_classes(props: &TextProps) -> ClassList {
    ClassList::new()
        .with_colors(props.text_color.as_deref(), props.background_color.as_deref())
        .with(TextAlignment::resolve(props.text_alignment, TextAlignment::Left).text_class())
        .with("mb-1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_model::Document;

    fn blocks(json: &str) -> Vec<BlockNode> {
        Document::from_json_str(json).unwrap().blocks
    }

    const NESTED: &str = r#"[
        {
            "id": "1", "type": "numberedListItem",
            "content": [{"type": "text", "text": "first"}],
            "children": [
                {"id": "1a", "type": "numberedListItem", "content": [{"type": "text", "text": "inner"}]}
            ]
        },
        {"id": "2", "type": "numberedListItem", "content": [{"type": "text", "text": "second"}]}
    ]"#;

    #[test]
    fn test_first_item_decides_list_type() {
        let items = blocks(
            r#"[
                {"id": "a", "type": "bulletListItem", "content": [{"type": "text", "text": "a"}]},
                {"id": "b", "type": "numberedListItem", "content": [{"type": "text", "text": "b"}]}
            ]"#,
        );
        let mut output = String::new();
        render_list(&mut output, &items, 0, &RenderContext::default());

        assert!(output.starts_with("<ul"));
        assert!(output.ends_with("</ul>\n"));
        assert!(!output.contains("<ol"));
        assert_eq!(output.matches("<li").count(), 2);
    }

    #[test]
    fn test_no_list_items_renders_nothing() {
        let items = blocks(r#"[{"id": "p", "type": "paragraph", "content": []}]"#);
        let mut output = String::new();
        render_list(&mut output, &items, 0, &RenderContext::default());
        assert!(output.is_empty());

        render_list(&mut output, &[], 0, &RenderContext::default());
        assert!(output.is_empty());
    }

    #[test]
    fn test_nested_mode_recurses() {
        let items = blocks(NESTED);
        let mut output = String::new();
        render_list(&mut output, &items, 0, &RenderContext::default());

        assert_eq!(output.matches("<ol").count(), 2);
        assert!(output.contains("<ol class=\"list-decimal pl-6 mb-4\">"));
        assert!(output.contains("<ol class=\"list-lower-alpha pl-6\">"));

        let first = output.find("first").unwrap();
        let inner = output.find("inner").unwrap();
        let second = output.find("second").unwrap();
        assert!(first < inner && inner < second);
    }

    #[test]
    fn test_flat_mode_drops_children() {
        let items = blocks(NESTED);
        let ctx = RenderContext::default().with_list_mode(ListMode::Flat);
        let mut output = String::new();
        render_list(&mut output, &items, 0, &ctx);

        assert_eq!(output.matches("<ol").count(), 1);
        assert!(!output.contains("inner"));
        assert!(output.contains("second"));
    }

    #[test]
    fn test_numbered_list_markers_follow_depth() {
        let items = blocks(NESTED);
        let mut output = String::new();
        render_numbered_list(&mut output, &items[0], 0, &RenderContext::default());

        assert_eq!(output.matches("<ol class=\"list-none pl-6\">").count(), 2);
        let top = output.find("<span class=\"list-marker\">1.</span>").unwrap();
        let nested = output.find("<span class=\"list-marker\">2.</span>").unwrap();
        assert!(top < nested);
        assert!(!output.contains("second"));
    }

    #[test]
    fn test_numbered_list_respects_depth_limit() {
        let items = blocks(NESTED);
        let ctx = RenderContext::default().with_max_depth(0);
        let mut output = String::new();
        render_numbered_list(&mut output, &items[0], 0, &ctx);

        assert!(output.contains("first"));
        assert!(!output.contains("inner"));
    }

    #[test]
    fn test_numbered_list_of_non_list_root_renders_nothing() {
        let items = blocks(r#"[{"id": "p", "type": "paragraph", "content": []}]"#);
        let mut output = String::new();
        render_numbered_list(&mut output, &items[0], 0, &RenderContext::default());
        assert!(output.is_empty());
    }
}
