use blockpress::block_model::{validate, Document, ValidationError};
use blockpress::renderer::{render_block, render_document, render_page, ListMode, RenderContext};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn showcase() -> Document {
    Document::load(fixture("showcase.json")).expect("showcase fixture should load")
}

#[test]
fn test_showcase_loads() {
    let doc = showcase();
    assert_eq!(doc.title.as_deref(), Some("Release Notes"));
    assert_eq!(doc.blocks.len(), 8);
    assert_eq!(doc.block_count(), 9);
    assert_eq!(doc.table_count(), 1);
    assert_eq!(doc.media_count(), 1);
}

#[test]
fn test_centered_red_paragraph_with_bold_run() {
    let doc = showcase();
    let html = render_block(&doc.blocks[1], &RenderContext::default());

    assert!(html.starts_with("<p class=\"text-red-600 text-center mb-4\">"));
    assert!(html.contains("<span class=\"font-bold\" data-key=\"0\">Hi</span>"));
}

#[test]
fn test_inline_order_is_preserved() {
    let doc = showcase();
    let html = render_block(&doc.blocks[1], &RenderContext::default());

    let hi = html.find(">Hi<").unwrap();
    let welcome = html.find("and welcome").unwrap();
    let link = html.find("<a href=\"https://example.com/docs\"").unwrap();
    assert!(hi < welcome && welcome < link);
}

#[test]
fn test_link_label_uses_nested_content() {
    let doc = showcase();
    let html = render_block(&doc.blocks[1], &RenderContext::default());

    assert!(html.contains("class=\"underline text-blue-600\""));
    assert!(html.contains("<span class=\"italic\" data-key=\"0\">the docs</span></a>"));
}

#[test]
fn test_full_document() {
    let html = render_document(&showcase().blocks, &RenderContext::default());

    // One top-level list holding both sibling items, with the nested one inside
    assert_eq!(html.matches("<ul class=\"list-disc pl-6 mb-4\">").count(), 1);
    assert_eq!(html.matches("<ul class=\"list-circle pl-6\">").count(), 1);

    assert_eq!(html.matches("<tr>").count(), 2);
    assert_eq!(html.matches("<td").count(), 4);

    assert!(html.contains(">Open image</a>"));
    assert!(!html.contains("<img"));
    assert!(html.contains("<p class=\"caption mt-2 text-sm text-gray-600\">Overview</p>"));

    assert!(html.contains("alert-success"));
    assert!(html.contains("justify-center"));

    assert!(!html.contains("not rendered"));
}

#[test]
fn test_flat_lists_drop_nested_items() {
    let ctx = RenderContext::default().with_list_mode(ListMode::Flat);
    let html = render_document(&showcase().blocks, &ctx);

    assert!(html.contains("Faster tables"));
    assert!(!html.contains("Scrolls horizontally"));
}

#[test]
fn test_dark_mode_changes_caption_only_where_themed() {
    let doc = showcase();
    let light = render_document(&doc.blocks, &RenderContext::new(false));
    let dark = render_document(&doc.blocks, &RenderContext::new(true));

    assert!(dark.contains("text-gray-300\">Overview</p>"));
    assert_eq!(
        light.replace("text-gray-600", "text-gray-300"),
        dark,
        "only the caption tone should differ"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let doc = showcase();
    let ctx = RenderContext::new(true);
    for block in &doc.blocks {
        assert_eq!(render_block(block, &ctx), render_block(block, &ctx));
    }
}

#[test]
fn test_page_wraps_document() {
    let html = render_page(&showcase(), Some("Docs"), &RenderContext::new(true));
    assert!(html.contains("<title>Release Notes</title>"));
    assert!(html.contains("<body class=\"dark\">"));
    assert!(html.contains("<h1 class=\"page-title\">Release Notes</h1>"));
}

#[test]
fn test_validation_reports_unsupported_block() {
    let err = validate(&showcase(), 32).unwrap_err();
    assert!(matches!(err, ValidationError::UnsupportedBlock { ref id } if id == "c1"));
}

#[test]
fn test_bare_array_documents() {
    let doc = Document::load(fixture("site/index.json")).unwrap();
    assert_eq!(doc.title, None);

    let html = render_document(&doc.blocks, &RenderContext::default());
    assert!(html.contains(">Welcome</span>"));
    assert!(html.contains("download>handbook.pdf</a>"));
    assert!(validate(&doc, 32).is_ok());
}

#[test]
fn test_unrecognized_values_degrade_instead_of_failing() {
    let doc = Document::load(fixture("unrecognized.json")).expect("document should still load");
    assert_eq!(doc.blocks.len(), 4);

    let html = render_document(&doc.blocks, &RenderContext::default());

    assert!(html.contains(">kept</span>"));

    // Unknown alert type: content kept, no icon or color scheme
    assert!(html.contains("alert-neutral"));
    assert!(html.contains(">Heads up</span>"));
    assert!(!html.contains("alert-icon"));
    assert!(!html.contains("bg-yellow-100"));

    // Unknown alignment: the paragraph default applies
    assert!(html.contains("<p class=\"text-green-600 text-left mb-4\">"));

    // Unknown inline type: skipped, its siblings kept
    assert!(html.contains("<span data-key=\"1\">said hello</span>"));
    assert!(!html.contains("ada"));
}

#[test]
fn test_unrecognized_values_are_reported_by_validation() {
    let doc = Document::load(fixture("unrecognized.json")).unwrap();
    let Err(ValidationError::Multiple(errors)) = validate(&doc, 32) else {
        panic!("expected several problems");
    };
    assert_eq!(errors.len(), 3);
    assert!(matches!(errors[0], ValidationError::UnknownAlertKind { ref id } if id == "note"));
    assert!(matches!(errors[1], ValidationError::UnknownAlignment { ref id } if id == "aligned"));
    assert!(matches!(
        errors[2],
        ValidationError::UnsupportedInline { ref id, count: 1 } if id == "mentions"
    ));
}

#[test]
fn test_first_list_item_decides_document_level_list() {
    let doc = Document::from_json_str(
        r#"[
            {"id": "b", "type": "bulletListItem", "content": [{"type": "text", "text": "bullet"}]},
            {"id": "n", "type": "numberedListItem", "content": [{"type": "text", "text": "number"}]}
        ]"#,
    )
    .unwrap();
    let html = render_document(&doc.blocks, &RenderContext::default());

    assert_eq!(html.matches("<ul").count(), 1);
    assert!(!html.contains("<ol"));
    assert_eq!(html.matches("<li").count(), 2);
}
