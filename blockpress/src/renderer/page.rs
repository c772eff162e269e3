//! Standalone HTML pages
//!
//! Wraps a rendered document in an HTML5 skeleton with an embedded
//! stylesheet defining every class the block renderers emit.

use super::{escape_html, write_blocks, RenderContext};
use crate::block_model::Document;
use crate::style::palette_css;

/// Render a document as a complete HTML page
///
/// The page title is the document title, else `site_title`, else
/// `"Untitled"`. A document title is also shown as a heading above the
/// blocks.
///
/// # Parameters
/// * `document` - The document to render
/// * `site_title` - Fallback title for documents without one
/// * `ctx` - Theme, list mode and nesting limit
///
/// # Returns
/// * The HTML page
pub fn render_page(document: &Document, site_title: Option<&str>, ctx: &RenderContext) -> String {
    let title = document
        .title
        .as_deref()
        .filter(|title| !title.is_empty())
        .or(site_title)
        .unwrap_or("Untitled");

    let mut output = String::new();
    write_html_header(&mut output, title);

    if ctx.dark_mode {
        output.push_str("<body class=\"dark\">\n");
    } else {
        output.push_str("<body>\n");
    }
    output.push_str("<main class=\"container\">\n");

    if let Some(heading) = document.title.as_deref().filter(|title| !title.is_empty()) {
        output.push_str(&format!(
            "<h1 class=\"page-title\">{}</h1>\n",
            escape_html(heading)
        ));
    }

    write_blocks(&mut output, &document.blocks, 0, ctx);

    output.push_str("</main>\n");
    output.push_str("</body>\n");
    output.push_str("</html>\n");
    output
}

fn write_html_header(output: &mut String, title: &str) {
    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"en\">\n");
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"UTF-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    output.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    output.push_str("<style>\n");
    output.push_str(CSS_STYLES);
    output.push_str(&palette_css());
    output.push_str("</style>\n");
    output.push_str("</head>\n");
}

/// Base styles; palette colors are appended separately
const CSS_STYLES: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen',
                 'Ubuntu', 'Cantarell', 'Fira Sans', 'Droid Sans', 'Helvetica Neue',
                 sans-serif;
    line-height: 1.6;
    color: #1f2937;
    background-color: #f5f5f5;
    padding: 20px;
}

body.dark {
    color: #e5e7eb;
    background-color: #111827;
}

.container {
    max-width: 900px;
    margin: 0 auto;
    background: white;
    padding: 60px;
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
    border-radius: 4px;
}

body.dark .container {
    background: #1f2937;
}

.page-title {
    font-size: 2.5em;
    font-weight: 700;
    margin-bottom: 20px;
    padding-bottom: 10px;
    border-bottom: 3px solid #2563eb;
}

.text-left { text-align: left; }
.text-center { text-align: center; }
.text-right { text-align: right; }
.text-justify { text-align: justify; }

.text-3xl { font-size: 1.875rem; }
.text-2xl { font-size: 1.5rem; }
.text-xl { font-size: 1.25rem; }
.text-lg { font-size: 1.125rem; }
.text-sm { font-size: 0.875rem; }

.font-bold { font-weight: 700; }
.font-mono {
    font-family: 'Courier New', Courier, monospace;
    background-color: rgba(127, 127, 127, 0.15);
    padding: 0 4px;
    border-radius: 3px;
}
.italic { font-style: italic; }
.underline { text-decoration: underline; }
.line-through { text-decoration: line-through; }
.underline.line-through { text-decoration: underline line-through; }

.mb-1 { margin-bottom: 0.25rem; }
.mb-4 { margin-bottom: 1rem; }
.mt-2 { margin-top: 0.5rem; }
.ml-6 { margin-left: 1.5rem; }
.pl-6 { padding-left: 1.5rem; }
.p-2 { padding: 0.5rem; }
.p-3 { padding: 0.75rem; }
.px-3 { padding-left: 0.75rem; padding-right: 0.75rem; }
.py-2 { padding-top: 0.5rem; padding-bottom: 0.5rem; }

.list-none { list-style-type: none; }
.list-disc { list-style-type: disc; }
.list-circle { list-style-type: circle; }
.list-square { list-style-type: square; }
.list-decimal { list-style-type: decimal; }
.list-lower-alpha { list-style-type: lower-alpha; }
.list-lower-roman { list-style-type: lower-roman; }
.list-marker { margin-right: 0.25rem; }

.flex { display: flex; }
.items-center { align-items: center; }
.justify-start { justify-content: flex-start; }
.justify-center { justify-content: center; }
.justify-end { justify-content: flex-end; }
.justify-between { justify-content: space-between; }
.gap-2 { gap: 0.5rem; }
.overflow-x-auto { overflow-x: auto; }
.inline-block { display: inline-block; }

.table-auto { table-layout: auto; }
.border-collapse { border-collapse: collapse; }
.border { border: 1px solid #d1d5db; }
.rounded-lg { border-radius: 0.5rem; }

.border-yellow-500 { border-color: #eab308; }
.border-red-500 { border-color: #ef4444; }
.border-blue-500 { border-color: #3b82f6; }
.border-green-500 { border-color: #22c55e; }
.border-gray-300 { border-color: #d1d5db; }
.text-yellow-800 { color: #854d0e; }
.text-red-800 { color: #991b1b; }
.text-blue-800 { color: #1e40af; }
.text-green-800 { color: #166534; }
.text-gray-300 { color: #d1d5db; }

.media-block img,
.media-block video {
    max-width: 100%;
    height: auto;
}

.media-fallback,
.media-file {
    color: #2563eb;
}

.alert-icon {
    font-size: 1.25em;
}

"#;
