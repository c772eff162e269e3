//! Image, video, audio and file blocks
//!
//! All four share a container (alignment, background, padding), a
//! preview-or-fallback body and an optional caption whose color follows
//! the theme.

use super::{escape_html, RenderContext};
use crate::block_model::{MediaProps, TextAlignment};
use crate::style::{resolve_color, ClassList};

/// The four media block types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// `image`
    Image,
    /// `video`
    Video,
    /// `audio`
    Audio,
    /// `file`
    File,
}

impl MediaKind {
    /// Label of the link shown instead of an inline preview
    fn fallback_label(self) -> &'static str {
        match self {
            MediaKind::Image => "Open image",
            MediaKind::Video => "Play video",
            MediaKind::Audio => "Play audio",
            MediaKind::File => "Open file",
        }
    }
}

/// Write an image block
pub fn render_image(output: &mut String, props: &MediaProps, ctx: &RenderContext) {
    render_media(output, MediaKind::Image, props, ctx);
}

/// Write a video block
pub fn render_video(output: &mut String, props: &MediaProps, ctx: &RenderContext) {
    render_media(output, MediaKind::Video, props, ctx);
}

/// Write an audio block
pub fn render_audio(output: &mut String, props: &MediaProps, ctx: &RenderContext) {
    render_media(output, MediaKind::Audio, props, ctx);
}

/// Write a file block
pub fn render_file(output: &mut String, props: &MediaProps, ctx: &RenderContext) {
    render_media(output, MediaKind::File, props, ctx);
}

/// Write a media block of the given kind
///
/// # Parameters
/// * `output` - Buffer the markup is appended to
/// * `kind` - Which media element to produce
/// * `props` - URL, name, caption and preview settings
/// * `ctx` - Theme (caption contrast)
pub fn render_media(output: &mut String, kind: MediaKind, props: &MediaProps, ctx: &RenderContext) {
    let container = ClassList::new()
        .with("media-block")
        .with(TextAlignment::resolve(props.text_alignment, TextAlignment::Center).text_class())
        .with(resolve_color(props.background_color.as_deref(), true))
        .with("p-2")
        .with("mb-4");

    output.push_str(&format!("<div{}>\n", container.attr()));

    match kind {
        MediaKind::File => write_file_link(output, props),
        _ if props.show_preview => write_preview(output, kind, props),
        _ => write_fallback(output, kind, props),
    }

    write_caption(output, props, ctx);
    output.push_str("</div>\n");
}

/// Inline `style` attribute capping the preview width
fn width_style(props: &MediaProps) -> String {
    match props.preview_width {
        Some(width) if width.is_finite() && width > 0.0 => {
            format!(" style=\"width: {}px; max-width: 100%;\"", width)
        }
        _ => " style=\"max-width: 100%;\"".to_string(),
    }
}

fn write_preview(output: &mut String, kind: MediaKind, props: &MediaProps) {
    let url = escape_html(&props.url);
    match kind {
        MediaKind::Image => {
            output.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\"{} class=\"inline-block\">\n",
                url,
                escape_html(props.name.as_deref().unwrap_or("")),
                width_style(props)
            ));
        }
        MediaKind::Video => {
            output.push_str(&format!(
                "<video src=\"{}\" controls{}></video>\n",
                url,
                width_style(props)
            ));
        }
        MediaKind::Audio => {
            output.push_str(&format!("<audio src=\"{}\" controls></audio>\n", url));
        }
        MediaKind::File => write_file_link(output, props),
    }
}

fn write_fallback(output: &mut String, kind: MediaKind, props: &MediaProps) {
    output.push_str(&format!(
        "<a href=\"{}\" class=\"media-fallback\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
        escape_html(&props.url),
        kind.fallback_label()
    ));
}

fn write_file_link(output: &mut String, props: &MediaProps) {
    output.push_str(&format!(
        "<a href=\"{}\" class=\"media-file underline\" download>{}</a>\n",
        escape_html(&props.url),
        escape_html(props.name.as_deref().unwrap_or(""))
    ));
}

fn write_caption(output: &mut String, props: &MediaProps, ctx: &RenderContext) {
    let Some(caption) = props.caption.as_deref().filter(|c| !c.is_empty()) else {
        return;
    };
    let tone = if ctx.dark_mode {
        "text-gray-300"
    } else {
        "text-gray-600"
    };
    output.push_str(&format!(
        "<p class=\"caption mt-2 text-sm {}\">{}</p>\n",
        tone,
        escape_html(caption)
    ));
}
