//! Per-type props records

use serde::Deserialize;

/// Horizontal alignment of a block's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    /// Left-aligned
    Left,
    /// Centered
    Center,
    /// Right-aligned
    Right,
    /// Justified
    Justify,
    /// Any value the renderer does not recognize
    #[serde(other)]
    Unknown,
}

impl TextAlignment {
    /// The authored alignment, or `default` when absent or unrecognized
    pub fn resolve(alignment: Option<Self>, default: Self) -> Self {
        match alignment {
            None | Some(TextAlignment::Unknown) => default,
            Some(alignment) => alignment,
        }
    }
}

/// Color and alignment shared by text-bearing blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextProps {
    /// Semantic foreground color name (`"default"` means no override)
    pub text_color: Option<String>,

    /// Semantic background color name (`"default"` means no override)
    pub background_color: Option<String>,

    /// Content alignment; each block type picks its own default
    pub text_alignment: Option<TextAlignment>,
}

/// Props of a heading block
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeadingProps {
    /// Color and alignment
    #[serde(flatten)]
    pub text: TextProps,

    /// Heading level as authored (clamped to 1..=6 when rendered)
    pub level: u8,
}

impl Default for HeadingProps {
    fn default() -> Self {
        Self {
            text: TextProps::default(),
            level: 1,
        }
    }
}

/// Props of image, video, audio and file blocks
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaProps {
    /// Location of the media
    pub url: String,

    /// Display name (file label, image alt text)
    pub name: Option<String>,

    /// Caption shown below the media
    pub caption: Option<String>,

    /// Render the media inline instead of an open/play affordance
    pub show_preview: bool,

    /// Width cap of the inline preview, in pixels
    pub preview_width: Option<f64>,

    /// Content alignment (centered when absent)
    pub text_alignment: Option<TextAlignment>,

    /// Semantic background color name
    pub background_color: Option<String>,
}

impl Default for MediaProps {
    fn default() -> Self {
        Self {
            url: String::new(),
            name: None,
            caption: None,
            show_preview: true,
            preview_width: None,
            text_alignment: None,
            background_color: None,
        }
    }
}

/// Kind of an alert block, selecting its icon and color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Yellow warning
    #[default]
    Warning,
    /// Red error
    #[serde(alias = "error")]
    Danger,
    /// Blue information
    Info,
    /// Green confirmation
    Success,
    /// Any other type; rendered without icon or color scheme
    #[serde(other)]
    Other,
}

/// Props of an alert block
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertProps {
    /// Alert kind
    #[serde(rename = "type")]
    pub kind: AlertKind,

    /// Semantic foreground color name of the body text
    pub text_color: Option<String>,

    /// Semantic background color name (the kind's scheme applies when absent)
    pub background_color: Option<String>,

    /// Content alignment, mapped onto flex justification
    pub text_alignment: Option<TextAlignment>,
}
