//! Inline segments
//!
//! A segment is a run of styled text or a hyperlink inside a block's
//! content. Links may nest further segments as their label.

use serde::Deserialize;

/// A run of styled text or a hyperlink
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineSegment {
    /// Literal text
    Text {
        /// The text content
        #[serde(default)]
        text: String,
        /// Formatting flags
        #[serde(default)]
        styles: InlineStyles,
    },

    /// A hyperlink
    Link {
        /// Destination URL, passed through unvalidated
        #[serde(default)]
        href: String,
        /// Fallback label used when `content` is empty
        #[serde(default)]
        text: String,
        /// Styled runs forming the label
        #[serde(default)]
        content: Vec<InlineSegment>,
        /// Formatting flags
        #[serde(default)]
        styles: InlineStyles,
    },

    /// Any other segment type; not rendered
    #[serde(other)]
    Unsupported,
}

/// Styles reported for segments that carry none
static NO_STYLES: InlineStyles = InlineStyles {
    bold: false,
    italic: false,
    underline: false,
    strike: false,
    code: false,
    text_color: None,
    background_color: None,
};

/// Independent formatting flags of a segment
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InlineStyles {
    /// Bold formatting
    pub bold: bool,

    /// Italic formatting
    pub italic: bool,

    /// Underline formatting
    pub underline: bool,

    /// Strikethrough formatting
    pub strike: bool,

    /// Inline code formatting
    pub code: bool,

    /// Semantic foreground color name
    pub text_color: Option<String>,

    /// Semantic background color name
    pub background_color: Option<String>,
}

impl InlineSegment {
    /// Create an unstyled text segment
    pub fn text(text: impl Into<String>) -> Self {
        InlineSegment::Text {
            text: text.into(),
            styles: InlineStyles::default(),
        }
    }

    /// Create a text segment with the given styles
    pub fn styled(text: impl Into<String>, styles: InlineStyles) -> Self {
        InlineSegment::Text {
            text: text.into(),
            styles,
        }
    }

    /// Create an unstyled link whose label is `text`
    pub fn link(href: impl Into<String>, text: impl Into<String>) -> Self {
        InlineSegment::Link {
            href: href.into(),
            text: text.into(),
            content: Vec::new(),
            styles: InlineStyles::default(),
        }
    }

    /// Formatting flags of this segment
    pub fn styles(&self) -> &InlineStyles {
        match self {
            InlineSegment::Text { styles, .. } | InlineSegment::Link { styles, .. } => styles,
            InlineSegment::Unsupported => &NO_STYLES,
        }
    }

    /// The text a reader sees, with all styling dropped
    pub fn plain_text(&self) -> String {
        match self {
            InlineSegment::Text { text, .. } => text.clone(),
            InlineSegment::Link { text, content, .. } if content.is_empty() => text.clone(),
            InlineSegment::Link { content, .. } => {
                content.iter().map(InlineSegment::plain_text).collect()
            }
            InlineSegment::Unsupported => String::new(),
        }
    }

    /// Number of whitespace-separated words in the visible text
    pub fn word_count(&self) -> usize {
        self.plain_text().split_whitespace().count()
    }
}

impl InlineStyles {
    /// Check if any formatting is set
    pub fn has_formatting(&self) -> bool {
        self.bold
            || self.italic
            || self.underline
            || self.strike
            || self.code
            || self.text_color.is_some()
            || self.background_color.is_some()
    }
}
