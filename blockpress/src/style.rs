//! Style resolution
//!
//! Maps semantic color names and alignments onto presentation classes, and
//! provides [`ClassList`] for composing the class attribute of an element.
//! The stylesheet emitted by the page renderer defines every class produced here.

use crate::block_model::TextAlignment;
use itertools::Itertools;
use std::fmt;

/// One color of the semantic palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Semantic name as written by the editor
    pub name: &'static str,
    /// Class used for foreground (text) color
    pub foreground: &'static str,
    /// Class used for background color
    pub background: &'static str,
    /// CSS value behind the foreground class
    pub foreground_css: &'static str,
    /// CSS value behind the background class
    pub background_css: &'static str,
}

/// The fixed semantic palette
pub const PALETTE: [PaletteEntry; 10] = [
    PaletteEntry {
        name: "red",
        foreground: "text-red-600",
        background: "bg-red-100",
        foreground_css: "#dc2626",
        background_css: "#fee2e2",
    },
    PaletteEntry {
        name: "blue",
        foreground: "text-blue-600",
        background: "bg-blue-100",
        foreground_css: "#2563eb",
        background_css: "#dbeafe",
    },
    PaletteEntry {
        name: "green",
        foreground: "text-green-600",
        background: "bg-green-100",
        foreground_css: "#16a34a",
        background_css: "#dcfce7",
    },
    PaletteEntry {
        name: "yellow",
        foreground: "text-yellow-600",
        background: "bg-yellow-100",
        foreground_css: "#ca8a04",
        background_css: "#fef9c3",
    },
    PaletteEntry {
        name: "orange",
        foreground: "text-orange-600",
        background: "bg-orange-100",
        foreground_css: "#ea580c",
        background_css: "#ffedd5",
    },
    PaletteEntry {
        name: "purple",
        foreground: "text-purple-600",
        background: "bg-purple-100",
        foreground_css: "#9333ea",
        background_css: "#f3e8ff",
    },
    PaletteEntry {
        name: "pink",
        foreground: "text-pink-600",
        background: "bg-pink-100",
        foreground_css: "#db2777",
        background_css: "#fce7f3",
    },
    PaletteEntry {
        name: "gray",
        foreground: "text-gray-600",
        background: "bg-gray-100",
        foreground_css: "#4b5563",
        background_css: "#f3f4f6",
    },
    PaletteEntry {
        name: "black",
        foreground: "text-black",
        background: "bg-black",
        foreground_css: "#000000",
        background_css: "#000000",
    },
    PaletteEntry {
        name: "white",
        foreground: "text-white",
        background: "bg-white",
        foreground_css: "#ffffff",
        background_css: "#ffffff",
    },
];

/// Resolve a semantic color name to a presentation class
///
/// # Parameters
/// * `name` - Semantic color name as written by the editor
/// * `background` - Resolve the background class instead of the foreground one
///
/// # Returns
/// * An empty string for `None` or `"default"`
/// * The palette class for a (case-insensitive) palette color
/// * The lowercased input for anything else, so custom classes flow through
pub fn resolve_color(name: Option<&str>, background: bool) -> String {
    let Some(name) = name else {
        return String::new();
    };
    if name == "default" {
        return String::new();
    }

    let lowered = name.to_lowercase();
    match PALETTE.iter().find(|entry| entry.name == lowered) {
        Some(entry) if background => entry.background.to_string(),
        Some(entry) => entry.foreground.to_string(),
        None => lowered,
    }
}

impl TextAlignment {
    /// Text alignment class
    pub fn text_class(self) -> &'static str {
        match self {
            TextAlignment::Left => "text-left",
            TextAlignment::Center => "text-center",
            TextAlignment::Right => "text-right",
            TextAlignment::Justify => "text-justify",
            TextAlignment::Unknown => "",
        }
    }

    /// Flex justification class for flex-row containers
    pub fn justify_class(self) -> &'static str {
        match self {
            TextAlignment::Left => "justify-start",
            TextAlignment::Center => "justify-center",
            TextAlignment::Right => "justify-end",
            TextAlignment::Justify => "justify-between",
            TextAlignment::Unknown => "",
        }
    }
}

/// An ordered, de-duplicated list of classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Create an empty class list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class; empty strings and repeats are ignored
    pub fn push(&mut self, class: impl Into<String>) -> &mut Self {
        let class = class.into();
        if !class.is_empty() && !self.0.contains(&class) {
            self.0.push(class);
        }
        self
    }

    /// Builder form of [`ClassList::push`]
    pub fn with(mut self, class: impl Into<String>) -> Self {
        self.push(class);
        self
    }

    /// Append the resolved foreground and background classes of a color pair
    pub fn with_colors(mut self, text_color: Option<&str>, background_color: Option<&str>) -> Self {
        self.push(resolve_color(text_color, false));
        self.push(resolve_color(background_color, true));
        self
    }

    /// Check if no class has been added
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The ` class="..."` attribute, or an empty string when there are no classes
    pub fn attr(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", crate::renderer::escape_html(&self.to_string()))
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

/// CSS rules for every palette class
pub fn palette_css() -> String {
    let mut css = String::new();
    for entry in &PALETTE {
        css.push_str(&format!(
            ".{} {{ color: {}; }}\n.{} {{ background-color: {}; }}\n",
            entry.foreground, entry.foreground_css, entry.background, entry.background_css
        ));
    }
    css
}
