//! blockpress - render block-editor documents to styled HTML
//!
//! Documents are the JSON produced by a BlockNote-style editor: a tree of
//! typed blocks (paragraphs, headings, list items, tables, media, alerts)
//! carrying styled inline segments. The crate parses them into
//! [`block_model::Document`] and renders them with the functions in
//! [`renderer`], either as fragments or as standalone pages.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), warn(missing_docs))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod block_model;
pub mod pipeline;
pub mod render_config;
pub mod renderer;
pub mod style;

pub use block_model::{BlockNode, Document};
pub use render_config::RenderConfig;
pub use renderer::{render_block, render_document, render_page, ListMode, RenderContext};
