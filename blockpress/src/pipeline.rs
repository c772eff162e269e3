//! Load, render and write pipeline
//!
//! This module ties the block model and the renderer to the filesystem:
//! 1. **Loading**: Read and parse block JSON into a [`Document`]
//! 2. **Rendering**: Produce a full page or a fragment per [`RenderConfig`]
//! 3. **Writing**: Write the HTML next to its mirrored source path
//!
//! [`build_site`] runs all three stages for every `.json` file below a
//! directory, in parallel when the `parallel` feature is enabled.

use crate::block_model::{validate, Document, LoadError};
use crate::render_config::RenderConfig;
use crate::renderer::{render_document, render_page};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Summary of a [`build_site`] run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of documents rendered
    pub files: usize,

    /// Number of blocks across all rendered documents
    pub blocks: usize,
}

/// Stage 1: Load a document from a JSON file
///
/// # Parameters
/// * `path` - Path to the JSON file
///
/// # Returns
/// * `Ok(Document)` - Successfully loaded document
/// * `Err(PipelineError)` - Error reading or parsing the file
pub fn load_document(path: &Path) -> Result<Document, PipelineError> {
    log::debug!("Loading {}", path.display());
    Ok(Document::load(path)?)
}

/// Stage 2: Render a document as configured
///
/// Produces a full page when `config.standalone` is set, a fragment
/// otherwise.
pub fn render_to_string(document: &Document, config: &RenderConfig) -> String {
    let ctx = config.context();
    if config.standalone {
        render_page(document, config.site_title.as_deref(), &ctx)
    } else {
        render_document(&document.blocks, &ctx)
    }
}

/// Load, render and write a single document
///
/// Parent directories of `output` are created as needed. Validation
/// problems are logged as warnings; rendering proceeds regardless.
///
/// # Parameters
/// * `input` - Path to the JSON source
/// * `output` - Path of the HTML file to write
/// * `config` - Render settings
///
/// # Returns
/// * `Ok(Document)` - The rendered document
/// * `Err(PipelineError)` - Error loading the source or writing the output
pub fn render_file(
    input: &Path,
    output: &Path,
    config: &RenderConfig,
) -> Result<Document, PipelineError> {
    let document = load_document(input)?;

    if let Err(e) = validate(&document, config.max_depth) {
        log::warn!("{}: {}", input.display(), e);
    }

    let html = render_to_string(&document, config);
    write_output(output, &html)?;
    log::info!("Wrote {}", output.display());

    Ok(document)
}

/// Render every `.json` document below `input_dir` into `output_dir`
///
/// Each source is written to the same relative path with an `.html`
/// extension. Files are visited in file-name order.
///
/// # Parameters
/// * `input_dir` - Directory searched recursively for `.json` sources
/// * `output_dir` - Directory receiving the rendered pages
/// * `config` - Render settings
///
/// # Returns
/// * `Ok(BuildReport)` - Number of files and blocks rendered
/// * `Err(PipelineError)` - The first error encountered
pub fn build_site(
    input_dir: &Path,
    output_dir: &Path,
    config: &RenderConfig,
) -> Result<BuildReport, PipelineError> {
    let sources = discover_sources(input_dir)?;
    log::info!(
        "Found {} document(s) in {}",
        sources.len(),
        input_dir.display()
    );

    let render_one = |source: &PathBuf| -> Result<usize, PipelineError> {
        let relative = source.strip_prefix(input_dir).unwrap_or(source);
        let output = output_dir.join(relative).with_extension("html");
        let document = render_file(source, &output, config)?;
        Ok(document.block_count())
    };

    #[cfg(feature = "parallel")]
    let block_counts: Result<Vec<usize>, PipelineError> =
        sources.par_iter().map(render_one).collect();

    #[cfg(not(feature = "parallel"))]
    let block_counts: Result<Vec<usize>, PipelineError> =
        sources.iter().map(render_one).collect();

    let block_counts = block_counts?;
    Ok(BuildReport {
        files: block_counts.len(),
        blocks: block_counts.iter().sum(),
    })
}

/// Find `.json` files below `root`, sorted by file name
fn discover_sources(root: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let mut sources = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|s| s.to_str()) == Some("json")
        {
            sources.push(entry.into_path());
        }
    }
    Ok(sources)
}

fn write_output(path: &Path, html: &str) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PipelineError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, html).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Pipeline errors
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A source document could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// An output file or directory could not be written
    #[error("IO error writing {path}: {source}", path = .path.display())]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The input directory could not be traversed
    #[error("Error walking input directory: {0}")]
    Walk(#[from] walkdir::Error),
}
