//! Command-line interface definitions for blockpress

use blockpress::ListMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Nested list handling selected on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListModeArg {
    /// Children of list items become nested lists
    Nested,
    /// Only each item's own content is rendered
    Flat,
}

impl From<ListModeArg> for ListMode {
    fn from(arg: ListModeArg) -> Self {
        match arg {
            ListModeArg::Nested => ListMode::Nested,
            ListModeArg::Flat => ListMode::Flat,
        }
    }
}

/// CLI structure for the blockpress application
#[derive(Parser)]
#[command(name = "blockpress")]
#[command(version)]
#[command(about = "Render block-editor documents to styled HTML", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for blockpress
#[derive(Subcommand)]
pub enum Commands {
    /// Write a default blockpress.toml
    Init {
        /// Directory to initialize (defaults to current directory)
        path: Option<PathBuf>,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,

        /// Site title used for documents without one
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Render a single JSON document to HTML
    Render {
        /// Block JSON file to render
        input: PathBuf,

        /// Output file (defaults to the input path with an .html extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use the dark theme
        #[arg(long)]
        dark: bool,

        /// Write an HTML fragment instead of a full page
        #[arg(long)]
        fragment: bool,

        /// Nested list handling
        #[arg(long, value_enum)]
        list_mode: Option<ListModeArg>,

        /// Configuration file (defaults to blockpress.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render every JSON document in a directory
    Build {
        /// Input directory (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "site")]
        output: PathBuf,

        /// Use the dark theme
        #[arg(long)]
        dark: bool,

        /// Configuration file (defaults to blockpress.toml in the input directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a document's structure
    Check {
        /// Block JSON file to validate
        input: PathBuf,

        /// Configuration file (defaults to blockpress.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show document statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the semantic color palette
    Palette,
}
