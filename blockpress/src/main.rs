//! blockpress - render block-editor documents to styled HTML
//!
//! A CLI tool that turns the JSON written by a block editor into HTML
//! pages or fragments.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod cli;

use anyhow::{Context, Result};
use blockpress::block_model::validate;
use blockpress::pipeline::{self, BuildReport};
use blockpress::render_config::{RenderConfig, CONFIG_FILE_NAME};
use blockpress::style::PALETTE;
use blockpress::Document;
use clap::Parser;
use cli::{Cli, Commands, ListModeArg};
use std::path::{Path, PathBuf};

/// Main entry point for the blockpress CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force, title } => {
            handle_init_command(path, force, title)?;
        }

        Commands::Render {
            input,
            output,
            dark,
            fragment,
            list_mode,
            config,
            verbose,
        } => {
            init_logging(verbose);
            handle_render_command(input, output, dark, fragment, list_mode, config, verbose)?;
        }

        Commands::Build {
            input,
            output,
            dark,
            config,
            verbose,
        } => {
            init_logging(verbose);
            handle_build_command(input, output, dark, config)?;
        }

        Commands::Check {
            input,
            config,
            verbose,
        } => {
            init_logging(verbose);
            handle_check_command(input, config, verbose)?;
        }

        Commands::Palette => {
            handle_palette_command();
        }
    }

    Ok(())
}

/// Install the logger; `--verbose` forces info level, otherwise `RUST_LOG` applies
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Info);
    }
    let _ = builder.try_init();
}

/// Load the configuration file, falling back to defaults
///
/// An explicit path must exist; the default `blockpress.toml` in `dir` is
/// only read when present.
fn load_config(explicit: Option<PathBuf>, dir: &Path) -> Result<RenderConfig> {
    if let Some(path) = explicit {
        return RenderConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    let default_path = dir.join(CONFIG_FILE_NAME);
    if default_path.is_file() {
        log::info!("Using config {}", default_path.display());
        return RenderConfig::load(&default_path)
            .with_context(|| format!("Failed to load config {}", default_path.display()));
    }

    Ok(RenderConfig::default())
}

/// Handle the init command
fn handle_init_command(path: Option<PathBuf>, force: bool, title: Option<String>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| PathBuf::from("."));
    let config_path = target_path.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite",
            config_path.display()
        );
    }

    if !target_path.exists() {
        std::fs::create_dir_all(&target_path)
            .with_context(|| format!("Failed to create directory {}", target_path.display()))?;
    }

    let config = RenderConfig {
        site_title: title,
        ..RenderConfig::default()
    };
    config
        .save(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("✓ Wrote {}", config_path.display());
    Ok(())
}

/// Handle the render command
fn handle_render_command(
    input: PathBuf,
    output: Option<PathBuf>,
    dark: bool,
    fragment: bool,
    list_mode: Option<ListModeArg>,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let mut config = load_config(config, Path::new("."))?;
    if dark {
        config.dark_mode = true;
    }
    if fragment {
        config.standalone = false;
    }
    if let Some(mode) = list_mode {
        config.list_mode = mode.into();
    }

    let output = output.unwrap_or_else(|| input.with_extension("html"));

    println!("Rendering {}", input.display());
    let document = pipeline::render_file(&input, &output, &config)
        .with_context(|| format!("Failed to render {}", input.display()))?;

    if verbose {
        print_statistics(&document);
    }
    println!("✓ Successfully wrote: {}", output.display());

    Ok(())
}

/// Handle the build command
fn handle_build_command(
    input: PathBuf,
    output: PathBuf,
    dark: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config(config, &input)?;
    if dark {
        config.dark_mode = true;
    }

    println!("Building site...");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());

    let BuildReport { files, blocks } = pipeline::build_site(&input, &output, &config)
        .with_context(|| format!("Failed to build {}", input.display()))?;

    println!("\n✓ Rendered {} document(s), {} block(s)", files, blocks);

    Ok(())
}

/// Handle the check command
fn handle_check_command(input: PathBuf, config: Option<PathBuf>, verbose: bool) -> Result<()> {
    let config = load_config(config, Path::new("."))?;
    println!("Validating {}", input.display());

    let document = pipeline::load_document(&input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    if verbose {
        print_statistics(&document);
    }

    validate(&document, config.max_depth)
        .with_context(|| format!("{} failed validation", input.display()))?;

    println!("✓ No problems found");
    Ok(())
}

/// Handle the palette command
fn handle_palette_command() {
    println!("Semantic colors:\n");
    for entry in &PALETTE {
        println!(
            "  {:<8} {:<16} {}",
            entry.name, entry.foreground, entry.background
        );
    }
}

fn print_statistics(document: &Document) {
    println!("  - {} blocks", document.block_count());
    println!("  - {} words", document.word_count());
    println!("  - {} media", document.media_count());
    println!("  - {} tables", document.table_count());
}
