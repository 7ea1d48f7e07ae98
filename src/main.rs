//! docsite - configuration builder for multi-locale documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod generator;
mod head;
mod locale;
mod logger;
mod nav;
mod site;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteFile;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let mut file = SiteFile::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    file.apply_overrides(cli.content.as_deref(), cli.output.as_deref());
    debug!("config"; "loaded from {}", file.root.display());

    match &cli.command {
        Commands::Check => cli::check::run_check(&file),
        Commands::Dump { pretty } => cli::dump::run_dump(&file, *pretty),
        Commands::Head { path } => cli::head::run_head(&file, path),
        Commands::Sitemap { minify, dry } => cli::sitemap::run_sitemap(&file, *minify, *dry),
    }
}
