//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Multi-locale documentation site configuration builder
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: docsite.toml)
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the site configuration and report problems
    #[command(visible_alias = "c")]
    Check,

    /// Print the built site configuration as JSON
    #[command(visible_alias = "d")]
    Dump {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Render the merged <head> tags of a page
    Head {
        /// Page path, e.g. `/zh/guide/`
        #[arg(default_value = "/")]
        path: String,
    },

    /// Generate sitemap.xml from the content tree
    #[command(visible_alias = "s")]
    Sitemap {
        /// Strip whitespace between XML elements
        #[arg(short, long)]
        minify: bool,

        /// Print the sitemap instead of writing it
        #[arg(long)]
        dry: bool,
    },
}
