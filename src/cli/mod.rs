//! Command-line interface module.

mod args;
pub mod check;
pub mod dump;
pub mod head;
pub mod sitemap;

pub use args::{Cli, Commands};

use crate::config::SiteFile;
use crate::site::SiteConfig;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Build the site configuration, attaching the config path to errors.
pub fn build_config(file: &SiteFile) -> Result<Arc<SiteConfig>> {
    file.build()
        .with_context(|| format!("Invalid site configuration in {}", file.root.display()))
}
