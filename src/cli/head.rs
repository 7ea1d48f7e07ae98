//! `head` command: print the merged `<head>` fragment of one page.

use super::build_config;
use crate::config::SiteFile;
use crate::head;
use anyhow::{Context, Result};
use std::io::{Write, stdout};

pub fn run_head(file: &SiteFile, path: &str) -> Result<()> {
    let config = build_config(file)?;
    let tags = config
        .page_head_at(path, &[])
        .with_context(|| format!("Failed to assemble head for {path}"))?;

    let mut out = stdout().lock();
    writeln!(out, "{}", head::render(&tags)?)?;
    Ok(())
}
