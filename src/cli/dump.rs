//! `dump` command: the built configuration as JSON on stdout.

use super::build_config;
use crate::config::SiteFile;
use anyhow::Result;
use std::io::{Write, stdout};

pub fn run_dump(file: &SiteFile, pretty: bool) -> Result<()> {
    let config = build_config(file)?;
    let json = if pretty {
        serde_json::to_string_pretty(&*config)?
    } else {
        serde_json::to_string(&*config)?
    };

    let mut out = stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}
