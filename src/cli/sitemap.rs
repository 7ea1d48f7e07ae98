//! `sitemap` command: discover routes and write `sitemap.xml`.

use super::build_config;
use crate::config::SiteFile;
use crate::generator::{minify_xml, routes};
use anyhow::Result;
use std::io::{Write, stdout};

pub fn run_sitemap(file: &SiteFile, minify: bool, dry: bool) -> Result<()> {
    let config = build_config(file)?;
    let routes = routes::discover(&file.content_dir())?;
    let minify = minify || file.build.minify;

    if dry {
        let xml = config.sitemap.render(&routes);
        let mut out = stdout().lock();
        out.write_all(&minify_xml(xml.as_bytes(), minify))?;
        return Ok(());
    }

    config
        .sitemap
        .write(&file.output_dir(), &file.build.sitemap, &routes, minify)?;
    Ok(())
}
