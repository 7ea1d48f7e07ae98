//! Build-time outputs derived from the content tree.
//!
//! - **Routes**: page routes discovered from Markdown sources
//! - **Sitemap**: search engine indexing (`sitemap.xml`)

pub mod routes;
pub mod sitemap;

use crate::core::UrlPath;
use serde::Serialize;
use std::borrow::Cow;

/// A page route discovered from the content tree.
///
/// The url is always normalized on construction (`/guide` becomes
/// `/guide/`), so transforms and deduplication see one form per page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    pub url: UrlPath,
}

impl Route {
    pub fn new(url: impl Into<UrlPath>) -> Self {
        Self { url: url.into() }
    }
}

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}
