//! Sitemap generation.
//!
//! Every discovered route passes through a [`SitemapTransform`], which
//! attaches crawler hints. The result is rendered as `sitemap.xml`:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use super::{Route, minify_xml};
use crate::core::escape::escape_xml;
use crate::core::{Hostname, UrlPath};
use crate::log;
use crate::utils::plural_count;
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Priority of the site root.
pub const ROOT_PRIORITY: f32 = 1.0;
/// Priority of every other page.
pub const DEFAULT_PRIORITY: f32 = 0.8;

/// How often crawlers should expect a page to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<url>` of the sitemap. `priority` is within `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: UrlPath,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

/// Maps a discovered route to its sitemap entry.
///
/// Implementations must be pure: the same url always yields an equal entry,
/// so callers are free to cache results by url.
pub trait SitemapTransform: Send + Sync {
    fn transform(&self, route: &Route) -> SitemapEntry;
}

/// Static policy: everything weekly, the root page ranked highest.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyPolicy;

impl SitemapTransform for WeeklyPolicy {
    fn transform(&self, route: &Route) -> SitemapEntry {
        let priority = if route.url.is_root() {
            ROOT_PRIORITY
        } else {
            DEFAULT_PRIORITY
        };
        SitemapEntry {
            url: route.url.clone(),
            changefreq: ChangeFreq::Weekly,
            priority,
        }
    }
}

/// Hostname plus the transform bound at build time.
#[derive(Clone)]
pub struct Sitemap {
    hostname: Hostname,
    transform: Arc<dyn SitemapTransform>,
}

impl fmt::Debug for Sitemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sitemap")
            .field("hostname", &self.hostname)
            .finish_non_exhaustive()
    }
}

impl Serialize for Sitemap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Sitemap", 1)?;
        s.serialize_field("hostname", &self.hostname)?;
        s.end()
    }
}

impl Sitemap {
    pub fn new(hostname: Hostname, transform: Arc<dyn SitemapTransform>) -> Self {
        Self {
            hostname,
            transform,
        }
    }

    pub fn hostname(&self) -> &Hostname {
        &self.hostname
    }

    pub fn transform(&self, route: &Route) -> SitemapEntry {
        self.transform.transform(route)
    }

    /// Transform routes, dropping repeated urls (first occurrence wins).
    pub fn entries(&self, routes: &[Route]) -> Vec<SitemapEntry> {
        let mut seen = FxHashSet::default();
        routes
            .iter()
            .filter(|route| seen.insert(route.url.clone()))
            .map(|route| self.transform(route))
            .collect()
    }

    pub fn render(&self, routes: &[Route]) -> String {
        self.render_entries(&self.entries(routes))
    }

    fn render_entries(&self, entries: &[SitemapEntry]) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in entries {
            let loc = self.hostname.absolute(&entry.url.to_encoded());
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&loc));
            xml.push_str("</loc>\n    <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(&format!("{:.1}", entry.priority.clamp(0.0, 1.0)));
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write `sitemap.xml` (or `file_name`) into `output_dir`.
    pub fn write(
        &self,
        output_dir: &Path,
        file_name: &Path,
        routes: &[Route],
        minify: bool,
    ) -> Result<PathBuf> {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;

        let sitemap_path = output_dir.join(file_name);
        let entries = self.entries(routes);
        let xml = self.render_entries(&entries);
        let xml = minify_xml(xml.as_bytes(), minify);

        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{} ({})", sitemap_path.display(), plural_count(entries.len(), "url"));
        Ok(sitemap_path)
    }
}
