//! Per-locale SEO defaults: Open Graph, Twitter Card and hreflang tags.
//!
//! Only locale-level values live here. Page-specific tags (`og:title`,
//! `og:url`, ...) come from the page layer passed to
//! `SiteConfig::page_head`.

use super::HeadTag;
use crate::core::Hostname;
use crate::locale::{Locale, LocaleRegistry};

/// Default Open Graph tags for one locale.
pub struct OgDefaults<'a> {
    pub og_type: &'static str,
    pub site_name: &'a str,
    pub locale: String,
    pub description: &'a str,
    pub twitter_card: &'static str,
}

impl<'a> OgDefaults<'a> {
    pub fn from_locale(locale: &'a Locale) -> Self {
        Self {
            og_type: "website",
            site_name: &locale.title,
            locale: locale.og_locale(),
            description: &locale.description,
            twitter_card: "summary_large_image",
        }
    }

    /// Empty title/description produce no tag.
    pub fn into_tags(self) -> Vec<HeadTag> {
        let mut tags = vec![
            HeadTag::meta_property("og:type", self.og_type),
            HeadTag::meta_property("og:locale", self.locale),
        ];
        if !self.site_name.is_empty() {
            tags.push(HeadTag::meta_property("og:site_name", self.site_name));
        }
        if !self.description.is_empty() {
            tags.push(HeadTag::meta_name("description", self.description));
            tags.push(HeadTag::meta_property("og:description", self.description));
        }
        tags.push(HeadTag::meta_name("twitter:card", self.twitter_card));
        tags
    }
}

/// `<link rel="canonical">` plus one `rel="alternate"` per locale for `path`,
/// and an `x-default` pointing at the default locale.
pub fn alternates(registry: &LocaleRegistry, hostname: &Hostname, path: &str) -> Vec<HeadTag> {
    let Some(current) = registry.resolve(path) else {
        return Vec::new();
    };

    let own_prefix = registry.path_prefix(current);
    let neutral = match path.strip_prefix(&*own_prefix) {
        Some(rest) if rest.starts_with('/') => rest,
        _ => "/",
    };

    let mut tags = vec![HeadTag::link("canonical", hostname.absolute(path))];
    for locale in registry.all() {
        let href = hostname.absolute(&format!("{}{}", registry.path_prefix(locale), neutral));
        tags.push(HeadTag::link("alternate", href).with_attr("hreflang", &locale.lang));
    }
    if let Some(default) = registry.default_locale() {
        let href = hostname.absolute(&format!("{}{}", registry.path_prefix(default), neutral));
        tags.push(HeadTag::link("alternate", href).with_attr("hreflang", "x-default"));
    }
    tags
}
