//! Site configuration: the composition root.
//!
//! [`Site::build`] turns a declarative [`SiteInput`] into an immutable
//! [`SiteConfig`] in a fixed order:
//!
//! ```text
//! register locales ─► nav + sidebar per locale ─► merge head layers ─► bind sitemap
//! ```
//!
//! The first failing step aborts the build; no partial config is returned.
//! A `Site` builds exactly once. Rebuilding (e.g. after the config file
//! changed) means creating a new `Site`.

mod error;

pub use error::{Result, SiteError};

use crate::core::Hostname;
use crate::generator::Route;
use crate::generator::sitemap::{Sitemap, SitemapEntry, SitemapTransform, WeeklyPolicy};
use crate::head::seo::{OgDefaults, alternates};
use crate::head::{HeadTag, HeadTagAssembler};
use crate::locale::{Locale, LocaleRegistry};
use crate::nav::{NavItem, NavigationBuilder, RouteGroup, SidebarGroup, SidebarTree};
use crate::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Input
// ============================================================================

/// Default color scheme handed to the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// One locale together with its navigation and head layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocaleSpec {
    /// Route prefix of non-default locales. Required.
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, alias = "language_tag")]
    pub lang: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Top navigation, in display order.
    #[serde(default)]
    pub nav: Vec<NavItem>,
    /// Sidebar route groups.
    #[serde(default)]
    pub sidebar: Vec<RouteGroup>,
    /// Head tags applied to every page of this locale.
    #[serde(default)]
    pub head: Vec<HeadTag>,
}

impl LocaleSpec {
    pub fn from_locale(locale: Locale) -> Self {
        Self {
            key: locale.key,
            label: locale.label,
            lang: locale.lang,
            title: locale.title,
            description: locale.description,
            ..Self::default()
        }
    }

    pub fn with_nav(mut self, nav: Vec<NavItem>) -> Self {
        self.nav = nav;
        self
    }

    pub fn with_sidebar(mut self, sidebar: Vec<RouteGroup>) -> Self {
        self.sidebar = sidebar;
        self
    }

    pub fn with_head(mut self, head: Vec<HeadTag>) -> Self {
        self.head = head;
        self
    }

    pub fn locale(&self) -> Locale {
        Locale {
            key: self.key.clone(),
            label: self.label.clone(),
            lang: self.lang.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

/// A named layer of head tags. Layers merge base first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadLayer {
    pub name: String,
    pub tags: Vec<HeadTag>,
}

impl HeadLayer {
    pub fn new(name: impl Into<String>, tags: Vec<HeadTag>) -> Self {
        Self {
            name: name.into(),
            tags,
        }
    }
}

/// Everything [`Site::build`] consumes.
#[derive(Debug, Clone, Copy)]
pub struct SiteInput<'a> {
    pub locales: &'a [LocaleSpec],
    pub head: &'a [HeadLayer],
    pub hostname: &'a str,
    pub appearance: Appearance,
    /// Presentational theme settings, passed through untouched.
    pub theme: &'a toml::Table,
}

// ============================================================================
// Output
// ============================================================================

/// Built navigation for one locale.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleNav {
    pub locale: String,
    pub nav: Vec<NavItem>,
    pub sidebar: SidebarTree,
    pub head: Vec<HeadTag>,
}

/// The validated, immutable site configuration.
#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    pub locales: LocaleRegistry,
    /// Per-locale navigation, in locale registration order.
    pub navigation: Vec<LocaleNav>,
    /// Site-wide head tags, merged from every head layer.
    pub head: Vec<HeadTag>,
    pub sitemap: Sitemap,
    pub appearance: Appearance,
    pub theme: toml::Table,
}

impl SiteConfig {
    fn assemble(input: &SiteInput<'_>, transform: Arc<dyn SitemapTransform>) -> Result<Self> {
        let mut locales = LocaleRegistry::new();
        for spec in input.locales {
            locales.register(spec.locale())?;
        }

        let builder = NavigationBuilder::new(&locales);
        let navigation = input
            .locales
            .iter()
            .map(|spec| {
                let locale = locales.get(&spec.key)?;
                Ok(LocaleNav {
                    locale: locale.key.clone(),
                    nav: builder.build_top_nav(locale, &spec.nav)?,
                    sidebar: builder.build_sidebar(locale, &spec.sidebar)?,
                    head: Vec::new(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let head = HeadTagAssembler::merge(input.head.iter().map(|layer| &layer.tags))?;
        debug!("head"; "{} layers -> {} tags", input.head.len(), head.len());
        let navigation = navigation
            .into_iter()
            .zip(input.locales)
            .map(|(nav, spec)| {
                Ok(LocaleNav {
                    head: HeadTagAssembler::merge([&spec.head])?,
                    ..nav
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let sitemap = Sitemap::new(Hostname::parse(input.hostname)?, transform);

        Ok(Self {
            locales,
            navigation,
            head,
            sitemap,
            appearance: input.appearance,
            theme: input.theme.clone(),
        })
    }

    pub fn default_locale(&self) -> Option<&Locale> {
        self.locales.default_locale()
    }

    pub fn nav_for(&self, key: &str) -> Result<&LocaleNav> {
        self.navigation
            .iter()
            .find(|n| n.locale == key)
            .ok_or_else(|| SiteError::LocaleNotFound(key.to_string()))
    }

    /// Sidebar sections for a page path, from the locale owning the path.
    pub fn sidebar_for(&self, path: &str) -> Option<&[SidebarGroup]> {
        let locale = self.locales.resolve(path)?;
        self.nav_for(&locale.key).ok()?.sidebar.resolve(path)
    }

    /// Head tags for a page of locale `key`.
    ///
    /// Layers, least specific first: site head, locale SEO defaults,
    /// locale head, page tags.
    pub fn page_head(&self, key: &str, page: &[HeadTag]) -> Result<Vec<HeadTag>> {
        let locale = self.locales.get(key)?;
        let nav = self.nav_for(key)?;

        let og = OgDefaults::from_locale(locale).into_tags();
        let layers: [&[HeadTag]; 4] = [&self.head, &og, &nav.head, page];
        HeadTagAssembler::merge(layers)
    }

    /// Like [`page_head`](Self::page_head) for the locale owning `path`,
    /// with canonical and hreflang links inserted below the page tags.
    pub fn page_head_at(&self, path: &str, page: &[HeadTag]) -> Result<Vec<HeadTag>> {
        let locale = self
            .locales
            .resolve(path)
            .ok_or_else(|| SiteError::LocaleNotFound(path.to_string()))?;

        let links = alternates(&self.locales, self.sitemap.hostname(), path);
        let layers: [&[HeadTag]; 2] = [&links, page];
        self.page_head(&locale.key, &HeadTagAssembler::merge(layers)?)
    }

    pub fn sitemap_entry(&self, route: &Route) -> SitemapEntry {
        self.sitemap.transform(route)
    }
}

// ============================================================================
// Root
// ============================================================================

#[derive(Debug, Clone, Default)]
enum BuildState {
    #[default]
    Unbuilt,
    Built(Arc<SiteConfig>),
}

/// One-shot builder owning the site configuration.
#[derive(Debug, Default)]
pub struct Site {
    state: BuildState,
}

impl Site {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build with the default weekly sitemap policy.
    pub fn build(&mut self, input: &SiteInput<'_>) -> Result<Arc<SiteConfig>> {
        self.build_with(input, Arc::new(WeeklyPolicy))
    }

    /// Build with a custom sitemap transform.
    pub fn build_with(
        &mut self,
        input: &SiteInput<'_>,
        transform: Arc<dyn SitemapTransform>,
    ) -> Result<Arc<SiteConfig>> {
        if let BuildState::Built(_) = self.state {
            return Err(SiteError::AlreadyBuilt);
        }

        let config = Arc::new(SiteConfig::assemble(input, transform)?);
        self.state = BuildState::Built(Arc::clone(&config));
        Ok(config)
    }

    pub fn is_built(&self) -> bool {
        matches!(self.state, BuildState::Built(_))
    }

    pub fn config(&self) -> Option<&Arc<SiteConfig>> {
        match &self.state {
            BuildState::Built(config) => Some(config),
            BuildState::Unbuilt => None,
        }
    }
}
