//! Supported locales and their display metadata.
//!
//! The first registered locale is the default (root) locale. Its pages live
//! at the site root; every other locale `key` owns the `/{key}/` subtree.
//!
//! ```text
//! root  (en-US)  ->  /guide/
//! zh    (zh-CN)  ->  /zh/guide/
//! ```

pub mod tag;

use crate::debug;
use crate::site::{Result, SiteError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A language/region configuration unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Unique key, also the route prefix for non-default locales.
    pub key: String,
    /// Label shown in the language switcher.
    pub label: String,
    /// BCP-47 language tag (e.g. `en-US`, `zh-CN`).
    #[serde(alias = "language_tag")]
    pub lang: String,
    pub title: String,
    pub description: String,
}

impl Locale {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            lang: lang.into(),
            title: String::new(),
            description: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Open Graph locale form of the language tag (`zh-CN` -> `zh_CN`).
    pub fn og_locale(&self) -> String {
        self.lang.replace('-', "_")
    }
}

/// A key becomes the `/{key}/` route prefix, so it must be one clean
/// path segment.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '?' | '#') || c.is_whitespace() || c.is_control())
}

/// Registered locales, in registration order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl LocaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a locale. Keys must be unique and language tags well-formed.
    pub fn register(&mut self, locale: Locale) -> Result<()> {
        if !is_valid_key(&locale.key) {
            return Err(SiteError::InvalidLocaleKey(locale.key));
        }
        if self.index.contains_key(&locale.key) {
            return Err(SiteError::DuplicateLocale(locale.key));
        }
        if !tag::is_well_formed(&locale.lang) {
            return Err(SiteError::InvalidLanguageTag {
                key: locale.key,
                tag: locale.lang,
            });
        }

        debug!("locale"; "registered `{}` ({})", locale.key, locale.lang);
        self.index.insert(locale.key.clone(), self.locales.len());
        self.locales.push(locale);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&Locale> {
        self.index
            .get(key)
            .map(|&i| &self.locales[i])
            .ok_or_else(|| SiteError::LocaleNotFound(key.to_string()))
    }

    /// All locales in registration order.
    pub fn all(&self) -> &[Locale] {
        &self.locales
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// The first registered locale.
    pub fn default_locale(&self) -> Option<&Locale> {
        self.locales.first()
    }

    pub fn is_default(&self, locale: &Locale) -> bool {
        self.default_locale().is_some_and(|d| d.key == locale.key)
    }

    /// Route prefix owned by a locale: `""` for the default locale,
    /// `/{key}` otherwise.
    pub fn path_prefix(&self, locale: &Locale) -> Cow<'_, str> {
        if self.is_default(locale) {
            Cow::Borrowed("")
        } else {
            Cow::Owned(format!("/{}", locale.key))
        }
    }

    /// Find the locale owning a page path, falling back to the default locale.
    pub fn resolve(&self, path: &str) -> Option<&Locale> {
        self.locales
            .iter()
            .skip(1)
            .find(|l| {
                path.strip_prefix('/')
                    .and_then(|rest| rest.strip_prefix(l.key.as_str()))
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            })
            .or_else(|| self.default_locale())
    }
}
