//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── mod.rs     # SiteFile (root), section types, loading
//! ├── error.rs   # ConfigError
//! └── util.rs    # find_config_file
//! ```
//!
//! # Sections
//!
//! | Section       | Purpose                                         |
//! |---------------|-------------------------------------------------|
//! | `[site]`      | hostname, appearance, opaque `[site.theme]`     |
//! | `[[locales]]` | locale metadata with its nav, sidebar and head  |
//! | `[[head]]`    | site-wide head tag layers, base first           |
//! | `[build]`     | content/output directories, sitemap file        |
//!
//! The file is only a declarative description; [`SiteFile::build`] turns it
//! into a validated [`SiteConfig`].

mod error;
mod util;

pub use error::ConfigError;
pub use util::find_config_file;

use crate::log;
use crate::site::{Appearance, HeadLayer, LocaleSpec, Site, SiteConfig, SiteInput};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default config file name.
pub const CONFIG_FILE: &str = "docsite.toml";

pub type Result<T> = std::result::Result<T, ConfigError>;

/// `[site]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Absolute base url used for sitemap `<loc>` and canonical links.
    pub hostname: String,
    pub appearance: Appearance,
    /// Theme settings (logo, social links, footer, search). Not interpreted.
    pub theme: toml::Table,
}

/// `[build]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Markdown source directory.
    pub content: PathBuf,
    /// Output directory for generated files.
    pub output: PathBuf,
    /// Sitemap file name inside `output`.
    pub sitemap: PathBuf,
    /// Strip whitespace between XML elements.
    pub minify: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            content: "docs".into(),
            output: "dist".into(),
            sitemap: "sitemap.xml".into(),
            minify: false,
        }
    }
}

/// Root of `docsite.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteFile {
    /// Directory containing the config file. Relative build paths resolve
    /// against it.
    #[serde(skip)]
    pub root: PathBuf,
    pub site: SiteSection,
    pub locales: Vec<LocaleSpec>,
    pub head: Vec<HeadLayer>,
    pub build: BuildSection,
}

impl SiteFile {
    /// Locate `config_name` upward from the working directory and load it.
    pub fn load(config_name: &Path) -> Result<Self> {
        let path = find_config_file(config_name)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;
        Self::from_path(&path)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Override build directories from the command line.
    pub fn apply_overrides(&mut self, content: Option<&Path>, output: Option<&Path>) {
        if let Some(content) = content {
            self.build.content = content.to_path_buf();
        }
        if let Some(output) = output {
            self.build.output = output.to_path_buf();
        }
    }

    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.build.content)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.build.output)
    }

    /// Borrowed view consumed by [`Site::build`].
    pub fn input(&self) -> SiteInput<'_> {
        SiteInput {
            locales: &self.locales,
            head: &self.head,
            hostname: &self.site.hostname,
            appearance: self.site.appearance,
            theme: &self.site.theme,
        }
    }

    /// Validate and build the site configuration.
    pub fn build(&self) -> Result<Arc<SiteConfig>> {
        Ok(Site::new().build(&self.input())?)
    }
}
