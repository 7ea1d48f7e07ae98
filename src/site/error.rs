//! Build-time configuration errors.
//!
//! Every variant is raised while the site configuration is being built.
//! None of them can occur afterwards: a built `SiteConfig` is validated
//! and immutable.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("locale `{0}` is registered twice")]
    DuplicateLocale(String),

    #[error("locale key `{0}` must be a non-empty path segment")]
    InvalidLocaleKey(String),

    #[error("locale `{key}` has malformed language tag `{tag}`")]
    InvalidLanguageTag { key: String, tag: String },

    #[error("locale `{0}` is not registered")]
    LocaleNotFound(String),

    #[error("link `{link}` in `{text}` must be root-relative (start with `/`)")]
    InvalidLink { text: String, link: String },

    #[error("sidebar prefix `{0}` is declared more than once")]
    DuplicatePrefix(String),

    #[error("unsupported head tag `<{0}>`, expected meta, link or script")]
    UnsupportedTagKind(String),

    #[error("site configuration is already built")]
    AlreadyBuilt,

    #[error("sitemap hostname `{hostname}` is invalid: {reason}")]
    InvalidHostname { hostname: String, reason: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::InvalidLink {
            text: "Guide".into(),
            link: "guide/".into(),
        };
        let display = err.to_string();
        assert!(display.contains("guide/"));
        assert!(display.contains("Guide"));

        assert_eq!(
            SiteError::UnsupportedTagKind("style".into()).to_string(),
            "unsupported head tag `<style>`, expected meta, link or script"
        );
    }
}
