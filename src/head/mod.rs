//! `<head>` tag descriptors and layered merging.
//!
//! A head tag is identified by its tag name plus a key attribute:
//!
//! | Tag      | Identity                                                   |
//! |----------|------------------------------------------------------------|
//! | `meta`   | `name`, `property`, `http-equiv` or `charset`              |
//! | `link`   | `rel` (multi-instance rels also include `href`/`hreflang`) |
//! | `script` | `application/ld+json` type, else `src`, else inline body   |
//!
//! Two tags with the same identity never both reach the output; see
//! [`HeadTagAssembler`] for the override rules.

mod assemble;
mod attrs;
pub mod seo;

pub use assemble::HeadTagAssembler;
pub use attrs::Attrs;

use crate::core::escape::{escape_attr, guard_raw_text};
use crate::site::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// MIME type of structured-data script blocks.
pub const JSON_LD: &str = "application/ld+json";

/// `rel` values that legitimately appear many times in one document.
const MULTI_REL: &[&str] = &[
    "alternate",
    "dns-prefetch",
    "modulepreload",
    "preconnect",
    "prefetch",
    "preload",
    "stylesheet",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Meta,
    Link,
    Script,
}

impl TagKind {
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "meta" => Ok(Self::Meta),
            "link" => Ok(Self::Link),
            "script" => Ok(Self::Script),
            _ => Err(SiteError::UnsupportedTagKind(name.to_string())),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::Link => "link",
            Self::Script => "script",
        }
    }
}

/// A `<head>` element descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Attrs::is_empty")]
    pub attrs: Attrs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl HeadTag {
    pub fn new(kind: TagKind, attrs: Attrs) -> Self {
        Self {
            tag: kind.as_str().to_string(),
            attrs,
            body: None,
        }
    }

    /// `<meta name="..." content="...">`
    pub fn meta_name(name: &str, content: impl Into<String>) -> Self {
        Self::new(
            TagKind::Meta,
            [("name", name.to_string()), ("content", content.into())]
                .into_iter()
                .collect(),
        )
    }

    /// `<meta property="..." content="...">`
    pub fn meta_property(property: &str, content: impl Into<String>) -> Self {
        Self::new(
            TagKind::Meta,
            [("property", property.to_string()), ("content", content.into())]
                .into_iter()
                .collect(),
        )
    }

    /// `<link rel="..." href="...">`
    pub fn link(rel: &str, href: impl Into<String>) -> Self {
        Self::new(
            TagKind::Link,
            [("rel", rel.to_string()), ("href", href.into())]
                .into_iter()
                .collect(),
        )
    }

    /// `<script type="application/ld+json">...</script>`
    pub fn json_ld(body: impl Into<String>) -> Self {
        let mut tag = Self::new(TagKind::Script, [("type", JSON_LD)].into_iter().collect());
        tag.body = Some(body.into());
        tag
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn kind(&self) -> Result<TagKind> {
        TagKind::parse(&self.tag)
    }

    /// Identity used for override semantics when merging layers.
    pub fn identity(&self) -> Result<String> {
        let kind = self.kind()?;
        let attrs = &self.attrs;

        let key = match kind {
            // `name` and `http-equiv` values are ASCII case-insensitive, `property` is not
            TagKind::Meta => ["name", "property", "http-equiv"]
                .into_iter()
                .find_map(|key| {
                    attrs.get(key).map(|v| match key {
                        "property" => format!("{key}={v}"),
                        _ => format!("{key}={}", v.to_ascii_lowercase()),
                    })
                })
                .or_else(|| attrs.get("charset").map(|_| "charset".to_string())),
            TagKind::Link => attrs.get("rel").map(|rel| {
                let rel = rel.to_ascii_lowercase();
                if !MULTI_REL.contains(&rel.as_str()) {
                    return format!("rel={rel}");
                }
                match attrs.get("hreflang") {
                    Some(lang) => format!("rel={rel};hreflang={lang}"),
                    None => format!("rel={rel};href={}", attrs.get("href").unwrap_or_default()),
                }
            }),
            TagKind::Script => match attrs.get("type") {
                Some(ty) if ty.eq_ignore_ascii_case(JSON_LD) => Some(JSON_LD.to_string()),
                _ => attrs.get("src").map(|src| format!("src={src}")),
            },
        };

        Ok(format!(
            "{}:{}",
            kind.as_str(),
            key.unwrap_or_else(|| self.fingerprint())
        ))
    }

    /// Fallback identity for tags without a key attribute: the whole tag.
    fn fingerprint(&self) -> String {
        let mut out = String::from("*");
        for (name, value) in self.attrs.iter() {
            let _ = write!(out, "{name}={value};");
        }
        if let Some(body) = &self.body {
            out.push_str(body);
        }
        out
    }

    /// Render as an HTML fragment.
    pub fn to_html(&self) -> Result<String> {
        let kind = self.kind()?;
        let mut html = format!("<{}", kind.as_str());
        for (name, value) in self.attrs.iter() {
            if value.is_empty() {
                let _ = write!(html, " {name}");
            } else {
                let _ = write!(html, " {name}=\"{}\"", escape_attr(value));
            }
        }
        html.push('>');

        if kind == TagKind::Script {
            if let Some(body) = &self.body {
                html.push_str(&guard_raw_text(body));
            }
            html.push_str("</script>");
        }
        Ok(html)
    }
}

/// Render a merged tag sequence, one tag per line.
pub fn render(tags: &[HeadTag]) -> Result<String> {
    let lines = tags
        .iter()
        .map(HeadTag::to_html)
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}
