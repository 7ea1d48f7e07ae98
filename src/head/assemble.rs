//! Layered head tag merging.
//!
//! Layers are applied in order, base first and most specific last. A tag
//! whose identity was already emitted replaces the earlier tag's value but
//! keeps its position:
//!
//! ```text
//! layer 0: [robots=noindex, og:type=website]
//! layer 1: [description=Docs, robots=index]
//! output : [robots=index, og:type=website, description=Docs]
//! ```

use super::HeadTag;
use crate::site::Result;
use rustc_hash::FxHashMap;

/// Ordered upsert of head tags keyed by identity.
#[derive(Debug, Default)]
pub struct HeadTagAssembler {
    tags: Vec<HeadTag>,
    slots: FxHashMap<String, usize>,
}

impl HeadTagAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `layers` in order into one deduplicated sequence.
    pub fn merge<L>(layers: impl IntoIterator<Item = L>) -> Result<Vec<HeadTag>>
    where
        L: AsRef<[HeadTag]>,
    {
        let mut assembler = Self::new();
        for layer in layers {
            assembler.push_layer(layer.as_ref())?;
        }
        Ok(assembler.finish())
    }

    /// Apply one layer on top of what was merged so far.
    ///
    /// On error the assembler may hold a partially applied layer; callers
    /// drop it rather than keep merging.
    pub fn push_layer(&mut self, layer: &[HeadTag]) -> Result<()> {
        for tag in layer {
            self.upsert(tag)?;
        }
        Ok(())
    }

    fn upsert(&mut self, tag: &HeadTag) -> Result<()> {
        let identity = tag.identity()?;
        let mut tag = tag.clone();
        tag.tag = tag.kind()?.as_str().to_string();

        match self.slots.get(&identity) {
            Some(&slot) => self.tags[slot] = tag,
            None => {
                self.slots.insert(identity, self.tags.len());
                self.tags.push(tag);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags in first-seen order, carrying last-seen values.
    pub fn finish(self) -> Vec<HeadTag> {
        self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::head::{Attrs, TagKind};
    use crate::site::SiteError;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_later_layer_overrides_value() {
        let merged = HeadTagAssembler::merge([
            vec![HeadTag::meta_name("robots", "noindex")],
            vec![HeadTag::meta_name("robots", "index, follow")],
        ])
        .unwrap();

        assert_eq!(merged, vec![HeadTag::meta_name("robots", "index, follow")]);
    }

    #[test]
    fn test_first_seen_position_kept() {
        let base = vec![
            HeadTag::meta_name("robots", "noindex"),
            HeadTag::meta_property("og:type", "website"),
            HeadTag::link("icon", "/favicon.ico"),
        ];
        let overrides = vec![
            HeadTag::meta_name("description", "Docs"),
            HeadTag::link("icon", "/logo.svg"),
            HeadTag::meta_name("robots", "index"),
        ];

        let base_only = HeadTagAssembler::merge([&base]).unwrap();
        let merged = HeadTagAssembler::merge([&base, &overrides]).unwrap();

        let pos = |tags: &[HeadTag], id: &str| {
            tags.iter()
                .position(|t| t.identity().unwrap() == id)
                .unwrap()
        };
        for id in ["meta:name=robots", "link:rel=icon"] {
            assert_eq!(pos(&merged[..], id), pos(&base_only[..], id));
        }

        assert_eq!(merged.len(), 4);
        assert_eq!(merged[0].attrs.get("content"), Some("index"));
        assert_eq!(merged[2].attrs.get("href"), Some("/logo.svg"));
        assert_eq!(merged[3].attrs.get("name"), Some("description"));
    }

    #[test]
    fn test_meta_name_case_collapses() {
        let merged = HeadTagAssembler::merge([
            vec![HeadTag::meta_name("Description", "Base")],
            vec![HeadTag::meta_name("description", "Page")],
        ])
        .unwrap();

        assert_eq!(merged, vec![HeadTag::meta_name("description", "Page")]);
    }

    #[test]
    fn test_duplicates_within_one_layer() {
        let merged = HeadTagAssembler::merge([vec![
            HeadTag::meta_name("theme-color", "#fff"),
            HeadTag::meta_name("theme-color", "#000"),
        ]])
        .unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].attrs.get("content"), Some("#000"));
    }

    #[test]
    fn test_identities_unique_in_output() {
        let layers = [
            vec![
                HeadTag::meta_name("robots", "noindex"),
                HeadTag::link("stylesheet", "/a.css"),
                HeadTag::json_ld(r#"{"@type":"WebSite"}"#),
            ],
            vec![
                HeadTag::link("stylesheet", "/b.css"),
                HeadTag::meta_name("robots", "index"),
                HeadTag::json_ld(r#"{"@type":"Organization"}"#),
            ],
        ];
        let merged = HeadTagAssembler::merge(&layers).unwrap();

        let ids: FxHashSet<_> = merged.iter().map(|t| t.identity().unwrap()).collect();
        assert_eq!(ids.len(), merged.len());
        assert_eq!(merged.len(), 4);

        let json_ld: Vec<_> = merged.iter().filter(|t| t.body.is_some()).collect();
        assert_eq!(json_ld.len(), 1);
        assert_eq!(json_ld[0].body.as_deref(), Some(r#"{"@type":"Organization"}"#));
    }

    #[test]
    fn test_tag_name_normalized() {
        let upper = HeadTag {
            tag: "META".into(),
            attrs: [("name", "robots"), ("content", "index")].into_iter().collect(),
            body: None,
        };
        let merged = HeadTagAssembler::merge([vec![upper]]).unwrap();
        assert_eq!(merged[0].tag, "meta");
    }

    #[test]
    fn test_unsupported_tag_kind() {
        let style = HeadTag {
            tag: "style".into(),
            attrs: Attrs::new(),
            body: Some("body{}".into()),
        };
        let err = HeadTagAssembler::merge([vec![HeadTag::new(TagKind::Meta, Attrs::new()), style]])
            .unwrap_err();
        assert_eq!(err, SiteError::UnsupportedTagKind("style".into()));
    }

    #[test]
    fn test_empty_layers() {
        let merged = HeadTagAssembler::merge(Vec::<Vec<HeadTag>>::new()).unwrap();
        assert!(merged.is_empty());
    }
}
