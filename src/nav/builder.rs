//! Per-locale navigation builder.
//!
//! Turns declarative route groups and nav items into localized structures.
//! Links are written once, relative to the default locale, and the builder
//! rewrites them under the locale's route prefix:
//!
//! ```text
//! locale zh, link /guide/      ->  /zh/guide/
//! locale zh, link /zh/guide/   ->  /zh/guide/   (already localized)
//! locale zh, link /zh          ->  /zh/
//! locale root, link /guide/    ->  /guide/
//! ```

use super::{NavItem, RouteGroup, SidebarGroup, SidebarTree};
use crate::debug;
use crate::locale::{Locale, LocaleRegistry};
use crate::site::{Result, SiteError};
use rustc_hash::FxHashSet;

pub struct NavigationBuilder<'a> {
    registry: &'a LocaleRegistry,
}

impl<'a> NavigationBuilder<'a> {
    pub fn new(registry: &'a LocaleRegistry) -> Self {
        Self { registry }
    }

    /// Build the sidebar tree for one locale.
    ///
    /// Group prefixes are localized like links, and must be unique after
    /// localization.
    pub fn build_sidebar(&self, locale: &Locale, groups: &[RouteGroup]) -> Result<SidebarTree> {
        let base = self.registry.path_prefix(locale);
        let mut seen = FxHashSet::default();
        let mut entries = Vec::with_capacity(groups.len());

        for group in groups {
            let prefix = localize(&base, "sidebar", &group.prefix)?;
            if !seen.insert(prefix.clone()) {
                return Err(SiteError::DuplicatePrefix(prefix));
            }

            let sections = group
                .sections
                .iter()
                .map(|section| {
                    Ok(SidebarGroup {
                        text: section.text.clone(),
                        items: localize_items(&base, &section.items)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            entries.push((prefix, sections));
        }

        debug!("nav"; "locale `{}`: {} sidebar prefixes", locale.key, entries.len());
        Ok(SidebarTree::from_entries(entries))
    }

    /// Build the top navigation for one locale. Declaration order is kept.
    pub fn build_top_nav(&self, locale: &Locale, items: &[NavItem]) -> Result<Vec<NavItem>> {
        let base = self.registry.path_prefix(locale);
        localize_items(&base, items)
    }
}

fn localize_items(base: &str, items: &[NavItem]) -> Result<Vec<NavItem>> {
    items
        .iter()
        .map(|item| {
            Ok(NavItem {
                text: item.text.clone(),
                link: localize(base, &item.text, &item.link)?,
            })
        })
        .collect()
}

/// `/path` but not `//host/path` or `/\host/path`, which browsers resolve
/// against another host.
fn is_root_relative(link: &str) -> bool {
    link.starts_with('/') && !link.starts_with("//") && !link.starts_with("/\\")
}

/// Rewrite a root-relative link under a locale prefix (`""` or `/{key}`).
fn localize(base: &str, text: &str, link: &str) -> Result<String> {
    if !is_root_relative(link) {
        return Err(SiteError::InvalidLink {
            text: text.to_string(),
            link: link.to_string(),
        });
    }

    if base.is_empty() {
        return Ok(link.to_string());
    }

    match link.strip_prefix(base) {
        Some("") => Ok(format!("{base}/")),
        Some(rest) if rest.starts_with('/') => Ok(link.to_string()),
        _ => Ok(format!("{base}{link}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LocaleRegistry {
        let mut registry = LocaleRegistry::new();
        registry
            .register(Locale::new("root", "English", "en-US"))
            .unwrap();
        registry.register(Locale::new("zh", "简体中文", "zh-CN")).unwrap();
        registry
    }

    fn guide_groups() -> Vec<RouteGroup> {
        vec![
            RouteGroup::new(
                "/guide/",
                vec![
                    SidebarGroup::new(
                        "Introduction",
                        vec![
                            NavItem::new("What is it?", "/guide/what"),
                            NavItem::new("Getting Started", "/guide/getting-started"),
                        ],
                    ),
                    SidebarGroup::new("Writing", vec![NavItem::new("Markdown", "/guide/markdown")]),
                ],
            ),
            RouteGroup::new(
                "/reference/",
                vec![SidebarGroup::new(
                    "Reference",
                    vec![NavItem::new("Config", "/reference/config")],
                )],
            ),
        ]
    }

    #[test]
    fn test_top_nav_prefixes_non_default_locale() {
        let registry = registry();
        let builder = NavigationBuilder::new(&registry);
        let zh = registry.get("zh").unwrap();

        let nav = builder
            .build_top_nav(zh, &[NavItem::new("Guide", "/guide/")])
            .unwrap();
        assert_eq!(nav, vec![NavItem::new("Guide", "/zh/guide/")]);
    }

    #[test]
    fn test_top_nav_default_locale_unchanged() {
        let registry = registry();
        let builder = NavigationBuilder::new(&registry);
        let root = registry.get("root").unwrap();

        let nav = builder
            .build_top_nav(root, &[NavItem::new("Guide", "/guide/")])
            .unwrap();
        assert_eq!(nav[0].link, "/guide/");
    }

    #[test]
    fn test_top_nav_preserves_order() {
        let registry = registry();
        let builder = NavigationBuilder::new(&registry);
        let zh = registry.get("zh").unwrap();
        let items = vec![
            NavItem::new("Reference", "/reference/"),
            NavItem::new("Guide", "/guide/"),
            NavItem::new("Changelog", "/changelog"),
        ];

        let texts: Vec<_> = builder
            .build_top_nav(zh, &items)
            .unwrap()
            .into_iter()
            .map(|i| i.text)
            .collect();
        assert_eq!(texts, ["Reference", "Guide", "Changelog"]);
    }

    #[test]
    fn test_already_localized_links_kept() {
        let registry = registry();
        let builder = NavigationBuilder::new(&registry);
        let zh = registry.get("zh").unwrap();

        let nav = builder
            .build_top_nav(
                zh,
                &[
                    NavItem::new("指南", "/zh/guide/"),
                    NavItem::new("首页", "/zh"),
                    NavItem::new("Home", "/"),
                ],
            )
            .unwrap();
        let links: Vec<_> = nav.iter().map(|i| i.link.as_str()).collect();
        assert_eq!(links, ["/zh/guide/", "/zh/", "/zh/"]);
    }

    #[test]
    fn test_key_lookalike_is_still_prefixed() {
        let registry = registry();
        let builder = NavigationBuilder::new(&registry);
        let zh = registry.get("zh").unwrap();

        let nav = builder
            .build_top_nav(zh, &[NavItem::new("ZhX", "/zhx/")])
            .unwrap();
        assert_eq!(nav[0].link, "/zh/zhx/");
    }

    #[test]
    fn test_invalid_link() {
        let registry = registry();
        let builder = NavigationBuilder::new(&registry);
        let root = registry.get("root").unwrap();

        let err = builder
            .build_top_nav(root, &[NavItem::new("Guide", "guide/")])
            .unwrap_err();
        assert_eq!(
            err,
            SiteError::InvalidLink {
                text: "Guide".into(),
                link: "guide/".into()
            }
        );

        let err = builder
            .build_top_nav(root, &[NavItem::new("GitHub", "https://github.com/x")])
            .unwrap_err();
        assert!(matches!(err, SiteError::InvalidLink { .. }));
    }

    #[test]
    fn test_protocol_relative_link_rejected() {
        let registry = registry();
        let builder = NavigationBuilder::new(&registry);

        for key in ["root", "zh"] {
            let locale = registry.get(key).unwrap();
            for link in ["//evil.example.com/x", "/\\evil.example.com/x"] {
                let err = builder
                    .build_top_nav(locale, &[NavItem::new("CDN", link)])
                    .unwrap_err();
                assert_eq!(
                    err,
                    SiteError::InvalidLink {
                        text: "CDN".into(),
                        link: link.into()
                    }
                );
            }
        }
    }

    #[test]
    fn test_protocol_relative_sidebar_rejected() {
        let registry = registry();
        let builder = NavigationBuilder::new(&registry);
        let root = registry.get("root").unwrap();

        let prefix = [RouteGroup::new("//evil.example.com/", vec![])];
        assert!(matches!(
            builder.build_sidebar(root, &prefix).unwrap_err(),
            SiteError::InvalidLink { .. }
        ));

        let item = [RouteGroup::new(
            "/guide/",
            vec![SidebarGroup::new(
                "Intro",
                vec![NavItem::new("Mirror", "//mirror.example.com/guide")],
            )],
        )];
        assert!(matches!(
            builder.build_sidebar(root, &item).unwrap_err(),
            SiteError::InvalidLink { .. }
        ));
    }

    #[test]
    fn test_sidebar_localized_for_non_default_locale() {
        let registry = registry();
        let builder = NavigationBuilder::new(&registry);
        let zh = registry.get("zh").unwrap();

        let tree = builder.build_sidebar(zh, &guide_groups()).unwrap();
        let prefixes: Vec<_> = tree.prefixes().collect();
        assert_eq!(prefixes, ["/zh/guide/", "/zh/reference/"]);
        assert!(tree.items().all(|item| item.link.starts_with("/zh/")));

        let sections = tree.resolve("/zh/guide/markdown").unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].items[1].link, "/zh/guide/getting-started");
    }

    #[test]
    fn test_sidebar_section_order_preserved() {
        let registry = registry();
        let builder = NavigationBuilder::new(&registry);
        let root = registry.get("root").unwrap();

        let tree = builder.build_sidebar(root, &guide_groups()).unwrap();
        let sections = tree.get("/guide/").unwrap();
        let texts: Vec<_> = sections.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["Introduction", "Writing"]);
    }

    #[test]
    fn test_duplicate_prefix() {
        let registry = registry();
        let builder = NavigationBuilder::new(&registry);
        let root = registry.get("root").unwrap();
        let groups = vec![
            RouteGroup::new("/guide/", vec![]),
            RouteGroup::new("/guide/", vec![]),
        ];

        assert_eq!(
            builder.build_sidebar(root, &groups).unwrap_err(),
            SiteError::DuplicatePrefix("/guide/".into())
        );
    }

    #[test]
    fn test_duplicate_prefix_after_localization() {
        let registry = registry();
        let builder = NavigationBuilder::new(&registry);
        let zh = registry.get("zh").unwrap();
        let groups = vec![
            RouteGroup::new("/guide/", vec![]),
            RouteGroup::new("/zh/guide/", vec![]),
        ];

        assert_eq!(
            builder.build_sidebar(zh, &groups).unwrap_err(),
            SiteError::DuplicatePrefix("/zh/guide/".into())
        );
    }

    #[test]
    fn test_sidebar_invalid_item_link() {
        let registry = registry();
        let builder = NavigationBuilder::new(&registry);
        let root = registry.get("root").unwrap();
        let groups = vec![RouteGroup::new(
            "/guide/",
            vec![SidebarGroup::new("Intro", vec![NavItem::new("Bad", "intro")])],
        )];

        assert!(matches!(
            builder.build_sidebar(root, &groups).unwrap_err(),
            SiteError::InvalidLink { .. }
        ));
    }

    #[test]
    fn test_localize() {
        assert_eq!(localize("", "x", "/guide/").unwrap(), "/guide/");
        assert_eq!(localize("/zh", "x", "/").unwrap(), "/zh/");
        assert_eq!(localize("/zh", "x", "/zh").unwrap(), "/zh/");
        assert_eq!(localize("/zh", "x", "/zh/api").unwrap(), "/zh/api");
        assert!(localize("/zh", "x", "").is_err());
    }
}
