//! `check` command: build the configuration and cross-check navigation
//! links against the pages found in the content tree.

use super::build_config;
use crate::config::SiteFile;
use crate::core::UrlPath;
use crate::generator::{Route, routes};
use crate::site::SiteConfig;
use crate::utils::plural_count;
use crate::{debug, log};
use anyhow::{Result, bail};
use rustc_hash::FxHashSet;

/// A nav or sidebar link that matches no discovered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadLink {
    pub locale: String,
    pub text: String,
    pub link: String,
}

pub fn run_check(file: &SiteFile) -> Result<()> {
    let config = build_config(file)?;

    for nav in &config.navigation {
        log!(
            "check";
            "`{}`: {}, {}, {}",
            nav.locale,
            plural_count(nav.nav.len(), "nav item"),
            plural_count(nav.sidebar.len(), "sidebar prefix"),
            plural_count(nav.head.len(), "head tag")
        );
    }
    log!("check"; "site head: {}", plural_count(config.head.len(), "tag"));

    let content_dir = file.content_dir();
    if !content_dir.is_dir() {
        debug!("check"; "no content directory at {}, skipping link check", content_dir.display());
        log!("ok"; "configuration is valid");
        return Ok(());
    }

    let routes = routes::discover(&content_dir)?;
    let dead = dead_links(&config, &routes);
    for link in &dead {
        log!("error"; "[{}] `{}` -> {} (no such page)", link.locale, link.text, link.link);
    }
    if !dead.is_empty() {
        bail!("found {}", plural_count(dead.len(), "dead link"));
    }

    log!("ok"; "configuration is valid, {} linked", plural_count(routes.len(), "page"));
    Ok(())
}

/// Nav and sidebar links with no matching route, in declaration order.
pub fn dead_links(config: &SiteConfig, routes: &[Route]) -> Vec<DeadLink> {
    let known: FxHashSet<&UrlPath> = routes.iter().map(|r| &r.url).collect();

    config
        .navigation
        .iter()
        .flat_map(|nav| {
            nav.nav
                .iter()
                .chain(nav.sidebar.items())
                .map(move |item| (nav.locale.as_str(), item))
        })
        .filter(|(_, item)| !known.contains(&UrlPath::from_page(&item.link)))
        .map(|(locale, item)| DeadLink {
            locale: locale.to_string(),
            text: item.text.clone(),
            link: item.link.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
[site]
hostname = "https://docs.example.com"

[[locales]]
key = "root"
label = "English"
lang = "en-US"
nav = [{ text = "Guide", link = "/guide/" }]

[[locales.sidebar]]
prefix = "/guide/"

[[locales.sidebar.sections]]
text = "Intro"
items = [
    { text = "Getting Started", link = "/guide/getting-started#install" },
    { text = "Missing", link = "/guide/missing" },
]

[[locales]]
key = "zh"
label = "简体中文"
lang = "zh-CN"
nav = [{ text = "指南", link = "/guide/" }]
"#;

    #[test]
    fn test_dead_links() {
        let config = SiteFile::from_str(CONFIG).unwrap().build().unwrap();
        let routes = [
            Route::new("/guide/"),
            Route::new("/guide/getting-started/"),
        ];

        let dead = dead_links(&config, &routes);
        assert_eq!(
            dead,
            [
                DeadLink {
                    locale: "root".into(),
                    text: "Missing".into(),
                    link: "/guide/missing".into(),
                },
                DeadLink {
                    locale: "zh".into(),
                    text: "指南".into(),
                    link: "/zh/guide/".into(),
                },
            ]
        );
    }

    #[test]
    fn test_run_check_reports_dead_links() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = SiteFile::from_str(CONFIG).unwrap();
        file.root = dir.path().to_path_buf();
        std::fs::create_dir_all(dir.path().join("docs/guide")).unwrap();
        std::fs::write(dir.path().join("docs/guide/index.md"), "# Guide").unwrap();

        let err = run_check(&file).unwrap_err();
        assert!(err.to_string().contains("dead link"));
    }

    #[test]
    fn test_run_check_without_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = SiteFile::from_str(CONFIG).unwrap();
        file.root = dir.path().to_path_buf();
        assert!(run_check(&file).is_ok());
    }
}
