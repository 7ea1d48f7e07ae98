//! Route discovery from the content tree.
//!
//! Markdown sources map to page routes:
//!
//! ```text
//! docs/index.md              ->  /
//! docs/guide/index.md        ->  /guide/
//! docs/guide/intro.md        ->  /guide/intro/
//! docs/zh/guide/intro.md     ->  /zh/guide/intro/
//! ```
//!
//! Hidden entries (`.vitepress`, `.git`), `_`-prefixed partials,
//! `node_modules`, `public` and the `404` page are skipped.

use super::Route;
use crate::debug;
use anyhow::{Result, bail};
use jwalk::WalkDir;
use std::path::{Component, Path};

/// Directory names never scanned for pages.
const IGNORED_DIRS: &[&str] = &["node_modules", "public"];

/// Page stems kept out of the route list.
const IGNORED_STEMS: &[&str] = &["404"];

/// Discover page routes under `content_dir`, sorted by url.
pub fn discover(content_dir: &Path) -> Result<Vec<Route>> {
    if !content_dir.is_dir() {
        bail!("content directory '{}' not found", content_dir.display());
    }

    let mut routes: Vec<Route> = WalkDir::new(content_dir)
        .sort(true)
        .process_read_dir(|depth, _, _, children| {
            // `None` is the walk root itself; its own name is never filtered
            if depth.is_none() {
                return;
            }
            children.retain(|entry| {
                entry.as_ref().map_or(true, |e| {
                    let name = e.file_name.to_string_lossy();
                    !name.starts_with('.')
                        && !name.starts_with('_')
                        && !(e.file_type.is_dir() && IGNORED_DIRS.contains(&&*name))
                })
            });
        })
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| route_for(content_dir, &e.path()))
        .collect();

    routes.sort_by(|a, b| a.url.cmp(&b.url));
    routes.dedup();
    debug!("routes"; "discovered {} pages in {}", routes.len(), content_dir.display());
    Ok(routes)
}

/// Map one source file to its route, `None` for non-page files.
pub fn route_for(content_dir: &Path, file: &Path) -> Option<Route> {
    if file.extension()? != "md" {
        return None;
    }
    let stem = file.file_stem()?.to_str()?;
    if IGNORED_STEMS.contains(&stem) {
        return None;
    }

    let relative = file.strip_prefix(content_dir).ok()?.parent()?;
    let mut segments = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>();
    if stem != "index" {
        segments.push(stem);
    }

    Some(Route::new(segments.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# page").unwrap();
    }

    #[test]
    fn test_route_for() {
        let root = Path::new("/site/docs");
        let route = |rel: &str| route_for(root, &root.join(rel)).map(|r| r.url.to_string());

        assert_eq!(route("index.md").as_deref(), Some("/"));
        assert_eq!(route("guide/index.md").as_deref(), Some("/guide/"));
        assert_eq!(route("guide/intro.md").as_deref(), Some("/guide/intro/"));
        assert_eq!(route("zh/guide/intro.md").as_deref(), Some("/zh/guide/intro/"));
        assert_eq!(route("404.md"), None);
        assert_eq!(route("logo.svg"), None);
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for rel in [
            "index.md",
            "guide/index.md",
            "guide/intro.md",
            "zh/index.md",
            "zh/guide/intro.md",
            "404.md",
            "_partials/note.md",
            ".vitepress/theme/index.md",
            "public/robots.md",
            "guide/diagram.png",
        ] {
            touch(root, rel);
        }

        let urls: Vec<_> = discover(root)
            .unwrap()
            .into_iter()
            .map(|r| r.url.to_string())
            .collect();
        assert_eq!(
            urls,
            ["/", "/guide/", "/guide/intro/", "/zh/", "/zh/guide/intro/"]
        );
    }

    #[test]
    fn test_discover_root_name_not_filtered() {
        for prefix in ["site", ".hidden", "_site"] {
            let dir = tempfile::Builder::new().prefix(prefix).tempdir().unwrap();
            touch(dir.path(), "index.md");
            touch(dir.path(), "guide/intro.md");

            let urls: Vec<_> = discover(dir.path())
                .unwrap()
                .into_iter()
                .map(|r| r.url.to_string())
                .collect();
            assert_eq!(urls, ["/", "/guide/intro/"], "root prefix {prefix:?}");
        }
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover(&dir.path().join("nope")).is_err());
    }
}
