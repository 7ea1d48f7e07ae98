//! Navigation structures: top nav items and per-locale sidebar trees.
//!
//! | Type           | Purpose                                         |
//! |----------------|-------------------------------------------------|
//! | `NavItem`      | Leaf entry (`text` + root-relative `link`)      |
//! | `SidebarGroup` | Named, ordered collection of `NavItem`          |
//! | `RouteGroup`   | Declarative input: prefix + sidebar sections    |
//! | `SidebarTree`  | Prefix -> sections, longest-prefix lookup       |

mod builder;

pub use builder::NavigationBuilder;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Items are displayed in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub text: String,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }
}

/// Sidebar sections shown for every page under `prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteGroup {
    pub prefix: String,
    #[serde(default)]
    pub sections: Vec<SidebarGroup>,
}

impl RouteGroup {
    pub fn new(prefix: impl Into<String>, sections: Vec<SidebarGroup>) -> Self {
        Self {
            prefix: prefix.into(),
            sections,
        }
    }
}

/// Route prefix -> ordered sidebar sections.
///
/// Prefixes are unique. Entries keep declaration order so serialized
/// output is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarTree {
    entries: Vec<(String, Vec<SidebarGroup>)>,
}

impl SidebarTree {
    pub(crate) fn from_entries(entries: Vec<(String, Vec<SidebarGroup>)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, groups)| groups.as_slice())
    }

    /// Sections for a page path, by longest matching prefix.
    ///
    /// `/guide` also matches the prefix `/guide/`.
    pub fn resolve(&self, path: &str) -> Option<&[SidebarGroup]> {
        self.entries
            .iter()
            .filter(|(prefix, _)| {
                path.starts_with(prefix.as_str()) || prefix.strip_suffix('/') == Some(path)
            })
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, groups)| groups.as_slice())
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    /// Every item in every section, in display order.
    pub fn items(&self) -> impl Iterator<Item = &NavItem> {
        self.entries
            .iter()
            .flat_map(|(_, groups)| groups.iter())
            .flat_map(|group| group.items.iter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SidebarTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (prefix, groups) in &self.entries {
            map.serialize_entry(prefix, groups)?;
        }
        map.end()
    }
}
