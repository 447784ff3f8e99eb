//! Static path-to-page bindings.
//!
//! The table is validated once at bootstrap and immutable afterwards, so
//! render passes can read it without any locking. Lookup is an exact match
//! against a small fixed list, first match wins; an unmatched path is an
//! explicit miss rather than a silent default.

use std::collections::HashSet;

use leptos::prelude::AnyView;

use crate::error::{Error, Result};

/// A page constructor. Non-capturing so the table stays `'static` data.
pub type Page = fn() -> AnyView;

#[derive(Clone)]
pub struct RouteEntry {
    path: &'static str,
    name: &'static str,
    page: Page,
}

impl RouteEntry {
    pub fn new(path: &'static str, name: &'static str, page: Page) -> Self {
        Self { path, name, page }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Builds the page view bound to this route.
    pub fn render(&self) -> AnyView {
        (self.page)()
    }
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for RouteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.name == other.name
    }
}

impl Eq for RouteEntry {}

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Validates and freezes the table. Fails fast on a duplicate path or
    /// name so a misconfigured table can never reach the mount step.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for entry in &entries {
            if !paths.insert(entry.path) {
                return Err(Error::DuplicateRoute {
                    path: entry.path.to_owned(),
                });
            }
            if !names.insert(entry.name) {
                return Err(Error::DuplicateRouteName {
                    name: entry.name.to_owned(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Returns the first entry whose path equals `path`, or `None`.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::IntoAny as _;
    use pretty_assertions::assert_eq;

    use super::*;

    fn blank() -> AnyView {
        ().into_any()
    }

    #[test]
    fn resolves_registered_path() {
        let table = RouteTable::new(vec![RouteEntry::new("/", "Home", blank)]).unwrap();
        let entry = table.resolve("/").unwrap();
        assert_eq!(entry.name(), "Home");
        assert_eq!(entry.path(), "/");
    }

    #[test]
    fn unmatched_path_is_an_explicit_miss() {
        let table = RouteTable::new(vec![RouteEntry::new("/", "Home", blank)]).unwrap();
        assert!(table.resolve("/episodes").is_none());
        assert!(table.resolve("").is_none());
    }

    #[test]
    fn duplicate_path_fails_construction() {
        let err = RouteTable::new(vec![
            RouteEntry::new("/", "Home", blank),
            RouteEntry::new("/", "Also Home", blank),
        ])
        .unwrap_err();
        assert!(
            matches!(&err, Error::DuplicateRoute { path } if path == "/"),
            "{err:?}",
        );
    }

    #[test]
    fn duplicate_name_fails_construction() {
        let err = RouteTable::new(vec![
            RouteEntry::new("/", "Home", blank),
            RouteEntry::new("/about", "Home", blank),
        ])
        .unwrap_err();
        assert!(
            matches!(&err, Error::DuplicateRouteName { name } if name == "Home"),
            "{err:?}",
        );
    }

    #[test]
    fn lookup_follows_list_order() {
        let table = RouteTable::new(vec![
            RouteEntry::new("/", "Home", blank),
            RouteEntry::new("/about", "About", blank),
        ])
        .unwrap();
        assert_eq!(table.resolve("/about").unwrap().name(), "About");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn resolution_is_idempotent() {
        let table = RouteTable::new(vec![RouteEntry::new("/", "Home", blank)]).unwrap();
        let first = table.resolve("/").cloned();
        for _ in 0..3 {
            assert_eq!(table.resolve("/").cloned(), first);
        }
    }
}
