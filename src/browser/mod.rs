//! File-browser view-model.
//!
//! [`BrowserState`] holds everything the dashboard grid depends on: the folder
//! being shown, the last listing fetched for it, the active search filter, the
//! set of selected item names and the folders known to the sidebar. It performs
//! no I/O; the dashboard feeds it server listings and renders what it derives.

mod menu;

pub use menu::{ContextMenu, MenuChoice, MenuCommand, MenuTarget};

use std::collections::BTreeSet;

use crate::fs::{BrowsePath, FileSystemItem, ItemType};

/// Label of the root crumb and sidebar entry.
pub const HOME_LABEL: &str = "Home";

/// One cell of the file grid.
///
/// Carries the item id next to its name so callers never have to recover
/// identity from rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEntry {
    pub id: String,
    pub name: String,
    pub item_type: ItemType,
    /// Size or modification date
    pub meta: String,
    pub selected: bool,
}

/// What the grid area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grid {
    /// No item matches (or the folder is empty).
    Empty,
    Items(Vec<GridEntry>),
}

impl Grid {
    pub fn entries(&self) -> &[GridEntry] {
        match self {
            Grid::Empty => &[],
            Grid::Items(entries) => entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Grid::Empty)
    }
}

/// Selection-dependent toolbar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub count: usize,
    pub download_enabled: bool,
    pub delete_enabled: bool,
}

/// A breadcrumb link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub target: BrowsePath,
}

/// A sidebar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub label: String,
    pub target: BrowsePath,
    pub active: bool,
}

/// Case-insensitive substring filter on item names. An empty query keeps everything.
pub fn filter_items<'a>(items: &'a [FileSystemItem], query: &str) -> Vec<&'a FileSystemItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

/// View-model of the dashboard file browser.
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    current_path: BrowsePath,
    selected: BTreeSet<String>,
    known_folders: BTreeSet<String>,
    search_query: String,
    listing: Vec<FileSystemItem>,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> &BrowsePath {
        &self.current_path
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn known_folders(&self) -> &BTreeSet<String> {
        &self.known_folders
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Last listing received for the current path, unfiltered.
    pub fn listing(&self) -> &[FileSystemItem] {
        &self.listing
    }

    /// Switch folders. Selection and the previous listing are discarded.
    pub fn navigate(&mut self, path: BrowsePath) {
        self.current_path = path;
        self.selected.clear();
        self.listing.clear();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Flip selection of `name`; returns whether it is now selected.
    pub fn toggle_select(&mut self, name: &str) -> bool {
        if self.selected.remove(name) {
            false
        } else {
            self.selected.insert(name.to_string());
            true
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    /// Drop `names` from the selection (after they were deleted).
    pub fn deselect<S: AsRef<str>>(&mut self, names: &[S]) {
        for name in names {
            self.selected.remove(name.as_ref());
        }
    }

    /// Accept a listing fetched for `path`.
    ///
    /// Listings for a path other than the current one are stale and ignored
    /// (returns `false`). A root listing replaces the known folders; any other
    /// listing adds to them. Selected names missing from the listing are dropped.
    pub fn apply_listing(&mut self, path: &BrowsePath, items: Vec<FileSystemItem>) -> bool {
        if path != &self.current_path {
            return false;
        }

        let folders = items
            .iter()
            .filter(|item| item.is_folder())
            .map(|item| item.name.clone());
        if path.is_root() {
            self.known_folders = folders.collect();
        } else {
            self.known_folders.extend(folders);
        }

        self.selected
            .retain(|name| items.iter().any(|item| &item.name == name));
        self.listing = items;
        true
    }

    /// Look up an item of the current listing by name.
    pub fn item(&self, name: &str) -> Option<&FileSystemItem> {
        self.listing.iter().find(|item| item.name == name)
    }

    /// Current listing after the search filter.
    pub fn visible_items(&self) -> Vec<&FileSystemItem> {
        filter_items(&self.listing, &self.search_query)
    }

    pub fn grid(&self) -> Grid {
        let entries: Vec<GridEntry> = self
            .visible_items()
            .into_iter()
            .map(|item| GridEntry {
                id: item.id.clone(),
                name: item.name.clone(),
                item_type: item.item_type,
                meta: item.meta().to_string(),
                selected: self.is_selected(&item.name),
            })
            .collect();

        if entries.is_empty() {
            Grid::Empty
        } else {
            Grid::Items(entries)
        }
    }

    pub fn selection_summary(&self) -> SelectionSummary {
        let count = self.selected.len();
        SelectionSummary {
            count,
            download_enabled: count > 0,
            delete_enabled: count > 0,
        }
    }

    /// `Home`, or `Home › <folder>`.
    pub fn breadcrumb(&self) -> Vec<Crumb> {
        let mut crumbs = vec![Crumb {
            label: HOME_LABEL.to_string(),
            target: BrowsePath::Root,
        }];
        if let Some(name) = self.current_path.folder_name() {
            crumbs.push(Crumb {
                label: name.to_string(),
                target: BrowsePath::folder(name),
            });
        }
        crumbs
    }

    /// `Home` followed by the known folders in name order.
    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        let home = SidebarEntry {
            label: HOME_LABEL.to_string(),
            target: BrowsePath::Root,
            active: self.current_path.is_root(),
        };
        std::iter::once(home)
            .chain(self.known_folders.iter().map(|name| SidebarEntry {
                label: name.clone(),
                target: BrowsePath::folder(name.as_str()),
                active: self.current_path.folder_name() == Some(name.as_str()),
            }))
            .collect()
    }
}
