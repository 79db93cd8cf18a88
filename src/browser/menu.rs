//! Per-item context menu.

use crate::browser::BrowserState;
use crate::fs::{FileSystemItem, ItemType};

/// The item a menu is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTarget {
    pub id: String,
    pub name: String,
    pub item_type: ItemType,
}

impl From<&FileSystemItem> for MenuTarget {
    fn from(item: &FileSystemItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            item_type: item.item_type,
        }
    }
}

/// Entries of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ToggleSelect,
    Rename,
    Delete,
}

/// What the dashboard should do after a menu choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    ToggleSelect(String),
    Rename(String),
    Delete(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Binding {
    target: MenuTarget,
    x: i32,
    y: i32,
}

/// A single popup shared by all grid items.
///
/// It is bound to at most one item at a time. While open, the next click
/// anywhere in the document closes it.
#[derive(Debug, Clone, Default)]
pub struct ContextMenu {
    binding: Option<Binding>,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the menu for `target` at pointer coordinates, replacing any previous binding.
    pub fn open(&mut self, target: MenuTarget, x: i32, y: i32) {
        self.binding = Some(Binding { target, x, y });
    }

    /// Hide the menu and drop its binding.
    pub fn close(&mut self) -> Option<MenuTarget> {
        self.binding.take().map(|b| b.target)
    }

    pub fn is_open(&self) -> bool {
        self.binding.is_some()
    }

    pub fn target(&self) -> Option<&MenuTarget> {
        self.binding.as_ref().map(|b| &b.target)
    }

    pub fn position(&self) -> Option<(i32, i32)> {
        self.binding.as_ref().map(|b| (b.x, b.y))
    }

    /// A click outside the menu. Returns `true` if this closed it.
    pub fn on_document_click(&mut self) -> bool {
        self.close().is_some()
    }

    /// Label of the select entry for the bound item.
    pub fn select_label(&self, state: &BrowserState) -> &'static str {
        match self.target() {
            Some(target) if state.is_selected(&target.name) => "Deselect",
            _ => "Select",
        }
    }

    /// Resolve a menu entry against the bound item and close the menu.
    /// Returns `None` when nothing was bound.
    pub fn choose(&mut self, choice: MenuChoice) -> Option<MenuCommand> {
        let target = self.close()?;
        Some(match choice {
            MenuChoice::ToggleSelect => MenuCommand::ToggleSelect(target.name),
            MenuChoice::Rename => MenuCommand::Rename(target.name),
            MenuChoice::Delete => MenuCommand::Delete(target.name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::BrowsePath;

    fn target(name: &str) -> MenuTarget {
        MenuTarget::from(&FileSystemItem::file(name, name, "1 KB"))
    }

    #[test]
    fn test_single_binding() {
        let mut menu = ContextMenu::new();
        assert!(!menu.is_open());

        menu.open(target("a.txt"), 10, 20);
        menu.open(target("b.txt"), 30, 40);
        assert_eq!(menu.target().unwrap().name, "b.txt");
        assert_eq!(menu.position(), Some((30, 40)));
    }

    #[test]
    fn test_document_click_is_one_shot() {
        let mut menu = ContextMenu::new();
        menu.open(target("a.txt"), 0, 0);
        assert!(menu.on_document_click());
        assert!(!menu.is_open());
        // Listener is gone once closed
        assert!(!menu.on_document_click());
    }

    #[test]
    fn test_select_label() {
        let mut state = BrowserState::new();
        state.apply_listing(
            &BrowsePath::Root,
            vec![FileSystemItem::file("a.txt", "a.txt", "1 KB")],
        );
        let mut menu = ContextMenu::new();
        menu.open(target("a.txt"), 0, 0);
        assert_eq!(menu.select_label(&state), "Select");

        state.toggle_select("a.txt");
        assert_eq!(menu.select_label(&state), "Deselect");
    }

    #[test]
    fn test_choose_closes() {
        let mut menu = ContextMenu::new();
        assert!(menu.choose(MenuChoice::Delete).is_none());

        menu.open(target("a.txt"), 0, 0);
        assert_eq!(
            menu.choose(MenuChoice::Rename),
            Some(MenuCommand::Rename("a.txt".to_string()))
        );
        assert!(!menu.is_open());
    }
}
