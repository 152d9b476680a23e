//! Widget Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Where the delete menu is anchored, and for which item
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuAnchor {
    pub item_id: u32,
    pub x: i32,
    pub y: i32,
}

/// Widget-wide signals provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Active context menu, at most one - read
    pub menu: ReadSignal<Option<MenuAnchor>>,
    /// Active context menu - write
    set_menu: WriteSignal<Option<MenuAnchor>>,
}

impl TodoContext {
    pub fn new(menu: (ReadSignal<Option<MenuAnchor>>, WriteSignal<Option<MenuAnchor>>)) -> Self {
        Self {
            menu: menu.0,
            set_menu: menu.1,
        }
    }

    /// Open the delete menu for an item at the pointer position
    pub fn open_menu(&self, item_id: u32, x: i32, y: i32) {
        self.set_menu.set(Some(MenuAnchor { item_id, x, y }));
    }

    /// Dismiss the menu
    pub fn close_menu(&self) {
        self.set_menu.set(None);
    }
}
