//! Entries of a menu level: items and separators.

use std::fmt;

use crate::item::MenuItem;

/// One position in a menu or submenu.
pub enum MenuEntry<C> {
    /// A menu item, possibly a submenu.
    Item(MenuItem<C>),
    /// A visual divider between groups of items.
    Separator,
}

impl<C> MenuEntry<C> {
    /// Check if this entry is a separator.
    pub fn is_separator(&self) -> bool {
        matches!(self, MenuEntry::Separator)
    }

    /// The item, unless this entry is a separator.
    pub fn as_item(&self) -> Option<&MenuItem<C>> {
        match self {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Separator => None,
        }
    }

    /// Consume the entry, returning the item unless it is a separator.
    pub fn into_item(self) -> Option<MenuItem<C>> {
        match self {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Separator => None,
        }
    }
}

impl<C> From<MenuItem<C>> for MenuEntry<C> {
    fn from(item: MenuItem<C>) -> Self {
        MenuEntry::Item(item)
    }
}

impl<C> Clone for MenuEntry<C> {
    fn clone(&self) -> Self {
        match self {
            MenuEntry::Item(item) => MenuEntry::Item(item.clone()),
            MenuEntry::Separator => MenuEntry::Separator,
        }
    }
}

impl<C> fmt::Debug for MenuEntry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuEntry::Item(item) => f.debug_tuple("Item").field(item).finish(),
            MenuEntry::Separator => f.write_str("Separator"),
        }
    }
}
