//! Context menu model.
//!
//! This module provides [`ContextMenu`], the top-level ordered list of items
//! and separators shown for a record surface such as a grid.
//!
//! # Example
//!
//! ```
//! use horizon_menu::{ContextMenu, MenuItem, RecordSelection, RecordsRequired};
//!
//! let menu = ContextMenu::new()
//!     .with_item(MenuItem::builder("Edit").with_action(|_: &RecordSelection<u32>| {}).build()?)
//!     .with_separator()
//!     .with_item(
//!         MenuItem::builder("Delete")
//!             .with_records_required(RecordsRequired::AtLeastOne)
//!             .with_action(|_| {})
//!             .build()?,
//!     );
//!
//! let resolved = menu.resolve(&RecordSelection::new(vec![3, 4]));
//! assert_eq!(resolved.len(), 3);
//!
//! // "Edit" needs exactly one record.
//! assert!(!menu.trigger(&[0], &RecordSelection::new(vec![3, 4]))?);
//! assert!(menu.trigger(&[2], &RecordSelection::new(vec![3, 4]))?);
//! # Ok::<(), horizon_menu::MenuError>(())
//! ```

use std::fmt;

use horizon_menu_core::logging::targets;
use horizon_menu_core::{MenuError, Result, SelectionContext};

use crate::entry::MenuEntry;
use crate::item::MenuItem;
use crate::resolve::{ResolvedEntry, resolve_entries};

/// An ordered list of menu entries.
///
/// Built once per menu-open event, read during a single render and then
/// discarded. Like [`MenuItem`], it is immutable once assembled.
pub struct ContextMenu<C> {
    entries: Vec<MenuEntry<C>>,
}

impl<C> Default for ContextMenu<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ContextMenu<C> {
    /// Create an empty menu.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a menu from entries, kept in the given order.
    pub fn from_entries(entries: Vec<MenuEntry<C>>) -> Self {
        Self { entries }
    }

    /// Builder pattern for appending an item.
    pub fn with_item(mut self, item: MenuItem<C>) -> Self {
        self.entries.push(MenuEntry::Item(item));
        self
    }

    /// Builder pattern for appending a separator.
    pub fn with_separator(mut self) -> Self {
        self.entries.push(MenuEntry::Separator);
        self
    }

    /// All entries in order.
    pub fn entries(&self) -> &[MenuEntry<C>] {
        &self.entries
    }

    /// Top-level items in order, skipping separators.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem<C>> + '_ {
        self.entries.iter().filter_map(MenuEntry::as_item)
    }

    /// Number of entries, separators included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the menu has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a configured item by index path.
    ///
    /// The first index selects a top-level entry, each further index an entry
    /// of the previous item's submenu. Separators count as positions. Children
    /// supplied by a display hook exist only per render and are not found here.
    pub fn find(&self, path: &[usize]) -> Option<&MenuItem<C>> {
        let (&first, rest) = path.split_first()?;
        self.entries.get(first)?.as_item()?.find(rest)
    }
}

impl<C: SelectionContext> ContextMenu<C> {
    /// Resolve the whole menu against a selection for rendering.
    ///
    /// See [`resolve`](crate::resolve) for the rules applied.
    pub fn resolve(&self, context: &C) -> Vec<ResolvedEntry> {
        let resolved = resolve_entries(&self.entries, context, &[]);
        tracing::debug!(
            target: targets::RESOLVE,
            entries = self.entries.len(),
            visible = resolved.len(),
            active = context.active_count(),
            "resolved context menu"
        );
        resolved
    }

    /// Trigger the item at `path`, as a renderer does on a click.
    ///
    /// Paths are those of [`ResolvedItem`](crate::ResolvedItem), so children
    /// supplied by a display hook are addressed too. Nothing runs unless the
    /// target and every submenu leading to it are visible and enabled.
    ///
    /// Returns whether the action ran. Fails only when `path` does not
    /// address an item.
    pub fn trigger(&self, path: &[usize], context: &C) -> Result<bool> {
        let (&first, rest) = path
            .split_first()
            .ok_or_else(|| MenuError::invalid_path(path))?;
        self.entries
            .get(first)
            .and_then(MenuEntry::as_item)
            .and_then(|item| item.trigger_path(rest, context))
            .ok_or_else(|| MenuError::invalid_path(path))
    }
}

impl<C> Clone for ContextMenu<C> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<C> fmt::Debug for ContextMenu<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextMenu")
            .field("entries", &self.entries)
            .finish()
    }
}

impl<C> FromIterator<MenuEntry<C>> for ContextMenu<C> {
    fn from_iter<I: IntoIterator<Item = MenuEntry<C>>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

impl<C> FromIterator<MenuItem<C>> for ContextMenu<C> {
    fn from_iter<I: IntoIterator<Item = MenuItem<C>>>(iter: I) -> Self {
        iter.into_iter().map(MenuEntry::Item).collect()
    }
}
