//! Resolution of a menu tree into a renderer-ready snapshot.
//!
//! Renderers should not have to know about policies, predicates or display
//! hooks. [`ContextMenu::resolve`](crate::ContextMenu::resolve) and
//! [`MenuItem::resolve`] evaluate everything once against a selection and
//! produce plain [`ResolvedEntry`] values:
//!
//! - display hooks are applied on top of each item's configured values, and may
//!   supply an item's children for the current selection
//! - hidden items are dropped
//! - each item's enabled state is computed (static flag, record policy, predicate)
//! - a submenu with no enabled child is disabled; one with no visible child is dropped
//! - leading, trailing and repeated separators are removed at every level
//!
//! Every resolved item keeps the index path of its source item so that a click
//! can be routed back through [`ContextMenu::trigger`](crate::ContextMenu::trigger).

use horizon_menu_core::logging::targets;
use horizon_menu_core::{Icon, SelectionContext};
use serde::Serialize;

use crate::entry::MenuEntry;
use crate::item::{Intent, MenuItem};

/// A resolved menu position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResolvedEntry {
    /// A visible item.
    Item(ResolvedItem),
    /// A separator between visible items.
    Separator,
}

impl ResolvedEntry {
    /// Check if this entry is a separator.
    pub fn is_separator(&self) -> bool {
        matches!(self, ResolvedEntry::Separator)
    }

    /// The item, unless this entry is a separator.
    pub fn as_item(&self) -> Option<&ResolvedItem> {
        match self {
            ResolvedEntry::Item(item) => Some(item),
            ResolvedEntry::Separator => None,
        }
    }
}

/// A visible item with its display properties and enabled state settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedItem {
    /// Index path of the source item (separators included in the count).
    pub path: Vec<usize>,
    pub text: String,
    pub icon: Option<Icon>,
    pub secondary_text: Option<String>,
    pub tooltip: Option<String>,
    pub intent: Intent,
    pub class_name: Option<String>,
    /// Whether the item may be clicked.
    pub enabled: bool,
    /// Whether clicking the item has an effect. False for submenus.
    pub has_action: bool,
    /// Resolved children. Non-empty exactly for submenus.
    pub children: Vec<ResolvedEntry>,
}

impl ResolvedItem {
    /// Check if this item opens a submenu.
    pub fn is_submenu(&self) -> bool {
        !self.children.is_empty()
    }

    /// Resolved child items, skipping separators.
    pub fn child_items(&self) -> impl Iterator<Item = &ResolvedItem> + '_ {
        self.children.iter().filter_map(ResolvedEntry::as_item)
    }
}

impl<C: SelectionContext> MenuItem<C> {
    /// Resolve this item and its children against a selection.
    ///
    /// Returns `None` when the item is hidden. Paths are relative to this item,
    /// which has the empty path.
    pub fn resolve(&self, context: &C) -> Option<ResolvedItem> {
        resolve_item(self, context, Vec::new())
    }
}

/// Resolve one menu level. `parent` is the path of the level's owner.
pub(crate) fn resolve_entries<C: SelectionContext>(
    entries: &[MenuEntry<C>],
    context: &C,
    parent: &[usize],
) -> Vec<ResolvedEntry> {
    let resolved = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            MenuEntry::Separator => Some(ResolvedEntry::Separator),
            MenuEntry::Item(item) => {
                let mut path = parent.to_vec();
                path.push(index);
                resolve_item(item, context, path).map(ResolvedEntry::Item)
            }
        });
    collapse_separators(resolved)
}

fn resolve_item<C: SelectionContext>(
    item: &MenuItem<C>,
    context: &C,
    path: Vec<usize>,
) -> Option<ResolvedItem> {
    let overrides = item.display_overrides(context);

    if overrides.hides(item) {
        tracing::trace!(target: targets::RESOLVE, name = item.name(), ?path, "item hidden");
        return None;
    }

    let mut enabled = item.is_available(&overrides, context);

    let entries = overrides.entries(item);
    let is_submenu = !entries.is_empty();
    let children = if is_submenu {
        let children = resolve_entries(entries, context, &path);
        if children.is_empty() {
            tracing::trace!(
                target: targets::RESOLVE,
                name = item.name(),
                ?path,
                "submenu has no visible items"
            );
            return None;
        }
        enabled &= children
            .iter()
            .filter_map(ResolvedEntry::as_item)
            .any(|child| child.enabled);
        children
    } else {
        Vec::new()
    };

    Some(ResolvedItem {
        path,
        text: overrides.text.unwrap_or_else(|| item.name().to_owned()),
        icon: overrides.icon.or_else(|| item.icon().cloned()),
        secondary_text: overrides
            .secondary_text
            .or_else(|| item.secondary_text().map(str::to_owned)),
        tooltip: overrides
            .tooltip
            .or_else(|| item.tooltip().map(str::to_owned)),
        intent: overrides.intent.unwrap_or(item.intent()),
        class_name: overrides
            .class_name
            .or_else(|| item.class_name().map(str::to_owned)),
        enabled,
        has_action: item.has_action() && !is_submenu,
        children,
    })
}

/// Drop leading, trailing and consecutive separators.
pub(crate) fn collapse_separators(
    entries: impl IntoIterator<Item = ResolvedEntry>,
) -> Vec<ResolvedEntry> {
    let mut out: Vec<ResolvedEntry> = Vec::new();
    for entry in entries {
        if entry.is_separator() && out.last().is_none_or(ResolvedEntry::is_separator) {
            continue;
        }
        out.push(entry);
    }
    if out.last().is_some_and(ResolvedEntry::is_separator) {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::DisplayOverrides;
    use horizon_menu_core::RecordSelection;

    type Ctx = RecordSelection<u32>;

    fn leaf(name: &str) -> ResolvedEntry {
        ResolvedEntry::Item(ResolvedItem {
            path: Vec::new(),
            text: name.to_string(),
            icon: None,
            secondary_text: None,
            tooltip: None,
            intent: Intent::None,
            class_name: None,
            enabled: true,
            has_action: false,
            children: Vec::new(),
        })
    }

    fn texts(entries: &[ResolvedEntry]) -> Vec<&str> {
        entries
            .iter()
            .map(|e| e.as_item().map_or("-", |item| item.text.as_str()))
            .collect()
    }

    #[test]
    fn test_collapse_separators() {
        let entries = vec![
            ResolvedEntry::Separator,
            leaf("a"),
            ResolvedEntry::Separator,
            ResolvedEntry::Separator,
            leaf("b"),
            ResolvedEntry::Separator,
        ];
        assert_eq!(texts(&collapse_separators(entries)), vec!["a", "-", "b"]);
    }

    #[test]
    fn test_collapse_only_separators() {
        let entries = vec![ResolvedEntry::Separator, ResolvedEntry::Separator];
        assert!(collapse_separators(entries).is_empty());
    }

    #[test]
    fn test_display_overrides_applied() {
        let item: MenuItem<Ctx> = MenuItem::builder("Filter")
            .with_icon("filter")
            .with_records_required(false)
            .with_display_fn(|ctx: &Ctx| {
                DisplayOverrides::new().with_text(format!("{} values", ctx.active_count()))
            })
            .build()
            .unwrap();

        let resolved = item.resolve(&RecordSelection::new(vec![1, 2, 3])).unwrap();
        assert_eq!(resolved.text, "3 values");
        assert_eq!(resolved.icon, Some(Icon::from("filter")));
        assert!(resolved.enabled);
        assert!(resolved.path.is_empty());
    }

    #[test]
    fn test_display_fn_can_hide_and_disable() {
        let hidden: MenuItem<Ctx> = MenuItem::builder("Hidden")
            .with_records_required(false)
            .with_display_fn(|_| DisplayOverrides::hide())
            .build()
            .unwrap();
        assert!(hidden.resolve(&RecordSelection::empty()).is_none());

        let disabled: MenuItem<Ctx> = MenuItem::builder("Disabled")
            .with_records_required(false)
            .with_display_fn(|_| DisplayOverrides::new().with_disabled(true))
            .build()
            .unwrap();
        assert!(!disabled.resolve(&RecordSelection::empty()).unwrap().enabled);
    }

    #[test]
    fn test_display_fn_overrides_intent_and_class() {
        let item: MenuItem<Ctx> = MenuItem::builder("Delete")
            .with_records_required(true)
            .with_class_name("plain")
            .with_display_fn(|ctx: &Ctx| {
                if ctx.active_count() > 1 {
                    DisplayOverrides::new()
                        .with_intent(Intent::Danger)
                        .with_class_name("bulk")
                } else {
                    DisplayOverrides::new()
                }
            })
            .build()
            .unwrap();

        let single = item.resolve(&RecordSelection::new(vec![1])).unwrap();
        assert_eq!(single.intent, Intent::None);
        assert_eq!(single.class_name.as_deref(), Some("plain"));

        let bulk = item.resolve(&RecordSelection::new(vec![1, 2])).unwrap();
        assert_eq!(bulk.intent, Intent::Danger);
        assert_eq!(bulk.class_name.as_deref(), Some("bulk"));
    }

    #[test]
    fn test_display_fn_supplies_children() {
        let item: MenuItem<Ctx> = MenuItem::builder("Expand to level")
            .with_records_required(false)
            .with_display_fn(|ctx: &Ctx| {
                let levels = (1..=ctx.active_count()).map(|level| {
                    MenuItem::builder(format!("Level {level}"))
                        .with_records_required(false)
                        .build()
                        .map(MenuEntry::Item)
                        .unwrap()
                });
                DisplayOverrides::new().with_items(levels)
            })
            .build()
            .unwrap();
        assert!(!item.is_submenu());

        let resolved = item.resolve(&RecordSelection::new(vec![7, 8])).unwrap();
        assert!(resolved.is_submenu());
        assert!(!resolved.has_action);
        let children: Vec<_> = resolved.child_items().map(|c| c.text.as_str()).collect();
        assert_eq!(children, vec!["Level 1", "Level 2"]);

        // No levels for an empty selection: rendered as a leaf.
        let resolved = item.resolve(&RecordSelection::empty()).unwrap();
        assert!(!resolved.is_submenu());
    }

    #[test]
    fn test_submenu_without_enabled_children_is_disabled() {
        let submenu: MenuItem<Ctx> = MenuItem::builder("More")
            .with_records_required(false)
            .with_item(MenuItem::new("Needs one").unwrap())
            .build()
            .unwrap();

        let resolved = submenu.resolve(&RecordSelection::empty()).unwrap();
        assert!(resolved.is_submenu());
        assert!(!resolved.enabled);
        assert!(!resolved.has_action);

        let resolved = submenu.resolve(&RecordSelection::new(vec![5])).unwrap();
        assert!(resolved.enabled);
        assert_eq!(resolved.child_items().next().unwrap().path, vec![0]);
    }

    #[test]
    fn test_submenu_with_only_hidden_children_dropped() {
        let submenu: MenuItem<Ctx> = MenuItem::builder("More")
            .with_item(MenuItem::builder("Gone").with_hidden(true).build().unwrap())
            .with_separator()
            .build()
            .unwrap();
        assert!(submenu.resolve(&RecordSelection::new(vec![1])).is_none());
    }
}
