//! Menu item model.
//!
//! This module provides [`MenuItem`], a declarative description of one entry
//! of a record context menu and, recursively, of a submenu. It captures *what*
//! an item is and *when* it may fire; drawing it and wiring it to input events
//! is left to a renderer.
//!
//! # Overview
//!
//! A `MenuItem` holds:
//! - A required display name
//! - Optional presentation hints (icon, secondary text, tooltip, intent)
//! - An optional action, invoked only on an explicit [`trigger`](MenuItem::trigger)
//! - A record-count enablement policy ([`RecordsRequired`], default exactly one)
//! - An optional custom enablement predicate
//! - Optional child entries, which make the item a submenu
//!
//! Items are immutable once built. To reconfigure one, turn it back into a
//! builder with [`MenuItem::to_builder`] and build a new item.
//!
//! # Example
//!
//! ```
//! use horizon_menu::{MenuItem, RecordSelection, RecordsRequired};
//!
//! let delete = MenuItem::builder("Delete")
//!     .with_icon("trash")
//!     .with_records_required(RecordsRequired::AtLeastOne)
//!     .with_action(|ctx: &RecordSelection<u64>| {
//!         println!("deleting {} records", ctx.active_records().count());
//!     })
//!     .build()?;
//!
//! assert!(!delete.is_enabled(&RecordSelection::empty()));
//! assert!(delete.is_enabled(&RecordSelection::new(vec![1, 2])));
//! # Ok::<(), horizon_menu::MenuError>(())
//! ```
//!
//! # Submenus
//!
//! A submenu's own policy and predicate gate the submenu itself, exactly as
//! they gate a leaf. Its children are evaluated independently. A submenu's
//! action is never triggered; submenus only host children.

use std::fmt;
use std::sync::Arc;

use horizon_menu_core::logging::targets;
use horizon_menu_core::{
    ConfigurationError, Icon, RecordsRequired, RecordsRequiredValue, Result, SelectionContext,
    ValidationError,
};
use serde::{Deserialize, Serialize};

use crate::entry::MenuEntry;

/// Callback invoked when an enabled item is triggered.
pub type ActionFn<C> = Arc<dyn Fn(&C) + Send + Sync>;

/// Custom enablement predicate, evaluated in addition to the record policy.
pub type EnableFn<C> = Arc<dyn Fn(&C) -> bool + Send + Sync>;

/// Per-render display override hook.
pub type DisplayFn<C> = Arc<dyn Fn(&C) -> DisplayOverrides<C> + Send + Sync>;

// ============================================================================
// Intent
// ============================================================================

/// Visual intent hint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// No particular intent (default).
    #[default]
    None,
    /// The main or recommended action.
    Primary,
    /// A constructive action.
    Success,
    /// An action that deserves attention.
    Warning,
    /// A destructive action.
    Danger,
}

impl Intent {
    /// Returns true for [`Intent::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Intent::None)
    }
}

// ============================================================================
// Display Overrides
// ============================================================================

/// Display properties a [`DisplayFn`] may override for a single render.
///
/// Fields left as `None` keep the item's configured value. `items` replaces
/// the item's children for this render, which lets a submenu be built from
/// the current selection; an empty list turns the item into a leaf.
pub struct DisplayOverrides<C> {
    pub text: Option<String>,
    pub icon: Option<Icon>,
    pub secondary_text: Option<String>,
    pub tooltip: Option<String>,
    pub intent: Option<Intent>,
    pub class_name: Option<String>,
    pub hidden: Option<bool>,
    pub disabled: Option<bool>,
    pub items: Option<Vec<MenuEntry<C>>>,
}

impl<C> DisplayOverrides<C> {
    /// Overrides that change nothing.
    pub fn new() -> Self {
        Self {
            text: None,
            icon: None,
            secondary_text: None,
            tooltip: None,
            intent: None,
            class_name: None,
            hidden: None,
            disabled: None,
            items: None,
        }
    }

    /// Overrides that hide the item.
    pub fn hide() -> Self {
        Self::new().with_hidden(true)
    }

    /// Replace the display name.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Replace the icon.
    pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Replace the secondary text.
    pub fn with_secondary_text(mut self, text: impl Into<String>) -> Self {
        self.secondary_text = Some(text.into());
        self
    }

    /// Replace the tooltip.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Replace the intent.
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    /// Replace the style class.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Show or hide the item regardless of its static flag.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    /// Disable or re-enable the item regardless of its static flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Supply the children for this render.
    pub fn with_items(mut self, items: impl IntoIterator<Item = MenuEntry<C>>) -> Self {
        self.items = Some(items.into_iter().collect());
        self
    }

    /// Whether the item is hidden once these overrides are applied.
    pub(crate) fn hides(&self, item: &MenuItem<C>) -> bool {
        self.hidden.unwrap_or(item.hidden)
    }

    /// Whether the item is statically disabled once these overrides are applied.
    pub(crate) fn disables(&self, item: &MenuItem<C>) -> bool {
        self.disabled.unwrap_or(item.disabled)
    }

    /// The children in effect: the override if present, else the item's own.
    pub(crate) fn entries<'a>(&'a self, item: &'a MenuItem<C>) -> &'a [MenuEntry<C>] {
        self.items.as_deref().unwrap_or(item.items())
    }
}

impl<C> Default for DisplayOverrides<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for DisplayOverrides<C> {
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
            icon: self.icon.clone(),
            secondary_text: self.secondary_text.clone(),
            tooltip: self.tooltip.clone(),
            intent: self.intent,
            class_name: self.class_name.clone(),
            hidden: self.hidden,
            disabled: self.disabled,
            items: self.items.clone(),
        }
    }
}

impl<C> fmt::Debug for DisplayOverrides<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayOverrides")
            .field("text", &self.text)
            .field("icon", &self.icon)
            .field("intent", &self.intent)
            .field("hidden", &self.hidden)
            .field("disabled", &self.disabled)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// MenuItem
// ============================================================================

/// One entry of a record context menu, or a submenu of further entries.
///
/// `C` is the host's [`SelectionContext`] type, handed to every callback.
///
/// # Thread Safety
///
/// `MenuItem` is `Send + Sync` for every `C`; callbacks are required to be
/// `Send + Sync`. A built tree can be evaluated from several threads at once.
pub struct MenuItem<C> {
    name: String,
    icon: Option<Icon>,
    secondary_text: Option<String>,
    tooltip: Option<String>,
    intent: Intent,
    class_name: Option<String>,
    hidden: bool,
    disabled: bool,
    records_required: RecordsRequired,
    action: Option<ActionFn<C>>,
    enable_fn: Option<EnableFn<C>>,
    display_fn: Option<DisplayFn<C>>,
    items: Option<Vec<MenuEntry<C>>>,
}

impl<C> MenuItem<C> {
    /// Start building an item with the given name.
    pub fn builder(name: impl Into<String>) -> MenuItemBuilder<C> {
        MenuItemBuilder::new(name)
    }

    /// Build a plain leaf item with default settings and no action.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::builder(name).build()
    }

    /// Turn this item back into a builder carrying all of its settings.
    ///
    /// Callbacks are shared with the new builder; children are cloned.
    pub fn to_builder(&self) -> MenuItemBuilder<C> {
        MenuItemBuilder {
            name: self.name.clone(),
            icon: self.icon.clone(),
            secondary_text: self.secondary_text.clone(),
            tooltip: self.tooltip.clone(),
            intent: self.intent,
            class_name: self.class_name.clone(),
            hidden: self.hidden,
            disabled: self.disabled,
            records_required: Ok(self.records_required),
            action: self.action.clone(),
            enable_fn: self.enable_fn.clone(),
            display_fn: self.display_fn.clone(),
            items: self.items.clone().unwrap_or_default(),
        }
    }

    // ========================================================================
    // Display
    // ========================================================================

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The icon handle, if any.
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Secondary text, usually shown in a minimal fashion next to the name.
    pub fn secondary_text(&self) -> Option<&str> {
        self.secondary_text.as_deref()
    }

    /// Tooltip text, if any.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// The visual intent hint.
    pub fn intent(&self) -> Intent {
        self.intent
    }

    /// Extra style class for the renderer.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Check if the item is statically hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Check if the item is statically disabled.
    ///
    /// This flag is applied when resolving and triggering; it does not take
    /// part in [`is_enabled`](Self::is_enabled).
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    // ========================================================================
    // Behavior
    // ========================================================================

    /// The record-count enablement policy.
    pub fn records_required(&self) -> RecordsRequired {
        self.records_required
    }

    /// Check if the item carries an action.
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// The action callback, if any. Callers own the decision to invoke it.
    pub fn action(&self) -> Option<&ActionFn<C>> {
        self.action.as_ref()
    }

    /// The custom enablement predicate, if any.
    pub fn enable_fn(&self) -> Option<&EnableFn<C>> {
        self.enable_fn.as_ref()
    }

    /// The per-render display hook, if any.
    pub fn display_fn(&self) -> Option<&DisplayFn<C>> {
        self.display_fn.as_ref()
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    /// Check if this item hosts child entries.
    pub fn is_submenu(&self) -> bool {
        self.items.is_some()
    }

    /// Child entries in the order supplied. Empty for leaves.
    pub fn items(&self) -> &[MenuEntry<C>] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Child items in order, skipping separators.
    pub fn children(&self) -> impl Iterator<Item = &MenuItem<C>> + '_ {
        self.items().iter().filter_map(MenuEntry::as_item)
    }

    /// Find a descendant by index path. The empty path is this item.
    ///
    /// Indices count separators, so they match positions in [`items`](Self::items).
    pub fn find(&self, path: &[usize]) -> Option<&MenuItem<C>> {
        match path.split_first() {
            None => Some(self),
            Some((&index, rest)) => self.items().get(index)?.as_item()?.find(rest),
        }
    }

    /// Visit this item and all descendants depth-first, parents before
    /// children, together with their depth (this item is depth 0).
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a MenuItem<C>, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at<'a>(&'a self, depth: usize, visit: &mut impl FnMut(&'a MenuItem<C>, usize)) {
        visit(self, depth);
        for child in self.children() {
            child.walk_at(depth + 1, visit);
        }
    }
}

impl<C: SelectionContext> MenuItem<C> {
    /// Check whether the item is actionable for the given selection.
    ///
    /// True when the active record count satisfies
    /// [`records_required`](Self::records_required) and the custom predicate,
    /// if present, also returns true. The predicate is not called when the
    /// count policy already fails.
    ///
    /// Pure: never invokes the action and never mutates the item.
    pub fn is_enabled(&self, context: &C) -> bool {
        self.records_required.is_met_by(context.active_count())
            && self.enable_fn.as_ref().is_none_or(|enable| enable(context))
    }

    /// Invoke the action in response to an explicit user trigger.
    ///
    /// Applies the same rules as resolution, display hook included. Does
    /// nothing and returns false for submenus, items without an action, and
    /// items that are hidden, disabled or not enabled for `context`.
    /// Otherwise calls the action once and returns true.
    pub fn trigger(&self, context: &C) -> bool {
        let Some(action) = self.action.as_ref() else {
            return false;
        };
        let overrides = self.display_overrides(context);
        if !overrides.entries(self).is_empty() {
            tracing::debug!(
                target: targets::ITEM,
                name = %self.name,
                "submenu action not triggered"
            );
            return false;
        }
        if !self.is_available(&overrides, context) {
            tracing::debug!(
                target: targets::ITEM,
                name = %self.name,
                "trigger ignored, item disabled"
            );
            return false;
        }

        tracing::debug!(target: targets::ITEM, name = %self.name, "triggering action");
        action(context);
        true
    }

    /// Trigger the descendant at `path`, following the children in effect
    /// for `context` (display hook included). The empty path is this item.
    ///
    /// Every item along the way must be visible and enabled, as it would have
    /// to be for a user to reach the target in a rendered menu. Returns `None`
    /// when `path` does not address an item.
    pub fn trigger_path(&self, path: &[usize], context: &C) -> Option<bool> {
        let Some((&index, rest)) = path.split_first() else {
            return Some(self.trigger(context));
        };

        let overrides = self.display_overrides(context);
        let child = overrides.entries(self).get(index)?.as_item()?;
        if !self.is_available(&overrides, context) {
            tracing::debug!(
                target: targets::ITEM,
                name = %self.name,
                "trigger ignored, submenu closed"
            );
            return Some(false);
        }
        child.trigger_path(rest, context)
    }

    /// Overrides from the display hook, or none when there is no hook.
    pub(crate) fn display_overrides(&self, context: &C) -> DisplayOverrides<C> {
        self.display_fn
            .as_ref()
            .map(|display| display(context))
            .unwrap_or_default()
    }

    /// Whether a user could act on this item in a menu rendered for `context`:
    /// visible, not disabled and enabled by policy and predicate.
    pub(crate) fn is_available(&self, overrides: &DisplayOverrides<C>, context: &C) -> bool {
        !overrides.hides(self) && !overrides.disables(self) && self.is_enabled(context)
    }
}

impl<C> Clone for MenuItem<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            icon: self.icon.clone(),
            secondary_text: self.secondary_text.clone(),
            tooltip: self.tooltip.clone(),
            intent: self.intent,
            class_name: self.class_name.clone(),
            hidden: self.hidden,
            disabled: self.disabled,
            records_required: self.records_required,
            action: self.action.clone(),
            enable_fn: self.enable_fn.clone(),
            display_fn: self.display_fn.clone(),
            items: self.items.clone(),
        }
    }
}

impl<C> fmt::Debug for MenuItem<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("name", &self.name)
            .field("icon", &self.icon)
            .field("records_required", &self.records_required)
            .field("hidden", &self.hidden)
            .field("disabled", &self.disabled)
            .field("has_action", &self.action.is_some())
            .field("has_enable_fn", &self.enable_fn.is_some())
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(MenuItem<horizon_menu_core::RecordSelection<u64>>: Send, Sync);

// ============================================================================
// MenuItemBuilder
// ============================================================================

/// Builder for [`MenuItem`].
///
/// Every setting but the name is optional. The record policy defaults to
/// [`RecordsRequired::Exactly(1)`](RecordsRequired::Exactly).
pub struct MenuItemBuilder<C> {
    name: String,
    icon: Option<Icon>,
    secondary_text: Option<String>,
    tooltip: Option<String>,
    intent: Intent,
    class_name: Option<String>,
    hidden: bool,
    disabled: bool,
    records_required: std::result::Result<RecordsRequired, ConfigurationError>,
    action: Option<ActionFn<C>>,
    enable_fn: Option<EnableFn<C>>,
    display_fn: Option<DisplayFn<C>>,
    items: Vec<MenuEntry<C>>,
}

impl<C> MenuItemBuilder<C> {
    /// Create a builder for an item with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
            secondary_text: None,
            tooltip: None,
            intent: Intent::default(),
            class_name: None,
            hidden: false,
            disabled: false,
            records_required: Ok(RecordsRequired::default()),
            action: None,
            enable_fn: None,
            display_fn: None,
            items: Vec::new(),
        }
    }

    /// Replace the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Remove the icon.
    pub fn without_icon(mut self) -> Self {
        self.icon = None;
        self
    }

    /// Set the secondary text.
    pub fn with_secondary_text(mut self, text: impl Into<String>) -> Self {
        self.secondary_text = Some(text.into());
        self
    }

    /// Set the tooltip.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set the visual intent.
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    /// Set the style class.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set whether the item is hidden from rendered menus.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Set whether the item is statically disabled.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the record-count policy.
    ///
    /// Accepts a [`RecordsRequired`], a `bool` or a `usize`.
    pub fn with_records_required(mut self, policy: impl Into<RecordsRequired>) -> Self {
        self.records_required = Ok(policy.into());
        self
    }

    /// Set the record-count policy from an unchecked value.
    ///
    /// Anything other than `false`, `true` or a non-negative integer makes
    /// [`build`](Self::build) fail with a [`ConfigurationError`].
    pub fn with_records_required_value(mut self, value: impl Into<RecordsRequiredValue>) -> Self {
        self.records_required = RecordsRequired::try_from(value.into());
        self
    }

    /// Set the action invoked on trigger.
    pub fn with_action(mut self, action: impl Fn(&C) + Send + Sync + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// Set an already shared action callback.
    pub fn with_action_fn(mut self, action: ActionFn<C>) -> Self {
        self.action = Some(action);
        self
    }

    /// Set the custom enablement predicate.
    pub fn with_enable_fn(mut self, enable: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        self.enable_fn = Some(Arc::new(enable));
        self
    }

    /// Set an already shared enablement predicate.
    pub fn with_shared_enable_fn(mut self, enable: EnableFn<C>) -> Self {
        self.enable_fn = Some(enable);
        self
    }

    /// Set the per-render display hook.
    pub fn with_display_fn(
        mut self,
        display: impl Fn(&C) -> DisplayOverrides<C> + Send + Sync + 'static,
    ) -> Self {
        self.display_fn = Some(Arc::new(display));
        self
    }

    /// Append a child item, making this item a submenu.
    pub fn with_item(mut self, item: MenuItem<C>) -> Self {
        self.items.push(MenuEntry::Item(item));
        self
    }

    /// Append a separator between child items.
    pub fn with_separator(mut self) -> Self {
        self.items.push(MenuEntry::Separator);
        self
    }

    /// Append any number of child entries.
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = MenuEntry<C>>) -> Self {
        self.items.extend(entries);
        self
    }

    /// Append one child entry.
    pub fn with_entry(mut self, entry: impl Into<MenuEntry<C>>) -> Self {
        self.items.push(entry.into());
        self
    }

    /// Remove all children, making this item a leaf.
    pub fn without_items(mut self) -> Self {
        self.items.clear();
        self
    }

    /// Validate the configuration and build the item.
    ///
    /// Fails with a validation error for a blank name and a configuration
    /// error for an unsupported record requirement.
    pub fn build(self) -> Result<MenuItem<C>> {
        if let Err(err) = validate_name(&self.name) {
            tracing::debug!(target: targets::ITEM, "rejected menu item: {}", err);
            return Err(err.into());
        }
        let records_required = self.records_required.inspect_err(|err| {
            tracing::debug!(
                target: targets::ITEM,
                name = %self.name,
                "rejected menu item: {}",
                err
            );
        })?;

        let items = (!self.items.is_empty()).then_some(self.items);

        tracing::trace!(
            target: targets::ITEM,
            name = %self.name,
            policy = %records_required,
            children = items.as_ref().map_or(0, Vec::len),
            "built menu item"
        );

        Ok(MenuItem {
            name: self.name,
            icon: self.icon,
            secondary_text: self.secondary_text,
            tooltip: self.tooltip,
            intent: self.intent,
            class_name: self.class_name,
            hidden: self.hidden,
            disabled: self.disabled,
            records_required,
            action: self.action,
            enable_fn: self.enable_fn,
            display_fn: self.display_fn,
            items,
        })
    }
}

/// Check that an item name is usable as a display label.
pub(crate) fn validate_name(name: &str) -> std::result::Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::missing_name())
    } else {
        Ok(())
    }
}
