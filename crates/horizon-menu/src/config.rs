//! Declarative menu definitions.
//!
//! Menus can be described in JSON or TOML and bound to code at build time
//! through an [`ActionRegistry`]. Definitions refer to actions and enablement
//! predicates by id; the registry supplies the callbacks.
//!
//! # Format
//!
//! ```json
//! {
//!   "items": [
//!     { "name": "Edit", "icon": "edit", "action": "edit" },
//!     "-",
//!     { "name": "Bulk", "records_required": true, "items": [
//!       { "name": "Delete all", "action": "delete", "records_required": false }
//!     ]}
//!   ]
//! }
//! ```
//!
//! The string `"-"` is a separator. `records_required` accepts `false`,
//! `true` or a non-negative integer and defaults to `1`; anything else is a
//! configuration error raised when the menu is built, not when it is parsed.
//!
//! # Example
//!
//! ```
//! use horizon_menu::config::{ActionRegistry, MenuSpec};
//! use horizon_menu::{RecordSelection, SelectionContext};
//!
//! let mut registry = ActionRegistry::<RecordSelection<u64>>::new();
//! registry.register_action("edit", |ctx| println!("edit {:?}", ctx.clicked_record()));
//!
//! let spec = MenuSpec::from_json_str(r#"{ "items": [{ "name": "Edit", "action": "edit" }] }"#)?;
//! let menu = registry.build_menu(&spec)?;
//! assert_eq!(menu.len(), 1);
//! # Ok::<(), horizon_menu::MenuError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use horizon_menu_core::logging::targets;
use horizon_menu_core::{ConfigurationError, Icon, MenuError, RecordsRequiredValue, Result};
use serde::{Deserialize, Serialize};

use crate::entry::MenuEntry;
use crate::item::{ActionFn, EnableFn, Intent, MenuItem, validate_name};
use crate::menu::ContextMenu;

/// The token marking a separator in a definition.
pub const SEPARATOR_TOKEN: &str = "-";

// ============================================================================
// Definitions
// ============================================================================

/// A whole menu definition.
///
/// Unknown keys are rejected at every level, so a misspelled field fails to
/// parse instead of silently falling back to its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuSpec {
    #[serde(default)]
    pub items: Vec<MenuEntrySpec>,
}

impl MenuSpec {
    /// Parse a definition from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| MenuError::parse("JSON", e.to_string()))
    }

    /// Parse a definition from TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| MenuError::parse("TOML", e.to_string()))
    }

    /// Serialize the definition to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MenuError::serialize("JSON", e.to_string()))
    }
}

/// One position in a menu definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuEntrySpec {
    /// A string token. Only [`SEPARATOR_TOKEN`] is understood.
    Token(String),
    /// An item definition.
    Item(MenuItemSpec),
}

impl MenuEntrySpec {
    /// A separator entry.
    pub fn separator() -> Self {
        MenuEntrySpec::Token(SEPARATOR_TOKEN.to_owned())
    }
}

impl From<MenuItemSpec> for MenuEntrySpec {
    fn from(spec: MenuItemSpec) -> Self {
        MenuEntrySpec::Item(spec)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// An item definition.
///
/// `name` is optional here so that a missing name is reported as a validation
/// error by [`ActionRegistry::build_item`] rather than as a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuItemSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Intent::is_none")]
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub hidden: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_required: Option<RecordsRequiredValue>,
    /// Registry id of the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Registry id of the enablement predicate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MenuEntrySpec>>,
}

impl MenuItemSpec {
    /// A definition with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

// ============================================================================
// ActionRegistry
// ============================================================================

/// Named actions and predicates that definitions bind to.
pub struct ActionRegistry<C> {
    actions: HashMap<String, ActionFn<C>>,
    predicates: HashMap<String, EnableFn<C>>,
}

impl<C> Default for ActionRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ActionRegistry<C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            predicates: HashMap::new(),
        }
    }

    /// Register an action under `id`, replacing any previous one.
    pub fn register_action(
        &mut self,
        id: impl Into<String>,
        action: impl Fn(&C) + Send + Sync + 'static,
    ) -> &mut Self {
        let id = id.into();
        if self.actions.insert(id.clone(), Arc::new(action)).is_some() {
            tracing::debug!(target: targets::CONFIG, id = %id, "replaced registered action");
        }
        self
    }

    /// Register an enablement predicate under `id`, replacing any previous one.
    pub fn register_predicate(
        &mut self,
        id: impl Into<String>,
        predicate: impl Fn(&C) -> bool + Send + Sync + 'static,
    ) -> &mut Self {
        let id = id.into();
        if self.predicates.insert(id.clone(), Arc::new(predicate)).is_some() {
            tracing::debug!(target: targets::CONFIG, id = %id, "replaced registered predicate");
        }
        self
    }

    /// Builder pattern for [`register_action`](Self::register_action).
    pub fn with_action(
        mut self,
        id: impl Into<String>,
        action: impl Fn(&C) + Send + Sync + 'static,
    ) -> Self {
        self.register_action(id, action);
        self
    }

    /// Builder pattern for [`register_predicate`](Self::register_predicate).
    pub fn with_predicate(
        mut self,
        id: impl Into<String>,
        predicate: impl Fn(&C) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.register_predicate(id, predicate);
        self
    }

    pub fn has_action(&self, id: &str) -> bool {
        self.actions.contains_key(id)
    }

    pub fn has_predicate(&self, id: &str) -> bool {
        self.predicates.contains_key(id)
    }

    /// Build a menu from a definition.
    ///
    /// Stops at the first invalid item; nothing is returned for a partially
    /// valid definition.
    pub fn build_menu(&self, spec: &MenuSpec) -> Result<ContextMenu<C>> {
        let entries = self.build_entries(&spec.items)?;
        tracing::debug!(
            target: targets::CONFIG,
            entries = entries.len(),
            "built menu from definition"
        );
        Ok(ContextMenu::from_entries(entries))
    }

    /// Parse a JSON definition and build it.
    pub fn menu_from_json(&self, json: &str) -> Result<ContextMenu<C>> {
        self.build_menu(&MenuSpec::from_json_str(json)?)
    }

    /// Parse a TOML definition and build it.
    pub fn menu_from_toml(&self, text: &str) -> Result<ContextMenu<C>> {
        self.build_menu(&MenuSpec::from_toml_str(text)?)
    }

    /// Build a single item and its children from a definition.
    pub fn build_item(&self, spec: &MenuItemSpec) -> Result<MenuItem<C>> {
        let name = spec.name.as_deref().unwrap_or_default();
        validate_name(name)?;

        let mut builder = MenuItem::builder(name)
            .with_intent(spec.intent)
            .with_hidden(spec.hidden)
            .with_disabled(spec.disabled);

        if let Some(icon) = &spec.icon {
            builder = builder.with_icon(icon.clone());
        }
        if let Some(text) = &spec.secondary_text {
            builder = builder.with_secondary_text(text.clone());
        }
        if let Some(tooltip) = &spec.tooltip {
            builder = builder.with_tooltip(tooltip.clone());
        }
        if let Some(class_name) = &spec.class_name {
            builder = builder.with_class_name(class_name.clone());
        }
        if let Some(value) = &spec.records_required {
            builder = builder.with_records_required_value(value.clone());
        }
        if let Some(id) = &spec.action {
            builder = builder.with_action_fn(self.lookup_action(id)?);
        }
        if let Some(id) = &spec.enable {
            builder = builder.with_shared_enable_fn(self.lookup_predicate(id)?);
        }
        if let Some(items) = &spec.items {
            builder = builder.with_entries(self.build_entries(items)?);
        }

        builder.build()
    }

    fn build_entries(&self, specs: &[MenuEntrySpec]) -> Result<Vec<MenuEntry<C>>> {
        specs.iter().map(|spec| self.build_entry(spec)).collect()
    }

    fn build_entry(&self, spec: &MenuEntrySpec) -> Result<MenuEntry<C>> {
        match spec {
            MenuEntrySpec::Token(token) if token == SEPARATOR_TOKEN => Ok(MenuEntry::Separator),
            MenuEntrySpec::Token(token) => Err(ConfigurationError::new(
                "items",
                format!("unknown menu token \"{token}\""),
            )
            .into()),
            MenuEntrySpec::Item(item) => self.build_item(item).map(MenuEntry::Item),
        }
    }

    fn lookup_action(&self, id: &str) -> Result<ActionFn<C>> {
        self.actions.get(id).cloned().ok_or_else(|| {
            ConfigurationError::new("action", format!("no action registered as \"{id}\"")).into()
        })
    }

    fn lookup_predicate(&self, id: &str) -> Result<EnableFn<C>> {
        self.predicates.get(id).cloned().ok_or_else(|| {
            ConfigurationError::new("enable", format!("no predicate registered as \"{id}\""))
                .into()
        })
    }
}

impl<C> fmt::Debug for ActionRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut actions: Vec<_> = self.actions.keys().collect();
        let mut predicates: Vec<_> = self.predicates.keys().collect();
        actions.sort();
        predicates.sort();
        f.debug_struct("ActionRegistry")
            .field("actions", &actions)
            .field("predicates", &predicates)
            .finish()
    }
}
