//! Prelude module for Horizon Menu.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use horizon_menu::prelude::*;
//! ```

// ============================================================================
// Menu Model
// ============================================================================

pub use crate::entry::MenuEntry;
pub use crate::item::{DisplayOverrides, Intent, MenuItem, MenuItemBuilder};
pub use crate::menu::ContextMenu;
pub use crate::resolve::{ResolvedEntry, ResolvedItem};

// ============================================================================
// Enablement
// ============================================================================

pub use horizon_menu_core::{Icon, RecordSelection, RecordsRequired, SelectionContext};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::{ActionRegistry, MenuSpec};
pub use horizon_menu_core::{ConfigurationError, MenuError, ValidationError};
