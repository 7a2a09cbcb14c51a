//! Horizon Menu - declarative context menus for record surfaces.
//!
//! This is the main crate of the workspace. It re-exports everything from
//! `horizon-menu-core` and adds the menu model built on top of it:
//!
//! - **Items**: [`MenuItem`] and [`MenuItemBuilder`], one entry of a menu or submenu
//! - **Menus**: [`ContextMenu`], an ordered list of items and separators
//! - **Resolution**: [`ResolvedEntry`], a plain snapshot for renderers
//! - **Configuration**: [`ActionRegistry`] and [`MenuSpec`], menus described in JSON or TOML
//!
//! # Example
//!
//! ```
//! use horizon_menu::prelude::*;
//!
//! let menu = ContextMenu::new()
//!     .with_item(
//!         MenuItem::builder("Copy")
//!             .with_icon("copy")
//!             .with_records_required(true)
//!             .with_action(|ctx: &RecordSelection<u32>| {
//!                 println!("copying {} rows", ctx.active_count());
//!             })
//!             .build()?,
//!     )
//!     .with_item(MenuItem::builder("Refresh").with_records_required(false).build()?);
//!
//! let ctx = RecordSelection::new(vec![4, 8]);
//! for entry in menu.resolve(&ctx) {
//!     if let Some(item) = entry.as_item() {
//!         println!("{} enabled={}", item.text, item.enabled);
//!     }
//! }
//! # Ok::<(), MenuError>(())
//! ```

pub use horizon_menu_core::*;

pub mod config;
mod entry;
mod item;
mod menu;
pub mod prelude;
pub mod resolve;

pub use config::{ActionRegistry, MenuEntrySpec, MenuItemSpec, MenuSpec};
pub use entry::MenuEntry;
pub use item::{ActionFn, DisplayFn, DisplayOverrides, EnableFn, Intent, MenuItem, MenuItemBuilder};
pub use menu::ContextMenu;
pub use resolve::{ResolvedEntry, ResolvedItem};
