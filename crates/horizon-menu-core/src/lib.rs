//! Core types for Horizon Menu.
//!
//! This crate provides the foundation the menu model is built on:
//!
//! - **Enablement policy**: [`RecordsRequired`], the record-count rule an item declares
//! - **Selection context**: [`SelectionContext`], how a host describes its active records
//! - **Icons**: [`Icon`], an opaque handle resolved by the renderer
//! - **Errors**: [`ValidationError`] and [`ConfigurationError`], raised at construction
//!
//! # Example
//!
//! ```
//! use horizon_menu_core::{RecordSelection, RecordsRequired, SelectionContext};
//!
//! let ctx = RecordSelection::new(vec!["a", "b"]);
//!
//! assert!(RecordsRequired::AtLeastOne.is_met_by(ctx.active_count()));
//! assert!(!RecordsRequired::default().is_met_by(ctx.active_count()));
//! assert!(RecordsRequired::Exactly(2).is_met_by(ctx.active_count()));
//! ```

mod error;
mod icon;
pub mod logging;
mod policy;
pub mod selection;

pub use error::{ConfigurationError, MenuError, Result, ValidationError};
pub use icon::Icon;
pub use policy::{RecordsRequired, RecordsRequiredValue};
pub use selection::{RecordSelection, SelectionContext};
