//! Logging facilities for Horizon Menu.
//!
//! Horizon Menu uses the `tracing` crate for instrumentation and never installs
//! a subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_menu=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core types target.
    pub const CORE: &str = "horizon_menu_core";
    /// Enablement policy normalization.
    pub const POLICY: &str = "horizon_menu_core::policy";
    /// Item construction and triggering.
    pub const ITEM: &str = "horizon_menu::item";
    /// Menu resolution for renderers.
    pub const RESOLVE: &str = "horizon_menu::resolve";
    /// Declarative menu configuration.
    pub const CONFIG: &str = "horizon_menu::config";
}
