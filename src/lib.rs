//! sitecfg - typed configuration for static documentation sites.
//!
//! The external site generator calls [`SiteConfig::load`] once per build and
//! [`SiteConfig::validate`] to get every violation at once.
//!
//! ```ignore
//! let config = sitecfg::SiteConfig::load()?;
//! if let Err(diag) = config.validate() {
//!     eprintln!("{diag}");
//! }
//! ```

pub mod config;
pub mod logger;

pub use config::{
    CONFIG_FILE, ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigFormat, FieldPath,
    MarkdownOptions, NavEntry, SidebarGroup, SidebarItem, SidebarMode, SiteConfig, ThemeConfig,
};
