//! `[theme]` section configuration.
//!
//! Contains the navigation bar and the sidebar mode.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! sidebar = "auto"
//!
//! [[theme.nav]]
//! label = "Home"
//! target = "/"
//!
//! [[theme.nav]]
//! label = "Guide"
//! target = "/guide/"
//! ```

mod nav;
mod sidebar;

pub use nav::NavEntry;
pub use sidebar::{SidebarGroup, SidebarItem, SidebarMode};

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Theme section configuration.
///
/// `nav` is required; an absent `sidebar` disables the side panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Side panel mode.
    #[serde(default)]
    pub sidebar: SidebarMode,

    /// Top navigation bar, rendered left to right.
    pub nav: Vec<NavEntry>,
}

pub struct ThemeConfigFields {
    pub nav: FieldPath,
    pub sidebar: FieldPath,
}

impl ThemeConfig {
    pub const FIELDS: ThemeConfigFields = ThemeConfigFields {
        nav: FieldPath::new("theme.nav"),
        sidebar: FieldPath::new("theme.sidebar"),
    };

    /// Validate navigation entries and the sidebar.
    ///
    /// # Checks
    /// - every nav entry has a label and a valid target
    /// - `sidebar` is a recognized mode, explicit items point at valid pages
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        nav::validate_nav(&self.nav, &Self::FIELDS.nav, diag);
        self.sidebar.validate(&Self::FIELDS.sidebar, diag);
    }
}
