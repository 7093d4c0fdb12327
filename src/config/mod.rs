//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── markdown   # [markdown]
//! │   └── theme      # [theme], nav entries, sidebar
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util           # Link target checks, config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                      |
//! |--------------------|----------------------------------------------|
//! | top level          | `title`, `description`                       |
//! | `[markdown]`       | Markdown renderer options (line numbers)     |
//! | `[theme]`          | Sidebar mode                                 |
//! | `[[theme.nav]]`    | Navigation bar entries, in display order     |
//!
//! # Example
//!
//! ```toml
//! title = "Docs"
//! description = "Ali baba's cave of my knowledge 🌠"
//!
//! [markdown]
//! line_numbers = true
//!
//! [theme]
//! sidebar = "auto"
//!
//! [[theme.nav]]
//! label = "Home"
//! target = "/"
//! ```

pub mod section;
pub mod types;
pub mod util;

pub use section::{
    MarkdownOptions, NavEntry, SidebarGroup, SidebarItem, SidebarMode, ThemeConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{debug, log};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use util::find_config_file_from;

/// Default config filename, searched upward from the working directory.
pub const CONFIG_FILE: &str = "site.toml";

// ============================================================================
// format
// ============================================================================

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.json` files are JSON, everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title shown in the navigation bar and browser tab.
    pub title: String,

    /// Site tagline, any Unicode.
    #[serde(default)]
    pub description: String,

    /// Markdown renderer options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<MarkdownOptions>,

    /// Navigation bar and sidebar.
    #[serde(alias = "themeConfig")]
    pub theme: ThemeConfig,
}

pub struct SiteConfigFields {
    pub title: FieldPath,
}

impl SiteConfig {
    pub const FIELDS: SiteConfigFields = SiteConfigFields {
        title: FieldPath::new("title"),
    };

    /// Load the default configuration.
    ///
    /// Searches upward from cwd for `site.toml`, so commands work from any
    /// directory below the site root.
    pub fn load() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(|e| ConfigError::Io(PathBuf::from("."), e))?;
        Self::load_upward_from(&cwd)
    }

    /// Load the nearest `site.toml` at or above `start`.
    pub fn load_upward_from(start: &Path) -> Result<Self, ConfigError> {
        let path = find_config_file_from(start, Path::new(CONFIG_FILE))
            .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILE)))?;
        Self::load_from(&path)
    }

    /// Load configuration from a file path with unknown field detection.
    ///
    /// The format follows the file extension (see [`ConfigFormat::from_path`]).
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Io(path.to_path_buf(), err),
        })?;

        let (config, ignored) = Self::parse_with_ignored(&content, ConfigFormat::from_path(path))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse configuration from an in-memory document.
    pub fn from_str(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        Ok(match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        })
    }

    /// Parse content, collecting any unknown fields.
    pub fn parse_with_ignored(
        content: &str,
        format: ConfigFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();

        let config: Self = match format {
            ConfigFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
                    ignored.push(path.to_string());
                })?
            }
            ConfigFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let config: Self =
                    serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
                        ignored.push(path.to_string());
                    })?;
                // Reject trailing content after the document
                deserializer.end()?;
                config
            }
        };
        Ok((config, ignored))
    }

    /// Serialize the document; reloading the output yields an equal value.
    pub fn serialize_to(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Whether code blocks get line numbers.
    pub fn line_numbers(&self) -> bool {
        self.markdown.as_ref().is_some_and(|m| m.line_numbers)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every check and return errors and warnings together.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title is empty",
                "set a short name, e.g.: title = \"Docs\"",
            );
        }

        self.theme.validate(&mut diag);
        diag
    }

    /// Validate the configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigDiagnostics> {
        self.diagnose().into_result()
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse a TOML config with a minimal `title` prepended.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Docs\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config, ConfigFormat::Toml).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
