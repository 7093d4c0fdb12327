//! `[[theme.nav]]` entries for the top navigation bar.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! label = "Home"
//! target = "/"
//!
//! [[theme.nav]]
//! label = "BitBucket"
//! target = "https://bitbucket.org"
//! ```

use crate::config::util::classify_target;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A clickable link in the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Text shown in the bar.
    #[serde(alias = "text")]
    pub label: String,

    /// Internal path (`/guide/`) or absolute URL.
    #[serde(alias = "link")]
    pub target: String,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }

    /// Validate one entry. `field` is the entry's own path, e.g. `theme.nav[2]`.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.label.trim().is_empty() {
            diag.error_with_hint(
                field.join("label"),
                "navigation entry has an empty label",
                "set a short text, e.g.: label = \"Guide\"",
            );
        }

        if let Err(e) = classify_target(&self.target) {
            diag.error_with_hint(
                field.join("target"),
                e.to_string(),
                "use a site path like \"/guide/\" or a URL like \"https://example.com\"",
            );
        }
    }
}

/// Validate the whole navigation bar.
///
/// Duplicate labels are legal (the generator renders both) but reported as
/// warnings since they are usually a copy-paste slip.
pub fn validate_nav(entries: &[NavEntry], field: &FieldPath, diag: &mut ConfigDiagnostics) {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (i, entry) in entries.iter().enumerate() {
        let entry_field = field.index(i);
        entry.validate(&entry_field, diag);

        let label = entry.label.trim();
        if label.is_empty() {
            continue;
        }
        if let Some(first) = first_seen.get(label) {
            diag.warn(
                entry_field.join("label"),
                format!("label \"{label}\" duplicates {}", field.index(*first).as_str()),
            );
        } else {
            first_seen.insert(label, i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav_field() -> FieldPath {
        FieldPath::new("theme.nav")
    }

    #[test]
    fn test_valid_entries() {
        let entries = vec![
            NavEntry::new("Home", "/"),
            NavEntry::new("Guide", "/guide/"),
            NavEntry::new("BitBucket", "https://bitbucket.org"),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_nav(&entries, &nav_field(), &mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_empty_label_reports_position() {
        let entries = vec![NavEntry::new("Home", "/"), NavEntry::new("  ", "/guide/")];
        let mut diag = ConfigDiagnostics::new();
        validate_nav(&entries, &nav_field(), &mut diag);

        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.nav[1].label");
    }

    #[test]
    fn test_bad_target() {
        let entries = vec![NavEntry::new("Guide", "guide/")];
        let mut diag = ConfigDiagnostics::new();
        validate_nav(&entries, &nav_field(), &mut diag);

        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.nav[0].target");
        assert!(diag.errors()[0].hint.is_some());
    }

    #[test]
    fn test_empty_label_and_target_both_reported() {
        let entries = vec![NavEntry::new("", "")];
        let mut diag = ConfigDiagnostics::new();
        validate_nav(&entries, &nav_field(), &mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_duplicate_label_is_warning() {
        let entries = vec![
            NavEntry::new("Guide", "/guide/"),
            NavEntry::new("Home", "/"),
            NavEntry::new("Guide", "/guide/v2/"),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_nav(&entries, &nav_field(), &mut diag);

        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field.as_str(), "theme.nav[2].label");
        assert!(diag.warnings()[0].message.contains("theme.nav[0]"));
    }

    #[test]
    fn test_text_link_aliases() {
        let entry: NavEntry =
            serde_json::from_str(r#"{"text": "Vue.js", "link": "/vuejs/"}"#).unwrap();
        assert_eq!(entry, NavEntry::new("Vue.js", "/vuejs/"));
    }
}
