//! `theme.sidebar` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! sidebar = "auto"
//! ```
//!
//! or an explicit structure:
//!
//! ```toml
//! [theme]
//! sidebar = ["/", "/guide/", ["/faq/", "FAQ"]]
//!
//! # one sidebar per site section
//! [theme.sidebar]
//! "/guide/" = ["/guide/", "/guide/install/"]
//! "/vuejs/" = [{ title = "Basics", children = ["/vuejs/intro/"] }]
//! ```

use crate::config::util::{LinkTarget, classify_target};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const AUTO: &str = "auto";

/// How the side navigation panel is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSidebar", into = "RawSidebar")]
pub enum SidebarMode {
    /// No sidebar (`sidebar = false`, or the key is absent).
    #[default]
    Disabled,

    /// Derived from the headers of the current page (`sidebar = "auto"`).
    Auto,

    /// One explicit sidebar shared by every page.
    Items(Vec<SidebarItem>),

    /// A separate sidebar per section, keyed by path prefix (`/guide/`).
    Routes(BTreeMap<String, Vec<SidebarItem>>),

    /// `sidebar = true`, which selects no mode. Kept as a bool so the
    /// document round-trips and validation can report it.
    Enabled,

    /// Any other keyword. Kept so validation can report it with the rest.
    Unrecognized(String),
}

const MODE_HINT: &str =
    "use \"auto\", false, an array of pages, or a table of per-section sidebars";

impl SidebarMode {
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Validate the sidebar mode and every explicit item under it.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        match self {
            Self::Disabled | Self::Auto => {}
            Self::Enabled => {
                diag.error_with_hint(
                    field.clone(),
                    "`true` does not select a sidebar mode",
                    MODE_HINT,
                );
            }
            Self::Unrecognized(keyword) => {
                diag.error_with_hint(
                    field.clone(),
                    format!("unrecognized sidebar mode \"{keyword}\""),
                    MODE_HINT,
                );
            }
            Self::Items(items) => validate_items(items, field, diag),
            Self::Routes(routes) => {
                for (prefix, items) in routes {
                    let route_field = field.join(&format!("\"{prefix}\""));
                    let is_section = prefix.ends_with('/')
                        && matches!(classify_target(prefix), Ok(LinkTarget::Internal(_)));
                    if !is_section {
                        diag.error_with_hint(
                            route_field.clone(),
                            format!("sidebar section `{prefix}` is not a site path prefix"),
                            "section keys start and end with a slash, e.g.: \"/guide/\"",
                        );
                    }
                    validate_items(items, &route_field, diag);
                }
            }
        }
    }
}

/// One line in an explicit sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarItem {
    /// A page, titled from its first header.
    Page(String),

    /// A page with an explicit title: `["/faq/", "FAQ"]`.
    Link(String, String),

    /// A titled group of nested items.
    Group(SidebarGroup),
}

/// A titled, optionally collapsable group of sidebar items.
///
/// Unknown keys are rejected: sidebar values are buffered to pick a shape,
/// so a misspelled key would otherwise vanish without a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroup {
    pub title: String,

    /// Page opened when the group title is clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default = "default_collapsable")]
    pub collapsable: bool,

    #[serde(default)]
    pub children: Vec<SidebarItem>,
}

const fn default_collapsable() -> bool {
    true
}

fn validate_items(items: &[SidebarItem], field: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, item) in items.iter().enumerate() {
        let item_field = field.index(i);
        match item {
            SidebarItem::Page(path) => validate_page_path(path, &item_field, diag),
            SidebarItem::Link(path, title) => {
                validate_page_path(path, &item_field.index(0), diag);
                if title.trim().is_empty() {
                    diag.error(item_field.index(1), "sidebar link has an empty title");
                }
            }
            SidebarItem::Group(group) => group.validate(&item_field, diag),
        }
    }
}

impl SidebarGroup {
    fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(field.join("title"), "sidebar group has an empty title");
        }

        if let Some(path) = &self.path {
            validate_page_path(path, &field.join("path"), diag);
        }

        if self.path.is_none() && self.children.is_empty() {
            diag.error_with_hint(
                field.join("children"),
                "sidebar group links nowhere",
                "add children or a path",
            );
        }

        validate_items(&self.children, &field.join("children"), diag);
    }
}

/// Sidebar pages accept the same targets as nav entries.
fn validate_page_path(path: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    if let Err(e) = classify_target(path) {
        diag.error_with_hint(
            field.clone(),
            e.to_string(),
            "use a site path like \"/guide/\" or a URL like \"https://example.com\"",
        );
    }
}

// ============================================================================
// serde representation
// ============================================================================

/// Wire shape of `theme.sidebar`: a bool, a keyword, an array or a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawSidebar {
    Toggle(bool),
    Keyword(String),
    Items(Vec<SidebarItem>),
    Routes(BTreeMap<String, Vec<SidebarItem>>),
}

impl From<RawSidebar> for SidebarMode {
    fn from(raw: RawSidebar) -> Self {
        match raw {
            RawSidebar::Toggle(false) => Self::Disabled,
            RawSidebar::Toggle(true) => Self::Enabled,
            RawSidebar::Keyword(keyword) if keyword == AUTO => Self::Auto,
            RawSidebar::Keyword(keyword) => Self::Unrecognized(keyword),
            RawSidebar::Items(items) => Self::Items(items),
            RawSidebar::Routes(routes) => Self::Routes(routes),
        }
    }
}

impl From<SidebarMode> for RawSidebar {
    fn from(mode: SidebarMode) -> Self {
        match mode {
            SidebarMode::Disabled => Self::Toggle(false),
            SidebarMode::Enabled => Self::Toggle(true),
            SidebarMode::Auto => Self::Keyword(AUTO.into()),
            SidebarMode::Items(items) => Self::Items(items),
            SidebarMode::Routes(routes) => Self::Routes(routes),
            SidebarMode::Unrecognized(keyword) => Self::Keyword(keyword),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        sidebar: SidebarMode,
    }

    fn parse(toml: &str) -> SidebarMode {
        toml::from_str::<Wrapper>(toml).unwrap().sidebar
    }

    fn check(mode: &SidebarMode) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        mode.validate(&FieldPath::new("theme.sidebar"), &mut diag);
        diag
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse(r#"sidebar = "auto""#), SidebarMode::Auto);
        assert_eq!(parse("sidebar = false"), SidebarMode::Disabled);
        assert_eq!(
            parse(r#"sidebar = "manual""#),
            SidebarMode::Unrecognized("manual".into())
        );
        assert!(SidebarMode::Auto.is_auto());
    }

    #[test]
    fn test_unrecognized_is_reported() {
        let diag = check(&parse(r#"sidebar = "Auto""#));
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.sidebar");
        assert!(diag.errors()[0].message.contains("Auto"));

        let diag = check(&parse("sidebar = true"));
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("true"));
    }

    #[test]
    fn test_true_is_kept_as_bool() {
        let mode = parse("sidebar = true");
        assert_eq!(mode, SidebarMode::Enabled);
        assert_eq!(serde_json::to_string(&mode).unwrap(), "true");

        #[derive(Serialize)]
        struct Out {
            sidebar: SidebarMode,
        }
        let toml = toml::to_string(&Out { sidebar: mode }).unwrap();
        assert_eq!(toml.trim(), "sidebar = true");
    }

    #[test]
    fn test_misspelled_group_key_fails_to_parse() {
        let result = toml::from_str::<Wrapper>(
            r#"sidebar = [{ title = "G", path = "/g/", childen = ["/a/"] }]"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_type_fails_to_parse() {
        assert!(toml::from_str::<Wrapper>("sidebar = 3").is_err());
    }

    #[test]
    fn test_explicit_items() {
        let mode = parse(
            r#"
sidebar = [
    "/",
    ["/faq/", "FAQ"],
    { title = "Guide", children = ["/guide/install/"] },
]
"#,
        );
        let SidebarMode::Items(items) = &mode else {
            panic!("expected explicit items, got {mode:?}");
        };
        assert_eq!(items[0], SidebarItem::Page("/".into()));
        assert_eq!(items[1], SidebarItem::Link("/faq/".into(), "FAQ".into()));
        let SidebarItem::Group(group) = &items[2] else {
            panic!("expected group");
        };
        assert!(group.collapsable);
        assert_eq!(group.path, None);
        assert!(check(&mode).is_empty());
    }

    #[test]
    fn test_explicit_item_errors() {
        let mode = parse(
            r#"
sidebar = [
    "guide",
    ["/faq/", ""],
    { title = "", children = [] },
    { title = "Deep", children = ["nope"] },
]
"#,
        );
        let diag = check(&mode);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "theme.sidebar[0]",
                "theme.sidebar[1][1]",
                "theme.sidebar[2].title",
                "theme.sidebar[2].children",
                "theme.sidebar[3].children[0]",
            ]
        );
    }

    #[test]
    fn test_routes() {
        let mode = parse(
            r#"
[sidebar]
"/guide/" = ["/guide/", "/guide/install/"]
"vuejs" = ["/vuejs/"]
"#,
        );
        let SidebarMode::Routes(routes) = &mode else {
            panic!("expected routes, got {mode:?}");
        };
        assert_eq!(routes.len(), 2);

        let diag = check(&mode);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), r#"theme.sidebar."vuejs""#);
    }

    #[test]
    fn test_serialize_shapes() {
        let json = serde_json::to_string(&SidebarMode::Auto).unwrap();
        assert_eq!(json, r#""auto""#);
        let json = serde_json::to_string(&SidebarMode::Disabled).unwrap();
        assert_eq!(json, "false");

        let mode = SidebarMode::Items(vec![
            SidebarItem::Page("/".into()),
            SidebarItem::Group(SidebarGroup {
                title: "Guide".into(),
                path: Some("/guide/".into()),
                collapsable: false,
                children: vec![SidebarItem::Link("/guide/faq/".into(), "FAQ".into())],
            }),
        ]);
        let json = serde_json::to_string(&mode).unwrap();
        let back: SidebarMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mode);
    }
}
