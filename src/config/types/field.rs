//! Config field path used to point diagnostics at their source.

use std::borrow::Cow;

/// Dotted location of a value inside the configuration document.
///
/// Static section paths are declared as constants on each section type
/// (`ThemeConfig::FIELDS.nav`); per-entry paths are derived at validation
/// time with [`FieldPath::index`] and [`FieldPath::join`].
///
/// # Example
///
/// ```ignore
/// let path = ThemeConfig::FIELDS.nav.index(2).join("target");
/// assert_eq!(path.as_str(), "theme.nav[2].target");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path of the `i`-th element of the sequence at this path.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{i}]", self.0)))
    }

    /// Path of a child key (map key or struct field).
    pub fn join(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.{key}", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
