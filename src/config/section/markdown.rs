//! `[markdown]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [markdown]
//! line_numbers = true
//! ```

use serde::{Deserialize, Serialize};

/// Options handed to the generator's markdown renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Annotate rendered code blocks with line numbers.
    #[serde(alias = "lineNumbers")]
    pub line_numbers: bool,
}
