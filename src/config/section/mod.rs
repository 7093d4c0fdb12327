//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module     | TOML Section   | Purpose                           |
//! |------------|----------------|-----------------------------------|
//! | `markdown` | `[markdown]`   | Markdown renderer options         |
//! | `theme`    | `[theme]`      | Navigation bar and sidebar        |

mod markdown;
pub mod theme;

pub use markdown::MarkdownOptions;
pub use theme::{NavEntry, SidebarGroup, SidebarItem, SidebarMode, ThemeConfig};
