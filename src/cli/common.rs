//! Helpers shared by subcommands.

use anyhow::{Result, bail};
use sitecfg::{ConfigError, SiteConfig};

use super::Cli;

/// Load the config named by `--config`, or search upward for `site.toml`.
pub fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let result = match &cli.config {
        Some(path) => SiteConfig::load_from(path),
        None => SiteConfig::load(),
    };

    match result {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(path)) => bail!(
            "config file '{}' not found. Run 'sitecfg init' to create one.",
            path.display()
        ),
        Err(e) => Err(e.into()),
    }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(1, "link")` -> `"1 link"`
/// - `plural_count(5, "link")` -> `"5 links"`
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
