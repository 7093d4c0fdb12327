//! `check` command: load, validate and report.

use anyhow::Result;
use sitecfg::{ConfigError, SidebarMode, SiteConfig, debug, log};

use super::Cli;
use super::common::{load_config, plural_count};

/// Validate the configuration, printing warnings and the full violation list.
pub fn check_config(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    debug!("check"; "title: {}", config.title);
    debug!("check"; "line numbers: {}", config.line_numbers());
    for (i, entry) in config.theme.nav.iter().enumerate() {
        debug!("check"; "nav[{}]: {} -> {}", i, entry.label, entry.target);
    }

    let diag = config.diagnose();
    diag.print_warnings();
    diag.into_result().map_err(ConfigError::Diagnostics)?;

    log!("check"; "{}", summary(&config));
    Ok(())
}

/// One-line description of a valid configuration.
fn summary(config: &SiteConfig) -> String {
    format!(
        "\"{}\" is valid: {}, sidebar {}",
        config.title,
        plural_count(config.theme.nav.len(), "nav link"),
        describe_sidebar(&config.theme.sidebar)
    )
}

fn describe_sidebar(sidebar: &SidebarMode) -> String {
    match sidebar {
        SidebarMode::Disabled => "disabled".into(),
        SidebarMode::Auto => "auto".into(),
        SidebarMode::Items(items) => format!("explicit ({})", plural_count(items.len(), "item")),
        SidebarMode::Routes(routes) => {
            format!("per section ({})", plural_count(routes.len(), "section"))
        }
        SidebarMode::Enabled => "unrecognized (true)".into(),
        SidebarMode::Unrecognized(keyword) => format!("unrecognized ({keyword})"),
    }
}
