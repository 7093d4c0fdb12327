//! `show` command: print the loaded configuration.

use anyhow::Result;
use sitecfg::{ConfigFormat, SiteConfig};

use super::Cli;
use super::common::load_config;

/// Print the normalized configuration as TOML, or JSON with `--json`.
pub fn show_config(cli: &Cli, json: bool) -> Result<()> {
    let config = load_config(cli)?;
    print!("{}", render(&config, json)?);
    Ok(())
}

fn render(config: &SiteConfig, json: bool) -> Result<String> {
    let format = if json {
        ConfigFormat::Json
    } else {
        ConfigFormat::Toml
    };
    let mut out = config.serialize_to(format)?;
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
