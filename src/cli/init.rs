//! `init` command: write a commented starter configuration.

use anyhow::{Context, Result, bail};
use sitecfg::{CONFIG_FILE, ConfigFormat, SiteConfig, log};
use std::{
    fs,
    path::{Path, PathBuf},
};

use super::Cli;

/// Generate site.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        r#"# sitecfg configuration file (v{version})

# Site name shown in the navigation bar and browser tab.
title = "Docs"
# Tagline, any Unicode.
description = "Project documentation"

[markdown]
# Annotate code blocks with line numbers.
line_numbers = false

[theme]
# "auto" derives the sidebar from page headers, false disables it.
# An array of pages or a table of per-section arrays sets it explicitly.
sidebar = "auto"

# Navigation bar, rendered left to right.
# target is a site path ("/guide/") or an absolute URL.
[[theme.nav]]
label = "Home"
target = "/"

[[theme.nav]]
label = "Guide"
target = "/guide/"
"#,
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Starter document for `path`: the commented template, converted to JSON
/// when the path names a `.json` file.
fn config_template_for(path: &Path) -> Result<String> {
    let template = generate_config_template();
    match ConfigFormat::from_path(path) {
        ConfigFormat::Toml => Ok(template),
        ConfigFormat::Json => {
            let config = SiteConfig::from_str(&template, ConfigFormat::Toml)?;
            let mut json = config.serialize_to(ConfigFormat::Json)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write the template, or print it with `--dry`.
pub fn init_config(cli: &Cli, force: bool, dry: bool) -> Result<()> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    if dry {
        print!("{}", config_template_for(&path)?);
        return Ok(());
    }

    write_config(&path, force)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Write the template to `path`, refusing to clobber unless `force`.
fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(path, config_template_for(path)?)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}
