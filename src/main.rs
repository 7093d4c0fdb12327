//! sitecfg - check, print and scaffold documentation site configuration.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    sitecfg::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Check => cli::check::check_config(&cli),
        Commands::Show { json } => cli::show::show_config(&cli, *json),
        Commands::Init { force, dry } => cli::init::init_config(&cli, *force, *dry),
    }
}
