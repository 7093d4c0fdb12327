//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Documentation site configuration checker
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: search upward for site.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the configuration and report every violation
    #[command(visible_alias = "c")]
    Check,

    /// Print the loaded configuration
    #[command(visible_alias = "s")]
    Show {
        /// Print JSON instead of TOML
        #[arg(short, long)]
        json: bool,
    },

    /// Write a starter site.toml
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Print the template to stdout instead of writing it
        #[arg(short, long)]
        dry: bool,
    },
}
