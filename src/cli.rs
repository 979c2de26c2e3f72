//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vela static site content hydrator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to site root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Template file path (relative to site root)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Config file name (default: vela.toml)
    #[arg(short = 'C', long, default_value = "vela.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared build arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Minify the html output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Override the content source (url or directory).
    ///
    /// Useful for previewing against local fixtures while the config
    /// points at the deployed CMS.
    #[arg(short, long)]
    pub source: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Init a template site
    Init {
        /// the name(path) of site directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Fetch CMS content and hydrate the template into the output directory
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}
