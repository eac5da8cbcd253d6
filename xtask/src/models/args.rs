//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the application.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the countries workspace")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Generate code artifacts
    Codegen {
        #[command(subcommand)]
        action: CodegenAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum CodegenAction {
    /// Regenerate the country catalog of the `countries` crate
    Countries(CountriesArgs),
}

/// Overrides for the country catalog generation. Unset values fall back to the
/// configuration file, then to the embedded defaults.
#[derive(Debug, Default, Args)]
pub struct CountriesArgs {
    /// Configuration file (defaults to `xtask/codegen.toml` when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// ISO-3166 JSON source (defaults to the embedded dataset)
    #[arg(long)]
    pub primary: Option<PathBuf>,

    /// Currency/capital JSON source (defaults to the embedded dataset)
    #[arg(long)]
    pub alternate: Option<PathBuf>,

    /// Template for the generated module (defaults to the embedded template)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Destination of the generated module
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Repository URL recorded in the generated header
    #[arg(long)]
    pub repo_url: Option<String>,

    /// Fail if the generated module is out of date instead of writing it
    #[arg(long)]
    pub check: bool,
}
