#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stdout)]

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::codegen;
use crate::models::args::{AppCommands, Cli, CodegenAction};

use anyhow::Result;
use clap::Parser;
use countries_logger::{LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::builder()
        .name("xtask")
        .level(if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO })
        .init()?;

    match cli.command {
        AppCommands::Codegen { action } => match action {
            CodegenAction::Countries(args) => {
                let artifact = codegen::codegen_countries(&args)?;
                let verb = if args.check { "Verified" } else { "Generated" };
                println!(
                    "✅ {verb} country catalog: {} countries ({} enriched), {} capitals -> {}",
                    artifact.countries,
                    artifact.enriched,
                    artifact.capitals,
                    artifact.path.display()
                );
            },
        },
    }

    Ok(())
}
