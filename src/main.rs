//! Folio - a portfolio manifest generator for designer asset trees.

mod cli;
mod config;
mod logger;
mod manifest;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { .. } => cli::init::new_project(&config),
        Commands::Build { .. } => cli::build::build_manifest(&config),
    }
}
