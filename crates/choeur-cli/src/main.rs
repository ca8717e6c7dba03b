//! choeur CLI Application
//!
//! Command-line interface for the Chœur des Pays du Mont-Blanc website
//! tooling.

mod args;
mod cli;
mod input;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use choeur_core::ConfigBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        no_color,
        command,
    } = Args::parse();

    let config = ConfigBuilder::new()
        .with_config_path(config_file)
        .build()
        .context("Failed to load configuration")?;

    let cli = Cli::new(config, TerminalRenderer::new(!no_color));

    info!("choeur started");

    match command {
        Date(args) => cli.format_dates(&args.into()),
        Truncate(args) => cli.truncate(&args.into()),
        Carousel(args) => cli.carousel(&args.into()).await,
        Contact(args) => cli.contact(&args.into()),
        ValidateConcerts(args) => cli.validate_concerts(&args.into()),
    }
}
