use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CarouselArgs, ContactArgs, DateArgs, TruncateArgs, ValidateConcertsArgs};

/// Command-line tools for the Chœur des Pays du Mont-Blanc website
///
/// Renders content dates in French, shortens summaries at word boundaries,
/// drives the home page image carousel interactively, checks contact
/// messages and validates the concert content file before publication.
#[derive(Parser)]
#[command(version, about, name = "choeur")]
pub struct Args {
    /// Path to the JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/choeur/config.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the choeur CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Format ISO dates the way the site displays them
    #[command(alias = "d")]
    Date(DateArgs),
    /// Shorten a text without cutting a word
    #[command(alias = "t")]
    Truncate(TruncateArgs),
    /// Run the home page carousel, controlled from stdin
    #[command(alias = "c")]
    Carousel(CarouselArgs),
    /// Check a contact message and print its mailto link
    Contact(ContactArgs),
    /// Validate the concert content file and its media
    #[command(alias = "v")]
    ValidateConcerts(ValidateConcertsArgs),
}
