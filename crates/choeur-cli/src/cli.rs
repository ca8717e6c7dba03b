//! Command-line argument wrappers and command handlers
//!
//! Each command has a clap argument struct converted into its core
//! parameter type with `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Core Operation
//! ```
//!
//! The core parameter types stay free of clap derives; help text, flags and
//! aliases live here.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use choeur_core::{
    carousel::{run_carousel, Carousel, SlideList, TokioHost},
    datetime::format_french_date_list,
    display::{CarouselView, ContactOutcome, FrenchDateTime, OperationStatus, ValidationReport},
    params::{FormatDates, PlayCarousel, TruncateText, ValidateConcerts},
    validate_concert_file, ContactForm, SiteConfig,
};
use clap::Args;
use log::{info, warn};
use tokio::sync::mpsc;

use crate::{input::spawn_stdin_reader, renderer::TerminalRenderer};

/// Format ISO dates in French
///
/// Timestamps with an offset are shown in the configured time zone with
/// their time of day; bare dates are shown without one.
#[derive(Args)]
pub struct DateArgs {
    /// ISO-8601 dates such as 2024-12-13 or 2024-12-13T20:00:00+01:00
    #[arg(required = true)]
    pub dates: Vec<String>,
    /// IANA time zone to display the dates in
    #[arg(long, help = "IANA time zone overriding the configured one")]
    pub time_zone: Option<String>,
    /// Print every date on one line, separated by commas
    #[arg(short, long)]
    pub join: bool,
}

impl From<DateArgs> for FormatDates {
    fn from(val: DateArgs) -> Self {
        FormatDates {
            dates: val.dates,
            time_zone: val.time_zone,
            join: val.join,
        }
    }
}

/// Shorten a text at a word boundary
#[derive(Args)]
pub struct TruncateArgs {
    /// Text to shorten; whitespace runs are collapsed first
    pub text: String,
    /// Maximum length in characters
    #[arg(short, long, help = "Maximum length in characters (defaults to the configured summary length)")]
    pub max_length: Option<usize>,
    /// Marker appended when text was removed
    #[arg(short, long)]
    pub ellipsis: Option<String>,
}

impl From<TruncateArgs> for TruncateText {
    fn from(val: TruncateArgs) -> Self {
        TruncateText {
            text: val.text,
            max_length: val.max_length,
            ellipsis: val.ellipsis,
        }
    }
}

/// Run the home page carousel
///
/// Reads one command per line from stdin: `n` next, `p` previous, space or
/// `t` to toggle autoplay, a slide number to jump to it, `q` to quit.
#[derive(Args)]
pub struct CarouselArgs {
    /// Start paused
    #[arg(long)]
    pub paused: bool,
    /// Behave as if reduced motion is preferred (slides never advance on their own)
    #[arg(long)]
    pub reduced_motion: bool,
    /// Time between automatic advances, in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,
    /// Delay before autoplay starts, in milliseconds
    #[arg(long)]
    pub start_delay_ms: Option<u64>,
}

impl From<CarouselArgs> for PlayCarousel {
    fn from(val: CarouselArgs) -> Self {
        PlayCarousel {
            paused: val.paused,
            reduced_motion: val.reduced_motion,
            interval_ms: val.interval_ms,
            start_delay_ms: val.start_delay_ms,
        }
    }
}

/// Check a contact message
#[derive(Args)]
pub struct ContactArgs {
    /// Sender's name
    #[arg(long, default_value = "")]
    pub name: String,
    /// Sender's e-mail address
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub subject: String,
    /// Message body, at least 10 characters
    #[arg(long, default_value = "")]
    pub message: String,
}

impl From<ContactArgs> for ContactForm {
    fn from(val: ContactArgs) -> Self {
        ContactForm {
            name: val.name,
            email: val.email,
            subject: val.subject,
            message: val.message,
        }
    }
}

/// Validate the concert content file
#[derive(Args)]
pub struct ValidateConcertsArgs {
    /// Path to concerts.json
    pub file: PathBuf,
    /// Directory media paths are resolved against. Defaults to the `public`
    /// directory of the site root three levels above the file
    #[arg(long)]
    pub public_dir: Option<PathBuf>,
}

impl From<ValidateConcertsArgs> for ValidateConcerts {
    fn from(val: ValidateConcertsArgs) -> Self {
        ValidateConcerts {
            file: val.file,
            public_dir: val.public_dir,
        }
    }
}

/// Runs commands against the loaded configuration and renders their output.
pub struct Cli {
    config: SiteConfig,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config: SiteConfig, renderer: TerminalRenderer) -> Self {
        Self { config, renderer }
    }

    pub fn format_dates(&self, params: &FormatDates) -> Result<()> {
        let options = params.options(&self.config.date_options());
        if params.join {
            let line = format_french_date_list(&params.dates, &options);
            return self.renderer.render(&format!("{line}\n"));
        }

        let mut output = String::new();
        for date in &params.dates {
            let formatted = FrenchDateTime::new(date, &options).to_string();
            if formatted.is_empty() {
                warn!("Could not format {date:?}");
            }
            output.push_str(&formatted);
            output.push('\n');
        }
        self.renderer.render(&output)
    }

    pub fn truncate(&self, params: &TruncateText) -> Result<()> {
        let truncator = params.truncator(&self.config.summary());
        self.renderer.render(&format!("{}\n", truncator.apply(&params.text)))
    }

    pub async fn carousel(&self, params: &PlayCarousel) -> Result<()> {
        let config = params.carousel_config(&self.config.carousel);
        let (host, fired) = TokioHost::new(params.reduced_motion);
        let carousel = Carousel::new(SlideList::home_page(), config, host);

        let (commands, receiver) = mpsc::channel(16);
        let reader = spawn_stdin_reader(commands);

        let state = run_carousel(carousel, fired, receiver, |carousel| {
            if let Err(e) = self.renderer.render(&CarouselView::new(carousel).to_string()) {
                warn!("Failed to render carousel: {e}");
            }
        })
        .await;
        reader.abort();

        info!("Carousel closed on slide {}", state.current_index + 1);
        Ok(())
    }

    /// Prints the mailto link, or the field errors and fails.
    pub fn contact(&self, form: &ContactForm) -> Result<()> {
        let outcome = ContactOutcome::check(form, &self.config.contact_recipient);
        self.renderer.render(&outcome.to_string())?;
        if !outcome.is_ready() {
            bail!("Contact message is incomplete");
        }
        Ok(())
    }

    /// Prints the validation report and fails when the content has issues.
    pub fn validate_concerts(&self, params: &ValidateConcerts) -> Result<()> {
        let validation = validate_concert_file(&params.file, params.public_dir.as_deref())
            .with_context(|| format!("Failed to validate {}", params.file.display()))?;

        self.renderer
            .render(&ValidationReport::new(&validation).to_string())?;
        if validation.is_valid() {
            self.renderer
                .render(&OperationStatus::success("All concerts data is valid").to_string())
        } else {
            self.renderer
                .render(&OperationStatus::failure("Concerts data validation failed").to_string())?;
            bail!("{} problem(s) found in {}", validation.issues.len(), params.file.display());
        }
    }
}
