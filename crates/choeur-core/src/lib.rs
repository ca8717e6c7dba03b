//! Core library for the Chœur des Pays du Mont-Blanc website.
//!
//! This crate holds the site's behavior independent of any front end: the
//! home page image carousel, French date rendering, text truncation for
//! summaries, contact form validation and concert content checks.
//!
//! # Display Architecture
//!
//! Domain types carry no presentation logic. The [`display`] module wraps
//! them in types implementing [`std::fmt::Display`] that produce markdown,
//! which the CLI renders in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use choeur_core::{
//!     datetime::{format_french_datetime, DateFormatOptions},
//!     text::truncate_at_word,
//! };
//!
//! let options = DateFormatOptions::default();
//! assert_eq!(
//!     format_french_datetime("2024-12-13T20:00:00+01:00", &options),
//!     "13 décembre 2024 à 20h00"
//! );
//! assert_eq!(
//!     truncate_at_word("Bonjour le monde entier", 10, "..."),
//!     "Bonjour le..."
//! );
//! ```
//!
//! Driving a carousel requires a tokio runtime for its timers:
//!
//! ```rust
//! use choeur_core::carousel::{
//!     run_carousel, Carousel, CarouselCommand, CarouselConfig, SlideList, TokioHost,
//! };
//! use tokio::sync::mpsc;
//!
//! # async fn example() {
//! let (host, fired) = TokioHost::new(false);
//! let carousel = Carousel::new(SlideList::home_page(), CarouselConfig::default(), host);
//! let (commands, receiver) = mpsc::channel(8);
//!
//! commands.send(CarouselCommand::Next).await.unwrap();
//! commands.send(CarouselCommand::Quit).await.unwrap();
//!
//! let state = run_carousel(carousel, fired, receiver, |_| {}).await;
//! assert_eq!(state.current_index, 1);
//! # }
//! ```

pub mod carousel;
pub mod concerts;
pub mod config;
pub mod contact;
pub mod datetime;
pub mod display;
pub mod error;
pub mod params;
pub mod text;

// Re-export commonly used types
pub use carousel::{Carousel, CarouselCommand, CarouselConfig, PlayState, Slide, SlideList};
pub use concerts::{validate_concert_file, ConcertValidation};
pub use config::{ConfigBuilder, SiteConfig};
pub use contact::{ContactForm, FormErrors};
pub use datetime::{format_french_datetime, DateFormatOptions};
pub use display::{CarouselView, ContactOutcome, FrenchDateTime, OperationStatus, ValidationReport};
pub use error::{CarouselError, Result, SiteError};
pub use params::{FormatDates, PlayCarousel, TruncateText, ValidateConcerts};
pub use text::{truncate_at_word, Truncate};
