//! Home page image carousel.
//!
//! The carousel cycles through a fixed list of slides. Autoplay starts after
//! a short delay and then advances on a recurring interval; manual
//! navigation always pauses it. A reduced-motion preference mounts it
//! paused, and playing it then schedules no timer.
//!
//! ```text
//!            toggle / set_autoplay(true)
//!   Paused ─────────────────────────────▶ Playing
//!     ▲                                     │  phase: ScheduledToStart ─(delay)─▶ Running ─(tick)─▶ index+1
//!     └──── toggle / previous / next ───────┘
//! ```
//!
//! - [`controller`]: the state machine, generic over its timer host
//! - [`host`]: the timer and media-preference facilities a host provides
//! - [`runtime`]: a tokio-backed host and the event loop driving a carousel

pub mod controller;
pub mod host;
pub mod runtime;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use controller::{AutoplayPhase, Carousel, CarouselCommand};
pub use host::{CarouselHost, TimerId};
pub use runtime::{run_carousel, TokioHost};

use crate::error::CarouselError;

/// Accessible label of the carousel region.
pub const REGION_LABEL: &str = "Carrousel d'images du chœur";
/// Accessible label of the previous-slide control.
pub const PREVIOUS_LABEL: &str = "Image précédente";
/// Accessible label of the next-slide control.
pub const NEXT_LABEL: &str = "Image suivante";

/// Accessible label of the indicator jumping to slide `index` (0-based).
pub fn indicator_label(index: usize) -> String {
    format!("Aller à l'image {}", index + 1)
}

/// A single carousel image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub source: String,
    pub alt_text: String,
}

impl Slide {
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// Ordered, non-empty, immutable list of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideList(Vec<Slide>);

impl SlideList {
    /// Wraps `slides`, rejecting an empty list.
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptySlideList);
        }
        Ok(Self(slides))
    }

    /// The photographs shown on the home page.
    pub fn home_page() -> Self {
        Self(
            HOME_PAGE_SLIDES
                .iter()
                .map(|(source, alt)| Slide::new(*source, *alt))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.0.iter()
    }
}

const HOME_PAGE_SLIDES: [(&str, &str); 6] = [
    (
        "/carrousel/CPMB-2023.jpg",
        "Chœur des Pays du Mont-Blanc en concert 2023",
    ),
    (
        "/carrousel/CPMB-novembre 2023.jpg",
        "Concert du CPMB en novembre 2023",
    ),
    ("/carrousel/CPMB2.jpg", "Chœur des Pays du Mont-Blanc"),
    ("/carrousel/Guillaume-Rault.jpg", "Guillaume Rault"),
    (
        "/carrousel/Guillaume-novembre-2023.jpg",
        "Guillaume en concert novembre 2023",
    ),
    (
        "/carrousel/Hautecombe-16.10.22.jpg",
        "Concert à Hautecombe le 16 octobre 2022",
    ),
];

/// Whether the carousel advances on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayState {
    Playing,
    Paused,
}

impl PlayState {
    /// Label of the play/pause control in this state.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            PlayState::Playing => "Mettre en pause",
            PlayState::Paused => "Reprendre",
        }
    }

    /// Live-region politeness: announcements are muted while autoplaying.
    pub fn live_politeness(&self) -> &'static str {
        match self {
            PlayState::Playing => "off",
            PlayState::Paused => "polite",
        }
    }
}

/// Observable carousel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub play_state: PlayState,
}

impl CarouselState {
    pub fn is_playing(&self) -> bool {
        self.play_state == PlayState::Playing
    }
}

/// Autoplay timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Start playing on mount
    pub autoplay: bool,
    /// Delay before the recurring interval starts
    pub start_delay_ms: u64,
    /// Time between two automatic advances
    pub interval_ms: u64,
}

impl CarouselConfig {
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            start_delay_ms: 1500,
            interval_ms: 6000,
        }
    }
}
