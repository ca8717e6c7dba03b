//! Parameter structures for site operations.
//!
//! These structures carry the inputs of each operation without any interface
//! framework attached. The CLI defines its own `clap` argument structs and
//! converts them into these with `From`, so the core stays free of CLI
//! derives:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Operation    │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│  (core module)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Optional fields left unset fall back to the loaded [`SiteConfig`].
//!
//! [`SiteConfig`]: crate::config::SiteConfig

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    carousel::CarouselConfig,
    datetime::DateFormatOptions,
    text::Truncate,
};

/// Parameters for rendering content dates in French.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatDates {
    /// ISO-8601 dates or date-times
    pub dates: Vec<String>,
    /// IANA time zone overriding the configured one
    pub time_zone: Option<String>,
    /// Render all dates on one line, as on a concert page
    #[serde(default)]
    pub join: bool,
}

impl FormatDates {
    pub fn options(&self, configured: &DateFormatOptions) -> DateFormatOptions {
        match &self.time_zone {
            Some(tz) => DateFormatOptions::with_time_zone(tz.clone()),
            None => configured.clone(),
        }
    }
}

/// Parameters for shortening a text at a word boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TruncateText {
    pub text: String,
    pub max_length: Option<usize>,
    pub ellipsis: Option<String>,
}

impl TruncateText {
    /// Configured truncation with these overrides applied.
    pub fn truncator(&self, configured: &Truncate) -> Truncate {
        Truncate::new(self.max_length.unwrap_or(configured.max_length))
            .with_ellipsis(self.ellipsis.as_deref().unwrap_or(&configured.ellipsis))
    }
}

/// Parameters for running the interactive carousel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayCarousel {
    /// Start paused instead of auto-advancing
    #[serde(default)]
    pub paused: bool,
    /// Act as if the user asked for reduced motion
    #[serde(default)]
    pub reduced_motion: bool,
    pub interval_ms: Option<u64>,
    pub start_delay_ms: Option<u64>,
}

impl PlayCarousel {
    /// Configured carousel settings with these overrides applied.
    pub fn carousel_config(&self, configured: &CarouselConfig) -> CarouselConfig {
        CarouselConfig {
            autoplay: configured.autoplay && !self.paused,
            start_delay_ms: self.start_delay_ms.unwrap_or(configured.start_delay_ms),
            interval_ms: self.interval_ms.unwrap_or(configured.interval_ms),
        }
    }
}

/// Parameters for validating the concert content file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateConcerts {
    pub file: PathBuf,
    /// Directory holding media files; derived from `file` when unset
    pub public_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dates_time_zone_override() {
        let configured = DateFormatOptions::default();
        let params = FormatDates {
            time_zone: Some("Asia/Tokyo".to_string()),
            ..FormatDates::default()
        };
        assert_eq!(params.options(&configured).time_zone, "Asia/Tokyo");
        assert_eq!(
            FormatDates::default().options(&configured).time_zone,
            "Europe/Paris"
        );
    }

    #[test]
    fn test_truncate_text_overrides() {
        let params = TruncateText {
            text: "supercalifragilistic".to_string(),
            max_length: Some(10),
            ellipsis: None,
        };
        let truncator = params.truncator(&Truncate::default());
        assert_eq!(truncator.apply(&params.text), "supercalif...");

        let params = TruncateText {
            ellipsis: Some("…".to_string()),
            ..TruncateText::default()
        };
        let truncator = params.truncator(&Truncate::new(150));
        assert_eq!(truncator.max_length, 150);
        assert_eq!(truncator.ellipsis, "…");
    }

    #[test]
    fn test_play_carousel_overrides() {
        let configured = CarouselConfig::default();
        let params = PlayCarousel {
            paused: true,
            interval_ms: Some(2000),
            ..PlayCarousel::default()
        };
        let config = params.carousel_config(&configured);
        assert!(!config.autoplay);
        assert_eq!(config.interval_ms, 2000);
        assert_eq!(config.start_delay_ms, 1500);
    }
}
