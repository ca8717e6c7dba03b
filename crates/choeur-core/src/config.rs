//! Site configuration and its builder.

use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    carousel::CarouselConfig,
    contact::DEFAULT_RECIPIENT,
    datetime::{DateFormatOptions, DEFAULT_TIME_ZONE},
    error::{Result, SiteError},
    text::Truncate,
};

/// Length of concert descriptions on listing cards.
pub const DEFAULT_SUMMARY_LENGTH: usize = 150;

/// Settings shared by every front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// IANA time zone dates are displayed in
    pub time_zone: String,
    /// Address contact messages are sent to
    pub contact_recipient: String,
    /// Maximum length of description summaries
    pub summary_length: usize,
    pub carousel: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            contact_recipient: DEFAULT_RECIPIENT.to_string(),
            summary_length: DEFAULT_SUMMARY_LENGTH,
            carousel: CarouselConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn date_options(&self) -> DateFormatOptions {
        DateFormatOptions::with_time_zone(self.time_zone.clone())
    }

    pub fn summary(&self) -> Truncate {
        Truncate::new(self.summary_length)
    }

    /// Checks values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = TimeZone::get(&self.time_zone) {
            return Err(SiteError::invalid_input("time_zone")
                .with_reason(format!("unknown time zone '{}': {e}", self.time_zone)));
        }
        if self.contact_recipient.trim().is_empty() {
            return Err(SiteError::invalid_input("contact_recipient").with_reason("must not be empty"));
        }
        if self.summary_length == 0 {
            return Err(SiteError::invalid_input("summary_length").with_reason("must be positive"));
        }
        if self.carousel.interval_ms == 0 {
            return Err(SiteError::invalid_input("carousel.interval_ms").with_reason("must be positive"));
        }
        Ok(())
    }
}

/// Builder for loading a [`SiteConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Sets a custom configuration file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/choeur/config.json` or `~/.config/choeur/config.json`
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads and validates the configuration.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::FileSystem` if the file cannot be read
    /// Returns `SiteError::Serialization` if it is not valid JSON
    /// Returns `SiteError::InvalidInput` if a value is out of range
    pub fn build(self) -> Result<SiteConfig> {
        let config = match self.config_path {
            Some(path) => Self::load(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::load(&path)?,
                _ => {
                    debug!("No configuration file, using defaults");
                    SiteConfig::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    fn load(path: &Path) -> Result<SiteConfig> {
        debug!("Loading configuration from {}", path.display());
        let raw = std::fs::read_to_string(path).map_err(|e| SiteError::file_system(path, e))?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Returns the existing configuration file found by the XDG Base
    /// Directory lookup, if any.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("choeur").find_config_file("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.time_zone, "Europe/Paris");
        assert_eq!(config.summary_length, 150);
        assert_eq!(config.carousel.interval_ms, 6000);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"time_zone": "America/Montreal", "carousel": {"autoplay": false}}"#)
                .unwrap();
        assert_eq!(config.time_zone, "America/Montreal");
        assert!(!config.carousel.autoplay);
        assert_eq!(config.carousel.start_delay_ms, 1500);
        assert_eq!(config.contact_recipient, DEFAULT_RECIPIENT);
    }

    #[test]
    fn test_validate_rejects_unknown_time_zone() {
        let config = SiteConfig {
            time_zone: "Europe/Atlantis".to_string(),
            ..SiteConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'time_zone'"));
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = SiteConfig::default();
        config.carousel.interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(SiteError::InvalidInput { field, .. }) if field == "carousel.interval_ms"
        ));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = ConfigBuilder::new()
            .with_config_path(Some(temp_dir.path().join("missing.json")))
            .build();
        assert!(matches!(result, Err(SiteError::FileSystem { .. })));
    }
}
