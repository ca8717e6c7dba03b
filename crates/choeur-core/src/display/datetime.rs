//! DateTime display utilities.
//!
//! This module provides a wrapper type for rendering content dates in French
//! through the `Display` trait, so they can be interpolated directly into
//! markdown output.

use std::fmt;

use crate::datetime::{format_french_datetime, DateFormatOptions};

/// A wrapper around an ISO date string that renders it in French via the
/// `Display` trait.
///
/// # Format
///
/// - `13 décembre 2024 à 20h00` when the input carries a time of day
/// - `13 décembre 2024` for a bare date
/// - nothing at all when the input cannot be parsed
///
/// # Examples
///
/// ```rust
/// use choeur_core::{datetime::DateFormatOptions, display::FrenchDateTime};
///
/// let options = DateFormatOptions::default();
/// let date = FrenchDateTime::new("2024-06-15T20:30:00+02:00", &options);
/// assert_eq!(date.to_string(), "15 juin 2024 à 20h30");
/// ```
pub struct FrenchDateTime<'a> {
    input: &'a str,
    options: &'a DateFormatOptions,
}

impl<'a> FrenchDateTime<'a> {
    pub fn new(input: &'a str, options: &'a DateFormatOptions) -> Self {
        Self { input, options }
    }
}

impl<'a> fmt::Display for FrenchDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_french_datetime(self.input, self.options))
    }
}
