//! French date formatting for concert and press dates.
//!
//! Content files carry dates either as full timestamps with an offset
//! (`2024-12-13T20:00:00+01:00`) or as bare calendar dates (`2024-12-13`).
//! [`format_french_datetime`] renders both the way the site displays them:
//!
//! - `13 décembre 2024 à 20h00` when the input carries a time of day
//! - `13 décembre 2024` for a bare date
//!
//! Formatting is total: empty or unparsable input yields an empty string.

use jiff::{civil, tz::TimeZone, Timestamp, Zoned};
use log::warn;

/// Time zone used when none is configured.
pub const DEFAULT_TIME_ZONE: &str = "Europe/Paris";

/// Options controlling how dates are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatOptions {
    /// IANA time zone name the instant is projected into before formatting
    pub time_zone: String,
}

impl DateFormatOptions {
    /// Options rendering in the given IANA time zone.
    pub fn with_time_zone(time_zone: impl Into<String>) -> Self {
        Self {
            time_zone: time_zone.into(),
        }
    }
}

impl Default for DateFormatOptions {
    fn default() -> Self {
        Self::with_time_zone(DEFAULT_TIME_ZONE)
    }
}

/// Whether the literal input carries a time of day.
///
/// Only the presence of the `T` separator counts, so a bare date never gets a
/// time suffix even though parsing anchors it at midnight.
pub fn has_time_component(input: &str) -> bool {
    input.contains('T')
}

/// Parses an ISO-8601 date or timestamp and projects it into `tz`.
///
/// - input with an offset (or `Z`) denotes that exact instant
/// - date-time input without an offset is civil time in `tz`
/// - a bare date is midnight UTC of that day
///
/// Returns `None` when the input does not denote a valid point in time.
pub fn parse_instant(input: &str, tz: &TimeZone) -> Option<Zoned> {
    let input = input.trim();
    if let Ok(timestamp) = input.parse::<Timestamp>() {
        return Some(timestamp.to_zoned(tz.clone()));
    }

    if has_time_component(input) {
        let datetime: civil::DateTime = input.parse().ok()?;
        return datetime.to_zoned(tz.clone()).ok();
    }

    let date: civil::Date = input.parse().ok()?;
    let midnight_utc = date.to_zoned(TimeZone::UTC).ok()?;
    Some(midnight_utc.timestamp().to_zoned(tz.clone()))
}

/// Formats an ISO date string as a French date, with the time of day when the
/// input carries one.
///
/// # Examples
///
/// ```rust
/// use choeur_core::datetime::{format_french_datetime, DateFormatOptions};
///
/// let options = DateFormatOptions::default();
/// assert_eq!(
///     format_french_datetime("2024-11-05T08:05:00+01:00", &options),
///     "5 novembre 2024 à 8h05"
/// );
/// assert_eq!(format_french_datetime("2024-12-13", &options), "13 décembre 2024");
/// assert_eq!(format_french_datetime("not-a-date", &options), "");
/// ```
pub fn format_french_datetime(iso: &str, options: &DateFormatOptions) -> String {
    if iso.is_empty() {
        return String::new();
    }

    let tz = match TimeZone::get(&options.time_zone) {
        Ok(tz) => tz,
        Err(e) => {
            warn!("Unknown time zone '{}': {e}", options.time_zone);
            return String::new();
        }
    };

    let Some(zoned) = parse_instant(iso, &tz) else {
        return String::new();
    };

    let date = format!(
        "{} {} {}",
        zoned.day(),
        french_month(zoned.month()),
        zoned.year()
    );

    if has_time_component(iso) {
        format!("{date} à {}h{:02}", zoned.hour(), zoned.minute())
    } else {
        date
    }
}

/// Formats every date of a list and joins them with `", "`.
///
/// An entry that cannot be formatted keeps its slot as an empty string, so
/// the output always has one slot per input date.
///
/// ```rust
/// use choeur_core::datetime::{format_french_date_list, DateFormatOptions};
///
/// let dates = ["2024-12-13", "hier", "2024-12-15"];
/// assert_eq!(
///     format_french_date_list(&dates, &DateFormatOptions::default()),
///     "13 décembre 2024, , 15 décembre 2024"
/// );
/// ```
pub fn format_french_date_list<S: AsRef<str>>(dates: &[S], options: &DateFormatOptions) -> String {
    dates
        .iter()
        .map(|d| format_french_datetime(d.as_ref(), options))
        .collect::<Vec<_>>()
        .join(", ")
}

fn french_month(month: i8) -> &'static str {
    match month {
        1 => "janvier",
        2 => "février",
        3 => "mars",
        4 => "avril",
        5 => "mai",
        6 => "juin",
        7 => "juillet",
        8 => "août",
        9 => "septembre",
        10 => "octobre",
        11 => "novembre",
        _ => "décembre",
    }
}
