//! Structural validation of the concert content file.
//!
//! Concert pages are generated from a JSON array of records. This module
//! checks that array before publication: required fields, URL-friendly and
//! unique slugs, parseable dates, and media files present under the public
//! directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jiff::tz::TimeZone;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::datetime::parse_instant;
use crate::error::{Result, SiteError};

const REQUIRED_TEXT_FIELDS: [&str; 3] = ["title", "location", "media"];

/// A single problem found in the concert content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Path of the offending field, e.g. `concert[2].date[0]`
    pub field: String,
    pub message: String,
    /// Offending value, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub kind: IssueKind,
}

/// Whether an issue concerns the records themselves or their media files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Structure,
    MissingMedia,
}

impl ValidationIssue {
    fn structure(field: impl Into<String>, message: impl Into<String>, value: Option<&Value>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: value.cloned(),
            kind: IssueKind::Structure,
        }
    }
}

/// Outcome of validating a concert list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConcertValidation {
    /// Number of records in the list (0 when the top level is not an array)
    pub total: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ConcertValidation {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn structure_issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.kind == IssueKind::Structure)
    }

    pub fn missing_media(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.kind == IssueKind::MissingMedia)
    }
}

/// Whether `slug` only holds lowercase letters, digits and single hyphens.
///
/// # Panics
///
/// Panics if the built-in slug pattern fails to compile, which would be a
/// bug in this crate.
pub fn is_url_friendly_slug(slug: &str) -> bool {
    static SLUG_RE: OnceLock<Regex> = OnceLock::new();
    let re = SLUG_RE
        .get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));
    re.is_match(slug)
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Validates the shape of a single concert record.
pub fn validate_concert(concert: &Value, index: usize) -> Vec<ValidationIssue> {
    let path = format!("concert[{index}]");
    let Some(record) = concert.as_object() else {
        return vec![ValidationIssue::structure(path, "Concert must be an object", None)];
    };

    let mut issues = Vec::new();
    check_text_field(record, &path, "title", &mut issues);
    check_slug(record, &path, &mut issues);
    check_dates(record, &path, &mut issues);
    for field in &REQUIRED_TEXT_FIELDS[1..] {
        check_text_field(record, &path, field, &mut issues);
    }
    check_optional_fields(record, &path, &mut issues);
    issues
}

fn check_text_field(record: &Map<String, Value>, path: &str, field: &str, issues: &mut Vec<ValidationIssue>) {
    if non_empty_str(record.get(field)).is_none() {
        issues.push(ValidationIssue::structure(
            format!("{path}.{field}"),
            format!("{} is required and must be a non-empty string", capitalize(field)),
            record.get(field),
        ));
    }
}

fn check_slug(record: &Map<String, Value>, path: &str, issues: &mut Vec<ValidationIssue>) {
    let value = record.get("slug");
    match non_empty_str(value) {
        None => issues.push(ValidationIssue::structure(
            format!("{path}.slug"),
            "Slug is required and must be a non-empty string",
            value,
        )),
        Some(slug) if !is_url_friendly_slug(slug) => issues.push(ValidationIssue::structure(
            format!("{path}.slug"),
            "Slug must be URL-friendly (lowercase letters, numbers, and hyphens only)",
            value,
        )),
        Some(_) => {}
    }
}

fn check_dates(record: &Map<String, Value>, path: &str, issues: &mut Vec<ValidationIssue>) {
    let value = record.get("date");
    let dates = match value.and_then(Value::as_array) {
        Some(dates) if !dates.is_empty() => dates,
        _ => {
            issues.push(ValidationIssue::structure(
                format!("{path}.date"),
                "Date is required and must be a non-empty array",
                value,
            ));
            return;
        }
    };

    for (i, date) in dates.iter().enumerate() {
        let field = format!("{path}.date[{i}]");
        match non_empty_str(Some(date)) {
            None => issues.push(ValidationIssue::structure(
                field,
                "Each date must be a non-empty string",
                Some(date),
            )),
            Some(iso) if parse_instant(iso, &TimeZone::UTC).is_none() => {
                issues.push(ValidationIssue::structure(
                    field,
                    "Date must be a valid ISO date string",
                    Some(date),
                ))
            }
            Some(_) => {}
        }
    }
}

fn check_optional_fields(record: &Map<String, Value>, path: &str, issues: &mut Vec<ValidationIssue>) {
    if let Some(description) = record.get("description") {
        if !description.is_string() {
            issues.push(ValidationIssue::structure(
                format!("{path}.description"),
                "Description must be a string if provided",
                Some(description),
            ));
        }
    }

    if let Some(programme) = record.get("programme") {
        let Some(items) = programme.as_array() else {
            issues.push(ValidationIssue::structure(
                format!("{path}.programme"),
                "Programme must be an array if provided",
                Some(programme),
            ));
            return;
        };
        for (i, item) in items.iter().enumerate() {
            if non_empty_str(Some(item)).is_none() {
                issues.push(ValidationIssue::structure(
                    format!("{path}.programme[{i}]"),
                    "Each programme item must be a non-empty string",
                    Some(item),
                ));
            }
        }
    }
}

/// Validates every record and checks slugs are unique across the list.
pub fn validate_concerts(concerts: &Value) -> ConcertValidation {
    let Some(records) = concerts.as_array() else {
        return ConcertValidation {
            total: 0,
            issues: vec![ValidationIssue::structure(
                "concerts",
                "Concerts must be an array",
                None,
            )],
        };
    };

    let mut issues = Vec::new();
    let mut slugs = HashSet::new();
    for (index, concert) in records.iter().enumerate() {
        issues.extend(validate_concert(concert, index));

        if let Some(slug) = non_empty_str(concert.get("slug")) {
            if !slugs.insert(slug) {
                issues.push(ValidationIssue::structure(
                    format!("concert[{index}].slug"),
                    format!("Duplicate slug \"{slug}\" found"),
                    concert.get("slug"),
                ));
            }
        }
    }

    ConcertValidation {
        total: records.len(),
        issues,
    }
}

/// Checks that each record's media file exists under `public_dir`.
pub fn validate_media_assets(concerts: &[Value], public_dir: &Path) -> Vec<ValidationIssue> {
    concerts
        .iter()
        .enumerate()
        .filter_map(|(index, concert)| {
            let media = non_empty_str(concert.get("media"))?;
            let full_path = public_dir.join(media.trim_start_matches('/'));
            if full_path.exists() {
                return None;
            }
            Some(ValidationIssue {
                field: format!("concert[{index}].media"),
                message: format!("Media file not found: {}", full_path.display()),
                value: concert.get("media").cloned(),
                kind: IssueKind::MissingMedia,
            })
        })
        .collect()
}

/// Structural validation followed, when the structure is sound, by the
/// media file check.
pub fn validate_concerts_with_assets(concerts: &Value, public_dir: &Path) -> ConcertValidation {
    let mut validation = validate_concerts(concerts);
    if !validation.is_valid() {
        return validation;
    }
    if let Some(records) = concerts.as_array() {
        validation.issues = validate_media_assets(records, public_dir);
    }
    validation
}

/// Reads and validates a concert content file.
///
/// # Errors
///
/// Returns `SiteError::FileSystem` if the file cannot be read and
/// `SiteError::Serialization` if it is not JSON. Content problems are
/// reported in the returned validation, not as errors.
pub fn validate_concert_file(path: &Path, public_dir: Option<&Path>) -> Result<ConcertValidation> {
    let raw = std::fs::read_to_string(path).map_err(|e| SiteError::file_system(path, e))?;
    let concerts: Value = serde_json::from_str(&raw)?;
    let public_dir = match public_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_public_dir(path),
    };
    Ok(validate_concerts_with_assets(&concerts, &public_dir))
}

/// `public/` next to the content tree: `<root>/assets/contents/concerts.json`
/// maps to `<root>/public`.
fn default_public_dir(content_file: &Path) -> PathBuf {
    content_file
        .ancestors()
        .nth(3)
        .map(|root| root.join("public"))
        .unwrap_or_else(|| PathBuf::from("public"))
}
