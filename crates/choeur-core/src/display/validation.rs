//! Concert validation report display.

use std::fmt;

use crate::concerts::ConcertValidation;

/// Markdown report of a concert validation run.
///
/// Structure problems come first with their offending values, then media
/// files missing from the public directory. A clean run prints a one-line
/// summary.
pub struct ValidationReport<'a> {
    validation: &'a ConcertValidation,
}

impl<'a> ValidationReport<'a> {
    pub fn new(validation: &'a ConcertValidation) -> Self {
        Self { validation }
    }
}

impl<'a> fmt::Display for ValidationReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.validation.is_valid() {
            return writeln!(
                f,
                "All {} concerts are valid and their media files exist.",
                self.validation.total
            );
        }

        let structure: Vec<_> = self.validation.structure_issues().collect();
        if !structure.is_empty() {
            writeln!(f, "# Concerts data validation failed")?;
            writeln!(f)?;
            for issue in &structure {
                writeln!(f, "- **{}**: {}", issue.field, issue.message)?;
                if let Some(value) = &issue.value {
                    writeln!(f, "  Value: `{value}`")?;
                }
            }
            writeln!(f)?;
        }

        let missing: Vec<_> = self.validation.missing_media().collect();
        if !missing.is_empty() {
            writeln!(f, "# Missing media files")?;
            writeln!(f)?;
            for issue in &missing {
                writeln!(f, "- **{}**: {}", issue.field, issue.message)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Total errors: {}", self.validation.issues.len())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::concerts::{IssueKind, ValidationIssue};

    #[test]
    fn test_valid_report() {
        let validation = ConcertValidation {
            total: 3,
            issues: vec![],
        };
        assert_eq!(
            ValidationReport::new(&validation).to_string(),
            "All 3 concerts are valid and their media files exist.\n"
        );
    }

    #[test]
    fn test_report_groups_issues() {
        let validation = ConcertValidation {
            total: 2,
            issues: vec![
                ValidationIssue {
                    field: "concert[0].slug".to_string(),
                    message: "Slug must be URL-friendly".to_string(),
                    value: Some(json!("Noël 2024")),
                    kind: IssueKind::Structure,
                },
                ValidationIssue {
                    field: "concert[1].media".to_string(),
                    message: "Media file not found: public/concerts/ete.jpg".to_string(),
                    value: Some(json!("/concerts/ete.jpg")),
                    kind: IssueKind::MissingMedia,
                },
            ],
        };

        let output = ValidationReport::new(&validation).to_string();
        assert!(output.contains("# Concerts data validation failed"));
        assert!(output.contains("- **concert[0].slug**: Slug must be URL-friendly\n  Value: `\"Noël 2024\"`"));
        assert!(output.contains("# Missing media files"));
        assert!(output.contains("- **concert[1].media**: Media file not found"));
        assert!(output.ends_with("Total errors: 2\n"));
    }
}
