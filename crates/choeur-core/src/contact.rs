//! Contact form validation and mailto link derivation.
//!
//! The site has no mail backend: a valid contact message is turned into a
//! `mailto:` link that opens the visitor's own mail client.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Address receiving contact messages when none is configured.
pub const DEFAULT_RECIPIENT: &str = "bureau@choeurdespaysdumontblanc.fr";

/// Minimum length of a message, in characters, once trimmed.
pub const MIN_MESSAGE_LENGTH: usize = 10;

/// Fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// French label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Nom",
            ContactField::Email => "Adresse e-mail",
            ContactField::Subject => "Objet",
            ContactField::Message => "Message",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Per-field validation messages; an absent entry means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| self.get(*field).is_none())
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Drops the error of `field`, as happens when the visitor edits it.
    pub fn clear(&mut self, field: ContactField) {
        *self.slot_mut(field) = None;
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> + '_ {
        ContactField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|message| (field, message)))
    }

    fn slot(&self, field: ContactField) -> &Option<String> {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut Option<String> {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Loose address check: something, an `@`, something, a dot, something.
///
/// # Panics
///
/// Panics if the built-in address pattern fails to compile, which would be
/// a bug in this crate.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
    re.is_match(email)
}

impl ContactForm {
    /// Checks every field and returns the messages to display.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Le nom est requis".to_string());
        }

        if self.email.trim().is_empty() {
            errors.email = Some("L'adresse e-mail est requise".to_string());
        } else if !is_valid_email(&self.email) {
            errors.email = Some("Veuillez saisir une adresse e-mail valide".to_string());
        }

        if self.subject.trim().is_empty() {
            errors.subject = Some("L'objet est requis".to_string());
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.message = Some("Le message est requis".to_string());
        } else if message.chars().count() < MIN_MESSAGE_LENGTH {
            errors.message = Some(format!(
                "Le message doit contenir au moins {MIN_MESSAGE_LENGTH} caractères"
            ));
        }

        errors
    }

    /// Body of the e-mail prepared for the visitor's mail client.
    pub fn mail_body(&self) -> String {
        format!(
            "Nom: {}\nE-mail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// Builds the `mailto:` link for a valid form.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::InvalidInput` naming the first invalid field when
    /// the form does not validate.
    pub fn mailto_link(&self, recipient: &str) -> Result<String> {
        if let Some((field, message)) = self.validate().iter().next() {
            return Err(SiteError::invalid_input(field.as_str()).with_reason(message));
        }

        Ok(self.compose_mailto(recipient))
    }

    /// `mailto:` link for a form that already passed [`validate`](Self::validate).
    pub(crate) fn compose_mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.mail_body())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Marie Curie".to_string(),
            email: "marie@example.fr".to_string(),
            subject: "Inscription".to_string(),
            message: "Je souhaite rejoindre les ténors.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.name.as_deref(), Some("Le nom est requis"));
        assert_eq!(errors.email.as_deref(), Some("L'adresse e-mail est requise"));
        assert_eq!(errors.subject.as_deref(), Some("L'objet est requis"));
        assert_eq!(errors.message.as_deref(), Some("Le message est requis"));
        assert_eq!(errors.iter().count(), 4);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate().get(ContactField::Name), Some("Le nom est requis"));
    }

    #[test]
    fn test_invalid_email() {
        for email in ["marie", "marie@example", "ma rie@example.fr", "@example.fr"] {
            let form = ContactForm {
                email: email.to_string(),
                ..valid_form()
            };
            assert_eq!(
                form.validate().email.as_deref(),
                Some("Veuillez saisir une adresse e-mail valide"),
                "{email}"
            );
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("marie@example.fr"));
        assert!(is_valid_email("chef.de-choeur@pays.mont-blanc.fr"));
        assert!(!is_valid_email("marie@example.fr "));
        assert!(!is_valid_email("marie@@example.fr"));
    }

    #[test]
    fn test_short_message() {
        let form = ContactForm {
            message: "  Bonjour  ".to_string(),
            ..valid_form()
        };
        assert_eq!(
            form.validate().message.as_deref(),
            Some("Le message doit contenir au moins 10 caractères")
        );

        let form = ContactForm {
            message: "Répétition".to_string(),
            ..valid_form()
        };
        assert!(form.validate().message.is_none());
    }

    #[test]
    fn test_clear_removes_a_single_error() {
        let mut errors = ContactForm::default().validate();
        errors.clear(ContactField::Email);
        assert!(errors.email.is_none());
        assert!(errors.name.is_some());
    }

    #[test]
    fn test_mailto_link_encodes_subject_and_body() {
        let link = valid_form().mailto_link(DEFAULT_RECIPIENT).unwrap();
        assert!(link.starts_with("mailto:bureau@choeurdespaysdumontblanc.fr?subject=Inscription&body="));
        assert!(link.contains("Nom%3A%20Marie%20Curie%0AE-mail%3A%20marie%40example.fr%0A%0AMessage%3A%0A"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_mailto_link_rejects_invalid_form() {
        let form = ContactForm {
            subject: String::new(),
            ..valid_form()
        };
        let err = form.mailto_link(DEFAULT_RECIPIENT).unwrap_err();
        assert!(err.to_string().contains("'subject'"));
        assert!(err.to_string().contains("L'objet est requis"));
    }
}
