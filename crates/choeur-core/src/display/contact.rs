//! Contact form outcome display.

use std::fmt;

use crate::contact::{ContactForm, FormErrors};

/// Result of checking a contact form: either the prepared `mailto:` link or
/// the list of fields to correct.
pub enum ContactOutcome {
    Ready { recipient: String, link: String },
    Invalid(FormErrors),
}

impl ContactOutcome {
    /// Validates `form` once and prepares the link when it passes.
    pub fn check(form: &ContactForm, recipient: &str) -> Self {
        let errors = form.validate();
        if !errors.is_empty() {
            return Self::Invalid(errors);
        }
        Self::Ready {
            recipient: recipient.to_string(),
            link: form.compose_mailto(recipient),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

impl fmt::Display for ContactOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready { recipient, link } => {
                writeln!(f, "# Message prêt")?;
                writeln!(f)?;
                writeln!(f, "Votre messagerie va s'ouvrir pour écrire à {recipient}.")?;
                writeln!(f)?;
                writeln!(f, "{link}")
            }
            Self::Invalid(errors) => {
                writeln!(f, "# Formulaire incomplet")?;
                writeln!(f)?;
                for (field, message) in errors.iter() {
                    writeln!(f, "- **{}**: {message}", field.label())?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::DEFAULT_RECIPIENT;

    #[test]
    fn test_ready_outcome() {
        let form = ContactForm {
            name: "Jean".to_string(),
            email: "jean@example.fr".to_string(),
            subject: "Concert".to_string(),
            message: "Quand aura lieu le prochain concert ?".to_string(),
        };
        let outcome = ContactOutcome::check(&form, DEFAULT_RECIPIENT);
        assert!(outcome.is_ready());

        let output = outcome.to_string();
        assert!(output.contains("# Message prêt"));
        assert!(output.contains("mailto:bureau@choeurdespaysdumontblanc.fr?subject=Concert&body="));
    }

    #[test]
    fn test_invalid_outcome_lists_fields_in_order() {
        let form = ContactForm {
            name: "Jean".to_string(),
            email: "jean".to_string(),
            subject: String::new(),
            message: "Bonjour à tous, je chante faux.".to_string(),
        };
        let outcome = ContactOutcome::check(&form, DEFAULT_RECIPIENT);
        assert!(!outcome.is_ready());

        let output = outcome.to_string();
        let email = output
            .find("- **Adresse e-mail**: Veuillez saisir une adresse e-mail valide")
            .unwrap();
        let subject = output.find("- **Objet**: L'objet est requis").unwrap();
        assert!(email < subject);
        assert!(!output.contains("**Nom**"));
    }

    #[test]
    fn test_outcome_matches_form_validation() {
        let valid = ContactForm {
            name: "Jean".to_string(),
            email: "jean@example.fr".to_string(),
            subject: "Concert".to_string(),
            message: "Quand aura lieu le prochain concert ?".to_string(),
        };
        match ContactOutcome::check(&valid, DEFAULT_RECIPIENT) {
            ContactOutcome::Ready { link, .. } => {
                assert_eq!(Some(link), valid.mailto_link(DEFAULT_RECIPIENT).ok());
            }
            ContactOutcome::Invalid(_) => panic!("valid form reported as invalid"),
        }

        let too_short = ContactForm {
            message: "Bonjour".to_string(),
            ..valid
        };
        let outcome = ContactOutcome::check(&too_short, DEFAULT_RECIPIENT);
        assert!(too_short.mailto_link(DEFAULT_RECIPIENT).is_err());
        assert!(!outcome.is_ready());
        assert!(outcome
            .to_string()
            .contains("- **Message**: Le message doit contenir au moins 10 caractères"));
    }
}
