//! Contact form validation.
//!
//! Every field is checked on each submit and all failures are reported
//! together. A valid submit is only simulated: the form clears itself and
//! shows a short-lived confirmation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::constants::{CONFIRMATION_MESSAGE, STATUS_CLEAR_DELAY};
use crate::timer::Timer;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FieldName {
    Name,
    Email,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Email, FieldName::Message];

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Message => "Message",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Enter a valid email.")]
    EmailInvalid,
    #[error("Message is required.")]
    MessageRequired,
}

impl FieldError {
    pub fn field(self) -> FieldName {
        match self {
            FieldError::NameRequired => FieldName::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => FieldName::Email,
            FieldError::MessageRequired => FieldName::Message,
        }
    }
}

/// Checks all three fields in one pass.
pub fn validate(name: &str, email: &str, message: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(FieldError::NameRequired);
    }
    if email.trim().is_empty() {
        errors.push(FieldError::EmailRequired);
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.push(FieldError::EmailInvalid);
    }
    if message.trim().is_empty() {
        errors.push(FieldError::MessageRequired);
    }

    errors
}

#[derive(Debug, Clone, Default)]
pub struct Field {
    pub value: String,
    error: Option<FieldError>,
}

impl Field {
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<FieldError> {
        self.error
    }

    /// Inline message slot; empty when the field is valid.
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    name: Field,
    email: Field,
    message: Field,
    status: String,
    status_timer: Timer,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(STATUS_CLEAR_DELAY)
    }
}

impl ContactForm {
    pub fn new(status_clear_delay: f32) -> Self {
        Self {
            name: Field::default(),
            email: Field::default(),
            message: Field::default(),
            status: String::new(),
            status_timer: Timer::once(status_clear_delay),
        }
    }

    pub fn field(&self, name: FieldName) -> &Field {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut Field {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        }
    }

    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).value = value.into();
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn submit(&mut self) -> Result<(), Vec<FieldError>> {
        for name in FieldName::ALL {
            self.field_mut(name).error = None;
        }

        let errors = validate(&self.name.value, &self.email.value, &self.message.value);
        if errors.is_empty() {
            for name in FieldName::ALL {
                self.field_mut(name).value.clear();
            }
            self.status = CONFIRMATION_MESSAGE.to_string();
            self.status_timer.reset();
            debug!("contact form accepted");
            return Ok(());
        }

        for error in &errors {
            self.field_mut(error.field()).error = Some(*error);
        }
        self.status.clear();
        self.status_timer.stop();
        debug!(count = errors.len(), "contact form rejected");
        Err(errors)
    }

    /// Clears the confirmation once its delay has elapsed.
    pub fn update(&mut self, dt: f32) {
        if self.status_timer.update(dt) > 0 {
            self.status.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set_value(FieldName::Name, name);
        form.set_value(FieldName::Email, email);
        form.set_value(FieldName::Message, message);
        form
    }

    #[test]
    fn test_all_empty_marks_every_field() {
        let mut form = ContactForm::default();
        let errors = form.submit().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::NameRequired,
                FieldError::EmailRequired,
                FieldError::MessageRequired
            ]
        );
        for name in FieldName::ALL {
            assert!(form.field(name).is_invalid());
        }
        assert_eq!(form.field(FieldName::Name).error_message(), "Name is required.");
        assert_eq!(form.field(FieldName::Email).error_message(), "Email is required.");
        assert_eq!(form.field(FieldName::Message).error_message(), "Message is required.");
        assert_eq!(form.status(), "");
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        assert_eq!(
            validate("  ", "a@b.co", "\n\t"),
            vec![FieldError::NameRequired, FieldError::MessageRequired]
        );
    }

    #[test]
    fn test_malformed_email() {
        let mut form = filled("Ada", "foo", "hello");
        assert_eq!(form.submit().unwrap_err(), vec![FieldError::EmailInvalid]);
        assert_eq!(form.field(FieldName::Email).error_message(), "Enter a valid email.");
        assert!(!form.field(FieldName::Name).is_invalid());
        assert_eq!(form.field(FieldName::Email).value, "foo");
    }

    #[test]
    fn test_valid_email_with_missing_name() {
        let mut form = filled("", "a@b.co", "hello");
        assert_eq!(form.submit().unwrap_err(), vec![FieldError::NameRequired]);
        assert!(!form.field(FieldName::Email).is_invalid());
    }

    #[test]
    fn test_email_pattern_edges() {
        assert!(validate("a", "x@y.z", "m").is_empty());
        assert_eq!(validate("a", "x@y", "m"), vec![FieldError::EmailInvalid]);
        assert_eq!(validate("a", " x@y.z", "m"), vec![FieldError::EmailInvalid]);
    }

    #[test]
    fn test_errors_clear_on_resubmit() {
        let mut form = ContactForm::default();
        let _ = form.submit();
        form.set_value(FieldName::Name, "Ada");
        let _ = form.submit();
        assert!(!form.field(FieldName::Name).is_invalid());
        assert!(form.field(FieldName::Email).is_invalid());
    }

    #[test]
    fn test_success_clears_form_and_status_expires() {
        let mut form = filled("Ada", "ada@example.com", "Hi there");
        assert!(form.submit().is_ok());
        for name in FieldName::ALL {
            assert!(form.field(name).value.is_empty());
            assert!(!form.field(name).is_invalid());
        }
        assert_eq!(form.status(), CONFIRMATION_MESSAGE);

        form.update(3.0);
        assert_eq!(form.status(), CONFIRMATION_MESSAGE);
        form.update(0.5);
        assert_eq!(form.status(), "");
    }

    #[test]
    fn test_failed_submit_hides_confirmation() {
        let mut form = filled("Ada", "ada@example.com", "Hi there");
        form.submit().unwrap();
        let _ = form.submit();
        assert_eq!(form.status(), "");
        form.update(10.0);
        assert_eq!(form.status(), "");
    }
}
