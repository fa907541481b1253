//! Contact form validation and the simulated submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend. A valid submission enters `Submitting`, the browser
//! layer waits out a fixed delay, then reports completion; the send never
//! fails. Validation reruns from scratch on every attempt.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Messages;

/// Minimal structural email check: `local@domain.tld`, no whitespace, one `@`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex"));

/// Minimum lengths, in UTF-16 code units as the browser reports them.
pub const MIN_NAME_UNITS: usize = 2;
pub const MIN_MESSAGE_UNITS: usize = 10;

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Strip surrounding whitespace, including the U+FEFF byte-order mark.
fn trim_field(value: &str) -> String {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}').to_owned()
}

/// Length as a JS string sees it: astral-plane characters count twice.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Trimmed field values from one submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self { name: trim_field(name), email: trim_field(email), message: trim_field(message) }
    }

    /// Failed checks in field order: name, email, message.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if utf16_len(&self.name) < MIN_NAME_UNITS {
            errors.push(ValidationError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(ValidationError::InvalidEmail);
        }
        if utf16_len(&self.message) < MIN_MESSAGE_UNITS {
            errors.push(ValidationError::MessageTooShort);
        }
        errors
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    NameTooShort,
    InvalidEmail,
    MessageTooShort,
}

impl ValidationError {
    #[must_use]
    pub fn message(self, messages: &Messages) -> &str {
        match self {
            Self::NameTooShort => &messages.name_too_short,
            Self::InvalidEmail => &messages.invalid_email,
            Self::MessageTooShort => &messages.message_too_short,
        }
    }
}

/// All error messages joined by single spaces, in check order.
#[must_use]
pub fn error_summary(errors: &[ValidationError], messages: &Messages) -> String {
    errors.iter().map(|err| err.message(messages)).collect::<Vec<_>>().join(" ")
}

/// Color family of the feedback line under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTone {
    Error,
    Accent,
}

impl FeedbackTone {
    #[must_use]
    pub fn css_color(self) -> &'static str {
        match self {
            Self::Error => "#ffb4b4",
            Self::Accent => "var(--accent)",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactPhase {
    #[default]
    Idle,
    Invalid(Vec<ValidationError>),
    Submitting,
    Submitted,
}

/// Result of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(Vec<ValidationError>),
    Sending,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub phase: ContactPhase,
}

impl ContactState {
    /// Validate `draft` and either reject it or start the simulated send.
    pub fn submit(&mut self, draft: &ContactDraft) -> SubmitOutcome {
        let errors = draft.validate();
        if errors.is_empty() {
            self.phase = ContactPhase::Submitting;
            SubmitOutcome::Sending
        } else {
            self.phase = ContactPhase::Invalid(errors.clone());
            SubmitOutcome::Rejected(errors)
        }
    }

    /// The simulated delay elapsed.
    pub fn complete_send(&mut self) {
        self.phase = ContactPhase::Submitted;
    }

    /// The form was cleared after a completed send.
    pub fn acknowledge(&mut self) {
        if self.phase == ContactPhase::Submitted {
            self.phase = ContactPhase::Idle;
        }
    }
}
