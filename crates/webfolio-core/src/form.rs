//! Contact form validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::CoreResult;

/// Shown after a successful submission
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

/// Why a submission was rejected. The display text is what the visitor sees.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField(FormField),

    #[error("Please enter a valid email address")]
    MalformedEmail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Presence of every field first, then the email shape
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::Subject, &self.subject),
            (FormField::Message, &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }
        if !EMAIL_SHAPE.is_match(&self.email) {
            return Err(ValidationError::MalformedEmail);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Where a validated message goes
pub trait MessageSink {
    fn deliver(&self, form: &ContactForm) -> CoreResult<()>;
}

/// Records submissions in the log and nothing else
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl MessageSink for LogSink {
    fn deliver(&self, form: &ContactForm) -> CoreResult<()> {
        tracing::info!(
            from = %form.email,
            subject = %form.subject,
            chars = form.message.chars().count(),
            "Contact message received"
        );
        Ok(())
    }
}

/// Validate then hand off to `sink`; the form is cleared only on success
pub fn submit(form: &mut ContactForm, sink: &dyn MessageSink) -> CoreResult<()> {
    form.validate()?;
    sink.deliver(form)?;
    form.clear();
    Ok(())
}
