//! Contact message exchanged between the contact form and the relay.
//!
//! Validation mirrors the browser's `required` / `type="email"` checks so the
//! same rules hold whether the message is delivered locally or relayed by the
//! server.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

pub const MAX_FIELD_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 5_000;

/// Form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    fn max_len(self) -> usize {
        match self {
            Self::Message => MAX_MESSAGE_LEN,
            _ => MAX_FIELD_LEN,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("{} is required", .0.label())]
    Missing(ContactField),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("{} is too long (max {max} characters)", .field.label())]
    TooLong { field: ContactField, max: usize },
}

/// A visitor's message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }

    /// Check required fields, email shape and length caps, in field order.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        for field in ContactField::ALL {
            let value = self.field(field).trim();
            if value.is_empty() {
                return Err(ContactValidationError::Missing(field));
            }
            let max = field.max_len();
            if value.chars().count() > max {
                return Err(ContactValidationError::TooLong { field, max });
            }
        }
        if !is_email_shaped(self.email.trim()) {
            return Err(ContactValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// `local@domain` with exactly one `@`, both sides non-empty, no whitespace.
#[must_use]
pub fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !domain.starts_with('.') && !domain.ends_with('.')
        }
        _ => false,
    }
}

/// Acknowledgement returned by a successful delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: String,
}

/// JSON body returned by the relay endpoint on failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactErrorBody {
    pub error: String,
}

/// Why a message could not be delivered.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("{0}")]
    Rejected(String),
    #[error("Too many messages. Please try again later.")]
    RateLimited,
    #[error("Messaging is unavailable right now.")]
    Unavailable,
    /// The relay accepted the request but could not hand the message on.
    #[error("{0}")]
    Undelivered(String),
    #[error("Network error: {0}")]
    Transport(String),
}

impl From<ContactValidationError> for DeliveryError {
    fn from(err: ContactValidationError) -> Self {
        Self::Rejected(err.to_string())
    }
}
