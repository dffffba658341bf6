//! Contact form state machine.
//!
//! Idle → (`begin_submit`) Submitting → (`finish_submit`) Idle with a notice.
//! Delivery itself happens outside this module through
//! [`crate::net::delivery::MessageDelivery`]; the state only records what was
//! handed off and what came back.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use content::{ContactField, ContactMessage, ContactReceipt, ContactValidationError, DeliveryError};

pub const SUCCESS_TITLE: &str = "Message sent!";
pub const SUCCESS_DESCRIPTION: &str = "Thank you for your message. I'll get back to you soon.";
pub const FAILURE_TITLE: &str = "Message not sent";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot notification shown after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Unique per raised notice, so two identical messages stay distinct.
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

/// Why `begin_submit` refused to start a delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A delivery is already in flight.
    InFlight,
    Invalid(ContactValidationError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactMessage,
    pub submitting: bool,
    pub notice: Option<Notice>,
    next_notice_id: u64,
}

impl ContactFormState {
    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.fields.set_field(field, value);
    }

    /// Validate and move to Submitting, returning the message to deliver.
    ///
    /// # Errors
    ///
    /// [`SubmitBlocked::InFlight`] while a delivery is pending (state is left
    /// untouched); [`SubmitBlocked::Invalid`] when a field fails validation,
    /// in which case an error notice is recorded.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let message = self.fields.trimmed();
        if let Err(err) = message.validate() {
            self.raise_error(err.to_string());
            return Err(SubmitBlocked::Invalid(err));
        }
        self.submitting = true;
        self.notice = None;
        Ok(message)
    }

    /// Record the delivery outcome. Success clears every field; failure keeps
    /// them so the visitor can retry.
    pub fn finish_submit(&mut self, outcome: Result<ContactReceipt, DeliveryError>) {
        self.submitting = false;
        match outcome {
            Ok(_) => {
                self.fields = ContactMessage::default();
                self.raise(NoticeKind::Success, SUCCESS_TITLE, SUCCESS_DESCRIPTION.to_owned());
            }
            Err(err) => self.raise_error(err.to_string()),
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Dismiss only if notice `id` is still the one showing.
    pub fn dismiss_notice_if(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitting
    }

    fn raise_error(&mut self, description: String) {
        self.raise(NoticeKind::Error, FAILURE_TITLE, description);
    }

    fn raise(&mut self, kind: NoticeKind, title: &str, description: String) {
        self.next_notice_id += 1;
        self.notice = Some(Notice { id: self.next_notice_id, kind, title: title.to_owned(), description });
    }
}
