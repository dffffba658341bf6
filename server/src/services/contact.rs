//! Contact relay service.
//!
//! Validates a visitor's message, applies rate limits and forwards it to the
//! site owner through a [`ContactRelay`]. Messages are never stored.

use std::net::IpAddr;

use async_trait::async_trait;
use content::{ContactMessage, ContactReceipt, ContactValidationError};
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use uuid::Uuid;

use crate::config::RelayConfig;
use crate::rate_limit::RateLimitError;
use crate::state::AppState;

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_message.html");

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("contact relay not configured")]
    NotConfigured,
    #[error(transparent)]
    Invalid(#[from] ContactValidationError),
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// Outbound channel for accepted contact messages.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn relay(&self, id: Uuid, message: &ContactMessage) -> Result<(), RelayError>;
}

/// Sends each message as an HTML email through Resend.
pub struct ResendRelay {
    client: Resend,
    from: String,
    to: String,
}

impl ResendRelay {
    #[must_use]
    pub fn new(config: RelayConfig) -> Self {
        Self { client: Resend::new(&config.api_key), from: config.from, to: config.to }
    }
}

#[async_trait]
impl ContactRelay for ResendRelay {
    async fn relay(&self, id: Uuid, message: &ContactMessage) -> Result<(), RelayError> {
        let to = [self.to.as_str()];
        let subject = format!("[Portfolio] {}", message.subject);
        let html = render_contact_template(id, message);

        let email = CreateEmailBaseOptions::new(&self.from, to, &subject).with_html(&html);
        self.client
            .emails
            .send(email)
            .await
            .map_err(|e| RelayError::Delivery(e.to_string()))?;
        Ok(())
    }
}

/// Validate, rate-limit and relay one message.
///
/// Validation runs before the rate limiter so malformed submissions do not
/// consume the sender's quota.
///
/// # Errors
///
/// See [`ContactError`]; each variant maps to a distinct HTTP status.
pub async fn submit_contact(
    state: &AppState,
    client: IpAddr,
    message: ContactMessage,
) -> Result<ContactReceipt, ContactError> {
    let relay = state.relay.as_ref().ok_or(ContactError::NotConfigured)?;
    let message = message.trimmed();
    message.validate()?;
    state.rate_limiter.check_and_record(client)?;

    let id = Uuid::new_v4();
    relay.relay(id, &message).await?;
    tracing::info!(%id, %client, "contact message relayed");
    Ok(ContactReceipt { id: id.to_string() })
}

/// Fill the email template. Every field is HTML-escaped and substituted in a
/// single pass, so placeholder text inside a field is never expanded.
#[must_use]
pub fn render_contact_template(id: Uuid, message: &ContactMessage) -> String {
    render_placeholders(CONTACT_TEMPLATE, |key| match key {
        "ID" => Some(id.to_string()),
        "NAME" => Some(escape_html(&message.name)),
        "EMAIL" => Some(escape_html(&message.email)),
        "SUBJECT" => Some(escape_html(&message.subject)),
        "MESSAGE" => Some(escape_html(&message.message).replace('\n', "<br>")),
        _ => None,
    })
}

fn render_placeholders(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match lookup(key) {
            Some(value) => out.push_str(&value),
            None => {
                out.push_str("{{");
                out.push_str(key);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
