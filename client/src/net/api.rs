//! REST helpers for the contact relay endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the relay is never called during rendering, so the stub
//! reports the relay as unavailable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use content::contact::ContactErrorBody;
use content::{ContactMessage, ContactReceipt, DeliveryError};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn delivery_error_for_status(status: u16, server_message: Option<String>) -> DeliveryError {
    match (status, server_message) {
        (400 | 422, message) => {
            DeliveryError::Rejected(message.unwrap_or_else(|| "The message was rejected.".to_owned()))
        }
        (429, _) => DeliveryError::RateLimited,
        (502, Some(message)) => DeliveryError::Undelivered(message),
        (503, _) => DeliveryError::Unavailable,
        (other, _) => DeliveryError::Transport(format!("contact relay failed: {other}")),
    }
}

/// POST a message to the relay endpoint.
///
/// # Errors
///
/// Maps transport failures and non-2xx statuses to [`DeliveryError`].
pub async fn post_contact(message: &ContactMessage) -> Result<ContactReceipt, DeliveryError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(message)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;
        if resp.ok() {
            return resp
                .json::<ContactReceipt>()
                .await
                .map_err(|e| DeliveryError::Transport(e.to_string()));
        }
        let status = resp.status();
        let server_message = resp.json::<ContactErrorBody>().await.ok().map(|b| b.error);
        Err(delivery_error_for_status(status, server_message))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err(DeliveryError::Unavailable)
    }
}
