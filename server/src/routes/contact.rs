//! Contact relay endpoint.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use content::ContactMessage;
use content::contact::ContactErrorBody;

use crate::services::contact::{self, ContactError};
use crate::state::AppState;

pub(crate) fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ContactError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ContactError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        ContactError::Relay(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Message shown to the visitor. Relay internals stay in the server log.
fn public_message(err: &ContactError) -> String {
    match err {
        ContactError::Relay(_) => "message could not be delivered".to_owned(),
        ContactError::RateLimited(_) => "too many messages, try again later".to_owned(),
        other => other.to_string(),
    }
}

/// `POST /api/contact`: relay a visitor's message to the site owner.
pub async fn submit(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(body): Json<ContactMessage>,
) -> Response {
    match contact::submit_contact(&state, addr.ip(), body).await {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(e) => {
            let status = contact_error_to_status(&e);
            if status.is_server_error() {
                tracing::warn!(error = %e, %status, "contact submission failed");
            } else {
                tracing::debug!(error = %e, %status, "contact submission rejected");
            }
            (status, Json(ContactErrorBody { error: public_message(&e) })).into_response()
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
