//! Message-delivery collaborators for the contact form.
//!
//! DESIGN
//! ======
//! The form's state machine only knows `MessageDelivery`. `ContactDelivery`
//! picks the concrete collaborator from the content's delivery mode and is
//! provided through context, so switching from the simulated acknowledgement
//! to the relay endpoint does not touch the form.

#[cfg(test)]
#[path = "delivery_test.rs"]
mod delivery_test;

use std::time::Duration;

use content::catalog::DeliveryMode;
use content::{ContactMessage, ContactReceipt, DeliveryError};

/// Latency of the simulated delivery.
pub const SIMULATED_DELAY: Duration = Duration::from_secs(2);

pub const SIMULATED_RECEIPT_ID: &str = "simulated";

/// Hands a validated contact message to some delivery mechanism.
#[allow(async_fn_in_trait)]
pub trait MessageDelivery {
    async fn deliver(&self, message: ContactMessage) -> Result<ContactReceipt, DeliveryError>;
}

/// Waits a fixed delay and acknowledges locally. Nothing leaves the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedDelivery {
    pub delay: Duration,
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self { delay: SIMULATED_DELAY }
    }
}

impl MessageDelivery for SimulatedDelivery {
    async fn deliver(&self, message: ContactMessage) -> Result<ContactReceipt, DeliveryError> {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(self.delay).await;
        message.validate()?;
        Ok(ContactReceipt { id: SIMULATED_RECEIPT_ID.to_owned() })
    }
}

/// Posts to the server's contact relay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelayDelivery;

impl MessageDelivery for RelayDelivery {
    async fn deliver(&self, message: ContactMessage) -> Result<ContactReceipt, DeliveryError> {
        crate::net::api::post_contact(&message).await
    }
}

/// Delivery selected by configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactDelivery {
    Simulated(SimulatedDelivery),
    Relay(RelayDelivery),
}

impl ContactDelivery {
    #[must_use]
    pub fn from_mode(mode: DeliveryMode) -> Self {
        match mode {
            DeliveryMode::Simulated => Self::Simulated(SimulatedDelivery::default()),
            DeliveryMode::Relay => Self::Relay(RelayDelivery),
        }
    }
}

impl MessageDelivery for ContactDelivery {
    async fn deliver(&self, message: ContactMessage) -> Result<ContactReceipt, DeliveryError> {
        match self {
            Self::Simulated(inner) => inner.deliver(message).await,
            Self::Relay(inner) => inner.deliver(message).await,
        }
    }
}
