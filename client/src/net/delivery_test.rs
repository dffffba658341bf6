use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::state::contact_form::{ContactFormState, NoticeKind, SUCCESS_TITLE};
use content::ContactField;

/// Records delivered messages and replies with a fixed outcome.
struct RecordingDelivery {
    delivered: RefCell<Vec<ContactMessage>>,
    outcome: Result<ContactReceipt, DeliveryError>,
}

impl RecordingDelivery {
    fn replying(outcome: Result<ContactReceipt, DeliveryError>) -> Self {
        Self { delivered: RefCell::new(Vec::new()), outcome }
    }
}

impl MessageDelivery for RecordingDelivery {
    async fn deliver(&self, message: ContactMessage) -> Result<ContactReceipt, DeliveryError> {
        self.delivered.borrow_mut().push(message);
        self.outcome.clone()
    }
}

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "Let's talk.".to_owned(),
    }
}

fn filled_form() -> ContactFormState {
    let mut form = ContactFormState::default();
    let msg = message();
    for field in ContactField::ALL {
        form.set_field(field, msg.field(field).to_owned());
    }
    form
}

/// Drive one submission the way the form component does.
fn submit_with(form: &mut ContactFormState, delivery: &impl MessageDelivery) {
    if let Ok(msg) = form.begin_submit() {
        assert!(form.submitting);
        let outcome = block_on(delivery.deliver(msg));
        form.finish_submit(outcome);
    }
}

// =============================================================
// SimulatedDelivery
// =============================================================

#[test]
fn simulated_delay_is_two_seconds() {
    assert_eq!(SimulatedDelivery::default().delay, Duration::from_secs(2));
}

#[test]
fn simulated_delivery_acknowledges_valid_message() {
    let receipt = block_on(SimulatedDelivery::default().deliver(message())).unwrap();
    assert_eq!(receipt.id, SIMULATED_RECEIPT_ID);
}

#[test]
fn simulated_delivery_rejects_invalid_message() {
    let mut msg = message();
    msg.email = "nope".to_owned();
    let err = block_on(SimulatedDelivery::default().deliver(msg)).unwrap_err();
    assert_eq!(err, DeliveryError::Rejected("Enter a valid email address".to_owned()));
}

#[test]
fn simulated_submission_resets_form_and_confirms() {
    let mut form = filled_form();
    submit_with(&mut form, &SimulatedDelivery::default());
    assert!(form.can_submit());
    assert_eq!(form.fields, ContactMessage::default());
    let notice = form.notice.expect("confirmation");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.title, SUCCESS_TITLE);
}

// =============================================================
// ContactDelivery
// =============================================================

#[test]
fn from_mode_selects_collaborator() {
    assert_eq!(
        ContactDelivery::from_mode(DeliveryMode::Simulated),
        ContactDelivery::Simulated(SimulatedDelivery::default())
    );
    assert_eq!(ContactDelivery::from_mode(DeliveryMode::Relay), ContactDelivery::Relay(RelayDelivery));
}

#[test]
fn dispatch_reaches_simulated_collaborator() {
    let delivery = ContactDelivery::from_mode(DeliveryMode::Simulated);
    let receipt = block_on(delivery.deliver(message())).unwrap();
    assert_eq!(receipt.id, SIMULATED_RECEIPT_ID);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn relay_is_unavailable_outside_browser() {
    let delivery = ContactDelivery::from_mode(DeliveryMode::Relay);
    assert_eq!(block_on(delivery.deliver(message())), Err(DeliveryError::Unavailable));
}

// =============================================================
// injected collaborator
// =============================================================

#[test]
fn form_hands_trimmed_message_to_collaborator() {
    let delivery = RecordingDelivery::replying(Ok(ContactReceipt { id: "r-9".to_owned() }));
    let mut form = filled_form();
    form.set_field(ContactField::Subject, "  Hello  ".to_owned());
    submit_with(&mut form, &delivery);
    assert_eq!(delivery.delivered.borrow().as_slice(), &[message()]);
    assert_eq!(form.fields, ContactMessage::default());
}

#[test]
fn collaborator_failure_keeps_fields() {
    let delivery = RecordingDelivery::replying(Err(DeliveryError::Transport("offline".to_owned())));
    let mut form = filled_form();
    submit_with(&mut form, &delivery);
    assert_eq!(form.fields, message());
    assert!(form.can_submit());
    assert_eq!(form.notice.map(|n| n.description), Some("Network error: offline".to_owned()));
}

#[test]
fn invalid_form_never_reaches_collaborator() {
    let delivery = RecordingDelivery::replying(Ok(ContactReceipt { id: "unused".to_owned() }));
    let mut form = ContactFormState::default();
    submit_with(&mut form, &delivery);
    assert!(delivery.delivered.borrow().is_empty());
}
