//! Contact form wired to the injected message-delivery collaborator.

use content::ContactField;
use leptos::prelude::*;

use crate::net::delivery::ContactDelivery;
#[cfg(feature = "hydrate")]
use crate::net::delivery::MessageDelivery as _;
use crate::state::contact_form::ContactFormState;

/// Single-line input bound to one form field.
#[component]
fn FieldInput(field: ContactField, input_type: &'static str, placeholder: &'static str) -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();

    view! {
        <label class="contact-form__field">
            <span class="contact-form__label">{field.label()}</span>
            <input
                class="contact-form__input"
                type=input_type
                name=field.label().to_ascii_lowercase()
                placeholder=placeholder
                required=true
                prop:value=move || form.with(|f| f.fields.field(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();
    let delivery = expect_context::<ContactDelivery>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = None;
        form.update(|f| started = f.begin_submit().ok());
        let Some(message) = started else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = delivery.deliver(message).await;
            if let Err(e) = &outcome {
                log::warn!("contact delivery failed: {e}");
            }
            form.update(|f| f.finish_submit(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (message, delivery);
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="contact-form__row">
                <FieldInput field=ContactField::Name input_type="text" placeholder="Your name"/>
                <FieldInput field=ContactField::Email input_type="email" placeholder="you@example.com"/>
            </div>
            <FieldInput field=ContactField::Subject input_type="text" placeholder="What's this about?"/>
            <label class="contact-form__field">
                <span class="contact-form__label">{ContactField::Message.label()}</span>
                <textarea
                    class="contact-form__input contact-form__input--message"
                    name="message"
                    rows="6"
                    placeholder="Tell me about your project..."
                    required=true
                    prop:value=move || form.with(|f| f.fields.message.clone())
                    on:input=move |ev| form.update(|f| f.set_field(ContactField::Message, event_target_value(&ev)))
                ></textarea>
            </label>
            <button class="button button--primary contact-form__submit" type="submit" disabled=move || !form.with(ContactFormState::can_submit)>
                {move || if form.with(|f| f.submitting) { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
