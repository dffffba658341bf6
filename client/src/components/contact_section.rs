//! Contact channels next to the contact form.

use content::Catalog;
use content::catalog::ChannelKind;
use leptos::prelude::*;

use super::contact_form::ContactForm;

fn channel_glyph(kind: ChannelKind) -> &'static str {
    match kind {
        ChannelKind::Email => "✉",
        ChannelKind::Phone => "☎",
        ChannelKind::Location => "📍",
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();

    view! {
        <section id="contact" class="contact">
            <h2 class="section-title">"Get In Touch"</h2>
            <div class="contact__layout">
                <div class="contact__channels">
                    {catalog
                        .contact
                        .channels
                        .iter()
                        .map(|channel| {
                            view! {
                                <div class="channel-card">
                                    <span class="channel-card__icon">{channel_glyph(channel.kind)}</span>
                                    <div>
                                        <h3 class="channel-card__title">{channel.title.as_str()}</h3>
                                        <p class="channel-card__info">{channel.info.as_str()}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <ContactForm/>
            </div>
        </section>
    }
}
