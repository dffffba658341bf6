//! About section: biography, location and focus-area cards.

use content::Catalog;
use content::catalog::FocusIcon;
use leptos::prelude::*;

fn focus_glyph(icon: FocusIcon) -> &'static str {
    match icon {
        FocusIcon::Database => "🗄",
        FocusIcon::Globe => "🌐",
        FocusIcon::Code => "⌨",
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();
    let profile = &catalog.profile;

    view! {
        <section id="about" class="about">
            <h2 class="section-title">"About Me"</h2>
            <div class="about__layout">
                <div class="about__bio">
                    {profile.about.iter().map(|p| view! { <p>{p.as_str()}</p> }).collect_view()}
                    <div class="about__facts">
                        <span class="about__fact">"📍 " {profile.location.as_str()}</span>
                        <span class="about__fact">"🗓 " {profile.availability.as_str()}</span>
                    </div>
                </div>
                <div class="about__focus">
                    {profile
                        .focus_areas
                        .iter()
                        .map(|area| {
                            view! {
                                <div class="focus-card" class:focus-card--wide=area.wide>
                                    <span class="focus-card__icon">{focus_glyph(area.icon)}</span>
                                    <h3 class="focus-card__title">{area.title.as_str()}</h3>
                                    <p class="focus-card__body">{area.body.as_str()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
