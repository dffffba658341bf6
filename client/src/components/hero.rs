//! Landing section: tagline, headline, calls to action and stats.

use content::Catalog;
use leptos::prelude::*;

use crate::state::shell::ShellState;
use crate::util::scroll::{open_in_new_tab, scroll_to_section};

#[component]
pub fn Hero() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();
    let shell = expect_context::<RwSignal<ShellState>>();
    let profile = &catalog.profile;

    view! {
        <section id="home" class="hero">
            <div class=move || format!("hero__content {}", shell.with(|s| s.entrance("animate-fade-in-up")))>
                <span class="hero__tagline">{profile.tagline.as_str()}</span>
                <h1 class="hero__headline">
                    {profile.headline_lead.as_str()}
                    " "
                    <span class="hero__accent">{profile.headline_accent.as_str()}</span>
                </h1>
                <p class="hero__intro">{profile.intro.as_str()}</p>
                <div class="hero__actions">
                    <button class="button button--primary" on:click=move |_| scroll_to_section("projects")>
                        "View My Work"
                    </button>
                    <button class="button button--outline" on:click=move |_| open_in_new_tab(&profile.resume)>
                        "Download CV"
                    </button>
                </div>
                <div class="hero__stats">
                    {profile
                        .stats
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="hero__stat">
                                    <span class="hero__stat-number">{stat.number.as_str()}</span>
                                    <span class="hero__stat-label">{stat.label.as_str()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class=move || format!("hero__portrait {}", shell.with(|s| s.entrance("animate-scale-in")))>
                <img class="hero__photo" src=profile.photo.as_str() alt=profile.name.as_str()/>
            </div>
        </section>
    }
}
