//! Single-page portfolio: every section in scroll order.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. It latches the entrance-animation flag after mount and
//! feeds pointer movement to the parallax dots; each section below reads its
//! own state from context.

use leptos::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::contact_section::ContactSection;
use crate::components::experience_timeline::ExperienceTimeline;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::parallax_dots::ParallaxDots;
use crate::components::projects_section::ProjectsSection;
use crate::components::skills_section::SkillsSection;
use crate::components::toast::Toast;
use crate::state::shell::ShellState;

#[component]
pub fn HomePage() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    // Effects only run in the browser, so SSR output stays in the pre-entrance state.
    Effect::new(move || shell.update(ShellState::mark_visible));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            shell.update(|s| s.track_pointer(f64::from(ev.client_x()), f64::from(ev.client_y())));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="home-page">
            <ParallaxDots/>
            <NavBar/>
            <main>
                <Hero/>
                <SkillsSection/>
                <AboutSection/>
                <ExperienceTimeline/>
                <ProjectsSection/>
                <ContactSection/>
            </main>
            <Footer/>
            <Toast/>
        </div>
    }
}
