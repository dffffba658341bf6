//! Full-screen overlay with a project's long description and links.

use content::Project;
use leptos::prelude::*;

use super::project_card::{ProjectLinks, ProjectMedia, TechTags};

/// Closes on the close button, a backdrop click or Escape.
#[component]
pub fn ProjectDetailModal(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                ev.prevent_default();
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="project-modal__backdrop" on:click=on_backdrop>
            <div
                class="project-modal"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="project-modal__header">
                    <h2>{project.title.as_str()}</h2>
                    <button class="project-modal__close" on:click=on_close_click title="Close details">
                        "✕"
                    </button>
                </div>
                <ProjectMedia project=project class="project-modal__media"/>
                <p class="project-modal__description">{project.long_description.as_str()}</p>
                <TechTags project=project/>
                <ProjectLinks
                    project=project
                    compact=false
                    class="project-modal__links"
                    link_class="button button--primary"
                />
            </div>
        </div>
    }
}
