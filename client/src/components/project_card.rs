//! Gallery card for a single project, in grid or list layout.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use content::{Media, Project};
use leptos::prelude::*;

use crate::state::gallery::ViewMode;

/// Present outbound links as `(label, href)`, demo first. Cards use the
/// short labels.
pub(super) fn outbound_links(project: &Project, compact: bool) -> Vec<(&'static str, &str)> {
    project
        .links()
        .into_iter()
        .map(|link| {
            let label = if compact { link.kind.short_label() } else { link.kind.label() };
            (label, link.href)
        })
        .collect()
}

/// External links, each opened in a new tab.
#[component]
pub fn ProjectLinks(
    project: &'static Project,
    compact: bool,
    #[prop(into)] class: String,
    #[prop(into)] link_class: String,
) -> impl IntoView {
    view! {
        <div class=class>
            {outbound_links(project, compact)
                .into_iter()
                .map(|(label, href)| {
                    view! {
                        <a class=link_class.clone() href=href target="_blank" rel="noopener noreferrer">
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Project media: autoplaying muted video when present, otherwise the image.
#[component]
pub fn ProjectMedia(project: &'static Project, #[prop(into)] class: String) -> impl IntoView {
    match project.media() {
        Media::Video(src) => view! {
            <video class=class src=src autoplay=true muted=true loop=true playsinline=true></video>
        }
        .into_any(),
        Media::Image(src) => view! { <img class=class src=src alt=project.title.as_str()/> }.into_any(),
    }
}

/// Tech tag chips in configuration order.
#[component]
pub fn TechTags(project: &'static Project) -> impl IntoView {
    view! {
        <div class="tech-tags">
            {project.tech.iter().map(|tag| view! { <span class="tech-tags__tag">{tag.as_str()}</span> }).collect_view()}
        </div>
    }
}

#[component]
pub fn ProjectCard(project: &'static Project, view_mode: ViewMode, on_details: Callback<u32>) -> impl IntoView {
    let list = view_mode == ViewMode::List;
    let body = if list { project.long_description.as_str() } else { project.description.as_str() };

    view! {
        <article class="project-card" class:project-card--list=list>
            <div class="project-card__media">
                <ProjectMedia project=project class="project-card__image"/>
                <Show when=move || project.featured>
                    <span class="project-card__badge">"Featured"</span>
                </Show>
            </div>
            <div class="project-card__body">
                <span class="project-card__category">{project.category.as_str()}</span>
                <h3 class="project-card__title">{project.title.as_str()}</h3>
                <p class="project-card__description">{body}</p>
                <TechTags project=project/>
                <div class="project-card__actions">
                    <Show when=move || project.has_links()>
                        <ProjectLinks
                            project=project
                            compact=true
                            class="project-card__links"
                            link_class="button button--outline button--small"
                        />
                    </Show>
                    <Show when=move || !list>
                        <button
                            class="button button--ghost button--small project-card__details"
                            on:click=move |_| on_details.run(project.id)
                        >
                            "View Details"
                        </button>
                    </Show>
                </div>
            </div>
        </article>
    }
}
