//! Project gallery: category filter bar, view toggle, paginated cards and the
//! detail overlay.
//!
//! DESIGN
//! ======
//! All selection state lives in `GalleryState`; this component only maps
//! clicks onto its transitions and renders its derived views.

use content::Catalog;
use leptos::prelude::*;

use super::project_card::ProjectCard;
use super::project_detail_modal::ProjectDetailModal;
use crate::state::gallery::{GalleryState, ViewMode};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();
    let gallery = expect_context::<RwSignal<GalleryState>>();

    let on_details = Callback::new(move |id: u32| gallery.update(|g| g.open_details(id)));
    let on_close = Callback::new(move |()| gallery.update(GalleryState::close_details));
    let is_list = move || gallery.with(|g| g.view_mode == ViewMode::List);

    view! {
        <section id="projects" class="projects">
            <h2 class="section-title">"Featured Projects"</h2>
            <div class="projects__toolbar">
                <div class="projects__filters">
                    {catalog
                        .filters()
                        .into_iter()
                        .map(|filter| {
                            let label = filter.label().to_owned();
                            let selected = filter.clone();
                            view! {
                                <button
                                    class="projects__filter"
                                    class:projects__filter--active=move || gallery.with(|g| g.is_selected(&selected))
                                    on:click=move |_| gallery.update(|g| g.select_category(filter.clone()))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="projects__view-toggle"
                    title=move || if is_list() { "Switch to grid view" } else { "Switch to list view" }
                    on:click=move |_| gallery.update(GalleryState::toggle_view_mode)
                >
                    {move || if is_list() { "▦ Grid" } else { "☰ List" }}
                </button>
            </div>
            <div class="projects__grid" class:projects__grid--list=is_list>
                {move || {
                    let state = gallery.get();
                    state
                        .displayed(&catalog.projects)
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project view_mode=state.view_mode on_details=on_details/> })
                        .collect_view()
                }}
            </div>
            {move || {
                gallery
                    .with(|g| g.load_more(&catalog.projects))
                    .map(|control| {
                        view! {
                            <div class="projects__more">
                                <button class="button button--outline" on:click=move |_| gallery.update(GalleryState::toggle_show_all)>
                                    {control.label()}
                                </button>
                            </div>
                        }
                    })
            }}
            {move || {
                gallery
                    .with(|g| g.selected(catalog))
                    .map(|project| view! { <ProjectDetailModal project=project on_close=on_close/> })
            }}
        </section>
    }
}
