//! Fixed top navigation with section anchors and the "Hire Me" shortcut.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use content::Catalog;
use leptos::prelude::*;

use crate::state::shell::ShellState;
use crate::util::scroll::{scroll_to_section, section_href, section_id};

/// Navigation labels in display order; each maps to a section anchor.
pub const NAV_SECTIONS: [&str; 5] = ["Home", "About", "Experience", "Projects", "Contact"];

/// Slides in from the left once the page has mounted.
fn nav_class(shell: &ShellState) -> String {
    format!("nav-bar {}", shell.entrance("animate-fade-in-left"))
}

#[component]
pub fn NavBar() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();
    let shell = expect_context::<RwSignal<ShellState>>();

    view! {
        <nav class=move || shell.with(nav_class)>
            <div class="nav-bar__inner">
                <a
                    class="nav-bar__brand"
                    href=section_href("home")
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        scroll_to_section("home");
                    }
                >
                    <span class="nav-bar__badge">{catalog.profile.initials.as_str()}</span>
                    <span class="nav-bar__name">{catalog.profile.name.as_str()}</span>
                </a>
                <div class="nav-bar__links">
                    {NAV_SECTIONS
                        .iter()
                        .map(|label| {
                            let id = section_id(label);
                            let target = id.clone();
                            view! {
                                <a
                                    class="nav-bar__link"
                                    href=section_href(&id)
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.prevent_default();
                                        scroll_to_section(&target);
                                    }
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="nav-bar__cta" on:click=move |_| scroll_to_section("contact")>
                    "Hire Me"
                </button>
            </div>
        </nav>
    }
}
