//! Decorative floating dots that drift with the pointer.

use leptos::prelude::*;

use crate::state::shell::ShellState;

#[component]
pub fn ParallaxDots() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    view! {
        <div class="parallax-dots" aria-hidden="true">
            {(0..3)
                .map(|i| {
                    let class = shell.with_untracked(|s| s.dots()[i].class);
                    view! { <div class=class style=move || shell.with(|s| s.dots()[i].style())></div> }
                })
                .collect_view()}
        </div>
    }
}
