//! Education and work history on a vertical timeline.

use content::Catalog;
use content::catalog::ExperienceKind;
use leptos::prelude::*;

#[cfg(test)]
#[path = "experience_timeline_test.rs"]
mod experience_timeline_test;

/// Dot modifier class and glyph for an entry kind.
fn dot_for(kind: ExperienceKind) -> (&'static str, &'static str) {
    match kind {
        ExperienceKind::Education => ("timeline__dot timeline__dot--education", "🎓"),
        ExperienceKind::Work => ("timeline__dot timeline__dot--work", "💼"),
    }
}

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();

    view! {
        <section id="experience" class="experience">
            <h2 class="section-title">"Experience & Education"</h2>
            <ol class="timeline">
                {catalog
                    .experience
                    .iter()
                    .map(|entry| {
                        let (dot_class, glyph) = dot_for(entry.kind);
                        view! {
                            <li class="timeline__entry">
                                <span class=dot_class aria-hidden="true">{glyph}</span>
                                <div class="timeline__card">
                                    <span class="timeline__period">{entry.period.as_str()}</span>
                                    <h3 class="timeline__title">{entry.title.as_str()}</h3>
                                    <p class="timeline__org">
                                        {entry.organization.as_str()}
                                        " · "
                                        {entry.location.as_str()}
                                    </p>
                                    <p class="timeline__description">{entry.description.as_str()}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
