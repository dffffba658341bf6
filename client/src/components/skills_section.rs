//! Skill cards with proficiency bars.

use content::Catalog;
use leptos::prelude::*;

#[cfg(test)]
#[path = "skills_section_test.rs"]
mod skills_section_test;

/// Inline width for a skill's level bar, clamped to 100%.
fn level_style(level: u8) -> String {
    format!("width: {}%;", level.min(100))
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();

    view! {
        <section id="skills" class="skills">
            <h2 class="section-title">"Skills & Technologies"</h2>
            <div class="skills__grid">
                {catalog
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="skill-card">
                                <div class="skill-card__header">
                                    <span class="skill-card__icon">{skill.icon.as_str()}</span>
                                    <span class="skill-card__name">{skill.name.as_str()}</span>
                                    <span class="skill-card__level">{format!("{}%", skill.level)}</span>
                                </div>
                                <div class="skill-card__track">
                                    <div class="skill-card__bar" style=level_style(skill.level)></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
