//! Footer with social links and the copyright line.

use content::Catalog;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let catalog = expect_context::<&'static Catalog>();
    let copyright = format!("© {} {}. All rights reserved.", catalog.profile.copyright_year, catalog.profile.name);

    view! {
        <footer class="footer">
            <div class="footer__socials">
                {catalog
                    .socials
                    .iter()
                    .map(|link| {
                        view! {
                            <a class="footer__social" href=link.href.as_str() target="_blank" rel="noopener noreferrer">
                                {link.label.as_str()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="footer__copyright">{copyright}</p>
        </footer>
    }
}
