//! Root application component with routing and context providers.

use content::Catalog;
use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::delivery::ContactDelivery;
use crate::pages::home::HomePage;
use crate::state::{contact_form::ContactFormState, gallery::GalleryState, shell::ShellState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Loads the embedded catalog and provides it with the per-section state
/// signals. A catalog that fails validation renders an error page instead.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = match content::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            return view! {
                <Title text="Portfolio unavailable"/>
                <div class="content-error">
                    <h1>"Portfolio unavailable"</h1>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };

    provide_context::<&'static Catalog>(catalog);
    provide_context(RwSignal::new(GalleryState::default()));
    provide_context(RwSignal::new(ContactFormState::default()));
    provide_context(RwSignal::new(ShellState::default()));
    provide_context(ContactDelivery::from_mode(catalog.contact.delivery));

    let title = format!("{} | Portfolio", catalog.profile.name);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=title/>
        <Meta name="description" content=catalog.profile.intro.as_str()/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
    .into_any()
}
