//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::landing::LandingPage;
use crate::state::{contact::ContactFormState, ui::UiState};
use crate::util::analytics;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AnalyticsTag measurement_id=analytics::MEASUREMENT_ID/>
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

/// `gtag.js` loader plus its inline configuration.
#[component]
fn AnalyticsTag(measurement_id: &'static str) -> impl IntoView {
    view! {
        <script async=true src=analytics::loader_src(measurement_id)></script>
        <script inner_html=analytics::config_snippet(measurement_id)></script>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let contact = RwSignal::new(ContactFormState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(contact);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/ehya.css"/>
        <Title text="Ehya | Instagram analytics"/>
        <Meta
            name="description"
            content="Ehya is the Instagram analytics platform focused on the goals, track engagement, and grow your business."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
