//! Feature grid rendered from the static feature list.

use leptos::prelude::*;

use crate::content::{FEATURES, Feature};

/// Grid of product feature cards (`#features`).
#[component]
pub fn FeatureGrid() -> impl IntoView {
    view! {
        <section id="features" class="info-section">
            {FEATURES.iter().map(|feature| view! { <FeatureCard feature=*feature/> }).collect_view()}
        </section>
    }
}

/// A single tile. The icon is decorative and hidden from assistive tech.
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="info-card">
            <div class="info-icon" aria-hidden="true">{feature.icon}</div>
            <h3 class="info-title">{feature.title}</h3>
            <p class="info-desc">{feature.desc}</p>
        </div>
    }
}
