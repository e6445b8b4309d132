//! Hero banner with the headline and demo call-to-action.

use leptos::prelude::*;

use crate::content::{HERO_BODY, HERO_CTA, HERO_HEADLINE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <h1>{HERO_HEADLINE}</h1>
            <p>{HERO_BODY}</p>
            <button class="cta-button">{HERO_CTA}</button>
        </section>
    }
}
