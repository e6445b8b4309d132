//! Top header: brand mark, mobile menu button, section navigation, login.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `UiState` from context. On narrow screens the `<nav>` is
//! hidden until the menu button adds the `active` class; following any link
//! collapses it again.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use leptos::prelude::*;

use crate::content::{BRAND, LOGIN_LABEL, NAV_LINKS};
use crate::state::ui::UiState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_menu_click = move |_| ui.update(UiState::toggle_menu);

    let links = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <a href=link.href on:click=move |_| ui.update(UiState::close_menu)>
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <header>
            <div class="logo">{BRAND}</div>
            <button
                class="menu-button"
                aria-label=move || ui.get().menu_button_label()
                aria-expanded=move || if ui.get().menu_open { "true" } else { "false" }
                on:click=on_menu_click
            >
                {move || ui.get().menu_button_glyph()}
            </button>
            <nav class=move || ui.get().nav_class()>{links}</nav>
            <button class="login-btn">{LOGIN_LABEL}</button>
        </header>
    }
}
