//! Page footer: brand block, social icons, sitemap columns, copyright.

use leptos::prelude::*;

use crate::content::{BRAND, COPYRIGHT, FOOTER_COLUMNS, FOOTER_TAGLINE, FooterColumn, SOCIAL_LINKS};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let socials = SOCIAL_LINKS
        .iter()
        .map(|social| {
            view! {
                <a href="#" aria-label=social.label class="social-icon">
                    {social.symbol}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer>
            <div class="footer-left">
                <h2>{BRAND}</h2>
                <p>{FOOTER_TAGLINE}</p>
                <div>{socials}</div>
            </div>
            <div class="footer-columns">
                {FOOTER_COLUMNS.iter().map(|column| view! { <FooterLinks column=*column/> }).collect_view()}
            </div>
            <div class="footer-bottom">{COPYRIGHT}</div>
        </footer>
    }
}

#[component]
fn FooterLinks(column: FooterColumn) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h3>{column.heading}</h3>
            {column
                .links
                .iter()
                .map(|text| view! { <a href="#" class="footer-link">{*text}</a> })
                .collect_view()}
        </div>
    }
}
