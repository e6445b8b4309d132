//! Landing page: the only route of the site.

use leptos::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::feature_grid::FeatureGrid;
use crate::components::hero::Hero;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::testimonial::TestimonialSection;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SiteHeader/>
        <main>
            <Hero/>
            <FeatureGrid/>
            <TestimonialSection/>
            <ContactSection/>
        </main>
        <SiteFooter/>
    }
}
