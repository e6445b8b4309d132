//! Customer testimonial block.

use leptos::prelude::*;

use crate::content::TESTIMONIAL;

#[component]
pub fn TestimonialSection() -> impl IntoView {
    let t = TESTIMONIAL;
    view! {
        <section id="testimonial" class="testimonial-section">
            <h2>{t.heading}</h2>
            <blockquote class="testimonial-quote">{t.quote}</blockquote>
            <div class="author-name">{t.author}</div>
            <div class="author-title">{t.author_title}</div>
            <div class="stars" aria-label=t.rating_label()>{t.star_glyphs()}</div>
        </section>
    }
}
