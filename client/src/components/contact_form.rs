//! Contact section: the validated form, or the thank-you note once sent.
//!
//! SYSTEM CONTEXT
//! ==============
//! All behavior lives in `state::contact`; this module only wires DOM events
//! to `ContactFormState::edit` / `ContactFormState::submit` and renders the
//! resulting error record inline next to each field.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::content::{CONTACT_HEADING, SUBMIT_LABEL};
use crate::state::contact::{ContactFormState, Field, THANK_YOU_MESSAGE};

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactFormState>>();
    let submitted = move || contact.with(|c| c.submitted);

    view! {
        <section id="contact" class="contact-section">
            <h2>{CONTACT_HEADING}</h2>
            <Show when=submitted fallback=|| view! { <ContactForm/> }>
                <div class="contact-success" role="status">{THANK_YOU_MESSAGE}</div>
            </Show>
        </section>
    }
}

/// The form itself. Native browser validation is disabled so every rule is
/// reported the same way on every browser.
#[component]
fn ContactForm() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactFormState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        contact.update(|c| {
            c.submit();
        });

        #[cfg(feature = "hydrate")]
        contact.with_untracked(|c| {
            if c.submitted {
                log::debug!("contact form accepted");
            } else {
                let invalid: Vec<&str> = c.errors.fields().map(Field::as_str).collect();
                log::debug!("contact form rejected: invalid={invalid:?}");
            }
        });
    };

    view! {
        <form on:submit=on_submit novalidate=true>
            {Field::ALL.into_iter().map(|field| view! { <FormField field=field/> }).collect_view()}
            <button type="submit" class="submit-btn">{SUBMIT_LABEL}</button>
        </form>
    }
}

/// Labelled input plus its inline error span.
#[component]
fn FormField(field: Field) -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactFormState>>();

    let value = move || contact.with(|c| c.form.value(field).to_owned());
    let error = move || contact.with(|c| c.errors.get(field));
    let aria_invalid = move || if error().is_some() { "true" } else { "false" };
    let on_input =
        move |ev: leptos::ev::Event| contact.update(|c| c.edit(field, event_target_value(&ev)));

    let control = match field {
        Field::Message => view! {
            <textarea
                id=field.as_str()
                name=field.as_str()
                prop:value=value
                on:input=on_input
                aria-invalid=aria_invalid
                aria-describedby=field.error_id()
            ></textarea>
        }
        .into_any(),
        Field::Name | Field::Email => view! {
            <input
                id=field.as_str()
                type=field.input_type()
                name=field.as_str()
                prop:value=value
                on:input=on_input
                aria-invalid=aria_invalid
                aria-describedby=field.error_id()
            />
        }
        .into_any(),
    };

    view! {
        <label for=field.as_str()>
            {field.label()}
            {control}
        </label>
        <Show when=move || error().is_some()>
            <span id=field.error_id() class="error">
                {move || error().unwrap_or_default()}
            </span>
        </Show>
    }
}
