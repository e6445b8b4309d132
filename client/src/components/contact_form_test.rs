use super::*;

fn render(state: ContactFormState) -> String {
    Owner::new().with(|| {
        provide_context(RwSignal::new(state));
        view! { <ContactSection/> }.to_html()
    })
}

#[test]
fn pristine_form_renders_without_errors() {
    let html = render(ContactFormState::default());
    assert!(html.contains("<form"));
    assert!(html.contains(SUBMIT_LABEL));
    assert!(!html.contains("class=\"error\""));
    assert!(!html.contains("aria-invalid=\"true\""));
    assert!(!html.contains("Thank you for your message!"));
}

#[test]
fn failed_submit_marks_only_invalid_fields() {
    let mut state = ContactFormState::default();
    state.submit();
    state.edit(Field::Name, "J".to_owned());

    let html = render(state);

    assert!(html.contains("id=\"email-error\""));
    assert!(html.contains("id=\"message-error\""));
    assert!(!html.contains("id=\"name-error\""));
    assert!(html.contains("Email is required"));
    assert!(!html.contains("Name is required"));
    assert_eq!(html.matches("aria-invalid=\"true\"").count(), 2);
}

#[test]
fn failed_submit_shows_invalid_email_message() {
    let mut state = ContactFormState::default();
    state.edit(Field::Name, "Jane".to_owned());
    state.edit(Field::Email, "jane@example".to_owned());
    state.edit(Field::Message, "Hi".to_owned());
    state.submit();

    let html = render(state);

    assert!(html.contains("Invalid email address"));
    assert_eq!(html.matches("aria-invalid=\"true\"").count(), 1);
}

#[test]
fn accepted_submit_replaces_form_with_thank_you() {
    let mut state = ContactFormState::default();
    state.edit(Field::Name, "Jane".to_owned());
    state.edit(Field::Email, "jane@example.com".to_owned());
    state.edit(Field::Message, "Hi".to_owned());
    assert!(state.submit());

    let html = render(state);

    assert!(html.contains("Thank you for your message!"));
    assert!(html.contains(CONTACT_HEADING));
    assert!(!html.contains("<form"));
}
