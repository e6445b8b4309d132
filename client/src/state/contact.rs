//! Contact form state: field values, inline validation errors, success flag.
//!
//! DESIGN
//! ======
//! Validation is a pure function over `ContactForm`, so the component's event
//! handlers reduce to single signal updates and every rule is testable without
//! a browser. Submission is synchronous and local: a clean validation pass
//! flips `submitted`, which is terminal for the lifetime of the page.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Shown in place of the form once a submission passes validation.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

/// `local@domain.tld`: no `@` or whitespace before the `@`, no whitespace
/// after it, at least one dot, and an ASCII-alphabetic final label of 2+
/// chars in either case.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@\S+\.[A-Za-z]{2,}$").expect("Invalid email regex"));

/// One input of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Render order of the form inputs.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Value of the `name`/`id` attributes on the input element.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name:",
            Field::Email => "Email:",
            Field::Message => "Message:",
        }
    }

    /// `type` attribute for single-line inputs; the message is a textarea.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Name | Field::Message => "text",
        }
    }

    /// Id of the inline error span, referenced by `aria-describedby`.
    #[must_use]
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "name-error",
            Field::Email => "email-error",
            Field::Message => "message-error",
        }
    }
}

/// Raw field values as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// Per-field validation messages. A field is present only while invalid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, &'static str>);

impl FormErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Invalid fields in render order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Returns `true` when `value` has the shape `local@domain.tld`.
///
/// The value is matched as-is; surrounding whitespace makes it invalid.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check every field and collect the messages for the invalid ones.
#[must_use]
pub fn validate(form: &ContactForm) -> FormErrors {
    let mut errors = FormErrors::default();
    if form.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }
    if form.email.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&form.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }
    if form.message.trim().is_empty() {
        errors.insert(Field::Message, MESSAGE_REQUIRED);
    }
    errors
}

/// Everything the contact section renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub errors: FormErrors,
    pub submitted: bool,
}

impl ContactFormState {
    /// Store a keystroke and drop the stale error for that field only.
    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    /// Validate and either record the errors or mark the form as sent.
    ///
    /// Returns `true` when the submission was accepted.
    pub fn submit(&mut self) -> bool {
        self.errors = validate(&self.form);
        let accepted = self.errors.is_empty();
        if accepted {
            self.submitted = true;
        }
        accepted
    }
}
