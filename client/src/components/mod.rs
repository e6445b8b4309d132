//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page sections, reading/writing shared state
//! from Leptos context providers and copy from `content`.

pub mod contact_form;
pub mod feature_grid;
pub mod hero;
pub mod site_footer;
pub mod site_header;
pub mod testimonial;
