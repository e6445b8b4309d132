//! Reactive state records shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each record is a plain struct held in an `RwSignal` provided by `App`.
//! Components read and update them; none of it outlives the page.

pub mod contact;
pub mod ui;
