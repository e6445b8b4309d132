//! Local UI chrome state (mobile navigation).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the contact form state so the
//! header can evolve independently of the form. Nothing here survives a reload.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the header navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the collapsed mobile navigation is expanded.
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Selecting a nav link always collapses the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Accessible name of the menu button.
    #[must_use]
    pub fn menu_button_label(self) -> &'static str {
        if self.menu_open { "Close menu" } else { "Open menu" }
    }

    #[must_use]
    pub fn menu_button_glyph(self) -> &'static str {
        if self.menu_open { "\u{2715}" } else { "\u{2630}" }
    }

    /// Class applied to `<nav>`; `active` reveals it on narrow screens.
    #[must_use]
    pub fn nav_class(self) -> &'static str {
        if self.menu_open { "active" } else { "" }
    }
}
