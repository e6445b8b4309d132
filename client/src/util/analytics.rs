//! Google Analytics (`gtag.js`) tag for the document head.
//!
//! The tag is an opaque third party: nothing in the page reads its state, and
//! the page renders and validates identically when the script is blocked.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

/// Measurement ID of the production property.
pub const MEASUREMENT_ID: &str = "G-SNZ7G7X9F0";

const LOADER_BASE: &str = "https://www.googletagmanager.com/gtag/js";

/// URL of the async `gtag.js` loader for `measurement_id`.
#[must_use]
pub fn loader_src(measurement_id: &str) -> String {
    let encoded: String = measurement_id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    format!("{LOADER_BASE}?id={encoded}")
}

/// Inline bootstrap that queues the `js` and `config` commands.
///
/// The ID is emitted as a JSON string literal so it cannot terminate the
/// surrounding script.
#[must_use]
pub fn config_snippet(measurement_id: &str) -> String {
    let id_literal = serde_json::to_string(measurement_id)
        .unwrap_or_else(|_| "\"\"".to_owned())
        .replace("</", "<\\/");
    format!(
        "window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         gtag('config', {id_literal});\n"
    )
}
