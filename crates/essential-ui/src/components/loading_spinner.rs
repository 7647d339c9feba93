//! Loading spinner.

use dioxus::prelude::*;
use essential_core::class::with_override;

const SPINNER_BASE: &str = "h-5 w-5 animate-spin";

/// Spinning loader glyph
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LoadingSpinner { class: "absolute right-4".to_string() }
/// }
/// ```
#[component]
pub fn LoadingSpinner(#[props(default)] class: Option<String>) -> Element {
    let class = with_override(SPINNER_BASE, class.as_deref());

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            role: "status",
            "aria-label": "Loading",
            path { d: "M21 12a9 9 0 1 1-6.219-8.56" }
        }
    }
}
