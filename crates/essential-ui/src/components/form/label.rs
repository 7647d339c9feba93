//! Field label and message slot shared by every adapter.

use dioxus::prelude::*;
use essential_core::merge_classes;

const LABEL_BASE: &str = "text-sm font-medium leading-none";
const MESSAGE_BASE: &str = "text-sm font-medium text-red-500";

/// Glyph marking a field as required. Purely visual.
#[component]
pub fn RequiredSign() -> Element {
    rsx! {
        span { class: "ml-1 text-red-500", "aria-hidden": "true", "*" }
    }
}

/// Properties for the FieldLabel component
#[derive(Clone, PartialEq, Props)]
pub struct FieldLabelProps {
    /// Label text
    pub text: String,
    /// Id of the control this label describes
    #[props(default)]
    pub html_for: Option<String>,
    /// Append the required glyph
    #[props(default = false)]
    pub required: bool,
    /// Field currently has a validation message
    #[props(default = false)]
    pub invalid: bool,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn FieldLabel(props: FieldLabelProps) -> Element {
    let class = merge_classes([
        LABEL_BASE,
        if props.invalid { "text-red-500" } else { "" },
        props.class.as_deref().unwrap_or(""),
    ]);

    rsx! {
        label {
            class: "{class}",
            r#for: props.html_for.as_deref().unwrap_or(""),
            span { "{props.text}" }
            if props.required {
                RequiredSign {}
            }
        }
    }
}

/// Message slot beneath a field. Always rendered; empty when the field has
/// no message.
#[component]
pub fn FormMessage(
    name: String,
    #[props(default)] message: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = merge_classes([MESSAGE_BASE, class.as_deref().unwrap_or("")]);
    let text = message.unwrap_or_default();

    rsx! {
        p {
            id: "{name}-message",
            class: "{class}",
            role: "alert",
            "{text}"
        }
    }
}
