//! Switch bound to a boolean field.

use dioxus::prelude::*;
use essential_core::field::InlineLayout;
use essential_core::{merge_classes, FieldValue};

use super::label::{FieldLabel, FormMessage};
use super::provider::use_field;

/// Properties for the SwitchField component
#[derive(Clone, PartialEq, Props)]
pub struct SwitchFieldProps {
    /// Field name in the enclosing form
    pub name: String,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub label_class: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub column: bool,
    #[props(default = false)]
    pub long_gap: bool,
    #[props(default = false)]
    pub reverse: bool,
    #[props(default)]
    pub wrapper_class: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// On/off toggle bound to a boolean field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SwitchField { name: "notifications".to_string(), label: "Email notifications".to_string(), long_gap: true }
/// }
/// ```
#[component]
pub fn SwitchField(props: SwitchFieldProps) -> Element {
    let field = use_field(&props.name);
    let checked = field.value().as_bool();
    let error = field.error();

    let layout = InlineLayout {
        column: props.column,
        long_gap: props.long_gap,
        reverse: props.reverse,
    };
    let wrapper_class = layout.wrapper_class(props.wrapper_class.as_deref());
    let switch_class = merge_classes([
        "switch",
        if checked { "switch-on" } else { "" },
        layout.control_order(),
    ]);
    let label_class = merge_classes([
        layout.label_order(),
        props.label_class.as_deref().unwrap_or(""),
    ]);
    let item_class = merge_classes(["space-y-2", props.class.as_deref().unwrap_or("")]);
    let onclick_field = field.clone();

    rsx! {
        div { class: "{item_class}",
            div { class: "{wrapper_class}",
                button {
                    id: "{props.name}",
                    class: "{switch_class}",
                    r#type: "button",
                    role: "switch",
                    "aria-checked": if checked { "true" } else { "false" },
                    "data-state": if checked { "checked" } else { "unchecked" },
                    disabled: props.disabled,
                    onclick: move |_| onclick_field.set(FieldValue::Bool(!checked)),
                    span { class: "switch-thumb" }
                }
                if let Some(label) = &props.label {
                    FieldLabel {
                        text: label.clone(),
                        html_for: props.name.clone(),
                        required: props.required,
                        invalid: error.is_some(),
                        class: label_class.clone(),
                    }
                }
            }
            FormMessage {
                name: props.name.clone(),
                message: error.clone(),
                class: "line-clamp-1 text-xs".to_string(),
            }
        }
    }
}
