//! Single checkbox bound to a boolean field.

use dioxus::prelude::*;
use essential_core::field::InlineLayout;
use essential_core::{merge_classes, FieldValue};

use super::label::{FieldLabel, FormMessage};
use super::provider::use_field;

/// Properties for the CheckboxField component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxFieldProps {
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
    /// Stack checkbox and label vertically
    #[props(default = false)]
    pub column: bool,
    /// Spread checkbox and label to opposite edges
    #[props(default = false)]
    pub long_gap: bool,
    /// Label first, checkbox second
    #[props(default = false)]
    pub reverse: bool,
    #[props(default)]
    pub wrapper_class: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Checkbox bound to a boolean field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CheckboxField { name: "is_active", label: "Is Active" }
/// }
/// ```
#[component]
pub fn CheckboxField(props: CheckboxFieldProps) -> Element {
    let field = use_field(&props.name);
    let checked = field.value().as_bool();
    let error = field.error();

    let layout = InlineLayout {
        column: props.column,
        long_gap: props.long_gap,
        reverse: props.reverse,
    };
    let wrapper_class = layout.wrapper_class(props.wrapper_class.as_deref());
    let control_class = merge_classes(["checkbox", layout.control_order()]);
    let label_class = merge_classes([
        layout.label_order(),
        props.label_class.as_deref().unwrap_or(""),
    ]);
    let item_class = merge_classes(["space-y-2", props.class.as_deref().unwrap_or("")]);

    rsx! {
        div { class: "{item_class}",
            div { class: "{wrapper_class}",
                input {
                    id: "{props.name}",
                    class: "{control_class}",
                    r#type: "checkbox",
                    checked,
                    disabled: props.disabled,
                    "aria-invalid": error.is_some(),
                    onchange: move |evt: FormEvent| field.set(FieldValue::Bool(evt.checked())),
                }
                if let Some(label) = &props.label {
                    FieldLabel {
                        text: label.clone(),
                        html_for: props.name.clone(),
                        required: props.required,
                        invalid: error.is_some(),
                        class: label_class,
                    }
                }
            }
            FormMessage {
                name: props.name.clone(),
                message: error.clone(),
                class: "mt-1 ml-6 text-xs".to_string(),
            }
        }
    }
}
