//! Select bound to a text field.

use dioxus::prelude::*;
use essential_core::{merge_classes, FieldOption, FieldValue};

use super::label::{FieldLabel, FormMessage};
use super::provider::use_field;

/// Properties for the SelectField component
#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    /// Field name in the enclosing form
    pub name: String,
    pub options: Vec<FieldOption>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub label_class: Option<String>,
    /// Shown while nothing is selected
    #[props(default = "Select an item".to_string())]
    pub placeholder: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub class: Option<String>,
    /// Classes for the select element itself
    #[props(default)]
    pub input_class: Option<String>,
}

/// Drop-down writing the chosen option's value to one field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SelectField {
///         name: "published_status".to_string(),
///         label: "Published Status".to_string(),
///         options: published_options(),
///     }
/// }
/// ```
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let field = use_field(&props.name);
    let current = field.value().as_text().to_string();
    let error = field.error();

    let item_class = merge_classes(["space-y-2", props.class.as_deref().unwrap_or("")]);
    let select_class = merge_classes([
        "select w-full",
        props.input_class.as_deref().unwrap_or(""),
    ]);
    let onchange_field = field.clone();

    rsx! {
        div { class: "{item_class}",
            if let Some(label) = &props.label {
                FieldLabel {
                    text: label.clone(),
                    html_for: props.name.clone(),
                    required: props.required,
                    invalid: error.is_some(),
                    class: props.label_class.clone(),
                }
            }
            select {
                id: "{props.name}",
                class: "{select_class}",
                disabled: props.disabled,
                "aria-invalid": error.is_some(),
                onchange: move |evt: FormEvent| onchange_field.set(FieldValue::text(evt.value())),
                option {
                    value: "",
                    disabled: true,
                    selected: current.is_empty(),
                    "{props.placeholder}"
                }
                for option in props.options.iter() {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: current == option.value,
                        "{option.text}"
                    }
                }
            }
            FormMessage { name: props.name.clone(), message: error.clone() }
        }
    }
}
