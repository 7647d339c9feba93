//! Checkbox group bound to an array-valued field.

use dioxus::prelude::*;
use essential_core::field::checkbox_group_class;
use essential_core::{merge_classes, FieldOption};

use super::label::{FieldLabel, FormMessage};
use super::provider::use_field;

/// Properties for the CheckboxGroupField component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxGroupFieldProps {
    /// Field name in the enclosing form
    pub name: String,
    /// Choices; each checked option's value is kept in the field's list
    pub options: Vec<FieldOption>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub label_class: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Stack options vertically (default) or wrap them in a row
    #[props(default = true)]
    pub column: bool,
    #[props(default)]
    pub group_wrapper_class: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// A set of checkboxes writing the checked values, in check order, to one
/// list field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CheckboxGroupField {
///         name: "skills".to_string(),
///         label: "Skills".to_string(),
///         options: options([("React", "react"), ("Vue", "vue"), ("Angular", "angular")]),
///     }
/// }
/// ```
#[component]
pub fn CheckboxGroupField(props: CheckboxGroupFieldProps) -> Element {
    let field = use_field(&props.name);
    let selected = field.value().as_list().to_vec();
    let error = field.error();

    let fieldset_class = checkbox_group_class(props.column, props.group_wrapper_class.as_deref());
    let item_class = merge_classes(["space-y-2", props.class.as_deref().unwrap_or("")]);

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
            fieldset {
                id: "{props.name}",
                class: "{fieldset_class}",
                for option in props.options.iter() {
                    {
                        let id = format!("{}-{}", props.name, option.value);
                        let is_checked = selected.contains(&option.value);
                        let value = option.value.clone();
                        let field = field.clone();
                        rsx! {
                            div {
                                key: "{option.value}",
                                class: "flex items-center space-x-2",
                                input {
                                    id: "{id}",
                                    class: "checkbox",
                                    r#type: "checkbox",
                                    checked: is_checked,
                                    disabled: props.disabled,
                                    onchange: move |evt: FormEvent| field.toggle(&value, evt.checked()),
                                }
                                label {
                                    r#for: "{id}",
                                    class: "text-sm leading-none font-medium",
                                    "{option.text}"
                                }
                            }
                        }
                    }
                }
            }
            FormMessage { name: props.name.clone(), message: error.clone() }
        }
    }
}
