//! Radio group bound to a text field.
//!
//! A group with fewer than two options renders an inline notice in place
//! of the control.

use dioxus::prelude::*;
use essential_core::field::{check_radio_options, radio_group_class, InlineLayout};
use essential_core::{merge_classes, FieldOption, FieldValue};

use super::label::{FieldLabel, FormMessage};
use super::provider::use_field;

/// Properties for the RadioGroupField component
#[derive(Clone, PartialEq, Props)]
pub struct RadioGroupFieldProps {
    /// Field name in the enclosing form
    pub name: String,
    /// At least two choices
    pub options: Vec<FieldOption>,
    #[props(default = Some("Question Type".to_string()))]
    pub label: Option<String>,
    #[props(default)]
    pub label_class: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Stack each radio above its label
    #[props(default = false)]
    pub column: bool,
    #[props(default = false)]
    pub long_gap: bool,
    #[props(default = false)]
    pub reverse: bool,
    /// Lay the options out in a column
    #[props(default = true)]
    pub column_group: bool,
    /// Lay the options out in a row
    #[props(default = false)]
    pub row_group: bool,
    #[props(default)]
    pub group_wrapper_class: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Radio buttons writing the chosen option's value to one field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     RadioGroupField {
///         name: "plan".to_string(),
///         label: "Plan".to_string(),
///         options: options([("Monthly", "monthly"), ("Yearly", "yearly")]),
///         row_group: true,
///         column_group: false,
///     }
/// }
/// ```
#[component]
pub fn RadioGroupField(props: RadioGroupFieldProps) -> Element {
    if let Err(err) = check_radio_options(&props.options) {
        tracing::warn!(field = %props.name, given = props.options.len(), "radio group needs more options");
        return rsx! {
            div { class: "text-red-500", "{err}" }
        };
    }

    rsx! {
        RadioGroupControl { group: props }
    }
}

/// The bound control; mounted only once the options are usable, so a group
/// showing the notice never claims its field name.
#[component]
fn RadioGroupControl(group: RadioGroupFieldProps) -> Element {
    let props = group;
    let field = use_field(&props.name);

    let current = field.value().as_text().to_string();
    let error = field.error();

    let layout = InlineLayout {
        column: props.column,
        long_gap: props.long_gap,
        reverse: props.reverse,
    };
    let group_class = radio_group_class(
        props.column_group,
        props.row_group,
        props.class.as_deref(),
    );
    let item_class = layout.wrapper_class(props.group_wrapper_class.as_deref());
    let control_class = merge_classes(["radio", layout.control_order()]);
    let option_label_class = merge_classes(["text-sm leading-none", layout.label_order()]);

    rsx! {
        div { class: "space-y-2",
            if let Some(label) = &props.label {
                FieldLabel {
                    text: label.clone(),
                    required: props.required,
                    invalid: error.is_some(),
                    class: props.label_class.clone(),
                }
            }
            div {
                class: "{group_class}",
                role: "radiogroup",
                "aria-label": props.label.clone().unwrap_or_default(),
                for option in props.options.iter() {
                    {
                        let id = format!("{}-{}", props.name, option.value);
                        let is_selected = current == option.value;
                        let value = option.value.clone();
                        let field = field.clone();
                        rsx! {
                            div { key: "{option.value}", class: "{item_class}",
                                input {
                                    id: "{id}",
                                    class: "{control_class}",
                                    r#type: "radio",
                                    name: "{props.name}",
                                    value: "{option.value}",
                                    checked: is_selected,
                                    disabled: props.disabled,
                                    onchange: move |_| field.set(FieldValue::text(value.clone())),
                                }
                                label { r#for: "{id}", class: "{option_label_class}", "{option.text}" }
                            }
                        }
                    }
                }
            }
            FormMessage { name: props.name.clone(), message: error.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::form::{use_form, FormProvider};
    use essential_core::field::options;
    use essential_core::FormState;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn single_option_group() -> Element {
        let form = use_form(FormState::default);
        rsx! {
            FormProvider { form,
                RadioGroupField {
                    name: "plan".to_string(),
                    options: options([("Monthly", "monthly")]),
                }
            }
        }
    }

    fn two_option_group() -> Element {
        let form = use_form(FormState::default);
        rsx! {
            FormProvider { form,
                RadioGroupField {
                    name: "plan".to_string(),
                    options: options([("Monthly", "monthly"), ("Yearly", "yearly")]),
                }
            }
        }
    }

    #[test]
    fn single_option_renders_notice_only() {
        let html = render(single_option_group);
        assert!(html.contains("Please provide at least two options for the radio group."));
        assert!(!html.contains("type=\"radio\""));
        assert!(!html.contains("radiogroup"));
    }

    #[test]
    fn two_options_render_radios() {
        let html = render(two_option_group);
        assert!(html.contains("role=\"radiogroup\""));
        assert_eq!(html.matches("type=\"radio\"").count(), 2);
        assert!(html.contains("id=\"plan-yearly\""));
        assert!(!html.contains("Please provide"));
    }
}
