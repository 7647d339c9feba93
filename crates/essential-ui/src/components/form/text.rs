//! Text input bound to a text field.
//!
//! The trailing edge shows at most one of: a loading spinner, an action
//! button, or a static icon. See [`Trailing::resolve`] for the precedence.

use dioxus::prelude::*;
use essential_core::{merge_classes, FieldValue, InputType, Trailing};

use super::label::{FieldLabel, FormMessage};
use super::provider::use_field;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::loading_spinner::LoadingSpinner;

/// Default glyph for the action button.
pub const CLOSE_GLYPH: &str = "\u{00D7}";

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Field name in the enclosing form
    pub name: String,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub label_class: Option<String>,
    #[props(default)]
    pub input_type: InputType,
    #[props(default = "Input".to_string())]
    pub placeholder: String,
    #[props(default = false)]
    pub required: bool,
    /// Trailing action button handler
    #[props(default)]
    pub action: Option<EventHandler<()>>,
    /// Trailing icon; used inside the action button when `action` is set
    #[props(default)]
    pub icon: Option<Element>,
    /// Show a spinner instead of any trailing action or icon
    #[props(default = false)]
    pub loading: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub input_class: Option<String>,
    #[props(default)]
    pub icon_class: Option<String>,
}

/// Single-line input bound to a text field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextField { name: "name".to_string(), label: "Name".to_string() }
///
///     TextField {
///         name: "search".to_string(),
///         placeholder: "Search...".to_string(),
///         loading: searching(),
///         action: move |_| clear_search(),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let field = use_field(&props.name);
    let current = field.value().as_text().to_string();
    let error = field.error();

    let trailing = Trailing::resolve(
        props.loading,
        props.disabled,
        props.action.is_some(),
        props.icon.is_some(),
    );
    let item_class = merge_classes(["space-y-2", props.class.as_deref().unwrap_or("")]);
    let input_class = merge_classes([
        "input w-full",
        if props.action.is_some() { "pr-12" } else { "" },
        props.input_class.as_deref().unwrap_or(""),
    ]);
    let icon_class = props.icon_class.clone().unwrap_or_default();
    let oninput_field = field.clone();

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
            div { class: "relative flex items-center gap-2",
                input {
                    id: "{props.name}",
                    name: "{props.name}",
                    class: "{input_class}",
                    r#type: props.input_type.as_str(),
                    placeholder: "{props.placeholder}",
                    value: "{current}",
                    disabled: props.disabled,
                    "aria-invalid": error.is_some(),
                    oninput: move |evt: FormEvent| oninput_field.set(FieldValue::text(evt.value())),
                }
                {render_trailing(trailing, props.action, props.icon.clone(), icon_class)}
            }
            FormMessage {
                name: props.name.clone(),
                message: error.clone(),
                class: "line-clamp-1 text-xs".to_string(),
            }
        }
    }
}

fn render_trailing(
    trailing: Trailing,
    action: Option<EventHandler<()>>,
    icon: Option<Element>,
    icon_class: String,
) -> Element {
    match trailing {
        Trailing::Spinner => rsx! {
            LoadingSpinner { class: "absolute right-4".to_string() }
        },
        Trailing::Action => rsx! {
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Sm,
                class: merge_classes([
                    "absolute top-1/2 right-0.5 -translate-y-1/2 text-red-500",
                    icon_class.as_str(),
                ]),
                onclick: move |_| {
                    if let Some(action) = action {
                        action.call(());
                    }
                },
                {icon.unwrap_or_else(|| rsx! { "{CLOSE_GLYPH}" })}
            }
        },
        Trailing::Icon => rsx! {
            div {
                class: merge_classes([
                    "absolute top-1/2 right-2 flex -translate-y-1/2 text-base",
                    icon_class.as_str(),
                ]),
                {icon.unwrap_or_else(|| rsx! {})}
            }
        },
        Trailing::None => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::form::{use_form, FormProvider};
    use essential_core::FormState;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn loading_field() -> Element {
        let form = use_form(FormState::default);
        rsx! {
            FormProvider { form,
                TextField {
                    name: "search".to_string(),
                    loading: true,
                    action: move |_| {},
                    icon: rsx! { span { class: "search-glyph" } },
                }
            }
        }
    }

    fn disabled_action_field() -> Element {
        let form = use_form(FormState::default);
        rsx! {
            FormProvider { form,
                TextField {
                    name: "search".to_string(),
                    disabled: true,
                    action: move |_| {},
                }
            }
        }
    }

    fn action_field() -> Element {
        let form = use_form(FormState::default);
        rsx! {
            FormProvider { form,
                TextField { name: "search".to_string(), action: move |_| {} }
            }
        }
    }

    fn icon_field() -> Element {
        let form = use_form(FormState::default);
        rsx! {
            FormProvider { form,
                TextField {
                    name: "search".to_string(),
                    icon: rsx! { span { class: "search-glyph" } },
                }
            }
        }
    }

    #[test]
    fn loading_shows_spinner_only() {
        let html = render(loading_field);
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("<button"));
        assert!(!html.contains("search-glyph"));
    }

    #[test]
    fn disabled_hides_action() {
        let html = render(disabled_action_field);
        assert!(!html.contains("<button"));
        assert!(!html.contains("animate-spin"));
    }

    #[test]
    fn action_defaults_to_close_glyph() {
        let html = render(action_field);
        assert!(html.contains("<button"));
        assert!(html.contains(CLOSE_GLYPH));
        assert!(html.contains("pr-12"));
    }

    #[test]
    fn icon_without_action_is_static() {
        let html = render(icon_field);
        assert!(html.contains("search-glyph"));
        assert!(!html.contains("<button"));
    }
}
