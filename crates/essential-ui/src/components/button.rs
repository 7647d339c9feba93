//! Button Components
//!
//! Button styles used by forms and pages:
//! - Primary: filled submit-style action
//! - Outline: bordered secondary action
//! - Ghost: borderless, used for inline field actions

use dioxus::prelude::*;
use essential_core::merge_classes;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    /// Returns the utility classes for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-primary text-white",
            ButtonVariant::Outline => "border bg-transparent",
            ButtonVariant::Ghost => "bg-transparent",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "h-9 px-4 py-2",
            ButtonSize::Sm => "h-8 px-3 text-xs",
        }
    }
}

const BUTTON_BASE: &str =
    "inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium btn";

/// Full class list for a variant/size pair plus caller overrides.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    merge_classes([
        BUTTON_BASE,
        variant.class(),
        size.class(),
        extra.unwrap_or(""),
    ])
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Ghost,
///         size: ButtonSize::Sm,
///         onclick: move |_| clear(),
///         "Clear"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
    }

    #[test]
    fn ghost_small_button_class() {
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Sm, None),
            "inline-flex items-center justify-center gap-2 rounded-md font-medium btn bg-transparent h-8 px-3 text-xs"
        );
    }

    #[test]
    fn caller_class_overrides_text_color() {
        let class = button_class(ButtonVariant::Primary, ButtonSize::Default, Some("text-red-500"));
        assert!(class.ends_with("text-red-500"));
        assert!(!class.contains("text-white"));
    }
}
