//! Field adapter building blocks.
//!
//! The rendering decisions every field adapter makes (which trailing slot a
//! text input shows, whether a radio group has enough options, what classes
//! a layout flag combination produces) are kept here as plain functions.

use serde::{Deserialize, Serialize};

use crate::class::merge_classes;
use crate::error::{FormError, FormResult};

/// Smallest option count a radio group accepts.
pub const MIN_RADIO_OPTIONS: usize = 2;

/// A selectable choice in a group control.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FieldOption {
    /// Display text
    pub text: String,
    /// Value written to the form state
    pub value: String,
}

impl FieldOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// Convenience for building option lists from `(text, value)` pairs.
pub fn options<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<FieldOption> {
    pairs
        .into_iter()
        .map(|(text, value)| FieldOption::new(text, value))
        .collect()
}

/// Reject radio groups that would not offer a real choice.
pub fn check_radio_options(options: &[FieldOption]) -> FormResult<()> {
    if options.len() < MIN_RADIO_OPTIONS {
        return Err(FormError::TooFewOptions {
            required: MIN_RADIO_OPTIONS,
            given: options.len(),
        });
    }
    Ok(())
}

/// Apply a checkbox-group toggle to the current selection.
///
/// Checking appends at the end, unchecking removes; untouched values keep
/// their order. Checking a value already present changes nothing.
pub fn toggle_choice(current: &[String], value: &str, checked: bool) -> Vec<String> {
    if checked {
        let mut next = current.to_vec();
        if !next.iter().any(|v| v == value) {
            next.push(value.to_string());
        }
        next
    } else {
        current.iter().filter(|v| *v != value).cloned().collect()
    }
}

/// Input subtypes accepted by the text field.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Number,
}

impl InputType {
    /// Value of the `type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Number => "number",
        }
    }
}

/// What a text field shows at its trailing edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Trailing {
    /// Loading spinner; suppresses action and icon
    Spinner,
    /// Clickable action button
    Action,
    /// Non-interactive icon
    Icon,
    None,
}

impl Trailing {
    /// Pick the trailing slot from the field's flags.
    pub fn resolve(loading: bool, disabled: bool, has_action: bool, has_icon: bool) -> Self {
        if loading {
            Trailing::Spinner
        } else if has_action && !disabled {
            Trailing::Action
        } else if !has_action && has_icon {
            Trailing::Icon
        } else {
            Trailing::None
        }
    }
}

/// Layout flags shared by single-control fields (checkbox, switch, radio item).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct InlineLayout {
    /// Stack control and label vertically
    pub column: bool,
    /// Push control and label to opposite edges
    pub long_gap: bool,
    /// Put the label before the control
    pub reverse: bool,
}

impl InlineLayout {
    pub fn wrapper_class(&self, extra: Option<&str>) -> String {
        merge_classes([
            "relative flex items-center gap-2",
            if self.column { "flex-col items-start" } else { "" },
            if self.long_gap { "justify-between" } else { "" },
            extra.unwrap_or(""),
        ])
    }

    pub fn control_order(&self) -> &'static str {
        if self.reverse {
            "order-1"
        } else {
            "order-0"
        }
    }

    pub fn label_order(&self) -> &'static str {
        if self.reverse {
            "order-0"
        } else {
            "order-1"
        }
    }
}

/// Classes for the fieldset wrapping a checkbox group.
pub fn checkbox_group_class(column: bool, extra: Option<&str>) -> String {
    merge_classes([
        "flex gap-4",
        if column { "flex-col" } else { "flex-row flex-wrap" },
        extra.unwrap_or(""),
    ])
}

/// Classes for the radio group container.
pub fn radio_group_class(column_group: bool, row_group: bool, extra: Option<&str>) -> String {
    merge_classes([
        if column_group { "flex-col" } else { "" },
        if row_group { "flex-row" } else { "" },
        "flex gap-2",
        extra.unwrap_or(""),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn toggling_preserves_order() {
        let selection = toggle_choice(&[], "react", true);
        assert_eq!(selection, strings(&["react"]));

        let selection = toggle_choice(&selection, "vue", true);
        assert_eq!(selection, strings(&["react", "vue"]));

        let selection = toggle_choice(&selection, "react", false);
        assert_eq!(selection, strings(&["vue"]));
    }

    #[test]
    fn checking_twice_does_not_duplicate() {
        let selection = toggle_choice(&strings(&["vue"]), "vue", true);
        assert_eq!(selection, strings(&["vue"]));
    }

    #[test]
    fn radio_needs_two_options() {
        let one = options([("Yes", "yes")]);
        assert_eq!(
            check_radio_options(&one),
            Err(FormError::TooFewOptions {
                required: 2,
                given: 1
            })
        );
        assert!(check_radio_options(&[]).is_err());

        let two = options([("Yes", "yes"), ("No", "no")]);
        assert!(check_radio_options(&two).is_ok());
    }

    #[test]
    fn loading_suppresses_action_and_icon() {
        for disabled in [false, true] {
            for has_action in [false, true] {
                for has_icon in [false, true] {
                    assert_eq!(
                        Trailing::resolve(true, disabled, has_action, has_icon),
                        Trailing::Spinner
                    );
                }
            }
        }
    }

    #[test]
    fn action_shown_only_when_enabled() {
        assert_eq!(Trailing::resolve(false, false, true, false), Trailing::Action);
        assert_eq!(Trailing::resolve(false, false, true, true), Trailing::Action);
        assert_eq!(Trailing::resolve(false, true, true, true), Trailing::None);
    }

    #[test]
    fn icon_shown_without_action() {
        assert_eq!(Trailing::resolve(false, false, false, true), Trailing::Icon);
        assert_eq!(Trailing::resolve(false, true, false, true), Trailing::Icon);
        assert_eq!(Trailing::resolve(false, false, false, false), Trailing::None);
    }

    #[test]
    fn inline_layout_classes() {
        let layout = InlineLayout {
            column: true,
            long_gap: true,
            reverse: true,
        };
        assert_eq!(
            layout.wrapper_class(None),
            "relative flex gap-2 flex-col items-start justify-between"
        );
        assert_eq!(layout.control_order(), "order-1");
        assert_eq!(layout.label_order(), "order-0");

        let default = InlineLayout::default();
        assert_eq!(default.wrapper_class(None), "relative flex items-center gap-2");
        assert_eq!(default.control_order(), "order-0");
    }

    #[test]
    fn group_container_classes() {
        assert_eq!(checkbox_group_class(true, None), "flex gap-4 flex-col");
        assert_eq!(
            checkbox_group_class(false, Some("gap-2")),
            "flex flex-row flex-wrap gap-2"
        );
        assert_eq!(radio_group_class(true, false, None), "flex-col flex gap-2");
    }

    #[test]
    fn input_type_attribute() {
        assert_eq!(InputType::default().as_str(), "text");
        assert_eq!(InputType::Email.as_str(), "email");
        assert_eq!(InputType::Number.as_str(), "number");
    }
}
