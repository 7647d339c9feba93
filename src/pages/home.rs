//! Home page - typography showcase and a demo profile form.
//!
//! Every field adapter appears once, bound to its own field name.

use dioxus::prelude::*;
use essential_core::field::options;
use essential_core::form::{FieldValue, FormSchema, FormState, Rule};
use essential_core::InputType;
use essential_ui::{
    Button, ButtonVariant, CheckboxField, CheckboxGroupField, FormProvider, RadioGroupField,
    SelectField, SwitchField, TextField, Typography, TypographySlot, SHOWCASE_TEXT,
};
use essential_ui::{showcase_sizes, use_form, Size};

use crate::app::Route;

fn profile_form() -> FormState {
    let schema = FormSchema::new()
        .field("name", [Rule::required(), Rule::MinLength(2)])
        .field("email", [Rule::required(), Rule::Email])
        .field("age", [Rule::Numeric])
        .field("skills", [Rule::MinItems(1)])
        .field("plan", [Rule::required_with("Choose a plan")])
        .field("status", [Rule::required()])
        .field("terms", [Rule::required_with("Accept the terms to continue")]);

    FormState::new(schema).with_defaults([
        ("skills", FieldValue::List(Vec::new())),
        ("notifications", FieldValue::Bool(true)),
    ])
}

/// Home page component.
#[component]
pub fn Home() -> Element {
    let mut form = use_form(profile_form);
    let mut submitted = use_signal(|| Option::<String>::None);
    let searching = form.read().value("searching").as_bool();

    let on_submit = move |_: ()| match form.write().submit() {
        Ok(payload) => {
            tracing::info!(%payload, "profile saved");
            submitted.set(Some(payload.to_string()));
        }
        Err(errors) => {
            tracing::debug!(?errors, "profile has errors");
            submitted.set(None);
        }
    };

    let on_reset = move |_: ()| {
        form.write().reset();
        submitted.set(None);
    };

    rsx! {
        main { class: "page",
            header { class: "page-header",
                Typography { size: Size::Hero, "Essential UI is a reusable UI library." }
                Typography {
                    size: Size::S2,
                    as_child: move |slot: TypographySlot| rsx! {
                        Link { to: Route::Login {}, class: format!("{} link", slot.class), {slot.children} }
                    },
                    "Sign in \u{2192}"
                }
            }

            section { class: "showcase",
                Typography { size: Size::O1, class: "text-muted".to_string(), "Typography" }
                for size in showcase_sizes() {
                    div { key: "{size}", class: "showcase-row",
                        Typography { size: Size::C1, class: "text-muted w-12".to_string(), "{size}" }
                        Typography { size, "{SHOWCASE_TEXT}" }
                    }
                }
            }

            section { class: "card",
                Typography { size: Size::H2, "Profile" }
                FormProvider { form,
                    div { class: "flex flex-col gap-4",
                        TextField {
                            name: "name".to_string(),
                            label: "Name".to_string(),
                            placeholder: "Ada Lovelace".to_string(),
                            required: true,
                        }
                        TextField {
                            name: "email".to_string(),
                            label: "Email".to_string(),
                            input_type: InputType::Email,
                            placeholder: "ada@example.com".to_string(),
                            required: true,
                            icon: rsx! { "@" },
                        }
                        TextField {
                            name: "age".to_string(),
                            label: "Age".to_string(),
                            input_type: InputType::Number,
                            placeholder: "36".to_string(),
                        }
                        TextField {
                            name: "search".to_string(),
                            label: "Search".to_string(),
                            placeholder: "Search...".to_string(),
                            loading: searching,
                            action: move |_| {
                                form.write().set_value("search", FieldValue::text(""));
                            },
                        }
                        SwitchField {
                            name: "searching".to_string(),
                            label: "Simulate search in progress".to_string(),
                            long_gap: true,
                        }
                        CheckboxGroupField {
                            name: "skills".to_string(),
                            label: "Skills".to_string(),
                            options: options([("React", "react"), ("Vue", "vue"), ("Angular", "angular")]),
                        }
                        RadioGroupField {
                            name: "plan".to_string(),
                            label: "Plan".to_string(),
                            required: true,
                            options: options([("Monthly", "monthly"), ("Yearly", "yearly")]),
                            column_group: false,
                            row_group: true,
                        }
                        RadioGroupField {
                            name: "degenerate".to_string(),
                            label: "Single option".to_string(),
                            options: options([("Only", "only")]),
                        }
                        SelectField {
                            name: "status".to_string(),
                            label: "Published Status".to_string(),
                            required: true,
                            options: options([("Draft", "draft"), ("Published", "published"), ("Archived", "archived")]),
                        }
                        SwitchField {
                            name: "notifications".to_string(),
                            label: "Email notifications".to_string(),
                            long_gap: true,
                        }
                        CheckboxField {
                            name: "terms".to_string(),
                            label: "I accept the terms".to_string(),
                            required: true,
                        }
                        div { class: "flex gap-2",
                            Button { onclick: on_submit, "Save" }
                            Button { variant: ButtonVariant::Outline, onclick: on_reset, "Reset" }
                        }
                    }
                }
                if let Some(payload) = submitted() {
                    pre { class: "payload", "{payload}" }
                }
            }
        }
    }
}
