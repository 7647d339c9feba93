//! Login page - email sign-in form.

use dioxus::prelude::*;
use essential_core::form::{FieldValue, FormSchema, FormState, Rule, ValidationMode};
use essential_core::InputType;
use essential_ui::{
    use_form, Button, CheckboxField, FormProvider, LoadingSpinner, Size, TextField, Typography,
    TypographySlot,
};

use crate::app::Route;

fn login_form() -> FormState {
    let schema = FormSchema::new()
        .field("email", [Rule::required_with("Email is required"), Rule::Email])
        .field("workspace", [Rule::required(), Rule::MinLength(3), Rule::MaxLength(32)]);

    FormState::new(schema)
        .mode(ValidationMode::OnChange)
        .with_defaults([("remember", FieldValue::Bool(true))])
}

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut form = use_form(login_form);
    let mut signing_in = use_signal(|| false);

    let on_submit = move |_: ()| {
        if let Ok(payload) = form.write().submit() {
            tracing::info!(%payload, "sign-in requested");
            signing_in.set(true);
        }
    };

    rsx! {
        main { class: "page auth",
            section { class: "card",
                Typography { size: Size::H1, "Sign in" }
                Typography { size: Size::P2, class: "text-muted".to_string(),
                    "Use your work email to continue."
                }
                FormProvider { form,
                    div { class: "flex flex-col gap-4",
                        TextField {
                            name: "email".to_string(),
                            label: "Email".to_string(),
                            input_type: InputType::Email,
                            placeholder: "you@company.com".to_string(),
                            required: true,
                            disabled: signing_in(),
                        }
                        TextField {
                            name: "workspace".to_string(),
                            label: "Workspace".to_string(),
                            placeholder: "acme".to_string(),
                            required: true,
                            disabled: signing_in(),
                            action: move |_| {
                                form.write().set_value("workspace", FieldValue::text(""));
                            },
                        }
                        CheckboxField {
                            name: "remember".to_string(),
                            label: "Remember me".to_string(),
                            disabled: signing_in(),
                        }
                        Button { onclick: on_submit, disabled: signing_in(),
                            if signing_in() {
                                LoadingSpinner {}
                            }
                            "Continue"
                        }
                    }
                }
                Typography {
                    size: Size::C1,
                    as_child: move |slot: TypographySlot| rsx! {
                        Link { to: Route::Home {}, class: format!("{} link", slot.class), {slot.children} }
                    },
                    "\u{2190} Back to components"
                }
            }
        }
    }
}
