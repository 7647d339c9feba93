//! Form context provider and field binding hooks.
//!
//! ## Usage
//!
//! ```ignore
//! // In a page
//! let form = use_form(|| FormState::new(schema));
//! rsx! {
//!     FormProvider { form,
//!         TextField { name: "email", label: "Email" }
//!     }
//! }
//!
//! // Inside a field adapter
//! let field = use_field(&props.name);
//! field.set(FieldValue::text("ada@example.com"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use essential_core::form::FieldClaim;
use essential_core::{FieldValue, FormState};

/// Hook creating the signal that holds a form's state.
pub fn use_form(init: impl FnOnce() -> FormState) -> Signal<FormState> {
    use_signal(init)
}

/// Makes a form's state available to every field adapter below it.
#[component]
pub fn FormProvider(form: Signal<FormState>, children: Element) -> Element {
    use_context_provider(|| form);

    rsx! {
        {children}
    }
}

/// Hook to access the enclosing form's state.
///
/// Panics (through `use_context`) when no [`FormProvider`] is above the
/// caller.
pub fn use_form_context() -> Signal<FormState> {
    use_context::<Signal<FormState>>()
}

/// One adapter's view of its field: value and message getters plus the
/// change call.
#[derive(Clone)]
pub struct FieldBinding {
    form: Signal<FormState>,
    name: Rc<str>,
}

impl FieldBinding {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value (subscribes the calling component).
    pub fn value(&self) -> FieldValue {
        self.form.read().value(&self.name).clone()
    }

    /// Current validation message (subscribes the calling component).
    pub fn error(&self) -> Option<String> {
        self.form.read().error(&self.name).map(str::to_string)
    }

    /// Change notification: write a new value for this field.
    pub fn set(&self, value: FieldValue) {
        let mut form = self.form;
        form.write().set_value(&self.name, value);
    }

    /// Change notification for array-valued fields.
    pub fn toggle(&self, option: &str, checked: bool) {
        let mut form = self.form;
        form.write().toggle_option(&self.name, option, checked);
    }
}

/// Hook binding the calling adapter to `name` in the enclosing form.
///
/// The binding is claimed after the first render and released when the
/// adapter unmounts. A second live adapter on the same name is logged, and
/// its unmount leaves the first adapter's binding alone.
pub fn use_field(name: &str) -> FieldBinding {
    let mut form = use_form_context();
    let name: Rc<str> = use_hook(|| Rc::from(name));
    let claim: Rc<RefCell<Option<FieldClaim>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let bind_name = name.clone();
    let bind_claim = claim.clone();
    use_effect(move || {
        let claimed = form.write().claim(&bind_name);
        *bind_claim.borrow_mut() = Some(claimed);
    });

    let drop_claim = claim.clone();
    use_drop(move || {
        if let Some(claimed) = drop_claim.borrow_mut().take() {
            form.write().release(&claimed);
        }
    });

    FieldBinding { form, name }
}
