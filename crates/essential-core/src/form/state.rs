//! The per-form state record.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use super::schema::FormSchema;
use super::value::FieldValue;
use crate::error::{FormError, FormResult};
use crate::field::toggle_choice;

/// Validation messages keyed by field name.
pub type FormErrors = BTreeMap<String, String>;

/// When a field is validated as its value changes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ValidationMode {
    /// Validate on submit, then re-validate each field as it changes
    #[default]
    OnSubmit,
    /// Validate every change
    OnChange,
}

/// An adapter's hold on a field name, as returned by [`FormState::claim`].
///
/// Only an owning claim releases the name; a claim that lost to an
/// earlier adapter leaves that adapter's binding in place.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FieldClaim {
    name: String,
    owned: bool,
}

impl FieldClaim {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_owned(&self) -> bool {
        self.owned
    }
}

/// Values, messages and bindings for one form instance.
///
/// Each field name is owned by at most one adapter at a time (see
/// [`FormState::bind`]). Adapters touch only their own slot.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormState {
    schema: FormSchema,
    mode: ValidationMode,
    defaults: BTreeMap<String, FieldValue>,
    values: BTreeMap<String, FieldValue>,
    errors: FormErrors,
    bound: BTreeSet<String>,
    submitted: bool,
}

static EMPTY: FieldValue = FieldValue::Empty;

impl FormState {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            ..Self::default()
        }
    }

    /// Set default values; `reset` returns to these.
    pub fn with_defaults<I, K>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, FieldValue)>,
        K: Into<String>,
    {
        self.defaults = defaults.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.values = self.defaults.clone();
        self
    }

    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Current value of `name`; unset fields read as [`FieldValue::Empty`].
    pub fn value(&self, name: &str) -> &FieldValue {
        self.values.get(name).unwrap_or(&EMPTY)
    }

    /// Current validation message of `name`.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Write a new value from an adapter's change notification.
    pub fn set_value(&mut self, name: &str, value: FieldValue) {
        tracing::debug!(field = name, ?value, "field changed");
        self.values.insert(name.to_string(), value);

        if self.mode == ValidationMode::OnChange || self.submitted {
            self.validate_field(name);
        }
    }

    /// Check or uncheck one option of an array-valued field.
    pub fn toggle_option(&mut self, name: &str, option: &str, checked: bool) {
        let next = toggle_choice(self.value(name).as_list(), option, checked);
        self.set_value(name, FieldValue::List(next));
    }

    /// Validate one field, updating its message. Returns `true` when valid.
    pub fn validate_field(&mut self, name: &str) -> bool {
        match self.schema.validate(name, self.value(name)) {
            Some(message) => {
                self.errors.insert(name.to_string(), message);
                false
            }
            None => {
                self.errors.remove(name);
                true
            }
        }
    }

    /// Validate every field with rules. Returns `true` when all are valid.
    pub fn validate(&mut self) -> bool {
        let names: Vec<String> = self.schema.fields().map(str::to_string).collect();
        names
            .iter()
            .fold(true, |valid, name| self.validate_field(name) && valid)
    }

    /// Validate everything and hand back the values as a JSON object.
    pub fn submit(&mut self) -> Result<Value, FormErrors> {
        self.submitted = true;

        if !self.validate() {
            tracing::info!(errors = self.errors.len(), "form submit rejected");
            return Err(self.errors.clone());
        }

        let payload: Map<String, Value> = self
            .values
            .iter()
            .map(|(name, value)| {
                let json = serde_json::to_value(value).unwrap_or(Value::Null);
                (name.clone(), json)
            })
            .collect();
        tracing::info!(fields = payload.len(), "form submitted");
        Ok(Value::Object(payload))
    }

    /// Restore defaults and clear messages. Bindings are kept.
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.errors.clear();
        self.submitted = false;
    }

    /// Claim `name` for one adapter.
    pub fn bind(&mut self, name: &str) -> FormResult<()> {
        if !self.bound.insert(name.to_string()) {
            return Err(FormError::FieldAlreadyBound(name.to_string()));
        }
        Ok(())
    }

    /// Release a claim made with [`FormState::bind`].
    pub fn unbind(&mut self, name: &str) {
        self.bound.remove(name);
    }

    /// Try to bind `name`, remembering whether this caller owns it.
    pub fn claim(&mut self, name: &str) -> FieldClaim {
        let owned = match self.bind(name) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(field = name, "{}", err);
                false
            }
        };
        FieldClaim {
            name: name.to_string(),
            owned,
        }
    }

    /// Drop a claim; unbinds only when the claim owns the name.
    pub fn release(&mut self, claim: &FieldClaim) {
        if claim.owned {
            self.unbind(&claim.name);
        }
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.bound.contains(name)
    }
}
