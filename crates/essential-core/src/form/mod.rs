//! Form state for Essential UI.
//!
//! One [`FormState`] per form instance. Field adapters each own one named
//! slot: they read its value and message and write new values back. The
//! [`FormSchema`] attached to the state computes the messages.

mod schema;
mod state;
mod value;

pub use schema::{FormSchema, Rule};
pub use state::{FieldClaim, FormErrors, FormState, ValidationMode};
pub use value::FieldValue;
