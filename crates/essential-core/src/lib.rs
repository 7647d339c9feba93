//! Essential UI Core Library
//!
//! Framework-free building blocks behind the Essential UI components.
//!
//! ## Overview
//!
//! Everything a form field adapter needs to decide *what* to render lives
//! here, so it can be tested without a renderer:
//!
//! - **Form state**: per-form values, validation messages and bindings
//! - **Validation schema**: ordered rules per field name
//! - **Typography**: size token to tag/class resolution
//! - **Class merging**: utility class lists where later classes win
//!
//! ## Quick Start
//!
//! ```
//! use essential_core::form::{FieldValue, FormSchema, FormState, Rule};
//!
//! let schema = FormSchema::new().field("email", [Rule::required(), Rule::Email]);
//! let mut form = FormState::new(schema);
//!
//! form.set_value("email", FieldValue::text("ada@example.com"));
//! assert!(form.submit().is_ok());
//! ```

pub mod class;
pub mod error;
pub mod field;
pub mod form;
pub mod typography;

// Re-exports
pub use class::merge_classes;
pub use error::{FormError, FormResult};
pub use field::{FieldOption, InputType, Trailing};
pub use form::{FieldValue, FormErrors, FormSchema, FormState, Rule, ValidationMode};
pub use typography::{Rendering, Size, Tag};
