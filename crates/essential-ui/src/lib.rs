//! Essential UI Components
//!
//! This crate provides Dioxus components for building forms: thin field
//! adapters bound to a shared [`FormState`](essential_core::FormState),
//! plus a typography primitive and a loading spinner.
//!
//! ## Styling
//!
//! Components emit utility classes (`flex`, `gap-2`, `text-sm`, ...). Every
//! component takes an optional `class` that is merged over its base classes,
//! with the caller winning conflicts. The host application supplies the
//! stylesheet defining those utilities.
//!
//! ## Forms
//!
//! - Create a `Signal<FormState>` with [`use_form`]
//! - Wrap fields in [`FormProvider`]
//! - Each field adapter binds one field name

pub mod components;

pub use components::*;
pub use essential_core::{FieldOption, FieldValue, FormSchema, FormState, InputType, Rule, Size, Tag};
