//! Error types for Essential UI

use thiserror::Error;

/// Caller-misuse conditions detected by the core library.
///
/// Field validation failures are not errors in this sense; they are
/// messages stored in [`crate::FormState`] and shown beneath a field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A second adapter tried to bind a field name that is already bound
    #[error("Field already bound: {0}")]
    FieldAlreadyBound(String),

    /// A radio group was given too few options to offer a choice
    #[error("Please provide at least two options for the radio group.")]
    TooFewOptions { required: usize, given: usize },

    /// Typography size token not in the definition table
    #[error("Unknown typography size: {0}")]
    UnknownSize(String),

    /// Element tag not supported by the typography resolver
    #[error("Unknown element tag: {0}")]
    UnknownTag(String),
}

/// Result type alias using FormError
pub type FormResult<T> = Result<T, FormError>;
