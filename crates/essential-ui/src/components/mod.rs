//! Reusable UI components.
//!
//! Field adapters live under [`form`]; standalone primitives sit alongside.

mod button;
pub mod form;
mod loading_spinner;
mod typography;

pub use button::*;
pub use form::*;
pub use loading_spinner::*;
pub use typography::*;
