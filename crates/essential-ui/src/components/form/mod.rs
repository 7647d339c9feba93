//! Form field adapters.
//!
//! Each adapter binds one field name of the [`FormState`] provided by
//! [`FormProvider`] to one control, writes user changes back through
//! [`FieldBinding`], and always renders a message slot beneath itself.
//!
//! [`FormState`]: essential_core::FormState

mod checkbox;
mod checkbox_group;
mod label;
mod provider;
mod radio_group;
mod select;
mod switch;
mod text;

pub use checkbox::*;
pub use checkbox_group::*;
pub use label::*;
pub use provider::*;
pub use radio_group::*;
pub use select::*;
pub use switch::*;
pub use text::*;
