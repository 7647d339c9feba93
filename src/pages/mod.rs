//! Page components for Essential UI.

mod home;
mod login;

pub use home::Home;
pub use login::Login;
