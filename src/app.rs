use dioxus::prelude::*;

use crate::pages::{Home, Login};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Component showcase with the demo profile form
/// - `/auth/login` - Sign-in form
///
/// A page component is only created once its route is matched.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/auth/login")]
    Login {},
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_parse_from_paths() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
        assert_eq!("/auth/login".parse::<Route>().ok(), Some(Route::Login {}));
    }

    #[test]
    fn routes_render_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Login {}.to_string(), "/auth/login");
    }
}
