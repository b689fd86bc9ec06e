pub mod not_found;
pub mod signup;

use dioxus::prelude::*;

use not_found::NotFound;
use signup::Signup;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Signup {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
