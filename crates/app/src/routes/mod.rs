pub mod landing;
pub mod not_found;

use dioxus::prelude::*;

use landing::Landing;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
