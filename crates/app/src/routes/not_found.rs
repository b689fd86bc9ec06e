use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for any path other than the signup page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            p { class: "not-found-message",
                "Nothing lives at "
                code { "{path}" }
                "."
            }
            Link { to: Route::Signup {}, class: "not-found-link", "Go to signup" }
        }
    }
}
