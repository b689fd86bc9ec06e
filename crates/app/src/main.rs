use dioxus::prelude::*;

mod components;
mod config;
mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
