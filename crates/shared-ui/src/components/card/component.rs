use dioxus::prelude::*;

/// A bordered panel framing a form or a summary.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Card heading. `title` renders as the page's `h1`, after the optional icon.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default)] icon: Option<Element>,
) -> Element {
    rsx! {
        div { class: "card-header",
            if let Some(icon) = icon {
                {icon}
            }
            h1 { class: "card-title", "{title}" }
            if let Some(text) = description {
                p { class: "card-description", "{text}" }
            }
        }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}
