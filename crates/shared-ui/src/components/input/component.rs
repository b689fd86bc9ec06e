use dioxus::prelude::*;

/// Text input with an optional inline error line underneath.
///
/// The `id` goes on the `<input>` itself so a `Label { html_for }` can point
/// at it. When `error` is set the input is marked `aria-invalid`.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = if error.is_some() { "true" } else { "false" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            input {
                r#type: "{input_type}",
                value: value,
                aria_invalid: invalid,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(msg) = error {
                div { class: "input-error", role: "alert", "{msg}" }
            }
        }
    }
}
