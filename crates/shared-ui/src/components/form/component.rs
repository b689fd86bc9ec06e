use dioxus::prelude::*;

/// Form wrapper that always suppresses the browser's own submission.
///
/// `prevent_default` runs before `onsubmit` on every submit, so submitting
/// never navigates or reloads the page. Native constraint validation is
/// switched off (`novalidate`); field checks belong to the caller.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            novalidate: true,
            onsubmit: move |evt: FormEvent| intercept(evt, |evt| onsubmit.call(evt)),
            ..merged,
            {children}
        }
    }
}

/// Suppress the browser default for `evt`, then pass it on.
fn intercept<T>(evt: Event<T>, next: impl FnOnce(Event<T>)) {
    evt.prevent_default();
    next(evt);
}
