use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Field label over the label primitive. Children may carry a
/// `label-required` marker after the text.
#[component]
pub fn Label(mut props: prim::LabelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { ..props }
    }
}
