use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}

/// Blocking-style user notifications backed by the toast stack.
///
/// Must be created under a [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: Toasts,
}

impl Notifier {
    pub fn error(&self, message: impl Into<String>) {
        self.toasts.error(message.into(), ToastOptions::new());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.toasts.success(message.into(), ToastOptions::new());
    }
}

/// Hook returning a [`Notifier`] for the nearest toast provider.
pub fn use_notifier() -> Notifier {
    Notifier {
        toasts: use_toast(),
    }
}
