use dioxus::prelude::*;
use shared_types::{FormField, FormValues};
use shared_ui::{use_notifier, Card, CardContent, CardHeader};

use crate::components::SignupForm;
use crate::config;

/// Signup page. Hosts the form with the configured user type and keeps
/// whatever the form hands over on a successful submit.
#[component]
pub fn Signup() -> Element {
    let config = config::load();
    let notifier = use_notifier();
    let mut received = use_signal(|| Option::<FormValues>::None);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./signup.css") }

        div { class: "signup-page",
            SignupForm {
                user_type: config.user_type,
                show_all_errors: config.show_all_errors,
                on_submit: move |values: FormValues| {
                    notifier.success(format!("Welcome, {}!", values.first_name.trim()));
                    received.set(Some(values));
                },
            }

            if let Some(values) = received() {
                SubmissionSummary { values }
            }
        }
    }
}

/// Read-only view of submitted values.
#[component]
fn SubmissionSummary(values: FormValues) -> Element {
    rsx! {
        Card { class: "signup-summary",
            CardHeader {
                title: "Submitted".to_string(),
                description: "Values received from the signup form.".to_string(),
            }
            CardContent {
                dl { class: "signup-summary-list",
                    for field in FormField::RENDER_ORDER {
                        div { key: "{field.key()}", class: "signup-summary-row",
                            dt { "{field.label()}" }
                            dd { "{display_value(&values, field)}" }
                        }
                    }
                }
            }
        }
    }
}

/// Text shown for one submitted field. Passwords are masked.
fn display_value(values: &FormValues, field: FormField) -> String {
    let raw = values.get(field);
    if raw.is_empty() {
        return "(empty)".to_string();
    }
    match field {
        FormField::Password => "\u{2022}".repeat(raw.chars().count()),
        _ => raw.to_string(),
    }
}
