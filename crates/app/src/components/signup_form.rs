use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdShield, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{
    validate_all, FieldErrors, FormField, FormValues, Requirement, SignupForm as FormState,
    SubmitOutcome, Submitter, UserType,
};
use shared_ui::{use_notifier, Button, Card, CardContent, CardHeader, Form, Input, Label, Notifier};

/// Hands validated values to the `on_submit` prop.
struct Forward(EventHandler<FormValues>);

impl Submitter for Forward {
    fn submit(&self, values: FormValues) {
        self.0.call(values);
    }
}

/// What the form shows after a submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitFeedback {
    /// Inline markers, keyed by field.
    pub field_errors: FieldErrors,
    /// Error toast text, if the attempt was rejected.
    pub toast: Option<String>,
    /// Whether the submit button is disabled.
    pub disabled: bool,
}

impl SubmitFeedback {
    /// Map a submit outcome to what the user sees.
    ///
    /// A rejection marks the failing field, or every missing field when
    /// `show_all_errors` is set, and toasts the first failure's message.
    pub fn from_outcome(
        outcome: &SubmitOutcome,
        values: &FormValues,
        user_type: UserType,
        show_all_errors: bool,
    ) -> Self {
        match outcome {
            SubmitOutcome::Submitted | SubmitOutcome::AlreadySubmitted => SubmitFeedback {
                field_errors: FieldErrors::default(),
                toast: None,
                disabled: true,
            },
            SubmitOutcome::Rejected(err) => {
                let field_errors = if show_all_errors {
                    validate_all(values, user_type)
                        .err()
                        .map(FieldErrors::from)
                        .unwrap_or_default()
                } else {
                    FieldErrors::from(err.clone())
                };
                SubmitFeedback {
                    field_errors,
                    toast: Some(err.message.clone()),
                    disabled: false,
                }
            }
        }
    }
}

/// State and actions behind a [`SignupForm`].
#[derive(Clone, Copy)]
pub struct SignupFormHandle {
    form: Signal<FormState<Forward>>,
    feedback: Signal<SubmitFeedback>,
    notifier: Notifier,
    show_all_errors: bool,
}

impl SignupFormHandle {
    pub fn user_type(&self) -> UserType {
        self.form.read().user_type()
    }

    pub fn value(&self, field: FormField) -> String {
        self.form.read().values().get(field).to_string()
    }

    pub fn error(&self, field: FormField) -> Option<String> {
        self.feedback.read().field_errors.get(field).map(str::to_string)
    }

    pub fn is_disabled(&self) -> bool {
        self.feedback.read().disabled
    }

    pub fn update(&mut self, field: FormField, value: String) {
        tracing::debug!(field = %field, "signup field updated");
        self.form.write().update(field, value);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.form.write().submit();
        let user_type = self.user_type();
        match &outcome {
            SubmitOutcome::Submitted => {
                tracing::info!(user_type = %user_type, "signup form submitted")
            }
            SubmitOutcome::Rejected(err) => {
                tracing::info!(field = %err.field, "signup form rejected")
            }
            SubmitOutcome::AlreadySubmitted => {
                tracing::debug!("signup form already submitted, ignoring")
            }
        }
        let feedback = SubmitFeedback::from_outcome(
            &outcome,
            self.form.read().values(),
            user_type,
            self.show_all_errors,
        );
        if let Some(message) = &feedback.toast {
            self.notifier.error(message.clone());
        }
        self.feedback.set(feedback);
        outcome
    }
}

/// Hook owning the form state. `user_type` and `on_submit` are captured on
/// first render; later changes are ignored.
pub fn use_signup_form(
    user_type: UserType,
    on_submit: EventHandler<FormValues>,
    show_all_errors: bool,
) -> SignupFormHandle {
    let notifier = use_notifier();
    let form = use_signal(|| FormState::new(user_type, Forward(on_submit)));
    let feedback = use_signal(SubmitFeedback::default);
    SignupFormHandle {
        form,
        feedback,
        notifier,
        show_all_errors,
    }
}

/// Signup form for admins or customers.
///
/// - `user_type`: fixed for the lifetime of the form; later prop changes are ignored
/// - `on_submit`: called once, with every field, after validation passes
/// - `show_all_errors`: mark every missing field inline instead of only the first
///
/// A failed submit raises an error toast naming the first missing field,
/// marks the field under its input and leaves the entered values in place.
/// Values are not cleared after a successful submit.
#[component]
pub fn SignupForm(
    user_type: UserType,
    on_submit: EventHandler<FormValues>,
    #[props(default = false)] show_all_errors: bool,
) -> Element {
    let handle = use_signup_form(user_type, on_submit, show_all_errors);
    render_form(handle)
}

fn render_form(mut handle: SignupFormHandle) -> Element {
    let user_type = handle.user_type();

    let icon = match user_type {
        UserType::Admin => rsx! { Icon::<LdShield> { icon: LdShield, width: 24, height: 24 } },
        UserType::Customer => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./signup_form.css") }

        Card { class: "signup-card",
            CardHeader { title: user_type.heading().to_string(), icon }

            CardContent {
                Form {
                    onsubmit: move |_: FormEvent| {
                        handle.submit();
                    },
                    for field in user_type.visible_fields() {
                        div { key: "{field.key()}", class: "signup-field",
                            Label { html_for: field.key(),
                                "{field.label()}"
                                if user_type.policy(field).requirement != Requirement::Optional {
                                    span { class: "label-required", aria_hidden: "true", " *" }
                                }
                            }
                            Input {
                                id: field.key(),
                                input_type: field.input_type().to_string(),
                                value: handle.value(field),
                                error: handle.error(field),
                                on_input: move |e: FormEvent| handle.update(field, e.value()),
                            }
                        }
                    }
                    Button {
                        button_type: "submit",
                        class: "signup-submit",
                        disabled: handle.is_disabled(),
                        "Submit"
                    }
                }
            }
        }
    }
}
