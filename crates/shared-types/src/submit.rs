use std::fmt;

use crate::error::FieldError;
use crate::signup::{FormField, FormValues, UserType};
use crate::validation::validate;

/// Receives the form values once they pass validation.
pub trait Submitter {
    fn submit(&self, values: FormValues);
}

impl<F> Submitter for F
where
    F: Fn(FormValues),
{
    fn submit(&self, values: FormValues) {
        self(values)
    }
}

/// Where a form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    /// Values were handed to the submitter. Terminal.
    Submitted,
}

/// Result of a single submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the submitter was called.
    Submitted,
    /// A required field is empty; nothing was forwarded.
    Rejected(FieldError),
    /// The form was already submitted; nothing was forwarded.
    AlreadySubmitted,
}

/// Form state plus the submit flow, independent of any UI framework.
///
/// Holds the values, routes single-field updates into them, and on submit
/// runs [`validate`] before handing a copy of the values to the submitter.
/// Values are never cleared; what happens after submission is up to the
/// submitter.
pub struct SignupForm<S> {
    user_type: UserType,
    values: FormValues,
    status: FormStatus,
    submitter: S,
}

impl<S: Submitter> SignupForm<S> {
    pub fn new(user_type: UserType, submitter: S) -> Self {
        Self {
            user_type,
            values: FormValues::default(),
            status: FormStatus::Editing,
            submitter,
        }
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    /// Replace one field. Accepted in any state, with any text.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        self.values.set(field, value);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitted() {
            return SubmitOutcome::AlreadySubmitted;
        }
        if let Err(err) = validate(&self.values, self.user_type) {
            return SubmitOutcome::Rejected(err);
        }
        self.status = FormStatus::Submitted;
        self.submitter.submit(self.values.clone());
        SubmitOutcome::Submitted
    }
}

impl<S> fmt::Debug for SignupForm<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("user_type", &self.user_type)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
