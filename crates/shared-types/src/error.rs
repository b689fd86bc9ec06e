use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::signup::FormField;

/// A required field was left empty.
///
/// The only failure the signup form produces. The admin-only employee ID
/// rule reports through the same type with its own message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    pub fn missing(field: FormField) -> Self {
        Self {
            field,
            message: field.missing_message().to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FieldError {}

/// Returned when a string does not name a [`crate::UserType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUserType(pub String);

impl fmt::Display for UnknownUserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown user type {:?}", self.0)
    }
}

impl std::error::Error for UnknownUserType {}

/// Per-field messages for inline display, keyed by [`FormField::key`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldErrors(pub HashMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(field.key()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        let mut map = HashMap::new();
        map.insert(error.field.key().to_string(), error.message);
        FieldErrors(map)
    }
}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        FieldErrors(field_errors)
    }
}
