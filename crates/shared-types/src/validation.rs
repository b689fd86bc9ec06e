use crate::error::FieldError;
use crate::signup::{FormField, FormValues, UserType};

/// Required fields that are empty, in the order their rules are checked.
pub fn missing_fields(
    values: &FormValues,
    user_type: UserType,
) -> impl Iterator<Item = FormField> + '_ {
    FormField::VALIDATION_ORDER
        .iter()
        .copied()
        .filter(move |field| {
            !user_type
                .policy(*field)
                .requirement
                .is_satisfied(values.get(*field))
        })
}

/// Check the form and report the first rule that fails.
///
/// Rules run in [`FormField::VALIDATION_ORDER`] and stop at the first
/// failure, so a form missing both names reports only the first name.
pub fn validate(values: &FormValues, user_type: UserType) -> Result<(), FieldError> {
    match missing_fields(values, user_type).next() {
        Some(field) => Err(FieldError::missing(field)),
        None => Ok(()),
    }
}

/// Check the form and report every missing field at once.
///
/// Used for inline per-field markers. Agrees with [`validate`] on pass/fail.
#[cfg(feature = "validation")]
pub fn validate_all(
    values: &FormValues,
    user_type: UserType,
) -> Result<(), validator::ValidationErrors> {
    use std::borrow::Cow;

    let mut errors = validator::ValidationErrors::new();
    for field in missing_fields(values, user_type) {
        let mut error = validator::ValidationError::new("required");
        error.message = Some(Cow::Borrowed(field.missing_message()));
        errors.add(field.key(), error);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
