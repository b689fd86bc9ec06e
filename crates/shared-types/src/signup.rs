use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownUserType;

/// Which audience the signup form is serving.
///
/// Fixed for the lifetime of a form. Drives the page heading and whether the
/// employee ID field is shown and required (see [`UserType::policy`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    #[default]
    Customer,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Admin => "admin",
            UserType::Customer => "customer",
        }
    }

    /// Heading shown above the form.
    pub fn heading(&self) -> &'static str {
        match self {
            UserType::Admin => "Admin Login",
            UserType::Customer => "User Login",
        }
    }

    /// Visibility and requirement of `field` for this user type.
    ///
    /// This is the single place that maps a user type to the fields it sees
    /// and must fill in. Rendering and validation both read from it.
    pub fn policy(&self, field: FormField) -> FieldPolicy {
        match (self, field) {
            (
                _,
                FormField::FirstName | FormField::LastName | FormField::Email | FormField::Password,
            ) => FieldPolicy::REQUIRED,
            // Presence only: whitespace counts as filled in.
            (UserType::Admin, FormField::EmployeeId) => FieldPolicy {
                visible: true,
                requirement: Requirement::Present,
            },
            (UserType::Customer, FormField::EmployeeId) => FieldPolicy::HIDDEN,
            (_, FormField::Dob) => FieldPolicy::OPTIONAL,
        }
    }

    /// Fields rendered for this user type, in display order.
    pub fn visible_fields(self) -> impl Iterator<Item = FormField> {
        FormField::RENDER_ORDER
            .iter()
            .copied()
            .filter(move |field| self.policy(*field).visible)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = UnknownUserType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(UserType::Admin),
            "customer" => Ok(UserType::Customer),
            _ => Err(UnknownUserType(s.to_string())),
        }
    }
}

/// One of the six keys of [`FormValues`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    EmployeeId,
    Dob,
    Email,
    Password,
}

impl FormField {
    /// All fields in the order the form lays them out.
    pub const RENDER_ORDER: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::EmployeeId,
        FormField::Dob,
        FormField::Email,
        FormField::Password,
    ];

    /// Order in which required-field rules are checked. The first failing
    /// rule is the one reported, so this order is user-visible.
    pub const VALIDATION_ORDER: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Password,
        FormField::EmployeeId,
        FormField::Dob,
    ];

    /// Serialized key, also used as the input element id.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::EmployeeId => "employeeId",
            FormField::Dob => "dob",
            FormField::Email => "email",
            FormField::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::EmployeeId => "Employee ID",
            FormField::Dob => "DOB",
            FormField::Email => "Email",
            FormField::Password => "Password",
        }
    }

    /// HTML input `type` for the field's control.
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Password => "password",
            _ => "text",
        }
    }

    /// Message shown when a required field is left empty.
    pub fn missing_message(&self) -> &'static str {
        match self {
            FormField::FirstName => "Please input your first name",
            FormField::LastName => "Please input your last name",
            FormField::Email => "Please input your email",
            FormField::Password => "Please input your password",
            FormField::EmployeeId => "Admin users must input their employeeId",
            FormField::Dob => "Please input your date of birth",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        FormField::RENDER_ORDER
            .iter()
            .copied()
            .find(|field| field.key() == key)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How a field's value is checked before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Never checked.
    Optional,
    /// Must contain something other than whitespace or U+FEFF.
    NonBlank,
    /// Must be non-empty; whitespace is accepted as-is.
    Present,
}

impl Requirement {
    pub fn is_satisfied(&self, value: &str) -> bool {
        match self {
            Requirement::Optional => true,
            Requirement::NonBlank => !value
                .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
                .is_empty(),
            Requirement::Present => !value.is_empty(),
        }
    }
}

/// Whether a field is rendered and how it is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPolicy {
    pub visible: bool,
    pub requirement: Requirement,
}

impl FieldPolicy {
    pub const REQUIRED: FieldPolicy = FieldPolicy {
        visible: true,
        requirement: Requirement::NonBlank,
    };
    pub const OPTIONAL: FieldPolicy = FieldPolicy {
        visible: true,
        requirement: Requirement::Optional,
    };
    pub const HIDDEN: FieldPolicy = FieldPolicy {
        visible: false,
        requirement: Requirement::Optional,
    };
}

/// Values collected by the signup form.
///
/// Every key is always present; unset fields hold an empty string. Missing
/// keys in serialized input are filled with empty strings as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub employee_id: String,
    pub dob: String,
}

impl FormValues {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::EmployeeId => &self.employee_id,
            FormField::Dob => &self.dob,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    /// Replace one field. No validation happens here.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::EmployeeId => &mut self.employee_id,
            FormField::Dob => &mut self.dob,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        };
        *slot = value.into();
    }

    /// Builder-style [`FormValues::set`].
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}
