use pretty_assertions::assert_eq;
use shared_types::{validate, validate_all, FieldErrors, FormField, FormValues, UserType};

fn message(values: &FormValues, user_type: UserType) -> Option<String> {
    validate(values, user_type).err().map(|e| e.message)
}

#[test]
fn both_names_missing_reports_first_name_only() {
    let values = FormValues::default()
        .with(FormField::Email, "e@example.com")
        .with(FormField::Password, "pw");
    assert_eq!(
        message(&values, UserType::Customer).as_deref(),
        Some("Please input your first name")
    );
}

#[test]
fn messages_follow_rule_order_as_fields_are_filled() {
    let steps = [
        (FormField::FirstName, Some("Please input your last name")),
        (FormField::LastName, Some("Please input your email")),
        (FormField::Email, Some("Please input your password")),
        (FormField::Password, Some("Admin users must input their employeeId")),
        (FormField::EmployeeId, None),
    ];
    let mut values = FormValues::default();
    assert_eq!(
        message(&values, UserType::Admin).as_deref(),
        Some("Please input your first name")
    );
    for (field, expected) in steps {
        values.set(field, "filled");
        assert_eq!(message(&values, UserType::Admin).as_deref(), expected, "after {field}");
    }
}

#[test]
fn whitespace_employee_id_satisfies_admin_rule() {
    let values = FormValues::default()
        .with(FormField::FirstName, "a")
        .with(FormField::LastName, "b")
        .with(FormField::Email, "c")
        .with(FormField::Password, "d")
        .with(FormField::EmployeeId, " ");
    assert_eq!(validate(&values, UserType::Admin), Ok(()));
}

#[test]
fn inline_report_agrees_with_first_failure() {
    let values = FormValues::default().with(FormField::LastName, "b");
    let first = validate(&values, UserType::Customer).unwrap_err();
    let all = FieldErrors::from(validate_all(&values, UserType::Customer).unwrap_err());

    assert_eq!(all.get(first.field), Some(first.message.as_str()));
    assert_eq!(all.len(), 3);
    assert_eq!(all.get(FormField::LastName), None);
}

#[test]
fn inline_report_serializes_as_plain_map() {
    let all = FieldErrors::from(
        validate_all(&FormValues::default(), UserType::Customer).unwrap_err(),
    );
    let json = serde_json::to_value(&all).unwrap();
    assert_eq!(json["password"], "Please input your password");
    assert!(json.get("employeeId").is_none());
}
