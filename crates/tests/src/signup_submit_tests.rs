use pretty_assertions::assert_eq;
use shared_types::{FieldError, FormField, FormStatus, FormValues, SubmitOutcome, UserType};

use crate::common::{fill_required, test_form};

#[test]
fn customer_submit_forwards_exact_values_once() {
    let (mut form, recorder) = test_form(UserType::Customer);
    fill_required(&mut form);
    form.update(FormField::Dob, "1918-08-26");

    assert_eq!(form.submit(), SubmitOutcome::Submitted);

    let expected = FormValues {
        first_name: "Katherine".into(),
        last_name: "Johnson".into(),
        email: "katherine@example.com".into(),
        password: "trajectory".into(),
        employee_id: String::new(),
        dob: "1918-08-26".into(),
    };
    assert_eq!(recorder.calls(), vec![expected]);
}

#[test]
fn customer_submit_ignores_employee_id() {
    let (mut form, recorder) = test_form(UserType::Customer);
    fill_required(&mut form);
    form.update(FormField::EmployeeId, "E999");

    assert_eq!(form.submit(), SubmitOutcome::Submitted);
    assert_eq!(recorder.calls()[0].employee_id, "E999");
}

#[test]
fn admin_without_employee_id_is_rejected() {
    let (mut form, recorder) = test_form(UserType::Admin);
    fill_required(&mut form);

    let outcome = form.submit();
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(FieldError {
            field: FormField::EmployeeId,
            message: "Admin users must input their employeeId".into(),
        })
    );
    assert_eq!(recorder.call_count(), 0);
    assert_eq!(form.status(), FormStatus::Editing);
}

#[test]
fn admin_without_employee_id_never_submits_whatever_else_is_filled() {
    let partials: [&[FormField]; 4] = [
        &[],
        &[FormField::FirstName],
        &[FormField::FirstName, FormField::LastName, FormField::Email],
        &[FormField::Dob, FormField::Password],
    ];
    for filled in partials {
        let (mut form, recorder) = test_form(UserType::Admin);
        for field in filled {
            form.update(*field, "x");
        }
        assert!(matches!(form.submit(), SubmitOutcome::Rejected(_)));
        assert_eq!(recorder.call_count(), 0, "filled: {filled:?}");
    }
}

#[test]
fn admin_with_employee_id_submits_once() {
    let (mut form, recorder) = test_form(UserType::Admin);
    fill_required(&mut form);
    form.update(FormField::EmployeeId, "E123");

    assert_eq!(form.submit(), SubmitOutcome::Submitted);
    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].employee_id, "E123");
    assert_eq!(calls[0].dob, "");
}

#[test]
fn whitespace_first_name_is_rejected() {
    let (mut form, recorder) = test_form(UserType::Customer);
    fill_required(&mut form);
    form.update(FormField::FirstName, " ");

    match form.submit() {
        SubmitOutcome::Rejected(err) => {
            assert_eq!(err.message, "Please input your first name")
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(recorder.call_count(), 0);
}

#[test]
fn failed_submit_keeps_entered_values() {
    let (mut form, _recorder) = test_form(UserType::Customer);
    form.update(FormField::LastName, "Johnson");
    form.update(FormField::Dob, "1918-08-26");

    let before = form.values().clone();
    form.submit();
    assert_eq!(form.values(), &before);
}

#[test]
fn second_submit_after_success_does_nothing() {
    let (mut form, recorder) = test_form(UserType::Customer);
    fill_required(&mut form);

    assert_eq!(form.submit(), SubmitOutcome::Submitted);
    assert_eq!(form.submit(), SubmitOutcome::AlreadySubmitted);
    assert_eq!(recorder.call_count(), 1);
}

#[test]
fn values_survive_successful_submit() {
    let (mut form, recorder) = test_form(UserType::Customer);
    fill_required(&mut form);
    form.submit();

    assert_eq!(form.values(), &recorder.calls()[0]);
}

#[test]
fn closures_work_as_submitters() {
    use std::cell::Cell;

    let count = Cell::new(0);
    let mut form = shared_types::SignupForm::new(UserType::Customer, |_: FormValues| {
        count.set(count.get() + 1)
    });
    form.update(FormField::FirstName, "a");
    form.update(FormField::LastName, "b");
    form.update(FormField::Email, "c");
    form.update(FormField::Password, "d");
    form.submit();
    assert_eq!(count.get(), 1);
}
