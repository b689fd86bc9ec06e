use shared_types::{FormField, FormValues, SignupForm, Submitter, UserType};
use std::cell::RefCell;
use std::rc::Rc;

/// Submitter that records every call it receives.
#[derive(Clone, Default)]
pub struct RecordingSubmitter {
    calls: Rc<RefCell<Vec<FormValues>>>,
}

impl RecordingSubmitter {
    pub fn calls(&self) -> Vec<FormValues> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Submitter for RecordingSubmitter {
    fn submit(&self, values: FormValues) {
        self.calls.borrow_mut().push(values);
    }
}

/// A form plus a handle on what its submitter received.
pub fn test_form(user_type: UserType) -> (SignupForm<RecordingSubmitter>, RecordingSubmitter) {
    let recorder = RecordingSubmitter::default();
    (SignupForm::new(user_type, recorder.clone()), recorder)
}

/// Fill the four fields every user type must provide.
pub fn fill_required(form: &mut SignupForm<RecordingSubmitter>) {
    form.update(FormField::FirstName, "Katherine");
    form.update(FormField::LastName, "Johnson");
    form.update(FormField::Email, "katherine@example.com");
    form.update(FormField::Password, "trajectory");
}
