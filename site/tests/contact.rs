use std::cell::Cell;

use async_trait::async_trait;
use site::contact::{
    ContactFields, ContactForm, ContactMessage, ContactStatus, Notifier, SubmitError,
};
use futures::{executor::block_on, future::AbortHandle};

struct Instant {
    calls: Cell<usize>,
}

#[async_trait(?Send)]
impl Notifier for Instant {
    async fn notify(&self, _message: &ContactMessage) -> anyhow::Result<()> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

struct Failing;

#[async_trait(?Send)]
impl Notifier for Failing {
    async fn notify(&self, _message: &ContactMessage) -> anyhow::Result<()> {
        Err(anyhow::Error::msg("mail server unreachable"))
    }
}

struct Never;

#[async_trait(?Send)]
impl Notifier for Never {
    async fn notify(&self, _message: &ContactMessage) -> anyhow::Result<()> {
        futures::future::pending::<()>().await;
        Ok(())
    }
}

fn filled() -> ContactForm {
    ContactForm::new(ContactFields {
        name: String::from("Layla"),
        age: String::from("31"),
        problem: String::from("Checkup"),
        message: String::from("Looking for an appointment."),
    })
}

#[test]
fn test_submit_success_clears_fields() {
    let mut form = filled();
    let notifier = Instant {
        calls: Cell::new(0),
    };
    let (_handle, registration) = AbortHandle::new_pair();

    let receipt =
        block_on(form.submit("doctor@example.com", &notifier, registration)).unwrap();

    assert_eq!(
        receipt.notice,
        "Message sent to doctor@example.com!\n\nPatient: Layla\nAge: 31\nIssue: Checkup"
    );
    assert_eq!(notifier.calls.get(), 1);
    assert_eq!(form.status(), ContactStatus::Success);
    assert_eq!(form.fields, ContactFields::default());
    assert!(!form.can_submit());

    form.reset_status();
    assert_eq!(form.status(), ContactStatus::Idle);
}

#[test]
fn test_incomplete_form_is_not_sent() {
    let mut form = filled();
    form.fields.message = String::new();
    let notifier = Instant {
        calls: Cell::new(0),
    };
    let (_handle, registration) = AbortHandle::new_pair();

    let result = block_on(form.submit("doctor@example.com", &notifier, registration));

    assert_eq!(result, Err(SubmitError::Incomplete));
    assert_eq!(notifier.calls.get(), 0);
    assert_eq!(form.status(), ContactStatus::Idle);
}

#[test]
fn test_whitespace_counts_as_filled() {
    let mut form = filled();
    form.fields.problem = String::from("  ");

    assert!(form.fields.is_complete());
    assert!(form.begin("doctor@example.com").is_ok());
    assert_eq!(form.status(), ContactStatus::Sending);
}

#[test]
fn test_busy_form_rejects_second_submit() {
    let mut form = filled();
    form.begin("doctor@example.com").unwrap();
    assert_eq!(form.status(), ContactStatus::Sending);

    assert_eq!(form.begin("doctor@example.com"), Err(SubmitError::Busy));
}

#[test]
fn test_delivery_failure_keeps_fields() {
    let mut form = filled();
    let (_handle, registration) = AbortHandle::new_pair();

    let result = block_on(form.submit("doctor@example.com", &Failing, registration));

    assert!(matches!(result, Err(SubmitError::Delivery(_))));
    assert_eq!(form.status(), ContactStatus::Idle);
    assert_eq!(form.fields, filled().fields);
}

#[test]
fn test_cancelled_submit() {
    let mut form = filled();
    let (handle, registration) = AbortHandle::new_pair();
    handle.abort();

    let result = block_on(form.submit("doctor@example.com", &Never, registration));

    assert_eq!(result, Err(SubmitError::Cancelled));
    assert_eq!(form.status(), ContactStatus::Idle);
    assert!(form.can_submit());
}

#[test]
fn test_reset_status_only_from_success() {
    let mut form = filled();
    form.begin("doctor@example.com").unwrap();

    form.reset_status();
    assert_eq!(form.status(), ContactStatus::Sending);
}
