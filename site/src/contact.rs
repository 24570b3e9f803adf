use async_trait::async_trait;
use futures::future::{AbortRegistration, Abortable};
use thiserror::Error;
use tracing::{info, warn};

// contact form
//
// the form never touches AppState.  a submission moves the form from Idle to
// Sending, hands a ContactMessage to a Notifier, and then either clears the fields
// and shows Success or drops back to Idle with the fields intact
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Success,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub age: String,
    pub problem: String,
    pub message: String,
}

impl ContactFields {
    // same rule as an html `required` input: any non-empty value counts
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.age, &self.problem, &self.message]
            .iter()
            .all(|field| !field.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub recipient: String,
    pub fields: ContactFields,
}

impl ContactMessage {
    // the confirmation shown to the patient once the message is "sent"
    pub fn notice(&self) -> String {
        format!(
            "Message sent to {}!\n\nPatient: {}\nAge: {}\nIssue: {}",
            self.recipient, self.fields.name, self.fields.age, self.fields.problem
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub notice: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmitError {
    #[error("all fields are required")]
    Incomplete,
    #[error("a message is already being sent")]
    Busy,
    #[error("failed to deliver message: {0}")]
    Delivery(String),
    #[error("sending was cancelled")]
    Cancelled,
}

// outbound channel for contact messages
//
// the site only ships a simulated implementation, but keeping the seam lets a real
// mail or webhook sender slot in later.  futures in the browser are not Send
#[async_trait(?Send)]
pub trait Notifier {
    async fn notify(&self, message: &ContactMessage) -> anyhow::Result<()>;
}

pub async fn deliver<N: Notifier + ?Sized>(
    notifier: &N,
    message: &ContactMessage,
    registration: AbortRegistration,
) -> Result<Receipt, SubmitError> {
    match Abortable::new(notifier.notify(message), registration).await {
        Ok(Ok(())) => Ok(Receipt {
            notice: message.notice(),
        }),
        Ok(Err(err)) => Err(SubmitError::Delivery(err.to_string())),
        Err(_) => Err(SubmitError::Cancelled),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    status: ContactStatus,
}

impl ContactForm {
    pub fn new(fields: ContactFields) -> Self {
        ContactForm {
            fields,
            status: ContactStatus::Idle,
        }
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn can_submit(&self) -> bool {
        self.status == ContactStatus::Idle
    }

    pub fn begin(&mut self, recipient: &str) -> Result<ContactMessage, SubmitError> {
        if !self.can_submit() {
            return Err(SubmitError::Busy);
        }
        if !self.fields.is_complete() {
            return Err(SubmitError::Incomplete);
        }

        self.status = ContactStatus::Sending;

        Ok(ContactMessage {
            recipient: recipient.to_owned(),
            fields: self.fields.clone(),
        })
    }

    pub fn finish(&mut self, result: &Result<Receipt, SubmitError>) {
        match result {
            Ok(_) => {
                info!("contact message delivered");
                self.fields = ContactFields::default();
                self.status = ContactStatus::Success;
            }
            Err(err) => {
                warn!("contact message not delivered: {err}");
                self.status = ContactStatus::Idle;
            }
        }
    }

    pub fn reset_status(&mut self) {
        if self.status == ContactStatus::Success {
            self.status = ContactStatus::Idle;
        }
    }

    // begin, deliver, and finish in one go, for callers that can hold the form
    // across the await
    pub async fn submit<N: Notifier + ?Sized>(
        &mut self,
        recipient: &str,
        notifier: &N,
        registration: AbortRegistration,
    ) -> Result<Receipt, SubmitError> {
        let message = self.begin(recipient)?;
        let result = deliver(notifier, &message, registration).await;
        self.finish(&result);
        result
    }
}
