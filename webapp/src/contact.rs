use std::{cell::RefCell, future::Future, rc::Rc};

use dioxus::prelude::*;
use futures::future::AbortHandle;
use gloo_timers::future::TimeoutFuture;
use tracing::warn;

use crate::common::{dom::alert, notify::SimulatedNotifier};
use crate::components::social::SocialLinks;
use site::{
    AppState, SiteConfig,
    contact::{ContactForm, ContactStatus, deliver},
};

// puts a successful form back to idle once `delay` resolves.  this has to be
// awaited from a task of the form's own scope: the signal is gone once the page
// unmounts, and so is the task
async fn settle_status(mut form: Signal<ContactForm>, delay: impl Future<Output = ()>) {
    delay.await;
    form.write().reset_status();
}

#[derive(Clone, PartialEq, Props)]
struct ContactFormBoxProps {
    config: Signal<SiteConfig>,
}

// ContactFormBox
//
// the form state is local to this component.  a submission, and the status reset
// after it, run as one spawned task of this scope, so leaving the page drops both
#[component]
fn ContactFormBox(props: ContactFormBoxProps) -> Element {
    let config = props.config;
    let mut form = use_signal(ContactForm::default);
    let in_flight = use_hook(|| Rc::new(RefCell::new(None::<AbortHandle>)));

    use_drop({
        let in_flight = in_flight.clone();
        move || {
            if let Some(handle) = in_flight.borrow_mut().take() {
                handle.abort();
            }
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let (recipient, delay_ms, reset_ms) = {
            let config = config.read();
            (
                config.notify_recipient.clone(),
                config.notify_delay_ms,
                config.status_reset_ms,
            )
        };

        let message = match form.write().begin(&recipient) {
            Ok(message) => message,
            Err(err) => {
                warn!("contact form not submitted: {err}");
                return;
            }
        };

        let (handle, registration) = AbortHandle::new_pair();
        in_flight.borrow_mut().replace(handle);
        let in_flight = in_flight.clone();

        spawn(async move {
            let notifier = SimulatedNotifier { delay_ms };
            let result = deliver(&notifier, &message, registration).await;
            in_flight.borrow_mut().take();

            if let Ok(receipt) = &result {
                alert(&receipt.notice);
            }
            form.write().finish(&result);

            if result.is_ok() {
                settle_status(form, TimeoutFuture::new(reset_ms)).await;
            }
        });
    };

    let status = form.read().status();
    let fields = form.read().fields.clone();
    let button_label = match status {
        ContactStatus::Idle => "Send Message",
        ContactStatus::Sending => "Sending...",
        ContactStatus::Success => "Message Sent!",
    };

    rsx! {
        form { class: "contact-form", onsubmit: submit,
            div { class: "pair",
                div {
                    label { class: "field-label", "Full Name" }
                    input {
                        class: "field",
                        r#type: "text",
                        required: true,
                        value: "{fields.name}",
                        oninput: move |evt| form.write().fields.name = evt.value(),
                    }
                }
                div {
                    label { class: "field-label", "Age" }
                    input {
                        class: "field",
                        r#type: "number",
                        required: true,
                        value: "{fields.age}",
                        oninput: move |evt| form.write().fields.age = evt.value(),
                    }
                }
            }
            div {
                label { class: "field-label", "Medical Problem" }
                input {
                    class: "field",
                    r#type: "text",
                    required: true,
                    placeholder: "e.g. Consultation, Checkup...",
                    value: "{fields.problem}",
                    oninput: move |evt| form.write().fields.problem = evt.value(),
                }
            }
            div {
                label { class: "field-label", "Message" }
                textarea {
                    class: "field",
                    rows: "4",
                    required: true,
                    value: "{fields.message}",
                    oninput: move |evt| form.write().fields.message = evt.value(),
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: status != ContactStatus::Idle,
                "{button_label}"
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ContactPageProps {
    state: Signal<AppState>,
    config: Signal<SiteConfig>,
}

#[component]
pub fn ContactPage(props: ContactPageProps) -> Element {
    let contact = props.state.read().content().contact.clone();
    let social = props.state.read().content().social.clone();
    let masked_phone = contact.masked_phone();

    rsx! {
        div { class: "page",
            p { class: "eyebrow", style: "text-align: center;", "Get in Touch" }
            h1 { class: "page-title", "Book a Consultation" }
            p { class: "page-lead",
                "Share a few details and the clinic will get back to you to arrange an appointment."
            }

            div { class: "contact-grid",
                div { class: "card",
                    h3 { "Clinic" }
                    p { style: "margin-bottom: var(--space-4);", "{contact.location}" }
                    h3 { "Phone & Email" }
                    p { "Oman: {masked_phone}" }
                    p { style: "margin-bottom: var(--space-4);", "{contact.email}" }
                    h3 { style: "margin-bottom: var(--space-2);", "Follow" }
                    SocialLinks { social }
                }
                div { class: "card",
                    ContactFormBox { config: props.config }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use dioxus::prelude::*;
    use futures::channel::oneshot;

    use super::settle_status;
    use site::contact::{ContactFields, ContactForm, ContactStatus, Receipt};

    type PendingDelay = Rc<RefCell<Option<oneshot::Receiver<()>>>>;

    fn sent_form() -> ContactForm {
        let mut form = ContactForm::new(ContactFields {
            name: String::from("Amal"),
            age: String::from("31"),
            problem: String::from("Checkup"),
            message: String::from("Hello"),
        });
        form.begin("clinic@example.com").unwrap();
        form.finish(&Ok(Receipt {
            notice: String::new(),
        }));
        form
    }

    fn FormWithPendingReset(delay: PendingDelay) -> Element {
        let form = use_signal(sent_form);

        use_hook(move || {
            if let Some(rx) = delay.borrow_mut().take() {
                spawn(settle_status(form, async move {
                    let _ = rx.await;
                }));
            }
        });

        rsx! {}
    }

    #[test]
    fn sent_form_starts_in_success() {
        assert_eq!(sent_form().status(), ContactStatus::Success);
    }

    #[test]
    fn unmount_drops_pending_status_reset() {
        let (tx, rx) = oneshot::channel();
        let delay: PendingDelay = Rc::new(RefCell::new(Some(rx)));

        let mut dom = VirtualDom::new_with_props(FormWithPendingReset, delay);
        dom.rebuild_in_place();

        // the reset task is alive and waiting while the form is mounted
        assert!(!tx.is_canceled());

        drop(dom);

        // the task went with the scope, so the delay can never fire into a
        // dropped signal
        assert!(tx.is_canceled());
        assert!(tx.send(()).is_err());
    }
}
