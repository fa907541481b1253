//! Contact form: validate on submit, then fake a one-second send.

use std::rc::Rc;
use std::time::Duration;

use web_sys::{HtmlElement, HtmlFormElement};

use super::Shared;
use crate::dom::{self, ListenerSet};
use crate::state::contact::{ContactDraft, FeedbackTone, SubmitOutcome, error_summary};
use crate::state::toast::Severity;

const FORM_ID: &str = "contact-form";
const FEEDBACK_ID: &str = "form-feedback";

#[derive(Clone)]
struct ContactView {
    form: HtmlFormElement,
    feedback: Option<HtmlElement>,
}

impl ContactView {
    fn field(&self, selector: &str) -> String {
        dom::first_match(self.form.query_selector(selector), selector)
            .map(|element| dom::field_value(&element))
            .unwrap_or_default()
    }

    fn draft(&self) -> ContactDraft {
        ContactDraft::new(&self.field("#name"), &self.field("#email"), &self.field("#message"))
    }

    /// Write the feedback line; `tone` of `None` keeps the current color.
    fn show_feedback(&self, text: &str, tone: Option<FeedbackTone>) {
        let Some(feedback) = &self.feedback else {
            return;
        };
        if let Some(tone) = tone {
            dom::report(dom::set_style(feedback, "color", tone.css_color()), "form feedback color");
        }
        dom::set_text(feedback, text);
    }
}

pub(super) fn bind(shared: &Rc<Shared>, listeners: &mut ListenerSet) {
    let Some(form) = dom::by_id::<HtmlFormElement>(&shared.document, FORM_ID) else {
        return;
    };
    let view = ContactView { form, feedback: dom::by_id(&shared.document, FEEDBACK_ID) };

    let weak = Rc::downgrade(shared);
    let target = view.form.clone();
    listeners.listen(&target, "submit", move |event| {
        event.prevent_default();
        if let Some(shared) = weak.upgrade() {
            submit(&shared, &view);
        }
    });
}

fn submit(shared: &Rc<Shared>, view: &ContactView) {
    view.show_feedback("", None);
    let draft = view.draft();
    let outcome = shared.contact.borrow_mut().submit(&draft);
    let messages = &shared.config.messages;
    match outcome {
        SubmitOutcome::Rejected(errors) => {
            log::debug!("contact form rejected with {} error(s)", errors.len());
            view.show_feedback(&error_summary(&errors, messages), Some(FeedbackTone::Error));
            shared.toaster.show(&messages.form_incomplete_toast, Severity::Error);
        }
        SubmitOutcome::Sending => {
            view.show_feedback(&messages.sending, Some(FeedbackTone::Accent));
            schedule_send(shared, view.clone());
        }
    }
}

fn schedule_send(shared: &Rc<Shared>, view: ContactView) {
    let weak = Rc::downgrade(shared);
    let delay = Duration::from_millis(u64::from(shared.config.send_delay_ms));
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        // A disposed controller has nothing left to update.
        let Some(shared) = weak.upgrade() else {
            return;
        };
        finish_send(&shared, &view);
    });
}

fn finish_send(shared: &Rc<Shared>, view: &ContactView) {
    shared.contact.borrow_mut().complete_send();
    let messages = &shared.config.messages;
    view.show_feedback(&messages.sent, None);
    view.form.reset();
    shared.contact.borrow_mut().acknowledge();
    shared.toaster.show(&messages.sent_toast, Severity::Normal);
    log::info!("contact message sent (simulated)");
}
