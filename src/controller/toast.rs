//! Toast surface with a single cancellable hide timer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::error::UiError;
use crate::state::toast::{Severity, ToastState, VISIBLE_CLASS};

const TOAST_ID: &str = "toast";

pub struct Toaster {
    element: Option<HtmlElement>,
    duration_ms: u32,
    state: RefCell<ToastState>,
    timer: RefCell<Option<Timeout>>,
}

impl Toaster {
    pub fn locate(document: &Document, duration_ms: u32) -> Self {
        Self {
            element: dom::by_id(document, TOAST_ID),
            duration_ms,
            state: RefCell::new(ToastState::default()),
            timer: RefCell::new(None),
        }
    }

    /// Show `message` and restart the hide timer. No-op without a toast element.
    pub fn show(self: &Rc<Self>, message: &str, severity: Severity) {
        let Some(element) = self.element.as_ref() else {
            log::debug!("toast suppressed (no #{TOAST_ID}): {message}");
            return;
        };
        let generation = self.state.borrow_mut().show(message, severity);

        dom::set_text(element, message);
        dom::report(dom::set_style(element, "background", severity.background().unwrap_or("")), "toast background");
        dom::report(element.class_list().add_1(VISIBLE_CLASS).map_err(UiError::from), "toast show");

        let toaster = Rc::downgrade(self);
        let timeout = Timeout::new(self.duration_ms, move || {
            if let Some(toaster) = toaster.upgrade() {
                toaster.expire(generation);
            }
        });
        // Replacing the slot drops the previous Timeout, which clears it.
        *self.timer.borrow_mut() = Some(timeout);
    }

    fn expire(&self, generation: u64) {
        if !self.state.borrow_mut().expire(generation) {
            return;
        }
        if let Some(element) = self.element.as_ref() {
            dom::report(element.class_list().remove_1(VISIBLE_CLASS).map_err(UiError::from), "toast hide");
        }
    }

    /// Drop any pending hide timer.
    pub fn cancel(&self) {
        drop(self.timer.borrow_mut().take());
    }
}
