//! Small page touches: year stamp, quick contact, press feedback, focus rings.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::Shared;
use crate::dom::{self, ListenerSet};
use crate::error::UiError;
use crate::state::polish::{FOCUS_VISIBLE_CLASS, PointerPhase};

const BUTTON_SELECTOR: &str = ".btn";

pub(super) fn show_year(document: &Document) {
    if let Some(year) = dom::by_id::<Element>(document, "year") {
        dom::set_text(&year, &dom::current_year().to_string());
    }
}

pub(super) fn bind(shared: &Rc<Shared>, listeners: &mut ListenerSet) {
    bind_press_feedback(&shared.document, listeners);
    bind_focus_marker(shared, listeners);
    bind_quick_contact(shared, listeners);
}

fn bind_press_feedback(document: &Document, listeners: &mut ListenerSet) {
    for element in dom::all_matches(document.query_selector_all(BUTTON_SELECTOR), BUTTON_SELECTOR) {
        let Some(button) = dom::cast::<HtmlElement>(element, BUTTON_SELECTOR) else {
            continue;
        };
        for phase in [PointerPhase::Down, PointerPhase::Up, PointerPhase::Leave] {
            let target = button.clone();
            listeners.listen(&button, phase.event_name(), move |_event| {
                dom::report(dom::set_style(&target, "transform", phase.transform()), "button press feedback");
            });
        }
    }
}

fn bind_focus_marker(shared: &Rc<Shared>, listeners: &mut ListenerSet) {
    let weak = Rc::downgrade(shared);
    listeners.listen(&shared.document, "keyup", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        let Some(shared) = weak.upgrade() else {
            return;
        };
        if !shared.focus.borrow_mut().observe_keyup(&key) {
            return;
        }
        if let Some(body) = shared.document.body() {
            dom::report(body.class_list().add_1(FOCUS_VISIBLE_CLASS).map_err(UiError::from), "focus marker");
        }
    });
}

/// Scroll to the contact section, then focus the name field once the
/// smooth scroll has had time to settle.
fn bind_quick_contact(shared: &Rc<Shared>, listeners: &mut ListenerSet) {
    let Some(trigger) = dom::by_id::<Element>(&shared.document, "btn-contact-quick") else {
        return;
    };
    let weak = Rc::downgrade(shared);
    listeners.listen(&trigger, "click", move |_event| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        if let Some(section) = shared.document.get_element_by_id("contact") {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
        let document = shared.document.clone();
        Timeout::new(shared.config.contact_focus_delay_ms, move || {
            if let Some(name) = dom::by_id::<HtmlElement>(&document, "name") {
                dom::report(name.focus().map_err(UiError::from), "focus name field");
            }
        })
        .forget();
    });
}
