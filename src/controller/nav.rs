//! Mobile navigation toggle and small-screen link collapse.

use std::rc::Rc;

use web_sys::{Element, HtmlElement};

use super::Shared;
use crate::dom::{self, ListenerSet};
use crate::error::UiError;
use crate::state::nav::NavState;

const TOGGLE_SELECTOR: &str = ".nav-toggle";
const LIST_SELECTOR: &str = ".nav-list";
const LINK_SELECTOR: &str = ".nav-list a";

#[derive(Clone)]
struct NavView {
    toggle: Option<Element>,
    list: Option<HtmlElement>,
}

impl NavView {
    fn apply(&self, state: NavState) {
        if let Some(toggle) = &self.toggle {
            dom::report(
                toggle.set_attribute("aria-expanded", state.aria_value()).map_err(UiError::from),
                "nav aria-expanded",
            );
        }
        if let (Some(list), Some(display)) = (&self.list, state.list.css_value()) {
            dom::report(dom::set_style(list, "display", display), "nav list display");
        }
    }
}

pub(super) fn bind(shared: &Rc<Shared>, listeners: &mut ListenerSet) {
    let document = &shared.document;
    let view = NavView {
        toggle: dom::first_match(document.query_selector(TOGGLE_SELECTOR), TOGGLE_SELECTOR),
        list: dom::first_match(document.query_selector(LIST_SELECTOR), LIST_SELECTOR)
            .and_then(|list| dom::cast(list, LIST_SELECTOR)),
    };

    let aria = view.toggle.as_ref().and_then(|toggle| toggle.get_attribute("aria-expanded"));
    *shared.nav.borrow_mut() = NavState::from_aria(aria.as_deref());

    if let Some(toggle) = view.toggle.clone() {
        let weak = Rc::downgrade(shared);
        let view = view.clone();
        listeners.listen(&toggle, "click", move |_event| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let state = {
                let mut nav = shared.nav.borrow_mut();
                nav.toggle();
                *nav
            };
            view.apply(state);
        });
    }

    if view.list.is_none() {
        return;
    }
    for link in dom::all_matches(document.query_selector_all(LINK_SELECTOR), LINK_SELECTOR) {
        let weak = Rc::downgrade(shared);
        let view = view.clone();
        listeners.listen(&link, "click", move |_event| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let width = dom::viewport_width(&shared.window);
            let collapsed = {
                let mut nav = shared.nav.borrow_mut();
                nav.link_clicked(width, shared.config.nav_breakpoint_px).then_some(*nav)
            };
            if let Some(state) = collapsed {
                log::debug!("nav collapsed after link click at width {width}");
                view.apply(state);
            }
        });
    }
}
