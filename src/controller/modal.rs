//! Project detail dialog: open from cards, close from every dismissal path.
//!
//! All close paths funnel into [`close`], which consults `ModalState` first,
//! so a second close is a no-op and the scroll lock is released exactly once.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDialogElement, HtmlImageElement, KeyboardEvent, MouseEvent};

use super::Shared;
use crate::dom::{self, ListenerSet};
use crate::error::UiError;
use crate::state::modal::{Bounds, LOCKED_OVERFLOW, Presentation, closes_dialog, opens_card};
use crate::state::project::{ProjectAction, ProjectCard};
use crate::state::toast::Severity;

const DIALOG_ID: &str = "project-modal";
const CARD_SELECTOR: &str = ".project-card";
const DETAIL_SELECTOR: &str = ".btn-detail";
const CLOSE_SELECTOR: &str = ".modal-close";

pub struct ModalView {
    dialog: Element,
    title: Option<Element>,
    image: Option<Element>,
    description: Option<Element>,
    tech: Option<Element>,
    actions: Vec<(ProjectAction, Element)>,
}

impl ModalView {
    pub fn locate(document: &Document) -> Option<Self> {
        let dialog = dom::by_id(document, DIALOG_ID)?;
        Some(Self {
            dialog,
            title: dom::by_id(document, "modal-title"),
            image: dom::by_id(document, "modal-image"),
            description: dom::by_id(document, "modal-desc"),
            tech: dom::by_id(document, "modal-tech"),
            actions: ProjectAction::ALL
                .into_iter()
                .filter_map(|action| dom::by_id(document, action.element_id()).map(|link| (action, link)))
                .collect(),
        })
    }

    fn project(&self, card: &ProjectCard) {
        if let Some(title) = &self.title {
            dom::set_text(title, &card.title);
        }
        if let Some(image) = &self.image {
            if let Some(img) = image.dyn_ref::<HtmlImageElement>() {
                img.set_src(&card.image);
                img.set_alt(&card.title);
            } else {
                dom::report(image.set_attribute("src", &card.image).map_err(UiError::from), "modal image src");
                dom::report(image.set_attribute("alt", &card.title).map_err(UiError::from), "modal image alt");
            }
        }
        if let Some(description) = &self.description {
            dom::set_text(description, &card.description);
        }
        if let Some(tech) = &self.tech {
            dom::set_text(tech, &card.tech);
        }
    }

    /// Put the dialog on screen, preferring the native modal API.
    fn present(&self) -> Presentation {
        if let Some(dialog) = self.dialog.dyn_ref::<HtmlDialogElement>() {
            match dialog.show_modal() {
                Ok(()) => return Presentation::Native,
                Err(err) => log::debug!("showModal failed, using open attribute: {}", UiError::from(err)),
            }
        }
        dom::report(self.dialog.set_attribute("open", "").map_err(UiError::from), "dialog open attribute");
        Presentation::Attribute
    }

    fn dismiss(&self, presentation: Presentation) {
        if presentation == Presentation::Native {
            if let Some(dialog) = self.dialog.dyn_ref::<HtmlDialogElement>() {
                dialog.close();
                return;
            }
        }
        dom::report(self.dialog.remove_attribute("open").map_err(UiError::from), "dialog open attribute");
    }

    fn bounds(&self) -> Bounds {
        let rect = self.dialog.get_bounding_client_rect();
        Bounds { top: rect.top(), right: rect.right(), bottom: rect.bottom(), left: rect.left() }
    }
}

/// Show `card` in the dialog and lock page scroll.
pub(super) fn open(shared: &Rc<Shared>, card: ProjectCard) {
    let Some(view) = shared.modal.as_ref() else {
        log::debug!("no #{DIALOG_ID}; ignoring open for {}", card.title);
        return;
    };
    view.project(&card);
    rebind_actions(shared, view, &card.title);

    let shown = shared.modal_state.borrow().presentation();
    let presentation = match shown {
        Some(presentation) => presentation,
        None => view.present(),
    };

    let root = dom::root_element(&shared.document);
    let overflow = match root.as_ref().map(|root| root.style().get_property_value("overflow")) {
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            log::warn!("reading page overflow failed: {}", UiError::from(err));
            String::new()
        }
        None => String::new(),
    };
    let title = card.title.clone();
    let newly_opened = shared.modal_state.borrow_mut().open(card, presentation, &overflow);
    if !newly_opened {
        log::debug!("project dialog now shows {title}");
        return;
    }
    if let Some(root) = &root {
        dom::report(dom::set_style(root, "overflow", LOCKED_OVERFLOW), "scroll lock");
    }
    log::debug!("project dialog opened for {title} ({presentation:?})");
}

/// Close the dialog and restore page scroll. No-op when already closed.
pub(super) fn close(shared: &Shared) {
    let Some(view) = shared.modal.as_ref() else {
        return;
    };
    let Some(dismissal) = shared.modal_state.borrow_mut().close() else {
        return;
    };
    view.dismiss(dismissal.presentation);
    if let Some(root) = dom::root_element(&shared.document) {
        dom::report(dom::set_style(&root, "overflow", &dismissal.restore_overflow), "scroll unlock");
    }
    log::debug!("project dialog closed");
}

/// Point the action links at the card now shown; the old handlers are dropped.
fn rebind_actions(shared: &Rc<Shared>, view: &ModalView, title: &str) {
    let mut bound = ListenerSet::default();
    for (action, link) in &view.actions {
        let message = action.toast_message(title, &shared.config.messages);
        let toaster = Rc::downgrade(&shared.toaster);
        bound.listen(link, "click", move |event| {
            event.prevent_default();
            if let Some(toaster) = toaster.upgrade() {
                toaster.show(&message, Severity::Normal);
            }
        });
    }
    *shared.action_listeners.borrow_mut() = bound;
}

pub(super) fn bind(shared: &Rc<Shared>, listeners: &mut ListenerSet) {
    let document = &shared.document;

    for element in dom::all_matches(document.query_selector_all(CARD_SELECTOR), CARD_SELECTOR) {
        let card = ProjectCard::from_attributes(|name| element.get_attribute(name));

        if let Some(button) = dom::first_match(element.query_selector(DETAIL_SELECTOR), DETAIL_SELECTOR) {
            let weak = Rc::downgrade(shared);
            let card = card.clone();
            listeners.listen(&button, "click", move |event| {
                event.stop_propagation();
                if let Some(shared) = weak.upgrade() {
                    open(&shared, card.clone());
                }
            });
        }

        let weak = Rc::downgrade(shared);
        listeners.listen(&element, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if !opens_card(&key) {
                return;
            }
            if let Some(shared) = weak.upgrade() {
                open(&shared, card.clone());
            }
        });
    }

    let Some(view) = shared.modal.as_ref() else {
        return;
    };

    let weak = Rc::downgrade(shared);
    listeners.listen(&view.dialog, "click", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let outside = shared
            .modal
            .as_ref()
            .is_some_and(|view| view.bounds().is_outside(f64::from(mouse.client_x()), f64::from(mouse.client_y())));
        if outside {
            close(&shared);
        }
    });

    // Escape on a native modal fires `cancel`; route it through `close` so the
    // scroll lock is released.
    let weak = Rc::downgrade(shared);
    listeners.listen(&view.dialog, "cancel", move |event| {
        event.prevent_default();
        if let Some(shared) = weak.upgrade() {
            close(&shared);
        }
    });

    // Keeps state in sync when something else closes the dialog.
    let weak = Rc::downgrade(shared);
    listeners.listen(&view.dialog, "close", move |_event| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let reopened = shared
            .modal
            .as_ref()
            .and_then(|view| view.dialog.dyn_ref::<HtmlDialogElement>())
            .is_some_and(HtmlDialogElement::open);
        if !reopened {
            close(&shared);
        }
    });

    for button in dom::all_matches(document.query_selector_all(CLOSE_SELECTOR), CLOSE_SELECTOR) {
        let weak = Rc::downgrade(shared);
        listeners.listen(&button, "click", move |_event| {
            if let Some(shared) = weak.upgrade() {
                close(&shared);
            }
        });
    }

    let weak = Rc::downgrade(shared);
    listeners.listen(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if !closes_dialog(&key) {
            return;
        }
        if let Some(shared) = weak.upgrade() {
            close(&shared);
        }
    });
}
