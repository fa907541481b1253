//! Page controller: owns all feature state and every bound listener.
//!
//! ARCHITECTURE
//! ============
//! `Shared` holds element handles and per-feature state behind `RefCell`s.
//! Handlers capture `Weak<Shared>` only, so the listener closures never keep
//! the controller alive: dropping the [`PortfolioController`] detaches every
//! listener and frees the state. Each feature module exposes a `bind`
//! function and tolerates its elements being absent.

mod contact;
mod modal;
mod nav;
mod polish;
mod toast;

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Window};

use crate::config::PortfolioConfig;
use crate::dom::{self, ListenerSet};
use crate::error::UiError;
use crate::state::contact::ContactState;
use crate::state::modal::ModalState;
use crate::state::nav::NavState;
use crate::state::polish::FocusMarker;
use crate::state::toast::Severity;

use modal::ModalView;
use toast::Toaster;

pub(crate) struct Shared {
    window: Window,
    document: Document,
    config: PortfolioConfig,
    toaster: Rc<Toaster>,
    nav: RefCell<NavState>,
    modal: Option<ModalView>,
    modal_state: RefCell<ModalState>,
    /// Live-demo and repository handlers for the card currently shown.
    action_listeners: RefCell<ListenerSet>,
    contact: RefCell<ContactState>,
    focus: RefCell<FocusMarker>,
}

pub struct PortfolioController {
    shared: Rc<Shared>,
    listeners: ListenerSet,
}

impl PortfolioController {
    /// Stamp the year and attach every feature present in `document`.
    pub fn initialize(document: Document, config: PortfolioConfig) -> Result<Self, UiError> {
        let window = dom::window()?;
        let shared = Rc::new(Shared {
            toaster: Rc::new(Toaster::locate(&document, config.toast_duration_ms)),
            modal: ModalView::locate(&document),
            window,
            document,
            config,
            nav: RefCell::new(NavState::default()),
            modal_state: RefCell::new(ModalState::default()),
            action_listeners: RefCell::new(ListenerSet::default()),
            contact: RefCell::new(ContactState::default()),
            focus: RefCell::new(FocusMarker::default()),
        });

        polish::show_year(&shared.document);

        let mut listeners = ListenerSet::default();
        nav::bind(&shared, &mut listeners);
        modal::bind(&shared, &mut listeners);
        contact::bind(&shared, &mut listeners);
        polish::bind(&shared, &mut listeners);

        log::info!("portfolio controller ready with {} listeners", listeners.len());
        Ok(Self { shared, listeners })
    }

    /// Raise a toast through the page's single toast slot.
    pub fn toast(&self, message: &str, is_error: bool) {
        self.shared.toaster.show(message, Severity::from_error_flag(is_error));
    }

    /// Close the dialog if it is open.
    pub fn close_modal(&self) {
        modal::close(&self.shared);
    }

    /// Detach every listener, cancel the toast timer, and release the scroll
    /// lock if the dialog is still open.
    pub fn dispose(mut self) {
        modal::close(&self.shared);
        self.listeners.clear();
        let actions = std::mem::take(&mut *self.shared.action_listeners.borrow_mut());
        drop(actions);
        self.shared.toaster.cancel();
        log::info!("portfolio controller disposed");
    }
}
