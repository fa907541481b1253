//! Event listener handles that unregister themselves on drop.
//!
//! Holding the `Closure` next to its target keeps the JS callback alive for
//! exactly as long as the Rust handle, so dropping a `ListenerSet` both
//! detaches every handler and frees the closures.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::UiError;

pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, UiError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach {} listener: {}", self.event, UiError::from(err));
        }
    }
}

/// Listeners owned by one feature or by the whole controller.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<EventListener>,
}

impl ListenerSet {
    /// Attach `handler`, logging instead of failing when the browser refuses.
    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        match EventListener::new(target, event, handler) {
            Ok(listener) => self.listeners.push(listener),
            Err(err) => log::warn!("failed to attach {event} listener: {err}"),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Detach everything.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}
