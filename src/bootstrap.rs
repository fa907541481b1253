//! WASM entry points: start on module load, optional explicit dispose.

use std::cell::RefCell;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::config::PortfolioConfig;
use crate::controller::PortfolioController;
use crate::dom;
use crate::error::UiError;

thread_local! {
    static ACTIVE: RefCell<Option<PortfolioController>> = const { RefCell::new(None) };
}

/// Module start hook: install logging, then mount once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already installed: {err}")));
    }
    if let Err(err) = schedule_mount() {
        log::warn!("portfolio controller not started: {err}");
    }
}

/// Detach every listener installed by [`start`].
#[wasm_bindgen]
pub fn dispose() {
    let active = ACTIVE.with(|slot| slot.borrow_mut().take());
    if let Some(controller) = active {
        controller.dispose();
    }
}

/// Raise a toast from page scripts; no-op before the controller is mounted.
#[wasm_bindgen]
pub fn show_toast(message: &str, is_error: bool) {
    ACTIVE.with(|slot| {
        if let Some(controller) = slot.borrow().as_ref() {
            controller.toast(message, is_error);
        }
    });
}

/// Close the project dialog from page scripts, releasing the scroll lock.
#[wasm_bindgen]
pub fn close_project_modal() {
    ACTIVE.with(|slot| {
        if let Some(controller) = slot.borrow().as_ref() {
            controller.close_modal();
        }
    });
}

fn schedule_mount() -> Result<(), UiError> {
    let document = dom::window()?.document().ok_or_else(|| UiError::missing("document"))?;
    if !dom::is_loading(&document) {
        mount(document);
        return Ok(());
    }
    let target = document.clone();
    let on_ready = Closure::once_into_js(move || mount(document));
    target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

fn mount(document: Document) {
    let config = load_config(&document);
    match PortfolioController::initialize(document, config) {
        Ok(controller) => {
            let previous = ACTIVE.with(|slot| slot.borrow_mut().replace(controller));
            if let Some(previous) = previous {
                previous.dispose();
            }
        }
        Err(err) => log::warn!("portfolio controller failed to initialize: {err}"),
    }
}

/// Read overrides from the page's JSON config block, if it has one.
fn load_config(document: &Document) -> PortfolioConfig {
    let Some(raw) = document
        .get_element_by_id(PortfolioConfig::ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return PortfolioConfig::default();
    };
    match PortfolioConfig::from_json(&raw) {
        Ok(config) => {
            log::debug!("loaded #{} overrides", PortfolioConfig::ELEMENT_ID);
            config
        }
        Err(err) => {
            log::warn!("ignoring #{}: {err}", PortfolioConfig::ELEMENT_ID);
            PortfolioConfig::default()
        }
    }
}
