//! Thin `web-sys` helpers shared by the controller features.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lookups return `Option` and log at debug level when an element is absent,
//! so a page variant without (say) a toast element simply loses that feature.
//! DOM calls that can throw return `Result<_, UiError>`; feature code reports
//! them through [`report`] and carries on.

pub mod listener;

pub use listener::{EventListener, ListenerSet};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or_else(|| UiError::missing("window"))
}

/// Element with `id`, cast to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let Some(element) = document.get_element_by_id(id) else {
        log::debug!("#{id} not found; dependent feature disabled");
        return None;
    };
    cast(element, id)
}

/// Cast `element`, logging when it is not the expected type.
pub fn cast<T: JsCast>(element: Element, what: &str) -> Option<T> {
    match element.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(element) => {
            log::debug!("{what} is a <{}>, not the expected element type", element.tag_name());
            None
        }
    }
}

/// Unwrap a `query_selector` result.
pub fn first_match(found: Result<Option<Element>, JsValue>, selector: &str) -> Option<Element> {
    match found {
        Ok(Some(element)) => Some(element),
        Ok(None) => {
            log::debug!("{selector} not found; dependent feature disabled");
            None
        }
        Err(err) => {
            log::warn!("query {selector} failed: {}", UiError::from(err));
            None
        }
    }
}

/// Unwrap a `query_selector_all` result into elements.
pub fn all_matches(found: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    match found {
        Ok(list) => (0..list.length())
            .filter_map(|index| list.item(index))
            .flat_map(|node| node.dyn_into::<Element>())
            .collect(),
        Err(err) => {
            log::warn!("query {selector} failed: {}", UiError::from(err));
            Vec::new()
        }
    }
}

/// Write an inline style property; an empty value removes it.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), UiError> {
    element.style().set_property(property, value)?;
    Ok(())
}

pub fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Log a failed DOM call without interrupting the caller.
pub fn report(result: Result<(), UiError>, context: &str) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}

/// `<html>` as an `HtmlElement`, for the scroll lock.
pub fn root_element(document: &Document) -> Option<HtmlElement> {
    let Some(root) = document.document_element() else {
        log::debug!("document has no root element");
        return None;
    };
    cast(root, "document root")
}

/// Layout viewport width in CSS px; unknown widths count as wide.
pub fn viewport_width(window: &Window) -> f64 {
    match window.inner_width() {
        Ok(width) => width.as_f64().unwrap_or(f64::INFINITY),
        Err(err) => {
            log::warn!("innerWidth unavailable: {}", UiError::from(err));
            f64::INFINITY
        }
    }
}

/// `true` while the parser is still building the document.
pub fn is_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Read the value of an `<input>` or `<textarea>`; anything else reads empty.
pub fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}
