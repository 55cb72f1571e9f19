//! Browser bindings for the page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here requires a browser environment (`hydrate` feature). Each
//! controller owns its `gloo_events::EventListener`s; dropping the controller
//! detaches them, so there is no global listener bookkeeping.

pub mod filter;
pub mod sidebar;
pub mod theme;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::PageError;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

/// `true` once the parser is done with the document (`interactive` or
/// `complete`).
pub fn is_ready(document: &Document) -> bool {
    document.ready_state() != "loading"
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, PageError> {
    document.get_element_by_id(id).ok_or_else(|| PageError::MissingElement(id.to_string()))
}

pub fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, PageError> {
    element_by_id(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::WrongElementType { id: id.to_string(), expected: "HtmlElement" })
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Add or remove `class` so its presence matches `on`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::warn!("could not set class {class:?}: {}", PageError::from(err));
    }
}
