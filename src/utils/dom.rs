//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, Window};

use crate::core::error::DomError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
pub fn document() -> Result<Document, DomError> {
    window()
        .and_then(|w| w.document())
        .ok_or(DomError::NoDocument)
}

/// Create an element and cast it to the requested HTML element type.
pub fn create<T: JsCast>(document: &Document, tag: &'static str) -> Result<T, DomError> {
    document
        .create_element(tag)
        .ok()
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(DomError::CreateFailed(tag))
}

/// Create a `<tag class="...">` element.
pub fn create_with_class(
    document: &Document,
    tag: &'static str,
    class: &str,
) -> Result<HtmlElement, DomError> {
    let element: HtmlElement = create(document, tag)?;
    element.set_class_name(class);
    Ok(element)
}

/// Append `child` to `parent`.
pub fn append(parent: &Node, child: &Node) -> Result<(), DomError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| DomError::TreeUpdate(format!("{e:?}")))
}

/// Remove every child node of `parent`.
pub fn clear_children(parent: &Node) -> Result<(), DomError> {
    while let Some(child) = parent.first_child() {
        parent
            .remove_child(&child)
            .map_err(|e| DomError::TreeUpdate(format!("{e:?}")))?;
    }
    Ok(())
}

/// Set inline style properties, ignoring values the browser rejects.
pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) {
    let style = element.style();
    for (name, value) in styles {
        let _ = style.set_property(name, value);
    }
}

/// First descendant of `root` carrying `class`, as an [`HtmlElement`].
pub fn find_by_class(root: &Element, class: &str) -> Option<HtmlElement> {
    root.query_selector(&format!(".{class}"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Force style recalculation so the current values become the start point
/// of a following CSS transition.
#[inline]
pub fn flush_styles(element: &Element) {
    let _ = element.get_bounding_client_rect();
}
