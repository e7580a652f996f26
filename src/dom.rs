//! Small DOM helpers shared by the page wiring modules.
//!
//! Every helper absorbs failure: a missing element or a rejected style write
//! disables one feature, never the page. Callers branch on `Option` and move
//! on.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(crate) fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    query(document, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    let Ok(list) = document.query_selector_all(selector) else {
        return out;
    };
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    out
}

pub(crate) fn query_all_html(document: &Document, selector: &str) -> Vec<HtmlElement> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub(crate) fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub(crate) fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// Body as an `HtmlElement`, for class toggles and overflow locking.
pub(crate) fn body(document: &Document) -> Option<HtmlElement> {
    document.body()
}
