//! Hover tooltips for `[data-tooltip]` elements.
//!
//! A single fixed-position div, created on mouseenter and removed on
//! mouseleave, centered above the element and clamped away from viewport
//! edges. All colors and borders delegate to CSS custom properties.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::dom;

/// Vertical gap between the element's top edge and the tooltip.
const TOOLTIP_RISE_PX: f64 = 40.0;

pub(crate) fn wire(document: &Document) {
    for element in dom::query_all(document, "[data-tooltip]") {
        let enter_document = document.clone();
        let enter_element = element.clone();
        let enter = Closure::wrap(Box::new(move |_event: MouseEvent| {
            show(&enter_document, &enter_element);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = element
            .add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        enter.forget();

        let leave_document = document.clone();
        let leave = Closure::wrap(Box::new(move |_event: MouseEvent| {
            hide(&leave_document);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = element
            .add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();
    }
}

fn show(document: &Document, element: &Element) {
    let Some(text) = element.get_attribute("data-tooltip").filter(|t| !t.is_empty()) else {
        return;
    };
    let Some(body) = dom::body(document) else {
        return;
    };
    let Some(tooltip) = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    tooltip.set_class_name("tooltip");
    tooltip.set_text_content(Some(&text));

    let rect = element.get_bounding_client_rect();
    dom::set_style(&tooltip, "position", "fixed");
    dom::set_style(&tooltip, "top", &format!("{}px", rect.top() - TOOLTIP_RISE_PX));
    dom::set_style(
        &tooltip,
        "left",
        &format!("{}px", rect.left() + rect.width() / 2.0),
    );
    dom::set_style(&tooltip, "transform", "translateX(-50%)");
    dom::set_style(&tooltip, "background", "var(--bg-alt)");
    dom::set_style(&tooltip, "color", "var(--text-primary)");
    dom::set_style(&tooltip, "padding", "0.5rem 1rem");
    dom::set_style(&tooltip, "border-radius", "var(--radius)");
    dom::set_style(&tooltip, "font-size", "0.875rem");
    dom::set_style(&tooltip, "white-space", "nowrap");
    dom::set_style(&tooltip, "z-index", "10000");
    dom::set_style(&tooltip, "box-shadow", "var(--shadow)");
    dom::set_style(&tooltip, "border", "1px solid var(--border)");
    dom::set_style(&tooltip, "pointer-events", "none");

    if body.append_child(&tooltip).is_err() {
        return;
    }

    // Clamp once the rendered size is known.
    let viewport_width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let tooltip_rect = tooltip.get_bounding_client_rect();
    if viewport_width > 0.0 && tooltip_rect.right() > viewport_width {
        dom::set_style(&tooltip, "left", "auto");
        dom::set_style(&tooltip, "right", "20px");
        dom::set_style(&tooltip, "transform", "none");
    }
    if tooltip_rect.left() < 0.0 {
        dom::set_style(&tooltip, "left", "20px");
        dom::set_style(&tooltip, "transform", "none");
    }
}

fn hide(document: &Document) {
    if let Some(tooltip) = dom::query(document, ".tooltip") {
        tooltip.remove();
    }
}
