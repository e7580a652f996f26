//! DOM side of the mobile navigation menu.
//!
//! The open/closed decision lives in [`crate::menu::MenuState`]; this module
//! queries the elements, wires the click paths and projects the latch onto
//! the DOM: `active` class, body scroll lock, button icon and aria-label.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Node};

use crate::dom;
use crate::menu::{MenuIcon, MenuState};
use crate::page::{icons, SharedState};

/// Elements the keyboard handler needs to close the menu later.
pub(crate) struct MenuElements {
    pub(crate) button: HtmlElement,
    pub(crate) container: HtmlElement,
}

/// Project the latch state onto the DOM.
pub(crate) fn apply(menu: &MenuState, document: &Document, elements: &MenuElements) {
    if menu.is_open() {
        dom::add_class(&elements.container, "active");
    } else {
        dom::remove_class(&elements.container, "active");
    }

    if let Some(body) = dom::body(document) {
        let overflow = if menu.is_open() { "hidden" } else { "" };
        dom::set_style(&body, "overflow", overflow);
    }

    if let Ok(Some(icon)) = elements.button.query_selector("i") {
        let name = match menu.icon() {
            MenuIcon::Menu => "menu",
            MenuIcon::Close => "x",
        };
        let _ = icon.set_attribute("data-lucide", name);
    }
    let _ = elements.button.set_attribute("aria-label", menu.aria_label());
    icons::refresh();
}

/// Close the menu if it is open, and reflect the change. Idempotent.
pub(crate) fn close(
    state: &Rc<RefCell<SharedState>>,
    document: &Document,
    elements: &MenuElements,
) {
    let (changed, menu) = {
        let mut s = state.borrow_mut();
        (s.menu.close(), s.menu)
    };
    if changed {
        apply(&menu, document, elements);
    }
}

/// Wire the toggle button, link clicks and the document-level outside
/// click. Returns the elements for the Escape handler, or `None` when the
/// page has no mobile menu (feature disabled).
pub(crate) fn wire(
    state: &Rc<RefCell<SharedState>>,
    document: &Document,
) -> (Option<MenuElements>, Vec<Closure<dyn FnMut(MouseEvent)>>) {
    let mut closures = Vec::new();
    let Some(button) = dom::query_html(document, ".mobile-menu-btn") else {
        return (None, closures);
    };
    let Some(container) = dom::query_html(document, ".nav-links") else {
        return (None, closures);
    };
    let elements = MenuElements {
        button: button.clone(),
        container: container.clone(),
    };

    // Toggle on button click.
    {
        let state = Rc::clone(state);
        let document = document.clone();
        let button = button.clone();
        let container = container.clone();
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            let menu = {
                let mut s = state.borrow_mut();
                s.menu.toggle();
                s.menu
            };
            let elements = MenuElements {
                button: button.clone(),
                container: container.clone(),
            };
            apply(&menu, &document, &elements);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closures.push(closure);
    }

    // Close when a nav link is followed.
    for link in dom::query_all(document, ".nav-links a") {
        let state = Rc::clone(state);
        let document = document.clone();
        let button = button.clone();
        let container = container.clone();
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            let elements = MenuElements {
                button: button.clone(),
                container: container.clone(),
            };
            close(&state, &document, &elements);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Close on a click outside the menu and its button.
    {
        let state = Rc::clone(state);
        let document = document.clone();
        let button = button.clone();
        let container = container.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .is_some_and(|node| {
                    container.contains(Some(&node)) || button.contains(Some(&node))
                });
            let (changed, menu) = {
                let mut s = state.borrow_mut();
                (s.menu.outside_click(inside), s.menu)
            };
            if changed {
                let elements = MenuElements {
                    button: button.clone(),
                    container: container.clone(),
                };
                apply(&menu, &document, &elements);
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = document
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closures.push(closure);
    }

    (Some(elements), closures)
}
