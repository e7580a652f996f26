//! The scroll pipeline: event coalescing, navbar state, active-link
//! highlighting, the progress bar, and smooth-scroll navigation.
//!
//! Scroll events are gated through [`FrameGate`] and folded into a single
//! `requestAnimationFrame` callback per burst. The frame callback is created
//! once at wire time (it holds a weak reference to shared state plus clones
//! of the DOM nodes it presents to) and lives in `SharedState`, the same way
//! the settle-timer closure would.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::page::{navbar, SharedState};
use crate::visibility::{compute_navbar_state, progress_percent, Section};

/// Measure every `<section id="…">` into registry entries, document order.
pub(crate) fn measure_sections(document: &Document) -> Vec<Section> {
    dom::query_all_html(document, "section[id]")
        .into_iter()
        .filter(|el| !el.id().is_empty())
        .map(|el| {
            Section::new(
                el.id(),
                f64::from(el.offset_top()),
                f64::from(el.offset_height()),
            )
        })
        .collect()
}

/// Create the fixed progress bar element and append it to the body.
pub(crate) fn create_progress_bar(document: &Document) -> Option<HtmlElement> {
    let body = dom::body(document)?;
    let bar = document
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    bar.set_class_name("scroll-progress");
    dom::set_style(&bar, "position", "fixed");
    dom::set_style(&bar, "top", "0");
    dom::set_style(&bar, "left", "0");
    dom::set_style(&bar, "width", "0%");
    dom::set_style(&bar, "height", "3px");
    dom::set_style(&bar, "background", "var(--accent-gradient)");
    dom::set_style(&bar, "z-index", "1001");
    dom::set_style(&bar, "transition", "width 0.1s ease");
    body.append_child(&bar).ok()?;
    Some(bar)
}

/// Build the per-frame update closure and park it in shared state.
///
/// One frame: refresh the tracker, recompute navbar + active section, and
/// apply only what changed. The progress bar tracks raw offset, so it always
/// updates.
pub(crate) fn install_frame_closure(
    state: &Rc<RefCell<SharedState>>,
    nav: Option<HtmlElement>,
    links: Vec<HtmlElement>,
    progress: Option<HtmlElement>,
) {
    let weak = Rc::downgrade(state);
    let closure = Closure::wrap(Box::new(move || {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let header_height = nav
            .as_ref()
            .map(|n| f64::from(n.offset_height()))
            .unwrap_or(0.0);

        // Compute deltas under the borrow, then drop it before touching the
        // DOM; style writes can synchronously fire events whose handlers
        // need the state.
        let (navbar_delta, active_delta) = {
            let mut s = state.borrow_mut();
            s.frame_gate.finish();
            s.scroll.advance(scroll_y);

            let computed = compute_navbar_state(&s.scroll, &s.options);
            let navbar_delta = if s.applied_navbar != Some(computed) {
                s.applied_navbar = Some(computed);
                Some(computed)
            } else {
                None
            };

            let active = s
                .registry
                .find_active(scroll_y, header_height)
                .map(str::to_string);
            let active_delta = if s.active_section != active {
                s.active_section.clone_from(&active);
                Some(active)
            } else {
                None
            };
            (navbar_delta, active_delta)
        };

        if let (Some(nav), Some(applied)) = (nav.as_ref(), navbar_delta.as_ref()) {
            navbar::apply(nav, applied);
        }
        if let Some(active) = active_delta {
            navbar::highlight_active(&links, active.as_deref());
        }
        if let Some(bar) = progress.as_ref() {
            update_progress(bar, scroll_y);
        }
    }) as Box<dyn FnMut()>);

    state.borrow_mut().frame_closure = Some(closure);
}

fn update_progress(bar: &HtmlElement, scroll_y: f64) {
    let Some(root) = dom::document().and_then(|d| d.document_element()) else {
        return;
    };
    let percent = progress_percent(
        scroll_y,
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    );
    dom::set_style(bar, "width", &format!("{percent}%"));
}

/// The raw `scroll` listener: ask the gate, schedule at most one frame.
pub(crate) fn scroll_listener(state: &Rc<RefCell<SharedState>>) -> Closure<dyn FnMut(Event)> {
    let weak = Rc::downgrade(state);
    Closure::wrap(Box::new(move |_event: Event| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        if !state.borrow_mut().frame_gate.request() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let s = state.borrow();
        if let Some(frame) = s.frame_closure.as_ref() {
            let _ = window.request_animation_frame(frame.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(Event)>)
}

/// Smooth-scroll the window to an absolute document offset.
pub(crate) fn scroll_window_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Wire every in-page anchor (`a[href^="#"]`) for smooth scrolling offset
/// by the live navbar height.
///
/// Per-anchor closures are leaked; they live as long as the anchor.
pub(crate) fn wire_anchor_scrolling(document: &Document, nav: Option<&HtmlElement>) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let document = document.clone();
        let nav = nav.cloned();
        let target_href = anchor.get_attribute("href").unwrap_or_default();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();
            if target_href == "#" {
                return;
            }
            let Some(target) = dom::query_html(&document, &target_href) else {
                return;
            };
            let header_height = nav
                .as_ref()
                .map(|n| f64::from(n.offset_height()))
                .unwrap_or(0.0);
            scroll_window_to(f64::from(target.offset_top()) - header_height);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = anchor
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
