//! Entrance animations driven by the browser's viewport-intersection
//! facility.
//!
//! Each element category gets its own observer configured from a
//! [`RevealRule`]; reveals are evaluated natively by the browser, never by
//! layout reads on scroll ticks. An element is unobserved the moment its
//! reveal fires, and that unobserve is the one-way latch: leaving and
//! re-entering the viewport can never replay an entrance.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;
use crate::page::SharedState;
use crate::timer;
use crate::visibility::RevealRule;

/// Observers plus their callbacks, owned for the page lifetime.
pub(crate) struct RevealWiring {
    pub(crate) observers: Vec<IntersectionObserver>,
    pub(crate) closures: Vec<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub(crate) fn wire(state: &Rc<RefCell<SharedState>>, document: &Document) -> RevealWiring {
    let mut wiring = RevealWiring {
        observers: Vec::new(),
        closures: Vec::new(),
    };
    let (skill_stagger, cert_stagger, fill_delay) = {
        let s = state.borrow();
        (
            s.options.skill_stagger_ms,
            s.options.cert_stagger_ms,
            s.options.level_fill_delay_ms,
        )
    };

    wire_class_reveal(&mut wiring, state, document, ".project-card");
    wire_class_reveal(&mut wiring, state, document, ".timeline-item");
    wire_staggered_reveal(&mut wiring, state, document, ".skill-category-card", skill_stagger);
    wire_staggered_reveal(&mut wiring, state, document, ".cert-card", cert_stagger);
    wire_level_fills(&mut wiring, state, document, fill_delay);
    wire_lazy_images(&mut wiring, state, document);
    wiring
}

/// Cards and timeline items: add the `visible` class once.
fn wire_class_reveal(
    wiring: &mut RevealWiring,
    state: &Rc<RefCell<SharedState>>,
    document: &Document,
    selector: &str,
) {
    let elements = dom::query_all(document, selector);
    if elements.is_empty() {
        return;
    }
    let weak = Rc::downgrade(state);
    let closure: ObserverClosure = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for_each_intersecting(&entries, |_, entry| {
                let target = entry.target();
                dom::add_class(&target, "visible");
                latch(&weak, &observer, &target);
            });
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    observe_all(wiring, closure, Some(&RevealRule::entrance()), &elements);
}

/// Skill and certification cards: inline fade-in, staggered by the index
/// of the entry within the delivered batch.
fn wire_staggered_reveal(
    wiring: &mut RevealWiring,
    state: &Rc<RefCell<SharedState>>,
    document: &Document,
    selector: &str,
    stagger_ms: i32,
) {
    let elements = dom::query_all(document, selector);
    if elements.is_empty() {
        return;
    }
    // Start hidden; the reveal transitions back to resting state.
    for element in &elements {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            dom::set_style(html, "opacity", "0");
            dom::set_style(html, "transform", "translateY(20px)");
            dom::set_style(html, "transition", "opacity 0.6s ease, transform 0.6s ease");
        }
    }

    let weak = Rc::downgrade(state);
    let closure: ObserverClosure = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for_each_intersecting(&entries, |batch_index, entry| {
                let target = entry.target();
                if let Some(html) = target.dyn_ref::<HtmlElement>() {
                    let html = html.clone();
                    timer::fire_once(batch_index * stagger_ms, move || {
                        dom::set_style(&html, "opacity", "1");
                        dom::set_style(&html, "transform", "translateY(0)");
                    });
                }
                latch(&weak, &observer, &target);
            });
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    observe_all(wiring, closure, Some(&RevealRule::entrance()), &elements);
}

/// Language skill bars: replay the width fill once, half on screen.
fn wire_level_fills(
    wiring: &mut RevealWiring,
    state: &Rc<RefCell<SharedState>>,
    document: &Document,
    fill_delay_ms: i32,
) {
    let elements = dom::query_all(document, ".level-fill");
    if elements.is_empty() {
        return;
    }
    let weak = Rc::downgrade(state);
    let closure: ObserverClosure = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for_each_intersecting(&entries, |_, entry| {
                let target = entry.target();
                if let Some(html) = target.dyn_ref::<HtmlElement>() {
                    let width = html.style().get_property_value("width").unwrap_or_default();
                    dom::set_style(html, "width", "0");
                    let html = html.clone();
                    timer::fire_once(fill_delay_ms, move || {
                        dom::set_style(&html, "width", &width);
                    });
                }
                latch(&weak, &observer, &target);
            });
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    observe_all(wiring, closure, Some(&RevealRule::level_fill()), &elements);
}

/// Lazy images: first visible pixel swaps `data-src` into `src`.
fn wire_lazy_images(
    wiring: &mut RevealWiring,
    state: &Rc<RefCell<SharedState>>,
    document: &Document,
) {
    let elements = dom::query_all(document, "img[data-src]");
    if elements.is_empty() {
        return;
    }
    let weak = Rc::downgrade(state);
    let closure: ObserverClosure = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for_each_intersecting(&entries, |_, entry| {
                let target = entry.target();
                if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
                    if let Some(src) = img.get_attribute("data-src") {
                        img.set_src(&src);
                    }
                    dom::remove_class(img, "lazy");
                }
                latch(&weak, &observer, &target);
            });
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    observe_all(wiring, closure, None, &elements);
}

/// Run `f` for each intersecting entry, passing its index within the batch
/// (the index drives stagger delays, matching delivery order).
fn for_each_intersecting(
    entries: &Array,
    mut f: impl FnMut(i32, &IntersectionObserverEntry),
) {
    let mut batch_index: i32 = 0;
    for value in entries.iter() {
        let Ok(entry) = value.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        if entry.is_intersecting() {
            f(batch_index, &entry);
        }
        batch_index = batch_index.saturating_add(1);
    }
}

/// Latch the reveal: unobserve so it can never replay, and count it.
fn latch(weak: &Weak<RefCell<SharedState>>, observer: &IntersectionObserver, target: &Element) {
    observer.unobserve(target);
    if let Some(state) = weak.upgrade() {
        state.borrow_mut().revealed_count += 1;
    }
}

fn observe_all(
    wiring: &mut RevealWiring,
    closure: ObserverClosure,
    rule: Option<&RevealRule>,
    elements: &[Element],
) {
    let observer = match rule {
        Some(rule) => {
            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(rule.threshold));
            init.set_root_margin(&format!("0px 0px -{}px 0px", rule.bottom_margin));
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init).ok()
        }
        None => IntersectionObserver::new(closure.as_ref().unchecked_ref()).ok(),
    };
    let Some(observer) = observer else {
        return;
    };
    for element in elements {
        observer.observe(element);
    }
    wiring.observers.push(observer);
    wiring.closures.push(closure);
}
