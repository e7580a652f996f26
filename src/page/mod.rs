//! Main `Vitrine` struct - the wasm-exported entry point for the page.
//!
//! Constructing a `Vitrine` wires every behavior the page has: the scroll
//! pipeline (navbar effects, active-link highlighting, progress bar),
//! entrance reveals, the mobile menu, project filtering, the contact form,
//! the typing effect, tooltips and the page-load touches. Each feature is
//! guarded by its own element lookup; a missing element disables that
//! feature and nothing else.
//!
//! Event closures are owned by the struct (or deliberately leaked for
//! per-element handlers) so listeners stay alive for the page lifetime.

mod filters;
mod form;
mod icons;
mod menu;
mod navbar;
mod notify;
mod reveal;
mod scroll_fx;
mod tooltip;
mod typing_fx;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, IntersectionObserver, KeyboardEvent, MouseEvent, Window,
};

use crate::config::PageOptions;
use crate::error::VitrineError;
use crate::form::FormPhase;
use crate::menu::MenuState;
use crate::timer::DelayedTask;
use crate::typing::TypeWriter;
use crate::visibility::{
    FrameGate, NavbarState, ScrollDirection, ScrollState, SectionRegistry, StepDirection,
};
use crate::{dom, timer};

/// Delay before the status indicator starts pulsing after page load.
const STATUS_PULSE_DELAY_MS: i32 = 1000;

/// Shared state mutated from event handlers.
pub(crate) struct SharedState {
    pub(crate) options: PageOptions,
    pub(crate) scroll: ScrollState,
    pub(crate) frame_gate: FrameGate,
    pub(crate) registry: SectionRegistry,
    /// Last navbar state written to the DOM, for idempotent application.
    pub(crate) applied_navbar: Option<NavbarState>,
    pub(crate) active_section: Option<String>,
    pub(crate) menu: MenuState,
    pub(crate) form_phase: FormPhase,
    pub(crate) active_filter: String,
    pub(crate) revealed_count: u32,
    pub(crate) typewriter: Option<TypeWriter>,
    /// Per-frame scroll update callback, reused across animation frames.
    pub(crate) frame_closure: Option<Closure<dyn FnMut()>>,
    pub(crate) typing_timer: DelayedTask,
    pub(crate) form_send_timer: DelayedTask,
    pub(crate) form_reset_timer: DelayedTask,
    pub(crate) notify_dismiss_timer: DelayedTask,
    pub(crate) notify_remove_timer: DelayedTask,
    pub(crate) resize_debounce: DelayedTask,
}

impl SharedState {
    fn new(options: PageOptions, registry: SectionRegistry) -> Self {
        Self {
            options,
            scroll: ScrollState::new(),
            frame_gate: FrameGate::new(),
            registry,
            applied_navbar: None,
            active_section: None,
            menu: MenuState::new(),
            form_phase: FormPhase::Idle,
            active_filter: crate::filter::FILTER_ALL.to_string(),
            revealed_count: 0,
            typewriter: None,
            frame_closure: None,
            typing_timer: DelayedTask::new(),
            form_send_timer: DelayedTask::new(),
            form_reset_timer: DelayedTask::new(),
            notify_dismiss_timer: DelayedTask::new(),
            notify_remove_timer: DelayedTask::new(),
            resize_debounce: DelayedTask::new(),
        }
    }
}

/// Debug/diagnostic view of the page state.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageSnapshot {
    scroll_y: f64,
    direction: ScrollDirection,
    navbar: NavbarState,
    active_section: Option<String>,
    menu_open: bool,
    form_phase: FormPhase,
    active_filter: String,
    revealed: u32,
    section_count: usize,
}

/// The page controller exported to JavaScript.
#[wasm_bindgen]
pub struct Vitrine {
    state: Rc<RefCell<SharedState>>,
    #[allow(dead_code)] // Kept to maintain listener lifetime
    event_closures: Vec<Closure<dyn FnMut(Event)>>,
    #[allow(dead_code)]
    mouse_closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[allow(dead_code)]
    key_closure: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    #[allow(dead_code)]
    observers: Vec<IntersectionObserver>,
    #[allow(dead_code)]
    observer_closures: Vec<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

#[wasm_bindgen]
impl Vitrine {
    /// Wire the page with default tuning.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Vitrine, JsValue> {
        Self::init(PageOptions::default())
    }

    /// Wire the page with tuning overrides (camelCase keys, all optional).
    #[wasm_bindgen(js_name = "withOptions")]
    pub fn with_options(options: JsValue) -> Result<Vitrine, JsValue> {
        let options: PageOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|e| VitrineError::Options(e.to_string()))?;
        Self::init(options)
    }

    fn init(options: PageOptions) -> Result<Vitrine, JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window()
            .ok_or_else(|| VitrineError::Environment("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| VitrineError::Environment("no document".to_string()))?;

        let margin = options.early_trigger_margin;
        let registry =
            SectionRegistry::with_margin(scroll_fx::measure_sections(&document), margin);
        let state = Rc::new(RefCell::new(SharedState::new(options, registry)));

        icons::refresh();

        let mut event_closures: Vec<Closure<dyn FnMut(Event)>> = Vec::new();
        let mut mouse_closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();

        // Scroll pipeline: one coalesced frame per event burst.
        let nav = dom::query_html(&document, ".nav");
        let links = dom::query_all_html(&document, ".nav-links a");
        let progress = scroll_fx::create_progress_bar(&document);
        scroll_fx::install_frame_closure(&state, nav.clone(), links, progress);
        {
            let scroll_closure = scroll_fx::scroll_listener(&state);
            let _ = window.add_event_listener_with_callback(
                "scroll",
                scroll_closure.as_ref().unchecked_ref(),
            );
            event_closures.push(scroll_closure);
        }

        scroll_fx::wire_anchor_scrolling(&document, nav.as_ref());

        let (menu_elements, menu_closures) = menu::wire(&state, &document);
        mouse_closures.extend(menu_closures);

        filters::wire(&state, &document);
        let reveal_wiring = reveal::wire(&state, &document);
        event_closures.extend(form::wire(&state, &document));
        typing_fx::prepare(&state, &document);
        tooltip::wire(&document);
        Self::wire_download_tracking(&document);
        Self::wire_load(&state, &window, &document, &mut event_closures);
        Self::wire_resize(&state, &window, &mut event_closures);
        let key_closure = Self::wire_keyboard(&state, &document, nav, menu_elements);

        Ok(Vitrine {
            state,
            event_closures,
            mouse_closures,
            key_closure,
            observers: reveal_wiring.observers,
            observer_closures: reveal_wiring.closures,
        })
    }

    /// Current page state as a plain JS object.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.make_snapshot())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Current page state as a JSON string.
    #[wasm_bindgen(js_name = "snapshotJson")]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.make_snapshot())
            .map_err(|e| JsValue::from(VitrineError::Snapshot(e)))
    }

    /// Re-measure section offsets now (normally debounced behind resize).
    #[wasm_bindgen]
    pub fn remeasure(&self) {
        let Some(document) = dom::document() else {
            return;
        };
        let sections = scroll_fx::measure_sections(&document);
        self.state.borrow_mut().registry.replace(sections);
    }

    fn make_snapshot(&self) -> PageSnapshot {
        let s = self.state.borrow();
        PageSnapshot {
            scroll_y: s.scroll.offset_y,
            direction: s.scroll.direction,
            navbar: s.applied_navbar.unwrap_or_default(),
            active_section: s.active_section.clone(),
            menu_open: s.menu.is_open(),
            form_phase: s.form_phase,
            active_filter: s.active_filter.clone(),
            revealed: s.revealed_count,
            section_count: s.registry.sections().len(),
        }
    }

    /// Console breadcrumb for download links (`a[download]`).
    fn wire_download_tracking(document: &Document) {
        for anchor in dom::query_all(document, "a[download]") {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
                web_sys::console::log_1(&JsValue::from_str(&format!("download: {href}")));
            }) as Box<dyn FnMut(MouseEvent)>);
            let _ = anchor
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Page-load touches: `loaded` class, status-indicator pulse, typing
    /// effect start. Runs immediately when the load event already fired.
    fn wire_load(
        state: &Rc<RefCell<SharedState>>,
        window: &Window,
        document: &Document,
        event_closures: &mut Vec<Closure<dyn FnMut(Event)>>,
    ) {
        let on_load = {
            let state = Rc::clone(state);
            let document = document.clone();
            move || {
                if let Some(body) = dom::body(&document) {
                    dom::add_class(&body, "loaded");
                }
                if let Some(indicator) = dom::query_html(&document, ".status-indicator") {
                    timer::fire_once(STATUS_PULSE_DELAY_MS, move || {
                        dom::set_style(&indicator, "animation", "statusPulse 2s infinite");
                    });
                }
                typing_fx::start(&state);
            }
        };

        if document.ready_state() == "complete" {
            on_load();
            return;
        }
        let mut on_load = Some(on_load);
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            if let Some(f) = on_load.take() {
                f();
            }
        }) as Box<dyn FnMut(Event)>);
        let _ =
            window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
        event_closures.push(closure);
    }

    /// Debounced resize: re-measure sections, refresh icons.
    fn wire_resize(
        state: &Rc<RefCell<SharedState>>,
        window: &Window,
        event_closures: &mut Vec<Closure<dyn FnMut(Event)>>,
    ) {
        let weak = Rc::downgrade(state);
        state.borrow_mut().resize_debounce.set_callback(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let Some(document) = dom::document() else {
                return;
            };
            let sections = scroll_fx::measure_sections(&document);
            state.borrow_mut().registry.replace(sections);
            icons::refresh();
        });

        let state = Rc::clone(state);
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            let mut s = state.borrow_mut();
            let delay = s.options.resize_debounce_ms;
            s.resize_debounce.schedule(delay);
        }) as Box<dyn FnMut(Event)>);
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        event_closures.push(closure);
    }

    /// Document-level keys: Escape closes the menu, arrows step sections
    /// when focus is outside form fields.
    fn wire_keyboard(
        state: &Rc<RefCell<SharedState>>,
        document: &Document,
        nav: Option<web_sys::HtmlElement>,
        menu_elements: Option<menu::MenuElements>,
    ) -> Option<Closure<dyn FnMut(KeyboardEvent)>> {
        let state = Rc::clone(state);
        let listener_document = document.clone();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let key = event.key();
            if key == "Escape" {
                if let Some(elements) = menu_elements.as_ref() {
                    menu::close(&state, &listener_document, elements);
                }
                return;
            }

            let direction = match key.as_str() {
                "ArrowDown" => StepDirection::Down,
                "ArrowUp" => StepDirection::Up,
                _ => return,
            };
            let in_field = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el.matches("input, textarea, select").unwrap_or(false));
            if in_field {
                return;
            }
            event.prevent_default();

            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            let target_top = {
                let s = state.borrow();
                s.registry
                    .step_target(scroll_y, direction)
                    .map(|section| section.top_offset)
            };
            if let Some(top) = target_top {
                let header_height = nav
                    .as_ref()
                    .map(|n| f64::from(n.offset_height()))
                    .unwrap_or(0.0);
                scroll_fx::scroll_window_to(top - header_height);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        Some(closure)
    }
}
