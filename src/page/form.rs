//! Contact form wiring: validation feedback and the simulated round trip.
//!
//! Phase transitions live in [`crate::form::FormPhase`]; this module reads
//! the fields, drives the submit button through loading/sent/reset visuals,
//! and holds the two timers of the linear sequence as cancellable tasks.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlButtonElement, HtmlElement, HtmlFormElement};

use crate::dom;
use crate::form::{FormPhase, FormSubmission};
use crate::page::notify::{self, NotifyKind};
use crate::page::{icons, SharedState};

const SENDING_HTML: &str = "<i data-lucide=\"loader\"></i> Sending...";
const SENT_HTML: &str = "<i data-lucide=\"check\"></i> Sent Successfully!";
const SUCCESS_MESSAGE: &str =
    "Thank you for your message! I will get back to you within 24 hours.";

fn field_value(form: &HtmlFormElement, selector: &str) -> String {
    let Ok(Some(element)) = form.query_selector(selector) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

pub(crate) fn wire(
    state: &Rc<RefCell<SharedState>>,
    document: &Document,
) -> Vec<Closure<dyn FnMut(Event)>> {
    let mut closures = Vec::new();
    let Some(form) = dom::query(document, "#contactForm")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return closures;
    };

    let state = Rc::clone(state);
    let document = document.clone();
    let form_el = form.clone();
    let closure = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();

        let submission = FormSubmission::from_fields(
            &field_value(&form_el, "#name"),
            &field_value(&form_el, "#email"),
            &field_value(&form_el, "#subject"),
            &field_value(&form_el, "#message"),
        );

        let begin = {
            let mut s = state.borrow_mut();
            if s.form_phase == FormPhase::Idle {
                Some(s.form_phase.begin_send(&submission))
            } else {
                None
            }
        };
        let Some(begin) = begin else {
            return;
        };
        if let Err(error) = begin {
            notify::show(&state, &document, &error.to_string(), NotifyKind::Error);
            return;
        }

        let Some(button) = form_el
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let original_html = button.inner_html();
        button.set_inner_html(SENDING_HTML);
        set_disabled(&button, true);
        icons::refresh();

        // Simulated round trip, then a delayed reset to idle.
        let send_delay = state.borrow().options.form_send_ms;
        let weak = Rc::downgrade(&state);
        let document = document.clone();
        let form_for_reset = form_el.clone();
        let send_closure = move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.borrow_mut().form_phase.complete_send();
            button.set_inner_html(SENT_HTML);
            icons::refresh();
            notify::show(&state, &document, SUCCESS_MESSAGE, NotifyKind::Success);

            let reset_delay = state.borrow().options.form_reset_ms;
            let weak = Rc::downgrade(&state);
            let form = form_for_reset.clone();
            let button = button.clone();
            let original_html = original_html.clone();
            state
                .borrow_mut()
                .form_reset_timer
                .schedule_with(reset_delay, move || {
                    form.reset();
                    button.set_inner_html(&original_html);
                    set_disabled(&button, false);
                    icons::refresh();
                    if let Some(state) = weak.upgrade() {
                        state.borrow_mut().form_phase.reset();
                    }
                });
        };
        state
            .borrow_mut()
            .form_send_timer
            .schedule_with(send_delay, send_closure);
    }) as Box<dyn FnMut(Event)>);

    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closures.push(closure);
    closures
}

fn set_disabled(button: &HtmlElement, disabled: bool) {
    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    }
}
