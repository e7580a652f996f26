//! Project grid filter bar.
//!
//! Buttons carry `data-filter`, cards carry `data-category`; the show/hide
//! decision is [`crate::filter::card_action`]. Hiding fades the card out and
//! removes it from the flow 300ms later; showing restores the flow first and
//! fades in on the next tick.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

use crate::dom;
use crate::filter::{card_action, CardAction};
use crate::page::SharedState;
use crate::timer;

const FADE_IN_DELAY_MS: i32 = 50;
const FADE_OUT_MS: i32 = 300;

pub(crate) fn wire(state: &Rc<RefCell<SharedState>>, document: &Document) {
    let buttons = dom::query_all(document, ".filter-btn");
    let cards = dom::query_all_html(document, ".project-card");
    if buttons.is_empty() || cards.is_empty() {
        return;
    }

    for button in &buttons {
        let state = Rc::clone(state);
        let button = button.clone();
        let all_buttons = buttons.clone();
        let cards = cards.clone();
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            for other in &all_buttons {
                dom::remove_class(other, "active");
            }
            dom::add_class(&button, "active");

            let filter = button.get_attribute("data-filter").unwrap_or_default();
            state.borrow_mut().active_filter.clone_from(&filter);

            for card in &cards {
                let category = card.get_attribute("data-category");
                match card_action(&filter, category.as_deref()) {
                    CardAction::Show => {
                        dom::set_style(card, "display", "block");
                        let card = card.clone();
                        timer::fire_once(FADE_IN_DELAY_MS, move || {
                            dom::set_style(&card, "opacity", "1");
                            dom::set_style(&card, "transform", "translateY(0)");
                        });
                    }
                    CardAction::Hide => {
                        dom::set_style(card, "opacity", "0");
                        dom::set_style(card, "transform", "translateY(20px)");
                        let card = card.clone();
                        timer::fire_once(FADE_OUT_MS, move || {
                            dom::set_style(&card, "display", "none");
                        });
                    }
                }
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
