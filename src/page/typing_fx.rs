//! Typing effect for the hero title.
//!
//! The prefix sequence comes from [`crate::typing::TypeWriter`]; this module
//! clears the title, installs the tick callback on the shared typing timer,
//! and lets the page-load handler start the sequence after its delay. The
//! tick reschedules its own timer, which the task supports by reusing the
//! installed closure.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use crate::dom;
use crate::page::SharedState;
use crate::typing::{TypeWriter, TYPING_MARKER};

/// Find the hero title and arm the effect. No marker phrase, no effect.
pub(crate) fn prepare(state: &Rc<RefCell<SharedState>>, document: &Document) {
    let Some(hero) = dom::query_html(document, ".hero-text h1") else {
        return;
    };
    let text = hero.text_content().unwrap_or_default();
    if !text.contains(TYPING_MARKER) {
        return;
    }

    hero.set_text_content(Some(""));
    let weak = Rc::downgrade(state);
    {
        let mut s = state.borrow_mut();
        s.typewriter = Some(TypeWriter::new(&text));
        s.typing_timer.set_callback(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let (frame, tick_ms) = {
                let mut s = state.borrow_mut();
                let frame = s.typewriter.as_mut().and_then(TypeWriter::next_frame);
                (frame, s.options.typing_tick_ms)
            };
            let Some(frame) = frame else {
                return;
            };
            hero.set_text_content(Some(&frame));
            state.borrow_mut().typing_timer.schedule(tick_ms);
        });
    }
}

/// Kick off the first tick after the configured start delay. Harmless when
/// `prepare` armed nothing (the timer has no callback installed).
pub(crate) fn start(state: &Rc<RefCell<SharedState>>) {
    let mut s = state.borrow_mut();
    let delay = s.options.typing_start_delay_ms;
    s.typing_timer.schedule(delay);
}
