//! Inline notification banners.
//!
//! One banner at a time: showing a new one removes the current banner and
//! reschedules the dismiss timers, so a superseded dismissal can never act
//! on the wrong element. Colors come from the page's CSS custom properties.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::page::{icons, SharedState};

/// Slide-out animation length; removal runs after it completes.
const SLIDE_OUT_MS: i32 = 300;

const STYLE_ELEMENT_ID: &str = "vitrine-anim-styles";

/// Visual flavor of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotifyKind {
    Success,
    Error,
}

impl NotifyKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "notification success",
            Self::Error => "notification error",
        }
    }

    fn background(self) -> &'static str {
        match self {
            Self::Success => "var(--success)",
            Self::Error => "var(--error)",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "alert-circle",
        }
    }
}

/// Show a banner, replacing any existing one.
pub(crate) fn show(
    state: &Rc<RefCell<SharedState>>,
    document: &Document,
    message: &str,
    kind: NotifyKind,
) {
    ensure_keyframes(document);

    if let Some(existing) = dom::query(document, ".notification") {
        existing.remove();
    }

    let Some(body) = dom::body(document) else {
        return;
    };
    let Some(banner) = create_banner(document, message, kind) else {
        return;
    };
    if body.append_child(&banner).is_err() {
        return;
    }
    icons::refresh();

    // Slide out after the banner's lifetime, remove once the slide ends.
    let lifetime = state.borrow().options.notification_ms;
    let weak = Rc::downgrade(state);
    let banner_for_dismiss = banner.clone();
    state.borrow_mut().notify_dismiss_timer.schedule_with(lifetime, move || {
        dom::set_style(&banner_for_dismiss, "animation", "slideOutRight 0.3s ease");
        let Some(state) = weak.upgrade() else {
            return;
        };
        let banner = banner_for_dismiss.clone();
        state
            .borrow_mut()
            .notify_remove_timer
            .schedule_with(SLIDE_OUT_MS, move || {
                banner.remove();
            });
    });
}

fn create_banner(document: &Document, message: &str, kind: NotifyKind) -> Option<HtmlElement> {
    let banner = document
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    banner.set_class_name(kind.class());

    if let Ok(icon) = document.create_element("i") {
        let _ = icon.set_attribute("data-lucide", kind.icon());
        let _ = banner.append_child(&icon);
    }
    if let Ok(text) = document.create_element("span") {
        text.set_text_content(Some(message));
        let _ = banner.append_child(&text);
    }

    dom::set_style(&banner, "position", "fixed");
    dom::set_style(&banner, "top", "100px");
    dom::set_style(&banner, "right", "20px");
    dom::set_style(&banner, "background", kind.background());
    dom::set_style(&banner, "color", "white");
    dom::set_style(&banner, "padding", "1rem 1.5rem");
    dom::set_style(&banner, "border-radius", "var(--radius)");
    dom::set_style(&banner, "display", "flex");
    dom::set_style(&banner, "align-items", "center");
    dom::set_style(&banner, "gap", "0.75rem");
    dom::set_style(&banner, "box-shadow", "var(--shadow-lg)");
    dom::set_style(&banner, "z-index", "10000");
    dom::set_style(&banner, "animation", "slideInRight 0.3s ease");
    dom::set_style(&banner, "max-width", "400px");
    Some(banner)
}

/// Inject the banner keyframes once per document.
fn ensure_keyframes(document: &Document) {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(
        "@keyframes slideInRight {\
           from { transform: translateX(100%); opacity: 0; }\
           to { transform: translateX(0); opacity: 1; }\
         }\
         @keyframes slideOutRight {\
           from { transform: translateX(0); opacity: 1; }\
           to { transform: translateX(100%); opacity: 0; }\
         }\
         @keyframes spin {\
           from { transform: rotate(0deg); }\
           to { transform: rotate(360deg); }\
         }",
    ));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}
