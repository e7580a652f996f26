//! Icon library collaborator.
//!
//! The page's icons are `<i data-lucide="…">` placeholders rendered by a
//! global `lucide` object loaded separately. After any DOM mutation that
//! introduces or retargets a placeholder, `refresh()` asks the library to
//! re-render. An absent library is a silent no-op.

use wasm_bindgen::{JsCast, JsValue};

pub(crate) fn refresh() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(lucide) = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("lucide")) else {
        return;
    };
    if lucide.is_undefined() || lucide.is_null() {
        return;
    }
    let Ok(create_icons) = js_sys::Reflect::get(&lucide, &JsValue::from_str("createIcons")) else {
        return;
    };
    let Some(create_icons) = create_icons.dyn_ref::<js_sys::Function>() else {
        return;
    };
    let _ = create_icons.call0(&lucide);
}
