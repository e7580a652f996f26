//! Navbar presenter: scrolled styling, hide/show transform, and
//! active-link highlighting.
//!
//! Callers diff against cached state before invoking, so every function
//! here is safe to call redundantly; applying the same state twice produces
//! no additional visible change.

use web_sys::HtmlElement;

use crate::dom;
use crate::visibility::NavbarState;

/// Apply navbar visual state to the `.nav` element.
pub(crate) fn apply(nav: &HtmlElement, state: &NavbarState) {
    if state.scrolled {
        dom::add_class(nav, "scrolled");
    } else {
        dom::remove_class(nav, "scrolled");
    }
    let transform = if state.hidden {
        "translateY(-100%)"
    } else {
        "translateY(0)"
    };
    dom::set_style(nav, "transform", transform);
}

/// Move the `active` class to the link targeting the active section.
///
/// With no active section (above the first one) every link is cleared.
pub(crate) fn highlight_active(links: &[HtmlElement], active_id: Option<&str>) {
    for link in links {
        let href = link.get_attribute("href").unwrap_or_default();
        let is_active = active_id.is_some_and(|id| {
            href.strip_prefix('#').is_some_and(|target| target == id)
        });
        if is_active {
            dom::add_class(link, "active");
        } else {
            dom::remove_class(link, "active");
        }
    }
}
