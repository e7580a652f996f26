//! The visibility rule engine.
//!
//! Pure decisions consumed by the navbar presenter and the animation
//! trigger: navbar scrolled/hidden state, the viewport-intersection rule for
//! entrance reveals, scroll progress, and the one-way reveal latch.

use crate::config::PageOptions;
use crate::visibility::{ScrollDirection, ScrollState};

/// Navbar presentation state derived from scroll position and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct NavbarState {
    /// Past the top of the page: compact styling applies.
    pub scrolled: bool,
    /// Scrolling down through content: slide the navbar out of the way.
    pub hidden: bool,
}

/// Compute navbar state for the current scroll reading.
///
/// `scrolled` once the offset passes the styling threshold; `hidden` only
/// while moving down past the hide threshold. Scrolling up at any offset
/// brings the navbar back.
pub fn compute_navbar_state(scroll: &ScrollState, options: &PageOptions) -> NavbarState {
    NavbarState {
        scrolled: scroll.offset_y > options.scrolled_threshold,
        hidden: scroll.offset_y > options.hide_threshold
            && scroll.direction == ScrollDirection::Down,
    }
}

/// An axis-aligned box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    fn intersection_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.left.max(other.left);
        let h = self.bottom().min(other.bottom()) - self.top.max(other.top);
        w.max(0.0) * h.max(0.0)
    }
}

/// Intersection tuning for one category of observed elements.
///
/// The per-category numbers are preserved from the page's original tuning
/// and are exactly what the browser observer is configured with; treat them
/// as tuning, not load-bearing semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealRule {
    /// Minimum visible fraction of the element's area.
    pub threshold: f64,
    /// Pixels shaved off the bottom of the viewport, so reveals trigger
    /// slightly before the element clears the fold.
    pub bottom_margin: f64,
}

impl RevealRule {
    /// Cards, timeline items, skill and certification grids.
    pub const fn entrance() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 100.0,
        }
    }

    /// Language skill bars: replay only once half the bar is on screen.
    pub const fn level_fill() -> Self {
        Self {
            threshold: 0.5,
            bottom_margin: 0.0,
        }
    }

    /// Lazy images: any visible pixel loads the image.
    pub const fn lazy_image() -> Self {
        Self {
            threshold: 0.0,
            bottom_margin: 0.0,
        }
    }
}

/// Whether an element counts as visible under the given rule.
///
/// In the browser this decision is made natively by `IntersectionObserver`
/// (configured from the same rule), never by layout reads on scroll ticks;
/// this function exists so the rule itself is testable without one.
pub fn element_visible(element: &Rect, viewport: &Rect, rule: &RevealRule) -> bool {
    let effective = Rect {
        height: (viewport.height - rule.bottom_margin).max(0.0),
        ..*viewport
    };
    let element_area = element.area();
    if element_area <= 0.0 {
        return false;
    }
    let visible = element.intersection_area(&effective);
    if rule.threshold <= 0.0 {
        visible > 0.0
    } else {
        visible / element_area >= rule.threshold
    }
}

/// How far through the document the viewport has scrolled, in percent.
///
/// Returns 0 when the document fits the viewport (nothing to scroll).
pub fn progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let track = scroll_height - client_height;
    if track <= 0.0 {
        return 0.0;
    }
    (scroll_top / track * 100.0).clamp(0.0, 100.0)
}

/// One-way latch marking an element's entrance animation as played.
///
/// `fire()` reports true exactly once; leaving and re-entering the viewport
/// never replays a reveal.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the reveal. True the first time, false forever after.
    pub fn fire(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn state(offset: f64, direction: ScrollDirection) -> ScrollState {
        ScrollState {
            offset_y: offset,
            last_offset_y: 0.0,
            direction,
        }
    }

    #[test_case(50.0, false; "at boundary stays unscrolled")]
    #[test_case(51.0, true; "just past boundary is scrolled")]
    #[test_case(0.0, false; "top of page")]
    fn test_scrolled_boundary(offset: f64, expected: bool) {
        let navbar = compute_navbar_state(
            &state(offset, ScrollDirection::Up),
            &PageOptions::default(),
        );
        assert_eq!(navbar.scrolled, expected);
    }

    #[test]
    fn test_hidden_requires_down_past_threshold() {
        let options = PageOptions::default();
        assert!(compute_navbar_state(&state(101.0, ScrollDirection::Down), &options).hidden);
        assert!(!compute_navbar_state(&state(100.0, ScrollDirection::Down), &options).hidden);
        assert!(
            !compute_navbar_state(&state(5000.0, ScrollDirection::Up), &options).hidden,
            "scrolling up never hides the navbar"
        );
    }

    #[test]
    fn test_reveal_latch_is_monotonic() {
        let mut latch = RevealLatch::new();
        assert!(latch.fire());
        assert!(!latch.fire(), "second reveal must not replay");
        assert!(latch.has_fired());
    }

    #[test]
    fn test_element_visible_respects_bottom_margin() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let rule = RevealRule::entrance();
        // Sitting entirely inside the excluded bottom 100px.
        let below_fold = Rect::new(710.0, 0.0, 400.0, 80.0);
        assert!(!element_visible(&below_fold, &viewport, &rule));
        // Same element higher up clears the 10% bar.
        let on_screen = Rect::new(400.0, 0.0, 400.0, 80.0);
        assert!(element_visible(&on_screen, &viewport, &rule));
    }

    #[test]
    fn test_element_visible_threshold_fraction() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let rule = RevealRule::level_fill();
        // 40% visible: below the 50% bar.
        let peeking = Rect::new(760.0, 0.0, 200.0, 100.0);
        assert!(!element_visible(&peeking, &viewport, &rule));
        // 60% visible.
        let mostly_in = Rect::new(740.0, 0.0, 200.0, 100.0);
        assert!(element_visible(&mostly_in, &viewport, &rule));
    }

    #[test]
    fn test_lazy_rule_fires_on_any_pixel() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let sliver = Rect::new(799.0, 0.0, 200.0, 100.0);
        assert!(element_visible(&sliver, &viewport, &RevealRule::lazy_image()));
        let offscreen = Rect::new(801.0, 0.0, 200.0, 100.0);
        assert!(!element_visible(&offscreen, &viewport, &RevealRule::lazy_image()));
    }

    #[test]
    fn test_progress_percent_clamps() {
        assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(9999.0, 3000.0, 1000.0), 100.0);
        assert_eq!(
            progress_percent(0.0, 800.0, 1000.0),
            0.0,
            "document shorter than viewport has no progress"
        );
    }
}
