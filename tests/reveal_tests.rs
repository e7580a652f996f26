//! Reveal rule and latch tests
//!
//! The viewport-intersection rule per element category, the one-way reveal
//! latch, and scroll progress.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp, clippy::panic)]

use test_case::test_case;
use vitrine::visibility::{element_visible, progress_percent, Rect, RevealLatch, RevealRule};

/// 1000x800 viewport anchored at the origin.
fn viewport() -> Rect {
    Rect::new(0.0, 0.0, 1000.0, 800.0)
}

// =============================================================================
// ENTRANCE RULE (cards, timeline, skill/cert grids)
// =============================================================================

#[test]
fn test_entrance_ignores_bottom_hundred_pixels() {
    let rule = RevealRule::entrance();
    // Fully on screen, but entirely inside the excluded bottom band.
    let card = Rect::new(705.0, 100.0, 300.0, 90.0);
    assert!(!element_visible(&card, &viewport(), &rule));
    // The same card 200px higher is well inside the effective viewport.
    let card = Rect::new(505.0, 100.0, 300.0, 90.0);
    assert!(element_visible(&card, &viewport(), &rule));
}

#[test]
fn test_entrance_needs_ten_percent_of_area() {
    let rule = RevealRule::entrance();
    // 1000px-tall card with only 50px past the effective fold: 5%.
    let barely = Rect::new(650.0, 0.0, 400.0, 1000.0);
    assert!(!element_visible(&barely, &viewport(), &rule));
    // 150px visible of 1000px: 15%.
    let enough = Rect::new(550.0, 0.0, 400.0, 1000.0);
    assert!(element_visible(&enough, &viewport(), &rule));
}

#[test]
fn test_offscreen_horizontally_is_not_visible() {
    let rule = RevealRule::entrance();
    let card = Rect::new(100.0, 1200.0, 300.0, 200.0);
    assert!(!element_visible(&card, &viewport(), &rule));
}

#[test]
fn test_zero_area_element_is_never_visible() {
    let rule = RevealRule::entrance();
    let empty = Rect::new(100.0, 100.0, 0.0, 0.0);
    assert!(!element_visible(&empty, &viewport(), &rule));
}

// =============================================================================
// PER-CATEGORY TUNING
// =============================================================================

#[test_case(RevealRule::entrance(), 0.1, 100.0; "entrance")]
#[test_case(RevealRule::level_fill(), 0.5, 0.0; "level fill")]
#[test_case(RevealRule::lazy_image(), 0.0, 0.0; "lazy image")]
fn test_category_rules_carry_their_tuning(rule: RevealRule, threshold: f64, margin: f64) {
    assert_eq!(rule.threshold, threshold);
    assert_eq!(rule.bottom_margin, margin);
}

#[test]
fn test_level_fill_waits_for_half() {
    let rule = RevealRule::level_fill();
    let bar = Rect::new(770.0, 0.0, 300.0, 80.0); // 30/80 visible
    assert!(!element_visible(&bar, &viewport(), &rule));
    let bar = Rect::new(750.0, 0.0, 300.0, 80.0); // 50/80 visible
    assert!(element_visible(&bar, &viewport(), &rule));
}

// =============================================================================
// ONE-WAY LATCH
// =============================================================================

#[test]
fn test_latch_survives_leave_and_reenter() {
    let rule = RevealRule::entrance();
    let mut latch = RevealLatch::new();
    let mut reveals = 0;

    // Scroll journey: element enters, leaves, enters again.
    let positions = [
        Rect::new(500.0, 0.0, 300.0, 200.0),  // in view
        Rect::new(-400.0, 0.0, 300.0, 200.0), // scrolled past
        Rect::new(500.0, 0.0, 300.0, 200.0),  // back in view
    ];
    for position in positions {
        if element_visible(&position, &viewport(), &rule) && latch.fire() {
            reveals += 1;
        }
    }
    assert_eq!(reveals, 1, "entrance transition must play exactly once");
}

// =============================================================================
// SCROLL PROGRESS
// =============================================================================

#[test]
fn test_progress_tracks_scrolled_fraction() {
    assert_eq!(progress_percent(0.0, 4000.0, 1000.0), 0.0);
    assert_eq!(progress_percent(750.0, 4000.0, 1000.0), 25.0);
    assert_eq!(progress_percent(3000.0, 4000.0, 1000.0), 100.0);
}

#[test]
fn test_progress_handles_unscrollable_document() {
    assert_eq!(progress_percent(0.0, 900.0, 1000.0), 0.0);
    assert_eq!(progress_percent(0.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn test_progress_clamps_overscroll() {
    // Rubber-band overscroll can report offsets past the track.
    assert_eq!(progress_percent(-50.0, 4000.0, 1000.0), 0.0);
    assert_eq!(progress_percent(3200.0, 4000.0, 1000.0), 100.0);
}
