//! Navbar visibility rule tests
//!
//! Tests for the scrolled/hidden decisions over scroll offset and
//! direction, including the exact threshold boundaries.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp, clippy::panic)]

use test_case::test_case;
use vitrine::config::PageOptions;
use vitrine::visibility::{compute_navbar_state, ScrollDirection, ScrollState};

fn tracker() -> ScrollState {
    ScrollState::new()
}

// =============================================================================
// SCROLLED STYLING THRESHOLD
// =============================================================================

#[test_case(49.0, false; "below threshold")]
#[test_case(50.0, false; "exactly at threshold stays plain")]
#[test_case(51.0, true; "one past threshold is scrolled")]
#[test_case(500.0, true; "deep in the page")]
fn test_scrolled_iff_past_fifty(offset: f64, expected: bool) {
    let mut scroll = tracker();
    scroll.advance(offset);
    let navbar = compute_navbar_state(&scroll, &PageOptions::default());
    assert_eq!(
        navbar.scrolled, expected,
        "scrolled at offset {offset} should be {expected}"
    );
}

// =============================================================================
// HIDE ON SCROLL DOWN
// =============================================================================

#[test]
fn test_hidden_only_when_moving_down_past_hundred() {
    let options = PageOptions::default();
    let mut scroll = tracker();

    scroll.advance(90.0);
    assert!(
        !compute_navbar_state(&scroll, &options).hidden,
        "down but not past the hide threshold"
    );

    scroll.advance(150.0);
    assert_eq!(scroll.direction, ScrollDirection::Down);
    assert!(compute_navbar_state(&scroll, &options).hidden);

    scroll.advance(140.0);
    assert_eq!(scroll.direction, ScrollDirection::Up);
    assert!(
        !compute_navbar_state(&scroll, &options).hidden,
        "scrolling up at any offset brings the navbar back"
    );
}

#[test]
fn test_scrolling_up_never_hides() {
    let options = PageOptions::default();
    let mut scroll = tracker();
    scroll.advance(5000.0);
    for offset in [4000.0, 2500.0, 300.0, 101.0, 0.0] {
        scroll.advance(offset);
        assert!(
            !compute_navbar_state(&scroll, &options).hidden,
            "upward move to {offset} must not hide"
        );
    }
}

#[test]
fn test_boundary_offset_with_down_direction_stays_visible() {
    let options = PageOptions::default();
    let mut scroll = tracker();
    scroll.advance(100.0);
    assert_eq!(scroll.direction, ScrollDirection::Down);
    let navbar = compute_navbar_state(&scroll, &options);
    assert!(!navbar.hidden, "offset 100 is not past the hide threshold");
    assert!(navbar.scrolled, "offset 100 is past the styling threshold");
}

// =============================================================================
// CUSTOM TUNING
// =============================================================================

#[test]
fn test_overridden_thresholds_apply() {
    let options = PageOptions {
        scrolled_threshold: 10.0,
        hide_threshold: 20.0,
        ..PageOptions::default()
    };
    let mut scroll = tracker();
    scroll.advance(15.0);
    let navbar = compute_navbar_state(&scroll, &options);
    assert!(navbar.scrolled);
    assert!(!navbar.hidden);

    scroll.advance(25.0);
    assert!(compute_navbar_state(&scroll, &options).hidden);
}

// =============================================================================
// STATE APPLICATION IS A PURE VALUE
// =============================================================================

#[test]
fn test_same_reading_computes_same_state() {
    // The presenter diffs against the previous value; equal inputs must
    // yield equal (and comparable) outputs for that to work.
    let options = PageOptions::default();
    let mut a = tracker();
    let mut b = tracker();
    a.advance(300.0);
    b.advance(300.0);
    assert_eq!(
        compute_navbar_state(&a, &options),
        compute_navbar_state(&b, &options)
    );
}
