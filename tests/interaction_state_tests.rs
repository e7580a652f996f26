//! Interaction state tests
//!
//! Mobile menu latch journeys, project filter decisions, the typing effect
//! sequence, and scroll-event frame coalescing.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp, clippy::panic)]

use vitrine::filter::{card_action, CardAction, FILTER_ALL};
use vitrine::menu::{MenuIcon, MenuState};
use vitrine::typing::{TypeWriter, TYPING_MARKER};
use vitrine::visibility::{FrameGate, ScrollState};

// =============================================================================
// MOBILE MENU
// =============================================================================

#[test]
fn test_menu_journey_open_link_outside_escape() {
    let mut menu = MenuState::new();

    // Open via button.
    assert!(menu.toggle());
    assert_eq!(menu.icon(), MenuIcon::Close);
    assert_eq!(menu.aria_label(), "Close menu");

    // A nav link click closes it.
    assert!(menu.close());

    // Outside click while already closed: no change, twice in a row.
    assert!(!menu.outside_click(false));
    assert!(!menu.outside_click(false));

    // Open again, Escape closes.
    menu.toggle();
    assert!(menu.close());
    assert!(!menu.close(), "Escape on a closed menu is a no-op");
}

#[test]
fn test_clicks_inside_menu_do_not_close_it() {
    let mut menu = MenuState::new();
    menu.toggle();
    assert!(!menu.outside_click(true));
    assert!(menu.is_open());
}

// =============================================================================
// PROJECT FILTER
// =============================================================================

#[test]
fn test_filter_all_shows_everything() {
    for category in [Some("ml"), Some("web"), None] {
        assert_eq!(card_action(FILTER_ALL, category), CardAction::Show);
    }
}

#[test]
fn test_specific_filter_partitions_cards() {
    let cards = [Some("ml"), Some("web"), Some("ml"), None];
    let shown = cards
        .iter()
        .filter(|c| card_action("ml", c.as_deref()) == CardAction::Show)
        .count();
    assert_eq!(shown, 2, "only the two ml cards survive the ml filter");
}

// =============================================================================
// TYPING EFFECT
// =============================================================================

#[test]
fn test_typewriter_replays_the_full_title() {
    let title = format!("{TYPING_MARKER} Data Engineer");
    let mut tw = TypeWriter::new(&title);
    let mut last = String::new();
    let mut frames = 0;
    while let Some(frame) = tw.next_frame() {
        assert!(
            frame.starts_with(&last),
            "each frame extends the previous one"
        );
        last = frame;
        frames += 1;
    }
    assert_eq!(last, title);
    assert_eq!(frames, title.chars().count());
}

// =============================================================================
// FRAME COALESCING
// =============================================================================

#[test]
fn test_event_burst_collapses_to_one_update() {
    let mut gate = FrameGate::new();
    let mut scroll = ScrollState::new();
    let mut updates = 0;

    // A fast trackpad fires a burst of events before the next frame.
    for _ in 0..25 {
        if gate.request() {
            updates += 1;
        }
    }
    // The one scheduled frame reads the final offset.
    scroll.advance(480.0);
    gate.finish();
    assert_eq!(updates, 1, "25 events within one frame schedule one update");
    assert_eq!(scroll.offset_y, 480.0);

    // The next burst schedules again.
    assert!(gate.request());
}
