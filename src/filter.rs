//! Project grid filtering.
//!
//! Filter buttons carry a `data-filter` value; project cards carry a
//! `data-category`. The decision of what happens to each card is pure, the
//! fade in/out choreography lives in the DOM layer.

/// Filter value meaning "show every card".
pub const FILTER_ALL: &str = "all";

/// What a filter change does to one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Display the card, then fade it in.
    Show,
    /// Fade the card out, then remove it from the flow.
    Hide,
}

/// Decide a card's fate under the active filter.
///
/// A card with no category only survives the `all` filter.
pub fn card_action(active_filter: &str, category: Option<&str>) -> CardAction {
    if active_filter == FILTER_ALL || category == Some(active_filter) {
        CardAction::Show
    } else {
        CardAction::Hide
    }
}
