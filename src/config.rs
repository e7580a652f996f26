//! Page tuning knobs.
//!
//! Every threshold the scroll and reveal machinery uses lives here with its
//! default value, so JavaScript callers can override any of them through
//! `Vitrine::with_options` without recompiling. Defaults match the page's
//! original tuning.

use serde::{Deserialize, Serialize};

/// Scroll offset (px) past which the navbar gets its `scrolled` styling.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Scroll offset (px) past which downward scrolling hides the navbar.
pub const HIDE_THRESHOLD: f64 = 100.0;

/// Early-trigger margin (px) for active-section detection. Navigation
/// highlighting anticipates section entry slightly before it is in view.
pub const EARLY_TRIGGER_MARGIN: f64 = 100.0;

/// Configuration for the scroll-and-visibility coordination layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageOptions {
    /// Navbar `scrolled` class threshold (px).
    pub scrolled_threshold: f64,
    /// Navbar hide-on-scroll-down threshold (px).
    pub hide_threshold: f64,
    /// Active-section early-trigger margin (px).
    pub early_trigger_margin: f64,
    /// Per-card stagger delay for skill category reveals (ms).
    pub skill_stagger_ms: i32,
    /// Per-card stagger delay for certification reveals (ms).
    pub cert_stagger_ms: i32,
    /// Delay before a skill bar replays its width fill (ms).
    pub level_fill_delay_ms: i32,
    /// Typing effect: one character per tick (ms).
    pub typing_tick_ms: i32,
    /// Typing effect: delay after window load before the first tick (ms).
    pub typing_start_delay_ms: i32,
    /// Simulated form round-trip time (ms).
    pub form_send_ms: i32,
    /// Delay before a sent form resets to idle (ms).
    pub form_reset_ms: i32,
    /// Notification banner lifetime before slide-out (ms).
    pub notification_ms: i32,
    /// Debounce window for resize re-measurement (ms).
    pub resize_debounce_ms: i32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            scrolled_threshold: SCROLLED_THRESHOLD,
            hide_threshold: HIDE_THRESHOLD,
            early_trigger_margin: EARLY_TRIGGER_MARGIN,
            skill_stagger_ms: 100,
            cert_stagger_ms: 50,
            level_fill_delay_ms: 300,
            typing_tick_ms: 50,
            typing_start_delay_ms: 1000,
            form_send_ms: 1500,
            form_reset_ms: 2000,
            notification_ms: 5000,
            resize_debounce_ms: 250,
        }
    }
}
