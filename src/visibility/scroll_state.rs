//! Viewport tracker state.
//!
//! Owns the current scroll offset and the direction derived from the
//! previous reading. Scroll events can arrive far faster than the display
//! refreshes, so consumers gate updates through [`FrameGate`]: the raw event
//! handler asks the gate whether a frame is already pending, and the actual
//! state mutation happens once per animation frame.

/// Direction of the most recent scroll movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Scroll offset tracking with direction derivation.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current vertical scroll offset in pixels.
    pub offset_y: f64,
    /// Offset at the previous update.
    pub last_offset_y: f64,
    /// Direction implied by the last two readings.
    pub direction: ScrollDirection,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    /// State for a page that has not scrolled yet.
    pub fn new() -> Self {
        Self {
            offset_y: 0.0,
            last_offset_y: 0.0,
            direction: ScrollDirection::Up,
        }
    }

    /// Fold in a fresh scroll offset reading.
    ///
    /// Direction is `Down` only for a strictly increasing offset; a repeated
    /// reading while stationary keeps the navbar visible.
    pub fn advance(&mut self, new_offset_y: f64) {
        self.direction = if new_offset_y > self.offset_y {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_offset_y = self.offset_y;
        self.offset_y = new_offset_y;
    }
}

/// Pending-update flag that coalesces a burst of events into one frame.
///
/// `request()` reports whether the caller should schedule an animation
/// frame; further requests are swallowed until `finish()` re-arms the gate.
/// This is frame-coalescing discipline, not event-count throttling: however
/// many scroll events fire between two frames, the state updates once.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the caller should schedule a frame for this burst.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Re-arm after the scheduled frame has run.
    pub fn finish(&mut self) {
        self.pending = false;
    }
}
