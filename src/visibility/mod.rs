//! The scroll-and-visibility coordination layer.
//!
//! Pure state and rules for everything scroll-driven on the page: the
//! viewport tracker, the section registry, and the rule engine that decides
//! navbar state, active section, element reveals and scroll progress. No DOM
//! types appear here; the wasm layer in [`crate::page`] feeds browser
//! readings in and applies the computed state back out, which keeps all of
//! this testable with plain `cargo test`.

mod rules;
mod scroll_state;
mod sections;

pub use rules::{
    compute_navbar_state, element_visible, progress_percent, NavbarState, Rect, RevealLatch,
    RevealRule,
};
pub use scroll_state::{FrameGate, ScrollDirection, ScrollState};
pub use sections::{Section, SectionRegistry, StepDirection};
