//! vitrine - portfolio page interaction layer for the web
//!
//! Drives a static portfolio page's client-side behavior via WebAssembly:
//! - Scroll-coordinated navbar (compact styling, hide on scroll down)
//! - Active navigation highlighting and a scroll progress bar
//! - One-shot entrance animations via viewport intersection
//! - Mobile menu, project filtering, tooltips, typing effect
//! - Simulated contact-form submission with inline notifications
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { Vitrine } from 'vitrine';
//! await init();
//! const page = new Vitrine();
//! console.log(page.snapshotJson());
//! ```
//!
//! The scroll/visibility rules are pure Rust with no DOM types, so the whole
//! decision layer is testable natively; only the `page` wiring requires a
//! browser.

// Pure state and rules (target-independent)
pub mod config;
pub mod email;
pub mod error;
pub mod filter;
pub mod form;
pub mod menu;
pub mod typing;
pub mod visibility;

// DOM wiring (browser only)
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod page;
#[cfg(target_arch = "wasm32")]
mod timer;

use wasm_bindgen::prelude::*;

// Re-export the main page controller
#[cfg(target_arch = "wasm32")]
pub use page::Vitrine;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
