//! Mobile navigation menu latch.
//!
//! Two states, closed/open, driven by button clicks, link clicks, outside
//! clicks and Escape. Every close path is idempotent: closing an already
//! closed menu reports no change, so stacked handlers (outside click firing
//! after a link click, say) never produce spurious DOM work.

/// Which icon the menu button should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Hamburger, menu closed.
    Menu,
    /// Cross, menu open.
    Close,
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Button click: flip the latch. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close from a link click or Escape. True if anything changed.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        true
    }

    /// Close from a document-level click. `inside` is whether the click
    /// landed inside the menu or on its button; those clicks are the
    /// toggle's business, not ours. True if anything changed.
    pub fn outside_click(&mut self, inside: bool) -> bool {
        if inside {
            return false;
        }
        self.close()
    }

    /// Icon the button should currently display.
    pub fn icon(&self) -> MenuIcon {
        if self.open {
            MenuIcon::Close
        } else {
            MenuIcon::Menu
        }
    }

    /// Accessible label for the button.
    pub fn aria_label(&self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}
