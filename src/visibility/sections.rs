//! Registry of page sections and the active-section rule.
//!
//! Sections are measured once at startup and re-measured on (debounced)
//! resize; between measurements their offsets are immutable.

use crate::config::EARLY_TRIGGER_MARGIN;
use crate::visibility::ScrollDirection;

/// One `<section id="…">` on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Unique fragment identifier (`href="#about"` targets id `about`).
    pub id: String,
    /// Pixels from the document top to the section's top edge.
    pub top_offset: f64,
    /// Section height in pixels.
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top_offset: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top_offset,
            height,
        }
    }
}

/// Direction for keyboard section stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

impl From<ScrollDirection> for StepDirection {
    fn from(d: ScrollDirection) -> Self {
        match d {
            ScrollDirection::Up => Self::Up,
            ScrollDirection::Down => Self::Down,
        }
    }
}

/// Ordered list of page sections, in document order.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    early_trigger_margin: f64,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            early_trigger_margin: EARLY_TRIGGER_MARGIN,
        }
    }

    pub fn with_margin(sections: Vec<Section>, early_trigger_margin: f64) -> Self {
        Self {
            sections,
            early_trigger_margin,
        }
    }

    /// Replace all measurements (after a resize re-measure).
    pub fn replace(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The section the given scroll offset falls in, or `None` above the
    /// first section.
    ///
    /// A section is active when the offset has passed its top minus the
    /// header and the early-trigger margin, but not yet passed that
    /// threshold plus the section height. The first matching section in
    /// document order wins.
    pub fn find_active(&self, scroll_y: f64, header_height: f64) -> Option<&str> {
        self.sections.iter().find_map(|section| {
            let threshold = section.top_offset - header_height - self.early_trigger_margin;
            if scroll_y > threshold && scroll_y <= threshold + section.height {
                Some(section.id.as_str())
            } else {
                None
            }
        })
    }

    /// The section an ArrowDown/ArrowUp keypress should scroll to.
    ///
    /// Down picks the first section whose top is more than 100px past the
    /// current offset; up picks the last one more than 100px before it.
    pub fn step_target(&self, scroll_y: f64, direction: StepDirection) -> Option<&Section> {
        match direction {
            StepDirection::Down => self
                .sections
                .iter()
                .find(|s| s.top_offset > scroll_y + 100.0),
            StepDirection::Up => self
                .sections
                .iter()
                .rev()
                .find(|s| s.top_offset < scroll_y - 100.0),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn registry() -> SectionRegistry {
        SectionRegistry::new(vec![
            Section::new("hero", 0.0, 800.0),
            Section::new("about", 800.0, 800.0),
            Section::new("contact", 1600.0, 800.0),
        ])
    }

    #[test]
    fn test_mid_page_offset_resolves_second_section() {
        // 800 - 80 - 100 = 620; 620 < 750 <= 1420
        assert_eq!(registry().find_active(750.0, 80.0), Some("about"));
    }

    #[test]
    fn test_above_first_section_is_none() {
        let sections = vec![Section::new("about", 800.0, 400.0)];
        let registry = SectionRegistry::new(sections);
        assert_eq!(registry.find_active(100.0, 80.0), None);
    }

    #[test]
    fn test_overlap_resolves_to_first_in_document_order() {
        // Oversized first section overlaps the second's window.
        let registry = SectionRegistry::new(vec![
            Section::new("hero", 0.0, 2000.0),
            Section::new("about", 800.0, 800.0),
        ]);
        assert_eq!(registry.find_active(900.0, 80.0), Some("hero"));
    }

    #[test]
    fn test_step_down_skips_nearby_section() {
        let registry = registry();
        let target = registry.step_target(750.0, StepDirection::Down).unwrap();
        assert_eq!(target.id, "contact", "800 is within 100px of 750, so skip to 1600");
    }

    #[test]
    fn test_step_up_picks_last_section_above() {
        let registry = registry();
        let target = registry.step_target(1700.0, StepDirection::Up).unwrap();
        assert_eq!(target.id, "about");
    }

    #[test]
    fn test_step_at_edges_returns_none() {
        let registry = registry();
        assert!(registry.step_target(1700.0, StepDirection::Down).is_none());
        assert!(registry.step_target(50.0, StepDirection::Up).is_none());
    }
}
