//! Scroll-driven navigation chrome: navbar shading, the active section link
//! and the floating contact button.

use crate::constants::{FLOATING_CONTACT_SHOW_PX, NAVBAR_SCROLLED_PX, SECTION_ACTIVATION_OFFSET_PX};

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_PX
}

pub fn floating_contact_visible(scroll_y: f64) -> bool {
    scroll_y > FLOATING_CONTACT_SHOW_PX
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section<'a> {
    pub id: &'a str,
    /// Document offset of the section's top edge.
    pub top: f64,
}

/// The last section, in document order, whose top lies within the
/// activation offset above `scroll_y`.
pub fn active_section<'a>(sections: &[Section<'a>], scroll_y: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - SECTION_ACTIVATION_OFFSET_PX)
        .last()
        .map(|s| s.id)
}

/// Whether a nav link's `href` points at `section`.
pub fn link_targets(href: &str, section: &str) -> bool {
    href.strip_prefix('#') == Some(section)
}

/// Mobile hamburger menu. Following any link closes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Navigation state derived from a scroll position. The web layer diffs
/// successive values to decide which classes to touch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub floating_contact: bool,
    pub active: Option<String>,
}

impl NavState {
    pub fn at(sections: &[Section<'_>], scroll_y: f64) -> Self {
        Self {
            scrolled: navbar_scrolled(scroll_y),
            floating_contact: floating_contact_visible(scroll_y),
            active: active_section(sections, scroll_y).map(str::to_string),
        }
    }
}
