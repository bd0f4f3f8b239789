//! Navbar toggle state.
//!
//! Kept free of any DOM access so the transitions can be driven directly in
//! tests; the `Navbar` component wraps a [`NavState`] in a signal and feeds it
//! scroll offsets and clicks.

use crate::theme::NavVisual;

/// Vertical offset, in CSS pixels, past which the navbar switches to its
/// scrolled look. The comparison is strict: 20 itself is still transparent.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Whether a vertical offset counts as scrolled. NaN never does.
pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

/// UI-only state of one navbar instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Page is scrolled past [`SCROLL_THRESHOLD_PX`]
    pub scrolled: bool,
    /// Mobile menu is expanded
    pub menu_open: bool,
}

impl NavState {
    /// State for a page already scrolled to `offset_y`, menu closed.
    pub fn at_offset(offset_y: f64) -> Self {
        Self {
            scrolled: is_scrolled(offset_y),
            menu_open: false,
        }
    }

    /// State with the mobile menu expanded.
    pub fn with_menu_open(mut self) -> Self {
        self.menu_open = true;
        self
    }

    /// Recompute `scrolled` for a new offset. Returns true when it changed.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = is_scrolled(offset_y);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Menu toggle button.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A link inside the mobile menu was chosen.
    pub fn select_link(&mut self) {
        self.menu_open = false;
    }

    /// Look of the bar for the current offset.
    pub fn visual(&self) -> NavVisual {
        if self.scrolled {
            NavVisual::Scrolled
        } else {
            NavVisual::Transparent
        }
    }

    /// Glyph on the toggle button.
    pub fn toggle_icon(&self) -> &'static str {
        if self.menu_open { "close" } else { "menu" }
    }
}
