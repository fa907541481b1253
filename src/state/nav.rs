//! Mobile navigation expansion state.
//!
//! DESIGN
//! ======
//! The toggle's `aria-expanded` attribute and the list's inline `display`
//! are both projections of one flag, so the flag lives here and the DOM layer
//! only writes what this state reports.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Viewport width (CSS px) at or below which a link click collapses the menu.
pub const DEFAULT_BREAKPOINT_PX: f64 = 1000.0;

/// Inline `display` applied to the navigation list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListDisplay {
    /// No inline style yet; the stylesheet decides.
    #[default]
    Stylesheet,
    Shown,
    Hidden,
}

impl ListDisplay {
    /// CSS `display` value to write, or `None` when nothing was ever written.
    #[must_use]
    pub fn css_value(self) -> Option<&'static str> {
        match self {
            Self::Stylesheet => None,
            Self::Shown => Some("flex"),
            Self::Hidden => Some("none"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub expanded: bool,
    pub list: ListDisplay,
}

impl NavState {
    /// Seed from the toggle's current `aria-expanded` attribute.
    #[must_use]
    pub fn from_aria(value: Option<&str>) -> Self {
        Self { expanded: value == Some("true"), list: ListDisplay::Stylesheet }
    }

    /// Flip the expanded flag and show or hide the list to match.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        self.list = if self.expanded { ListDisplay::Shown } else { ListDisplay::Hidden };
    }

    /// Handle a click on a navigation link.
    ///
    /// Returns `true` when the menu was collapsed, which only happens at or
    /// below `breakpoint_px`. Wider viewports leave the state untouched.
    pub fn link_clicked(&mut self, viewport_width: f64, breakpoint_px: f64) -> bool {
        if viewport_width > breakpoint_px {
            return false;
        }
        self.expanded = false;
        self.list = ListDisplay::Hidden;
        true
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_value(self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}
