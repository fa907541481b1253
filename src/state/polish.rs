//! Button press feedback and keyboard-focus detection.

#[cfg(test)]
#[path = "polish_test.rs"]
mod polish_test;

/// Inline transform applied while a button is held down.
pub const PRESSED_TRANSFORM: &str = "translateY(1px) scale(0.997)";

/// Body class enabling focus rings once the user has tabbed.
pub const FOCUS_VISIBLE_CLASS: &str = "show-focus";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Up,
    Leave,
}

impl PointerPhase {
    /// DOM event name that produces this phase.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Down => "mousedown",
            Self::Up => "mouseup",
            Self::Leave => "mouseleave",
        }
    }

    /// Transform to write for this phase; empty clears the inline style.
    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Down => PRESSED_TRANSFORM,
            Self::Up | Self::Leave => "",
        }
    }
}

/// Tracks whether keyboard navigation has been observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusMarker {
    pub shown: bool,
}

impl FocusMarker {
    /// Record a key-up. Returns `true` only for the first `Tab`.
    pub fn observe_keyup(&mut self, key: &str) -> bool {
        if self.shown || key != "Tab" {
            return false;
        }
        self.shown = true;
        true
    }
}
