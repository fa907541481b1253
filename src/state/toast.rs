//! Single-slot toast notification state.
//!
//! Each `show` bumps a generation counter. A hide timer carries the
//! generation it was started for and only hides the toast if that
//! generation is still current, so a superseded timer can never hide a
//! newer message.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Class toggled on the toast element while it is visible.
pub const VISIBLE_CLASS: &str = "show";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Normal,
    Error,
}

impl Severity {
    #[must_use]
    pub fn from_error_flag(is_error: bool) -> Self {
        if is_error { Self::Error } else { Self::Normal }
    }

    /// Inline background for this severity; `None` reverts to the stylesheet.
    #[must_use]
    pub fn background(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Error => Some("linear-gradient(90deg,#ff6b6b,#ff9a9a)"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub severity: Severity,
    pub visible: bool,
    generation: u64,
}

impl ToastState {
    /// Show `message` and return the generation the hide timer must carry.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.message = message.into();
        self.severity = severity;
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Hide the toast if `generation` is still the latest one.
    ///
    /// Returns `true` when the toast was hidden by this call.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }
}
