//! Project dialog lifecycle.
//!
//! DESIGN
//! ======
//! The page's scroll lock is owned by the open state itself: the overflow
//! value to restore is stored inside `ModalState::Open`, so the page is
//! locked exactly while the dialog is open and every close path hands back
//! the same restore value.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::state::project::ProjectCard;

/// Inline `overflow` written to the root element while the dialog is open.
pub const LOCKED_OVERFLOW: &str = "hidden";

/// How the dialog was put on screen, which decides how it is taken down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Host `showModal()` / `close()`.
    Native,
    /// Plain `open` attribute.
    Attribute,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        card: ProjectCard,
        presentation: Presentation,
        restore_overflow: String,
    },
}

/// Effects the DOM layer must apply after a successful close.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dismissal {
    pub presentation: Presentation,
    pub restore_overflow: String,
}

impl ModalState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub fn presentation(&self) -> Option<Presentation> {
        match self {
            Self::Open { presentation, .. } => Some(*presentation),
            Self::Closed => None,
        }
    }

    /// Project `card` into the dialog.
    ///
    /// `current_overflow` is the root element's inline overflow right now.
    /// Returns `true` when this call moved the dialog from closed to open
    /// and the caller must lock scrolling. Re-opening over an open dialog
    /// replaces the card but keeps the first presentation and restore
    /// value.
    pub fn open(&mut self, card: ProjectCard, presentation: Presentation, current_overflow: &str) -> bool {
        if let Self::Open { card: shown, .. } = self {
            *shown = card;
            return false;
        }
        *self = Self::Open { card, presentation, restore_overflow: current_overflow.to_owned() };
        true
    }

    /// Close the dialog. `None` when it was already closed.
    pub fn close(&mut self) -> Option<Dismissal> {
        match std::mem::take(self) {
            Self::Open { presentation, restore_overflow, .. } => Some(Dismissal { presentation, restore_overflow }),
            Self::Closed => None,
        }
    }
}

/// Client-space bounding box of the dialog, as reported by the browser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Bounds {
    /// `true` when the point lies past any of the four edges.
    #[must_use]
    pub fn is_outside(&self, x: f64, y: f64) -> bool {
        y < self.top || y > self.bottom || x < self.left || x > self.right
    }
}

/// Keys that open a focused project card.
#[must_use]
pub fn opens_card(key: &str) -> bool {
    key == "Enter" || key == " "
}

#[must_use]
pub fn closes_dialog(key: &str) -> bool {
    key == "Escape"
}
