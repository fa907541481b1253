//! Project card records and the placeholder actions offered for them.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use crate::config::Messages;

/// Title used when a card carries no `data-title`.
pub const DEFAULT_TITLE: &str = "Project";

/// Immutable data carried by one portfolio card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub image: String,
    pub tech: String,
    pub description: String,
}

impl ProjectCard {
    pub const TITLE_ATTR: &'static str = "data-title";
    pub const IMAGE_ATTR: &'static str = "data-image";
    pub const TECH_ATTR: &'static str = "data-tech";
    pub const DESCRIPTION_ATTR: &'static str = "data-desc";

    /// Build a record from an attribute reader such as `Element::get_attribute`.
    ///
    /// Empty and missing values are treated alike.
    pub fn from_attributes<F>(read: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let field = |name: &str| read(name).filter(|value| !value.is_empty());
        Self {
            title: field(Self::TITLE_ATTR).unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            image: field(Self::IMAGE_ATTR).unwrap_or_default(),
            tech: field(Self::TECH_ATTR).unwrap_or_default(),
            description: field(Self::DESCRIPTION_ATTR).unwrap_or_default(),
        }
    }
}

/// Action links shown inside the project dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectAction {
    LiveDemo,
    Repository,
}

impl ProjectAction {
    pub const ALL: [Self; 2] = [Self::LiveDemo, Self::Repository];

    /// Id of the link element bound to this action.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::LiveDemo => "modal-live",
            Self::Repository => "modal-repo",
        }
    }

    /// Toast text announcing the action for `title`.
    #[must_use]
    pub fn toast_message(self, title: &str, messages: &Messages) -> String {
        let prefix = match self {
            Self::LiveDemo => &messages.live_demo_prefix,
            Self::Repository => &messages.repository_prefix,
        };
        format!("{prefix}{title}")
    }
}
