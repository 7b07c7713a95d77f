use serde::{Deserialize, Serialize};

/// CSS `display` value of a visible overlay.
pub const DISPLAY_VISIBLE: &str = "flex";
/// CSS `display` value of a hidden overlay.
pub const DISPLAY_HIDDEN: &str = "none";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Visible,
    #[default]
    Hidden,
}

impl DisplayMode {
    pub fn css_value(self) -> &'static str {
        match self {
            DisplayMode::Visible => DISPLAY_VISIBLE,
            DisplayMode::Hidden => DISPLAY_HIDDEN,
        }
    }

    /// Anything other than `flex` renders as hidden, including an unset
    /// property.
    pub fn from_css(value: &str) -> Self {
        if value.trim() == DISPLAY_VISIBLE {
            DisplayMode::Visible
        } else {
            DisplayMode::Hidden
        }
    }
}

/// What the overlay should show: the container's display mode and the
/// content image's source.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    pub mode: DisplayMode,
    pub source: String,
}

impl Lightbox {
    pub fn hidden() -> Self {
        Self::default()
    }

    /// The source is taken as-is, no URL validation.
    pub fn showing(source: impl Into<String>) -> Self {
        Self {
            mode: DisplayMode::Visible,
            source: source.into(),
        }
    }

    pub fn show(&mut self, source: impl Into<String>) {
        *self = Self::showing(source);
    }

    /// Clearing the source tells the host to drop any in-flight load.
    pub fn hide(&mut self) {
        *self = Self::hidden();
    }

    /// Source is empty exactly when the overlay is hidden.
    pub fn is_consistent(&self) -> bool {
        self.source.is_empty() == (self.mode == DisplayMode::Hidden)
    }

    pub fn on_click(&mut self, target: ClickTarget) -> ClickOutcome {
        let outcome = route_click(target);
        if outcome == ClickOutcome::Dismiss {
            self.hide();
        }
        outcome
    }
}

/// Where a click delivered to the container originated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The container element itself, i.e. the backdrop.
    Container,
    /// The image or any other element nested in the container.
    Descendant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Dismiss,
    /// Leave the overlay alone and let the event keep bubbling.
    PassThrough,
}

pub fn route_click(target: ClickTarget) -> ClickOutcome {
    match target {
        ClickTarget::Container => ClickOutcome::Dismiss,
        ClickTarget::Descendant => ClickOutcome::PassThrough,
    }
}
