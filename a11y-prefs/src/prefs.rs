//! The preference set and the identity of each toggle.

use serde::{Deserialize, Serialize};

/// The four persisted accessibility choices.
///
/// Every field carries `#[serde(default)]`, so a partial stored record
/// merges over the defaults and unrecognized keys in stored JSON are
/// ignored. The default set is all-false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    #[serde(default)]
    pub large: bool,
    #[serde(default)]
    pub contrast: bool,
    #[serde(default)]
    pub links: bool,
    #[serde(default)]
    pub motion: bool,
}

impl PreferenceSet {
    /// Current value of the option bound to `toggle`.
    #[must_use]
    pub const fn is_enabled(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::LargeText => self.large,
            Toggle::HighContrast => self.contrast,
            Toggle::HighlightLinks => self.links,
            Toggle::ReduceMotion => self.motion,
        }
    }

    /// Flip the single option bound to `toggle`, leaving the rest as-is.
    pub fn toggle(&mut self, toggle: Toggle) {
        let flag = self.field_mut(toggle);
        *flag = !*flag;
    }

    /// Return every option to its default (off) state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn field_mut(&mut self, toggle: Toggle) -> &mut bool {
        match toggle {
            Toggle::LargeText => &mut self.large,
            Toggle::HighContrast => &mut self.contrast,
            Toggle::HighlightLinks => &mut self.links,
            Toggle::ReduceMotion => &mut self.motion,
        }
    }
}

/// Typed identity of one accessibility toggle.
///
/// Each variant knows its `data-action` token, the class it drives on the
/// document root, and its visible label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    LargeText,
    HighContrast,
    HighlightLinks,
    ReduceMotion,
}

impl Toggle {
    /// Fixed panel ordering.
    pub const ALL: [Self; 4] = [
        Self::LargeText,
        Self::HighContrast,
        Self::HighlightLinks,
        Self::ReduceMotion,
    ];

    /// The `data-action` token carried by the toggle's button.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::LargeText => "large",
            Self::HighContrast => "contrast",
            Self::HighlightLinks => "links",
            Self::ReduceMotion => "motion",
        }
    }

    /// The presentation class applied to the document root while enabled.
    #[must_use]
    pub const fn root_class(self) -> &'static str {
        match self {
            Self::LargeText => "a11y-large-text",
            Self::HighContrast => "a11y-high-contrast",
            Self::HighlightLinks => "a11y-highlight-links",
            Self::ReduceMotion => "a11y-reduce-motion",
        }
    }

    /// Visible button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LargeText => "Large text",
            Self::HighContrast => "High contrast",
            Self::HighlightLinks => "Highlight links",
            Self::ReduceMotion => "Reduce motion",
        }
    }

    /// Parse a `data-action` token. `"reset"` is an action, not a toggle,
    /// and parses as `None` along with every unknown token.
    #[must_use]
    pub fn from_action(action: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.action() == action)
    }
}
