//! Resolution options.

use frame_core::LayoutDirection;

/// Options for [`apply`](crate::apply).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    /// Direction used to resolve leading and trailing edges.
    pub direction: LayoutDirection,
    /// Run the plan diagnostics and log what they find.
    pub diagnostics: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::process_default(),
            diagnostics: cfg!(debug_assertions),
        }
    }
}

impl LayoutOptions {
    /// Default options, left-to-right.
    pub fn ltr() -> Self {
        Self::default().with_direction(LayoutDirection::LeftToRight)
    }

    /// Default options, right-to-left.
    pub fn rtl() -> Self {
        Self::default().with_direction(LayoutDirection::RightToLeft)
    }

    /// Set the layout direction.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Turn the plan diagnostics on or off.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }
}
