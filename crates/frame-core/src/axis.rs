//! Directional axis model.
//!
//! Plans talk about abstract edges. [`HorizontalEdge`] only becomes a left or
//! right side once a [`LayoutDirection`] is known; [`VerticalEdge`] maps to the
//! same side in every direction.

use std::sync::atomic::{AtomicBool, Ordering};

/// An absolute side along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Smaller coordinate (left, top).
    Min,
    /// Larger coordinate (right, bottom).
    Max,
}

impl Side {
    /// The other side of the same axis.
    pub fn opposite(self) -> Side {
        match self {
            Side::Min => Side::Max,
            Side::Max => Side::Min,
        }
    }
}

/// Direction-relative horizontal edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalEdge {
    /// Where text starts: left in LTR, right in RTL.
    Leading,
    /// Where text ends: right in LTR, left in RTL.
    Trailing,
}

impl HorizontalEdge {
    /// The absolute side this edge denotes under `direction`.
    pub fn side(self, direction: LayoutDirection) -> Side {
        let ltr = match self {
            HorizontalEdge::Leading => Side::Min,
            HorizontalEdge::Trailing => Side::Max,
        };
        if direction.is_rtl() {
            ltr.opposite()
        } else {
            ltr
        }
    }
}

/// Vertical edge. Never inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalEdge {
    Top,
    Bottom,
}

impl VerticalEdge {
    pub fn side(self) -> Side {
        match self {
            VerticalEdge::Top => Side::Min,
            VerticalEdge::Bottom => Side::Max,
        }
    }
}

/// Horizontal text direction used to resolve leading and trailing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

static PROCESS_RTL: AtomicBool = AtomicBool::new(false);

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::RightToLeft)
    }

    /// `1.0` when the leading edge is on the left, `-1.0` otherwise.
    ///
    /// Offsets that move "inward from the leading edge" are multiplied by this.
    pub fn progression(self) -> f64 {
        if self.is_rtl() {
            -1.0
        } else {
            1.0
        }
    }

    /// Application-wide direction, used when callers do not pass one.
    pub fn process_default() -> LayoutDirection {
        if PROCESS_RTL.load(Ordering::Relaxed) {
            LayoutDirection::RightToLeft
        } else {
            LayoutDirection::LeftToRight
        }
    }

    pub fn set_process_default(direction: LayoutDirection) {
        PROCESS_RTL.store(direction.is_rtl(), Ordering::Relaxed);
    }
}
