//! Geometry primitives.
//!
//! Plain `f64` value types. Sizes are never clamped: a negative width or
//! height is a legal intermediate value while a plan is being resolved.

use glam::DVec2;

use crate::axis::Side;

/// A position in some node's coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    /// Create a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<DVec2> for Size {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Size> for DVec2 {
    fn from(s: Size) -> Self {
        DVec2::new(s.width, s.height)
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a rectangle with position and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_origin_size(origin: impl Into<Point>, size: impl Into<Size>) -> Self {
        let (origin, size) = (origin.into(), size.into());
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// A rectangle of the given size at the origin.
    pub fn from_size(size: impl Into<Size>) -> Self {
        Self::from_origin_size(Point::ZERO, size)
    }

    /// Get the origin (x, y).
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the size (width, height).
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the left edge (x).
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// Get the right edge (x + width).
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Get the horizontal center.
    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Get the top edge (y).
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// Get the bottom edge (y + height).
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Get the vertical center.
    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Horizontal edge coordinate on the given absolute side.
    pub fn edge_x(&self, side: Side) -> f64 {
        match side {
            Side::Min => self.min_x(),
            Side::Max => self.max_x(),
        }
    }

    /// Vertical edge coordinate on the given absolute side.
    pub fn edge_y(&self, side: Side) -> f64 {
        match side {
            Side::Min => self.min_y(),
            Side::Max => self.max_y(),
        }
    }

    /// Same size, zero origin. This is the local-space view of a frame.
    pub fn local(&self) -> Rect {
        Rect::from_size(self.size())
    }

    /// Move the origin by `(dx, dy)`.
    pub fn translate(self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Mirror horizontally inside a container of `container_width` whose
    /// origin is zero.
    pub fn mirrored_x(self, container_width: f64) -> Rect {
        Rect::new(container_width - self.max_x(), self.y, self.width, self.height)
    }

    /// Component-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Rect, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.width - other.width).abs() <= epsilon
            && (self.height - other.height).abs() <= epsilon
    }
}
