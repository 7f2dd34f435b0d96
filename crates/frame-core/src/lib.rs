//! Core types for the frame resolver.
//!
//! This crate provides the foundational types used by `frame-layout`:
//! - Geometry primitives (rectangles, points, sizes)
//! - The directional axis model (leading/trailing, top/bottom, layout direction)
//! - Node identifiers
//! - Error types

pub mod axis;
pub mod errors;
pub mod geometry;
pub mod types;

pub use axis::*;
pub use errors::*;
pub use geometry::*;
pub use types::*;
