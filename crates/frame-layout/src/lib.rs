//! Single-pass frame resolution.
//!
//! A [`Plan`] is an ordered list of [`Attribute`]s describing where one node
//! goes relative to other nodes. Resolving it reads the peers' geometry from a
//! [`FrameHost`], folds the attributes over the target's current frame, and
//! writes the result back once. There is no constraint solving: each
//! attribute is evaluated exactly once, in order.
//!
//! # Architecture
//!
//! 1. **Attributes and plans**: pure data, accumulated with [`PlanBuilder`]
//! 2. **Resolver**: picks each peer's coordinate space from tree ancestry,
//!    resolves leading/trailing against the [`LayoutDirection`], and applies
//!    attributes one step at a time
//! 3. **Diagnostics**: optional checks for plans that read a size before
//!    setting it, reference their own target, or overwrite unread fields
//! 4. **Reference tree**: [`LayoutTree`], a minimal host
//!
//! # Example
//!
//! ```
//! use frame_core::{HorizontalEdge, Rect};
//! use frame_layout::{LayoutOptions, LayoutTree, Plan};
//!
//! let mut tree = LayoutTree::new();
//! let cell = tree.add_root(Rect::new(0.0, 0.0, 414.0, 72.0));
//! let avatar = tree.add_child(cell, Rect::ZERO)?;
//!
//! let plan = Plan::builder()
//!     .width(48.0)
//!     .height(48.0)
//!     .center_y(cell, 0.0)
//!     .leading(HorizontalEdge::Leading, cell, 12.0)
//!     .build();
//! let frame = tree.apply(avatar, &plan, &LayoutOptions::ltr())?;
//! assert_eq!(frame, Rect::new(12.0, 12.0, 48.0, 48.0));
//! # Ok::<(), frame_core::LayoutError>(())
//! ```

mod attribute;
mod host;
mod options;
mod plan;
mod resolve;
mod tree;
mod validate;

pub use attribute::{Anchor, Attribute, HorizontalAnchor, VerticalAnchor};
pub use host::FrameHost;
pub use options::LayoutOptions;
pub use plan::{Plan, PlanBuilder};
pub use resolve::{apply, resolve, CoordinateSpace, Resolver};
pub use tree::{Ancestors, LayoutNode, LayoutTree};
pub use validate::{validate, Diagnostic};

pub use frame_core::{HorizontalEdge, LayoutDirection, NodeId, Rect, VerticalEdge};
