//! The interface a view tree exposes to the resolver.

use std::fmt::Debug;

use frame_core::Rect;

/// Read access to node geometry plus the single write the resolver performs.
///
/// The resolver never creates, removes or reorders nodes. Implementations are
/// expected to answer for every handle that appears in a plan; handles the
/// host does not know are a caller error and are not checked by the resolver.
pub trait FrameHost {
    /// Copyable node handle.
    type Node: Copy + Eq + Debug;

    /// Rectangle of `node` in its parent's coordinate space.
    fn frame(&self, node: Self::Node) -> Rect;

    /// Rectangle of `node` in its own coordinate space.
    fn bounds(&self, node: Self::Node) -> Rect {
        self.frame(node).local()
    }

    /// Whether `node` is `of` or lies somewhere below it.
    fn is_descendant(&self, node: Self::Node, of: Self::Node) -> bool;

    /// Replace the frame of `node`.
    fn set_frame(&mut self, node: Self::Node, frame: Rect);
}
