//! Reference node tree.
//!
//! A small arena of nodes with frames, enough to host the resolver without an
//! external view system. Each child's frame is expressed in its parent's
//! bounds, which always have a zero origin.

use indexmap::IndexMap;
use smallvec::SmallVec;

use frame_core::{LayoutDirection, LayoutError, NodeId, Rect, TreeError};

use crate::host::FrameHost;
use crate::options::LayoutOptions;
use crate::plan::Plan;
use crate::resolve;

/// A node in the layout tree.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    /// Unique ID for this node
    pub id: NodeId,
    /// Optional name for debugging
    pub name: Option<String>,
    /// Frame in the parent's coordinate space
    pub frame: Rect,
    /// Parent node ID (None for roots)
    pub parent: Option<NodeId>,
    /// Child node IDs, back to front
    pub children: SmallVec<[NodeId; 4]>,
}

impl LayoutNode {
    fn new(id: NodeId, frame: Rect) -> Self {
        Self {
            id,
            name: None,
            frame,
            parent: None,
            children: SmallVec::new(),
        }
    }

    /// Rectangle in the node's own coordinate space.
    pub fn bounds(&self) -> Rect {
        self.frame.local()
    }
}

/// A forest of layout nodes.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    /// All nodes, in insertion order
    nodes: IndexMap<NodeId, LayoutNode>,
    /// Nodes without a parent
    roots: Vec<NodeId>,
    /// Counter for generating unique IDs
    next_id: u64,
}

impl LayoutTree {
    /// Create an empty layout tree.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a parentless node.
    pub fn add_root(&mut self, frame: Rect) -> NodeId {
        let id = self.next_id();
        self.nodes.insert(id, LayoutNode::new(id, frame));
        self.roots.push(id);
        id
    }

    /// Add a node as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, frame: Rect) -> Result<NodeId, TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownNode(parent));
        }
        let id = self.next_id();
        let mut node = LayoutNode::new(id, frame);
        node.parent = Some(parent);
        self.nodes.insert(id, node);
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Give a node a debugging name.
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) -> Result<(), TreeError> {
        self.node_mut(id)?.name = Some(name.into());
        Ok(())
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(&id)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode, TreeError> {
        self.nodes.get_mut(&id).ok_or(TreeError::UnknownNode(id))
    }

    /// Check whether a node exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root nodes.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.values()
    }

    /// Parent of a node, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Children of a node; empty for unknown IDs.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Frame of a node in its parent's space.
    pub fn frame(&self, id: NodeId) -> Option<Rect> {
        self.get(id).map(|n| n.frame)
    }

    /// Bounds of a node (zero origin, frame size).
    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        self.get(id).map(LayoutNode::bounds)
    }

    /// Replace the frame of a node.
    pub fn set_frame(&mut self, id: NodeId, frame: Rect) -> Result<(), TreeError> {
        self.node_mut(id)?.frame = frame;
        Ok(())
    }

    /// Whether `node` is `of` itself or lies below it.
    pub fn is_descendant(&self, node: NodeId, of: NodeId) -> bool {
        self.contains(node) && (node == of || self.ancestors(node).any(|a| a == of))
    }

    /// Unlink `id` from its parent. The node keeps its subtree and becomes a
    /// root.
    pub fn detach(&mut self, id: NodeId) -> Result<(), TreeError> {
        if let Some(parent) = self.node_mut(id)?.parent.take() {
            self.node_mut(parent)?.children.retain(|c| *c != id);
            self.roots.push(id);
        }
        Ok(())
    }

    /// Move `id` (with its subtree) under `parent` as the last child.
    pub fn reparent(&mut self, id: NodeId, parent: NodeId) -> Result<(), TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownNode(parent));
        }
        if self.is_descendant(parent, id) {
            return Err(TreeError::Cycle { node: id, parent });
        }
        self.detach(id)?;
        self.roots.retain(|r| *r != id);
        self.node_mut(id)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(id);
        Ok(())
    }

    /// Remove `id` and its whole subtree. Returns the removed IDs, `id` first.
    pub fn remove(&mut self, id: NodeId) -> Result<Vec<NodeId>, TreeError> {
        self.detach(id)?;
        self.roots.retain(|r| *r != id);

        let mut removed = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.shift_remove(&next) {
                stack.extend(node.children.iter().rev().copied());
                removed.push(next);
            }
        }
        Ok(removed)
    }

    /// Map a rectangle given in `id`'s local space into its root's space.
    pub fn local_to_root(&self, id: NodeId, rect: Rect) -> Option<Rect> {
        let mut out = rect;
        let mut current = Some(self.get(id)?);
        while let Some(node) = current {
            out = out.translate(node.frame.x, node.frame.y);
            current = node.parent.and_then(|p| self.get(p));
        }
        Some(out)
    }

    /// Frame of `id` expressed in its root's space.
    pub fn absolute_frame(&self, id: NodeId) -> Option<Rect> {
        let node = self.get(id)?;
        match node.parent {
            Some(parent) => self.local_to_root(parent, node.frame),
            None => Some(node.frame),
        }
    }

    /// Check that `target` and every peer in `plan` exist.
    fn check(&self, target: NodeId, plan: &Plan) -> Result<(), LayoutError> {
        if !self.contains(target) {
            return Err(TreeError::UnknownNode(target).into());
        }
        match plan.peers().find(|(_, node)| !self.contains(*node)) {
            Some((index, node)) => Err(LayoutError::UnknownPeer { index, node }),
            None => Ok(()),
        }
    }

    /// Compute the frame `plan` gives `target` without writing it.
    pub fn resolve(
        &self,
        target: NodeId,
        plan: &Plan,
        direction: LayoutDirection,
    ) -> Result<Rect, LayoutError> {
        self.check(target, plan)?;
        Ok(resolve::resolve(self, target, plan, direction))
    }

    /// Resolve `plan` for `target` and store the result as its frame.
    pub fn apply(
        &mut self,
        target: NodeId,
        plan: &Plan,
        options: &LayoutOptions,
    ) -> Result<Rect, LayoutError> {
        self.check(target, plan)?;
        Ok(resolve::apply(self, target, plan, options))
    }
}

impl FrameHost for LayoutTree {
    type Node = NodeId;

    fn frame(&self, node: NodeId) -> Rect {
        LayoutTree::frame(self, node).unwrap_or_default()
    }

    fn bounds(&self, node: NodeId) -> Rect {
        LayoutTree::bounds(self, node).unwrap_or_default()
    }

    fn is_descendant(&self, node: NodeId, of: NodeId) -> bool {
        LayoutTree::is_descendant(self, node, of)
    }

    fn set_frame(&mut self, node: NodeId, frame: Rect) {
        if LayoutTree::set_frame(self, node, frame).is_err() {
            tracing::error!(?node, "dropping frame for unknown node");
        }
    }
}

/// Iterator over a node's ancestors, created by [`LayoutTree::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a> {
    tree: &'a LayoutTree,
    current: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
