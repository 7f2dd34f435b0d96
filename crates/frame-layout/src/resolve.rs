//! Plan resolution.
//!
//! A plan is folded over a working rectangle that starts as the target's
//! current frame. Each attribute is one pure step `(Rect, &Attribute) -> Rect`
//! touching only the fields it names, so a step may read what earlier steps
//! wrote. The result is written back once, after the last step.

use frame_core::{HorizontalEdge, LayoutDirection, Rect, Side};

use crate::attribute::{Attribute, HorizontalAnchor, VerticalAnchor};
use crate::host::FrameHost;
use crate::options::LayoutOptions;
use crate::plan::Plan;
use crate::validate::validate;

/// Which rectangle of a peer the resolver reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSpace {
    /// The peer's bounds. Used when the target lives inside the peer, since
    /// the target's own frame is then expressed in (a descendant of) that
    /// space.
    Local,
    /// The peer's frame, in the parent's space.
    Parent,
}

impl CoordinateSpace {
    /// Local space when the target descends from the peer, parent space otherwise.
    pub fn for_ancestry(target_is_descendant: bool) -> Self {
        if target_is_descendant {
            CoordinateSpace::Local
        } else {
            CoordinateSpace::Parent
        }
    }

    /// Read `node`'s rectangle in this space.
    pub fn read<H: FrameHost>(self, host: &H, node: H::Node) -> Rect {
        match self {
            CoordinateSpace::Local => host.bounds(node),
            CoordinateSpace::Parent => host.frame(node),
        }
    }
}

/// Origin on one axis that puts the node's `side` edge `offset` inward from
/// `edge`.
fn place(edge: f64, offset: f64, size: f64, side: Side) -> f64 {
    match side {
        Side::Min => edge + offset,
        Side::Max => edge - size - offset,
    }
}

/// `(origin, size)` of the segment between two coordinates.
fn span(near: f64, far: f64) -> (f64, f64) {
    (near.min(far), (far - near).abs())
}

/// Resolves attributes for one target node against a host.
pub struct Resolver<'a, H: FrameHost> {
    host: &'a H,
    target: H::Node,
    direction: LayoutDirection,
}

impl<'a, H: FrameHost> Resolver<'a, H> {
    /// Create a resolver for `target`.
    pub fn new(host: &'a H, target: H::Node, direction: LayoutDirection) -> Self {
        Self { host, target, direction }
    }

    /// Space in which `peer` is read for this target.
    pub fn space_of(&self, peer: H::Node) -> CoordinateSpace {
        CoordinateSpace::for_ancestry(self.host.is_descendant(self.target, peer))
    }

    fn peer_rect(&self, peer: H::Node) -> Rect {
        self.space_of(peer).read(self.host, peer)
    }

    fn peer_x(&self, anchor: &HorizontalAnchor<H::Node>) -> f64 {
        self.peer_rect(anchor.node).edge_x(anchor.edge.side(self.direction))
    }

    fn peer_y(&self, anchor: &VerticalAnchor<H::Node>) -> f64 {
        self.peer_rect(anchor.node).edge_y(anchor.edge.side())
    }

    fn span_x(
        &self,
        from: &HorizontalAnchor<H::Node>,
        to: &HorizontalAnchor<H::Node>,
    ) -> (f64, f64) {
        let progression = self.direction.progression();
        let near = self.peer_x(from) + progression * from.offset;
        let far = self.peer_x(to) - progression * to.offset;
        span(near, far)
    }

    fn span_y(&self, from: &VerticalAnchor<H::Node>, to: &VerticalAnchor<H::Node>) -> (f64, f64) {
        let near = self.peer_y(from) + from.offset;
        let far = self.peer_y(to) - to.offset;
        span(near, far)
    }

    /// Apply one attribute to the working rectangle.
    pub fn step(&self, rect: Rect, attribute: &Attribute<H::Node>) -> Rect {
        let mut next = rect;
        match attribute {
            Attribute::Width(value) => next.width = *value,
            Attribute::Height(value) => next.height = *value,
            Attribute::X(value) => next.x = *value,
            Attribute::Y(value) => next.y = *value,
            Attribute::MaxX(value) => next.x = value - rect.width,
            Attribute::MaxY(value) => next.y = value - rect.height,
            Attribute::WidthSpan { from, to } => {
                (next.x, next.width) = self.span_x(from, to);
            }
            Attribute::HeightSpan { from, to } => {
                (next.y, next.height) = self.span_y(from, to);
            }
            Attribute::WidthEqualTo(node) => next.width = self.peer_rect(*node).width,
            Attribute::HeightEqualTo(node) => next.height = self.peer_rect(*node).height,
            Attribute::Leading(anchor) => {
                let side = HorizontalEdge::Leading.side(self.direction);
                next.x = place(self.peer_x(anchor), anchor.offset, rect.width, side);
            }
            Attribute::Trailing(anchor) => {
                let side = HorizontalEdge::Trailing.side(self.direction);
                next.x = place(self.peer_x(anchor), anchor.offset, rect.width, side);
            }
            Attribute::Top(anchor) => {
                next.y = place(self.peer_y(anchor), anchor.offset, rect.height, Side::Min);
            }
            Attribute::Bottom(anchor) => {
                next.y = place(self.peer_y(anchor), anchor.offset, rect.height, Side::Max);
            }
            Attribute::CenterX { node, offset } => {
                next.x = self.peer_rect(*node).mid_x() - rect.width / 2.0 + offset;
            }
            Attribute::CenterY { node, offset } => {
                next.y = self.peer_rect(*node).mid_y() - rect.height / 2.0 + offset;
            }
        }
        tracing::trace!(?attribute, from = ?rect, to = ?next, "frame step");
        next
    }

    /// Fold the whole plan, starting from the target's current frame.
    pub fn run(&self, plan: &Plan<H::Node>) -> Rect {
        let start = self.host.frame(self.target);
        plan.iter().fold(start, |rect, attribute| self.step(rect, attribute))
    }
}

/// Compute the frame `plan` gives `target` without writing it.
pub fn resolve<H: FrameHost>(
    host: &H,
    target: H::Node,
    plan: &Plan<H::Node>,
    direction: LayoutDirection,
) -> Rect {
    Resolver::new(host, target, direction).run(plan)
}

/// Resolve `plan` for `target` and replace its frame with the result.
pub fn apply<H: FrameHost>(
    host: &mut H,
    target: H::Node,
    plan: &Plan<H::Node>,
    options: &LayoutOptions,
) -> Rect {
    if options.diagnostics {
        for diagnostic in validate(plan, target, options.direction) {
            tracing::warn!(?target, %diagnostic, "suspicious layout plan");
        }
    }

    let frame = resolve(host, target, plan, options.direction);
    host.set_frame(target, frame);
    tracing::debug!(?target, attributes = plan.len(), ?frame, "applied frame plan");
    frame
}
