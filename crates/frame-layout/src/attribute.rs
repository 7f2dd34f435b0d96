//! Attribute vocabulary.
//!
//! An [`Attribute`] states one geometric fact about the node being laid out.
//! Attributes that mention another node hold a copyable handle to it; the
//! resolver only ever reads through that handle.

use frame_core::{Field, HorizontalEdge, LayoutDirection, NodeId, VerticalEdge};

/// One `(peer, edge, offset)` endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor<N, E> {
    pub node: N,
    pub edge: E,
    pub offset: f64,
}

pub type HorizontalAnchor<N = NodeId> = Anchor<N, HorizontalEdge>;
pub type VerticalAnchor<N = NodeId> = Anchor<N, VerticalEdge>;

impl<N, E> Anchor<N, E> {
    /// Anchor on `edge` of `node` with no offset.
    pub fn new(node: N, edge: E) -> Self {
        Self { node, edge, offset: 0.0 }
    }

    /// Set the inward offset from the edge.
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}

impl<N> HorizontalAnchor<N> {
    pub fn leading(node: N) -> Self {
        Self::new(node, HorizontalEdge::Leading)
    }

    pub fn trailing(node: N) -> Self {
        Self::new(node, HorizontalEdge::Trailing)
    }
}

impl<N> VerticalAnchor<N> {
    pub fn top(node: N) -> Self {
        Self::new(node, VerticalEdge::Top)
    }

    pub fn bottom(node: N) -> Self {
        Self::new(node, VerticalEdge::Bottom)
    }
}

/// A single layout attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute<N = NodeId> {
    /// Fixed width.
    Width(f64),
    /// Fixed height.
    Height(f64),
    /// Fixed horizontal origin.
    X(f64),
    /// Fixed vertical origin.
    Y(f64),
    /// Fixed right edge; the origin is derived from the current width.
    MaxX(f64),
    /// Fixed bottom edge; the origin is derived from the current height.
    MaxY(f64),
    /// Width spanning from one peer edge to another.
    WidthSpan {
        from: HorizontalAnchor<N>,
        to: HorizontalAnchor<N>,
    },
    /// Height spanning from one peer edge to another.
    HeightSpan {
        from: VerticalAnchor<N>,
        to: VerticalAnchor<N>,
    },
    /// Width copied from a peer.
    WidthEqualTo(N),
    /// Height copied from a peer.
    HeightEqualTo(N),
    /// This node's leading edge sits on a peer edge.
    Leading(HorizontalAnchor<N>),
    /// This node's trailing edge sits on a peer edge.
    Trailing(HorizontalAnchor<N>),
    /// This node's top edge sits on a peer edge.
    Top(VerticalAnchor<N>),
    /// This node's bottom edge sits on a peer edge.
    Bottom(VerticalAnchor<N>),
    /// Horizontal centers aligned, plus offset.
    CenterX { node: N, offset: f64 },
    /// Vertical centers aligned, plus offset.
    CenterY { node: N, offset: f64 },
}

impl<N: Copy> Attribute<N> {
    /// Peers this attribute reads from, in endpoint order.
    pub fn peers(&self) -> impl Iterator<Item = N> {
        let slots = match *self {
            Attribute::Width(_)
            | Attribute::Height(_)
            | Attribute::X(_)
            | Attribute::Y(_)
            | Attribute::MaxX(_)
            | Attribute::MaxY(_) => [None, None],
            Attribute::WidthSpan { from, to } => [Some(from.node), Some(to.node)],
            Attribute::HeightSpan { from, to } => [Some(from.node), Some(to.node)],
            Attribute::WidthEqualTo(node) | Attribute::HeightEqualTo(node) => [Some(node), None],
            Attribute::Leading(a) | Attribute::Trailing(a) => [Some(a.node), None],
            Attribute::Top(a) | Attribute::Bottom(a) => [Some(a.node), None],
            Attribute::CenterX { node, .. } | Attribute::CenterY { node, .. } => [Some(node), None],
        };
        slots.into_iter().flatten()
    }
}

impl<N> Attribute<N> {
    /// The field of the working rectangle this attribute reads before
    /// writing, if any.
    ///
    /// Anchoring the max side of a node needs its size, which is why a
    /// leading anchor reads the width only under right-to-left.
    pub fn reads(&self, direction: LayoutDirection) -> Option<Field> {
        match self {
            Attribute::MaxX(_) | Attribute::CenterX { .. } => Some(Field::Width),
            Attribute::MaxY(_) | Attribute::CenterY { .. } | Attribute::Bottom(_) => {
                Some(Field::Height)
            }
            Attribute::Leading(_) if direction.is_rtl() => Some(Field::Width),
            Attribute::Trailing(_) if !direction.is_rtl() => Some(Field::Width),
            _ => None,
        }
    }

    /// Fields of the working rectangle this attribute is meant to set.
    pub fn writes(&self) -> &'static [Field] {
        match self {
            Attribute::Width(_) | Attribute::WidthEqualTo(_) | Attribute::WidthSpan { .. } => {
                &[Field::Width]
            }
            Attribute::Height(_) | Attribute::HeightEqualTo(_) | Attribute::HeightSpan { .. } => {
                &[Field::Height]
            }
            Attribute::X(_)
            | Attribute::MaxX(_)
            | Attribute::Leading(_)
            | Attribute::Trailing(_)
            | Attribute::CenterX { .. } => &[Field::X],
            Attribute::Y(_)
            | Attribute::MaxY(_)
            | Attribute::Top(_)
            | Attribute::Bottom(_)
            | Attribute::CenterY { .. } => &[Field::Y],
        }
    }

    /// Field a span also overwrites as a consequence of setting its size.
    ///
    /// A span moves the origin to its lower endpoint. Later attributes may
    /// overwrite it freely.
    pub fn side_write(&self) -> Option<Field> {
        match self {
            Attribute::WidthSpan { .. } => Some(Field::X),
            Attribute::HeightSpan { .. } => Some(Field::Y),
            _ => None,
        }
    }
}
