//! Ordered attribute lists and the builder that accumulates them.

use smallvec::SmallVec;

use frame_core::{HorizontalEdge, NodeId, VerticalEdge};

use crate::attribute::{Anchor, Attribute, HorizontalAnchor, VerticalAnchor};

/// Inline capacity before a plan spills to the heap. Typical plans set a size
/// and an origin on each axis.
const INLINE_ATTRIBUTES: usize = 6;

/// An ordered, immutable list of attributes for one node.
///
/// Order matters: an attribute may read fields written by the ones before it,
/// and later writes win over earlier ones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan<N = NodeId> {
    attributes: SmallVec<[Attribute<N>; INLINE_ATTRIBUTES]>,
}

impl<N> Plan<N> {
    /// Start building a plan.
    pub fn builder() -> PlanBuilder<N> {
        PlanBuilder::new()
    }

    /// Iterate over the attributes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute<N>> {
        self.attributes.iter()
    }

    /// Get the attributes as a slice.
    pub fn as_slice(&self) -> &[Attribute<N>] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<N: Copy> Plan<N> {
    /// Every peer reference, paired with the index of its attribute.
    pub fn peers(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.attributes
            .iter()
            .enumerate()
            .flat_map(|(index, attribute)| attribute.peers().map(move |peer| (index, peer)))
    }
}

impl<N> Default for Plan<N> {
    fn default() -> Self {
        Self { attributes: SmallVec::new() }
    }
}

impl<N> FromIterator<Attribute<N>> for Plan<N> {
    fn from_iter<I: IntoIterator<Item = Attribute<N>>>(iter: I) -> Self {
        Self { attributes: iter.into_iter().collect() }
    }
}

impl<'a, N> IntoIterator for &'a Plan<N> {
    type Item = &'a Attribute<N>;
    type IntoIter = std::slice::Iter<'a, Attribute<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Chainable accumulator for a [`Plan`].
///
/// Every method appends exactly one attribute. Nothing is computed or checked
/// here; conflicting attributes are settled by order when the plan is applied.
///
/// ```
/// use frame_core::{HorizontalEdge, NodeId};
/// use frame_layout::Plan;
///
/// let content = NodeId(0);
/// let plan = Plan::builder()
///     .width(48.0)
///     .height(48.0)
///     .leading(HorizontalEdge::Leading, content, 12.0)
///     .center_y(content, 0.0)
///     .build();
/// assert_eq!(plan.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PlanBuilder<N = NodeId> {
    attributes: SmallVec<[Attribute<N>; INLINE_ATTRIBUTES]>,
}

impl<N> Default for PlanBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> PlanBuilder<N> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { attributes: SmallVec::new() }
    }

    /// Append an attribute as-is.
    pub fn attribute(mut self, attribute: Attribute<N>) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set a fixed width.
    pub fn width(self, value: f64) -> Self {
        self.attribute(Attribute::Width(value))
    }

    /// Set a fixed height.
    pub fn height(self, value: f64) -> Self {
        self.attribute(Attribute::Height(value))
    }

    /// Set a fixed horizontal origin.
    pub fn x(self, value: f64) -> Self {
        self.attribute(Attribute::X(value))
    }

    /// Set a fixed vertical origin.
    pub fn y(self, value: f64) -> Self {
        self.attribute(Attribute::Y(value))
    }

    /// Place the right edge at `value`, keeping the current width.
    pub fn max_x(self, value: f64) -> Self {
        self.attribute(Attribute::MaxX(value))
    }

    /// Place the bottom edge at `value`, keeping the current height.
    pub fn max_y(self, value: f64) -> Self {
        self.attribute(Attribute::MaxY(value))
    }

    /// Width from the `from` anchor to the `to` anchor. Each offset moves its
    /// endpoint toward the other one.
    pub fn width_between(self, from: HorizontalAnchor<N>, to: HorizontalAnchor<N>) -> Self {
        self.attribute(Attribute::WidthSpan { from, to })
    }

    /// Height from the `from` anchor to the `to` anchor.
    pub fn height_between(self, from: VerticalAnchor<N>, to: VerticalAnchor<N>) -> Self {
        self.attribute(Attribute::HeightSpan { from, to })
    }

    /// Copy the width of `node`.
    pub fn width_equal_to(self, node: N) -> Self {
        self.attribute(Attribute::WidthEqualTo(node))
    }

    /// Copy the height of `node`.
    pub fn height_equal_to(self, node: N) -> Self {
        self.attribute(Attribute::HeightEqualTo(node))
    }

    /// Put this node's leading edge on `edge` of `node`.
    pub fn leading(self, edge: HorizontalEdge, node: N, offset: f64) -> Self {
        self.attribute(Attribute::Leading(Anchor::new(node, edge).offset(offset)))
    }

    /// Put this node's trailing edge on `edge` of `node`.
    pub fn trailing(self, edge: HorizontalEdge, node: N, offset: f64) -> Self {
        self.attribute(Attribute::Trailing(Anchor::new(node, edge).offset(offset)))
    }

    /// Put this node's top edge on `edge` of `node`.
    pub fn top(self, edge: VerticalEdge, node: N, offset: f64) -> Self {
        self.attribute(Attribute::Top(Anchor::new(node, edge).offset(offset)))
    }

    /// Put this node's bottom edge on `edge` of `node`.
    pub fn bottom(self, edge: VerticalEdge, node: N, offset: f64) -> Self {
        self.attribute(Attribute::Bottom(Anchor::new(node, edge).offset(offset)))
    }

    /// Align horizontal centers with `node`, then shift by `offset`.
    pub fn center_x(self, node: N, offset: f64) -> Self {
        self.attribute(Attribute::CenterX { node, offset })
    }

    /// Align vertical centers with `node`, then shift by `offset`.
    pub fn center_y(self, node: N, offset: f64) -> Self {
        self.attribute(Attribute::CenterY { node, offset })
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Freeze the accumulated attributes.
    pub fn build(self) -> Plan<N> {
        Plan { attributes: self.attributes }
    }
}

impl<N> Extend<Attribute<N>> for PlanBuilder<N> {
    fn extend<I: IntoIterator<Item = Attribute<N>>>(&mut self, iter: I) {
        self.attributes.extend(iter);
    }
}

impl<N> From<PlanBuilder<N>> for Plan<N> {
    fn from(builder: PlanBuilder<N>) -> Self {
        builder.build()
    }
}
