//! End-to-end layouts through the public API.

use std::collections::HashMap;

use frame_core::{Field, HorizontalEdge, LayoutDirection, LayoutError, NodeId, Rect, VerticalEdge};
use frame_layout::{
    apply, resolve, validate, Diagnostic, FrameHost, HorizontalAnchor, LayoutOptions, LayoutTree,
    Plan, VerticalAnchor,
};

/// A chat list cell: avatar on the leading side, time on the trailing side,
/// name and last message stacked between them.
struct MessageCell {
    tree: LayoutTree,
    content: NodeId,
    avatar: NodeId,
    time: NodeId,
    name: NodeId,
    message: NodeId,
}

impl MessageCell {
    fn new() -> Self {
        let mut tree = LayoutTree::new();
        let content = tree.add_root(Rect::new(0.0, 0.0, 414.0, 80.0));
        let avatar = tree.add_child(content, Rect::ZERO).unwrap();
        let time = tree.add_child(content, Rect::ZERO).unwrap();
        let name = tree.add_child(content, Rect::ZERO).unwrap();
        let message = tree.add_child(content, Rect::ZERO).unwrap();
        for (id, label) in [
            (content, "contentView"),
            (avatar, "avatarImageView"),
            (time, "timeLabel"),
            (name, "nameLabel"),
            (message, "messageLabel"),
        ] {
            tree.set_name(id, label).unwrap();
        }
        Self { tree, content, avatar, time, name, message }
    }

    fn layout(&mut self, options: &LayoutOptions) -> [Rect; 4] {
        let (content, avatar, time) = (self.content, self.avatar, self.time);

        let avatar_plan = Plan::builder()
            .width(48.0)
            .height(48.0)
            .leading(HorizontalEdge::Leading, content, 16.0)
            .center_y(content, 0.0)
            .build();
        let time_plan = Plan::builder()
            .width(60.0)
            .height(16.0)
            .trailing(HorizontalEdge::Trailing, content, 16.0)
            .top(VerticalEdge::Top, avatar, 0.0)
            .build();
        let name_plan = Plan::builder()
            .height(20.0)
            .width_between(
                HorizontalAnchor::trailing(avatar).offset(12.0),
                HorizontalAnchor::leading(time).offset(8.0),
            )
            .top(VerticalEdge::Top, avatar, 0.0)
            .build();
        let message_plan = Plan::builder()
            .height(20.0)
            .width_between(
                HorizontalAnchor::trailing(avatar).offset(12.0),
                HorizontalAnchor::trailing(content).offset(16.0),
            )
            .bottom(VerticalEdge::Bottom, avatar, 0.0)
            .build();

        [
            self.tree.apply(self.avatar, &avatar_plan, options).unwrap(),
            self.tree.apply(self.time, &time_plan, options).unwrap(),
            self.tree.apply(self.name, &name_plan, options).unwrap(),
            self.tree.apply(self.message, &message_plan, options).unwrap(),
        ]
    }
}

#[test]
fn message_cell_left_to_right() {
    let mut cell = MessageCell::new();
    let [avatar, time, name, message] = cell.layout(&LayoutOptions::ltr());

    assert_eq!(avatar, Rect::new(16.0, 16.0, 48.0, 48.0));
    assert_eq!(time, Rect::new(338.0, 16.0, 60.0, 16.0));
    assert_eq!(name, Rect::new(76.0, 16.0, 254.0, 20.0));
    assert_eq!(message, Rect::new(76.0, 44.0, 322.0, 20.0));
    assert_eq!(cell.tree.frame(cell.message), Some(message));
}

#[test]
fn message_cell_right_to_left() {
    let mut cell = MessageCell::new();
    let [avatar, time, name, message] = cell.layout(&LayoutOptions::rtl());

    assert_eq!(avatar, Rect::new(350.0, 16.0, 48.0, 48.0));
    assert_eq!(time, Rect::new(16.0, 16.0, 60.0, 16.0));
    assert_eq!(name, Rect::new(84.0, 16.0, 254.0, 20.0));
    assert_eq!(message, Rect::new(16.0, 44.0, 322.0, 20.0));
}

#[test]
fn message_cell_relayout_is_stable() {
    let mut cell = MessageCell::new();
    let first = cell.layout(&LayoutOptions::ltr());
    assert_eq!(cell.layout(&LayoutOptions::ltr()), first);

    // Switching direction re-resolves every node from the same plans.
    let flipped = cell.layout(&LayoutOptions::rtl());
    for (ltr, rtl) in first.iter().zip(flipped.iter()) {
        assert_eq!(ltr.mirrored_x(414.0), *rtl);
    }
}

#[test]
fn spans_followed_by_explicit_origin() {
    let mut cell = MessageCell::new();
    let (content, avatar, time, name) = (cell.content, cell.avatar, cell.time, cell.name);

    let plans = [
        (
            avatar,
            Plan::builder()
                .width(48.0)
                .height(48.0)
                .center_y(content, 0.0)
                .leading(HorizontalEdge::Leading, content, 12.0)
                .build(),
        ),
        (
            time,
            Plan::builder()
                .width(72.0)
                .height(18.0)
                .top(VerticalEdge::Top, content, 16.0)
                .trailing(HorizontalEdge::Trailing, content, 12.0)
                .build(),
        ),
        (
            name,
            Plan::builder()
                .width_between(
                    HorizontalAnchor::trailing(avatar).offset(12.0),
                    HorizontalAnchor::leading(time),
                )
                .height(18.0)
                .top(VerticalEdge::Top, content, 16.0)
                .leading(HorizontalEdge::Trailing, avatar, 12.0)
                .build(),
        ),
        (
            cell.message,
            Plan::builder()
                .width_between(
                    HorizontalAnchor::trailing(avatar).offset(12.0),
                    HorizontalAnchor::trailing(content).offset(12.0),
                )
                .height(20.0)
                .top(VerticalEdge::Bottom, name, 2.0)
                .leading(HorizontalEdge::Trailing, avatar, 12.0)
                .build(),
        ),
    ];

    for (target, plan) in &plans {
        for direction in [LayoutDirection::LeftToRight, LayoutDirection::RightToLeft] {
            assert_eq!(validate(plan, *target, direction), vec![], "{plan:?}");
        }
    }

    let options = LayoutOptions::ltr().with_diagnostics(true);
    let frames: Vec<Rect> = plans
        .iter()
        .map(|(target, plan)| cell.tree.apply(*target, plan, &options).unwrap())
        .collect();
    assert_eq!(
        frames,
        vec![
            Rect::new(12.0, 16.0, 48.0, 48.0),
            Rect::new(330.0, 16.0, 72.0, 18.0),
            Rect::new(72.0, 16.0, 258.0, 18.0),
            Rect::new(72.0, 36.0, 330.0, 20.0),
        ]
    );
}

/// Parent `{0,0,414,896}` holding `peer`; the target is placed either inside
/// `peer` or next to it. IDs are root 0, peer 1, target 2 in both layouts.
fn place(plan: &Plan, inside_peer: bool) -> Rect {
    let mut tree = LayoutTree::new();
    let root = tree.add_root(Rect::new(0.0, 0.0, 414.0, 896.0));
    let peer = tree.add_child(root, Rect::new(30.0, 40.0, 100.0, 80.0)).unwrap();
    let holder = if inside_peer { peer } else { root };
    let target = tree.add_child(holder, Rect::new(0.0, 0.0, 20.0, 10.0)).unwrap();
    tree.resolve(target, plan, LayoutDirection::LeftToRight).unwrap()
}

#[test]
fn ancestor_peers_are_read_in_local_space() {
    let peer = NodeId(1);
    let positional = [
        Plan::builder()
            .leading(HorizontalEdge::Leading, peer, 5.0)
            .top(VerticalEdge::Top, peer, 5.0)
            .build(),
        Plan::builder()
            .trailing(HorizontalEdge::Trailing, peer, 5.0)
            .bottom(VerticalEdge::Bottom, peer, 5.0)
            .build(),
        Plan::builder().center_x(peer, 3.0).center_y(peer, -3.0).build(),
        Plan::builder()
            .width_between(
                HorizontalAnchor::leading(peer).offset(4.0),
                HorizontalAnchor::trailing(peer).offset(4.0),
            )
            .height_between(
                VerticalAnchor::top(peer).offset(4.0),
                VerticalAnchor::bottom(peer).offset(4.0),
            )
            .build(),
    ];
    for plan in &positional {
        let inside = place(plan, true);
        let beside = place(plan, false);
        assert_eq!(beside.translate(-30.0, -40.0), inside, "{plan:?}");
    }

    let sizes = Plan::builder().width_equal_to(peer).height_equal_to(peer).build();
    assert_eq!(place(&sizes, true), Rect::new(0.0, 0.0, 100.0, 80.0));
    assert_eq!(place(&sizes, false), Rect::new(0.0, 0.0, 100.0, 80.0));
}

#[test]
fn ancestor_anchor_values() {
    let peer = NodeId(1);
    let plan = Plan::builder()
        .trailing(HorizontalEdge::Trailing, peer, 5.0)
        .bottom(VerticalEdge::Bottom, peer, 5.0)
        .build();
    assert_eq!(place(&plan, true), Rect::new(75.0, 65.0, 20.0, 10.0));
    assert_eq!(place(&plan, false), Rect::new(105.0, 105.0, 20.0, 10.0));
}

#[test]
fn unknown_nodes_are_rejected_before_resolving() {
    let mut tree = LayoutTree::new();
    let root = tree.add_root(Rect::new(0.0, 0.0, 414.0, 896.0));
    let target = tree.add_child(root, Rect::new(1.0, 2.0, 3.0, 4.0)).unwrap();
    let plan = Plan::builder()
        .width(10.0)
        .width_between(HorizontalAnchor::leading(root), HorizontalAnchor::trailing(NodeId(9)))
        .build();

    assert_eq!(
        tree.apply(target, &plan, &LayoutOptions::ltr()),
        Err(LayoutError::UnknownPeer { index: 1, node: NodeId(9) })
    );
    assert_eq!(tree.frame(target), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
}

#[test]
fn diagnostics_do_not_change_the_result() {
    let mut tree = LayoutTree::new();
    let root = tree.add_root(Rect::new(0.0, 0.0, 414.0, 896.0));
    let target = tree.add_child(root, Rect::new(0.0, 0.0, 50.0, 50.0)).unwrap();
    let plan = Plan::builder()
        .trailing(HorizontalEdge::Trailing, root, 8.0)
        .width(100.0)
        .width(120.0)
        .build();

    assert_eq!(
        validate(&plan, target, LayoutDirection::LeftToRight),
        vec![
            Diagnostic::StaleSize { index: 0, field: Field::Width },
            Diagnostic::Overridden { index: 1, by: 2, field: Field::Width },
        ]
    );

    let quiet = tree.resolve(target, &plan, LayoutDirection::LeftToRight).unwrap();
    let loud = tree
        .apply(target, &plan, &LayoutOptions::ltr().with_diagnostics(true))
        .unwrap();
    assert_eq!(quiet, loud);
    assert_eq!(loud, Rect::new(356.0, 0.0, 120.0, 50.0));
}

#[test]
fn process_default_direction() {
    LayoutDirection::set_process_default(LayoutDirection::RightToLeft);
    assert_eq!(LayoutOptions::default().direction, LayoutDirection::RightToLeft);
    LayoutDirection::set_process_default(LayoutDirection::LeftToRight);
    assert_eq!(LayoutOptions::default().direction, LayoutDirection::LeftToRight);
}

/// A host keyed by string names, to exercise the resolver away from
/// [`LayoutTree`].
#[derive(Default)]
struct NamedViews {
    views: HashMap<&'static str, (Option<&'static str>, Rect)>,
}

impl NamedViews {
    fn insert(&mut self, name: &'static str, parent: Option<&'static str>, frame: Rect) {
        self.views.insert(name, (parent, frame));
    }
}

impl FrameHost for NamedViews {
    type Node = &'static str;

    fn frame(&self, node: &'static str) -> Rect {
        self.views.get(node).map(|(_, frame)| *frame).unwrap_or_default()
    }

    fn is_descendant(&self, node: &'static str, of: &'static str) -> bool {
        let mut current = Some(node);
        while let Some(name) = current {
            if name == of {
                return true;
            }
            current = self.views.get(name).and_then(|(parent, _)| *parent);
        }
        false
    }

    fn set_frame(&mut self, node: &'static str, frame: Rect) {
        if let Some(entry) = self.views.get_mut(node) {
            entry.1 = frame;
        }
    }
}

#[test]
fn custom_host() {
    let mut views = NamedViews::default();
    views.insert("window", None, Rect::new(0.0, 0.0, 414.0, 896.0));
    views.insert("card", Some("window"), Rect::new(20.0, 100.0, 300.0, 200.0));
    views.insert("badge", Some("window"), Rect::new(0.0, 0.0, 24.0, 24.0));
    views.insert("title", Some("card"), Rect::new(0.0, 0.0, 0.0, 0.0));

    let badge = Plan::builder()
        .bottom(VerticalEdge::Top, "card", 4.0)
        .trailing(HorizontalEdge::Trailing, "card", 0.0)
        .build();
    let frame = apply(&mut views, "badge", &badge, &LayoutOptions::ltr());
    assert_eq!(frame, Rect::new(296.0, 72.0, 24.0, 24.0));

    let title = Plan::builder()
        .height(22.0)
        .width_between(
            HorizontalAnchor::leading("card").offset(16.0),
            HorizontalAnchor::trailing("card").offset(16.0),
        )
        .top(VerticalEdge::Top, "card", 16.0)
        .build();
    let frame = apply(&mut views, "title", &title, &LayoutOptions::rtl());
    assert_eq!(frame, Rect::new(16.0, 16.0, 268.0, 22.0));
    assert_eq!(views.frame("title"), frame);

    // Resolving without applying leaves the host untouched.
    let plan = Plan::builder().y(0.0).build();
    let moved = resolve(&views, "title", &plan, LayoutDirection::LeftToRight);
    assert_eq!(moved.y, 0.0);
    assert_eq!(views.frame("title").y, 16.0);
}
