use super::*;

#[test]
fn builders_compose_transforms() {
    let n = VisualNode::rect("card", 100.0, 50.0, Paint::solid(Color::WHITE))
        .rounded(12.0)
        .translated(10.0, 20.0)
        .translated(-5.0, 0.0)
        .scaled(0.5)
        .scaled(2.0)
        .with_opacity(0.5)
        .with_opacity(0.5);
    assert_eq!(n.transform.translate, Vec2::new(5.0, 20.0));
    assert_eq!(n.transform.scale, Vec2::new(1.0, 1.0));
    assert_eq!(n.opacity, 0.25);
    assert!(matches!(n.kind, NodeKind::Rect { corner_radius, .. } if corner_radius == 12.0));
}

#[test]
fn opacity_and_blur_stay_in_domain() {
    let n = VisualNode::text("t", "hi", 20.0, Color::WHITE)
        .with_opacity(3.0)
        .blurred(-4.0);
    assert_eq!(n.opacity, 1.0);
    assert_eq!(n.blur_px, 0.0);
}

#[test]
fn tree_counts_and_finds_nested_nodes() {
    let tree = VisualTree::new(vec![
        VisualNode::group(
            "a",
            vec![
                VisualNode::text("a.title", "x", 10.0, Color::WHITE).weight(700),
                VisualNode::ellipse("a.dot", 2.0, 2.0, Paint::solid(Color::WHITE)),
            ],
        ),
        VisualNode::image("logo", "logo.png", 64.0, 64.0),
    ]);
    assert_eq!(tree.node_count(), 4);
    let title = tree.find("a.title").unwrap();
    assert!(matches!(title.kind, NodeKind::Text { weight: 700, .. }));
    assert!(tree.find("missing").is_none());
}

#[test]
fn tree_opacity_applies_to_roots_only() {
    let tree = VisualTree::new(vec![VisualNode::group(
        "g",
        vec![VisualNode::text("t", "x", 10.0, Color::WHITE)],
    )])
    .with_opacity(0.4)
    .blurred(3.0);
    assert_eq!(tree.nodes[0].opacity, 0.4);
    assert_eq!(tree.nodes[0].blur_px, 3.0);
    assert_eq!(tree.nodes[0].children[0].opacity, 1.0);
}

#[test]
fn serializes_kind_with_type_tag() {
    let n = VisualNode::line("l", Vec2::new(1.0, 2.0), 2.0, Color::WHITE);
    let v = serde_json::to_value(&n).unwrap();
    assert_eq!(v["kind"]["type"], "line");
    assert!(v.get("children").is_none());
}
