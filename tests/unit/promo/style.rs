use super::*;

#[test]
fn tint_tokens_recolors_only_the_tail() {
    let node = VisualNode::group(
        "t",
        ["a", "b", "c"]
            .iter()
            .map(|s| VisualNode::text(*s, *s, 10.0, Color::WHITE))
            .collect(),
    );
    let tinted = tint_tokens(node.clone(), 1..usize::MAX, CORAL);
    let colors: Vec<_> = tinted
        .children
        .iter()
        .map(|c| match c.kind {
            NodeKind::Text { color, .. } => color,
            _ => Color::TRANSPARENT,
        })
        .collect();
    assert_eq!(colors, vec![Color::WHITE, CORAL, CORAL]);

    let middle = tint_tokens(node, 1..2, CORAL);
    assert!(matches!(middle.children[2].kind, NodeKind::Text { color, .. } if color == Color::WHITE));
    assert!(matches!(middle.children[1].kind, NodeKind::Text { color, .. } if color == CORAL));
}

#[test]
fn token_counts_skip_whitespace() {
    assert_eq!(tokens_in("Real results. ", TokenUnit::Char), 12);
    assert_eq!(tokens_in("Content that ", TokenUnit::Word), 2);
    assert_eq!(tokens_in("", TokenUnit::Char), 0);
}

#[test]
fn rise_moves_and_fades_with_progress() {
    let n = rise(VisualNode::group("g", vec![]), 0.0, 30.0);
    assert_eq!(n.opacity, 0.0);
    assert_eq!(n.transform.translate, Vec2::new(0.0, 30.0));
    let n = rise(VisualNode::group("g", vec![]), 1.0, 30.0);
    assert_eq!(n.opacity, 1.0);
    assert_eq!(n.transform.translate, Vec2::new(0.0, 0.0));
}

#[test]
fn ring_band_starts_at_the_inner_edge() {
    let r = ring("r", 100.0, 2.0, PURPLE);
    let NodeKind::Ellipse { fill: Paint::Radial { stops, .. }, .. } = r.kind else {
        panic!("ring should be a radial ellipse");
    };
    assert!((stops[0].offset - 0.98).abs() < 1e-12);
    assert_eq!(stops[0].color, Color::TRANSPARENT);
    assert_eq!(stops[2].color, PURPLE);
}
