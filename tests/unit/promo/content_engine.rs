use super::*;
use crate::scene::visual::NodeKind;

fn scene() -> ContentEngineScene {
    ContentEngineScene::new(&PromoConfig::default()).unwrap()
}

fn ctx(frame: i64) -> SceneCtx {
    let cfg = PromoConfig::default();
    SceneCtx::new(frame, cfg.fps, 130, cfg.canvas)
}

#[test]
fn typewriter_types_one_character_per_stagger_step() {
    let s = scene();
    assert_eq!(s.typed_chars(-1), 0);
    assert_eq!(s.typed_chars(0), 1);
    assert_eq!(s.typed_chars(54), 46);
    assert_eq!(s.typed_chars(55), 47);
    assert_eq!(s.typed_chars(129), 47);
    let mut last = 0;
    for f in 0..130 {
        let n = s.typed_chars(f);
        assert!(n >= last);
        last = n;
    }
}

#[test]
fn paragraph_lines_grow_from_the_left() {
    let s = scene();
    let width_at = |frame: i64, id: &str| match s.render(&ctx(frame)).find(id).map(|n| n.kind.clone()) {
        Some(NodeKind::Rect { width, .. }) => width,
        _ => f64::NAN,
    };
    assert_eq!(width_at(45, "line.0"), 0.0);
    assert!((width_at(60, "line.0") - 636.0 * 0.85).abs() < 1e-9);
    assert!((width_at(129, "line.2") - 636.0 * 0.70).abs() < 1e-9);
    assert!(width_at(55, "line.1") > 0.0 && width_at(55, "line.1") < 636.0 * 0.92);
}

#[test]
fn headline_highlights_the_last_two_words() {
    let tree = scene().render(&ctx(129));
    let headline = tree.find("headline").unwrap();
    let colors: Vec<_> = headline
        .children
        .iter()
        .map(|c| match c.kind {
            NodeKind::Text { color, .. } => color,
            _ => Color::TRANSPARENT,
        })
        .collect();
    assert_eq!(colors, vec![Color::WHITE, Color::WHITE, LILAC, LILAC]);
}

#[test]
fn tags_pop_in_after_the_card() {
    let s = scene();
    let early = s.render(&ctx(29));
    assert!((0..4).all(|i| early.find(&format!("tag.{i}")).unwrap().opacity == 0.0));
    let late = s.render(&ctx(129));
    assert!((0..4).all(|i| late.find(&format!("tag.{i}")).unwrap().opacity > 0.99));
}
