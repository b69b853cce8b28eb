use super::*;
use crate::{foundation::core::Canvas, scene::visual::NodeKind};

fn ctx(frame: i64) -> SceneCtx {
    let cfg = PromoConfig::default();
    SceneCtx::new(frame, cfg.fps, 110, cfg.canvas)
}

fn scene() -> HeroScene {
    HeroScene::new(&PromoConfig::default()).unwrap()
}

#[test]
fn renders_one_centered_group() {
    let tree = scene().render(&ctx(0));
    assert_eq!(tree.nodes.len(), 1);
    let root = &tree.nodes[0];
    assert_eq!(root.id, "hero");
    assert_eq!(root.transform.translate, Vec2::new(960.0, 540.0));
}

#[test]
fn logo_starts_hidden_and_settles_full_size() {
    let s = scene();
    let first = s.render(&ctx(0));
    let logo = first.find("logo").unwrap();
    assert_eq!(logo.opacity, 0.0);
    assert!((logo.transform.scale.x - 0.6).abs() < 1e-12);

    let late = s.render(&ctx(100));
    let logo = late.find("logo").unwrap();
    assert!((logo.opacity - 1.0).abs() < 1e-3);
    assert!((logo.transform.scale.x - 1.0).abs() < 1e-2);
    assert!(matches!(&logo.kind, NodeKind::Image { source, .. } if source.ends_with("outrank_logo.png")));
}

#[test]
fn corners_fade_in_between_frames_15_and_30() {
    let s = scene();
    assert_eq!(s.render(&ctx(10)).find("corner.tl").unwrap().opacity, 0.0);
    assert!((s.render(&ctx(22)).find("corner.tl").unwrap().opacity - 7.0 / 15.0).abs() < 1e-12);
    assert_eq!(s.render(&ctx(40)).find("corner.br").unwrap().opacity, 1.0);
}

#[test]
fn tagline_waits_for_its_start_frame() {
    let s = scene();
    let early = s.render(&ctx(27));
    let tagline = early.find("tagline").unwrap();
    assert!(tagline.children.iter().all(|c| c.opacity == 0.0));
    let late = s.render(&ctx(109));
    let tagline = late.find("tagline").unwrap();
    assert_eq!(tagline.children.len(), 4);
    assert!(tagline.children.iter().all(|c| c.opacity == 1.0));
}

#[test]
fn layout_follows_the_canvas() {
    let cfg = PromoConfig::default();
    let small = SceneCtx::new(0, cfg.fps, 110, Canvas { width: 640, height: 360 });
    let tree = scene().render(&small);
    assert_eq!(tree.nodes[0].transform.translate, Vec2::new(320.0, 180.0));
    let tl = tree.find("corner.tl").unwrap();
    assert_eq!(tl.transform.translate, Vec2::new(-260.0, -120.0));
}
