use super::*;

fn ctx(frame: i64) -> SceneCtx {
    let cfg = PromoConfig::default();
    SceneCtx::new(frame, cfg.fps, 120, cfg.canvas)
}

#[test]
fn spokes_point_at_evenly_spaced_integrations() {
    let s = PublishScene::new(&PromoConfig::default()).unwrap();
    let tree = s.render(&ctx(119));
    let top = tree.find("integration.0").unwrap().transform.translate;
    let right = tree.find("integration.1").unwrap().transform.translate;
    assert!(top.x.abs() < 1e-9 && (top.y + ORBIT_R).abs() < 1e-9);
    assert!((right.x - ORBIT_R).abs() < 1e-9 && right.y.abs() < 1e-9);
}

#[test]
fn pulses_start_once_the_spoke_is_drawn() {
    let s = PublishScene::new(&PromoConfig::default()).unwrap();
    assert!(s.render(&ctx(35)).find("pulse.0").is_none());
    assert!(s.render(&ctx(36)).find("pulse.0").is_some());
    assert!(s.render(&ctx(36)).find("pulse.3").is_none());
}

#[test]
fn title_highlights_only_everywhere() {
    let s = PublishScene::new(&PromoConfig::default()).unwrap();
    assert_eq!(s.highlight, 7..17);
}
