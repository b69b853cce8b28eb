use super::*;
use crate::foundation::core::Canvas;

fn ctx(frame: i64) -> SceneCtx {
    SceneCtx::new(
        frame,
        crate::foundation::core::Fps::new(30, 1).unwrap(),
        772,
        Canvas {
            width: 1920,
            height: 1080,
        },
    )
}

#[test]
fn layers_base_orbs_grid_particles_and_vignette() {
    let tree = Background::new().unwrap().render(&ctx(0));
    assert_eq!(tree.nodes.len(), 1);
    let root = &tree.nodes[0];
    assert_eq!(root.id, "background");
    assert_eq!(root.children.len(), 18);
    assert_eq!(root.children[0].id, "base");
    assert_eq!(root.children[17].id, "vignette");
    assert_eq!(tree.find("grid").unwrap().children.len(), 33 + 19);
    assert!(tree.find("particle.11").is_some());
}

#[test]
fn grid_breathes_between_its_bounds() {
    let bg = Background::new().unwrap();
    for f in (0..772).step_by(37) {
        let o = bg.render(&ctx(f)).find("grid").unwrap().opacity;
        assert!((0.3 - 1e-12..=0.6 + 1e-12).contains(&o), "frame {f}: {o}");
    }
}

#[test]
fn drifts_with_the_global_frame() {
    let bg = Background::new().unwrap();
    let a = bg.render(&ctx(0));
    let b = bg.render(&ctx(300));
    assert_ne!(
        a.find("orb.0").unwrap().transform.translate,
        b.find("orb.0").unwrap().transform.translate
    );
    assert_eq!(bg.render(&ctx(300)), b);
}
