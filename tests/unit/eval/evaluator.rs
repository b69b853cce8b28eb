use super::*;
use crate::{
    animation::{
        ease::Ease,
        spring::{SETTLE_THRESHOLD, SpringConfig},
    },
    composition::{dsl::TimelineBuilder, model::Transition},
    effects::transitions::{Presentation, TransitionTiming},
    foundation::core::{Canvas, Fps},
    scene::{color::Color, visual::VisualNode},
};

fn label(id: &'static str) -> impl Fn(&SceneCtx) -> VisualTree + Send + Sync {
    move |ctx: &SceneCtx| {
        VisualTree::new(vec![VisualNode::text(
            id,
            ctx.frame.to_string(),
            10.0,
            Color::WHITE,
        )])
    }
}

fn three_scenes(presentation: Presentation) -> Timeline {
    TimelineBuilder::new(
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 1280,
            height: 720,
        },
    )
    .segment("a", 110, label("a"))
    .transition(Transition::linear(presentation, 18))
    .unwrap()
    .segment("b", 120, label("b"))
    .transition(Transition::linear(presentation, 18))
    .unwrap()
    .segment("c", 120, label("c"))
    .build()
    .unwrap()
}

fn text_of(node: &VisualNode) -> &str {
    match &node.kind {
        crate::scene::visual::NodeKind::Text { text, .. } => text,
        _ => "",
    }
}

#[test]
fn resolves_segments_windows_and_bounds() {
    let tl = three_scenes(Presentation::CrossFade);
    assert_eq!(Evaluator::resolve(&tl, -1), TimelineState::BeforeStart);
    assert_eq!(
        Evaluator::resolve(&tl, 0),
        TimelineState::InSegment {
            segment: 0,
            local_frame: 0
        }
    );
    assert_eq!(
        Evaluator::resolve(&tl, 91),
        TimelineState::InSegment {
            segment: 0,
            local_frame: 91
        }
    );
    assert_eq!(
        Evaluator::resolve(&tl, 92),
        TimelineState::InTransition {
            from: 0,
            to: 1,
            local_from: 92,
            local_to: 0,
            progress: 0.0
        }
    );
    assert_eq!(
        Evaluator::resolve(&tl, 110),
        TimelineState::InSegment {
            segment: 1,
            local_frame: 18
        }
    );
    assert_eq!(
        Evaluator::resolve(&tl, 313),
        TimelineState::InSegment {
            segment: 2,
            local_frame: 119
        }
    );
    assert_eq!(Evaluator::resolve(&tl, 314), TimelineState::AfterEnd);
}

#[test]
fn blend_factor_spans_the_window() {
    let tl = three_scenes(Presentation::CrossFade);
    let progress = |f| match Evaluator::resolve(&tl, f) {
        TimelineState::InTransition { progress, .. } => progress,
        other => panic!("frame {f} not in transition: {other:?}"),
    };
    assert_eq!(progress(92), 0.0);
    assert!((progress(109) - 1.0).abs() < 0.06);
    let mut prev = -1.0;
    for f in 92..110 {
        let b = progress(f);
        assert!(b > prev);
        prev = b;
    }
}

#[test]
fn transition_frames_render_both_layers() {
    let tl = three_scenes(Presentation::CrossFade);
    let tree = Evaluator::eval_frame(&tl, 101);
    assert_eq!(tree.nodes.len(), 2);
    assert_eq!(tree.nodes[0].id, "a");
    assert_eq!(text_of(&tree.nodes[0]), "101");
    assert_eq!(tree.nodes[1].id, "b");
    assert_eq!(text_of(&tree.nodes[1]), "9");
    assert!((tree.nodes[0].opacity - 0.5).abs() < 1e-12);
    assert!((tree.nodes[1].opacity - 0.5).abs() < 1e-12);
}

#[test]
fn segment_frames_receive_local_time() {
    let tl = three_scenes(Presentation::CrossFade);
    let tree = Evaluator::eval_frame(&tl, 250);
    assert_eq!(tree.nodes.len(), 1);
    assert_eq!(tree.nodes[0].id, "c");
    assert_eq!(text_of(&tree.nodes[0]), "56");
}

#[test]
fn out_of_range_frames_are_empty() {
    let tl = three_scenes(Presentation::CrossFade);
    assert!(Evaluator::eval_frame(&tl, -5).is_empty());
    assert!(Evaluator::eval_frame(&tl, 10_000).is_empty());
}

#[test]
fn evaluation_is_pure() {
    let tl = three_scenes(Presentation::BlurDissolve { max_blur_px: 20.0 });
    for f in [0, 95, 101, 200, 313] {
        assert_eq!(Evaluator::eval_frame(&tl, f), Evaluator::eval_frame(&tl, f));
    }
    let mid = Evaluator::eval_frame(&tl, 101);
    assert!(mid.nodes.iter().all(|n| n.blur_px == 20.0));
}

#[test]
fn eased_timing_changes_progress() {
    let tl = TimelineBuilder::new(
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 100,
            height: 100,
        },
    )
    .segment("a", 20, label("a"))
    .transition(
        Transition::linear(Presentation::CrossFade, 10).with_timing(TransitionTiming::Eased {
            ease: Ease::InQuad,
        }),
    )
    .unwrap()
    .segment("b", 20, label("b"))
    .build()
    .unwrap();
    match Evaluator::resolve(&tl, 15) {
        TimelineState::InTransition { progress, .. } => assert!((progress - 0.25).abs() < 1e-12),
        other => panic!("unexpected {other:?}"),
    }
}

fn spring_timeline(config: SpringConfig) -> crate::foundation::error::ReelResult<Timeline> {
    TimelineBuilder::new(
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 100,
            height: 100,
        },
    )
    .segment("a", 40, label("a"))
    .transition(
        Transition::linear(Presentation::CrossFade, 12)
            .with_timing(TransitionTiming::Spring { config }),
    )?
    .segment("b", 40, label("b"))
    .build()
}

#[test]
fn spring_timing_is_resolved_when_the_timeline_is_built() {
    let config = SpringConfig::damped(3.0, 120.0).unwrap();
    let fps = Fps::new(30, 1).unwrap();
    let tl = spring_timeline(config).unwrap();
    let timing = tl.transition_timing(0).unwrap();
    assert_eq!(
        timing.natural_frames(),
        config.settle_frames(fps, SETTLE_THRESHOLD).unwrap()
    );
    assert!(tl.transition_timing(1).is_none());

    // Window starts at 28; frame 34 is halfway.
    match Evaluator::resolve(&tl, 34) {
        TimelineState::InTransition { progress, .. } => assert_eq!(progress, timing.apply(0.5)),
        other => panic!("unexpected {other:?}"),
    }

    let undamped = SpringConfig::new(0.0, 120.0, 1.0).unwrap();
    assert!(spring_timeline(undamped).is_err());
}
