use super::*;
use crate::scene::{
    color::Color,
    content::SceneCtx,
    visual::{VisualNode, VisualTree},
};

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn canvas() -> Canvas {
    Canvas {
        width: 1920,
        height: 1080,
    }
}

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

fn seg(id: &'static str, d: u64) -> Segment {
    Segment::new(id, d, label(id))
}

fn fade(d: u64) -> Option<Transition> {
    Some(Transition::linear(Presentation::CrossFade, d))
}

#[test]
fn length_subtracts_transitions() {
    let tl = Timeline::new(
        fps30(),
        canvas(),
        vec![seg("a", 110), seg("b", 120), seg("c", 120)],
        vec![fade(18), fade(18)],
    )
    .unwrap();
    assert_eq!(tl.total_frames(), 314);
    assert_eq!(tl.starts(), &[0, 92, 194]);
    assert_eq!(tl.segment_start("c"), Some(194));
    assert_eq!(tl.segment_start("zz"), None);
}

#[test]
fn hard_cuts_concatenate() {
    let tl = Timeline::new(
        fps30(),
        canvas(),
        vec![seg("a", 10), seg("b", 20)],
        vec![None],
    )
    .unwrap();
    assert_eq!(tl.total_frames(), 30);
    assert!(tl.transition_after(0).is_none());
}

#[test]
fn plan_lists_segments_and_windows() {
    let tl = Timeline::new(
        fps30(),
        canvas(),
        vec![seg("a", 110), seg("b", 120), seg("c", 120)],
        vec![
            Some(Transition::linear(
                Presentation::BlurDissolve { max_blur_px: 12.0 },
                18,
            )),
            None,
        ],
    )
    .unwrap();
    let plan = tl.plan();
    assert_eq!(plan.total_frames, 332);
    assert_eq!(plan.segments[2].start, 212);
    assert_eq!(plan.transitions.len(), 1);
    let t = &plan.transitions[0];
    assert_eq!(
        (t.presentation.as_str(), t.from.as_str(), t.to.as_str(), t.start),
        ("blur_dissolve", "a", "b", 92)
    );
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["segments"][1]["id"], "b");
}

#[test]
fn rejects_invalid_layouts() {
    let cases: Vec<(Vec<Segment>, Vec<Option<Transition>>)> = vec![
        (vec![], vec![]),
        (vec![seg("a", 0)], vec![]),
        (vec![seg("a", 10), seg("a", 10)], vec![None]),
        (vec![seg("", 10)], vec![]),
        (vec![seg("a", 10), seg("b", 10)], vec![]),
        (vec![seg("a", 10), seg("b", 30)], vec![fade(12)]),
        (vec![seg("a", 10), seg("b", 10)], vec![fade(0)]),
        (
            vec![seg("a", 20), seg("b", 20), seg("c", 20)],
            vec![fade(12), fade(12)],
        ),
        (
            vec![seg("a", 20), seg("b", 20)],
            vec![Some(Transition::linear(
                Presentation::BlurDissolve { max_blur_px: f64::NAN },
                5,
            ))],
        ),
    ];
    for (segments, transitions) in cases {
        let err = Timeline::new(fps30(), canvas(), segments, transitions).unwrap_err();
        assert!(matches!(err, ReelError::Validation(_)), "{err}");
    }
}

#[test]
fn transition_may_fill_segment_when_other_side_is_cut() {
    let tl = Timeline::new(
        fps30(),
        canvas(),
        vec![seg("a", 20), seg("b", 20), seg("c", 20)],
        vec![fade(20), None],
    )
    .unwrap();
    assert_eq!(tl.total_frames(), 40);
}

#[test]
fn transition_deserializes_with_linear_default() {
    let t: Transition =
        serde_json::from_str(r#"{"presentation": {"type": "cross_fade"}, "duration_frames": 18}"#)
            .unwrap();
    assert_eq!(t, Transition::linear(Presentation::CrossFade, 18));
}
