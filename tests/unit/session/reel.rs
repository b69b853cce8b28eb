use super::*;
use crate::{
    audio::gain::{FadeWindow, GainCurve},
    composition::{dsl::TimelineBuilder, model::Transition},
    effects::transitions::Presentation,
    scene::{color::Color, visual::VisualNode},
};

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
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

fn reel(policy: FramePolicy) -> Reel {
    let timeline = TimelineBuilder::new(
        fps30(),
        Canvas {
            width: 320,
            height: 180,
        },
    )
    .segment("a", 40, label("a"))
    .transition(Transition::linear(Presentation::CrossFade, 10))
    .unwrap()
    .segment("b", 40, label("b"))
    .build()
    .unwrap();
    Reel::builder(timeline)
        .underlay(label("bg"))
        .tail_frames(10)
        .bed(AudioCue {
            gain: GainCurve::constant(0.5)
                .with_fade_in(FadeWindow::from_start(0, 10))
                .with_fade_out(FadeWindow::from_end(20, 0)),
            looped: true,
            ..AudioCue::new("music", "music.mp3", 0, 0.5)
        })
        .cue(AudioCue::new("chime", "chime.mp3", 30, 0.2))
        .thumbnail(0, "thumbnail.jpeg")
        .policy(policy)
        .build()
        .unwrap()
}

#[test]
fn total_includes_tail_frames() {
    let r = reel(FramePolicy::Clamp);
    assert_eq!(r.timeline().total_frames(), 70);
    assert_eq!(r.total_frames(), 80);
}

#[test]
fn underlay_uses_global_frame_and_tail_is_underlay_only() {
    let r = reel(FramePolicy::Clamp);
    let tree = r.render_frame(50, fps30(), 80).unwrap();
    assert_eq!(tree.nodes[0].id, "bg");
    assert!(matches!(&tree.nodes[0].kind, crate::scene::visual::NodeKind::Text { text, .. } if text == "50"));
    assert_eq!(tree.nodes[1].id, "b");

    let tail = r.render_frame(75, fps30(), 80).unwrap();
    assert_eq!(tail.nodes.len(), 1);
    assert_eq!(tail.nodes[0].id, "bg");
    assert_eq!(r.resolve(75).unwrap(), TimelineState::AfterEnd);
}

#[test]
fn host_mismatches_are_validation_errors() {
    let r = reel(FramePolicy::Clamp);
    assert!(matches!(
        r.render_frame(0, Fps::new(25, 1).unwrap(), 80),
        Err(ReelError::Validation(_))
    ));
    assert!(matches!(
        r.audio_gain(0, fps30(), 70),
        Err(ReelError::Validation(_))
    ));
    assert!(r.render_frame(0, Fps::new(60, 2).unwrap(), 80).is_ok());
}

#[test]
fn clamp_policy_clamps_and_reject_policy_fails() {
    let clamp = reel(FramePolicy::Clamp);
    assert_eq!(
        clamp.render_frame(-4, fps30(), 80).unwrap(),
        clamp.render_frame(0, fps30(), 80).unwrap()
    );
    assert_eq!(
        clamp.render_frame(500, fps30(), 80).unwrap(),
        clamp.render_frame(79, fps30(), 80).unwrap()
    );

    let reject = reel(FramePolicy::Reject);
    let err = reject.render_frame(80, fps30(), 80).unwrap_err();
    assert!(matches!(err, ReelError::OutOfRangeFrame { frame: 80, total: 80 }));
    assert!(reject.cue_gains(-1).is_err());
}

#[test]
fn audio_gain_follows_bed_curve() {
    let r = reel(FramePolicy::Clamp);
    assert_eq!(r.audio_gain(0, fps30(), 80).unwrap(), 0.0);
    assert_eq!(r.audio_gain(5, fps30(), 80).unwrap(), 0.25);
    assert_eq!(r.audio_gain(30, fps30(), 80).unwrap(), 0.5);
    assert_eq!(r.audio_gain(70, fps30(), 80).unwrap(), 0.25);

    let gains = r.cue_gains(29).unwrap();
    assert_eq!(gains[1].id, "chime");
    assert_eq!(gains[1].gain, 0.0);
    assert_eq!(r.cue_gains(30).unwrap()[1].gain, 0.2);
}

#[test]
fn thumbnail_only_at_frame_zero() {
    let r = reel(FramePolicy::Clamp);
    assert_eq!(
        r.artifacts_at(0),
        vec![Artifact::Thumbnail {
            filename: "thumbnail.jpeg".to_owned()
        }]
    );
    assert!(r.artifacts_at(1).is_empty());
}

#[test]
fn plan_serializes_for_the_host() {
    let r = reel(FramePolicy::Clamp);
    let plan = r.plan();
    assert_eq!(plan.total_frames, 80);
    assert_eq!(plan.tail_frames, 10);
    assert_eq!(plan.timeline.transitions[0].start, 30);
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["cues"][0]["id"], "music");
    assert_eq!(json["artifacts"][0]["artifact"]["type"], "thumbnail");
}

#[test]
fn builder_rejects_bad_cue_sheets() {
    let timeline = || {
        TimelineBuilder::new(
            fps30(),
            Canvas {
                width: 10,
                height: 10,
            },
        )
        .segment("a", 10, label("a"))
        .build()
        .unwrap()
    };
    assert!(
        Reel::builder(timeline())
            .cue(AudioCue::new("x", "x.mp3", 0, 1.0))
            .cue(AudioCue::new("x", "y.mp3", 0, 1.0))
            .build()
            .is_err()
    );
    assert!(
        Reel::builder(timeline())
            .cue(AudioCue::new("late", "x.mp3", 10, 1.0))
            .build()
            .is_err()
    );
    assert!(Reel::builder(timeline()).thumbnail(12, "t.jpeg").build().is_err());
}
