use super::*;

fn music() -> GainCurve {
    GainCurve::constant(0.35)
        .with_fade_in(FadeWindow::from_start(0, 30))
        .with_fade_out(FadeWindow::from_end(60, 10))
}

#[test]
fn music_curve_fades_in_holds_and_fades_out() {
    let g = music();
    let total = 772;
    assert_eq!(g.gain(0, total), 0.0);
    assert!((g.gain(15, total) - 0.175).abs() < 1e-12);
    assert_eq!(g.gain(30, total), 0.35);
    assert_eq!(g.gain(400, total), 0.35);
    assert_eq!(g.gain(712, total), 0.35);
    assert!((g.gain(737, total) - 0.175).abs() < 1e-12);
    assert_eq!(g.gain(762, total), 0.0);
    assert_eq!(g.gain(771, total), 0.0);
    assert_eq!(g.gain(-3, total), 0.0);
    g.validate(total).unwrap();
}

#[test]
fn gain_is_never_outside_level() {
    let g = music();
    for f in -10..800 {
        let v = g.gain(f, 772);
        assert!((0.0..=0.35).contains(&v), "frame {f}: {v}");
    }
}

#[test]
fn validate_rejects_inverted_windows() {
    let g = GainCurve::constant(1.0).with_fade_out(FadeWindow::from_end(10, 60));
    assert!(g.validate(772).is_err());
    let g = GainCurve::constant(1.0).with_fade_in(FadeWindow {
        start: FrameAnchor::FromStart(700),
        end: FrameAnchor::FromEnd(100),
    });
    assert!(g.validate(772).is_err());
    assert!(g.validate(900).is_ok());
    assert!(GainCurve::constant(-0.1).validate(100).is_err());
}

#[test]
fn anchors_resolve_against_total() {
    assert_eq!(FrameAnchor::FromStart(5).resolve(100), 5);
    assert_eq!(FrameAnchor::FromEnd(60).resolve(100), 40);
    assert_eq!(FrameAnchor::FromEnd(60).resolve(10), -50);
}

#[test]
fn one_shot_cues_respect_start_and_length() {
    let mut cue = AudioCue::new("whoosh", "whoosh.mp3", 5, 0.25);
    assert_eq!(cue.gain_at(4, 772), 0.0);
    assert_eq!(cue.gain_at(5, 772), 0.25);
    assert_eq!(cue.gain_at(700, 772), 0.25);
    cue.duration_frames = Some(45);
    assert_eq!(cue.gain_at(49, 772), 0.25);
    assert_eq!(cue.gain_at(50, 772), 0.0);
    cue.looped = true;
    assert_eq!(cue.gain_at(500, 772), 0.25);
}

#[test]
fn cue_json_uses_defaults() {
    let cue: AudioCue = serde_json::from_str(
        r#"{"id": "chime", "source": "chime.mp3", "start_frame": 630, "gain": {"level": 0.2}}"#,
    )
    .unwrap();
    assert_eq!(cue, AudioCue::new("chime", "chime.mp3", 630, 0.2));
}

#[test]
fn levels_above_unity_are_rejected() {
    assert!(GainCurve::constant(1.0).validate(100).is_ok());
    assert!(GainCurve::constant(0.0).validate(100).is_ok());
    assert!(matches!(
        GainCurve::constant(1.5).validate(100),
        Err(ReelError::Validation(_))
    ));
    assert!(GainCurve::constant(f64::NAN).validate(100).is_err());
}
