use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn frames_before_delay_are_exactly_zero() {
    let cfg = SpringConfig::default();
    assert_eq!(spring_progress(11, fps30(), 12, &cfg), 0.0);
    assert_eq!(spring_progress(12, fps30(), 12, &cfg), 0.0);
    assert_eq!(spring_progress(-500, fps30(), 0, &cfg), 0.0);
    assert!(spring_progress(13, fps30(), 12, &cfg) > 0.0);
}

#[test]
fn converges_in_every_damping_regime() {
    let under = SpringConfig::damped(14.0, 100.0).unwrap();
    let critical = SpringConfig::damped(20.0, 100.0).unwrap();
    let over = SpringConfig::damped(40.0, 100.0).unwrap();
    assert!(under.damping_ratio() < 1.0);
    assert!((critical.damping_ratio() - 1.0).abs() < 1e-12);
    assert!(over.damping_ratio() > 1.0);

    for cfg in [under, critical, over] {
        let p = spring_progress(600, fps30(), 0, &cfg);
        assert!((p - 1.0).abs() < 1e-6, "{cfg:?} -> {p}");
        // Far past settling the value snaps to the target.
        assert_eq!(spring_progress(1_000_000, fps30(), 0, &cfg), 1.0);
    }
}

#[test]
fn underdamped_overshoots_and_overdamped_does_not() {
    let under = SpringConfig::default();
    let peak = (0..120)
        .map(|f| spring_progress(f, fps30(), 0, &under))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.05, "peak {peak}");

    let over = SpringConfig::damped(40.0, 100.0).unwrap();
    for f in 0..600 {
        assert!(spring_progress(f, fps30(), 0, &over) <= 1.0);
    }
}

#[test]
fn evaluation_is_referentially_transparent() {
    let cfg = SpringConfig::damped(16.0, 120.0).unwrap();
    let forward: Vec<f64> = (0..90).map(|f| spring_progress(f, fps30(), 5, &cfg)).collect();
    let backward: Vec<f64> = (0..90)
        .rev()
        .map(|f| spring_progress(f, fps30(), 5, &cfg))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    assert_eq!(forward, backward);
}

#[test]
fn rejects_invalid_configs() {
    assert!(matches!(
        SpringConfig::new(10.0, 0.0, 1.0),
        Err(ReelError::InvalidSpringConfig(_))
    ));
    assert!(matches!(
        SpringConfig::new(10.0, 100.0, -1.0),
        Err(ReelError::InvalidSpringConfig(_))
    ));
    assert!(matches!(
        SpringConfig::new(-1.0, 100.0, 1.0),
        Err(ReelError::InvalidSpringConfig(_))
    ));
    assert!(matches!(
        SpringConfig::new(f64::NAN, 100.0, 1.0),
        Err(ReelError::InvalidSpringConfig(_))
    ));
    assert!(SpringConfig::new(0.0, 100.0, 1.0).is_ok());
}

#[test]
fn deserialize_defaults_and_validates() {
    let cfg: SpringConfig = serde_json::from_str(r#"{"damping": 14}"#).unwrap();
    assert_eq!(cfg.damping(), 14.0);
    assert_eq!(cfg.stiffness(), 100.0);
    assert_eq!(cfg.mass(), 1.0);
    assert!(serde_json::from_str::<SpringConfig>(r#"{"stiffness": 0}"#).is_err());
}

#[test]
fn settle_frames_is_finite_for_damped_springs() {
    let cfg = SpringConfig::damped(14.0, 100.0).unwrap();
    let n = cfg.settle_frames(fps30(), SETTLE_THRESHOLD).unwrap();
    assert!(n > 0);
    for f in n as i64..n as i64 + 60 {
        assert!((spring_progress(f, fps30(), 0, &cfg) - 1.0).abs() <= SETTLE_THRESHOLD);
    }
    let undamped = SpringConfig::new(0.0, 100.0, 1.0).unwrap();
    assert_eq!(undamped.settle_frames(fps30(), SETTLE_THRESHOLD), None);
}

#[test]
fn spring_maps_range_and_clamps_overshoot() {
    let s = Spring::new(SpringConfig::default()).delay(6).range(0.6, 1.0);
    assert_eq!(s.value(0, fps30()), 0.6);
    assert_eq!(s.value(6, fps30()), 0.6);
    assert!(s.value(20, fps30()) > 1.0);

    let clamped = s.overshoot_clamping(true);
    for f in 0..120 {
        let v = clamped.value(f, fps30());
        assert!(v >= 0.6 && v <= 1.0 + 1e-12, "frame {f} -> {v}");
    }
}

#[test]
fn duration_stretches_time() {
    let cfg = SpringConfig::damped(40.0, 100.0).unwrap();
    let s = Spring::new(cfg).duration(30, fps30()).unwrap();
    assert!((s.progress(30, fps30()) - 1.0).abs() <= SETTLE_THRESHOLD + 1e-9);
    assert!(s.progress(15, fps30()) < 1.0 - SETTLE_THRESHOLD);
    assert!(Spring::new(cfg).duration(0, fps30()).is_err());
    let undamped = SpringConfig::new(0.0, 100.0, 1.0).unwrap();
    assert!(Spring::new(undamped).duration(30, fps30()).is_err());
}
