use crate::{
    animation::interpolate::lerp,
    foundation::core::Fps,
    foundation::error::{ReelError, ReelResult},
};

/// Decay envelope below which a spring reports exactly `1.0`.
pub const SETTLE_EPSILON: f64 = 1e-9;

/// Distance from the target used when measuring a spring's natural duration.
pub const SETTLE_THRESHOLD: f64 = 0.005;

/// Longest span (in seconds) scanned by [`SpringConfig::settle_frames`].
const MAX_SETTLE_SECS: f64 = 600.0;

/// Physical parameters of a damped oscillator driven from rest (0) toward 1.
///
/// Built through [`SpringConfig::new`] (or deserialized, which runs the same checks), so
/// sampling never has to handle an invalid configuration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SpringConfigDef")]
pub struct SpringConfig {
    damping: f64,
    stiffness: f64,
    mass: f64,
}

#[derive(serde::Deserialize)]
struct SpringConfigDef {
    #[serde(default = "default_damping")]
    damping: f64,
    #[serde(default = "default_stiffness")]
    stiffness: f64,
    #[serde(default = "default_mass")]
    mass: f64,
}

fn default_damping() -> f64 {
    10.0
}

fn default_stiffness() -> f64 {
    100.0
}

fn default_mass() -> f64 {
    1.0
}

impl TryFrom<SpringConfigDef> for SpringConfig {
    type Error = ReelError;

    fn try_from(def: SpringConfigDef) -> Result<Self, Self::Error> {
        Self::new(def.damping, def.stiffness, def.mass)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            stiffness: default_stiffness(),
            mass: default_mass(),
        }
    }
}

impl SpringConfig {
    /// Validate and build a spring configuration.
    pub fn new(damping: f64, stiffness: f64, mass: f64) -> ReelResult<Self> {
        if !stiffness.is_finite() || stiffness <= 0.0 {
            return Err(ReelError::invalid_spring(format!(
                "stiffness must be finite and > 0, got {stiffness}"
            )));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(ReelError::invalid_spring(format!(
                "mass must be finite and > 0, got {mass}"
            )));
        }
        if !damping.is_finite() || damping < 0.0 {
            return Err(ReelError::invalid_spring(format!(
                "damping must be finite and >= 0, got {damping}"
            )));
        }
        Ok(Self {
            damping,
            stiffness,
            mass,
        })
    }

    /// Unit-mass preset from literal constants.
    ///
    /// Skips validation; `damping` must be `>= 0` and `stiffness` `> 0`.
    pub(crate) const fn preset(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
        }
    }

    /// Unit-mass shorthand.
    pub fn damped(damping: f64, stiffness: f64) -> ReelResult<Self> {
        Self::new(damping, stiffness, 1.0)
    }

    /// Damping coefficient.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Spring constant.
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    /// Oscillating mass.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Natural angular frequency `ω₀ = sqrt(k / m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `ζ = c / (2 sqrt(k m))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Step response at `t` seconds after release.
    pub fn progress_at_secs(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let (value, envelope) = self.step_response(t);
        if envelope < SETTLE_EPSILON || !value.is_finite() {
            return 1.0;
        }
        value
    }

    /// Frames after release until the response stays within `threshold` of 1.
    ///
    /// Returns `None` for springs that do not settle within ten minutes (e.g. zero
    /// damping).
    pub fn settle_frames(&self, fps: Fps, threshold: f64) -> Option<u64> {
        let threshold = threshold.abs().max(SETTLE_EPSILON);
        let max_frames = fps.secs_to_frames(MAX_SETTLE_SECS).ceil() as u64;
        let mut last_outside = 0u64;
        for frame in 0..=max_frames {
            let t = fps.frames_to_secs(frame as f64);
            let (value, envelope) = self.step_response(t);
            if (1.0 - value).abs() > threshold {
                last_outside = frame + 1;
            }
            if envelope <= threshold {
                return Some(last_outside);
            }
        }
        None
    }

    /// Returns the response value and an upper bound of `|1 - value|` for all later times.
    fn step_response(&self, t: f64) -> (f64, f64) {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-6 {
            // Critically damped.
            let e = (-w0 * t).exp() * (1.0 + w0 * t);
            (1.0 - e, e)
        } else if zeta < 1.0 {
            let root = (1.0 - zeta * zeta).sqrt();
            let wd = w0 * root;
            let e = (-zeta * w0 * t).exp();
            let k = zeta / root;
            let value = 1.0 - e * ((wd * t).cos() + k * (wd * t).sin());
            (value, e * (1.0 + k * k).sqrt())
        } else {
            // Overdamped: two real roots, the slower one dominates the tail.
            let z2 = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - z2);
            let r2 = -w0 * (zeta + z2);
            let c2 = (zeta + z2) / (2.0 * z2);
            let c1 = (zeta - z2) / (2.0 * z2);
            let slow = c2 * (r1 * t).exp();
            (1.0 - (slow - c1 * (r2 * t).exp()), slow)
        }
    }
}

/// Closed-form spring progress for an absolute frame.
///
/// Frames at or before `delay_frames` yield exactly `0.0`. Any integer frame is accepted.
pub fn spring_progress(frame: i64, fps: Fps, delay_frames: i64, config: &SpringConfig) -> f64 {
    let elapsed = frame.saturating_sub(delay_frames);
    if elapsed <= 0 {
        return 0.0;
    }
    config.progress_at_secs(fps.frames_to_secs(elapsed as f64))
}

/// A configured spring animation: delay, output range and optional fixed duration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Spring {
    config: SpringConfig,
    delay_frames: i64,
    from: f64,
    to: f64,
    overshoot_clamping: bool,
    time_scale: f64,
}

impl Spring {
    /// A spring from 0 to 1 starting at frame 0.
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            delay_frames: 0,
            from: 0.0,
            to: 1.0,
            overshoot_clamping: false,
            time_scale: 1.0,
        }
    }

    /// Start the spring `frames` later.
    pub fn delay(mut self, frames: i64) -> Self {
        self.delay_frames = frames;
        self
    }

    /// Map progress onto `[from, to]`.
    pub fn range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Never report progress above 1.
    pub fn overshoot_clamping(mut self, on: bool) -> Self {
        self.overshoot_clamping = on;
        self
    }

    /// Stretch time so the spring settles after exactly `frames` frames.
    pub fn duration(mut self, frames: u64, fps: Fps) -> ReelResult<Self> {
        if frames == 0 {
            return Err(ReelError::invalid_spring("spring duration must be > 0 frames"));
        }
        let natural = self
            .config
            .settle_frames(fps, SETTLE_THRESHOLD)
            .ok_or_else(|| {
                ReelError::invalid_spring("spring never settles; cannot stretch to a duration")
            })?;
        self.time_scale = natural.max(1) as f64 / frames as f64;
        Ok(self)
    }

    /// Underlying physical configuration.
    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Delay in frames.
    pub fn delay_frames(&self) -> i64 {
        self.delay_frames
    }

    /// Normalized progress at `frame` (may overshoot unless clamped).
    pub fn progress(&self, frame: i64, fps: Fps) -> f64 {
        let elapsed = frame.saturating_sub(self.delay_frames);
        if elapsed <= 0 {
            return 0.0;
        }
        let scaled = elapsed as f64 * self.time_scale;
        let p = self.config.progress_at_secs(fps.frames_to_secs(scaled));
        if self.overshoot_clamping {
            p.clamp(0.0, 1.0)
        } else {
            p
        }
    }

    /// Progress mapped onto `[from, to]`.
    pub fn value(&self, frame: i64, fps: Fps) -> f64 {
        lerp(self.from, self.to, self.progress(frame, fps))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
