use crate::{
    animation::{ease::Ease, interpolate::lerp},
    foundation::core::Fps,
    foundation::error::{ReelError, ReelResult},
};

/// Numeric tween from `from` to `to` over `duration_secs`, starting after `delay_secs`.
///
/// Equivalent to `interpolate(frame, [delay, delay + duration], [0, 1], clamp)` followed by
/// `ease` and a linear map onto `[from, to]`. A zero duration jumps to `to` once the delay
/// has passed.
pub fn counter_value(
    frame: i64,
    fps: Fps,
    from: f64,
    to: f64,
    duration_secs: f64,
    delay_secs: f64,
    ease: Ease,
) -> f64 {
    let delay_f = fps.secs_to_frames(delay_secs.max(0.0));
    let duration_f = fps.secs_to_frames(duration_secs.max(0.0));
    let f = frame as f64;
    if duration_f <= 0.0 || !duration_f.is_finite() {
        return if f >= delay_f { to } else { from };
    }
    let t = ((f - delay_f) / duration_f).clamp(0.0, 1.0);
    lerp(from, to, ease.apply(t))
}

/// Round a counter value to an integer and wrap it with `prefix` / `suffix`.
pub fn format_counter(value: f64, prefix: &str, suffix: &str) -> String {
    let n = if value.is_finite() {
        value.round() as i64
    } else {
        0
    };
    format!("{prefix}{n}{suffix}")
}

/// A validated counter with its presentation affixes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Counter {
    /// Start value.
    pub from: f64,
    /// End value.
    pub to: f64,
    /// Tween length in seconds.
    pub duration_secs: f64,
    /// Delay before the tween starts, in seconds.
    #[serde(default)]
    pub delay_secs: f64,
    /// Progress curve.
    #[serde(default)]
    pub ease: Ease,
    /// Text before the number (e.g. `+`).
    #[serde(default)]
    pub prefix: String,
    /// Text after the number (e.g. `%`).
    #[serde(default)]
    pub suffix: String,
}

impl Counter {
    /// Counter from `from` to `to` over `duration_secs`.
    pub fn new(from: f64, to: f64, duration_secs: f64) -> ReelResult<Self> {
        let c = Self {
            from,
            to,
            duration_secs,
            delay_secs: 0.0,
            ease: Ease::Linear,
            prefix: String::new(),
            suffix: String::new(),
        };
        c.validate()?;
        Ok(c)
    }

    /// Start after `secs`.
    pub fn delay(mut self, secs: f64) -> ReelResult<Self> {
        self.delay_secs = secs;
        self.validate()?;
        Ok(self)
    }

    /// Replace the easing curve.
    pub fn eased(mut self, ease: Ease) -> ReelResult<Self> {
        self.ease = ease;
        self.validate()?;
        Ok(self)
    }

    /// Set the label prefix and suffix.
    pub fn affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    /// Check values are finite and times non-negative.
    pub fn validate(&self) -> ReelResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ReelError::validation("counter endpoints must be finite"));
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(ReelError::validation(
                "counter duration must be finite and >= 0",
            ));
        }
        if !self.delay_secs.is_finite() || self.delay_secs < 0.0 {
            return Err(ReelError::validation("counter delay must be finite and >= 0"));
        }
        self.ease.validate()
    }

    /// Continuous value at `frame`.
    pub fn value(&self, frame: i64, fps: Fps) -> f64 {
        counter_value(
            frame,
            fps,
            self.from,
            self.to,
            self.duration_secs,
            self.delay_secs,
            self.ease,
        )
    }

    /// Formatted label at `frame`.
    pub fn label(&self, frame: i64, fps: Fps) -> String {
        format_counter(self.value(frame, fps), &self.prefix, &self.suffix)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/counter.rs"]
mod tests;
