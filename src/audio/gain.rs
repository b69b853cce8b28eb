use crate::foundation::error::{ReelError, ReelResult};

/// Absolute frame position, counted from the start or back from the end of the reel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameAnchor {
    /// Frame `k`.
    FromStart(u64),
    /// Frame `total - k`.
    FromEnd(u64),
}

impl FrameAnchor {
    /// Absolute frame for a reel of `total` frames (may be negative for `FromEnd`).
    pub fn resolve(self, total: u64) -> i64 {
        match self {
            Self::FromStart(k) => k as i64,
            Self::FromEnd(k) => total as i64 - k as i64,
        }
    }
}

/// Ramp between two anchored frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FadeWindow {
    /// Ramp start.
    pub start: FrameAnchor,
    /// Ramp end.
    pub end: FrameAnchor,
}

impl FadeWindow {
    /// Window over `[start, end]` frames from the beginning.
    pub fn from_start(start: u64, end: u64) -> Self {
        Self {
            start: FrameAnchor::FromStart(start),
            end: FrameAnchor::FromStart(end),
        }
    }

    /// Window over `[total - start_back, total - end_back]`.
    pub fn from_end(start_back: u64, end_back: u64) -> Self {
        Self {
            start: FrameAnchor::FromEnd(start_back),
            end: FrameAnchor::FromEnd(end_back),
        }
    }

    /// Ramp from 0 (at or before `start`) to 1 (at or after `end`).
    fn ramp(&self, frame: i64, total: u64) -> f64 {
        let (s, e) = (self.start.resolve(total), self.end.resolve(total));
        if e <= s {
            return if frame >= e { 1.0 } else { 0.0 };
        }
        ((frame - s) as f64 / (e - s) as f64).clamp(0.0, 1.0)
    }
}

/// Gain as a pure function of the global frame: `level · fade_in · fade_out`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GainCurve {
    /// Peak gain in `[0, 1]`.
    pub level: f64,
    /// Ramp up, if any.
    #[serde(default)]
    pub fade_in: Option<FadeWindow>,
    /// Ramp down, if any.
    #[serde(default)]
    pub fade_out: Option<FadeWindow>,
}

impl GainCurve {
    /// Flat gain.
    pub fn constant(level: f64) -> Self {
        Self {
            level,
            fade_in: None,
            fade_out: None,
        }
    }

    /// Add a fade-in ramp.
    pub fn with_fade_in(mut self, window: FadeWindow) -> Self {
        self.fade_in = Some(window);
        self
    }

    /// Add a fade-out ramp.
    pub fn with_fade_out(mut self, window: FadeWindow) -> Self {
        self.fade_out = Some(window);
        self
    }

    /// Check the level and that both windows are ordered for a reel of `total` frames.
    pub fn validate(&self, total: u64) -> ReelResult<()> {
        if !(0.0..=1.0).contains(&self.level) {
            return Err(ReelError::validation(format!(
                "gain level must be in [0, 1], got {}",
                self.level
            )));
        }
        for (name, w) in [("fade_in", self.fade_in), ("fade_out", self.fade_out)] {
            if let Some(w) = w {
                let (s, e) = (w.start.resolve(total), w.end.resolve(total));
                if s >= e {
                    return Err(ReelError::validation(format!(
                        "{name} window must have start < end (got {s}..{e} for {total} frames)"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Gain at `frame` for a reel of `total` frames.
    pub fn gain(&self, frame: i64, total: u64) -> f64 {
        let fade_in = self.fade_in.map_or(1.0, |w| w.ramp(frame, total));
        let fade_out = self.fade_out.map_or(1.0, |w| 1.0 - w.ramp(frame, total));
        self.level * fade_in * fade_out
    }
}

/// One audio source placed on the reel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioCue {
    /// Identifier (`music`, `whoosh`, ...).
    pub id: String,
    /// Host-resolved source (URL or path).
    pub source: String,
    /// Global frame at which playback starts.
    pub start_frame: u64,
    /// Gain over the global frame.
    pub gain: GainCurve,
    /// Restart the source when it ends.
    #[serde(default)]
    pub looped: bool,
    /// Playback length, when known; silent afterwards unless looped.
    #[serde(default)]
    pub duration_frames: Option<u64>,
}

impl AudioCue {
    /// Cue with flat gain.
    pub fn new(id: impl Into<String>, source: impl Into<String>, start_frame: u64, level: f64) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            start_frame,
            gain: GainCurve::constant(level),
            looped: false,
            duration_frames: None,
        }
    }

    /// `true` when the cue is audible at `frame`.
    pub fn is_active(&self, frame: i64) -> bool {
        if frame < self.start_frame as i64 {
            return false;
        }
        match self.duration_frames {
            Some(d) if !self.looped => frame < (self.start_frame + d) as i64,
            _ => true,
        }
    }

    /// Gain at `frame`, 0 when inactive.
    pub fn gain_at(&self, frame: i64, total: u64) -> f64 {
        if self.is_active(frame) {
            self.gain.gain(frame, total)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/gain.rs"]
mod tests;
