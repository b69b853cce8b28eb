use std::fmt;

use crate::{
    audio::gain::AudioCue,
    composition::model::{Timeline, TimelinePlan},
    eval::evaluator::{Evaluator, TimelineState},
    foundation::{
        core::{Canvas, Fps},
        error::{ReelError, ReelResult},
    },
    scene::{
        content::{SceneContent, SceneCtx},
        visual::VisualTree,
    },
};

/// What to do with frames outside `[0, total)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FramePolicy {
    /// Clamp into range and log at debug level.
    #[default]
    Clamp,
    /// Fail with [`ReelError::OutOfRangeFrame`].
    Reject,
}

/// Side output requested by the reel at a given frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Artifact {
    /// Still image of the frame, to be saved by the host under `filename`.
    Thumbnail {
        /// Output file name.
        filename: String,
    },
}

/// Artifact scheduled at a frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduledArtifact {
    /// Global frame.
    pub frame: u64,
    /// What to emit.
    pub artifact: Artifact,
}

/// Gain of one cue at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CueGain {
    /// Cue id.
    pub id: String,
    /// Gain, 0 when the cue is silent.
    pub gain: f64,
}

/// Everything the host needs to schedule rendering and audio mixing.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ReelPlan {
    /// Frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Segment and transition layout.
    pub timeline: TimelinePlan,
    /// Underlay-only frames after the timeline.
    pub tail_frames: u64,
    /// Timeline length plus tail.
    pub total_frames: u64,
    /// Audio cue sheet.
    pub cues: Vec<AudioCue>,
    /// Side outputs.
    pub artifacts: Vec<ScheduledArtifact>,
}

/// A complete video: timeline, persistent underlay, audio cues and artifacts.
///
/// Immutable after [`ReelBuilder::build`]; every query is a pure function of the frame.
pub struct Reel {
    timeline: Timeline,
    underlay: Option<Box<dyn SceneContent>>,
    tail_frames: u64,
    cues: Vec<AudioCue>,
    bed: Option<usize>,
    artifacts: Vec<ScheduledArtifact>,
    policy: FramePolicy,
}

impl fmt::Debug for Reel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reel")
            .field("timeline", &self.timeline)
            .field("has_underlay", &self.underlay.is_some())
            .field("tail_frames", &self.tail_frames)
            .field("cues", &self.cues)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Reel {
    /// Start building a reel around `timeline`.
    pub fn builder(timeline: Timeline) -> ReelBuilder {
        ReelBuilder {
            timeline,
            underlay: None,
            tail_frames: 0,
            cues: Vec::new(),
            bed: None,
            artifacts: Vec::new(),
            policy: FramePolicy::default(),
        }
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.timeline.fps()
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.timeline.canvas()
    }

    /// Timeline length plus tail frames.
    pub fn total_frames(&self) -> u64 {
        self.timeline.total_frames() + self.tail_frames
    }

    /// Underlying timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Out-of-range policy.
    pub fn policy(&self) -> FramePolicy {
        self.policy
    }

    /// Audio cue sheet.
    pub fn cues(&self) -> &[AudioCue] {
        &self.cues
    }

    /// Render `frame` for a host running at `fps` with `total_frames` frames.
    #[tracing::instrument(skip(self))]
    pub fn render_frame(&self, frame: i64, fps: Fps, total_frames: u64) -> ReelResult<VisualTree> {
        self.check_host(fps, total_frames)?;
        self.frame_tree(frame)
    }

    /// Render `frame` under the reel's frame policy, without host checks.
    pub fn frame_tree(&self, frame: i64) -> ReelResult<VisualTree> {
        let f = self.apply_policy(frame)?;
        let mut tree = match &self.underlay {
            Some(underlay) => {
                let ctx = SceneCtx::new(f, self.fps(), self.total_frames(), self.canvas());
                underlay.render(&ctx)
            }
            None => VisualTree::empty(),
        };
        tree.append(Evaluator::eval_frame(&self.timeline, f));
        Ok(tree)
    }

    /// Timeline state at `frame` after the frame policy.
    pub fn resolve(&self, frame: i64) -> ReelResult<TimelineState> {
        let f = self.apply_policy(frame)?;
        Ok(Evaluator::resolve(&self.timeline, f))
    }

    /// Gain of the music bed at `frame` (0 when the reel has no bed).
    #[tracing::instrument(skip(self))]
    pub fn audio_gain(&self, frame: i64, fps: Fps, total_frames: u64) -> ReelResult<f64> {
        self.check_host(fps, total_frames)?;
        let f = self.apply_policy(frame)?;
        Ok(self
            .bed
            .map_or(0.0, |i| self.cues[i].gain_at(f, self.total_frames())))
    }

    /// Gain of every cue at `frame`.
    pub fn cue_gains(&self, frame: i64) -> ReelResult<Vec<CueGain>> {
        let f = self.apply_policy(frame)?;
        let total = self.total_frames();
        Ok(self
            .cues
            .iter()
            .map(|c| CueGain {
                id: c.id.clone(),
                gain: c.gain_at(f, total),
            })
            .collect())
    }

    /// Artifacts to emit at `frame`.
    pub fn artifacts_at(&self, frame: i64) -> Vec<Artifact> {
        self.artifacts
            .iter()
            .filter(|a| a.frame as i64 == frame)
            .map(|a| a.artifact.clone())
            .collect()
    }

    /// Serializable layout for the host's render grid.
    pub fn plan(&self) -> ReelPlan {
        ReelPlan {
            fps: self.fps(),
            canvas: self.canvas(),
            timeline: self.timeline.plan(),
            tail_frames: self.tail_frames,
            total_frames: self.total_frames(),
            cues: self.cues.clone(),
            artifacts: self.artifacts.clone(),
        }
    }

    fn check_host(&self, fps: Fps, total_frames: u64) -> ReelResult<()> {
        let own = self.fps();
        if u64::from(fps.num) * u64::from(own.den) != u64::from(own.num) * u64::from(fps.den) {
            return Err(ReelError::validation(format!(
                "host fps {}/{} does not match reel fps {}/{}",
                fps.num, fps.den, own.num, own.den
            )));
        }
        if total_frames != self.total_frames() {
            return Err(ReelError::validation(format!(
                "host length {total_frames} does not match reel length {}",
                self.total_frames()
            )));
        }
        Ok(())
    }

    fn apply_policy(&self, frame: i64) -> ReelResult<i64> {
        let total = self.total_frames();
        let last = total as i64 - 1;
        if (0..=last).contains(&frame) {
            return Ok(frame);
        }
        match self.policy {
            FramePolicy::Reject => Err(ReelError::OutOfRangeFrame { frame, total }),
            FramePolicy::Clamp => {
                let clamped = frame.clamp(0, last.max(0));
                tracing::debug!(frame, clamped, total, "clamping out-of-range frame");
                Ok(clamped)
            }
        }
    }
}

/// Assembles a [`Reel`]; `build` validates the cue sheet against the final length.
pub struct ReelBuilder {
    timeline: Timeline,
    underlay: Option<Box<dyn SceneContent>>,
    tail_frames: u64,
    cues: Vec<AudioCue>,
    bed: Option<usize>,
    artifacts: Vec<ScheduledArtifact>,
    policy: FramePolicy,
}

impl ReelBuilder {
    /// Content drawn beneath every segment, driven by the global frame.
    pub fn underlay(mut self, content: impl SceneContent + 'static) -> Self {
        self.underlay = Some(Box::new(content));
        self
    }

    /// Underlay-only frames appended after the timeline.
    pub fn tail_frames(mut self, frames: u64) -> Self {
        self.tail_frames = frames;
        self
    }

    /// Add a cue.
    pub fn cue(mut self, cue: AudioCue) -> Self {
        self.cues.push(cue);
        self
    }

    /// Add the music bed reported by [`Reel::audio_gain`].
    pub fn bed(mut self, cue: AudioCue) -> Self {
        self.bed = Some(self.cues.len());
        self.cues.push(cue);
        self
    }

    /// Request a thumbnail of `frame`.
    pub fn thumbnail(mut self, frame: u64, filename: impl Into<String>) -> Self {
        self.artifacts.push(ScheduledArtifact {
            frame,
            artifact: Artifact::Thumbnail {
                filename: filename.into(),
            },
        });
        self
    }

    /// Out-of-range policy.
    pub fn policy(mut self, policy: FramePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate cues and artifacts and freeze the reel.
    pub fn build(self) -> ReelResult<Reel> {
        let total = self.timeline.total_frames() + self.tail_frames;
        let mut ids = std::collections::BTreeSet::new();
        for cue in &self.cues {
            if cue.id.trim().is_empty() {
                return Err(ReelError::validation("audio cue id must be non-empty"));
            }
            if !ids.insert(cue.id.as_str()) {
                return Err(ReelError::validation(format!(
                    "duplicate audio cue id '{}'",
                    cue.id
                )));
            }
            if cue.start_frame >= total {
                return Err(ReelError::validation(format!(
                    "audio cue '{}' starts at frame {} past the reel end ({total})",
                    cue.id, cue.start_frame
                )));
            }
            cue.gain.validate(total)?;
        }
        if let Some(a) = self.artifacts.iter().find(|a| a.frame >= total) {
            return Err(ReelError::validation(format!(
                "artifact at frame {} is past the reel end ({total})",
                a.frame
            )));
        }
        Ok(Reel {
            timeline: self.timeline,
            underlay: self.underlay,
            tail_frames: self.tail_frames,
            cues: self.cues,
            bed: self.bed,
            artifacts: self.artifacts,
            policy: self.policy,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/reel.rs"]
mod tests;
