use std::{collections::BTreeSet, fmt};

use crate::{
    effects::transitions::{Presentation, ResolvedTiming, TransitionTiming},
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    scene::content::SceneContent,
};

/// One scene on the timeline.
pub struct Segment {
    /// Unique, non-empty identifier.
    pub id: String,
    /// Declared length in frames, transition overlaps included.
    pub duration_frames: u64,
    /// Frame function rendering the scene.
    pub content: Box<dyn SceneContent>,
}

impl Segment {
    /// Build a segment.
    pub fn new(
        id: impl Into<String>,
        duration_frames: u64,
        content: impl SceneContent + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            duration_frames,
            content: Box::new(content),
        }
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("id", &self.id)
            .field("duration_frames", &self.duration_frames)
            .finish_non_exhaustive()
    }
}

/// Overlap between two adjacent segments.
///
/// Consumes the last `duration_frames` of the outgoing segment and the first
/// `duration_frames` of the incoming one.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    /// Blend semantics.
    pub presentation: Presentation,
    /// Window progress to blend factor curve.
    #[serde(default)]
    pub timing: TransitionTiming,
    /// Window length in frames.
    pub duration_frames: u64,
}

impl Transition {
    /// Transition with linear timing.
    pub fn linear(presentation: Presentation, duration_frames: u64) -> Self {
        Self {
            presentation,
            timing: TransitionTiming::Linear,
            duration_frames,
        }
    }

    /// Replace the timing curve.
    pub fn with_timing(mut self, timing: TransitionTiming) -> Self {
        self.timing = timing;
        self
    }
}

/// Immutable, validated sequence of segments with transitions strictly between neighbours.
#[derive(Debug)]
pub struct Timeline {
    fps: Fps,
    canvas: Canvas,
    segments: Vec<Segment>,
    // transitions[i] sits between segments[i] and segments[i + 1].
    transitions: Vec<Option<Transition>>,
    // Resolved against `fps`, parallel to `transitions`.
    timings: Vec<Option<ResolvedTiming>>,
    starts: Vec<u64>,
    total_frames: u64,
}

impl Timeline {
    /// Validate the layout and precompute segment start offsets.
    ///
    /// `transitions` must hold exactly `segments.len() - 1` entries.
    pub fn new(
        fps: Fps,
        canvas: Canvas,
        segments: Vec<Segment>,
        transitions: Vec<Option<Transition>>,
    ) -> ReelResult<Self> {
        validate(fps, canvas, &segments, &transitions)?;
        let timings = transitions
            .iter()
            .map(|t| t.map(|t| t.timing.resolve(fps)).transpose())
            .collect::<ReelResult<Vec<_>>>()?;

        let mut starts = Vec::with_capacity(segments.len());
        let mut cursor = 0u64;
        for (i, seg) in segments.iter().enumerate() {
            starts.push(cursor);
            let overlap = transitions
                .get(i)
                .copied()
                .flatten()
                .map_or(0, |t| t.duration_frames);
            cursor += seg.duration_frames - overlap;
        }
        // The last segment never has an outgoing transition, so `cursor` is its end.
        let total_frames = cursor;

        Ok(Self {
            fps,
            canvas,
            segments,
            transitions,
            timings,
            starts,
            total_frames,
        })
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Σ durations − Σ transitions.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Precomputed start frame of every segment.
    pub fn starts(&self) -> &[u64] {
        &self.starts
    }

    /// Start frame of the segment named `id`.
    pub fn segment_start(&self, id: &str) -> Option<u64> {
        self.segments
            .iter()
            .position(|s| s.id == id)
            .map(|i| self.starts[i])
    }

    /// Transition following segment `index`, if any.
    pub fn transition_after(&self, index: usize) -> Option<&Transition> {
        self.transitions.get(index).and_then(Option::as_ref)
    }

    /// Timing of the transition following segment `index`, resolved for the timeline's fps.
    pub fn transition_timing(&self, index: usize) -> Option<&ResolvedTiming> {
        self.timings.get(index).and_then(Option::as_ref)
    }

    /// Segment ids, transitions and total length for the host's render grid.
    pub fn plan(&self) -> TimelinePlan {
        let segments = self
            .segments
            .iter()
            .zip(&self.starts)
            .map(|(s, &start)| SegmentPlan {
                id: s.id.clone(),
                start,
                duration_frames: s.duration_frames,
            })
            .collect();
        let transitions = self
            .transitions
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.map(|t| (i, t)))
            .map(|(i, t)| TransitionPlan {
                presentation: t.presentation.id().to_owned(),
                from: self.segments[i].id.clone(),
                to: self.segments[i + 1].id.clone(),
                start: self.starts[i + 1],
                duration_frames: t.duration_frames,
            })
            .collect();
        TimelinePlan {
            segments,
            transitions,
            total_frames: self.total_frames,
        }
    }
}

fn validate(
    fps: Fps,
    canvas: Canvas,
    segments: &[Segment],
    transitions: &[Option<Transition>],
) -> ReelResult<()> {
    if fps.num == 0 || fps.den == 0 {
        return Err(ReelError::validation("fps must have num>0 and den>0"));
    }
    if canvas.width == 0 || canvas.height == 0 {
        return Err(ReelError::validation("canvas width/height must be > 0"));
    }
    if segments.is_empty() {
        return Err(ReelError::validation("timeline needs at least one segment"));
    }
    if transitions.len() != segments.len() - 1 {
        return Err(ReelError::validation(format!(
            "{} segments need exactly {} transition slots, got {}",
            segments.len(),
            segments.len() - 1,
            transitions.len()
        )));
    }

    let mut seen = BTreeSet::new();
    for seg in segments {
        if seg.id.trim().is_empty() {
            return Err(ReelError::validation("segment id must be non-empty"));
        }
        if !seen.insert(seg.id.as_str()) {
            return Err(ReelError::validation(format!(
                "duplicate segment id '{}'",
                seg.id
            )));
        }
        if seg.duration_frames == 0 {
            return Err(ReelError::validation(format!(
                "segment '{}' duration must be > 0 frames",
                seg.id
            )));
        }
    }

    for (i, tr) in transitions.iter().enumerate() {
        let Some(tr) = tr else { continue };
        let (from, to) = (&segments[i], &segments[i + 1]);
        if tr.duration_frames == 0 {
            return Err(ReelError::validation(format!(
                "transition '{}' -> '{}' duration must be > 0 frames",
                from.id, to.id
            )));
        }
        if tr.duration_frames > from.duration_frames || tr.duration_frames > to.duration_frames {
            return Err(ReelError::validation(format!(
                "transition '{}' -> '{}' ({} frames) is longer than a neighbouring segment",
                from.id, to.id, tr.duration_frames
            )));
        }
        tr.presentation.validate()?;
    }

    for (i, seg) in segments.iter().enumerate() {
        let t_in = i
            .checked_sub(1)
            .and_then(|p| transitions[p])
            .map_or(0, |t| t.duration_frames);
        let t_out = transitions
            .get(i)
            .copied()
            .flatten()
            .map_or(0, |t| t.duration_frames);
        if t_in + t_out > seg.duration_frames {
            return Err(ReelError::validation(format!(
                "segment '{}' is shorter than its incoming + outgoing transitions ({t_in} + {t_out} > {})",
                seg.id, seg.duration_frames
            )));
        }
    }

    Ok(())
}

/// Placement of one segment on the global timeline.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SegmentPlan {
    /// Segment id.
    pub id: String,
    /// Global start frame.
    pub start: u64,
    /// Declared length.
    pub duration_frames: u64,
}

/// Placement of one transition window on the global timeline.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionPlan {
    /// Presentation id (`cross_fade`, `blur_dissolve`, `none`).
    pub presentation: String,
    /// Outgoing segment id.
    pub from: String,
    /// Incoming segment id.
    pub to: String,
    /// First frame of the window (the incoming segment's start).
    pub start: u64,
    /// Window length.
    pub duration_frames: u64,
}

/// Serializable layout of a [`Timeline`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimelinePlan {
    /// Segments in order.
    pub segments: Vec<SegmentPlan>,
    /// Transition windows in order.
    pub transitions: Vec<TransitionPlan>,
    /// Timeline length in frames.
    pub total_frames: u64,
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
