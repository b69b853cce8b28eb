use crate::{
    composition::model::{Segment, Timeline, Transition},
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    scene::content::SceneContent,
};

/// Fluent construction of a [`Timeline`]: segments and transitions in playback order.
pub struct TimelineBuilder {
    fps: Fps,
    canvas: Canvas,
    segments: Vec<Segment>,
    transitions: Vec<Option<Transition>>,
    pending: Option<Transition>,
}

impl TimelineBuilder {
    /// Empty builder.
    pub fn new(fps: Fps, canvas: Canvas) -> Self {
        Self {
            fps,
            canvas,
            segments: Vec::new(),
            transitions: Vec::new(),
            pending: None,
        }
    }

    /// Append a segment, consuming any pending transition.
    pub fn segment(
        mut self,
        id: impl Into<String>,
        duration_frames: u64,
        content: impl SceneContent + 'static,
    ) -> Self {
        if !self.segments.is_empty() {
            self.transitions.push(self.pending.take());
        }
        self.segments.push(Segment::new(id, duration_frames, content));
        self
    }

    /// Place a transition between the last segment and the next one.
    pub fn transition(mut self, transition: Transition) -> ReelResult<Self> {
        if self.segments.is_empty() {
            return Err(ReelError::validation("transition must follow a segment"));
        }
        if self.pending.is_some() {
            return Err(ReelError::validation(
                "two transitions in a row; transitions only go between segments",
            ));
        }
        self.pending = Some(transition);
        Ok(self)
    }

    /// Validate and freeze the timeline.
    pub fn build(self) -> ReelResult<Timeline> {
        if self.pending.is_some() {
            return Err(ReelError::validation(
                "trailing transition has no incoming segment",
            ));
        }
        Timeline::new(self.fps, self.canvas, self.segments, self.transitions)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
