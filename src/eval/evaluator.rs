use crate::{
    composition::model::Timeline,
    scene::{content::SceneCtx, visual::VisualTree},
};

/// Where a global frame falls on a [`Timeline`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TimelineState {
    /// Negative frame.
    BeforeStart,
    /// Exactly one segment is visible.
    InSegment {
        /// Segment index.
        segment: usize,
        /// `frame - segment_start`.
        local_frame: u64,
    },
    /// Two segments overlap inside a transition window.
    InTransition {
        /// Outgoing segment index.
        from: usize,
        /// Incoming segment index.
        to: usize,
        /// Local frame of the outgoing segment.
        local_from: u64,
        /// Local frame of the incoming segment.
        local_to: u64,
        /// Blend factor in `[0, 1]` after timing.
        progress: f64,
    },
    /// Frame at or past the timeline length.
    AfterEnd,
}

/// Stateless resolver from a global frame to visible segments and their blend.
pub struct Evaluator;

impl Evaluator {
    /// Resolve `frame` against the precomputed segment offsets.
    pub fn resolve(timeline: &Timeline, frame: i64) -> TimelineState {
        if frame < 0 {
            return TimelineState::BeforeStart;
        }
        let f = frame as u64;
        if f >= timeline.total_frames() {
            return TimelineState::AfterEnd;
        }

        let starts = timeline.starts();
        // starts[0] == 0, so at least one start is <= f.
        let idx = starts.partition_point(|&s| s <= f) - 1;

        let incoming = idx
            .checked_sub(1)
            .and_then(|prev| timeline.transition_after(prev));
        if let Some(tr) = incoming {
            let window_start = starts[idx];
            if f < window_start + tr.duration_frames {
                let t = (f - window_start) as f64 / tr.duration_frames as f64;
                let progress = timeline
                    .transition_timing(idx - 1)
                    .map_or(t, |timing| timing.apply(t));
                return TimelineState::InTransition {
                    from: idx - 1,
                    to: idx,
                    local_from: f - starts[idx - 1],
                    local_to: f - window_start,
                    progress,
                };
            }
        }

        TimelineState::InSegment {
            segment: idx,
            local_frame: f - starts[idx],
        }
    }

    /// Render `frame`; frames outside the timeline render an empty tree.
    #[tracing::instrument(skip(timeline))]
    pub fn eval_frame(timeline: &Timeline, frame: i64) -> VisualTree {
        match Self::resolve(timeline, frame) {
            TimelineState::BeforeStart | TimelineState::AfterEnd => VisualTree::empty(),
            TimelineState::InSegment {
                segment,
                local_frame,
            } => render_segment(timeline, segment, local_frame),
            TimelineState::InTransition {
                from,
                to,
                local_from,
                local_to,
                progress,
            } => {
                let outgoing = render_segment(timeline, from, local_from);
                let incoming = render_segment(timeline, to, local_to);
                let tr = timeline.transition_after(from);
                match tr {
                    Some(tr) => tr.presentation.blend(outgoing, incoming, progress),
                    None => incoming,
                }
            }
        }
    }
}

fn render_segment(timeline: &Timeline, index: usize, local_frame: u64) -> VisualTree {
    let seg = &timeline.segments()[index];
    let ctx = SceneCtx::new(
        local_frame as i64,
        timeline.fps(),
        seg.duration_frames,
        timeline.canvas(),
    );
    seg.content.render(&ctx)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
