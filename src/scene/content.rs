use crate::{
    foundation::core::{Canvas, Fps},
    scene::visual::VisualTree,
};

/// Frame context handed to scene content.
///
/// `frame` is already local to the segment being rendered; content never sees the global
/// timeline position unless it is rendered as an underlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCtx {
    /// Segment-local frame (`global - segment_start`).
    pub frame: i64,
    /// Frame rate of the reel.
    pub fps: Fps,
    /// Length of the segment in frames.
    pub duration_frames: u64,
    /// Output canvas.
    pub canvas: Canvas,
}

impl SceneCtx {
    /// Build a context.
    pub fn new(frame: i64, fps: Fps, duration_frames: u64, canvas: Canvas) -> Self {
        Self {
            frame,
            fps,
            duration_frames,
            canvas,
        }
    }

    /// Local time in seconds.
    pub fn secs(&self) -> f64 {
        self.fps.frames_to_secs(self.frame as f64)
    }

    /// Frame rate as a float.
    pub fn fps_f64(&self) -> f64 {
        self.fps.as_f64()
    }

    /// Canvas center in pixels.
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.canvas.width) / 2.0,
            f64::from(self.canvas.height) / 2.0,
        )
    }
}

/// A pure function from a local frame to a visual tree.
///
/// Implementations must be deterministic and hold no mutable state; the compositor may
/// call them for any frame, in any order, from any thread.
pub trait SceneContent: Send + Sync {
    /// Render the scene at `ctx.frame`.
    fn render(&self, ctx: &SceneCtx) -> VisualTree;
}

impl<F> SceneContent for F
where
    F: Fn(&SceneCtx) -> VisualTree + Send + Sync,
{
    fn render(&self, ctx: &SceneCtx) -> VisualTree {
        self(ctx)
    }
}
