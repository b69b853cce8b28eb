use crate::{
    animation::{
        ease::Ease,
        interpolate::lerp,
        spring::{SETTLE_THRESHOLD, SpringConfig},
    },
    foundation::{
        core::Fps,
        error::{ReelError, ReelResult},
    },
    scene::visual::VisualTree,
};

/// Peak blur of [`Presentation::BlurDissolve`] when none is configured.
pub const DEFAULT_DISSOLVE_BLUR_PX: f64 = 20.0;

/// How the outgoing and incoming scenes are combined inside a transition window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Presentation {
    /// Opacity cross-fade.
    CrossFade,
    /// Cross-fade with a blur radius that peaks halfway through.
    BlurDissolve {
        /// Blur radius at `b = 0.5`.
        #[serde(default = "default_dissolve_blur")]
        max_blur_px: f64,
    },
    /// Hard overlap: both layers unmodified, incoming on top.
    None,
}

fn default_dissolve_blur() -> f64 {
    DEFAULT_DISSOLVE_BLUR_PX
}

/// Opacity and blur applied to one side of a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerState {
    /// Opacity multiplier.
    pub opacity: f64,
    /// Added blur radius in pixels.
    pub blur_px: f64,
}

impl Presentation {
    /// Parse a presentation kind (`cross_fade`, `blur_dissolve`, `none`; hyphens accepted).
    pub fn parse(kind: &str) -> ReelResult<Self> {
        let kind = kind.trim().to_ascii_lowercase().replace('-', "_");
        if kind.is_empty() {
            return Err(ReelError::validation("transition kind must be non-empty"));
        }
        match kind.as_str() {
            "cross_fade" | "crossfade" | "fade" => Ok(Self::CrossFade),
            "blur_dissolve" => Ok(Self::BlurDissolve {
                max_blur_px: DEFAULT_DISSOLVE_BLUR_PX,
            }),
            "none" => Ok(Self::None),
            _ => Err(ReelError::validation(format!(
                "unknown transition kind '{kind}'"
            ))),
        }
    }

    /// Stable identifier used in plans.
    pub fn id(&self) -> &'static str {
        match self {
            Self::CrossFade => "cross_fade",
            Self::BlurDissolve { .. } => "blur_dissolve",
            Self::None => "none",
        }
    }

    /// Reject non-finite or negative blur.
    pub fn validate(&self) -> ReelResult<()> {
        match *self {
            Self::BlurDissolve { max_blur_px } if !max_blur_px.is_finite() || max_blur_px < 0.0 => {
                Err(ReelError::validation(
                    "blur_dissolve.max_blur_px must be finite and >= 0",
                ))
            }
            _ => Ok(()),
        }
    }

    /// Layer states `(outgoing, incoming)` at blend factor `b`.
    pub fn layer_states(&self, b: f64) -> (LayerState, LayerState) {
        let b = b.clamp(0.0, 1.0);
        match *self {
            Self::CrossFade => (
                LayerState {
                    opacity: 1.0 - b,
                    blur_px: 0.0,
                },
                LayerState {
                    opacity: b,
                    blur_px: 0.0,
                },
            ),
            Self::BlurDissolve { max_blur_px } => {
                // Tent over [0, 0.5, 1] -> [0, max, 0].
                let blur = if b <= 0.5 {
                    lerp(0.0, max_blur_px, b / 0.5)
                } else {
                    lerp(max_blur_px, 0.0, (b - 0.5) / 0.5)
                };
                (
                    LayerState {
                        opacity: 1.0 - b,
                        blur_px: blur,
                    },
                    LayerState {
                        opacity: b,
                        blur_px: blur,
                    },
                )
            }
            Self::None => {
                let full = LayerState {
                    opacity: 1.0,
                    blur_px: 0.0,
                };
                (full, full)
            }
        }
    }

    /// Combine both trees into one, outgoing below incoming.
    pub fn blend(&self, outgoing: VisualTree, incoming: VisualTree, b: f64) -> VisualTree {
        let (out_state, in_state) = self.layer_states(b);
        let mut tree = apply(outgoing, out_state);
        tree.append(apply(incoming, in_state));
        tree
    }
}

fn apply(tree: VisualTree, state: LayerState) -> VisualTree {
    let tree = if state.opacity == 1.0 {
        tree
    } else {
        tree.with_opacity(state.opacity)
    };
    if state.blur_px > 0.0 {
        tree.blurred(state.blur_px)
    } else {
        tree
    }
}

/// Curve mapping linear window progress to the blend factor.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionTiming {
    /// `b = t`.
    #[default]
    Linear,
    /// `b = ease(t)`.
    Eased {
        /// Curve applied to window progress.
        ease: Ease,
    },
    /// Spring progress, time-stretched to settle at the end of the window.
    Spring {
        /// Spring driving the blend.
        config: SpringConfig,
    },
}

impl TransitionTiming {
    /// Reject curves that cannot be evaluated (invalid bezier, undamped spring).
    pub fn validate(&self, fps: Fps) -> ReelResult<()> {
        self.resolve(fps).map(|_| ())
    }

    /// Validate for `fps` and measure what per-frame evaluation needs.
    pub fn resolve(self, fps: Fps) -> ReelResult<ResolvedTiming> {
        let natural_frames = match self {
            Self::Linear => 0,
            Self::Eased { ease } => {
                ease.validate()?;
                0
            }
            Self::Spring { config } => config
                .settle_frames(fps, SETTLE_THRESHOLD)
                .ok_or_else(|| ReelError::invalid_spring("transition spring never settles"))?,
        };
        Ok(ResolvedTiming {
            timing: self,
            fps,
            natural_frames,
        })
    }
}

/// A [`TransitionTiming`] bound to a frame rate.
///
/// Spring timing needs the spring's natural settle length to stretch it over the window;
/// it is measured once here rather than on every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTiming {
    timing: TransitionTiming,
    fps: Fps,
    // Frames the spring takes to settle on its own; 0 for non-spring timings.
    natural_frames: u64,
}

impl ResolvedTiming {
    /// Underlying curve.
    pub fn timing(&self) -> TransitionTiming {
        self.timing
    }

    /// Natural settle length of a spring timing in frames, 0 otherwise.
    pub fn natural_frames(&self) -> u64 {
        self.natural_frames
    }

    /// Blend factor for linear window progress `t`, always in `[0, 1]`.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self.timing {
            TransitionTiming::Linear => t,
            TransitionTiming::Eased { ease } => ease.apply(t),
            TransitionTiming::Spring { config } => {
                if t >= 1.0 {
                    return 1.0;
                }
                if self.natural_frames == 0 {
                    return t;
                }
                let secs = self.fps.frames_to_secs(t * self.natural_frames as f64);
                config.progress_at_secs(secs).clamp(0.0, 1.0)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
