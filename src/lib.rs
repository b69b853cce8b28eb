//! Reelkit is a deterministic, frame-indexed animation and compositing library for
//! programmatic promo videos.
//!
//! Every visual and audio property is a pure function of the frame index:
//!
//! - Build a [`Timeline`] of scene segments joined by transitions
//! - Wrap it in a [`Reel`] with an underlay, audio cues and artifacts
//! - Evaluate any frame into a [`VisualTree`], alone or in parallel batches
//!
//! The [`promo`] module ships a complete seven-scene reel built on these pieces.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Easing, interpolation, springs and counters.
pub mod animation;
/// Audio cue sheet.
pub mod audio;
/// Frame fingerprints.
pub mod compile;
/// Timeline construction.
pub mod composition;
/// Transition presentations.
pub mod effects;
/// Timeline evaluation.
pub mod eval;
pub mod promo;
/// Batch rendering.
pub mod render;
/// Scene model.
pub mod scene;
/// Reel sessions.
pub mod session;
/// Text reveal engine.
pub mod text;

pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Rgba8Premul, Transform2D, Vec2,
};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::spring::{Spring, SpringConfig};
pub use crate::composition::dsl::TimelineBuilder;
pub use crate::composition::model::{Timeline, Transition};
pub use crate::effects::transitions::{Presentation, ResolvedTiming, TransitionTiming};
pub use crate::eval::evaluator::{Evaluator, TimelineState};
pub use crate::render::pipeline::{RenderStats, RenderThreading};
pub use crate::scene::content::{SceneContent, SceneCtx};
pub use crate::scene::visual::{VisualNode, VisualTree};
pub use crate::session::reel::{Artifact, FramePolicy, Reel, ReelBuilder};
