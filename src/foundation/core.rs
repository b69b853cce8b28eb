use crate::foundation::error::{ReelError, ReelResult};

pub use kurbo::{Affine, Vec2};

/// Absolute or segment-local frame position.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame span `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> ReelResult<Self> {
        if start.0 > end.0 {
            return Err(ReelError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when the range covers no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// `true` when `f` lies in `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Clamp a frame into the range (inclusive of the last frame).
    pub fn clamp(self, f: FrameIndex) -> FrameIndex {
        if self.is_empty() {
            return self.start;
        }
        let max_inclusive = self.end.0.saturating_sub(1);
        FrameIndex(f.0.clamp(self.start.0, max_inclusive))
    }
}

/// Rational frame rate (`num / den` frames per second).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, always `> 0`.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Build a frame rate, rejecting zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> ReelResult<Self> {
        if den == 0 {
            return Err(ReelError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ReelError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Length of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a (possibly fractional or negative) frame count to seconds.
    pub fn frames_to_secs(self, frames: f64) -> f64 {
        frames * self.frame_duration_secs()
    }

    /// Convert seconds to a fractional frame count.
    pub fn secs_to_frames(self, secs: f64) -> f64 {
        secs * f64::from(self.num) / f64::from(self.den)
    }

    /// Convert seconds to the nearest whole frame (never negative).
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        let f = self.secs_to_frames(secs);
        if !f.is_finite() {
            return 0;
        }
        f.round().max(0.0) as u64
    }
}

/// Output canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

/// Node transform relative to the parent, in canvas pixels.
///
/// Components are independent: the matrix is always `T · R · S` about the node origin, so
/// builder calls can be chained in any order.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Transform2D {
    /// Offset from the parent origin.
    pub translate: Vec2,
    /// Rotation in radians, clockwise in screen space.
    pub rotation_rad: f64,
    /// Per-axis scale.
    pub scale: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// No offset, rotation or scale.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        rotation_rad: 0.0,
        scale: Vec2::new(1.0, 1.0),
    };

    /// Pure translation.
    pub fn translation(x: f64, y: f64) -> Self {
        Self {
            translate: Vec2::new(x, y),
            ..Self::IDENTITY
        }
    }

    /// `true` when the transform leaves points where they are.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Matrix form for the host.
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate)
            * Affine::rotate(self.rotation_rad)
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
