use crate::foundation::error::{ReelError, ReelResult};

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out.
    InOutQuart,
    /// Material "standard" curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
    Smooth,
    /// CSS-style cubic bezier with control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier {
        /// First control point x, expected in `[0, 1]`.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, expected in `[0, 1]`.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Ease {
    /// Parse an easing selector by name.
    ///
    /// Accepts the snake-case variant names plus the GSAP-style aliases used by motion
    /// designers (`power1.out`, `power2.out`, `power3.out`, ...).
    pub fn parse(name: &str) -> ReelResult<Self> {
        let name = name.trim().to_ascii_lowercase();
        Ok(match name.as_str() {
            "linear" | "none" => Self::Linear,
            "in_quad" | "power1.in" => Self::InQuad,
            "out_quad" | "power1.out" => Self::OutQuad,
            "in_out_quad" | "power1.inout" => Self::InOutQuad,
            "in_cubic" | "power2.in" => Self::InCubic,
            "out_cubic" | "power2.out" => Self::OutCubic,
            "in_out_cubic" | "power2.inout" => Self::InOutCubic,
            "in_quart" | "power3.in" => Self::InQuart,
            "out_quart" | "power3.out" => Self::OutQuart,
            "in_out_quart" | "power3.inout" => Self::InOutQuart,
            "smooth" => Self::Smooth,
            other => {
                return Err(ReelError::validation(format!("unknown ease '{other}'")));
            }
        })
    }

    /// Apply this easing function to normalized progress `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        self.apply_unclamped(t.clamp(0.0, 1.0))
    }

    /// Apply the curve without clamping `t`.
    ///
    /// Polynomial curves are evaluated as-is outside `[0, 1]`; bezier curves continue
    /// with their endpoint tangents.
    pub fn apply_unclamped(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
            Self::Smooth => cubic_bezier_ease(t, 0.4, 0.0, 0.2, 1.0),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }

    /// Check curve parameters (bezier x control points must lie in `[0, 1]`).
    pub fn validate(self) -> ReelResult<()> {
        if let Self::CubicBezier { x1, y1, x2, y2 } = self {
            if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                return Err(ReelError::validation(
                    "cubic bezier control points must be finite",
                ));
            }
            if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(ReelError::validation(
                    "cubic bezier x control points must be in [0, 1]",
                ));
            }
        }
        Ok(())
    }
}

fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x < 0.0 {
        let slope = if x1 > 0.0 {
            y1 / x1
        } else if x2 > 0.0 {
            y2 / x2
        } else {
            0.0
        };
        return x * slope;
    }
    if x > 1.0 {
        let slope = if x2 < 1.0 {
            (y2 - 1.0) / (x2 - 1.0)
        } else if x1 < 1.0 {
            (y1 - 1.0) / (x1 - 1.0)
        } else {
            0.0
        };
        return 1.0 + (x - 1.0) * slope;
    }
    if x == 0.0 || x == 1.0 {
        return x;
    }

    // Given x in [0,1], solve u such that bx(u)=x, then return by(u).
    fn sample_curve(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * t * a1 + 3.0 * omt * t * t * a2 + t * t * t
    }
    fn sample_curve_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * a1 + 6.0 * omt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    // Newton-Raphson, with a bisection fallback when the slope flattens out.
    let mut t = x;
    for _ in 0..8 {
        let x_t = sample_curve(x1, x2, t) - x;
        if x_t.abs() < 1e-9 {
            return sample_curve(y1, y2, t);
        }
        let d = sample_curve_derivative(x1, x2, t);
        if d.abs() < 1e-7 {
            break;
        }
        t = (t - x_t / d).clamp(0.0, 1.0);
    }

    let mut lo = 0.0;
    let mut hi = 1.0;
    t = x;
    for _ in 0..40 {
        let x_t = sample_curve(x1, x2, t);
        if (x_t - x).abs() < 1e-9 {
            break;
        }
        if x_t < x {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }

    sample_curve(y1, y2, t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
