use crate::{
    animation::ease::Ease,
    foundation::error::{ReelError, ReelResult},
};

/// Behavior of [`interpolate`] outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the boundary output value.
    Clamp,
    /// Continue the slope of the boundary segment.
    #[default]
    Extend,
    /// Return the input unchanged.
    Identity,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Behavior left of the first breakpoint.
    #[serde(default)]
    pub extrapolate_left: Extrapolate,
    /// Behavior right of the last breakpoint.
    #[serde(default)]
    pub extrapolate_right: Extrapolate,
    /// Curve applied inside every segment.
    #[serde(default)]
    pub ease: Ease,
}

impl InterpolateOpts {
    /// Clamp on both sides, linear segments.
    pub fn clamp() -> Self {
        Self {
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
            ease: Ease::Linear,
        }
    }

    /// Extend on both sides, linear segments.
    pub fn extend() -> Self {
        Self::default()
    }

    /// Replace the segment easing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Map `x` piecewise through `input_range -> output_range`.
///
/// `input_range` must be strictly increasing with at least two breakpoints and the same
/// length as `output_range`; otherwise [`ReelError::InvalidRange`] is returned.
pub fn interpolate(
    x: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> ReelResult<f64> {
    validate_ranges(input_range, output_range)?;
    opts.ease.validate()?;
    Ok(sample_checked(x, input_range, output_range, opts))
}

/// Validate a pair of breakpoint ranges.
pub fn validate_ranges(input_range: &[f64], output_range: &[f64]) -> ReelResult<()> {
    if input_range.len() < 2 {
        return Err(ReelError::invalid_range(format!(
            "input range needs at least 2 breakpoints, got {}",
            input_range.len()
        )));
    }
    if input_range.len() != output_range.len() {
        return Err(ReelError::invalid_range(format!(
            "input range has {} breakpoints but output range has {}",
            input_range.len(),
            output_range.len()
        )));
    }
    if !input_range.iter().chain(output_range).all(|v| v.is_finite()) {
        return Err(ReelError::invalid_range("breakpoints must be finite"));
    }
    if let Some(w) = input_range.windows(2).find(|w| w[0] >= w[1]) {
        return Err(ReelError::invalid_range(format!(
            "input range must be strictly increasing ({} >= {})",
            w[0], w[1]
        )));
    }
    Ok(())
}

fn sample_checked(x: f64, input: &[f64], output: &[f64], opts: InterpolateOpts) -> f64 {
    let last = input.len() - 1;
    // Interior breakpoints strictly below `x` pick the segment.
    let seg = input[1..last].partition_point(|&v| v < x);
    let (a, b) = (input[seg], input[seg + 1]);
    let (c, d) = (output[seg], output[seg + 1]);

    if x < a {
        match opts.extrapolate_left {
            Extrapolate::Clamp => return c,
            Extrapolate::Identity => return x,
            Extrapolate::Extend => {}
        }
    }
    if x > b {
        match opts.extrapolate_right {
            Extrapolate::Clamp => return d,
            Extrapolate::Identity => return x,
            Extrapolate::Extend => {}
        }
    }

    let t = (x - a) / (b - a);
    let e = opts.ease.apply_unclamped(t);
    lerp(c, d, e)
}

/// Exact-at-the-ends linear blend: `lerp(a, b, 0) == a`, `lerp(a, b, 1) == b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Multi-breakpoint interpolation validated once at construction.
///
/// Per-frame code holds an `Interpolator` so sampling has no error path.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Interpolator {
    input: Vec<f64>,
    output: Vec<f64>,
    opts: InterpolateOpts,
}

impl Interpolator {
    /// Validate and store the breakpoints.
    pub fn new(
        input_range: impl Into<Vec<f64>>,
        output_range: impl Into<Vec<f64>>,
        opts: InterpolateOpts,
    ) -> ReelResult<Self> {
        let input = input_range.into();
        let output = output_range.into();
        validate_ranges(&input, &output)?;
        opts.ease.validate()?;
        Ok(Self {
            input,
            output,
            opts,
        })
    }

    /// Sample at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        sample_checked(x, &self.input, &self.output, self.opts)
    }

    /// Breakpoints of the input range.
    pub fn input_range(&self) -> &[f64] {
        &self.input
    }
}

/// Two-breakpoint interpolation: `[start, end] -> [from, to]`, validated once.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Tween {
    start: f64,
    end: f64,
    from: f64,
    to: f64,
    opts: InterpolateOpts,
}

impl Tween {
    /// Build a tween over `[start, end]`.
    pub fn new(start: f64, end: f64, from: f64, to: f64, opts: InterpolateOpts) -> ReelResult<Self> {
        validate_ranges(&[start, end], &[from, to])?;
        opts.ease.validate()?;
        Ok(Self {
            start,
            end,
            from,
            to,
            opts,
        })
    }

    /// Clamped, linear tween.
    pub fn clamped(start: f64, end: f64, from: f64, to: f64) -> ReelResult<Self> {
        Self::new(start, end, from, to, InterpolateOpts::clamp())
    }

    /// Replace the easing curve.
    pub fn eased(mut self, ease: Ease) -> ReelResult<Self> {
        ease.validate()?;
        self.opts.ease = ease;
        Ok(self)
    }

    /// Sample at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        sample_checked(
            x,
            &[self.start, self.end],
            &[self.from, self.to],
            self.opts,
        )
    }

    /// Input window length.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
