//! Frame-indexed animation primitives.

/// Counting labels driven by an eased tween.
pub mod counter;
/// Named easing curves.
pub mod ease;
/// Piecewise-linear mapping and tweens.
pub mod interpolate;
/// Closed-form damped springs.
pub mod spring;
