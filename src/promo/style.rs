//! Palette and small node helpers shared by the promo scenes.

use std::ops::Range;

use crate::{
    animation::interpolate::lerp,
    foundation::core::Vec2,
    scene::{
        color::Color,
        visual::{GradientStop, NodeKind, Paint, VisualNode},
    },
    text::tokenize::{TokenUnit, tokenize},
};

pub(crate) const BASE: Color = Color::rgba(6.0 / 255.0, 6.0 / 255.0, 15.0 / 255.0, 1.0);
pub(crate) const PURPLE: Color = Color::rgba(145.0 / 255.0, 93.0 / 255.0, 1.0, 1.0);
pub(crate) const DEEP_PURPLE: Color = Color::rgba(107.0 / 255.0, 63.0 / 255.0, 160.0 / 255.0, 1.0);
pub(crate) const LAVENDER: Color = Color::rgba(168.0 / 255.0, 130.0 / 255.0, 1.0, 1.0);
pub(crate) const LILAC: Color = Color::rgba(196.0 / 255.0, 161.0 / 255.0, 1.0, 1.0);
pub(crate) const CORAL: Color = Color::rgba(1.0, 107.0 / 255.0, 107.0 / 255.0, 1.0);
pub(crate) const GREEN: Color = Color::rgba(34.0 / 255.0, 197.0 / 255.0, 94.0 / 255.0, 1.0);

/// Radial glow: `color` at the center fading out at `reach` (fraction of the radius).
pub(crate) fn glow(color: Color, reach: f64) -> Paint {
    Paint::Radial {
        center: Vec2::new(0.5, 0.5),
        stops: vec![
            GradientStop::new(0.0, color),
            GradientStop::new(reach, color.with_alpha(0.0)),
        ],
    }
}

/// Two-stop diagonal gradient.
pub(crate) fn diagonal(from: Color, to: Color) -> Paint {
    Paint::Linear {
        angle_deg: 135.0,
        stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
    }
}

/// Circle outline drawn as a hard-edged radial band.
pub(crate) fn ring(id: impl Into<String>, radius: f64, stroke: f64, color: Color) -> VisualNode {
    let inner = (1.0 - stroke / radius).clamp(0.0, 1.0);
    VisualNode::ellipse(
        id,
        radius,
        radius,
        Paint::Radial {
            center: Vec2::new(0.5, 0.5),
            stops: vec![
                GradientStop::new(inner, Color::TRANSPARENT),
                GradientStop::new(inner, color),
                GradientStop::new(1.0, color),
            ],
        },
    )
}

/// Spring-style entrance: fade with `p`, offset by `dy · (1 - p)`.
pub(crate) fn rise(node: VisualNode, p: f64, dy: f64) -> VisualNode {
    node.translated(0.0, lerp(dy, 0.0, p)).with_opacity(p)
}

/// Number of `unit` tokens in `prefix`, i.e. the index of the first token after it.
pub(crate) fn tokens_in(prefix: &str, unit: TokenUnit) -> usize {
    tokenize(prefix, unit).len()
}

/// Recolor the text children of a rendered reveal whose token index is in `tokens`.
pub(crate) fn tint_tokens(mut node: VisualNode, tokens: Range<usize>, tint: Color) -> VisualNode {
    let take = tokens.end.saturating_sub(tokens.start);
    for child in node.children.iter_mut().skip(tokens.start).take(take) {
        if let NodeKind::Text { color, .. } = &mut child.kind {
            *color = tint;
        }
    }
    node
}

#[cfg(test)]
#[path = "../../tests/unit/promo/style.rs"]
mod tests;
