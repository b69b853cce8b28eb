use crate::{
    animation::interpolate::Tween,
    foundation::{core::Vec2, error::ReelResult},
    promo::style::{BASE, LAVENDER, PURPLE, glow},
    scene::{
        color::Color,
        content::{SceneContent, SceneCtx},
        visual::{GradientStop, Paint, VisualNode, VisualTree},
    },
};

const GRID_STEP_PX: f64 = 60.0;
const PARTICLES: usize = 12;

/// Persistent backdrop drawn under every scene and through the tail.
///
/// Driven by the global frame: drifting glow orbs, a breathing grid, floating particles and
/// a top/bottom vignette.
#[derive(Clone, Debug)]
pub struct Background {
    grid_opacity: Tween,
}

impl Background {
    /// Build the backdrop.
    pub fn new() -> ReelResult<Self> {
        Ok(Self {
            grid_opacity: Tween::clamped(-1.0, 1.0, 0.3, 0.6)?,
        })
    }

    fn orbs(&self, t: f64, w: f64, h: f64) -> Vec<VisualNode> {
        let at = |x_pct: f64, y_pct: f64| (w * (x_pct / 100.0 - 0.5), h * (y_pct / 100.0 - 0.5));
        let (x1, y1) = at(25.0 + (t * 0.15).sin() * 15.0, 20.0 + (t * 0.12).cos() * 10.0);
        let (x2, y2) = at(70.0 + (t * 0.1).cos() * 15.0, 65.0 + (t * 0.13).sin() * 12.0);
        let (x3, y3) = at(85.0, 15.0);
        let pulse = 0.18 + (t * 0.4).sin() * 0.05;
        let r = w.max(h);
        vec![
            VisualNode::ellipse("orb.0", r, r, glow(PURPLE.with_alpha(pulse), 0.5)).translated(x1, y1),
            VisualNode::ellipse(
                "orb.1",
                r,
                r,
                glow(Color::rgb8(99, 60, 200, 0.12), 0.45),
            )
            .translated(x2, y2),
            VisualNode::ellipse("orb.2", r, r, glow(LAVENDER.with_alpha(0.06), 0.35)).translated(x3, y3),
        ]
    }

    fn grid(&self, t: f64, w: f64, h: f64) -> VisualNode {
        let color = PURPLE.with_alpha(0.03);
        let mut lines = Vec::new();
        let mut x = 0.0;
        while x <= w {
            lines.push(
                VisualNode::line(format!("v.{}", lines.len()), Vec2::new(0.0, h), 1.0, color)
                    .translated(x - w / 2.0, -h / 2.0),
            );
            x += GRID_STEP_PX;
        }
        let mut y = 0.0;
        while y <= h {
            lines.push(
                VisualNode::line(format!("h.{}", lines.len()), Vec2::new(w, 0.0), 1.0, color)
                    .translated(-w / 2.0, y - h / 2.0),
            );
            y += GRID_STEP_PX;
        }
        VisualNode::group("grid", lines).with_opacity(self.grid_opacity.sample((t * 0.2).sin()))
    }

    fn particles(&self, t: f64, w: f64, h: f64) -> Vec<VisualNode> {
        (0..PARTICLES)
            .map(|i| {
                let k = i as f64;
                let seed = k * 137.5;
                let x = ((seed + t * 0.2 * (0.5 + (i % 3) as f64 * 0.3)).sin() * 0.5 + 0.5) * w;
                let y = ((seed * 1.3 + t * 0.15 * (0.4 + (i % 4) as f64 * 0.2)).cos() * 0.5 + 0.5) * h;
                let size = 2.0 + (i % 4) as f64 * 1.5;
                let opacity = 0.08 + (i % 5) as f64 * 0.03 + (t * 0.5 + k).sin() * 0.03;
                let color = if i % 2 == 0 { PURPLE } else { LAVENDER };
                VisualNode::ellipse(format!("particle.{i}"), size / 2.0, size / 2.0, Paint::solid(color))
                    .translated(x - w / 2.0, y - h / 2.0)
                    .with_opacity(opacity)
                    .blurred(1.0 + (i % 3) as f64)
            })
            .collect()
    }
}

impl SceneContent for Background {
    fn render(&self, ctx: &SceneCtx) -> VisualTree {
        let t = ctx.secs();
        let (w, h) = (f64::from(ctx.canvas.width), f64::from(ctx.canvas.height));
        let (cx, cy) = ctx.center();

        let mut children = vec![VisualNode::rect("base", w, h, Paint::solid(BASE))];
        children.extend(self.orbs(t, w, h));
        children.push(self.grid(t, w, h));
        children.extend(self.particles(t, w, h));
        children.push(VisualNode::rect(
            "vignette",
            w,
            h,
            Paint::Linear {
                angle_deg: 180.0,
                stops: vec![
                    GradientStop::new(0.0, BASE.with_alpha(0.5)),
                    GradientStop::new(0.2, Color::TRANSPARENT),
                    GradientStop::new(0.8, Color::TRANSPARENT),
                    GradientStop::new(1.0, BASE.with_alpha(0.4)),
                ],
            },
        ));
        VisualTree::new(vec![VisualNode::group("background", children).translated(cx, cy)])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/promo/background.rs"]
mod tests;
