use crate::{
    animation::{
        ease::Ease,
        interpolate::{Tween, lerp},
        spring::Spring,
    },
    foundation::{core::Vec2, error::ReelResult},
    promo::{
        config::PromoConfig,
        style::{CORAL, tint_tokens, tokens_in},
    },
    scene::{
        color::Color,
        content::{SceneContent, SceneCtx},
        visual::{VisualNode, VisualTree},
    },
    text::{
        reveal::{RevealStyle, TextReveal, TextStyle, text_width},
        tokenize::TokenUnit,
    },
};

const HEADLINE: &str = "SEO shouldn't feel\nlike a full-time job";
const HIGHLIGHT_PREFIX: &str = "SEO shouldn't feel\nlike a ";
const PAIN_POINTS: [(&str, &str); 3] = [
    ("⏱", "Hours of manual keyword research"),
    ("📉", "Content that never ranks"),
    ("🔄", "Publishing bottlenecks"),
];
const HEADLINE_Y: f64 = -95.0;
const FIRST_ROW_Y: f64 = 30.0;
const ROW_STEP: f64 = 54.0;
const ROW_FONT: f64 = 24.0;

#[derive(Clone, Debug)]
struct PainRow {
    icon: &'static str,
    text: &'static str,
    entrance: Spring,
    strike: Tween,
}

/// Pain points sliding in and getting struck through.
#[derive(Clone, Debug)]
pub struct ProblemScene {
    headline: TextReveal,
    highlight_from: usize,
    rows: Vec<PainRow>,
}

impl ProblemScene {
    /// Build from the promo configuration.
    pub fn new(cfg: &PromoConfig) -> ReelResult<Self> {
        let headline = TextReveal::new(
            HEADLINE,
            cfg.stagger.chars.config(TokenUnit::Char)?,
            RevealStyle::Fade { rise_px: 8.0 },
            cfg.fps,
        )?
        .styled(TextStyle::new(52.0, 700));
        let rows = PAIN_POINTS
            .iter()
            .enumerate()
            .map(|(i, &(icon, text))| {
                let delay = 20 + i as i64 * 10;
                let strike_at = (delay + 25) as f64;
                Ok(PainRow {
                    icon,
                    text,
                    entrance: Spring::new(cfg.springs.list).delay(delay),
                    strike: Tween::clamped(strike_at, strike_at + 12.0, 0.0, 1.0)?
                        .eased(Ease::OutCubic)?,
                })
            })
            .collect::<ReelResult<Vec<_>>>()?;
        Ok(Self {
            headline,
            highlight_from: tokens_in(HIGHLIGHT_PREFIX, TokenUnit::Char),
            rows,
        })
    }
}

impl PainRow {
    fn render(&self, i: usize, frame: i64, ctx: &SceneCtx) -> VisualNode {
        let p = self.entrance.progress(frame, ctx.fps);
        let strike = self.strike.sample(frame as f64);
        let w = text_width(self.text, ROW_FONT);
        let left = -w / 2.0;
        VisualNode::group(
            format!("row.{i}"),
            vec![
                VisualNode::text("icon", self.icon, 28.0, Color::WHITE).translated(left - 30.0, 0.0),
                VisualNode::text("text", self.text, ROW_FONT, Color::WHITE.with_alpha(0.65)),
                VisualNode::line("strike", Vec2::new(w * strike, 0.0), 2.0, CORAL).translated(left, 0.0),
            ],
        )
        .translated(lerp(-40.0, 0.0, p), FIRST_ROW_Y + i as f64 * ROW_STEP)
        .with_opacity(p)
    }
}

impl SceneContent for ProblemScene {
    fn render(&self, ctx: &SceneCtx) -> VisualTree {
        let f = ctx.frame;
        let (cx, cy) = ctx.center();
        let headline = tint_tokens(
            self.headline.render("headline", f),
            self.highlight_from..usize::MAX,
            CORAL,
        )
        .translated(0.0, HEADLINE_Y);

        let mut children = vec![headline];
        children.extend(self.rows.iter().enumerate().map(|(i, row)| row.render(i, f, ctx)));
        VisualTree::new(vec![VisualNode::group("problem", children).translated(cx, cy)])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/promo/problem.rs"]
mod tests;
