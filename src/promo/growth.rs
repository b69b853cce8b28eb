use crate::{
    animation::{counter::Counter, interpolate::lerp, spring::Spring},
    foundation::error::ReelResult,
    promo::{
        config::PromoConfig,
        style::{DEEP_PURPLE, GREEN, LAVENDER, PURPLE, rise, tint_tokens, tokens_in},
    },
    scene::{
        color::Color,
        content::{SceneContent, SceneCtx},
        visual::{GradientStop, Paint, VisualNode, VisualTree},
    },
    text::{
        reveal::{RevealStyle, TextReveal, TextStyle, text_width},
        tokenize::TokenUnit,
    },
};

/// Chart bar heights in percent of the chart height.
pub const BARS: [f64; 12] = [28.0, 35.0, 42.0, 55.0, 48.0, 62.0, 75.0, 70.0, 82.0, 88.0, 92.0, 98.0];
const HIGHLIGHTED_BARS: usize = 3;
const BAR_W: f64 = 16.0;
const BAR_GAP: f64 = 6.0;
const CHART_H: f64 = 120.0;

/// `(target, prefix, suffix, label)` per metric.
pub const METRICS: [(f64, &str, &str, &str); 3] = [
    (312.0, "+", "%", "Organic Traffic Growth"),
    (5.0, "", "x", "Content Output"),
    (68.0, "", "%", "Less Time on SEO"),
];
const METRIC_SPACING: f64 = 300.0;
const VALUE_FONT: f64 = 52.0;

const TITLE_Y: f64 = -148.0;
const CHART_BOTTOM: f64 = 45.0;
const VALUE_Y: f64 = 119.0;
const LABEL_Y: f64 = 164.0;

#[derive(Clone, Debug)]
struct Metric {
    entrance: Spring,
    counter: Counter,
    suffix: &'static str,
    label: &'static str,
}

/// Growth chart and counting metrics.
#[derive(Clone, Debug)]
pub struct GrowthScene {
    title: TextReveal,
    highlight_from: usize,
    bars: Vec<Spring>,
    metrics: Vec<Metric>,
}

impl GrowthScene {
    /// Build from the promo configuration.
    pub fn new(cfg: &PromoConfig) -> ReelResult<Self> {
        let fps = cfg.fps;
        let title = TextReveal::new(
            "Real results. Real growth.",
            cfg.stagger.chars.config(TokenUnit::Char)?,
            RevealStyle::Fade { rise_px: 8.0 },
            fps,
        )?
        .styled(TextStyle::new(44.0, 700));
        let metrics = METRICS
            .iter()
            .enumerate()
            .map(|(i, &(target, prefix, suffix, label))| {
                let delay = 15 + i as i64 * 10;
                let counter = Counter::new(0.0, target, 1.5)?
                    .delay(fps.frames_to_secs(delay as f64) + 0.2)?
                    .eased(cfg.counter_ease)?
                    .affixes(prefix, "");
                Ok(Metric {
                    entrance: Spring::new(cfg.springs.panel).delay(delay),
                    counter,
                    suffix,
                    label,
                })
            })
            .collect::<ReelResult<Vec<_>>>()?;
        Ok(Self {
            title,
            highlight_from: tokens_in("Real results. ", TokenUnit::Char),
            bars: (0..BARS.len())
                .map(|i| Spring::new(cfg.springs.logo).delay(20 + i as i64 * 3))
                .collect(),
            metrics,
        })
    }

    /// Counter labels (prefix and rounded value, without suffix) at `frame`.
    pub fn metric_labels(&self, ctx: &SceneCtx) -> Vec<String> {
        self.metrics
            .iter()
            .map(|m| m.counter.label(ctx.frame, ctx.fps))
            .collect()
    }

    fn chart(&self, ctx: &SceneCtx) -> VisualNode {
        let total_w = BARS.len() as f64 * BAR_W + (BARS.len() - 1) as f64 * BAR_GAP;
        let bars = BARS
            .iter()
            .zip(&self.bars)
            .enumerate()
            .map(|(i, (&pct, spring))| {
                let p = spring.progress(ctx.frame, ctx.fps);
                let h = CHART_H * lerp(0.0, pct, p) / 100.0;
                let fill = if i >= BARS.len() - HIGHLIGHTED_BARS {
                    Paint::Linear {
                        angle_deg: 180.0,
                        stops: vec![
                            GradientStop::new(0.0, LAVENDER),
                            GradientStop::new(1.0, DEEP_PURPLE),
                        ],
                    }
                } else {
                    Paint::solid(PURPLE.with_alpha(0.2))
                };
                let x = -total_w / 2.0 + BAR_W / 2.0 + i as f64 * (BAR_W + BAR_GAP);
                VisualNode::rect(format!("bar.{i}"), BAR_W, h.max(0.0), fill)
                    .rounded(4.0)
                    .translated(x, CHART_BOTTOM - h / 2.0)
                    .with_opacity(p)
            })
            .collect();
        VisualNode::group("chart", bars)
    }
}

impl SceneContent for GrowthScene {
    fn render(&self, ctx: &SceneCtx) -> VisualTree {
        let f = ctx.frame;
        let (cx, cy) = ctx.center();
        let mut children = vec![
            tint_tokens(
                self.title.render("title", f),
                self.highlight_from..usize::MAX,
                GREEN,
            )
            .translated(0.0, TITLE_Y),
            self.chart(ctx),
        ];
        let first_x = -METRIC_SPACING * (self.metrics.len() as f64 - 1.0) / 2.0;
        for (i, m) in self.metrics.iter().enumerate() {
            let p = m.entrance.progress(f, ctx.fps);
            let value = m.counter.label(f, ctx.fps);
            let value_w = text_width(&value, VALUE_FONT);
            let suffix_w = text_width(m.suffix, VALUE_FONT);
            let node = VisualNode::group(
                format!("metric.{i}"),
                vec![
                    VisualNode::text("value", value, VALUE_FONT, Color::WHITE)
                        .weight(800)
                        .translated(-suffix_w / 2.0, VALUE_Y),
                    VisualNode::text("suffix", m.suffix, VALUE_FONT, LAVENDER)
                        .weight(800)
                        .translated(value_w / 2.0, VALUE_Y),
                    VisualNode::text("label", m.label, 15.0, Color::WHITE.with_alpha(0.5))
                        .weight(500)
                        .translated(0.0, LABEL_Y),
                ],
            );
            children.push(rise(node, p, 30.0).translated(first_x + i as f64 * METRIC_SPACING, 0.0));
        }
        VisualTree::new(vec![VisualNode::group("growth", children).translated(cx, cy)])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/promo/growth.rs"]
mod tests;
