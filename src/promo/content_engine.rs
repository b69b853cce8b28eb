use crate::{
    animation::{
        ease::Ease,
        interpolate::{Tween, lerp},
        spring::Spring,
    },
    foundation::error::ReelResult,
    promo::{
        config::PromoConfig,
        style::{GREEN, LILAC, PURPLE, tint_tokens, tokens_in},
    },
    scene::{
        color::Color,
        content::{SceneContent, SceneCtx},
        visual::{GradientStop, Paint, VisualNode, VisualTree},
    },
    text::{
        reveal::{RevealStyle, TextReveal, TextStyle, text_width},
        tokenize::{StaggerConfig, TokenUnit},
    },
};

const HEADLINE: &str = "Content that writes itself";
const ARTICLE_TITLE: &str = "10 Advanced Strategies to Scale Organic Traffic in 2025";
const TAGS: [&str; 4] = ["On-Brand", "SEO-Optimized", "Long-Form", "Publish-Ready"];
const PARAGRAPH_WIDTHS: [f64; 3] = [0.85, 0.92, 0.70];

const HEADLINE_Y: f64 = -153.0;
const CARD_Y: f64 = 8.0;
const CARD_W: f64 = 700.0;
const CARD_H: f64 = 190.0;
const CARD_PAD: f64 = 32.0;
const TAGS_Y: f64 = 161.0;
const TAG_GAP: f64 = 12.0;
const TITLE_FONT: f64 = 22.0;

/// Mock article card typing itself out, with tags popping in below.
#[derive(Clone, Debug)]
pub struct ContentEngineScene {
    headline: TextReveal,
    highlight_from: usize,
    card: Spring,
    title: TextReveal,
    paragraph: Vec<Tween>,
    tags: Vec<Spring>,
    shimmer: Tween,
    shimmer_period: i64,
}

impl ContentEngineScene {
    /// Build from the promo configuration.
    pub fn new(cfg: &PromoConfig) -> ReelResult<Self> {
        let fps = cfg.fps;
        let headline = TextReveal::new(
            HEADLINE,
            StaggerConfig::new(TokenUnit::Word, 0.07, 0.5)?,
            RevealStyle::Fade { rise_px: 10.0 },
            fps,
        )?
        .styled(TextStyle::new(44.0, 700));
        // Typewriter: one character every 0.04 s, no per-character fade.
        let title = TextReveal::new(
            ARTICLE_TITLE,
            StaggerConfig::new(TokenUnit::Char, 0.04, 0.0)?,
            RevealStyle::Fade { rise_px: 0.0 },
            fps,
        )?
        .styled(TextStyle::new(TITLE_FONT, 700));
        let paragraph = (0..PARAGRAPH_WIDTHS.len())
            .map(|i| {
                let start = 45.0 + i as f64 * 8.0;
                Tween::clamped(start, start + 15.0, 0.0, 1.0)?.eased(Ease::OutCubic)
            })
            .collect::<ReelResult<Vec<_>>>()?;
        let shimmer_period = fps.secs_to_frames_round(3.0).max(1);
        Ok(Self {
            headline,
            highlight_from: tokens_in("Content that ", TokenUnit::Word),
            card: Spring::new(cfg.springs.panel).delay(10),
            title,
            paragraph,
            tags: (0..TAGS.len())
                .map(|i| Spring::new(cfg.springs.chip).delay(30 + i as i64 * 7))
                .collect(),
            shimmer: Tween::clamped(0.0, shimmer_period as f64, -100.0, 500.0)?,
            shimmer_period: shimmer_period as i64,
        })
    }

    /// Characters of the article title typed by `frame`.
    pub fn typed_chars(&self, frame: i64) -> usize {
        (0..self.title.tokens().len())
            .take_while(|&i| self.title.token_progress(i, frame) >= 1.0)
            .count()
    }

    fn article(&self, ctx: &SceneCtx) -> VisualNode {
        let f = ctx.frame;
        let left = -CARD_W / 2.0 + CARD_PAD;
        let top = -CARD_H / 2.0 + CARD_PAD;
        let inner_w = CARD_W - 2.0 * CARD_PAD;

        let shimmer_x = self.shimmer.sample(f.rem_euclid(self.shimmer_period) as f64);
        let title_w = text_width(ARTICLE_TITLE, TITLE_FONT);
        let title_y = top + 41.0;
        let typed = self.typed_chars(f);
        let typed_w: f64 = self
            .title
            .tokens()
            .iter()
            .take(typed)
            .map(|t| text_width(&t.gap_before, TITLE_FONT) + text_width(&t.text, TITLE_FONT))
            .sum();
        let cursor_on = (ctx.secs() * 2.0).floor() as i64 % 2 == 0;
        let label = "AI GENERATED ARTICLE";

        let mut children = vec![
            VisualNode::rect("panel", CARD_W, CARD_H, Paint::solid(Color::WHITE.with_alpha(0.04)))
                .rounded(20.0),
            VisualNode::rect(
                "shimmer",
                100.0,
                CARD_H,
                Paint::Linear {
                    angle_deg: 90.0,
                    stops: vec![
                        GradientStop::new(0.0, Color::TRANSPARENT),
                        GradientStop::new(0.5, PURPLE.with_alpha(0.06)),
                        GradientStop::new(1.0, Color::TRANSPARENT),
                    ],
                },
            )
            .translated(-CARD_W / 2.0 + shimmer_x + 50.0, 0.0),
            VisualNode::ellipse("status", 4.0, 4.0, Paint::solid(GREEN)).translated(left + 4.0, top + 8.0),
            VisualNode::text("label", label, 13.0, Color::WHITE.with_alpha(0.45))
                .weight(500)
                .translated(left + 18.0 + text_width(label, 13.0) / 2.0, top + 8.0),
            self.title
                .render("title", f)
                .translated(left + title_w / 2.0, title_y),
            VisualNode::rect("cursor", 2.0, TITLE_FONT * 1.1, Paint::solid(PURPLE))
                .translated(left + typed_w + 3.0, title_y)
                .with_opacity(if cursor_on { 1.0 } else { 0.0 }),
        ];
        for (i, (tween, width)) in self.paragraph.iter().zip(PARAGRAPH_WIDTHS).enumerate() {
            let p = tween.sample(f as f64);
            let w = inner_w * width * p;
            children.push(
                VisualNode::rect(format!("line.{i}"), w, 10.0, Paint::solid(Color::WHITE.with_alpha(0.06)))
                    .rounded(5.0)
                    .translated(left + w / 2.0, title_y + 36.0 + i as f64 * 18.0)
                    .with_opacity(p),
            );
        }
        VisualNode::group("article", children)
    }

    fn tag_row(&self, ctx: &SceneCtx) -> Vec<VisualNode> {
        let widths: Vec<f64> = TAGS.iter().map(|t| text_width(t, 14.0) + 36.0).collect();
        let total = widths.iter().sum::<f64>() + TAG_GAP * (TAGS.len() - 1) as f64;
        let mut x = -total / 2.0;
        TAGS.iter()
            .zip(&widths)
            .zip(&self.tags)
            .enumerate()
            .map(|(i, ((tag, &w), spring))| {
                let p = spring.progress(ctx.frame, ctx.fps);
                let node = VisualNode::group(
                    format!("tag.{i}"),
                    vec![
                        VisualNode::rect("pill", w, 34.0, Paint::solid(PURPLE.with_alpha(0.12))).rounded(17.0),
                        VisualNode::text("label", *tag, 14.0, LILAC).weight(600),
                    ],
                )
                .scaled(lerp(0.7, 1.0, p))
                .translated(x + w / 2.0, TAGS_Y)
                .with_opacity(p);
                x += w + TAG_GAP;
                node
            })
            .collect()
    }
}

impl SceneContent for ContentEngineScene {
    fn render(&self, ctx: &SceneCtx) -> VisualTree {
        let f = ctx.frame;
        let (cx, cy) = ctx.center();
        let card_p = self.card.progress(f, ctx.fps);

        let mut children = vec![
            tint_tokens(
                self.headline.render("headline", f),
                self.highlight_from..usize::MAX,
                LILAC,
            )
            .translated(0.0, HEADLINE_Y),
            self.article(ctx)
                .scaled(lerp(0.95, 1.0, card_p))
                .translated(0.0, CARD_Y + lerp(60.0, 0.0, card_p))
                .with_opacity(card_p),
        ];
        children.extend(self.tag_row(ctx));
        VisualTree::new(vec![VisualNode::group("content_engine", children).translated(cx, cy)])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/promo/content_engine.rs"]
mod tests;
