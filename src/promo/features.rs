use crate::{
    animation::{interpolate::lerp, spring::Spring},
    foundation::{core::Vec2, error::ReelResult},
    promo::{
        config::PromoConfig,
        style::{LAVENDER, PURPLE, tint_tokens, tokens_in},
    },
    scene::{
        color::Color,
        content::{SceneContent, SceneCtx},
        visual::{GradientStop, Paint, VisualNode, VisualTree},
    },
    text::{
        reveal::{RevealStyle, TextReveal, TextStyle},
        tokenize::TokenUnit,
    },
};

struct Feature {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "https://api.iconify.design/lucide/search.svg?color=%23915DFF&width=40",
        title: "Keyword Intelligence",
        desc: "AI finds high-impact keywords your competitors miss",
    },
    Feature {
        icon: "https://api.iconify.design/lucide/bar-chart-3.svg?color=%23915DFF&width=40",
        title: "SERP Analysis",
        desc: "Decode what Google rewards, in real time",
    },
    Feature {
        icon: "https://api.iconify.design/lucide/file-text.svg?color=%23915DFF&width=40",
        title: "AI Content Engine",
        desc: "Long-form articles that match your brand voice",
    },
    Feature {
        icon: "https://api.iconify.design/lucide/send.svg?color=%23915DFF&width=40",
        title: "Auto-Publish",
        desc: "Ship to WordPress, Webflow, and more instantly",
    },
];

const TITLE: &str = "One platform. Everything you need.";
const TITLE_Y: f64 = -129.0;
const CARD_Y: f64 = 49.0;
const CARD_W: f64 = 200.0;
const CARD_H: f64 = 210.0;
const CARD_GAP: f64 = 20.0;

/// Four feature cards springing up in sequence.
#[derive(Clone, Debug)]
pub struct FeaturesScene {
    title: TextReveal,
    highlight_from: usize,
    cards: Vec<Spring>,
}

impl FeaturesScene {
    /// Build from the promo configuration.
    pub fn new(cfg: &PromoConfig) -> ReelResult<Self> {
        let title = TextReveal::new(
            TITLE,
            cfg.stagger.chars.config(TokenUnit::Char)?,
            RevealStyle::Fade { rise_px: 8.0 },
            cfg.fps,
        )?
        .styled(TextStyle::new(44.0, 700));
        Ok(Self {
            title,
            highlight_from: tokens_in("One platform. ", TokenUnit::Char),
            cards: (0..FEATURES.len())
                .map(|i| Spring::new(cfg.springs.card).delay(8 + i as i64 * 8))
                .collect(),
        })
    }
}

fn card(i: usize, feature: &Feature, t: f64) -> VisualNode {
    let glow_alpha = 0.06 + (t * 1.8 + i as f64 * 1.2).sin() * 0.03;
    let top = -CARD_H / 2.0;
    VisualNode::group(
        format!("card.{i}"),
        vec![
            VisualNode::rect("panel", CARD_W, CARD_H, Paint::solid(Color::WHITE.with_alpha(0.04)))
                .rounded(16.0),
            VisualNode::rect(
                "glow",
                CARD_W,
                CARD_H,
                Paint::Radial {
                    center: Vec2::new(0.5, 0.0),
                    stops: vec![
                        GradientStop::new(0.0, PURPLE.with_alpha(glow_alpha)),
                        GradientStop::new(0.7, Color::TRANSPARENT),
                    ],
                },
            )
            .rounded(16.0),
            VisualNode::image("icon", feature.icon, 40.0, 40.0).translated(0.0, top + 48.0),
            VisualNode::text("title", feature.title, 17.0, Color::WHITE)
                .weight(700)
                .translated(0.0, top + 93.0),
            VisualNode::text("desc", feature.desc, 14.0, Color::WHITE.with_alpha(0.5))
                .translated(0.0, top + 148.0),
        ],
    )
}

impl SceneContent for FeaturesScene {
    fn render(&self, ctx: &SceneCtx) -> VisualTree {
        let f = ctx.frame;
        let t = ctx.secs();
        let (cx, cy) = ctx.center();
        let row_w = FEATURES.len() as f64 * CARD_W + (FEATURES.len() - 1) as f64 * CARD_GAP;

        let mut children = vec![
            tint_tokens(
                self.title.render("title", f),
                self.highlight_from..usize::MAX,
                LAVENDER,
            )
            .translated(0.0, TITLE_Y),
        ];
        for (i, (feature, spring)) in FEATURES.iter().zip(&self.cards).enumerate() {
            let p = spring.progress(f, ctx.fps);
            let x = -row_w / 2.0 + CARD_W / 2.0 + i as f64 * (CARD_W + CARD_GAP);
            children.push(
                card(i, feature, t)
                    .scaled(lerp(0.92, 1.0, p))
                    .translated(x, CARD_Y + lerp(50.0, 0.0, p))
                    .with_opacity(p),
            );
        }
        VisualTree::new(vec![VisualNode::group("features", children).translated(cx, cy)])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/promo/features.rs"]
mod tests;
