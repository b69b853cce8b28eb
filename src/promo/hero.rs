use crate::{
    animation::{
        interpolate::{Tween, lerp},
        spring::Spring,
    },
    foundation::{core::Vec2, error::ReelResult},
    promo::{
        config::PromoConfig,
        style::{PURPLE, glow, ring, rise},
    },
    scene::{
        color::Color,
        content::{SceneContent, SceneCtx},
        visual::{VisualNode, VisualTree},
    },
    text::{
        reveal::{RevealStyle, TextReveal, TextStyle},
        tokenize::{StaggerConfig, TokenUnit},
    },
};

const LOGO_Y: f64 = -85.0;
const WORDMARK_Y: f64 = 35.0;
const TAGLINE_Y: f64 = 123.0;
const CORNER_INSET: f64 = 60.0;

/// Opening scene: logo pop, wordmark, tagline and rotating rings.
#[derive(Clone, Debug)]
pub struct HeroScene {
    logo_src: String,
    logo: Spring,
    wordmark: Spring,
    ring: Spring,
    wordmark_text: TextReveal,
    tagline: TextReveal,
    corners: Tween,
}

impl HeroScene {
    /// Build from the promo configuration.
    pub fn new(cfg: &PromoConfig) -> ReelResult<Self> {
        let fps = cfg.fps;
        let wordmark_text = TextReveal::new(
            "Outrank",
            cfg.stagger.blur.config(TokenUnit::Char)?,
            RevealStyle::Blur { max_blur_px: 10.0 },
            fps,
        )?
        .starting_at(10)
        .styled(TextStyle::new(72.0, 800));
        let tagline = TextReveal::new(
            "AI-Powered SEO on Autopilot",
            StaggerConfig::new(TokenUnit::Word, 0.08, 0.5)?,
            RevealStyle::Fade { rise_px: 10.0 },
            fps,
        )?
        .starting_at(28)
        .styled(TextStyle::new(26.0, 400).colored(Color::WHITE.with_alpha(0.6)));

        Ok(Self {
            logo_src: cfg.logo.clone(),
            logo: Spring::new(cfg.springs.logo),
            wordmark: Spring::new(cfg.springs.wordmark).delay(12),
            ring: Spring::new(cfg.springs.ring).delay(6),
            wordmark_text,
            tagline,
            corners: Tween::clamped(15.0, 30.0, 0.0, 1.0)?,
        })
    }
}

fn corner(id: &str, sx: f64, sy: f64) -> VisualNode {
    let c = PURPLE.with_alpha(0.25);
    VisualNode::group(
        id,
        vec![
            VisualNode::line("h", Vec2::new(40.0 * sx, 0.0), 2.0, c),
            VisualNode::line("v", Vec2::new(0.0, 40.0 * sy), 2.0, c),
        ],
    )
}

impl SceneContent for HeroScene {
    fn render(&self, ctx: &SceneCtx) -> VisualTree {
        let (f, fps) = (ctx.frame, ctx.fps);
        let logo_p = self.logo.progress(f, fps);
        let ring_p = self.ring.progress(f, fps);
        let word_p = self.wordmark.progress(f, fps);
        let rotation = (f as f64 * 0.15).to_radians();
        let ring_opacity = lerp(0.0, 0.15, ring_p);
        let pulse = 1.0 + (ctx.secs() * 1.5).sin() * 0.06;
        let corner_opacity = self.corners.sample(f as f64);
        let (cx, cy) = ctx.center();
        let inset = |half: f64| half - CORNER_INSET;

        let children = vec![
            ring("ring.inner", 190.0, 1.5, PURPLE.with_alpha(0.3))
                .scaled(ring_p)
                .rotated(rotation)
                .with_opacity(ring_opacity),
            ring("ring.outer", 220.0, 1.0, PURPLE.with_alpha(0.15))
                .scaled(ring_p)
                .rotated(-rotation * 0.7)
                .with_opacity(ring_opacity * 0.6),
            VisualNode::ellipse("glow", 125.0, 125.0, glow(PURPLE.with_alpha(0.35), 0.7))
                .scaled(pulse * logo_p)
                .blurred(40.0)
                .translated(0.0, LOGO_Y),
            VisualNode::image("logo", self.logo_src.clone(), 110.0, 110.0)
                .scaled(lerp(0.6, 1.0, logo_p))
                .with_opacity(logo_p)
                .translated(0.0, LOGO_Y),
            rise(self.wordmark_text.render("wordmark", f), word_p, 30.0).translated(0.0, WORDMARK_Y),
            self.tagline.render("tagline", f).translated(0.0, TAGLINE_Y),
            corner("corner.tl", 1.0, 1.0)
                .translated(-inset(cx), -inset(cy))
                .with_opacity(corner_opacity),
            corner("corner.br", -1.0, -1.0)
                .translated(inset(cx), inset(cy))
                .with_opacity(corner_opacity),
        ];
        VisualTree::new(vec![VisualNode::group("hero", children).translated(cx, cy)])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/promo/hero.rs"]
mod tests;
