use crate::{
    animation::{interpolate::lerp, spring::Spring},
    foundation::error::ReelResult,
    promo::{
        config::PromoConfig,
        style::{PURPLE, diagonal, glow},
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

const BUTTON_LABEL: &str = "Try Outrank Free →";
const BUTTON_H: f64 = 59.0;
const SHIMMER_W: f64 = 60.0;

const LOGO_Y: f64 = -178.0;
const HEADLINE_Y: f64 = -46.0;
const SUBLINE_Y: f64 = 59.0;
const BUTTON_Y: f64 = 142.0;
const URL_Y: f64 = 209.0;

/// Closing call to action.
#[derive(Clone, Debug)]
pub struct CtaScene {
    logo_src: String,
    logo: Spring,
    button: Spring,
    headline: TextReveal,
    subline: TextReveal,
    url: TextReveal,
}

impl CtaScene {
    /// Build from the promo configuration.
    pub fn new(cfg: &PromoConfig) -> ReelResult<Self> {
        let fps = cfg.fps;
        let headline = TextReveal::new(
            "Start outranking\nyour competition",
            cfg.stagger.blur.config(TokenUnit::Char)?,
            RevealStyle::Blur { max_blur_px: 10.0 },
            fps,
        )?
        .starting_at(8)
        .styled(TextStyle::new(56.0, 800));
        let subline = TextReveal::new(
            "AI-powered SEO content, fully automated.",
            StaggerConfig::new(TokenUnit::Word, 0.06, 0.5)?,
            RevealStyle::Fade { rise_px: 10.0 },
            fps,
        )?
        .starting_at(22)
        .styled(TextStyle::new(22.0, 400).colored(Color::WHITE.with_alpha(0.55)));
        let url = TextReveal::new(
            "outrank.so",
            StaggerConfig::new(TokenUnit::Word, 0.05, 0.4)?,
            RevealStyle::Fade { rise_px: 10.0 },
            fps,
        )?
        .starting_at(38)
        .styled(TextStyle::new(16.0, 500).colored(PURPLE.with_alpha(0.7)));
        Ok(Self {
            logo_src: cfg.logo.clone(),
            logo: Spring::new(cfg.springs.logo),
            button: Spring::new(cfg.springs.wordmark).delay(30),
            headline,
            subline,
            url,
        })
    }

    fn button(&self, t: f64) -> VisualNode {
        let w = text_width(BUTTON_LABEL, 20.0) + 96.0;
        let shimmer_left = (t * 80.0).rem_euclid(400.0) - 100.0;
        let mut children = vec![
            VisualNode::rect(
                "face",
                w,
                BUTTON_H,
                diagonal(PURPLE, Color::rgb8(123, 63, 228, 1.0)),
            )
            .rounded(14.0),
        ];
        // The face clips the shimmer; skip it while fully outside.
        if shimmer_left > -SHIMMER_W && shimmer_left < w {
            children.push(
                VisualNode::rect(
                    "shimmer",
                    SHIMMER_W,
                    BUTTON_H,
                    Paint::Linear {
                        angle_deg: 90.0,
                        stops: vec![
                            GradientStop::new(0.0, Color::TRANSPARENT),
                            GradientStop::new(0.5, Color::WHITE.with_alpha(0.2)),
                            GradientStop::new(1.0, Color::TRANSPARENT),
                        ],
                    },
                )
                .translated(-w / 2.0 + shimmer_left + SHIMMER_W / 2.0, 0.0),
            );
        }
        children.push(VisualNode::text("label", BUTTON_LABEL, 20.0, Color::WHITE).weight(700));
        VisualNode::group("button", children)
    }
}

impl SceneContent for CtaScene {
    fn render(&self, ctx: &SceneCtx) -> VisualTree {
        let (f, fps) = (ctx.frame, ctx.fps);
        let t = ctx.secs();
        let (cx, cy) = ctx.center();
        let logo_p = self.logo.progress(f, fps);
        let button_p = self.button.progress(f, fps);
        let glow_scale = 1.0 + (t * 1.5).sin() * 0.08;

        let children = vec![
            VisualNode::ellipse("glow", 250.0, 250.0, glow(PURPLE.with_alpha(0.2), 0.6))
                .scaled(glow_scale * logo_p)
                .blurred(60.0),
            VisualNode::image("logo", self.logo_src.clone(), 80.0, 80.0)
                .scaled(lerp(0.5, 1.0, logo_p))
                .with_opacity(logo_p)
                .translated(0.0, LOGO_Y),
            self.headline.render("headline", f).translated(0.0, HEADLINE_Y),
            self.subline.render("subline", f).translated(0.0, SUBLINE_Y),
            self.button(t)
                .scaled(lerp(0.8, 1.0, button_p))
                .with_opacity(button_p)
                .translated(0.0, BUTTON_Y),
            self.url.render("url", f).translated(0.0, URL_Y),
        ];
        VisualTree::new(vec![VisualNode::group("cta", children).translated(cx, cy)])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/promo/cta.rs"]
mod tests;
