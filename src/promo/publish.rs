use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    animation::{
        ease::Ease,
        interpolate::{Tween, lerp},
        spring::Spring,
    },
    foundation::{core::Vec2, error::ReelResult},
    promo::{
        config::PromoConfig,
        style::{DEEP_PURPLE, LAVENDER, PURPLE, diagonal, ring, tint_tokens, tokens_in},
    },
    scene::{
        color::Color,
        content::{SceneContent, SceneCtx},
        visual::{Paint, VisualNode, VisualTree},
    },
    text::{
        reveal::{RevealStyle, TextReveal, TextStyle},
        tokenize::TokenUnit,
    },
};

const INTEGRATIONS: [(&str, &str, f64); 4] = [
    ("WordPress", "https://api.iconify.design/logos/wordpress-icon.svg?width=48", 48.0),
    ("Webflow", "https://api.iconify.design/logos/webflow.svg?width=48", 48.0),
    ("Shopify", "https://api.iconify.design/logos/shopify.svg?width=48", 48.0),
    (
        "Ghost",
        "https://api.iconify.design/simple-icons/ghost.svg?color=%23FFFFFF&width=42",
        42.0,
    ),
];

const TITLE_Y: f64 = -176.0;
const HUB_Y: f64 = 52.0;
const HUB_R: f64 = 45.0;
const ORBIT_R: f64 = 160.0;

#[derive(Clone, Debug)]
struct Spoke {
    name: &'static str,
    icon: &'static str,
    icon_px: f64,
    at: Vec2,
    node: Spring,
    line: Tween,
    // Frame after which a data pulse travels along the spoke.
    pulse_from: i64,
}

/// Integration hub: spokes grow out to each CMS and carry pulses.
#[derive(Clone, Debug)]
pub struct PublishScene {
    title: TextReveal,
    highlight: std::ops::Range<usize>,
    hub: Spring,
    spokes: Vec<Spoke>,
    pulse_period: f64,
}

impl PublishScene {
    /// Build from the promo configuration.
    pub fn new(cfg: &PromoConfig) -> ReelResult<Self> {
        let title = TextReveal::new(
            "Publish everywhere, instantly",
            cfg.stagger.chars.config(TokenUnit::Char)?,
            RevealStyle::Fade { rise_px: 8.0 },
            cfg.fps,
        )?
        .styled(TextStyle::new(44.0, 700));
        let spokes = INTEGRATIONS
            .iter()
            .enumerate()
            .map(|(i, &(name, icon, icon_px))| {
                let angle = i as f64 / INTEGRATIONS.len() as f64 * TAU - FRAC_PI_2;
                let delay = 15 + i as i64 * 8;
                let line_start = (delay + 5) as f64;
                Ok(Spoke {
                    name,
                    icon,
                    icon_px,
                    at: Vec2::new(angle.cos() * ORBIT_R, angle.sin() * ORBIT_R),
                    node: Spring::new(cfg.springs.node).delay(delay),
                    line: Tween::clamped(line_start, line_start + 15.0, 0.0, 1.0)?
                        .eased(Ease::OutCubic)?,
                    pulse_from: delay + 20,
                })
            })
            .collect::<ReelResult<Vec<_>>>()?;
        Ok(Self {
            title,
            highlight: tokens_in("Publish ", TokenUnit::Char)..tokens_in("Publish everywhere", TokenUnit::Char),
            hub: Spring::new(cfg.springs.card).delay(5),
            spokes,
            pulse_period: cfg.fps.secs_to_frames(1.5),
        })
    }

    fn spoke_line(&self, i: usize, spoke: &Spoke, frame: i64) -> Vec<VisualNode> {
        let p = spoke.line.sample(frame as f64);
        let mut out = vec![VisualNode::line(
            format!("spoke.{i}"),
            spoke.at * p,
            1.5,
            PURPLE.with_alpha(0.2),
        )];
        if frame > spoke.pulse_from {
            let cycle = ((frame - spoke.pulse_from) as f64 / self.pulse_period).fract();
            let at = spoke.at * cycle;
            out.push(
                VisualNode::ellipse(format!("pulse.{i}"), 3.0, 3.0, Paint::solid(PURPLE))
                    .translated(at.x, at.y)
                    .with_opacity(0.8),
            );
        }
        out
    }

    fn spoke_node(i: usize, spoke: &Spoke, p: f64) -> VisualNode {
        VisualNode::group(
            format!("integration.{i}"),
            vec![
                VisualNode::rect("tile", 68.0, 68.0, Paint::solid(Color::WHITE.with_alpha(0.06))).rounded(16.0),
                VisualNode::image("icon", spoke.icon, spoke.icon_px, spoke.icon_px),
                VisualNode::text("name", spoke.name, 13.0, Color::WHITE.with_alpha(0.6))
                    .weight(600)
                    .translated(0.0, 52.0),
            ],
        )
        .scaled(p)
        .translated(spoke.at.x, spoke.at.y)
        .with_opacity(p)
    }
}

impl SceneContent for PublishScene {
    fn render(&self, ctx: &SceneCtx) -> VisualTree {
        let (f, fps) = (ctx.frame, ctx.fps);
        let t = ctx.secs();
        let (cx, cy) = ctx.center();
        let hub_p = self.hub.progress(f, fps);
        let hub_scale = lerp(0.5, 1.0, hub_p);
        let phase = t.rem_euclid(2.0);

        let mut hub_children = Vec::new();
        for (i, spoke) in self.spokes.iter().enumerate() {
            hub_children.extend(self.spoke_line(i, spoke, f));
        }
        hub_children.push(
            ring("hub.ring", HUB_R, 2.0, PURPLE.with_alpha(0.3))
                .scaled(hub_scale * (1.0 + phase * 0.8))
                .with_opacity((1.0 - phase * 0.6).max(0.0) * hub_p),
        );
        hub_children.push(
            VisualNode::group(
                "hub",
                vec![
                    VisualNode::ellipse("disc", HUB_R, HUB_R, diagonal(PURPLE, DEEP_PURPLE)),
                    VisualNode::text("mark", "OR", 16.0, Color::WHITE).weight(800),
                ],
            )
            .scaled(hub_scale * (1.0 + (t * 2.0).sin() * 0.03))
            .with_opacity(hub_p),
        );
        for (i, spoke) in self.spokes.iter().enumerate() {
            hub_children.push(Self::spoke_node(i, spoke, spoke.node.progress(f, fps)));
        }

        let children = vec![
            tint_tokens(self.title.render("title", f), self.highlight.clone(), LAVENDER)
                .translated(0.0, TITLE_Y),
            VisualNode::group("integrations", hub_children).translated(0.0, HUB_Y),
        ];
        VisualTree::new(vec![VisualNode::group("publish", children).translated(cx, cy)])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/promo/publish.rs"]
mod tests;
