//! The seven-scene promotional reel.
//!
//! [`build_promo_reel`] turns a [`PromoConfig`] into a ready [`Reel`]: hero, problem,
//! features, content engine, publish, growth and CTA scenes joined by six transitions, a
//! persistent [`Background`] underlay, a looped music bed with a whoosh and a chime, and a
//! thumbnail request at frame 0.

/// Persistent animated backdrop.
pub mod background;
/// JSON-loadable reel configuration.
pub mod config;
/// Typing article and topic tags.
pub mod content_engine;
/// Closing call to action.
pub mod cta;
/// Feature card grid.
pub mod features;
/// Bar chart and counters.
pub mod growth;
/// Logo reveal.
pub mod hero;
/// Pain points struck through.
pub mod problem;
/// Integration hub.
pub mod publish;
pub(crate) mod style;

use crate::{
    audio::gain::{AudioCue, GainCurve},
    composition::{dsl::TimelineBuilder, model::Transition},
    foundation::error::{ReelError, ReelResult},
    session::reel::Reel,
};

pub use background::Background;
pub use config::PromoConfig;
pub use content_engine::ContentEngineScene;
pub use cta::CtaScene;
pub use features::FeaturesScene;
pub use growth::GrowthScene;
pub use hero::HeroScene;
pub use problem::ProblemScene;
pub use publish::PublishScene;

/// Id of the closing segment; the chime lands when its incoming transition completes.
pub const CTA_SEGMENT: &str = "cta";

/// Build the promotional reel described by `cfg`.
#[tracing::instrument(skip(cfg))]
pub fn build_promo_reel(cfg: &PromoConfig) -> ReelResult<Reel> {
    cfg.validate()?;
    let kinds = cfg.transitions.presentations()?;
    let transition =
        |i: usize| Transition::linear(kinds[i], cfg.transitions.duration_frames).with_timing(cfg.transitions.timing);
    let d = &cfg.scenes;

    let timeline = TimelineBuilder::new(cfg.fps, cfg.canvas)
        .segment("hero", d.hero, HeroScene::new(cfg)?)
        .transition(transition(0))?
        .segment("problem", d.problem, ProblemScene::new(cfg)?)
        .transition(transition(1))?
        .segment("features", d.features, FeaturesScene::new(cfg)?)
        .transition(transition(2))?
        .segment("content_engine", d.content_engine, ContentEngineScene::new(cfg)?)
        .transition(transition(3))?
        .segment("publish", d.publish, PublishScene::new(cfg)?)
        .transition(transition(4))?
        .segment("growth", d.growth, GrowthScene::new(cfg)?)
        .transition(transition(5))?
        .segment(CTA_SEGMENT, d.cta, CtaScene::new(cfg)?)
        .build()?;

    let cta_start = timeline
        .segment_start(CTA_SEGMENT)
        .ok_or_else(|| ReelError::evaluation("promo timeline has no cta segment"))?;
    let chime_at = cfg
        .audio
        .chime
        .start_frame
        .unwrap_or(cta_start + cfg.transitions.duration_frames);
    tracing::debug!(
        total = timeline.total_frames(),
        cta_start,
        chime_at,
        "promo timeline assembled"
    );

    let audio = &cfg.audio;
    let music = AudioCue {
        gain: GainCurve::constant(audio.music.level)
            .with_fade_in(audio.music.fade_in)
            .with_fade_out(audio.music.fade_out),
        looped: true,
        ..AudioCue::new("music", audio.music.source.clone(), 0, audio.music.level)
    };
    let whoosh = AudioCue::new(
        "whoosh",
        audio.whoosh.source.clone(),
        audio.whoosh.start_frame.unwrap_or(5),
        audio.whoosh.level,
    );
    let chime = AudioCue::new("chime", audio.chime.source.clone(), chime_at, audio.chime.level);

    let mut builder = Reel::builder(timeline)
        .underlay(Background::new()?)
        .tail_frames(cfg.tail_frames)
        .bed(music)
        .cue(whoosh)
        .cue(chime)
        .policy(cfg.frame_policy);
    if let Some(name) = &cfg.thumbnail {
        builder = builder.thumbnail(0, name.clone());
    }
    builder.build()
}

#[cfg(test)]
#[path = "../../tests/unit/promo/reel.rs"]
mod tests;
