use crate::{
    animation::{ease::Ease, spring::SpringConfig},
    audio::gain::FadeWindow,
    effects::transitions::{Presentation, TransitionTiming},
    foundation::{
        core::{Canvas, Fps},
        error::{ReelError, ReelResult},
    },
    session::reel::FramePolicy,
    text::tokenize::{StaggerConfig, TokenUnit},
};

const MUSIC_URL: &str = "https://pub-e3bfc0083b0644b296a7080b21024c5f.r2.dev/music/1770819204396_9y8zmnirjrj_music_Modern_tech_startup_.mp3";
const WHOOSH_URL: &str = "https://pub-e3bfc0083b0644b296a7080b21024c5f.r2.dev/sfx/1770818738993_bcgdz7vin57_sfx_modern_tech_startup_video_intr.mp3";
const CHIME_URL: &str = "https://pub-e3bfc0083b0644b296a7080b21024c5f.r2.dev/sfx/1770818751087_ud6eof33tmp_sfx_gentle_rising_digital_chime__s.mp3";
const LOGO_URL: &str = "https://pub-e3bfc0083b0644b296a7080b21024c5f.r2.dev/outrank/1770818743426_6q0fcbqitga_outrank_logo.png";

/// Number of scene-to-scene transitions in the promo.
pub const TRANSITION_COUNT: usize = 6;

/// Configuration of the promotional reel.
///
/// Every field has a default matching the shipped video, so `{}` is a valid config and
/// partial JSON overrides only what it names.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromoConfig {
    /// Frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Per-scene lengths.
    pub scenes: SceneDurations,
    /// Scene-to-scene transitions.
    pub transitions: TransitionConfig,
    /// Background-only frames after the last scene.
    pub tail_frames: u64,
    /// Spring presets shared by the scenes.
    pub springs: SpringPresets,
    /// Text reveal presets.
    pub stagger: StaggerPresets,
    /// Easing of the growth counters.
    pub counter_ease: Ease,
    /// Music bed and sound effects.
    pub audio: AudioConfig,
    /// Logo image source.
    pub logo: String,
    /// Thumbnail file name captured at frame 0, if any.
    pub thumbnail: Option<String>,
    /// Out-of-range frame handling.
    pub frame_policy: FramePolicy,
}

impl Default for PromoConfig {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            scenes: SceneDurations::default(),
            transitions: TransitionConfig::default(),
            tail_frames: 30,
            springs: SpringPresets::default(),
            stagger: StaggerPresets::default(),
            counter_ease: Ease::Smooth,
            audio: AudioConfig::default(),
            logo: LOGO_URL.to_owned(),
            thumbnail: Some("thumbnail.jpeg".to_owned()),
            frame_policy: FramePolicy::Clamp,
        }
    }
}

impl PromoConfig {
    /// Parse from JSON.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Check everything that can be checked before the timeline is assembled.
    pub fn validate(&self) -> ReelResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        for (id, d) in self.scenes.entries() {
            if d == 0 {
                return Err(ReelError::validation(format!(
                    "scene '{id}' duration must be > 0 frames"
                )));
            }
        }
        self.transitions.presentations()?;
        self.transitions.timing.validate(self.fps)?;
        if self.transitions.duration_frames == 0 {
            return Err(ReelError::validation(
                "transition duration must be > 0 frames",
            ));
        }
        self.stagger.chars.config(TokenUnit::Char)?;
        self.stagger.blur.config(TokenUnit::Char)?;
        self.counter_ease.validate()?;
        self.audio.validate()?;
        if self.logo.trim().is_empty() {
            return Err(ReelError::validation("logo source must be non-empty"));
        }
        if let Some(name) = &self.thumbnail
            && name.trim().is_empty()
        {
            return Err(ReelError::validation("thumbnail file name must be non-empty"));
        }
        Ok(())
    }
}

/// Scene lengths in frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneDurations {
    /// Logo reveal.
    pub hero: u64,
    /// Pain points.
    pub problem: u64,
    /// Feature cards.
    pub features: u64,
    /// Article mock-up.
    pub content_engine: u64,
    /// Integration hub.
    pub publish: u64,
    /// Metrics and chart.
    pub growth: u64,
    /// Call to action.
    pub cta: u64,
}

impl Default for SceneDurations {
    fn default() -> Self {
        Self {
            hero: 110,
            problem: 120,
            features: 120,
            content_engine: 130,
            publish: 120,
            growth: 120,
            cta: 130,
        }
    }
}

impl SceneDurations {
    /// `(segment id, duration)` in timeline order.
    pub fn entries(&self) -> [(&'static str, u64); 7] {
        [
            ("hero", self.hero),
            ("problem", self.problem),
            ("features", self.features),
            ("content_engine", self.content_engine),
            ("publish", self.publish),
            ("growth", self.growth),
            ("cta", self.cta),
        ]
    }
}

/// Transition kinds and length.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    /// Length of every transition in frames.
    pub duration_frames: u64,
    /// Presentation names in order (`cross_fade`, `blur_dissolve`, `none`).
    pub kinds: Vec<String>,
    /// Peak blur of blur dissolves.
    pub dissolve_blur_px: f64,
    /// Blend factor timing.
    pub timing: TransitionTiming,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_frames: 18,
            kinds: [
                "blur_dissolve",
                "blur_dissolve",
                "cross_fade",
                "blur_dissolve",
                "cross_fade",
                "blur_dissolve",
            ]
            .map(str::to_owned)
            .to_vec(),
            dissolve_blur_px: crate::effects::transitions::DEFAULT_DISSOLVE_BLUR_PX,
            timing: TransitionTiming::Linear,
        }
    }
}

impl TransitionConfig {
    /// Parse `kinds` into presentations, one per scene boundary.
    pub fn presentations(&self) -> ReelResult<[Presentation; TRANSITION_COUNT]> {
        let parsed = self
            .kinds
            .iter()
            .map(|k| {
                let p = match Presentation::parse(k)? {
                    Presentation::BlurDissolve { .. } => Presentation::BlurDissolve {
                        max_blur_px: self.dissolve_blur_px,
                    },
                    other => other,
                };
                p.validate()?;
                Ok(p)
            })
            .collect::<ReelResult<Vec<_>>>()?;
        let n = parsed.len();
        parsed.try_into().map_err(|_| {
            ReelError::validation(format!(
                "expected {TRANSITION_COUNT} transition kinds, got {n}"
            ))
        })
    }
}

/// Spring presets, named by the motion they drive.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpringPresets {
    /// Logo pops and chart bars.
    pub logo: SpringConfig,
    /// Wordmark rise and the CTA button.
    pub wordmark: SpringConfig,
    /// Decorative rings.
    pub ring: SpringConfig,
    /// Pain-point rows.
    pub list: SpringConfig,
    /// Feature cards and the publish hub.
    pub card: SpringConfig,
    /// Article card and growth metrics.
    pub panel: SpringConfig,
    /// Content tags.
    pub chip: SpringConfig,
    /// Integration nodes.
    pub node: SpringConfig,
}

impl Default for SpringPresets {
    fn default() -> Self {
        Self {
            logo: SpringConfig::preset(14.0, 100.0),
            wordmark: SpringConfig::preset(16.0, 120.0),
            ring: SpringConfig::preset(20.0, 80.0),
            list: SpringConfig::preset(18.0, 120.0),
            card: SpringConfig::preset(16.0, 100.0),
            panel: SpringConfig::preset(18.0, 100.0),
            chip: SpringConfig::preset(14.0, 150.0),
            node: SpringConfig::preset(14.0, 120.0),
        }
    }
}

/// Stagger timing without the token unit.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaggerPreset {
    /// Delay between tokens in seconds.
    pub stagger_secs: f64,
    /// Per-token animation length in seconds.
    pub duration_secs: f64,
}

impl StaggerPreset {
    /// Attach a token unit.
    pub fn config(self, unit: TokenUnit) -> ReelResult<StaggerConfig> {
        StaggerConfig::new(unit, self.stagger_secs, self.duration_secs)
    }
}

/// Shared text reveal timings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaggerPresets {
    /// Per-character fade used by section headlines.
    pub chars: StaggerPreset,
    /// Per-character blur used by the wordmark and the CTA headline.
    pub blur: StaggerPreset,
}

impl Default for StaggerPresets {
    fn default() -> Self {
        Self {
            chars: StaggerPreset {
                stagger_secs: 0.02,
                duration_secs: 0.5,
            },
            blur: StaggerPreset {
                stagger_secs: 0.04,
                duration_secs: 0.6,
            },
        }
    }
}

/// Audio sources and levels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    /// Looped music bed.
    pub music: MusicConfig,
    /// Opening whoosh.
    pub whoosh: OneShotConfig,
    /// Chime when the CTA lands.
    pub chime: OneShotConfig,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music: MusicConfig::default(),
            whoosh: OneShotConfig {
                source: WHOOSH_URL.to_owned(),
                level: 0.25,
                start_frame: Some(5),
            },
            chime: OneShotConfig {
                source: CHIME_URL.to_owned(),
                level: 0.2,
                start_frame: None,
            },
        }
    }
}

impl AudioConfig {
    fn validate(&self) -> ReelResult<()> {
        let sources = [
            ("music", &self.music.source, self.music.level),
            ("whoosh", &self.whoosh.source, self.whoosh.level),
            ("chime", &self.chime.source, self.chime.level),
        ];
        for (id, source, level) in sources {
            if source.trim().is_empty() {
                return Err(ReelError::validation(format!(
                    "audio '{id}' source must be non-empty"
                )));
            }
            if !(0.0..=1.0).contains(&level) {
                return Err(ReelError::validation(format!(
                    "audio '{id}' level must be in [0, 1], got {level}"
                )));
            }
        }
        Ok(())
    }
}

/// Music bed settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MusicConfig {
    /// Source URL or path.
    pub source: String,
    /// Peak gain in `[0, 1]`.
    pub level: f64,
    /// Ramp up.
    pub fade_in: FadeWindow,
    /// Ramp down.
    pub fade_out: FadeWindow,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            source: MUSIC_URL.to_owned(),
            level: 0.35,
            fade_in: FadeWindow::from_start(0, 30),
            fade_out: FadeWindow::from_end(60, 10),
        }
    }
}

/// One-shot sound effect.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OneShotConfig {
    /// Source URL or path.
    pub source: String,
    /// Flat gain in `[0, 1]`.
    pub level: f64,
    /// Global start frame; `None` picks the reel's default cue point.
    #[serde(default)]
    pub start_frame: Option<u64>,
}

#[cfg(test)]
#[path = "../../tests/unit/promo/config.rs"]
mod tests;
