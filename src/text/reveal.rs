use crate::{
    animation::{
        ease::Ease,
        interpolate::lerp,
        spring::{SpringConfig, spring_progress},
    },
    foundation::{
        core::Fps,
        error::{ReelError, ReelResult},
    },
    scene::{color::Color, visual::VisualNode},
    text::tokenize::{StaggerConfig, TokenStream},
};

/// How a token's reveal progress is turned into its visual state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RevealStyle {
    /// Fade in while rising by `rise_px`.
    Fade {
        /// Vertical offset at progress 0.
        rise_px: f64,
    },
    /// Fade in while un-blurring from `max_blur_px`.
    Blur {
        /// Blur radius at progress 0.
        max_blur_px: f64,
    },
    /// Spring-driven pop from `from_scale` to 1.
    Emphasis {
        /// Spring driving each token.
        spring: SpringConfig,
        /// Scale at progress 0.
        from_scale: f64,
    },
}

impl RevealStyle {
    /// Check style parameters.
    pub fn validate(&self) -> ReelResult<()> {
        let ok = match *self {
            Self::Fade { rise_px } => rise_px.is_finite(),
            Self::Blur { max_blur_px } => max_blur_px.is_finite() && max_blur_px >= 0.0,
            Self::Emphasis { from_scale, .. } => from_scale.is_finite() && from_scale >= 0.0,
        };
        if ok {
            Ok(())
        } else {
            Err(ReelError::validation(format!(
                "invalid reveal style parameters: {self:?}"
            )))
        }
    }

    /// Progress of a token `elapsed` frames after its own start.
    ///
    /// Always in `[0, 1]`; negative `elapsed` is 0.
    pub fn progress(&self, elapsed: i64, duration_frames: f64, ease: Ease, fps: Fps) -> f64 {
        if elapsed < 0 {
            return 0.0;
        }
        match self {
            Self::Fade { .. } | Self::Blur { .. } => {
                if duration_frames <= 0.0 {
                    return 1.0;
                }
                ease.apply(elapsed as f64 / duration_frames)
            }
            Self::Emphasis { spring, .. } => {
                spring_progress(elapsed, fps, 0, spring).clamp(0.0, 1.0)
            }
        }
    }

    /// Visual state at progress `p`.
    pub fn visual(&self, p: f64) -> TokenVisual {
        let p = p.clamp(0.0, 1.0);
        match *self {
            Self::Fade { rise_px } => TokenVisual {
                opacity: p,
                translate_y: rise_px * (1.0 - p),
                ..TokenVisual::REVEALED
            },
            Self::Blur { max_blur_px } => TokenVisual {
                opacity: p,
                blur_px: max_blur_px * (1.0 - p),
                ..TokenVisual::REVEALED
            },
            Self::Emphasis { from_scale, .. } => TokenVisual {
                opacity: p,
                scale: lerp(from_scale, 1.0, p),
                ..TokenVisual::REVEALED
            },
        }
    }
}

/// Per-token visual state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TokenVisual {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Blur radius in pixels.
    pub blur_px: f64,
    /// Vertical offset in pixels.
    pub translate_y: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl TokenVisual {
    /// Fully revealed token.
    pub const REVEALED: Self = Self {
        opacity: 1.0,
        blur_px: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };
}

/// Font parameters for revealed text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// CSS-style weight.
    pub weight: u16,
    /// Fill color.
    pub color: Color,
}

impl TextStyle {
    /// Style with the given size and weight, white fill.
    pub fn new(font_size: f64, weight: u16) -> Self {
        Self {
            font_size,
            weight,
            color: Color::WHITE,
        }
    }

    /// Replace the fill.
    pub fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

const CHAR_ADVANCE_EM: f64 = 0.56;
const SPACE_ADVANCE_EM: f64 = 0.28;
const LINE_HEIGHT_EM: f64 = 1.15;

/// A staggered text reveal: tokens, timing and style, resolved once for a frame rate.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextReveal {
    text: String,
    stream: TokenStream,
    stagger: StaggerConfig,
    style: RevealStyle,
    start_frame: i64,
    ease: Ease,
    text_style: TextStyle,
    fps: Fps,
}

impl TextReveal {
    /// Tokenize and time `text`.
    pub fn new(
        text: impl Into<String>,
        stagger: StaggerConfig,
        style: RevealStyle,
        fps: Fps,
    ) -> ReelResult<Self> {
        stagger.validate()?;
        style.validate()?;
        let text = text.into();
        let stream = stagger.tokens(&text, fps);
        Ok(Self {
            text,
            stream,
            stagger,
            style,
            start_frame: 0,
            ease: Ease::Linear,
            text_style: TextStyle::new(48.0, 700),
            fps,
        })
    }

    /// Start the first token at `frame` (segment-local).
    pub fn starting_at(mut self, frame: i64) -> Self {
        self.start_frame = frame;
        self
    }

    /// Easing for `Fade` / `Blur` progress.
    pub fn eased(mut self, ease: Ease) -> ReelResult<Self> {
        ease.validate()?;
        self.ease = ease;
        Ok(self)
    }

    /// Font parameters used by [`TextReveal::render`].
    pub fn styled(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    /// Source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Timed tokens.
    pub fn tokens(&self) -> &TokenStream {
        &self.stream
    }

    /// Progress of token `index` at local `frame`.
    pub fn token_progress(&self, index: usize, frame: i64) -> f64 {
        let Some(token) = self.stream.tokens.get(index) else {
            return 0.0;
        };
        let elapsed = frame
            .saturating_sub(self.start_frame)
            .saturating_sub(token.start_delay_frames as i64);
        self.style.progress(
            elapsed,
            self.stagger.duration_frames(self.fps),
            self.ease,
            self.fps,
        )
    }

    /// Visual state of every token at local `frame`.
    pub fn token_visuals(&self, frame: i64) -> Vec<TokenVisual> {
        (0..self.stream.len())
            .map(|i| self.style.visual(self.token_progress(i, frame)))
            .collect()
    }

    /// `true` once every token has reached progress 1.
    pub fn is_complete(&self, frame: i64) -> bool {
        (0..self.stream.len()).all(|i| self.token_progress(i, frame) >= 1.0)
    }

    /// Render as a group of centered text nodes, lines broken at `\n`.
    pub fn render(&self, id: &str, frame: i64) -> VisualNode {
        let size = self.text_style.font_size;
        let positions = layout(&self.stream, size);
        let children = self
            .stream
            .iter()
            .zip(positions)
            .zip(self.token_visuals(frame))
            .map(|((token, (x, y)), v)| {
                VisualNode::text(
                    format!("{id}.{}", token.index),
                    token.text.clone(),
                    size,
                    self.text_style.color,
                )
                .weight(self.text_style.weight)
                .translated(x, y + v.translate_y)
                .scaled(v.scale)
                .with_opacity(v.opacity)
                .blurred(v.blur_px)
            })
            .collect();
        VisualNode::group(id, children)
    }
}

/// Approximate advance width of a single line of `text` at `font_size`.
pub fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars()
        .map(|c| {
            if c.is_whitespace() {
                SPACE_ADVANCE_EM
            } else {
                CHAR_ADVANCE_EM
            }
        })
        .sum::<f64>()
        * font_size
}

/// Token centers with every line centered on the origin.
fn layout(stream: &TokenStream, font_size: f64) -> Vec<(f64, f64)> {
    let width_of = |s: &str| text_width(s, font_size);

    // (line, x_start, width) per token.
    let mut placed = Vec::with_capacity(stream.len());
    let mut line_widths = vec![0.0f64];
    for (i, token) in stream.iter().enumerate() {
        let breaks = token.gap_before.matches('\n').count();
        let mut line = line_widths.len() - 1;
        if breaks > 0 && i > 0 {
            for _ in 0..breaks {
                line_widths.push(0.0);
            }
            line = line_widths.len() - 1;
        } else if i > 0 {
            line_widths[line] += width_of(&token.gap_before);
        }
        let w = width_of(&token.text);
        placed.push((line, line_widths[line], w));
        line_widths[line] += w;
    }

    let line_h = font_size * LINE_HEIGHT_EM;
    let top = -(line_widths.len() as f64 - 1.0) * line_h / 2.0;
    placed
        .into_iter()
        .map(|(line, x0, w)| {
            let x = x0 - line_widths[line] / 2.0 + w / 2.0;
            (x, top + line as f64 * line_h)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/reveal.rs"]
mod tests;
