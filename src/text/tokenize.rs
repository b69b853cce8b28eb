use crate::foundation::{
    core::Fps,
    error::{ReelError, ReelResult},
};

/// Granularity of a staggered text reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenUnit {
    /// Every non-whitespace character.
    Char,
    /// Every whitespace-separated word.
    Word,
    /// `n` consecutive words per token, inner whitespace kept in the token.
    Group(usize),
}

/// One revealable piece of text.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// Position in reveal order.
    pub index: usize,
    /// Visible text (never whitespace-only).
    pub text: String,
    /// Whitespace between the previous token and this one.
    pub gap_before: String,
    /// Frames after the reveal start at which this token begins animating.
    pub start_delay_frames: u64,
}

/// Tokens of one text plus the whitespace that trails the last token.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TokenStream {
    /// Tokens in reveal order.
    pub tokens: Vec<Token>,
    /// Whitespace after the last token.
    pub trailing: String,
}

impl TokenStream {
    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// `true` when the text had no visible characters.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in reveal order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Rebuild the original text exactly.
    pub fn reassemble(&self) -> String {
        let mut out = String::new();
        for t in &self.tokens {
            out.push_str(&t.gap_before);
            out.push_str(&t.text);
        }
        out.push_str(&self.trailing);
        out
    }

    /// Largest start delay, or 0 when empty.
    pub fn last_delay_frames(&self) -> u64 {
        self.tokens
            .iter()
            .map(|t| t.start_delay_frames)
            .max()
            .unwrap_or(0)
    }
}

/// Split `text` into tokens with zero delays.
pub fn tokenize(text: &str, unit: TokenUnit) -> TokenStream {
    let (pieces, trailing) = match unit {
        TokenUnit::Char => split_chars(text),
        TokenUnit::Word => split_words(text),
        TokenUnit::Group(n) => {
            let (words, trailing) = split_words(text);
            (group_words(words, n.max(1)), trailing)
        }
    };
    let tokens = pieces
        .into_iter()
        .enumerate()
        .map(|(index, (gap_before, text))| Token {
            index,
            text,
            gap_before,
            start_delay_frames: 0,
        })
        .collect();
    TokenStream { tokens, trailing }
}

fn split_chars(text: &str) -> (Vec<(String, String)>, String) {
    let mut out = Vec::new();
    let mut gap = String::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            gap.push(ch);
        } else {
            out.push((std::mem::take(&mut gap), ch.to_string()));
        }
    }
    (out, gap)
}

fn split_words(text: &str) -> (Vec<(String, String)>, String) {
    let mut out = Vec::new();
    let mut gap = String::new();
    let mut word = String::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !word.is_empty() {
                out.push((std::mem::take(&mut gap), std::mem::take(&mut word)));
            }
            gap.push(ch);
        } else {
            word.push(ch);
        }
    }
    if !word.is_empty() {
        out.push((std::mem::take(&mut gap), word));
    }
    (out, gap)
}

fn group_words(words: Vec<(String, String)>, n: usize) -> Vec<(String, String)> {
    words
        .chunks(n)
        .map(|chunk| {
            let gap = chunk[0].0.clone();
            let mut text = chunk[0].1.clone();
            for (g, w) in &chunk[1..] {
                text.push_str(g);
                text.push_str(w);
            }
            (gap, text)
        })
        .collect()
}

/// Per-token timing of a staggered reveal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaggerConfig {
    /// Token granularity.
    pub unit: TokenUnit,
    /// Delay between consecutive tokens, in seconds.
    pub stagger_secs: f64,
    /// Animation length of a single token, in seconds.
    pub duration_secs: f64,
}

impl StaggerConfig {
    /// Build and validate.
    pub fn new(unit: TokenUnit, stagger_secs: f64, duration_secs: f64) -> ReelResult<Self> {
        let cfg = Self {
            unit,
            stagger_secs,
            duration_secs,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject negative / non-finite times and empty groups.
    pub fn validate(&self) -> ReelResult<()> {
        if !self.stagger_secs.is_finite() || self.stagger_secs < 0.0 {
            return Err(ReelError::validation("stagger must be finite and >= 0"));
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(ReelError::validation(
                "token duration must be finite and >= 0",
            ));
        }
        if self.unit == TokenUnit::Group(0) {
            return Err(ReelError::validation("token group size must be >= 1"));
        }
        Ok(())
    }

    /// Tokenize `text` and assign `round(stagger · index · fps)` delays.
    pub fn tokens(&self, text: &str, fps: Fps) -> TokenStream {
        let mut stream = tokenize(text, self.unit);
        for t in &mut stream.tokens {
            t.start_delay_frames = fps.secs_to_frames_round(self.stagger_secs * t.index as f64);
        }
        stream
    }

    /// Per-token animation length in (fractional) frames.
    pub fn duration_frames(&self, fps: Fps) -> f64 {
        fps.secs_to_frames(self.duration_secs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/tokenize.rs"]
mod tests;
