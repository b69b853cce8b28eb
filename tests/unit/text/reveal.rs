use super::*;
use crate::{scene::visual::NodeKind, text::tokenize::TokenUnit};

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn words(stagger: f64, duration: f64) -> StaggerConfig {
    StaggerConfig::new(TokenUnit::Word, stagger, duration).unwrap()
}

#[test]
fn tokens_are_hidden_before_their_delay() {
    let reveal = TextReveal::new(
        "AI-Powered SEO on Autopilot",
        words(0.08, 0.5),
        RevealStyle::Fade { rise_px: 12.0 },
        fps30(),
    )
    .unwrap()
    .starting_at(28);

    let v = reveal.token_visuals(27);
    assert!(v.iter().all(|t| t.opacity == 0.0 && t.translate_y == 12.0));

    // Second word starts at 28 + round(0.08 * 30) = 30.
    assert_eq!(reveal.tokens().tokens[1].start_delay_frames, 2);
    assert_eq!(reveal.token_progress(1, 30), 0.0);
    assert!(reveal.token_progress(1, 31) > 0.0);
}

#[test]
fn progress_reaches_one_after_duration_and_stays_in_range() {
    let reveal = TextReveal::new(
        "Outrank",
        StaggerConfig::new(TokenUnit::Char, 0.04, 0.6).unwrap(),
        RevealStyle::Blur { max_blur_px: 10.0 },
        fps30(),
    )
    .unwrap()
    .starting_at(10)
    .eased(Ease::OutCubic)
    .unwrap();

    for f in -20..120 {
        for i in 0..reveal.tokens().len() {
            let p = reveal.token_progress(i, f);
            assert!((0.0..=1.0).contains(&p), "token {i} frame {f}: {p}");
        }
    }
    let last = reveal.tokens().len() - 1;
    let last_delay = reveal.tokens().tokens[last].start_delay_frames as i64;
    assert_eq!(reveal.token_progress(last, 10 + last_delay + 18), 1.0);
    assert!(reveal.is_complete(10 + last_delay + 18));
    assert!(!reveal.is_complete(10 + last_delay + 17));

    let v = reveal.token_visuals(0)[0];
    assert_eq!(v.blur_px, 10.0);
    assert_eq!(v.opacity, 0.0);
}

#[test]
fn emphasis_springs_scale_into_place() {
    let style = RevealStyle::Emphasis {
        spring: SpringConfig::damped(12.0, 200.0).unwrap(),
        from_scale: 1.4,
    };
    let reveal = TextReveal::new("GET SEEN", words(0.1, 0.4), style, fps30()).unwrap();
    let early = reveal.token_visuals(0)[0];
    assert_eq!(early.scale, 1.4);
    assert_eq!(early.opacity, 0.0);
    let late = reveal.token_visuals(300)[1];
    assert_eq!(late, TokenVisual::REVEALED);
}

#[test]
fn zero_duration_snaps_on_start() {
    let reveal = TextReveal::new(
        "snap",
        words(0.0, 0.0),
        RevealStyle::Fade { rise_px: 5.0 },
        fps30(),
    )
    .unwrap();
    assert_eq!(reveal.token_progress(0, -1), 0.0);
    assert_eq!(reveal.token_progress(0, 0), 1.0);
}

#[test]
fn render_lays_out_lines_and_ids() {
    let reveal = TextReveal::new(
        "Start outranking\nyour competition",
        words(0.04, 0.6),
        RevealStyle::Blur { max_blur_px: 8.0 },
        fps30(),
    )
    .unwrap()
    .styled(TextStyle::new(40.0, 800));

    let node = reveal.render("cta.headline", 200);
    assert_eq!(node.id, "cta.headline");
    assert_eq!(node.children.len(), 4);
    assert_eq!(node.children[3].id, "cta.headline.3");
    let y0 = node.children[0].transform.translate.y;
    let y2 = node.children[2].transform.translate.y;
    assert!(y2 > y0);
    assert_eq!(node.children[0].transform.translate.y, node.children[1].transform.translate.y);
    assert!(node.children[0].transform.translate.x < node.children[1].transform.translate.x);
    assert!(matches!(node.children[0].kind, NodeKind::Text { weight: 800, .. }));
    assert!(node.children.iter().all(|c| c.opacity == 1.0 && c.blur_px == 0.0));
}

#[test]
fn single_token_is_centered() {
    let reveal = TextReveal::new(
        "outrank.so",
        words(0.05, 0.4),
        RevealStyle::Fade { rise_px: 0.0 },
        fps30(),
    )
    .unwrap();
    let node = reveal.render("url", 100);
    assert_eq!(node.children[0].transform.translate.x, 0.0);
    assert_eq!(node.children[0].transform.translate.y, 0.0);
}

#[test]
fn rejects_invalid_style() {
    let r = TextReveal::new(
        "x",
        words(0.1, 0.5),
        RevealStyle::Blur { max_blur_px: -1.0 },
        fps30(),
    );
    assert!(r.is_err());
}

#[test]
fn text_width_counts_glyphs_and_spaces() {
    assert_eq!(text_width("", 20.0), 0.0);
    assert!((text_width("ab c", 10.0) - (3.0 * 5.6 + 2.8)).abs() < 1e-9);
}
