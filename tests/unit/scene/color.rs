use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Color = serde_json::from_value(json!("0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - 128.0 / 255.0).abs() < 1e-9);

    assert!(Color::hex("#12345").is_err());
    assert!(Color::hex("#zz0000").is_err());
}

#[test]
fn parses_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));

    assert!(serde_json::from_value::<Color>(json!([0.1, 0.2])).is_err());
}

#[test]
fn premultiplies_on_quantize() {
    let px = Color::hex("#915DFF").unwrap().with_alpha(0.5).to_rgba8_premul();
    assert_eq!(px.a, 128);
    assert_eq!(px.b, 128);
    assert!((72..=73).contains(&px.r));
    let px = Color::rgba(1.0, 0.0, 0.0, 0.0).to_rgba8_premul();
    assert_eq!((px.r, px.a), (0, 0));
}

#[test]
fn fade_scales_alpha() {
    let c = Color::rgb8(145, 93, 255, 0.2).fade(0.5);
    assert!((c.a - 0.1).abs() < 1e-12);
}
