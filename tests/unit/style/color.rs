use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn parses_with_and_without_marker() {
    let a = hex_to_color("#FF8000").unwrap();
    let b = hex_to_color("ff8000").unwrap();
    assert_eq!(a, b);
    assert!(approx(a.r, 1.0));
    assert!(approx(a.g, 128.0 / 255.0));
    assert!(approx(a.b, 0.0));
    assert!(approx(a.a, 1.0));
}

#[test]
fn alpha_variant_attaches_alpha() {
    let c = hex_to_color_alpha("#000000", 0.22).unwrap();
    assert_eq!(c, Color::rgba(0.0, 0.0, 0.0, 0.22));
}

#[test]
fn rejects_shorthand_and_stray_characters() {
    for bad in ["#FFF", "#FF00FF80", "#GG0000", "", "#", "red", "# FF0000"] {
        assert!(hex_to_color(bad).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn to_hex_is_uppercase_and_inverse_of_parse() {
    let c = hex_to_color("#dc2626").unwrap();
    assert_eq!(c.to_hex(), "#DC2626");
}

#[test]
fn rgba8_clamps_out_of_range_channels() {
    let c = Color::rgba(1.5, -0.2, 0.5, 1.0);
    assert_eq!(c.to_rgba8(), [255, 0, 128, 255]);
}
