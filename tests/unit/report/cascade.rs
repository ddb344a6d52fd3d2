use super::*;

#[test]
fn text_skips_absent_and_empty() {
    assert_eq!(text(&[None, Some(""), Some("b"), Some("c")], "z"), "b");
    assert_eq!(text(&[None, Some("")], "z"), "z");
}

#[test]
fn size_skips_zero_negative_and_nan() {
    assert_eq!(size(&[Some(0.0), Some(-4.0), Some(f64::NAN), Some(12.0)], 1.0), 12.0);
    assert_eq!(size(&[None], 260.0), 260.0);
}

#[test]
fn color_skips_malformed_values() {
    let c = color(&[Some("linear-gradient(...)"), Some("#FFF"), Some("#112233")], Color::BLACK);
    assert_eq!(c.to_hex(), "#112233");
    assert_eq!(color(&[Some("nope")], Color::WHITE), Color::WHITE);
}

#[test]
fn is_set_treats_empty_as_unset() {
    assert!(is_set(Some("#FFFFFF")));
    assert!(!is_set(Some("")));
    assert!(!is_set(None));
}
