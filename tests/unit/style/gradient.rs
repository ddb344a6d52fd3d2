use super::*;

fn hexes(stops: [Color; 2]) -> [String; 2] {
    [stops[0].to_hex(), stops[1].to_hex()]
}

#[test]
fn first_two_colors_become_stops_in_order() {
    let stops = parse_gradient("linear #AABBCC → #112233");
    assert_eq!(hexes(stops), ["#AABBCC", "#112233"]);
}

#[test]
fn missing_colors_use_fallback_pair() {
    let stops = parse_gradient("no colors here");
    assert_eq!(hexes(stops), ["#FF6B6B", "#4ECDC4"]);
}

#[test]
fn single_color_still_yields_two_fallback_stops() {
    let stops = parse_gradient("linear #123456");
    assert_eq!(hexes(stops), ["#FF6B6B", "#4ECDC4"]);
}

#[test]
fn extra_colors_are_ignored() {
    let stops = parse_gradient(
        "conic-gradient(from 0deg, #0ea5e9, #22c55e, #f97316, #0ea5e9)",
    );
    assert_eq!(hexes(stops), ["#0EA5E9", "#22C55E"]);
}

#[test]
fn css_gradient_syntax_is_scanned() {
    let stops = parse_gradient("linear-gradient(135deg, #6366f1, #ec4899)");
    assert_eq!(hexes(stops), ["#6366F1", "#EC4899"]);
}

#[test]
fn scan_skips_short_and_truncated_values() {
    assert_eq!(scan_hex_colors("#FFF #12345 #ABCDEF"), vec!["#ABCDEF"]);
    assert!(scan_hex_colors("#ABCDE").is_empty());
}

#[test]
fn linear_detection_is_substring_based() {
    assert!(is_linear_gradient("linear #000000 → #FFFFFF"));
    assert!(is_linear_gradient("linear-gradient(90deg, #000000, #FFFFFF)"));
    assert!(!is_linear_gradient("#FFFFFF"));
}

#[test]
fn scan_finds_adjacent_and_embedded_colors() {
    assert_eq!(
        scan_hex_colors("a#abcdef#1234567b"),
        vec!["#abcdef", "#123456"]
    );
}
