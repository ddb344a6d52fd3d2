use std::sync::OnceLock;

use regex::Regex;

use crate::style::color::{Color, hex_to_color};

static HEX_COLOR: OnceLock<Option<Regex>> = OnceLock::new();

/// Stops used when a gradient string carries fewer than two colors.
pub const FALLBACK_GRADIENT: [&str; 2] = ["#FF6B6B", "#4ECDC4"];

/// Extract a two-stop gradient from a free-form style string.
///
/// The first two `#RRGGBB` occurrences become the stops, in order. Anything with fewer than two
/// yields [`FALLBACK_GRADIENT`]; the result always has exactly two stops.
pub fn parse_gradient(source: &str) -> [Color; 2] {
    let found = scan_hex_colors(source);
    let [a, b] = match found.as_slice() {
        [a, b, ..] => [*a, *b],
        _ => FALLBACK_GRADIENT,
    };
    [stop(a), stop(b)]
}

/// Whether a background string describes a linear gradient rather than a flat color.
pub fn is_linear_gradient(source: &str) -> bool {
    source.contains("linear")
}

/// All `#RRGGBB` substrings, left to right, non-overlapping.
pub fn scan_hex_colors(source: &str) -> Vec<&str> {
    let re = HEX_COLOR.get_or_init(|| Regex::new("#[A-Fa-f0-9]{6}").ok());
    match re {
        Some(re) => re.find_iter(source).map(|m| m.as_str()).collect(),
        None => Vec::new(),
    }
}

fn stop(hex: &str) -> Color {
    // Scanned substrings are always six hex digits behind a marker.
    hex_to_color(hex).unwrap_or(Color::BLACK)
}

#[cfg(test)]
#[path = "../../tests/unit/style/gradient.rs"]
mod tests;
