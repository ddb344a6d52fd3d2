//! Defaulting rules shared by every builder.
//!
//! A candidate is "set" when it is present and usable: non-empty for strings, finite and
//! positive for sizes, a valid `#RRGGBB` for colors. The first set candidate wins.

use crate::style::color::{Color, hex_to_color};

/// First non-empty string, else `fallback`.
pub(crate) fn text<'a>(candidates: &[Option<&'a str>], fallback: &'a str) -> &'a str {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|s| !s.is_empty())
        .unwrap_or(fallback)
}

/// First finite, strictly positive size, else `fallback`.
pub(crate) fn size(candidates: &[Option<f64>], fallback: f64) -> f64 {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(fallback)
}

/// First candidate that parses as a color, else `fallback`.
///
/// Malformed values are skipped with a warning instead of aborting the compile.
pub(crate) fn color(candidates: &[Option<&str>], fallback: Color) -> Color {
    for candidate in candidates.iter().flatten() {
        if candidate.is_empty() {
            continue;
        }
        match hex_to_color(candidate) {
            Ok(c) => return c,
            Err(err) => tracing::warn!(value = %candidate, %err, "ignoring malformed color"),
        }
    }
    fallback
}

/// Whether an optional string is present and non-empty (a "truthy" value).
pub(crate) fn is_set(v: Option<&str>) -> bool {
    v.is_some_and(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/report/cascade.rs"]
mod tests;
