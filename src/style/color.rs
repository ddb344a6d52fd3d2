use crate::foundation::error::{FramesmithError, FramesmithResult};

/// Straight-alpha color with channels normalized to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);

    /// Build a color from normalized channels.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// `#RRGGBB` form of the color channels (alpha is dropped).
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Straight-alpha RGBA8, channels clamped.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}

/// Parse `#RRGGBB` (marker optional) into an opaque color.
///
/// Only exactly six hex digits are accepted; shorthand, alpha suffixes and stray characters
/// are rejected rather than guessed at.
pub fn hex_to_color(hex: &str) -> FramesmithResult<Color> {
    hex_to_color_alpha(hex, 1.0)
}

/// Parse `#RRGGBB` (marker optional) and attach `alpha`.
pub fn hex_to_color_alpha(hex: &str, alpha: f64) -> FramesmithResult<Color> {
    let s = hex.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FramesmithError::validation(format!(
            "hex color must be #RRGGBB, got \"{hex}\""
        )));
    }

    let channel = |range: std::ops::Range<usize>| -> FramesmithResult<f64> {
        u8::from_str_radix(&digits[range], 16)
            .map(|v| f64::from(v) / 255.0)
            .map_err(|e| FramesmithError::validation(format!("invalid hex byte in \"{hex}\": {e}")))
    };

    Ok(Color::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, alpha))
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
