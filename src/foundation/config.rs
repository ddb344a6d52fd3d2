use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::Size,
    error::{FramesmithError, FramesmithResult},
};

/// Layout constants used by the screen compiler.
///
/// Every field has a default, so a partial JSON object (or `{}`) is a valid configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    /// Size of every screen root.
    pub canvas: Size,
    /// Placement of screen roots on the page.
    pub grid: GridConfig,
    /// Horizontal content box inside a screen.
    pub content: ContentConfig,
    /// Vertical auto-stacking of sections.
    pub flow: FlowConfig,
    /// Screen heading/description block and frame chrome.
    pub chrome: ChromeConfig,
    /// Font families readied before text nodes are realized.
    pub fonts: FontConfig,
}

/// Grid used to place screen roots.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Screens per row.
    pub columns: u32,
    /// Gap between adjacent cells, both axes.
    pub gap: f64,
}

/// Horizontal content box inside a screen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Left inset of auto-placed sections.
    pub x: f64,
    /// Default section width.
    pub width: f64,
}

/// Vertical flow of auto-placed sections.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Cursor start, below the heading/description block.
    pub start_y: f64,
    /// Gap after a section that does not declare `spacing`.
    pub default_spacing: f64,
    /// Advance used when a node has no usable height.
    pub fallback_height: f64,
}

/// Screen frame chrome.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Screen corner radius when the screen does not set one.
    pub corner_radius: f64,
    /// Left inset of heading and description.
    pub heading_x: f64,
    /// Top of the heading text.
    pub heading_y: f64,
    /// Top of the description text.
    pub description_y: f64,
}

/// Font families, primary first.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Preferred family.
    pub primary: String,
    /// Family tried when the primary cannot be loaded.
    pub fallback: String,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(1440.0, 1024.0),
            grid: GridConfig::default(),
            content: ContentConfig::default(),
            flow: FlowConfig::default(),
            chrome: ChromeConfig::default(),
            fonts: FontConfig::default(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            gap: 120.0,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            x: 64.0,
            width: 1312.0,
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            start_y: 200.0,
            default_spacing: 32.0,
            fallback_height: 180.0,
        }
    }
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            corner_radius: 32.0,
            heading_x: 64.0,
            heading_y: 48.0,
            description_y: 120.0,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            primary: "Inter".to_owned(),
            fallback: "Roboto".to_owned(),
        }
    }
}

impl CompileConfig {
    /// Parse a configuration from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> FramesmithResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| FramesmithError::serde(format!("parse compile config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FramesmithResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FramesmithError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject configurations the compiler cannot lay out.
    pub fn validate(&self) -> FramesmithResult<()> {
        if self.grid.columns == 0 {
            return Err(FramesmithError::validation("grid.columns must be > 0"));
        }
        for (name, value) in [
            ("canvas.width", self.canvas.width),
            ("canvas.height", self.canvas.height),
            ("content.width", self.content.width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FramesmithError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("grid.gap", self.grid.gap),
            ("content.x", self.content.x),
            ("flow.start_y", self.flow.start_y),
            ("flow.default_spacing", self.flow.default_spacing),
            ("flow.fallback_height", self.flow.fallback_height),
            ("chrome.corner_radius", self.chrome.corner_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FramesmithError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.fonts.primary.trim().is_empty() {
            return Err(FramesmithError::validation("fonts.primary must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
