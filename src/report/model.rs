use std::{fs::File, io::Read, path::Path};

use serde_json::{Map, Value};

use crate::{
    foundation::error::{FramesmithError, FramesmithResult},
    report::lenient,
};

/// Project name used when a payload carries none.
pub const DEFAULT_PROJECT_NAME: &str = "Generated UI";

#[derive(Clone, Debug, Default, serde::Deserialize)]
/// A design report: screens, style tokens and navigation edges.
///
/// Reports are read-only input. Decoding is lenient (see [`Report::from_payload`]); a report is
/// never rejected for a missing or wrongly typed optional field.
pub struct Report {
    /// Project name; also names the output page.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub project_name: Option<String>,
    /// Screens in document order; the order drives grid placement.
    #[serde(default, deserialize_with = "lenient::vec_skip_invalid")]
    pub screens: Vec<Screen>,
    /// Global style tokens.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub styles: StyleTokens,
    /// Navigation edges in document order.
    #[serde(default, deserialize_with = "lenient::vec_skip_invalid")]
    pub navigation_flow: Vec<NavigationEdge>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
/// Report-wide palette overrides and theme key.
pub struct StyleTokens {
    /// Explicit colors; each overrides the theme token of the same name.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub colors: ColorTokens,
    /// Theme key; see [`crate::Theme::from_key`].
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub theme: Option<String>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
/// Explicit palette colors.
pub struct ColorTokens {
    /// Surface color.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub surface: Option<String>,
    /// Accent color.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub accent: Option<String>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
/// One screen of the report.
pub struct Screen {
    /// Unique key for navigation resolution.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    /// Heading text.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    /// Heading font size.
    #[serde(default, rename = "titleSize", deserialize_with = "lenient::opt_f64")]
    pub title_size: Option<f64>,
    /// Description text under the heading.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    /// Screen fill color.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub background: Option<String>,
    /// Screen corner radius.
    #[serde(default, rename = "cornerRadius", deserialize_with = "lenient::opt_f64")]
    pub corner_radius: Option<f64>,
    /// Sections, from either `layout.sections` or a bare `layout` array.
    #[serde(default, rename = "layout", deserialize_with = "layout_sections")]
    pub sections: Vec<Section>,
    /// Screen-level interactions, applied to every section node.
    #[serde(default, deserialize_with = "lenient::vec_skip_invalid")]
    pub interactions: Vec<Interaction>,
}

fn layout_sections<'de, D>(d: D) -> Result<Vec<Section>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = <Option<Value> as serde::Deserialize>::deserialize(d)?;
    Ok(match v {
        Some(Value::Object(mut obj)) => lenient::elements(obj.remove("sections")),
        Some(arr @ Value::Array(_)) => lenient::elements(Some(arr)),
        _ => Vec::new(),
    })
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
/// One declarative unit of screen content.
///
/// Only `component` selects behaviour; the remaining fields are read by the builders that
/// understand them and ignored by the rest.
pub struct Section {
    /// Component type tag.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub component: Option<String>,
    /// Primary text.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    /// Primary text font size.
    #[serde(default, rename = "titleSize", deserialize_with = "lenient::opt_f64")]
    pub title_size: Option<f64>,
    /// Secondary content text (bottom sheets).
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub total: Option<String>,
    /// Node height.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub height: Option<f64>,
    /// Node corner radius.
    #[serde(default, rename = "cornerRadius", deserialize_with = "lenient::opt_f64")]
    pub corner_radius: Option<f64>,
    /// Gradient string, e.g. `linear #AABBCC → #112233`.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub gradient: Option<String>,
    /// Background color, or a gradient string for cards and sheets.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub background: Option<String>,
    /// Explicit text color.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub text_color: Option<String>,
    /// Chip labels.
    #[serde(default, deserialize_with = "lenient::opt_string_list")]
    pub items: Option<Vec<String>>,
    /// Index of the active chip.
    #[serde(default, rename = "activeIndex", deserialize_with = "lenient::opt_i64")]
    pub active_index: Option<i64>,
    /// Active chip fill.
    #[serde(default, rename = "activeColor", deserialize_with = "lenient::opt_string")]
    pub active_color: Option<String>,
    /// Inactive chip fill.
    #[serde(default, rename = "inactiveColor", deserialize_with = "lenient::opt_string")]
    pub inactive_color: Option<String>,
    /// Chip width.
    #[serde(default, rename = "chipWidth", deserialize_with = "lenient::opt_f64")]
    pub chip_width: Option<f64>,
    /// Chip height.
    #[serde(default, rename = "chipHeight", deserialize_with = "lenient::opt_f64")]
    pub chip_height: Option<f64>,
    /// Horizontal gap between chips.
    #[serde(default, rename = "chipGap", deserialize_with = "lenient::opt_f64")]
    pub chip_gap: Option<f64>,
    /// Number of event card columns.
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub grid_columns: Option<u32>,
    /// Event card height.
    #[serde(default, rename = "cardHeight", deserialize_with = "lenient::opt_f64")]
    pub card_height: Option<f64>,
    /// Event card text.
    #[serde(default, rename = "cardTitle", deserialize_with = "lenient::opt_string")]
    pub card_title: Option<String>,
    /// Drag-handle color (bottom sheets).
    #[serde(default, rename = "handleColor", deserialize_with = "lenient::opt_string")]
    pub handle_color: Option<String>,
    /// Floating action button diameter.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub size: Option<f64>,
    /// Floating action button glyph.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub icon: Option<String>,
    /// Glyph font size.
    #[serde(default, rename = "iconSize", deserialize_with = "lenient::opt_f64")]
    pub icon_size: Option<f64>,
    /// Explicit horizontal position; disables auto-placement on this axis.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub x: Option<f64>,
    /// Explicit vertical position; disables auto-placement on this axis.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub y: Option<f64>,
    /// Gap after this section in the vertical flow.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub spacing: Option<f64>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
/// A screen-level interaction.
pub struct Interaction {
    /// `toggle` and `overlay` add a shadow affordance; other actions are no-ops.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub action: Option<String>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
/// A navigation edge between two screens.
pub struct NavigationEdge {
    /// Source screen name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub from_screen: Option<String>,
    /// Destination screen name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub to_screen: Option<String>,
    /// Case-insensitive substring locating the trigger node.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub trigger_component: Option<String>,
    /// Trigger and transition keywords.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub interaction: EdgeInteraction,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
/// Trigger/transition keywords of a navigation edge.
pub struct EdgeInteraction {
    /// `onHover`, or anything else for click.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub trigger: Option<String>,
    /// Transition keyword; see [`crate::resolve_transition`].
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub transition: Option<String>,
}

impl Report {
    /// Normalize a host payload into a report.
    ///
    /// `None` or a falsy value (`null`, `false`, `0`, `""`) is
    /// [`FramesmithError::MissingPayload`]. Top-level fields win; a
    /// nested `report` object (as returned by a "latest report" endpoint) fills whatever the top
    /// level lacks. Screen emptiness is checked by the compiler, not here.
    pub fn from_payload(payload: Option<Value>) -> FramesmithResult<Self> {
        let payload = match payload {
            Some(v) if !is_falsy(&v) => v,
            _ => return Err(FramesmithError::MissingPayload),
        };

        let nested = payload.get("report").filter(|r| r.is_object());
        let lookup = |key: &str, accept: fn(&Value) -> bool| -> Option<Value> {
            payload
                .get(key)
                .filter(|v| accept(v))
                .or_else(|| nested.and_then(|r| r.get(key)).filter(|v| accept(v)))
                .cloned()
        };

        let mut obj = Map::new();
        obj.insert(
            "project_name".to_owned(),
            lookup("project_name", is_non_empty_string)
                .unwrap_or_else(|| Value::String(DEFAULT_PROJECT_NAME.to_owned())),
        );
        if let Some(screens) = lookup("screens", Value::is_array) {
            obj.insert("screens".to_owned(), screens);
        }
        if let Some(styles) = lookup("styles", Value::is_object) {
            obj.insert("styles".to_owned(), styles);
        }
        if let Some(flow) = lookup("navigation_flow", Value::is_array) {
            obj.insert("navigation_flow".to_owned(), flow);
        }

        serde_json::from_value(Value::Object(obj))
            .map_err(|e| FramesmithError::serde(format!("decode report payload: {e}")))
    }

    /// Parse a report payload from a JSON reader. Blank input is a missing payload.
    pub fn from_reader<R: Read>(mut r: R) -> FramesmithResult<Self> {
        let mut text = String::new();
        r.read_to_string(&mut text)
            .map_err(|e| FramesmithError::Other(anyhow::Error::new(e).context("read report")))?;
        if text.trim().is_empty() {
            return Err(FramesmithError::MissingPayload);
        }
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| FramesmithError::serde(format!("parse report JSON: {e}")))?;
        Self::from_payload(Some(value))
    }

    /// Parse a report payload from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FramesmithResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FramesmithError::validation(format!("open report JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(f)
    }
}

fn is_falsy(v: &Value) -> bool {
    match v {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn is_non_empty_string(v: &Value) -> bool {
    v.as_str().is_some_and(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/report/model.rs"]
mod tests;
