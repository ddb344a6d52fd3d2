use crate::{
    foundation::core::{Geometry, Vec2},
    style::color::Color,
};

/// Stable identifier of a node within one compiled document.
///
/// Ids are assigned in pre-order over the forest, so compiling the same report twice yields the
/// same ids.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
)]
pub struct NodeId(pub u32);

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One node of the output tree.
pub struct VisualNode {
    /// Document-wide identifier; assigned once the forest is complete.
    pub id: NodeId,
    /// Layer name; trigger lookup matches against it.
    pub name: String,
    /// Frame or text payload.
    pub kind: NodeKind,
    /// Position relative to the parent, and size.
    pub geometry: Geometry,
    /// Uniform corner radius.
    pub corner_radius: f64,
    /// Paints, bottom to top. Empty means transparent.
    pub fills: Vec<Fill>,
    /// Outline paints.
    pub strokes: Vec<Stroke>,
    /// Shadow effects, in application order.
    pub effects: Vec<Effect>,
    /// Layer opacity.
    pub opacity: f64,
    /// Children, in paint order.
    pub children: Vec<VisualNode>,
    /// At most one attached prototype reaction.
    pub reaction: Option<Reaction>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Node payload.
pub enum NodeKind {
    /// Container with fills and children.
    Frame,
    /// Text run.
    Text(TextContent),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Text properties of a text node.
pub struct TextContent {
    /// Text to display.
    pub characters: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Font weight style.
    pub weight: FontWeight,
    /// Fill color of the glyphs.
    pub color: Color,
    /// Horizontal alignment inside the text box.
    pub align_h: TextAlign,
    /// Vertical alignment inside the text box.
    pub align_v: TextAlign,
    /// Fixed line height in pixels, if set.
    pub line_height: Option<f64>,
    /// Whether the host sizes the box to its content.
    pub sizing: TextSizing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Font style within the configured family.
pub enum FontWeight {
    /// Regular style.
    Regular,
    /// Bold style.
    Bold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Text alignment on one axis.
pub enum TextAlign {
    /// Left or top.
    #[default]
    Start,
    /// Centered.
    Center,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Text box sizing.
pub enum TextSizing {
    /// The host grows the box to fit the text; geometry size is zero.
    #[default]
    Auto,
    /// The box has the geometry size.
    Fixed,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// A paint.
pub enum Fill {
    /// Flat color.
    Solid {
        /// Paint color.
        color: Color,
        /// Paint opacity.
        opacity: f64,
    },
    /// Two-stop linear gradient.
    LinearGradient {
        /// Stops at positions 0 and 1.
        stops: [GradientStop; 2],
        /// 2x3 gradient transform; identity runs left to right.
        transform: [[f64; 3]; 2],
    },
}

/// Identity gradient transform (left to right).
pub const IDENTITY_GRADIENT_TRANSFORM: [[f64; 3]; 2] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

impl Fill {
    /// Opaque flat paint.
    pub fn solid(color: Color) -> Self {
        Self::Solid {
            color,
            opacity: 1.0,
        }
    }

    /// Left-to-right gradient between two colors.
    pub fn linear(stops: [Color; 2]) -> Self {
        Self::LinearGradient {
            stops: [
                GradientStop {
                    position: 0.0,
                    color: stops[0],
                },
                GradientStop {
                    position: 1.0,
                    color: stops[1],
                },
            ],
            transform: IDENTITY_GRADIENT_TRANSFORM,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Gradient stop.
pub struct GradientStop {
    /// Position along the gradient axis in `[0, 1]`.
    pub position: f64,
    /// Stop color.
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Outline paint.
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke opacity.
    pub opacity: f64,
    /// Stroke weight in pixels.
    pub weight: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Visual effect.
pub enum Effect {
    /// Drop shadow with normal blending.
    DropShadow {
        /// Shadow color including alpha.
        color: Color,
        /// Shadow offset.
        offset: Vec2,
        /// Blur radius.
        radius: f64,
        /// Whether the effect is shown.
        visible: bool,
    },
}

impl Effect {
    /// Visible drop shadow.
    pub fn drop_shadow(color: Color, offset: Vec2, radius: f64) -> Self {
        Self::DropShadow {
            color,
            offset,
            radius,
            visible: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// What starts a reaction.
pub enum Trigger {
    /// Click or tap.
    OnClick,
    /// Pointer hover.
    OnHover,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Direction of a slide transition.
pub enum SlideDirection {
    /// Enters from the left.
    Left,
    /// Enters from the right.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Directional transition descriptor.
pub enum Transition {
    /// Destination slides in.
    SlideIn {
        /// Entry side.
        direction: SlideDirection,
    },
    /// Cross-dissolve.
    Dissolve,
    /// Destination pushes the source out.
    Push,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Navigation kind of a reaction.
pub enum Navigation {
    /// Replace the current screen with the destination.
    #[default]
    Navigate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// A trigger→destination navigation attached to a node.
pub struct Reaction {
    /// Trigger kind.
    pub trigger: Trigger,
    /// Destination screen root.
    pub destination: NodeId,
    /// Navigation kind.
    pub navigation: Navigation,
    /// Transition played on navigation.
    pub transition: Transition,
    /// Whether the destination keeps its scroll offset.
    pub preserve_scroll_position: bool,
}

impl VisualNode {
    /// Empty frame with the given name and geometry.
    pub fn frame(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: NodeId::default(),
            name: name.into(),
            kind: NodeKind::Frame,
            geometry,
            corner_radius: 0.0,
            fills: Vec::new(),
            strokes: Vec::new(),
            effects: Vec::new(),
            opacity: 1.0,
            children: Vec::new(),
            reaction: None,
        }
    }

    /// Text node named after its characters.
    pub fn text(content: TextContent, geometry: Geometry) -> Self {
        Self {
            name: content.characters.clone(),
            kind: NodeKind::Text(content),
            ..Self::frame(String::new(), geometry)
        }
    }

    /// Text payload, if this is a text node.
    pub fn text_content(&self) -> Option<&TextContent> {
        match &self.kind {
            NodeKind::Text(t) => Some(t),
            NodeKind::Frame => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }

    /// Visit this subtree in pre-order.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a VisualNode)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// Node reached by following child indices from `self`.
    pub fn at_path(&self, path: &[usize]) -> Option<&VisualNode> {
        path.iter()
            .try_fold(self, |node, &idx| node.children.get(idx))
    }

    /// Mutable node reached by following child indices from `self`.
    pub fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut VisualNode> {
        let mut node = self;
        for &idx in path {
            node = node.children.get_mut(idx)?;
        }
        Some(node)
    }
}

impl TextContent {
    /// Auto-sized, start-aligned text in the given style.
    pub fn new(characters: impl Into<String>, font_size: f64, weight: FontWeight) -> Self {
        Self {
            characters: characters.into(),
            font_size,
            weight,
            color: Color::BLACK,
            align_h: TextAlign::Start,
            align_v: TextAlign::Start,
            line_height: None,
            sizing: TextSizing::Auto,
        }
    }

    /// Same text in a different color.
    pub fn colored(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Same text centered on both axes.
    pub fn centered(self) -> Self {
        Self {
            align_h: TextAlign::Center,
            align_v: TextAlign::Center,
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
