pub use kurbo::{Point, Rect, Size, Vec2};

/// Position and size of a node relative to its parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Geometry {
    /// Left edge, relative to the parent node.
    pub x: f64,
    /// Top edge, relative to the parent node.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Geometry {
    /// Geometry at an explicit position.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Geometry of the given size at the parent's origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Same size, moved to `(x, y)`.
    pub fn at(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// Origin of this geometry.
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Size of this geometry.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Rectangle in the parent's coordinate space, shifted by `offset`.
    pub fn rect_at(self, offset: Vec2) -> Rect {
        Rect::from_origin_size(self.origin() + offset, self.size())
    }
}
