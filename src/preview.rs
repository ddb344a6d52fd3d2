//! Flat raster preview of a compiled document.
//!
//! Only frame fills are painted: solid colors and left-to-right two-stop gradients, clipped to
//! each frame's rounded rectangle. Text, strokes and shadows are skipped.

use image::{Rgba, RgbaImage};
use kurbo::{Rect, RoundedRect, Shape as _};

use crate::{
    foundation::{
        core::{Point, Vec2},
        error::{FramesmithError, FramesmithResult},
    },
    scene::{
        document::CompiledDocument,
        node::{Fill, NodeKind, VisualNode},
    },
    style::color::Color,
};

/// Largest preview edge, in pixels.
pub const MAX_PREVIEW_EDGE: u32 = 16_384;

/// Preview rasterization options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewOpts {
    /// Pixels per document unit.
    pub scale: f64,
    /// Color behind and between screens.
    pub background: Color,
}

impl Default for PreviewOpts {
    fn default() -> Self {
        Self {
            scale: 0.25,
            background: Color::rgba(0.9, 0.9, 0.92, 1.0),
        }
    }
}

/// Rasterize every root of `doc` into one image covering their union.
pub fn render_preview(doc: &CompiledDocument, opts: &PreviewOpts) -> FramesmithResult<RgbaImage> {
    if !opts.scale.is_finite() || opts.scale <= 0.0 {
        return Err(FramesmithError::validation("preview scale must be finite and > 0"));
    }
    let Some(bounds) = doc
        .roots
        .iter()
        .map(|r| r.geometry.rect_at(Vec2::ZERO))
        .reduce(|a, b| a.union(b))
    else {
        return Err(FramesmithError::NoScreensFound);
    };

    let width = pixel_extent(bounds.width(), opts.scale)?;
    let height = pixel_extent(bounds.height(), opts.scale)?;
    let mut img = RgbaImage::from_pixel(width, height, Rgba(opts.background.to_rgba8()));

    let canvas = Canvas {
        origin: bounds.origin().to_vec2(),
        scale: opts.scale,
    };
    for root in &doc.roots {
        paint_node(&mut img, &canvas, root, Vec2::ZERO, 1.0);
    }
    Ok(img)
}

fn pixel_extent(units: f64, scale: f64) -> FramesmithResult<u32> {
    let px = (units * scale).ceil().max(1.0);
    if px > f64::from(MAX_PREVIEW_EDGE) {
        return Err(FramesmithError::validation(format!(
            "preview would be {px} px wide or tall; lower the scale"
        )));
    }
    Ok(px as u32)
}

/// Document-to-pixel mapping.
struct Canvas {
    origin: Vec2,
    scale: f64,
}

impl Canvas {
    fn to_pixels(&self, r: Rect) -> Rect {
        Rect::new(
            (r.x0 - self.origin.x) * self.scale,
            (r.y0 - self.origin.y) * self.scale,
            (r.x1 - self.origin.x) * self.scale,
            (r.y1 - self.origin.y) * self.scale,
        )
    }
}

fn paint_node(img: &mut RgbaImage, canvas: &Canvas, node: &VisualNode, offset: Vec2, opacity: f64) {
    let opacity = opacity * node.opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return;
    }
    let rect = node.geometry.rect_at(offset);

    if matches!(node.kind, NodeKind::Frame) && rect.area() > 0.0 {
        let px = canvas.to_pixels(rect);
        let radius = (node.corner_radius * canvas.scale)
            .min(px.width().min(px.height()) / 2.0)
            .max(0.0);
        let shape = RoundedRect::from_rect(px, radius);
        for fill in &node.fills {
            paint_fill(img, &shape, px, fill, opacity);
        }
    }

    let child_offset = rect.origin().to_vec2();
    for child in &node.children {
        paint_node(img, canvas, child, child_offset, opacity);
    }
}

fn paint_fill(img: &mut RgbaImage, shape: &RoundedRect, px: Rect, fill: &Fill, opacity: f64) {
    let (w, h) = img.dimensions();
    let x_range = px.x0.floor().max(0.0) as u32..(px.x1.ceil().max(0.0) as u32).min(w);
    let y_range = px.y0.floor().max(0.0) as u32..(px.y1.ceil().max(0.0) as u32).min(h);

    for y in y_range {
        for x in x_range.clone() {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if !shape.contains(center) {
                continue;
            }
            let (color, paint_opacity) = match fill {
                Fill::Solid { color, opacity } => (*color, *opacity),
                Fill::LinearGradient { stops, .. } => {
                    let t = ((center.x - px.x0) / px.width()).clamp(0.0, 1.0);
                    (lerp_color(stops[0].color, stops[1].color, t), 1.0)
                }
            };
            blend(img.get_pixel_mut(x, y), color, color.a * paint_opacity * opacity);
        }
    }
}

fn lerp_color(a: Color, b: Color, t: f64) -> Color {
    Color::rgba(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

/// Straight-alpha source-over.
fn blend(dst: &mut Rgba<u8>, src: Color, alpha: f64) {
    let alpha = alpha.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }
    let [sr, sg, sb, _] = src.to_rgba8();
    let px = &mut dst.0;
    let da = f64::from(px[3]) / 255.0;
    let out_a = alpha + da * (1.0 - alpha);
    for (channel, s) in [sr, sg, sb].into_iter().enumerate() {
        let d = f64::from(px[channel]);
        let v = if out_a > 0.0 {
            (f64::from(s) * alpha + d * da * (1.0 - alpha)) / out_a
        } else {
            0.0
        };
        px[channel] = v.round().clamp(0.0, 255.0) as u8;
    }
    px[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

#[cfg(test)]
#[path = "../tests/unit/preview.rs"]
mod tests;
