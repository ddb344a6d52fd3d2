use crate::{
    foundation::core::Geometry,
    scene::{
        document::CompiledDocument,
        node::{
            Effect, Fill, FontWeight, NodeKind, Reaction, SlideDirection, TextAlign, TextSizing,
            Transition, Trigger, VisualNode,
        },
    },
    style::color::Color,
};

/// 128-bit structural fingerprint of a compiled document.
///
/// Two documents with equal fingerprints have the same page name, node names, geometry, paints,
/// text, child order and reactions. Node ids are hashed through reactions only, so the value is
/// stable across recompiles of the same report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct DocumentFingerprint {
    /// High half.
    pub hi: u64,
    /// Low half.
    pub lo: u64,
}

impl std::fmt::Display for DocumentFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint every root of `doc` in order.
pub fn fingerprint_document(doc: &CompiledDocument) -> DocumentFingerprint {
    let mut h = DualFnv::new();
    h.str(&doc.page_name);
    h.len(doc.roots.len());
    for root in &doc.roots {
        write_node(&mut h, root);
    }
    h.finish()
}

/// Fingerprint a single subtree.
pub fn fingerprint_node(node: &VisualNode) -> DocumentFingerprint {
    let mut h = DualFnv::new();
    write_node(&mut h, node);
    h.finish()
}

fn write_node(h: &mut DualFnv, node: &VisualNode) {
    h.str(&node.name);
    write_geometry(h, node.geometry);
    h.f64(node.corner_radius);
    h.f64(node.opacity);

    match &node.kind {
        NodeKind::Frame => h.u8(0),
        NodeKind::Text(t) => {
            h.u8(1);
            h.str(&t.characters);
            h.f64(t.font_size);
            h.u8(match t.weight {
                FontWeight::Regular => 0,
                FontWeight::Bold => 1,
            });
            write_color(h, t.color);
            for align in [t.align_h, t.align_v] {
                h.u8(match align {
                    TextAlign::Start => 0,
                    TextAlign::Center => 1,
                });
            }
            match t.line_height {
                Some(lh) => {
                    h.u8(1);
                    h.f64(lh);
                }
                None => h.u8(0),
            }
            h.u8(match t.sizing {
                TextSizing::Auto => 0,
                TextSizing::Fixed => 1,
            });
        }
    }

    h.len(node.fills.len());
    for fill in &node.fills {
        match fill {
            Fill::Solid { color, opacity } => {
                h.u8(0);
                write_color(h, *color);
                h.f64(*opacity);
            }
            Fill::LinearGradient { stops, transform } => {
                h.u8(1);
                for stop in stops {
                    h.f64(stop.position);
                    write_color(h, stop.color);
                }
                for v in transform.iter().flatten() {
                    h.f64(*v);
                }
            }
        }
    }

    h.len(node.strokes.len());
    for stroke in &node.strokes {
        write_color(h, stroke.color);
        h.f64(stroke.opacity);
        h.f64(stroke.weight);
    }

    h.len(node.effects.len());
    for effect in &node.effects {
        let Effect::DropShadow {
            color,
            offset,
            radius,
            visible,
        } = effect;
        write_color(h, *color);
        h.f64(offset.x);
        h.f64(offset.y);
        h.f64(*radius);
        h.u8(u8::from(*visible));
    }

    match &node.reaction {
        Some(r) => {
            h.u8(1);
            write_reaction(h, r);
        }
        None => h.u8(0),
    }

    h.len(node.children.len());
    for child in &node.children {
        write_node(h, child);
    }
}

fn write_geometry(h: &mut DualFnv, g: Geometry) {
    for v in [g.x, g.y, g.width, g.height] {
        h.f64(v);
    }
}

fn write_color(h: &mut DualFnv, c: Color) {
    for v in [c.r, c.g, c.b, c.a] {
        h.f64(v);
    }
}

fn write_reaction(h: &mut DualFnv, r: &Reaction) {
    h.u8(match r.trigger {
        Trigger::OnClick => 0,
        Trigger::OnHover => 1,
    });
    h.u64(u64::from(r.destination.0));
    h.u8(match r.transition {
        Transition::SlideIn {
            direction: SlideDirection::Left,
        } => 0,
        Transition::SlideIn {
            direction: SlideDirection::Right,
        } => 1,
        Transition::Dissolve => 2,
        Transition::Push => 3,
    });
    h.u8(u8::from(r.preserve_scroll_position));
}

/// Two FNV-1a streams with different seeds, fed identical bytes.
struct DualFnv {
    a: u64,
    b: u64,
}

impl DualFnv {
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            a: 0xcbf29ce484222325,
            b: 0x9ae16a3b2f90404f,
        }
    }

    fn bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.a = (self.a ^ u64::from(byte)).wrapping_mul(Self::PRIME);
            self.b = (self.b ^ u64::from(byte)).wrapping_mul(Self::PRIME);
        }
    }

    fn u8(&mut self, v: u8) {
        self.bytes(&[v]);
    }

    fn u64(&mut self, v: u64) {
        self.bytes(&v.to_le_bytes());
    }

    fn len(&mut self, n: usize) {
        self.u64(n as u64);
    }

    /// Hashes `-0.0` and `0.0` alike.
    fn f64(&mut self, v: f64) {
        let v = if v == 0.0 { 0.0 } else { v };
        self.u64(v.to_bits());
    }

    fn str(&mut self, s: &str) {
        self.len(s.len());
        self.bytes(s.as_bytes());
    }

    fn finish(&self) -> DocumentFingerprint {
        DocumentFingerprint {
            hi: self.a,
            lo: self.b,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/fingerprint.rs"]
mod tests;
