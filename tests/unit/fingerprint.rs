use super::*;
use crate::{compile::screen::compile_payload, scene::node::Stroke};
use serde_json::json;

fn payload() -> serde_json::Value {
    json!({
        "project_name": "Shop",
        "styles": { "theme": "testing" },
        "screens": [
            { "name": "Home", "layout": [
                { "component": "gradient_banner", "title": "Sale" },
                { "component": "filter_chips", "items": ["All", "New"] }
            ] },
            { "name": "Cart", "layout": [{ "component": "bottom_sheet" }] }
        ],
        "navigation_flow": [
            { "from_screen": "Home", "to_screen": "Cart", "trigger_component": "banner" }
        ]
    })
}

#[test]
fn recompiling_yields_equal_fingerprints() {
    let a = compile_payload(Some(payload())).unwrap();
    let b = compile_payload(Some(payload())).unwrap();
    assert_eq!(fingerprint_document(&a), fingerprint_document(&b));
}

#[test]
fn structural_changes_move_the_fingerprint() {
    let doc = compile_payload(Some(payload())).unwrap();
    let base = fingerprint_document(&doc);

    let mut moved = doc.clone();
    moved.roots[0].children[2].geometry.y += 1.0;
    assert_ne!(fingerprint_document(&moved), base);

    let mut unlinked = doc.clone();
    unlinked.roots[0].children[2].reaction = None;
    assert_ne!(fingerprint_document(&unlinked), base);

    let mut restroked = doc.clone();
    restroked.roots[1].strokes = vec![Stroke {
        color: Color::BLACK,
        opacity: 1.0,
        weight: 1.0,
    }];
    assert_ne!(fingerprint_document(&restroked), base);

    let mut reordered = doc;
    reordered.roots.swap(0, 1);
    assert_ne!(fingerprint_document(&reordered), base);
}

#[test]
fn signed_zero_hashes_alike() {
    let a = VisualNode::frame("N", Geometry::new(0.0, 0.0, 1.0, 1.0));
    let b = VisualNode::frame("N", Geometry::new(-0.0, 0.0, 1.0, 1.0));
    assert_eq!(fingerprint_node(&a), fingerprint_node(&b));
}

#[test]
fn display_is_32_hex_digits() {
    let fp = DocumentFingerprint { hi: 1, lo: 0xab };
    assert_eq!(fp.to_string(), "000000000000000100000000000000ab");
}
