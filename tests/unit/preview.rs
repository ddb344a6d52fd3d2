use std::collections::BTreeMap;

use super::*;
use crate::{compile::screen::compile_payload, foundation::core::Geometry};
use serde_json::json;

fn single(node: VisualNode) -> CompiledDocument {
    CompiledDocument {
        page_name: "P".to_owned(),
        roots: vec![node],
        by_name: BTreeMap::new(),
    }
}

fn opts(scale: f64) -> PreviewOpts {
    PreviewOpts {
        scale,
        background: Color::BLACK,
    }
}

#[test]
fn image_covers_union_of_roots() {
    let doc = compile_payload(Some(json!({ "screens": [{}, {}, {}] }))).unwrap();
    let img = render_preview(&doc, &opts(0.125)).unwrap();
    // two columns of 1440 with a 120 gap; two rows of 1024 with a 120 gap
    assert_eq!(img.dimensions(), (375, 271));
}

#[test]
fn solid_fill_paints_inside_and_not_outside() {
    let mut root = VisualNode::frame("R", Geometry::sized(10.0, 10.0));
    let mut inner = VisualNode::frame("I", Geometry::new(5.0, 0.0, 5.0, 10.0));
    inner.fills.push(Fill::solid(Color::WHITE));
    root.children.push(inner);

    let img = render_preview(&single(root), &opts(1.0)).unwrap();
    assert_eq!(img.get_pixel(2, 5).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(7, 5).0, [255, 255, 255, 255]);
}

#[test]
fn rounded_corners_are_clipped() {
    let mut root = VisualNode::frame("R", Geometry::sized(20.0, 20.0));
    root.corner_radius = 10.0;
    root.fills.push(Fill::solid(Color::WHITE));
    let img = render_preview(&single(root), &opts(1.0)).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(10, 10).0, [255, 255, 255, 255]);
}

#[test]
fn gradient_runs_left_to_right() {
    let mut root = VisualNode::frame("R", Geometry::sized(100.0, 4.0));
    root.fills.push(Fill::linear([Color::BLACK, Color::WHITE]));
    let img = render_preview(&single(root), &opts(1.0)).unwrap();
    let left = img.get_pixel(0, 1).0[0];
    let mid = img.get_pixel(50, 1).0[0];
    let right = img.get_pixel(99, 1).0[0];
    assert!(left < mid && mid < right);
}

#[test]
fn opacity_blends_with_background() {
    let mut root = VisualNode::frame("R", Geometry::sized(4.0, 4.0));
    root.opacity = 0.5;
    root.fills.push(Fill::solid(Color::WHITE));
    let img = render_preview(&single(root), &opts(1.0)).unwrap();
    assert_eq!(img.get_pixel(1, 1).0, [128, 128, 128, 255]);
}

#[test]
fn bad_scale_and_empty_documents_are_rejected() {
    let doc = single(VisualNode::frame("R", Geometry::sized(4.0, 4.0)));
    assert!(render_preview(&doc, &opts(0.0)).is_err());
    assert!(render_preview(&doc, &opts(f64::NAN)).is_err());
    assert!(render_preview(&doc, &opts(10_000.0)).is_err());

    let empty = CompiledDocument {
        page_name: String::new(),
        roots: Vec::new(),
        by_name: BTreeMap::new(),
    };
    assert!(matches!(
        render_preview(&empty, &opts(1.0)).unwrap_err(),
        FramesmithError::NoScreensFound
    ));
}
