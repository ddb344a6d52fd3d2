use super::*;
use crate::style::theme::resolve_theme;
use serde_json::json;

fn sections(v: serde_json::Value) -> Vec<Section> {
    serde_json::from_value(v).unwrap()
}

fn run(secs: &[Section], interactions: &[Interaction]) -> Vec<VisualNode> {
    let factory = ComponentFactory::with_builtin();
    LayoutEngine::new(&factory, ContentConfig::default(), FlowConfig::default()).layout_screen(
        secs,
        &ColorTokens::default(),
        resolve_theme(None),
        interactions,
    )
}

#[test]
fn auto_placed_sections_stack_from_start() {
    let secs = sections(json!([
        { "component": "a", "height": 100 },
        { "component": "b", "height": 200 },
        { "component": "c", "height": 150 }
    ]));
    let ys: Vec<f64> = run(&secs, &[]).iter().map(|n| n.geometry.y).collect();
    assert_eq!(ys, [200.0, 332.0, 564.0]);
}

#[test]
fn auto_placed_sections_use_content_inset() {
    let secs = sections(json!([{ "component": "a" }]));
    let nodes = run(&secs, &[]);
    assert_eq!(nodes[0].geometry.x, 64.0);
    assert_eq!(nodes[0].geometry.width, 1312.0);
}

#[test]
fn explicit_y_does_not_move_cursor() {
    let secs = sections(json!([
        { "component": "a", "height": 100 },
        { "component": "floating_action_button", "x": 1300, "y": 900 },
        { "component": "b", "height": 100 }
    ]));
    let nodes = run(&secs, &[]);
    assert_eq!(nodes[1].geometry.x, 1300.0);
    assert_eq!(nodes[1].geometry.y, 900.0);
    assert_eq!(nodes[2].geometry.y, 332.0);
}

#[test]
fn explicit_x_alone_stays_in_flow() {
    let secs = sections(json!([
        { "component": "a", "height": 100, "x": 10 },
        { "component": "b" }
    ]));
    let nodes = run(&secs, &[]);
    assert_eq!(nodes[0].geometry.x, 10.0);
    assert_eq!(nodes[0].geometry.y, 200.0);
    assert_eq!(nodes[1].geometry.y, 332.0);
}

#[test]
fn spacing_overrides_default_but_zero_falls_back() {
    let secs = sections(json!([
        { "component": "a", "height": 100, "spacing": 0 },
        { "component": "b", "height": 100, "spacing": 8 },
        { "component": "c", "height": 100, "spacing": -20 },
        { "component": "d" }
    ]));
    let ys: Vec<f64> = run(&secs, &[]).iter().map(|n| n.geometry.y).collect();
    assert_eq!(ys, [200.0, 332.0, 440.0, 520.0]);
}

#[test]
fn explicit_zero_y_is_a_coordinate() {
    let secs = sections(json!([{ "component": "a", "y": 0 }, { "component": "b" }]));
    let nodes = run(&secs, &[]);
    assert_eq!(nodes[0].geometry.y, 0.0);
    assert_eq!(nodes[1].geometry.y, 200.0);
}

#[test]
fn toggle_and_overlay_add_one_shadow_each() {
    let secs = sections(json!([{ "component": "rounded_card" }]));
    let interactions: Vec<Interaction> = serde_json::from_value(json!([
        { "action": "toggle" },
        { "action": "navigate" },
        { "action": "overlay" }
    ]))
    .unwrap();
    let nodes = run(&secs, &interactions);
    // builder shadow plus two affordances
    assert_eq!(nodes[0].effects.len(), 3);
    assert_eq!(
        nodes[0].effects[2],
        Effect::drop_shadow(Color::BLACK.with_alpha(0.1), Vec2::new(0.0, 2.0), 8.0)
    );
}

#[test]
fn empty_section_list_yields_nothing() {
    assert!(run(&[], &[]).is_empty());
}
