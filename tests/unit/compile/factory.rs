use super::*;
use crate::foundation::core::Geometry;
use serde_json::json;

fn custom(ctx: &BuildContext<'_>) -> VisualNode {
    VisualNode::frame("Custom", Geometry::sized(ctx.content_width, 10.0))
}

fn ctx_for<'a>(section: &'a Section, colors: &'a ColorTokens) -> BuildContext<'a> {
    BuildContext {
        section,
        colors,
        theme: crate::style::theme::resolve_theme(None),
        content_width: 500.0,
    }
}

#[test]
fn builtin_registry_knows_eight_types() {
    let f = ComponentFactory::with_builtin();
    assert_eq!(f.known_components().count(), 8);
    assert!(f.is_known("bottom_sheet"));
    assert!(!f.is_known("basic"));
}

#[test]
fn missing_component_uses_fallback() {
    let f = ComponentFactory::default();
    let section = Section::default();
    let colors = ColorTokens::default();
    let node = f.build(&ctx_for(&section, &colors));
    assert_eq!(node.name, "Component");
    assert_eq!(node.geometry.width, 500.0);
}

#[test]
fn registered_builders_override_and_extend() {
    let mut f = ComponentFactory::with_builtin();
    assert!(f.register("rounded_card", custom).is_some());
    assert!(f.register("hero", custom).is_none());

    let colors = ColorTokens::default();
    for tag in ["rounded_card", "hero"] {
        let section: Section = serde_json::from_value(json!({ "component": tag })).unwrap();
        assert_eq!(f.build(&ctx_for(&section, &colors)).name, "Custom");
    }
}

#[test]
fn fallback_can_be_replaced() {
    let mut f = ComponentFactory::empty();
    f.set_fallback(custom);
    let section: Section = serde_json::from_value(json!({ "component": "gradient_banner" })).unwrap();
    let colors = ColorTokens::default();
    assert_eq!(f.build(&ctx_for(&section, &colors)).name, "Custom");
}
