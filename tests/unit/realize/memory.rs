use super::*;
use crate::scene::node::{Navigation, Transition, Trigger};

#[test]
fn unknown_font_family_fails_to_load() {
    let mut f = MemoryFactory::new(["Inter"]);
    assert!(f.load_font("Inter", FontWeight::Bold).is_ok());
    assert!(f.load_font("Roboto", FontWeight::Bold).is_err());
}

#[test]
fn text_requires_loaded_weight() {
    let mut f = MemoryFactory::default();
    let bold = TextContent::new("Hi", 12.0, FontWeight::Bold);
    assert!(f.create_text("Hi", &bold, "Inter").is_err());
    f.load_font("Inter", FontWeight::Bold).unwrap();
    assert!(f.create_text("Hi", &bold, "Inter").is_ok());
}

#[test]
fn nodes_have_a_single_parent() {
    let mut f = MemoryFactory::default();
    let a = f.create_frame("A").unwrap();
    let b = f.create_frame("B").unwrap();
    let c = f.create_frame("C").unwrap();
    f.append_child(&a, &c).unwrap();
    assert!(f.append_child(&b, &c).is_err());
    assert!(f.attach_root(&c).is_err());
}

#[test]
fn snapshot_contains_only_attached_roots() {
    let mut f = MemoryFactory::default();
    let a = f.create_frame("A").unwrap();
    let _detached = f.create_frame("Detached").unwrap();
    let child = f.create_frame("Child").unwrap();
    f.append_child(&a, &child).unwrap();
    f.set_geometry(&a, Geometry::sized(10.0, 20.0)).unwrap();
    f.attach_root(&a).unwrap();

    let snap = f.snapshot();
    assert_eq!(snap.len(), 1);
    assert_eq!(snap[0].geometry, Geometry::sized(10.0, 20.0));
    assert_eq!(snap[0].children[0].id, NodeId(1));
    assert_eq!(f.created_count(), 3);
}

#[test]
fn reactions_resolve_to_snapshot_ids() {
    let mut f = MemoryFactory::default();
    let a = f.create_frame("A").unwrap();
    let b = f.create_frame("B").unwrap();
    let reaction = Reaction {
        trigger: Trigger::OnClick,
        destination: NodeId(42),
        navigation: Navigation::Navigate,
        transition: Transition::Push,
        preserve_scroll_position: false,
    };
    f.set_reaction(&a, &reaction, &b).unwrap();
    f.attach_root(&a).unwrap();
    f.attach_root(&b).unwrap();
    assert_eq!(f.snapshot()[0].reaction.unwrap().destination, NodeId(1));
}

#[test]
fn creation_budget_is_enforced() {
    let mut f = MemoryFactory::default().fail_after(1);
    assert!(f.create_frame("A").is_ok());
    assert!(f.create_frame("B").is_err());
}
