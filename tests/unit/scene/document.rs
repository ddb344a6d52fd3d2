use super::*;
use crate::foundation::core::Geometry;

fn doc() -> CompiledDocument {
    let mut a = VisualNode::frame("A", Geometry::sized(10.0, 10.0));
    a.children.push(VisualNode::frame("A1", Geometry::sized(1.0, 1.0)));
    let b = VisualNode::frame("B", Geometry::sized(10.0, 10.0));
    let mut doc = CompiledDocument {
        page_name: "Page".to_owned(),
        roots: vec![a, b],
        by_name: BTreeMap::from([("A".to_owned(), 0), ("B".to_owned(), 1)]),
    };
    doc.assign_ids();
    doc
}

#[test]
fn ids_are_pre_order_across_roots() {
    let doc = doc();
    assert_eq!(doc.roots[0].id, NodeId(0));
    assert_eq!(doc.roots[0].children[0].id, NodeId(1));
    assert_eq!(doc.roots[1].id, NodeId(2));
    assert_eq!(doc.node_count(), 3);
}

#[test]
fn lookup_by_name_and_id() {
    let doc = doc();
    assert_eq!(doc.root_by_name("B").unwrap().name, "B");
    assert!(doc.root_by_name("C").is_none());
    assert_eq!(doc.node(NodeId(1)).unwrap().name, "A1");
    assert!(doc.node(NodeId(9)).is_none());
    assert!(doc.reactive_nodes().is_empty());
}
