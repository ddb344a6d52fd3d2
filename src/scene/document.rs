use std::collections::BTreeMap;

use crate::scene::node::{NodeId, VisualNode};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Compiled output: one root per screen plus a name index.
pub struct CompiledDocument {
    /// Name for the page that receives the roots.
    pub page_name: String,
    /// Screen roots in document order.
    pub roots: Vec<VisualNode>,
    /// Screen name to index into `roots`. Later screens win on name collisions.
    pub by_name: BTreeMap<String, usize>,
}

impl CompiledDocument {
    /// Root registered under `name`.
    pub fn root_by_name(&self, name: &str) -> Option<&VisualNode> {
        self.by_name.get(name).and_then(|&idx| self.roots.get(idx))
    }

    /// Total node count across all roots.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(VisualNode::subtree_len).sum()
    }

    /// Visit every node in pre-order, root by root.
    pub fn walk<'a>(&'a self, mut f: impl FnMut(&'a VisualNode)) {
        for root in &self.roots {
            root.walk(&mut f);
        }
    }

    /// Node with the given id.
    pub fn node(&self, id: NodeId) -> Option<&VisualNode> {
        let mut found = None;
        self.walk(|n| {
            if found.is_none() && n.id == id {
                found = Some(n);
            }
        });
        found
    }

    /// All nodes carrying a reaction, in pre-order.
    pub fn reactive_nodes(&self) -> Vec<&VisualNode> {
        let mut out = Vec::new();
        self.walk(|n| {
            if n.reaction.is_some() {
                out.push(n);
            }
        });
        out
    }

    /// Number ids in pre-order across the forest, starting at zero.
    pub(crate) fn assign_ids(&mut self) {
        fn visit(node: &mut VisualNode, next: &mut u32) {
            node.id = NodeId(*next);
            *next += 1;
            for child in &mut node.children {
                visit(child, next);
            }
        }
        let mut next = 0;
        for root in &mut self.roots {
            visit(root, &mut next);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
