use crate::{
    prototype::transitions::{resolve_transition, resolve_trigger},
    report::model::NavigationEdge,
    scene::{
        document::CompiledDocument,
        node::{Navigation, Reaction, VisualNode},
    },
};

/// Outcome counts of one linking pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct LinkStats {
    /// Edges that produced a reaction.
    pub linked: usize,
    /// Edges skipped because an endpoint screen does not exist.
    pub dropped: usize,
    /// Linked edges whose trigger fell back to the source screen root.
    pub root_fallbacks: usize,
}

/// Attaches navigation edges to compiled screens as reactions.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrototypeLinker;

impl PrototypeLinker {
    /// Link `edges` into `doc`, in order.
    ///
    /// Node ids must already be assigned. Edges with an unknown endpoint are skipped. A later
    /// edge on the same trigger node overwrites the earlier reaction.
    #[tracing::instrument(skip_all, fields(edges = edges.len()))]
    pub fn link(doc: &mut CompiledDocument, edges: &[NavigationEdge]) -> LinkStats {
        let mut stats = LinkStats::default();

        for edge in edges {
            let from = edge.from_screen.as_deref().unwrap_or_default();
            let to = edge.to_screen.as_deref().unwrap_or_default();
            let (Some(&src), Some(&dst)) = (doc.by_name.get(from), doc.by_name.get(to)) else {
                tracing::debug!(from, to, "dropping navigation edge with unknown screen");
                stats.dropped += 1;
                continue;
            };
            let destination = doc.roots[dst].id;

            let needle = edge.trigger_component.as_deref().unwrap_or_default();
            let path = find_trigger_path(&doc.roots[src], needle).unwrap_or_else(|| {
                stats.root_fallbacks += 1;
                Vec::new()
            });

            let reaction = Reaction {
                trigger: resolve_trigger(edge.interaction.trigger.as_deref()),
                destination,
                navigation: Navigation::Navigate,
                transition: resolve_transition(edge.interaction.transition.as_deref()),
                preserve_scroll_position: false,
            };
            if let Some(node) = doc.roots[src].at_path_mut(&path) {
                tracing::debug!(from, to, trigger = %node.name, "linked navigation edge");
                node.reaction = Some(reaction);
                stats.linked += 1;
            }
        }
        stats
    }
}

/// Child-index path to the first descendant of `root` (pre-order) whose name contains `needle`,
/// ignoring case.
///
/// The root itself is not a candidate, and an empty needle matches nothing.
pub fn find_trigger_path(root: &VisualNode, needle: &str) -> Option<Vec<usize>> {
    fn search(node: &VisualNode, needle: &str, path: &mut Vec<usize>) -> bool {
        for (idx, child) in node.children.iter().enumerate() {
            path.push(idx);
            if child.name.to_lowercase().contains(needle) || search(child, needle, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    if needle.is_empty() {
        return None;
    }
    let needle = needle.to_lowercase();
    let mut path = Vec::new();
    search(root, &needle, &mut path).then_some(path)
}

#[cfg(test)]
#[path = "../../tests/unit/prototype/linker.rs"]
mod tests;
