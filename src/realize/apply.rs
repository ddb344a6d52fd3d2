use std::collections::BTreeMap;

use crate::{
    foundation::{
        config::FontConfig,
        error::{FramesmithError, FramesmithResult},
    },
    realize::factory::NodeFactory,
    scene::{
        document::CompiledDocument,
        node::{FontWeight, NodeId, NodeKind, VisualNode},
    },
};

/// What [`apply`] did to the target.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ApplyReport {
    /// Font family text nodes were created with.
    pub font_family: String,
    /// Nodes created.
    pub nodes: usize,
    /// Reactions written.
    pub reactions: usize,
    /// Roots attached to the target page.
    pub roots: usize,
}

/// Load both weights of the primary family, else of the fallback family.
///
/// Returns the family that loaded. Fails with [`FramesmithError::FontResourceUnavailable`] when
/// neither does.
pub fn ensure_fonts<F: NodeFactory>(factory: &mut F, fonts: &FontConfig) -> FramesmithResult<String> {
    let load = |factory: &mut F, family: &str| -> FramesmithResult<()> {
        factory.load_font(family, FontWeight::Regular)?;
        factory.load_font(family, FontWeight::Bold)
    };

    match load(factory, &fonts.primary) {
        Ok(()) => Ok(fonts.primary.clone()),
        Err(primary_err) => {
            tracing::warn!(family = %fonts.primary, err = %primary_err, "primary font unavailable");
            match load(factory, &fonts.fallback) {
                Ok(()) => Ok(fonts.fallback.clone()),
                Err(fallback_err) => Err(FramesmithError::font_unavailable(format!(
                    "'{}' ({primary_err}) and fallback '{}' ({fallback_err})",
                    fonts.primary, fonts.fallback
                ))),
            }
        }
    }
}

/// Replace the target's content with `doc`, all or nothing.
///
/// Fonts are readied first. The whole forest is then created detached and its reactions are
/// wired; only after that succeeds is the target cleared, renamed and given the new roots.
/// An error at any earlier point leaves the target as it was.
#[tracing::instrument(skip_all, fields(page = %doc.page_name, roots = doc.roots.len()))]
pub fn apply<F: NodeFactory>(
    doc: &CompiledDocument,
    factory: &mut F,
    fonts: &FontConfig,
) -> FramesmithResult<ApplyReport> {
    let family = ensure_fonts(factory, fonts)?;

    let mut handles = BTreeMap::new();
    let mut roots = Vec::with_capacity(doc.roots.len());
    for root in &doc.roots {
        roots.push(build(factory, root, &family, &mut handles)?);
    }

    let mut reactions = 0;
    for node in doc.reactive_nodes() {
        let Some(reaction) = &node.reaction else {
            continue;
        };
        let (Some(source), Some(destination)) =
            (handles.get(&node.id), handles.get(&reaction.destination))
        else {
            return Err(FramesmithError::validation(format!(
                "reaction on '{}' points at unknown node {}",
                node.name, reaction.destination.0
            )));
        };
        factory.set_reaction(source, reaction, destination)?;
        reactions += 1;
    }

    factory.clear_target()?;
    factory.set_page_name(&doc.page_name)?;
    for root in &roots {
        factory.attach_root(root)?;
    }

    let report = ApplyReport {
        font_family: family,
        nodes: doc.node_count(),
        reactions,
        roots: roots.len(),
    };
    tracing::debug!(nodes = report.nodes, reactions = report.reactions, "applied document");
    Ok(report)
}

fn build<F: NodeFactory>(
    factory: &mut F,
    node: &VisualNode,
    family: &str,
    handles: &mut BTreeMap<NodeId, F::Handle>,
) -> FramesmithResult<F::Handle> {
    let handle = match &node.kind {
        NodeKind::Frame => factory.create_frame(&node.name)?,
        NodeKind::Text(content) => factory.create_text(&node.name, content, family)?,
    };
    factory.set_geometry(&handle, node.geometry)?;
    if node.corner_radius > 0.0 {
        factory.set_corner_radius(&handle, node.corner_radius)?;
    }
    if matches!(node.kind, NodeKind::Frame) {
        factory.set_fills(&handle, &node.fills)?;
    }
    if !node.strokes.is_empty() {
        factory.set_strokes(&handle, &node.strokes)?;
    }
    if !node.effects.is_empty() {
        factory.set_effects(&handle, &node.effects)?;
    }
    if node.opacity != 1.0 {
        factory.set_opacity(&handle, node.opacity)?;
    }

    for child in &node.children {
        let child_handle = build(factory, child, family, handles)?;
        factory.append_child(&handle, &child_handle)?;
    }

    handles.insert(node.id, handle.clone());
    Ok(handle)
}

#[cfg(test)]
#[path = "../../tests/unit/realize/apply.rs"]
mod tests;
