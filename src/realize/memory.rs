use std::collections::{BTreeMap, BTreeSet};

use crate::{
    foundation::{
        core::Geometry,
        error::{FramesmithError, FramesmithResult},
    },
    realize::factory::NodeFactory,
    scene::node::{
        Effect, Fill, FontWeight, NodeId, NodeKind, Reaction, Stroke, TextContent, VisualNode,
    },
};

/// Index of a node in a [`MemoryFactory`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemHandle(usize);

#[derive(Clone, Debug)]
struct MemNode {
    name: String,
    kind: NodeKind,
    geometry: Geometry,
    corner_radius: f64,
    fills: Vec<Fill>,
    strokes: Vec<Stroke>,
    effects: Vec<Effect>,
    opacity: f64,
    parent: Option<usize>,
    children: Vec<usize>,
    reaction: Option<(Reaction, usize)>,
}

/// In-memory [`NodeFactory`] with a single target page.
///
/// Only families passed to [`MemoryFactory::new`] load. [`MemoryFactory::fail_after`] makes node
/// creation fail once a budget is spent, to exercise the all-or-nothing path.
#[derive(Clone, Debug)]
pub struct MemoryFactory {
    fonts: BTreeSet<String>,
    loaded: Vec<(String, FontWeight)>,
    arena: Vec<MemNode>,
    page_name: String,
    attached: Vec<usize>,
    clears: usize,
    create_budget: Option<usize>,
}

impl Default for MemoryFactory {
    fn default() -> Self {
        Self::new(["Inter", "Roboto"])
    }
}

impl MemoryFactory {
    /// Factory that can load the given font families.
    pub fn new<I, S>(fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fonts: fonts.into_iter().map(Into::into).collect(),
            loaded: Vec::new(),
            arena: Vec::new(),
            page_name: String::new(),
            attached: Vec::new(),
            clears: 0,
            create_budget: None,
        }
    }

    /// Allow only `n` more node creations; later ones fail.
    pub fn fail_after(mut self, n: usize) -> Self {
        self.create_budget = Some(n);
        self
    }

    /// Fonts loaded so far, in load order.
    pub fn loaded_fonts(&self) -> &[(String, FontWeight)] {
        &self.loaded
    }

    /// Current page name.
    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    /// Number of `clear_target` calls.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Nodes ever created, attached or not.
    pub fn created_count(&self) -> usize {
        self.arena.len()
    }

    /// The attached forest as plain nodes, with ids renumbered in pre-order.
    pub fn snapshot(&self) -> Vec<VisualNode> {
        let mut ids = BTreeMap::new();
        let mut next = 0u32;
        for &root in &self.attached {
            self.number(root, &mut next, &mut ids);
        }
        self.attached
            .iter()
            .map(|&root| self.materialize(root, &ids))
            .collect()
    }

    fn number(&self, idx: usize, next: &mut u32, ids: &mut BTreeMap<usize, NodeId>) {
        ids.insert(idx, NodeId(*next));
        *next += 1;
        for &child in &self.arena[idx].children {
            self.number(child, next, ids);
        }
    }

    fn materialize(&self, idx: usize, ids: &BTreeMap<usize, NodeId>) -> VisualNode {
        let n = &self.arena[idx];
        VisualNode {
            id: ids.get(&idx).copied().unwrap_or_default(),
            name: n.name.clone(),
            kind: n.kind.clone(),
            geometry: n.geometry,
            corner_radius: n.corner_radius,
            fills: n.fills.clone(),
            strokes: n.strokes.clone(),
            effects: n.effects.clone(),
            opacity: n.opacity,
            children: n
                .children
                .iter()
                .map(|&child| self.materialize(child, ids))
                .collect(),
            reaction: n.reaction.map(|(reaction, dest)| Reaction {
                destination: ids.get(&dest).copied().unwrap_or(reaction.destination),
                ..reaction
            }),
        }
    }

    fn push(&mut self, name: &str, kind: NodeKind) -> FramesmithResult<MemHandle> {
        if let Some(budget) = self.create_budget.as_mut() {
            if *budget == 0 {
                return Err(FramesmithError::validation(format!(
                    "node budget exhausted creating '{name}'"
                )));
            }
            *budget -= 1;
        }
        self.arena.push(MemNode {
            name: name.to_owned(),
            kind,
            geometry: Geometry::default(),
            corner_radius: 0.0,
            fills: Vec::new(),
            strokes: Vec::new(),
            effects: Vec::new(),
            opacity: 1.0,
            parent: None,
            children: Vec::new(),
            reaction: None,
        });
        Ok(MemHandle(self.arena.len() - 1))
    }

    fn node_mut(&mut self, h: &MemHandle) -> FramesmithResult<&mut MemNode> {
        self.arena
            .get_mut(h.0)
            .ok_or_else(|| FramesmithError::validation(format!("unknown node handle {}", h.0)))
    }
}

impl NodeFactory for MemoryFactory {
    type Handle = MemHandle;

    fn load_font(&mut self, family: &str, weight: FontWeight) -> FramesmithResult<()> {
        if !self.fonts.contains(family) {
            return Err(FramesmithError::validation(format!(
                "font family '{family}' is not installed"
            )));
        }
        self.loaded.push((family.to_owned(), weight));
        Ok(())
    }

    fn create_frame(&mut self, name: &str) -> FramesmithResult<MemHandle> {
        self.push(name, NodeKind::Frame)
    }

    fn create_text(
        &mut self,
        name: &str,
        content: &TextContent,
        family: &str,
    ) -> FramesmithResult<MemHandle> {
        if !self.loaded.iter().any(|(f, w)| f == family && *w == content.weight) {
            return Err(FramesmithError::validation(format!(
                "font '{family}' {:?} was not loaded",
                content.weight
            )));
        }
        self.push(name, NodeKind::Text(content.clone()))
    }

    fn set_geometry(&mut self, node: &MemHandle, geometry: Geometry) -> FramesmithResult<()> {
        self.node_mut(node)?.geometry = geometry;
        Ok(())
    }

    fn set_corner_radius(&mut self, node: &MemHandle, radius: f64) -> FramesmithResult<()> {
        self.node_mut(node)?.corner_radius = radius;
        Ok(())
    }

    fn set_fills(&mut self, node: &MemHandle, fills: &[Fill]) -> FramesmithResult<()> {
        self.node_mut(node)?.fills = fills.to_vec();
        Ok(())
    }

    fn set_strokes(&mut self, node: &MemHandle, strokes: &[Stroke]) -> FramesmithResult<()> {
        self.node_mut(node)?.strokes = strokes.to_vec();
        Ok(())
    }

    fn set_effects(&mut self, node: &MemHandle, effects: &[Effect]) -> FramesmithResult<()> {
        self.node_mut(node)?.effects = effects.to_vec();
        Ok(())
    }

    fn set_opacity(&mut self, node: &MemHandle, opacity: f64) -> FramesmithResult<()> {
        self.node_mut(node)?.opacity = opacity;
        Ok(())
    }

    fn append_child(&mut self, parent: &MemHandle, child: &MemHandle) -> FramesmithResult<()> {
        if self.node_mut(child)?.parent.is_some() {
            return Err(FramesmithError::validation(format!(
                "node {} already has a parent",
                child.0
            )));
        }
        self.node_mut(parent)?.children.push(child.0);
        self.node_mut(child)?.parent = Some(parent.0);
        Ok(())
    }

    fn set_reaction(
        &mut self,
        node: &MemHandle,
        reaction: &Reaction,
        destination: &MemHandle,
    ) -> FramesmithResult<()> {
        self.node_mut(destination)?;
        self.node_mut(node)?.reaction = Some((*reaction, destination.0));
        Ok(())
    }

    fn clear_target(&mut self) -> FramesmithResult<()> {
        self.attached.clear();
        self.clears += 1;
        Ok(())
    }

    fn set_page_name(&mut self, name: &str) -> FramesmithResult<()> {
        self.page_name = name.to_owned();
        Ok(())
    }

    fn attach_root(&mut self, root: &MemHandle) -> FramesmithResult<()> {
        if self.node_mut(root)?.parent.is_some() {
            return Err(FramesmithError::validation(format!(
                "node {} is not a root",
                root.0
            )));
        }
        self.attached.push(root.0);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/realize/memory.rs"]
mod tests;
