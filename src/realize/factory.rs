use crate::{
    foundation::{core::Geometry, error::FramesmithResult},
    scene::node::{Effect, Fill, FontWeight, Reaction, Stroke, TextContent},
};

/// Host capability for creating and wiring live nodes.
///
/// Nodes are created detached and only become visible once attached with
/// [`NodeFactory::attach_root`]. Every call may fail; the caller stops at the first error.
pub trait NodeFactory {
    /// Host reference to a created node.
    type Handle: Clone;

    /// Make `family` in `weight` available to text nodes.
    fn load_font(&mut self, family: &str, weight: FontWeight) -> FramesmithResult<()>;

    /// Create a detached, empty frame.
    fn create_frame(&mut self, name: &str) -> FramesmithResult<Self::Handle>;

    /// Create a detached text node in a font readied by [`NodeFactory::load_font`].
    fn create_text(
        &mut self,
        name: &str,
        content: &TextContent,
        family: &str,
    ) -> FramesmithResult<Self::Handle>;

    /// Position and size a node relative to its parent.
    fn set_geometry(&mut self, node: &Self::Handle, geometry: Geometry) -> FramesmithResult<()>;

    /// Set the uniform corner radius.
    fn set_corner_radius(&mut self, node: &Self::Handle, radius: f64) -> FramesmithResult<()>;

    /// Replace the fill paints.
    fn set_fills(&mut self, node: &Self::Handle, fills: &[Fill]) -> FramesmithResult<()>;

    /// Replace the stroke paints.
    fn set_strokes(&mut self, node: &Self::Handle, strokes: &[Stroke]) -> FramesmithResult<()>;

    /// Replace the effects.
    fn set_effects(&mut self, node: &Self::Handle, effects: &[Effect]) -> FramesmithResult<()>;

    /// Set the layer opacity.
    fn set_opacity(&mut self, node: &Self::Handle, opacity: f64) -> FramesmithResult<()>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &Self::Handle, child: &Self::Handle)
    -> FramesmithResult<()>;

    /// Replace the node's reaction; `destination` is the host node behind
    /// `reaction.destination`.
    fn set_reaction(
        &mut self,
        node: &Self::Handle,
        reaction: &Reaction,
        destination: &Self::Handle,
    ) -> FramesmithResult<()>;

    /// Remove everything currently attached to the target page.
    fn clear_target(&mut self) -> FramesmithResult<()>;

    /// Rename the target page.
    fn set_page_name(&mut self, name: &str) -> FramesmithResult<()>;

    /// Attach a detached root to the target page.
    fn attach_root(&mut self, root: &Self::Handle) -> FramesmithResult<()>;
}
