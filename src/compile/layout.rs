use crate::{
    compile::factory::{BuildContext, ComponentFactory},
    foundation::{
        config::{ContentConfig, FlowConfig},
        core::Vec2,
    },
    report::{
        cascade,
        model::{ColorTokens, Interaction, Section},
    },
    scene::node::{Effect, VisualNode},
    style::{color::Color, theme::ThemeTokens},
};

/// Places built sections inside a screen.
///
/// Sections without an explicit `y` join a vertical flow: each lands at the running cursor and
/// pushes it down by its height plus its spacing. Sections with an explicit `y` are positioned
/// absolutely and leave the cursor alone.
#[derive(Clone, Copy, Debug)]
pub struct LayoutEngine<'a> {
    factory: &'a ComponentFactory,
    content: ContentConfig,
    flow: FlowConfig,
}

impl<'a> LayoutEngine<'a> {
    /// Engine building through `factory` with the given content box and flow settings.
    pub fn new(factory: &'a ComponentFactory, content: ContentConfig, flow: FlowConfig) -> Self {
        Self {
            factory,
            content,
            flow,
        }
    }

    /// Build and position every section of one screen, in order.
    pub fn layout_screen(
        &self,
        sections: &[Section],
        colors: &ColorTokens,
        theme: ThemeTokens,
        interactions: &[Interaction],
    ) -> Vec<VisualNode> {
        let mut cursor = self.flow.start_y;
        let mut placed = Vec::with_capacity(sections.len());

        for section in sections {
            let ctx = BuildContext {
                section,
                colors,
                theme,
                content_width: self.content.width,
            };
            let mut node = self.factory.build(&ctx);
            add_component_interactions(&mut node, interactions);

            node.geometry.x = section.x.unwrap_or(self.content.x);
            match section.y {
                Some(y) => node.geometry.y = y,
                None => {
                    node.geometry.y = cursor;
                    cursor += self.advance(&node, section);
                }
            }
            placed.push(node);
        }
        placed
    }

    fn advance(&self, node: &VisualNode, section: &Section) -> f64 {
        let height = cascade::size(&[Some(node.geometry.height)], self.flow.fallback_height);
        // Zero spacing counts as unset; negative spacing overlaps the next section.
        let spacing = section
            .spacing
            .filter(|s| s.is_finite() && *s != 0.0)
            .unwrap_or(self.flow.default_spacing);
        height + spacing
    }
}

/// Add the shadow affordance for each `toggle` or `overlay` interaction.
///
/// Shadows are appended after whatever effects the builder set.
pub fn add_component_interactions(node: &mut VisualNode, interactions: &[Interaction]) {
    for interaction in interactions {
        if matches!(interaction.action.as_deref(), Some("toggle" | "overlay")) {
            node.effects.push(Effect::drop_shadow(
                Color::BLACK.with_alpha(0.1),
                Vec2::new(0.0, 2.0),
                8.0,
            ));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/layout.rs"]
mod tests;
