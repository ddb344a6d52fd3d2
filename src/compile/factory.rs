use std::collections::BTreeMap;

use crate::{
    compile::components,
    report::model::{ColorTokens, Section},
    scene::node::VisualNode,
    style::theme::ThemeTokens,
};

/// Everything a builder may read.
#[derive(Clone, Copy, Debug)]
pub struct BuildContext<'a> {
    /// Section being built.
    pub section: &'a Section,
    /// Report-wide explicit colors.
    pub colors: &'a ColorTokens,
    /// Theme defaults.
    pub theme: ThemeTokens,
    /// Default node width.
    pub content_width: f64,
}

/// Builder signature: one styled subtree per section.
pub type BuilderFn = fn(&BuildContext<'_>) -> VisualNode;

/// Registry of section builders keyed by component type tag.
///
/// Unknown tags resolve to the fallback builder, so building never fails.
#[derive(Clone, Debug)]
pub struct ComponentFactory {
    builders: BTreeMap<String, BuilderFn>,
    fallback: BuilderFn,
}

impl Default for ComponentFactory {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl ComponentFactory {
    /// Registry with no known types; everything goes to the fallback builder.
    pub fn empty() -> Self {
        Self {
            builders: BTreeMap::new(),
            fallback: components::basic,
        }
    }

    /// Registry with the eight built-in section types.
    pub fn with_builtin() -> Self {
        let mut f = Self::empty();
        f.register("gradient_banner", components::gradient_banner);
        f.register("filter_chips", components::filter_chips);
        f.register("event_cards", components::event_cards);
        f.register("elevated_container", components::elevated_container);
        f.register("section_heading", components::section_heading);
        f.register("rounded_card", components::rounded_card);
        f.register("bottom_sheet", components::bottom_sheet);
        f.register("floating_action_button", components::floating_action_button);
        f
    }

    /// Add or replace the builder for `component`, returning the previous one.
    pub fn register(&mut self, component: impl Into<String>, builder: BuilderFn) -> Option<BuilderFn> {
        self.builders.insert(component.into(), builder)
    }

    /// Replace the builder used for unknown component types.
    pub fn set_fallback(&mut self, builder: BuilderFn) {
        self.fallback = builder;
    }

    /// Whether `component` has a dedicated builder.
    pub fn is_known(&self, component: &str) -> bool {
        self.builders.contains_key(component)
    }

    /// Registered type tags, sorted.
    pub fn known_components(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }

    /// Build the subtree for `ctx.section`.
    pub fn build(&self, ctx: &BuildContext<'_>) -> VisualNode {
        let builder = ctx
            .section
            .component
            .as_deref()
            .and_then(|c| self.builders.get(c))
            .copied()
            .unwrap_or(self.fallback);
        builder(ctx)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/factory.rs"]
mod tests;
