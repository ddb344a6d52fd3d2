use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    compile::{factory::ComponentFactory, layout::LayoutEngine},
    foundation::{
        config::CompileConfig,
        core::Geometry,
        error::{FramesmithError, FramesmithResult},
    },
    prototype::linker::PrototypeLinker,
    report::{
        cascade,
        model::{Report, Screen},
    },
    scene::{
        document::CompiledDocument,
        node::{Fill, FontWeight, Stroke, TextContent, VisualNode},
    },
    style::{
        color::Color,
        theme::{ThemeTokens, resolve_theme},
    },
};

/// Page name used when the report has no project name.
pub const DEFAULT_PAGE_NAME: &str = "Auto Generated UI";

/// Turns a [`Report`] into a [`CompiledDocument`].
///
/// Compilation is pure: the whole forest is built in memory and nothing external is touched.
#[derive(Clone, Debug, Default)]
pub struct ScreenCompiler {
    config: CompileConfig,
    factory: ComponentFactory,
}

impl ScreenCompiler {
    /// Compiler with the built-in component set.
    pub fn new(config: CompileConfig) -> Self {
        Self::with_factory(config, ComponentFactory::with_builtin())
    }

    /// Compiler with a custom component registry.
    pub fn with_factory(config: CompileConfig, factory: ComponentFactory) -> Self {
        Self { config, factory }
    }

    /// Active configuration.
    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Component registry used for sections.
    pub fn factory(&self) -> &ComponentFactory {
        &self.factory
    }

    /// Compile every screen, then link the navigation flow.
    ///
    /// Fails with [`FramesmithError::NoScreensFound`] before building anything when the report
    /// has no screens.
    #[tracing::instrument(skip_all, fields(screens = report.screens.len()))]
    pub fn compile(&self, report: &Report) -> FramesmithResult<CompiledDocument> {
        if report.screens.is_empty() {
            return Err(FramesmithError::NoScreensFound);
        }
        self.config.validate()?;

        let colors = &report.styles.colors;
        let layout = LayoutEngine::new(&self.factory, self.config.content, self.config.flow);

        let mut roots = Vec::with_capacity(report.screens.len());
        let mut by_name = BTreeMap::new();
        for (index, screen) in report.screens.iter().enumerate() {
            let theme = resolve_theme(report.styles.theme.as_deref());
            let mut root = self.screen_frame(screen, index, report, theme);
            root.children.extend(layout.layout_screen(
                &screen.sections,
                colors,
                theme,
                &screen.interactions,
            ));
            tracing::debug!(
                screen = %root.name,
                sections = screen.sections.len(),
                "compiled screen"
            );
            by_name.insert(root.name.clone(), index);
            roots.push(root);
        }

        let page_name = cascade::text(&[report.project_name.as_deref()], DEFAULT_PAGE_NAME);
        let mut doc = CompiledDocument {
            page_name: page_name.to_owned(),
            roots,
            by_name,
        };
        doc.assign_ids();

        let stats = PrototypeLinker::link(&mut doc, &report.navigation_flow);
        tracing::debug!(
            nodes = doc.node_count(),
            linked = stats.linked,
            dropped = stats.dropped,
            "compiled document"
        );
        Ok(doc)
    }

    fn screen_frame(
        &self,
        screen: &Screen,
        index: usize,
        report: &Report,
        theme: ThemeTokens,
    ) -> VisualNode {
        let colors = &report.styles.colors;
        let canvas = self.config.canvas;
        let chrome = self.config.chrome;
        let grid = self.config.grid;

        let columns = grid.columns.max(1) as usize;
        let (col, row) = (index % columns, index / columns);
        let x = col as f64 * (canvas.width + grid.gap);
        let y = row as f64 * (canvas.height + grid.gap);

        let fallback_name = format!("Screen {}", index + 1);
        let name = cascade::text(&[screen.name.as_deref()], &fallback_name);
        let mut frame = VisualNode::frame(name, Geometry::new(x, y, canvas.width, canvas.height));
        frame.corner_radius = cascade::size(&[screen.corner_radius], chrome.corner_radius);
        frame.strokes = vec![Stroke {
            color: cascade::color(&[colors.accent.as_deref(), Some(theme.accent)], Color::BLACK),
            opacity: 0.1,
            weight: 2.0,
        }];
        frame.fills = vec![Fill::solid(cascade::color(
            &[
                screen.background.as_deref(),
                colors.surface.as_deref(),
                Some(theme.surface),
            ],
            Color::WHITE,
        ))];

        let heading = TextContent::new(
            cascade::text(
                &[screen.title.as_deref(), screen.name.as_deref()],
                "Untitled Screen",
            ),
            cascade::size(&[screen.title_size], 48.0),
            FontWeight::Bold,
        );
        frame.children.push(VisualNode::text(
            heading,
            Geometry::default().at(chrome.heading_x, chrome.heading_y),
        ));

        let description = TextContent {
            line_height: Some(26.0),
            ..TextContent::new(
                cascade::text(
                    &[screen.description.as_deref()],
                    "Auto generated based on your PDF/project spec.",
                ),
                18.0,
                FontWeight::Regular,
            )
        };
        let mut description = VisualNode::text(
            description,
            Geometry::default().at(chrome.heading_x, chrome.description_y),
        );
        description.opacity = 0.72;
        frame.children.push(description);

        frame
    }
}

/// Compile a report with the default configuration.
pub fn compile(report: &Report) -> FramesmithResult<CompiledDocument> {
    ScreenCompiler::default().compile(report)
}

/// Normalize a raw host payload and compile it with the default configuration.
///
/// A missing payload is reported before screens are checked.
pub fn compile_payload(payload: Option<Value>) -> FramesmithResult<CompiledDocument> {
    let report = Report::from_payload(payload)?;
    compile(&report)
}

#[cfg(test)]
#[path = "../../tests/unit/compile/screen.rs"]
mod tests;
