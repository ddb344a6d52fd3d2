//! framesmith compiles declarative design reports into positioned, styled screen node trees.
//!
//! A report lists screens, each made of typed sections, plus global style tokens and a
//! navigation flow. Compilation is a pure, single-threaded transform:
//!
//! - Normalize a payload into a [`Report`]
//! - Compile it with a [`ScreenCompiler`] into a [`CompiledDocument`]
//! - Materialize the document through a host [`NodeFactory`] with [`apply`], all or nothing
//!
//! Malformed optional input never fails a compile; it falls back to theme defaults. Only a
//! missing payload, an empty screen list and unavailable fonts are errors.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod compile;
pub(crate) mod fingerprint;
pub(crate) mod preview;
pub(crate) mod prototype;
pub(crate) mod realize;
pub(crate) mod report;
pub(crate) mod scene;
pub(crate) mod style;

pub use crate::foundation::config::{
    ChromeConfig, CompileConfig, ContentConfig, FlowConfig, FontConfig, GridConfig,
};
pub use crate::foundation::core::{Geometry, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{FramesmithError, FramesmithResult};

pub use crate::compile::factory::{BuildContext, BuilderFn, ComponentFactory};
pub use crate::compile::layout::{LayoutEngine, add_component_interactions};
pub use crate::compile::screen::{DEFAULT_PAGE_NAME, ScreenCompiler, compile, compile_payload};
pub use crate::fingerprint::{DocumentFingerprint, fingerprint_document, fingerprint_node};
pub use crate::preview::{MAX_PREVIEW_EDGE, PreviewOpts, render_preview};
pub use crate::prototype::linker::{LinkStats, PrototypeLinker, find_trigger_path};
pub use crate::prototype::transitions::{resolve_transition, resolve_trigger};
pub use crate::realize::apply::{ApplyReport, apply, ensure_fonts};
pub use crate::realize::factory::NodeFactory;
pub use crate::realize::memory::{MemHandle, MemoryFactory};
pub use crate::report::model::{
    ColorTokens, DEFAULT_PROJECT_NAME, EdgeInteraction, Interaction, NavigationEdge, Report,
    Screen, Section, StyleTokens,
};
pub use crate::scene::document::CompiledDocument;
pub use crate::scene::node::{
    Effect, Fill, FontWeight, GradientStop, IDENTITY_GRADIENT_TRANSFORM, Navigation, NodeId,
    NodeKind, Reaction, SlideDirection, Stroke, TextAlign, TextContent, TextSizing, Transition,
    Trigger, VisualNode,
};
pub use crate::style::color::{Color, hex_to_color, hex_to_color_alpha};
pub use crate::style::gradient::{
    FALLBACK_GRADIENT, is_linear_gradient, parse_gradient, scan_hex_colors,
};
pub use crate::style::theme::{Theme, ThemeTokens, resolve_theme};
