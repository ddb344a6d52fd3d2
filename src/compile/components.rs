//! Builders for the known section types.
//!
//! Every builder is a pure function of its [`BuildContext`]: it never looks at sibling sections
//! or at the position the layout engine will assign.

use crate::{
    compile::factory::BuildContext,
    foundation::core::{Geometry, Vec2},
    report::cascade,
    scene::node::{Effect, Fill, FontWeight, TextAlign, TextContent, TextSizing, VisualNode},
    style::{
        color::Color,
        gradient::{is_linear_gradient, parse_gradient},
    },
};

const DARK_TEXT: &str = "#111827";
const CHIP_DEFAULTS: [&str; 3] = ["Primary", "Secondary", "Tertiary"];
const CARD_GAP: f64 = 16.0;
const HANDLE_SIZE: (f64, f64) = (48.0, 4.0);

fn lit(hex: &str) -> Color {
    cascade::color(&[Some(hex)], Color::BLACK)
}

fn shadow(hex: &str, alpha: f64, dy: f64, radius: f64) -> Effect {
    Effect::drop_shadow(lit(hex).with_alpha(alpha), Vec2::new(0.0, dy), radius)
}

fn gradient_fill(source: &str) -> Fill {
    Fill::linear(parse_gradient(source))
}

/// Cards and sheets accept either a flat color or a gradient string as background.
fn background_fill(background: Option<&str>) -> Fill {
    match background {
        Some(bg) if is_linear_gradient(bg) => gradient_fill(bg),
        bg => Fill::solid(cascade::color(&[bg], Color::WHITE)),
    }
}

/// Text on a non-white background is drawn white.
fn on_background(background: Option<&str>) -> bool {
    background.is_some_and(|bg| !bg.is_empty() && !bg.eq_ignore_ascii_case("#FFFFFF"))
}

fn label(characters: &str, size: f64, weight: FontWeight, color: Color, x: f64, y: f64) -> VisualNode {
    VisualNode::text(
        TextContent::new(characters, size, weight).colored(color),
        Geometry::default().at(x, y),
    )
}

fn boxed_label(content: TextContent, geometry: Geometry) -> VisualNode {
    VisualNode::text(
        TextContent {
            sizing: TextSizing::Fixed,
            ..content
        },
        geometry,
    )
}

pub(crate) fn gradient_banner(ctx: &BuildContext<'_>) -> VisualNode {
    let s = ctx.section;
    let height = cascade::size(&[s.height], 260.0);
    let mut banner = VisualNode::frame("Gradient Banner", Geometry::sized(ctx.content_width, height));
    banner.corner_radius = cascade::size(&[s.corner_radius], 24.0);
    banner.fills = vec![gradient_fill(cascade::text(
        &[s.gradient.as_deref()],
        ctx.theme.gradient,
    ))];
    banner.effects = vec![shadow("#000000", 0.22, 10.0, 32.0)];

    banner.children.push(label(
        cascade::text(&[s.title.as_deref()], "Featured Content"),
        cascade::size(&[s.title_size], 40.0),
        FontWeight::Bold,
        cascade::color(&[s.text_color.as_deref()], Color::WHITE),
        40.0,
        40.0,
    ));
    banner
}

pub(crate) fn filter_chips(ctx: &BuildContext<'_>) -> VisualNode {
    let s = ctx.section;
    let mut container = VisualNode::frame("Filter Chips", Geometry::sized(ctx.content_width, 80.0));

    let items: Vec<&str> = match &s.items {
        Some(items) => items.iter().map(String::as_str).collect(),
        None => CHIP_DEFAULTS.to_vec(),
    };
    let w = cascade::size(&[s.chip_width], 120.0);
    let h = cascade::size(&[s.chip_height], 44.0);
    let gap = cascade::size(&[s.chip_gap], 16.0);
    let active_fill = cascade::color(&[s.active_color.as_deref()], lit("#FF6B6B"));
    let inactive_fill = cascade::color(&[s.inactive_color.as_deref()], lit("#F8F9FA"));

    let mut x = 0.0;
    for (index, item) in items.into_iter().enumerate() {
        // An index outside the list, negative included, leaves every chip inactive.
        let active = s
            .active_index
            .map_or(index == 0, |ai| i64::try_from(index).is_ok_and(|i| i == ai));
        let mut chip = VisualNode::frame(format!("Chip {}", index + 1), Geometry::new(x, 0.0, w, h));
        chip.corner_radius = 999.0;
        chip.fills = vec![Fill::solid(if active { active_fill } else { inactive_fill })];
        chip.effects = vec![shadow("#000000", 0.1, 4.0, 15.0)];

        let text_color = if active { Color::WHITE } else { lit(DARK_TEXT) };
        chip.children.push(boxed_label(
            TextContent::new(item, 15.0, FontWeight::Regular)
                .colored(text_color)
                .centered(),
            Geometry::sized(w, h),
        ));

        container.children.push(chip);
        x += w + gap;
    }
    container
}

pub(crate) fn event_cards(ctx: &BuildContext<'_>) -> VisualNode {
    let s = ctx.section;
    // At most one card per gap width, so card widths stay positive.
    let max_columns = (ctx.content_width / CARD_GAP).floor().max(1.0) as u32;
    let columns = s.grid_columns.filter(|c| *c > 0).unwrap_or(2).min(max_columns);
    let card_width =
        ((ctx.content_width - f64::from(columns - 1) * CARD_GAP) / f64::from(columns)).max(0.0);
    let card_height = cascade::size(&[s.card_height], 260.0);
    let stops = parse_gradient(cascade::text(
        &[s.gradient.as_deref()],
        "linear #6366F1 → #EC4899",
    ));

    let mut container = VisualNode::frame(
        "Event Cards",
        Geometry::sized(ctx.content_width, cascade::size(&[s.height], 320.0)),
    );

    for i in 0..columns {
        let n = i + 1;
        let fallback_name = format!("Event Card {n}");
        let fallback_text = format!("Event {n}");
        let x = f64::from(i) * (card_width + CARD_GAP);

        let mut card = VisualNode::frame(
            cascade::text(&[s.title.as_deref()], &fallback_name),
            Geometry::new(x, 0.0, card_width, card_height),
        );
        card.corner_radius = cascade::size(&[s.corner_radius], 24.0);
        card.fills = vec![Fill::linear(stops)];
        card.effects = vec![shadow("#000000", 0.14, 10.0, 32.0)];
        card.children.push(label(
            cascade::text(&[s.card_title.as_deref()], &fallback_text),
            20.0,
            FontWeight::Bold,
            Color::WHITE,
            24.0,
            24.0,
        ));
        container.children.push(card);
    }
    container
}

pub(crate) fn elevated_container(ctx: &BuildContext<'_>) -> VisualNode {
    let s = ctx.section;
    let mut container = VisualNode::frame(
        "Elevated Container",
        Geometry::sized(ctx.content_width, cascade::size(&[s.height], 160.0)),
    );
    container.corner_radius = cascade::size(&[s.corner_radius], 22.0);
    container.fills = vec![gradient_fill(cascade::text(
        &[s.gradient.as_deref()],
        "linear #F97316 → #EC4899",
    ))];
    container.effects = vec![shadow("#F97316", 0.35, 12.0, 40.0)];
    container.children.push(label(
        cascade::text(&[s.title.as_deref()], "Elevated Content"),
        22.0,
        FontWeight::Bold,
        Color::WHITE,
        28.0,
        64.0,
    ));
    container
}

pub(crate) fn section_heading(ctx: &BuildContext<'_>) -> VisualNode {
    let s = ctx.section;
    let background = s.background.as_deref();
    let filled = cascade::is_set(background);

    let mut container =
        VisualNode::frame("Section Heading", Geometry::sized(ctx.content_width, 80.0));
    if filled {
        container.fills = vec![Fill::solid(cascade::color(
            &[background, Some(ctx.theme.accent)],
            Color::BLACK,
        ))];
        container.corner_radius = 16.0;
    }

    let default_text = if filled { Color::WHITE } else { lit(DARK_TEXT) };
    container.children.push(label(
        cascade::text(&[s.title.as_deref()], "Section Title"),
        cascade::size(&[s.title_size], 26.0),
        FontWeight::Bold,
        cascade::color(&[s.text_color.as_deref()], default_text),
        24.0,
        26.0,
    ));
    container
}

pub(crate) fn rounded_card(ctx: &BuildContext<'_>) -> VisualNode {
    let s = ctx.section;
    let background = s.background.as_deref();

    let mut card = VisualNode::frame(
        "Rounded Card",
        Geometry::sized(ctx.content_width, cascade::size(&[s.height], 200.0)),
    );
    card.corner_radius = cascade::size(&[s.corner_radius], 24.0);
    card.fills = vec![background_fill(background)];
    card.effects = vec![shadow("#000000", 0.12, 8.0, 30.0)];

    let default_text = if on_background(background) {
        Color::WHITE
    } else {
        lit(DARK_TEXT)
    };
    card.children.push(label(
        cascade::text(&[s.title.as_deref()], "Rounded Card Content"),
        18.0,
        FontWeight::Regular,
        cascade::color(&[s.text_color.as_deref()], default_text),
        24.0,
        24.0,
    ));
    card
}

pub(crate) fn bottom_sheet(ctx: &BuildContext<'_>) -> VisualNode {
    let s = ctx.section;
    let background = s.background.as_deref();
    let width = ctx.content_width;
    let dark = on_background(background);

    let mut sheet = VisualNode::frame(
        "Bottom Sheet",
        Geometry::sized(width, cascade::size(&[s.height], 380.0)),
    );
    sheet.corner_radius = cascade::size(&[s.corner_radius], 32.0);
    sheet.fills = vec![background_fill(background)];
    sheet.effects = vec![
        shadow("#000000", 0.2, -8.0, 24.0),
        shadow("#000000", 0.1, -2.0, 8.0),
    ];

    let (hw, hh) = HANDLE_SIZE;
    let mut handle = VisualNode::frame("Handle", Geometry::new((width - hw) / 2.0, 12.0, hw, hh));
    handle.corner_radius = 2.0;
    let handle_default = if dark { Color::WHITE } else { lit("#D1D5DB") };
    handle.fills = vec![Fill::solid(cascade::color(
        &[s.handle_color.as_deref()],
        handle_default,
    ))];
    sheet.children.push(handle);

    let text_default = if dark { Color::WHITE } else { lit(DARK_TEXT) };
    let content = TextContent {
        align_h: TextAlign::Center,
        ..TextContent::new(
            cascade::text(
                &[s.title.as_deref(), s.total.as_deref()],
                "Bottom Sheet Content – swipe up for more details",
            ),
            18.0,
            FontWeight::Regular,
        )
        .colored(cascade::color(&[s.text_color.as_deref()], text_default))
    };
    sheet.children.push(boxed_label(
        content,
        Geometry::new(32.0, 52.0, width - 64.0, 100.0),
    ));
    sheet
}

pub(crate) fn floating_action_button(ctx: &BuildContext<'_>) -> VisualNode {
    let s = ctx.section;
    let size = cascade::size(&[s.size], 64.0);

    let mut fab = VisualNode::frame("Floating Action Button", Geometry::sized(size, size));
    fab.corner_radius = size / 2.0;
    fab.fills = vec![gradient_fill(cascade::text(
        &[s.gradient.as_deref()],
        "linear #22C55E → #16A34A",
    ))];
    fab.effects = vec![shadow("#22C55E", 0.4, 8.0, 16.0)];
    fab.children.push(boxed_label(
        TextContent::new(
            cascade::text(&[s.icon.as_deref()], "+"),
            cascade::size(&[s.icon_size], 30.0),
            FontWeight::Bold,
        )
        .colored(Color::WHITE)
        .centered(),
        Geometry::sized(size, size),
    ));
    fab
}

/// Fallback for unknown component types: a flat, surface-colored block.
pub(crate) fn basic(ctx: &BuildContext<'_>) -> VisualNode {
    let s = ctx.section;
    let component = cascade::text(&[s.component.as_deref()], "Component");

    let mut container = VisualNode::frame(
        component,
        Geometry::sized(ctx.content_width, cascade::size(&[s.height], 120.0)),
    );
    container.corner_radius = cascade::size(&[s.corner_radius], 16.0);
    container.fills = vec![Fill::solid(cascade::color(
        &[
            s.background.as_deref(),
            ctx.colors.surface.as_deref(),
            Some(ctx.theme.surface),
        ],
        lit("#F8F9FA"),
    ))];

    let fallback_text = format!("{component} – auto generated content");
    container.children.push(label(
        cascade::text(&[s.title.as_deref()], &fallback_text),
        14.0,
        FontWeight::Regular,
        Color::BLACK,
        16.0,
        16.0,
    ));
    container
}

#[cfg(test)]
#[path = "../../tests/unit/compile/components.rs"]
mod tests;
