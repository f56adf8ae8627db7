//! Universe graph view driven by the force-directed layout.
//!
//! Hover a node to inspect it, press NEXT DAY (or N) to grow the universe.

use macroquad::prelude::{screen_height, screen_width};
use mw_core::{GraphNode, Point};
use mw_graph::{GraphController, GraphEvent, GraphFrame, GraphRenderer};

use crate::app::AppState;
use crate::input;
use crate::surface::MacroquadSurface;
use crate::theme::{CAPTION_SIZE, PADDING, TEXT_SIZE, palette};
use crate::widget::Rect2;
use crate::widget::bar::{BAR_HEIGHT, draw_bar};
use crate::widget::button::{button_clicked, draw_button};
use crate::widget::label::{draw_label, draw_label_centered};
use crate::widget::panel::draw_panel;
use crate::widget::text_area::{block_height, chars_per_line, draw_text_area, wrap_text};

use super::{Screen, ScreenId, Transition};

const BUTTON_WIDTH: f32 = 140.0;
const BUTTON_HEIGHT: f32 = 36.0;
const TOOLTIP_WIDTH: f32 = 220.0;
const TOOLTIP_OFFSET: f32 = 20.0;
const HINT: &str = "HOVER: INSPECT | N: NEXT DAY | TAB: MAP";

/// Graph screen state.
///
/// The simulation itself lives in [`AppState::layout`] so node positions
/// survive switching to the map and back.
pub struct GraphScreen {
    renderer: GraphRenderer,
    controller: GraphController,
    last_pointer: Option<Point>,
}

impl GraphScreen {
    /// Create a graph screen using the force settings of `app`.
    pub fn new(app: &AppState) -> Self {
        Self {
            renderer: GraphRenderer::new(&app.force_config),
            controller: GraphController::new(&app.force_config),
            last_pointer: None,
        }
    }

    /// Record `pointer`; true when it differs from the last recorded one.
    fn pointer_moved(&mut self, pointer: Point) -> bool {
        if self.last_pointer == Some(pointer) {
            return false;
        }
        self.last_pointer = Some(pointer);
        true
    }

    fn apply(app: &mut AppState, event: GraphEvent) {
        match event {
            GraphEvent::HoverChanged(node) => app.hovered_node = node,
        }
    }
}

/// Where the NEXT DAY button sits in the current window.
fn next_day_area() -> Rect2 {
    Rect2::new(
        screen_width() - BUTTON_WIDTH - PADDING * 2.0,
        screen_height() - BUTTON_HEIGHT - PADDING * 2.0,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

impl Screen for GraphScreen {
    fn update(&mut self, app: &mut AppState) -> Transition {
        if input::quit_pressed() {
            app.should_quit = true;
        }
        if input::escape_pressed() {
            return Transition::Pop;
        }
        if input::tab_pressed() {
            return Transition::Replace(ScreenId::Graph.toggled());
        }

        let pointer = input::mouse_point();
        let on_button = button_clicked(&next_day_area(), pointer.x, pointer.y);
        if on_button || input::next_day_pressed() {
            app.grow();
        } else if input::left_pressed()
            && let Some(event) = self.controller.click()
        {
            Self::apply(app, event);
        }

        app.layout.step(&app.nodes);

        if input::mouse_in_window() {
            // Hover is only re-picked on movement so a click can dismiss it.
            if self.pointer_moved(pointer) {
                let center = input::window_center();
                if let Some(event) =
                    self.controller
                        .pointer_move(pointer, center, &app.layout, &app.nodes)
                {
                    Self::apply(app, event);
                }
            }
        } else {
            self.last_pointer = None;
            if let Some(event) = self.controller.click() {
                Self::apply(app, event);
            }
        }
        Transition::None
    }

    fn draw(&self, app: &AppState) {
        let frame = GraphFrame {
            nodes: &app.nodes,
            hovered: app.hovered_node.as_ref(),
        };
        self.renderer.draw(&mut MacroquadSurface, &app.layout, &frame);

        draw_hud(app);
        let button = next_day_area();
        let pointer = input::mouse_point();
        draw_button("NEXT DAY", &button, button.contains(pointer.x, pointer.y));
        if let Some(node) = app.hovered_node() {
            draw_node_card(node, pointer);
        }
        draw_label_centered(
            HINT,
            0.0,
            screen_height() - CAPTION_SIZE - PADDING,
            screen_width(),
            CAPTION_SIZE,
            palette::HINT,
        );
    }
}

fn draw_hud(app: &AppState) {
    let lines = [
        "UNIVERSE: ONLINE".to_string(),
        format!("NODES: {}", app.nodes.len()),
        format!("DAY: {}", app.day),
    ];
    let mut y = PADDING * 2.0;
    for line in &lines {
        draw_label(line, PADDING * 2.0, y, TEXT_SIZE, palette::HUD_GREEN);
        y += TEXT_SIZE + 4.0;
    }
}

fn draw_node_card(node: &GraphNode, pointer: Point) {
    let width = chars_per_line(TOOLTIP_WIDTH - PADDING * 2.0, CAPTION_SIZE);
    let lines = wrap_text(&node.description, width).len();
    let height = PADDING * 4.0
        + TEXT_SIZE
        + CAPTION_SIZE
        + block_height(lines, CAPTION_SIZE)
        + BAR_HEIGHT * 3.0;
    let area = Rect2::new(
        pointer.x + TOOLTIP_OFFSET,
        pointer.y + TOOLTIP_OFFSET,
        TOOLTIP_WIDTH,
        height,
    )
    .clamped_to(screen_width(), screen_height());
    draw_panel(&area);

    let inner = area.inset(PADDING);
    draw_label(&node.title, inner.x, inner.y, TEXT_SIZE, palette::TEXT);
    let (_, rest) = inner.take_top(TEXT_SIZE + 4.0);
    let kind = format!("{} / LEVEL {}", node.kind.to_string().to_uppercase(), node.level);
    draw_label(&kind, rest.x, rest.y, CAPTION_SIZE, palette::MUTED);
    let (_, rest) = rest.take_top(CAPTION_SIZE + PADDING);
    let (body, stats) = rest.take_top(block_height(lines, CAPTION_SIZE) + PADDING);
    draw_text_area(&node.description, &body, CAPTION_SIZE, palette::TEXT);

    let readings = [
        ("H2O", node.stats.water, palette::WATER),
        ("O2", node.stats.oxygen, palette::OXYGEN),
        ("LIFE", node.stats.biomass, palette::HUD_GREEN),
    ];
    let mut row = stats;
    for (label, value, color) in readings {
        let (bar, remainder) = row.take_top(BAR_HEIGHT);
        draw_bar(label, value, &bar, color);
        row = remainder;
    }
}
