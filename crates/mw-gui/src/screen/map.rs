//! Hex map of the active world with terrain legend and location tooltips.
//!
//! Drag to pan, scroll to zoom, click a location to select it.

use macroquad::prelude::{draw_rectangle, get_time, screen_height, screen_width};
use mw_core::{Point, Rgba, Surface, WorldLocation, WorldView};
use mw_hexmap::{HexMapRenderer, MapEvent, MapFrame, StyleTable};

use crate::app::AppState;
use crate::input;
use crate::surface::MacroquadSurface;
use crate::theme::{CAPTION_SIZE, HEADING_SIZE, PADDING, TEXT_SIZE, palette, to_color};
use crate::widget::label::{draw_label, draw_label_centered};
use crate::widget::panel::draw_panel;
use crate::widget::text_area::{block_height, chars_per_line, draw_text_area, wrap_text};
use crate::widget::{Rect2, draw_separator};

use super::{Screen, ScreenId, Transition};

const HEADER_WIDTH: f32 = 320.0;
const LEGEND_WIDTH: f32 = 180.0;
const LEGEND_ROW: f32 = 20.0;
const SWATCH: f32 = 12.0;
const TOOLTIP_WIDTH: f32 = 240.0;
const TOOLTIP_OFFSET: f32 = 16.0;
const HINT: &str = "LMB: PAN | SCROLL: ZOOM | [ ]: WORLD | R: RESET | TAB: GRAPH";

/// Map screen state.
///
/// The camera and pointer state live in [`AppState::map_view`] so they
/// survive switching to the graph and back.
pub struct MapScreen {
    renderer: HexMapRenderer,
    time: f64,
}

impl MapScreen {
    /// Create a map screen using the map settings of `app`.
    pub fn new(app: &AppState) -> Self {
        Self {
            renderer: HexMapRenderer::new(app.map_config.clone()),
            time: 0.0,
        }
    }

    fn apply(app: &mut AppState, event: MapEvent) {
        match event {
            MapEvent::HoverChanged(location) => app.hovered_location = location,
            MapEvent::Selected(location) => {
                tracing::info!(location = ?location, "location selected");
                app.active_location = location;
            }
        }
    }

    fn handle_pointer(app: &mut AppState) {
        if !input::mouse_in_window() {
            if let Some(event) = app.map_view.pointer_leave() {
                Self::apply(app, event);
            }
            return;
        }
        let pointer = input::mouse_point();
        let center = input::window_center();
        let (controller, world) = app.map_parts();
        if input::left_pressed() {
            controller.pointer_down(pointer);
        }
        let moved = controller.pointer_move(pointer, center, world);
        let released = if input::left_released() {
            controller.pointer_up(pointer, center, world)
        } else {
            None
        };
        let wheel = input::wheel_delta();
        if wheel != 0.0 {
            controller.wheel(wheel);
        }
        for event in [moved, released].into_iter().flatten() {
            Self::apply(app, event);
        }
    }
}

impl Screen for MapScreen {
    fn update(&mut self, app: &mut AppState) -> Transition {
        if input::quit_pressed() {
            app.should_quit = true;
        }
        if input::escape_pressed() {
            return Transition::Pop;
        }
        if input::tab_pressed() {
            return Transition::Replace(ScreenId::Map.toggled());
        }
        let step = input::world_step();
        if step != 0 {
            app.cycle_world(step);
        }
        if input::reset_pressed() {
            app.map_view.camera_mut().reset();
        }
        self.time = get_time();
        Self::handle_pointer(app);
        Transition::None
    }

    fn draw(&self, app: &AppState) {
        let world = app.world();
        let frame = MapFrame {
            world,
            camera: app.map_view.camera(),
            active_location: app.active_location.as_deref(),
            hovered: app.map_view.hovered_cell(),
            time: self.time,
        };
        let stats = self.renderer.draw(&mut MacroquadSurface, &frame);
        tracing::trace!(drawn = stats.drawn, culled = stats.culled, "map frame");

        let position = app.catalog().position(&world.id).unwrap_or_default() + 1;
        draw_header(world, position, app.catalog().len());
        draw_legend(world, self.renderer.styles());
        if let Some(location) = app.hovered_location() {
            draw_tooltip(location, world, input::mouse_point());
        } else if let Some(location) = app.active_location() {
            let anchor = Point::new(screen_width() - TOOLTIP_WIDTH - PADDING, PADDING);
            draw_location_card(location, world, anchor);
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

fn draw_header(world: &WorldView, position: usize, total: usize) {
    let inner_w = HEADER_WIDTH - PADDING * 2.0;
    let description = wrap_text(&world.description, chars_per_line(inner_w, CAPTION_SIZE));
    let lines = description.len().min(3);
    let height = PADDING * 3.0 + HEADING_SIZE + TEXT_SIZE + block_height(lines, CAPTION_SIZE);
    let area = Rect2::new(PADDING, PADDING, HEADER_WIDTH, height);
    draw_panel(&area);

    let inner = area.inset(PADDING);
    draw_label(&world.name, inner.x, inner.y, HEADING_SIZE, to_color(world.theme_color));
    let (_, rest) = inner.take_top(HEADING_SIZE + 4.0);
    let era = format!("{} ({position}/{total})", world.era);
    draw_label(&era, rest.x, rest.y, TEXT_SIZE, palette::MUTED);
    let (_, body) = rest.take_top(TEXT_SIZE + PADDING);
    draw_separator(body.x, body.y - PADDING / 2.0, body.w);
    draw_text_area(&world.description, &body, CAPTION_SIZE, palette::TEXT);
}

fn draw_legend(world: &WorldView, styles: &StyleTable) {
    let terrains = world.legend();
    if terrains.is_empty() {
        return;
    }
    let height = PADDING * 2.0 + TEXT_SIZE + 6.0 + terrains.len() as f32 * LEGEND_ROW;
    let area = Rect2::new(
        PADDING,
        screen_height() - height - PADDING * 2.0 - CAPTION_SIZE,
        LEGEND_WIDTH,
        height,
    );
    draw_panel(&area);

    let inner = area.inset(PADDING);
    draw_label("TOPOGRAPHY", inner.x, inner.y, TEXT_SIZE, palette::MUTED);
    let mut surface = MacroquadSurface;
    let mut y = inner.y + TEXT_SIZE + 6.0;
    for terrain in terrains {
        let style = styles.get(terrain);
        let swatch_y = y + (LEGEND_ROW - SWATCH) / 2.0 - 2.0;
        draw_rectangle(inner.x, swatch_y, SWATCH, SWATCH, to_color(style.effective_fill()));
        let glyph_center = Point::new(inner.x + SWATCH / 2.0, swatch_y + SWATCH / 2.0);
        surface.glyph(style.glyph, glyph_center, SWATCH * 0.8, Rgba::WHITE.with_alpha(0.9));
        let name = terrain.label().to_uppercase();
        draw_label(&name, inner.x + SWATCH + 8.0, y, CAPTION_SIZE, palette::TEXT);
        y += LEGEND_ROW;
    }
}

fn card_height(location: &WorldLocation) -> f32 {
    let width = chars_per_line(TOOLTIP_WIDTH - PADDING * 2.0, CAPTION_SIZE);
    let lines = wrap_text(&location.description, width).len();
    PADDING * 3.0 + TEXT_SIZE + CAPTION_SIZE + block_height(lines, CAPTION_SIZE)
}

fn draw_tooltip(location: &WorldLocation, world: &WorldView, pointer: Point) {
    let anchor = pointer + Point::new(TOOLTIP_OFFSET, TOOLTIP_OFFSET);
    draw_location_card(location, world, anchor);
}

fn draw_location_card(location: &WorldLocation, world: &WorldView, anchor: Point) {
    let area = Rect2::new(anchor.x, anchor.y, TOOLTIP_WIDTH, card_height(location))
        .clamped_to(screen_width(), screen_height());
    draw_panel(&area);

    let inner = area.inset(PADDING);
    draw_label(&location.name, inner.x, inner.y, TEXT_SIZE, to_color(world.theme_color));
    let (_, rest) = inner.take_top(TEXT_SIZE + 4.0);
    let terrain = location.terrain.label().to_uppercase();
    draw_label(&terrain, rest.x, rest.y, CAPTION_SIZE, palette::MUTED);
    let (_, body) = rest.take_top(CAPTION_SIZE + PADDING);
    draw_text_area(&location.description, &body, CAPTION_SIZE, palette::TEXT);
}
