use mw_core::{AxialCoord, Point, Rgba, Surface, WorldView};

use crate::camera::Camera;
use crate::config::MapConfig;
use crate::layout::{HexLayout, hexagon};
use crate::style::StyleTable;
use crate::terrain::TerrainResolver;

const GRID_STROKE: f32 = 1.0;
const HOVER_STROKE: f32 = 2.0;
const ACTIVE_STROKE: f32 = 3.0;
const ACTIVE_GLOW_STROKE: f32 = 8.0;
const REGION_LABEL_SIZE: f32 = 24.0;
const GLYPH_SIZE: f32 = 14.0;
const MIN_GLYPH_SIZE: f32 = 10.0;
const PULSE_RATE: f64 = 5.0;

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct MapFrame<'a> {
    /// World being shown.
    pub world: &'a WorldView,
    /// Current view.
    pub camera: &'a Camera,
    /// Id of the selected location, if any.
    pub active_location: Option<&'a str>,
    /// Cell under the pointer, if any.
    pub hovered: Option<AxialCoord>,
    /// Seconds since start, drives the selection pulse.
    pub time: f64,
}

/// Counts gathered while drawing a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Cells drawn.
    pub drawn: usize,
    /// Cells skipped because they were off screen.
    pub culled: usize,
}

/// Draws the visible part of a hex map onto a [`Surface`].
#[derive(Debug, Clone)]
pub struct HexMapRenderer {
    config: MapConfig,
    layout: HexLayout,
    styles: StyleTable,
}

impl Default for HexMapRenderer {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}

impl HexMapRenderer {
    /// Create a renderer with the standard style table.
    pub fn new(config: MapConfig) -> Self {
        Self {
            layout: HexLayout::new(config.hex_size),
            styles: StyleTable::standard(),
            config,
        }
    }

    /// Use a custom style table.
    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// The style table in use.
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// The hex projection in use.
    pub fn layout(&self) -> HexLayout {
        self.layout
    }

    /// Draw one frame. Returns what was drawn and culled.
    pub fn draw(&self, surface: &mut impl Surface, frame: &MapFrame<'_>) -> FrameStats {
        let (width, height) = surface.size();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return FrameStats::default();
        }
        let world = frame.world;
        let camera = frame.camera;
        let center = Point::new(width / 2.0, height / 2.0);
        let on_screen = |p: Point, margin: f32| {
            p.x >= -margin && p.x <= width + margin && p.y >= -margin && p.y <= height + margin
        };

        surface.clear(StyleTable::background(world.theme));

        let resolver =
            TerrainResolver::new(world).with_threshold(self.config.edge_noise_threshold);
        let locations = world.location_index();
        let active = frame
            .active_location
            .and_then(|id| world.location(id))
            .map(|location| location.coord());
        let radius = self.config.cell_radius() * camera.scale();
        let glyph_size = (GLYPH_SIZE * camera.scale()).max(MIN_GLYPH_SIZE);
        let show_names = camera.scale() >= self.config.name_label_scale;

        let mut stats = FrameStats::default();
        for coord in hexagon(self.config.map_radius) {
            let screen = camera.world_to_screen(self.layout.hex_to_pixel(coord), center);
            if !on_screen(screen, self.config.cull_margin) {
                stats.culled += 1;
                continue;
            }
            stats.drawn += 1;

            let style = self.styles.get(resolver.resolve(coord));
            let corners = HexLayout::corners(screen, radius);
            surface.fill_polygon(&corners, style.effective_fill());

            if active == Some(coord) {
                surface.fill_polygon(&corners, Rgba::WHITE.with_alpha(0.3));
                surface.stroke_polygon(&corners, ACTIVE_GLOW_STROKE, Rgba::WHITE.with_alpha(0.15));
                surface.stroke_polygon(&corners, ACTIVE_STROKE, Rgba::WHITE);
            } else if frame.hovered == Some(coord) {
                surface.stroke_polygon(&corners, HOVER_STROKE, Rgba::WHITE);
            } else {
                surface.stroke_polygon(&corners, GRID_STROKE, Rgba::WHITE.with_alpha(0.05));
            }

            if let Some(location) = locations.get(&coord) {
                let ink = Rgba::WHITE.with_alpha(0.9);
                surface.glyph(style.glyph, screen, glyph_size, ink);
                if show_names {
                    let below = screen + Point::new(0.0, radius * 0.55);
                    surface.text(&location.name, below, glyph_size * 0.6, ink);
                }
            }
        }

        for region in &world.regions {
            let screen = camera.world_to_screen(self.layout.hex_to_pixel(region.center), center);
            if on_screen(screen, self.config.label_margin) {
                surface.outlined_text(
                    &region.name,
                    screen,
                    REGION_LABEL_SIZE * camera.scale(),
                    region.color,
                    Rgba::BLACK.with_alpha(0.8),
                );
            }
        }

        if let Some(coord) = active {
            let screen = camera.world_to_screen(self.layout.hex_to_pixel(coord), center);
            let alpha = 0.4 + 0.2 * (frame.time * PULSE_RATE).sin();
            surface.stroke_circle(
                screen,
                2.0 * self.config.hex_size * camera.scale(),
                2.0 * camera.scale(),
                Rgba::WHITE.with_alpha(alpha as f32),
            );
        }

        tracing::trace!(drawn = stats.drawn, culled = stats.culled, "hex map frame");
        stats
    }
}
