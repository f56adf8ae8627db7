//! Configuration for the hex map.

/// Tunables for map geometry, camera limits and rendering.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Center-to-corner size of a hex in world pixels.
    pub hex_size: f32,
    /// Gap between neighbouring hexes in world pixels.
    pub gap: f32,
    /// Cells further than this from the origin are neither drawn nor hit.
    pub map_radius: i32,
    /// Extra screen margin kept when culling cells.
    pub cull_margin: f32,
    /// Extra screen margin kept when culling region labels.
    pub label_margin: f32,
    /// Camera scale on start and after a reset.
    pub initial_scale: f32,
    /// Smallest camera scale.
    pub min_scale: f32,
    /// Largest camera scale.
    pub max_scale: f32,
    /// Scale change per unit of wheel delta.
    pub zoom_sensitivity: f32,
    /// Noise value above which an outer-ring cell escapes its region.
    pub edge_noise_threshold: f64,
    /// Camera scale from which location names are drawn under their glyphs.
    pub name_label_scale: f32,
    /// Pointer travel in pixels below which a press counts as a click.
    pub click_slop: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            hex_size: 40.0,
            gap: 2.0,
            map_radius: 15,
            cull_margin: 100.0,
            label_margin: 200.0,
            initial_scale: 0.8,
            min_scale: 0.3,
            max_scale: 3.0,
            zoom_sensitivity: 0.001,
            edge_noise_threshold: 0.7,
            name_label_scale: 1.2,
            click_slop: 4.0,
        }
    }
}

impl MapConfig {
    /// Set the hex size.
    pub fn with_hex_size(mut self, size: f32) -> Self {
        self.hex_size = size;
        self
    }

    /// Set the map radius (negative values become 0).
    pub fn with_map_radius(mut self, radius: i32) -> Self {
        self.map_radius = radius.max(0);
        self
    }

    /// Set the initial camera scale (clamped to the scale limits).
    pub fn with_initial_scale(mut self, scale: f32) -> Self {
        self.initial_scale = scale.clamp(self.min_scale, self.max_scale);
        self
    }

    /// Set the zoom sensitivity.
    pub fn with_zoom_sensitivity(mut self, sensitivity: f32) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }

    /// Set the region edge noise threshold (clamped to `[0, 1]`).
    pub fn with_edge_noise_threshold(mut self, threshold: f64) -> Self {
        self.edge_noise_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Radius at which a hex polygon is drawn, before camera scaling.
    pub fn cell_radius(&self) -> f32 {
        (self.hex_size - self.gap).max(0.0)
    }
}
