//! Deterministic terrain resolution.
//!
//! The map is unbounded and procedural: a cell's terrain is a pure function
//! of its coordinate and the world's declared locations and regions.
//! Nothing is cached between frames.

use std::collections::HashMap;

use mw_core::{AxialCoord, TerrainType, WorldRegion, WorldView};

use crate::config::MapConfig;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Stable pseudo-random value in `[0, 1)` for a cell.
///
/// A polynomial rolling hash (multiplier 31, 32-bit wrapping) over the text
/// `"{q},{r}"`, reinterpreted as unsigned and divided by 2^32.
pub fn cell_noise(coord: AxialCoord) -> f64 {
    let key = format!("{},{}", coord.q, coord.r);
    let h = key
        .bytes()
        .fold(0i32, |h, b| h.wrapping_mul(31).wrapping_add(i32::from(b)));
    f64::from(h as u32) / TWO_POW_32
}

/// Resolves the terrain of any cell of one world.
///
/// Lookup order: a declared location on the cell, then the first region
/// (in declaration order) that claims it, then the world's fallback.
#[derive(Debug, Clone)]
pub struct TerrainResolver<'w> {
    locations: HashMap<AxialCoord, TerrainType>,
    regions: &'w [WorldRegion],
    fallback: TerrainType,
    threshold: f64,
}

impl<'w> TerrainResolver<'w> {
    /// Build a resolver for `world` with the default edge threshold.
    pub fn new(world: &'w WorldView) -> Self {
        let locations = world
            .location_index()
            .into_iter()
            .map(|(coord, location)| (coord, location.terrain))
            .collect();
        Self {
            locations,
            regions: &world.regions,
            fallback: world.theme.fallback_terrain(),
            threshold: MapConfig::default().edge_noise_threshold,
        }
    }

    /// Override the noise value above which outer-ring cells escape a region.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Terrain of the cell at `coord`.
    pub fn resolve(&self, coord: AxialCoord) -> TerrainType {
        if let Some(&terrain) = self.locations.get(&coord) {
            return terrain;
        }
        self.regions
            .iter()
            .find(|region| self.claims(region, coord))
            .map_or(self.fallback, |region| region.biome)
    }

    /// Whether `region` claims `coord`, taking edge noise into account.
    fn claims(&self, region: &WorldRegion, coord: AxialCoord) -> bool {
        let dist = region.distance_to(coord);
        if dist > region.radius {
            return false;
        }
        let outer_ring = dist + 1 > region.radius;
        !(outer_ring && cell_noise(coord) > self.threshold)
    }

    /// Whether `coord` holds a declared location.
    pub fn is_location(&self, coord: AxialCoord) -> bool {
        self.locations.contains_key(&coord)
    }
}
