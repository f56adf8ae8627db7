use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::coord::AxialCoord;
use crate::error::{MwError, MwResult};
use crate::terrain::TerrainType;

/// Visual family of a world. Decides the procedural fallback terrain and
/// the map background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Land and sea; empty cells are ocean.
    #[default]
    Terrestrial,
    /// Interstellar; empty cells are deep space.
    Space,
}

impl Theme {
    /// Terrain of cells that no location or region claims.
    pub const fn fallback_terrain(self) -> TerrainType {
        match self {
            Self::Terrestrial => TerrainType::Ocean,
            Self::Space => TerrainType::DeepSpace,
        }
    }
}

/// A named place pinned to one hex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldLocation {
    /// Unique id within the world.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Terrain drawn on the location's hex.
    #[serde(rename = "type")]
    pub terrain: TerrainType,
    /// Free-form description shown in tooltips.
    #[serde(default)]
    pub description: String,
    /// Axial column.
    pub q: i32,
    /// Axial row.
    pub r: i32,
}

impl WorldLocation {
    /// The hex this location occupies.
    pub fn coord(&self) -> AxialCoord {
        AxialCoord::new(self.q, self.r)
    }
}

/// A disk of dominant terrain around a center hex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldRegion {
    /// Label drawn at the center.
    pub name: String,
    /// Center hex.
    pub center: AxialCoord,
    /// Radius in hex steps.
    pub radius: u32,
    /// Terrain filling the disk.
    pub biome: TerrainType,
    /// Label color.
    pub color: Rgba,
}

impl WorldRegion {
    /// Hex distance from the region center to `coord`.
    pub fn distance_to(&self, coord: AxialCoord) -> u32 {
        self.center.distance(coord)
    }

    /// Whether `coord` lies inside the disk.
    pub fn contains(&self, coord: AxialCoord) -> bool {
        self.distance_to(coord) <= self.radius
    }
}

/// One explorable world: its locations, regions, and theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldView {
    /// Unique id within a catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line summary.
    #[serde(default)]
    pub description: String,
    /// Era or period label.
    #[serde(default)]
    pub era: String,
    /// Accent color for host chrome.
    pub theme_color: Rgba,
    /// Visual family.
    #[serde(default)]
    pub theme: Theme,
    /// Declared locations, in display order.
    #[serde(default)]
    pub locations: Vec<WorldLocation>,
    /// Regions of influence, in priority order.
    #[serde(default)]
    pub regions: Vec<WorldRegion>,
}

impl WorldView {
    /// Create an empty world.
    pub fn new(id: impl Into<String>, name: impl Into<String>, theme: Theme) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            era: String::new(),
            theme_color: Rgba::WHITE,
            theme,
            locations: Vec::new(),
            regions: Vec::new(),
        }
    }

    /// Append a location.
    pub fn with_location(mut self, location: WorldLocation) -> Self {
        self.locations.push(location);
        self
    }

    /// Append a region.
    pub fn with_region(mut self, region: WorldRegion) -> Self {
        self.regions.push(region);
        self
    }

    /// Find a location by id.
    pub fn location(&self, id: &str) -> Option<&WorldLocation> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Find the location declared on `coord`, if any.
    pub fn location_at(&self, coord: AxialCoord) -> Option<&WorldLocation> {
        self.locations.iter().find(|l| l.coord() == coord)
    }

    /// Index locations by coordinate. The first declaration wins if two
    /// locations share a hex.
    pub fn location_index(&self) -> HashMap<AxialCoord, &WorldLocation> {
        let mut index = HashMap::with_capacity(self.locations.len());
        for location in &self.locations {
            index.entry(location.coord()).or_insert(location);
        }
        index
    }

    /// Terrain types that appear in regions or locations, sorted by name.
    pub fn legend(&self) -> Vec<TerrainType> {
        let mut legend: Vec<TerrainType> = self
            .regions
            .iter()
            .map(|r| r.biome)
            .chain(self.locations.iter().map(|l| l.terrain))
            .collect();
        legend.sort_by_key(|t| t.as_str());
        legend.dedup();
        legend
    }

    /// Check the invariants the renderer relies on.
    pub fn validate(&self) -> MwResult<()> {
        let mut ids = HashSet::new();
        let mut occupied: HashMap<AxialCoord, &str> = HashMap::new();
        for location in &self.locations {
            if !ids.insert(location.id.as_str()) {
                return Err(MwError::DuplicateLocationId {
                    world: self.id.clone(),
                    id: location.id.clone(),
                });
            }
            if let Some(first) = occupied.insert(location.coord(), &location.id) {
                return Err(MwError::OccupiedCoordinate {
                    coord: location.coord(),
                    first: first.to_string(),
                    second: location.id.clone(),
                });
            }
        }
        for region in &self.regions {
            if region.name.trim().is_empty() {
                return Err(MwError::InvalidRegion {
                    name: region.name.clone(),
                    reason: "name is empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(id: &str, terrain: TerrainType, q: i32, r: i32) -> WorldLocation {
        WorldLocation {
            id: id.to_string(),
            name: id.to_uppercase(),
            terrain,
            description: String::new(),
            q,
            r,
        }
    }

    fn region(name: &str, q: i32, r: i32, radius: u32, biome: TerrainType) -> WorldRegion {
        WorldRegion {
            name: name.to_string(),
            center: AxialCoord::new(q, r),
            radius,
            biome,
            color: Rgba::WHITE,
        }
    }

    #[test]
    fn theme_fallbacks() {
        assert_eq!(Theme::Terrestrial.fallback_terrain(), TerrainType::Ocean);
        assert_eq!(Theme::Space.fallback_terrain(), TerrainType::DeepSpace);
        assert_eq!(Theme::default(), Theme::Terrestrial);
    }

    #[test]
    fn location_lookups() {
        let world = WorldView::new("w", "World", Theme::Terrestrial)
            .with_location(loc("a", TerrainType::Citadel, 0, 0))
            .with_location(loc("b", TerrainType::Forest, 2, -1));
        assert_eq!(world.location("b").unwrap().coord(), AxialCoord::new(2, -1));
        assert_eq!(world.location_at(AxialCoord::ORIGIN).unwrap().id, "a");
        assert!(world.location_at(AxialCoord::new(5, 5)).is_none());
        assert_eq!(world.location_index().len(), 2);
    }

    #[test]
    fn region_contains_its_disk() {
        let r = region("R", 2, 2, 2, TerrainType::Plain);
        assert!(r.contains(AxialCoord::new(2, 2)));
        assert!(r.contains(AxialCoord::new(4, 0)));
        assert!(!r.contains(AxialCoord::new(5, 0)));
    }

    #[test]
    fn legend_is_sorted_and_deduplicated() {
        let world = WorldView::new("w", "World", Theme::Terrestrial)
            .with_region(region("R", 0, 0, 3, TerrainType::Plain))
            .with_location(loc("a", TerrainType::Forest, 1, 0))
            .with_location(loc("b", TerrainType::Plain, 2, 0))
            .with_location(loc("c", TerrainType::DeepSpace, 3, 0));
        let names: Vec<_> = world.legend().iter().map(|t| t.as_str()).collect();
        insta::assert_snapshot!(names.join(", "), @"deep_space, forest, plain");
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let world = WorldView::new("w", "World", Theme::Terrestrial)
            .with_location(loc("a", TerrainType::Forest, 0, 0))
            .with_location(loc("a", TerrainType::Forest, 1, 0));
        assert!(matches!(
            world.validate(),
            Err(MwError::DuplicateLocationId { .. })
        ));
    }

    #[test]
    fn validate_rejects_shared_coordinates() {
        let world = WorldView::new("w", "World", Theme::Terrestrial)
            .with_location(loc("a", TerrainType::Forest, 1, 1))
            .with_location(loc("b", TerrainType::Desert, 1, 1));
        let err = world.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "locations \"a\" and \"b\" both occupy (1, 1)"
        );
    }

    #[test]
    fn validate_rejects_unnamed_regions() {
        let world = WorldView::new("w", "World", Theme::Terrestrial)
            .with_region(region("  ", 0, 0, 1, TerrainType::Plain));
        assert!(matches!(world.validate(), Err(MwError::InvalidRegion { .. })));
    }

    #[test]
    fn location_json_uses_type_key() {
        let json = r#"{"id":"x","name":"X","type":"deep_space","q":1,"r":-2}"#;
        let location: WorldLocation = serde_json::from_str(json).unwrap();
        assert_eq!(location.terrain, TerrainType::DeepSpace);
        assert!(location.description.is_empty());
        assert_eq!(location.coord(), AxialCoord::new(1, -2));
    }
}
