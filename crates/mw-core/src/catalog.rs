use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MwError, MwResult};
use crate::world::WorldView;

/// An ordered collection of worlds a host can switch between.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldCatalog {
    worlds: Vec<WorldView>,
}

impl WorldCatalog {
    /// Build a catalog from worlds, validating each one.
    pub fn new(worlds: Vec<WorldView>) -> MwResult<Self> {
        for world in &worlds {
            world.validate()?;
        }
        Ok(Self { worlds })
    }

    /// Parse a catalog from JSON of the form `{"worlds": [...]}`.
    pub fn from_json_str(json: &str) -> MwResult<Self> {
        let raw: WorldCatalog = serde_json::from_str(json)?;
        let catalog = Self::new(raw.worlds)?;
        tracing::debug!(worlds = catalog.len(), "parsed world catalog");
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: &Path) -> MwResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), worlds = catalog.len(), "loaded world catalog");
        Ok(catalog)
    }

    /// All worlds in catalog order.
    pub fn worlds(&self) -> &[WorldView] {
        &self.worlds
    }

    /// Number of worlds.
    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    /// Whether the catalog has no worlds.
    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }

    /// Look up a world by id.
    pub fn get(&self, id: &str) -> MwResult<&WorldView> {
        self.worlds
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| MwError::UnknownWorld(id.to_string()))
    }

    /// The world with `id`, or the first world when no id is given.
    pub fn resolve(&self, id: Option<&str>) -> MwResult<&WorldView> {
        match id {
            Some(id) => self.get(id),
            None => self.worlds.first().ok_or(MwError::EmptyCatalog),
        }
    }

    /// Position of a world in catalog order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.worlds.iter().position(|w| w.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::terrain::TerrainType;
    use crate::world::Theme;

    const SAMPLE: &str = r##"{
        "worlds": [
            {
                "id": "vale",
                "name": "The Vale",
                "theme_color": "#F59E0B",
                "regions": [
                    { "name": "HIGHLANDS", "center": { "q": 3, "r": -2 }, "radius": 2,
                      "biome": "mountain", "color": "#94a3b8" }
                ],
                "locations": [
                    { "id": "keep", "name": "Old Keep", "type": "citadel", "q": 0, "r": 0,
                      "description": "A grey keep." }
                ]
            },
            {
                "id": "void",
                "name": "The Void",
                "theme": "space",
                "theme_color": "#0EA5E9"
            }
        ]
    }"##;

    #[test]
    fn parses_worlds_in_order() {
        let catalog = WorldCatalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.worlds()[0].id, "vale");
        assert_eq!(catalog.position("void"), Some(1));

        let vale = catalog.get("vale").unwrap();
        assert_eq!(vale.theme, Theme::Terrestrial);
        assert_eq!(vale.regions[0].biome, TerrainType::Mountain);
        assert_eq!(vale.locations[0].description, "A grey keep.");

        let void = catalog.get("void").unwrap();
        assert_eq!(void.theme, Theme::Space);
        assert!(void.locations.is_empty());
    }

    #[test]
    fn unknown_world_is_an_error() {
        let catalog = WorldCatalog::from_json_str(SAMPLE).unwrap();
        let err = catalog.get("nowhere").unwrap_err();
        assert_eq!(err.to_string(), "unknown world: \"nowhere\"");
    }

    #[test]
    fn resolve_defaults_to_first_world() {
        let catalog = WorldCatalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.resolve(None).unwrap().id, "vale");
        assert_eq!(catalog.resolve(Some("void")).unwrap().id, "void");
        assert!(matches!(
            WorldCatalog::default().resolve(None),
            Err(MwError::EmptyCatalog)
        ));
    }

    #[test]
    fn invalid_worlds_are_rejected_on_load() {
        let json = r##"{"worlds": [{
            "id": "bad", "name": "Bad", "theme_color": "#ffffff",
            "locations": [
                { "id": "a", "name": "A", "type": "plain", "q": 1, "r": 1 },
                { "id": "b", "name": "B", "type": "plain", "q": 1, "r": 1 }
            ]
        }]}"##;
        assert!(matches!(
            WorldCatalog::from_json_str(json),
            Err(MwError::OccupiedCoordinate { .. })
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            WorldCatalog::from_json_str("{\"worlds\": [}"),
            Err(MwError::Json(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let catalog = WorldCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = WorldCatalog::from_path(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(MwError::Io(_))));
    }
}
