use std::fmt;

use serde::{Deserialize, Serialize};

/// Terrain classification of a map cell.
///
/// Covers fantasy, historical and science-fiction settings so that every
/// bundled world draws from one palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainType {
    /// A fortified capital.
    Citadel,
    /// Open grassland.
    Plain,
    /// Woodland.
    Forest,
    /// Peaks and high ground.
    Mountain,
    /// Wetland.
    Swamp,
    /// Dunes and dry waste.
    Desert,
    /// Volcanic, ash-covered land.
    Ashland,
    /// Shoreline and shallow water.
    Coast,
    /// Open sea; the default for terrestrial worlds.
    Ocean,
    /// A royal or imperial seat.
    Palace,
    /// A shrine or monastery.
    Temple,
    /// A rural settlement.
    Village,
    /// A site of war.
    Battlefield,
    /// A major waterway.
    River,
    /// A military or research installation.
    Base,
    /// An orbital or transit station.
    Station,
    /// A planetary body.
    Planet,
    /// A gas cloud.
    Nebula,
    /// Remains of a lost civilization.
    Ruins,
    /// A dense urban area.
    City,
    /// Empty space; the default for space worlds.
    DeepSpace,
}

impl TerrainType {
    /// Number of terrain variants.
    pub const COUNT: usize = 21;

    /// Every terrain, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Citadel,
        Self::Plain,
        Self::Forest,
        Self::Mountain,
        Self::Swamp,
        Self::Desert,
        Self::Ashland,
        Self::Coast,
        Self::Ocean,
        Self::Palace,
        Self::Temple,
        Self::Village,
        Self::Battlefield,
        Self::River,
        Self::Base,
        Self::Station,
        Self::Planet,
        Self::Nebula,
        Self::Ruins,
        Self::City,
        Self::DeepSpace,
    ];

    /// Position of this terrain in [`TerrainType::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The serialized name, e.g. `"deep_space"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Citadel => "citadel",
            Self::Plain => "plain",
            Self::Forest => "forest",
            Self::Mountain => "mountain",
            Self::Swamp => "swamp",
            Self::Desert => "desert",
            Self::Ashland => "ashland",
            Self::Coast => "coast",
            Self::Ocean => "ocean",
            Self::Palace => "palace",
            Self::Temple => "temple",
            Self::Village => "village",
            Self::Battlefield => "battlefield",
            Self::River => "river",
            Self::Base => "base",
            Self::Station => "station",
            Self::Planet => "planet",
            Self::Nebula => "nebula",
            Self::Ruins => "ruins",
            Self::City => "city",
            Self::DeepSpace => "deep_space",
        }
    }

    /// Human-readable label, e.g. `"deep space"`.
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_indexed_in_order() {
        for (i, terrain) in TerrainType::ALL.iter().enumerate() {
            assert_eq!(terrain.index(), i);
        }
    }

    #[test]
    fn serde_names_match_as_str() {
        for terrain in TerrainType::ALL {
            let json = serde_json::to_string(&terrain).unwrap();
            assert_eq!(json, format!("\"{}\"", terrain.as_str()));
        }
    }

    #[test]
    fn label_replaces_underscores() {
        assert_eq!(TerrainType::DeepSpace.label(), "deep space");
        assert_eq!(TerrainType::Forest.label(), "forest");
    }
}
