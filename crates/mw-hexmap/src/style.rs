//! Terrain style table.

use mw_core::{Glyph, Rgba, TerrainType, Theme};

/// Alpha applied to cells of the [`Opacity::Recede`] class.
const RECEDE_ALPHA: f32 = 0.8;

/// How strongly a terrain stands out from the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opacity {
    /// Fully opaque.
    Solid,
    /// Slightly transparent, for open water and empty space.
    Recede,
}

impl Opacity {
    /// Alpha multiplier for this class.
    pub const fn alpha(self) -> f32 {
        match self {
            Self::Solid => 1.0,
            Self::Recede => RECEDE_ALPHA,
        }
    }
}

/// How one terrain type is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainStyle {
    /// Hex fill color.
    pub fill: Rgba,
    /// Pictogram drawn on declared locations.
    pub glyph: Glyph,
    /// Opacity class.
    pub opacity: Opacity,
}

impl TerrainStyle {
    /// Fill with the opacity class applied.
    pub fn effective_fill(&self) -> Rgba {
        self.fill.fade(self.opacity.alpha())
    }
}

/// Style for every [`TerrainType`], indexed by [`TerrainType::index`].
#[derive(Debug, Clone)]
pub struct StyleTable {
    styles: [TerrainStyle; TerrainType::COUNT],
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl StyleTable {
    /// The built-in palette.
    pub fn standard() -> Self {
        Self {
            styles: TerrainType::ALL.map(standard_style),
        }
    }

    /// Style for `terrain`.
    pub fn get(&self, terrain: TerrainType) -> &TerrainStyle {
        &self.styles[terrain.index()]
    }

    /// Replace the style of one terrain.
    pub fn with_style(mut self, terrain: TerrainType, style: TerrainStyle) -> Self {
        self.styles[terrain.index()] = style;
        self
    }

    /// Canvas background for a world theme.
    pub const fn background(theme: Theme) -> Rgba {
        match theme {
            Theme::Space => Rgba::rgb(0x02, 0x06, 0x17),
            Theme::Terrestrial => Rgba::rgb(0x0f, 0x17, 0x2a),
        }
    }
}

fn glyph_for(terrain: TerrainType) -> Glyph {
    use TerrainType::*;
    match terrain {
        Citadel | Palace => Glyph::Crown,
        Base | Station => Glyph::Crosshair,
        Temple | Ruins => Glyph::Triangle,
        Forest => Glyph::Club,
        Mountain => Glyph::Peak,
        Planet => Glyph::Orb,
        _ => Glyph::Dot,
    }
}

fn standard_style(terrain: TerrainType) -> TerrainStyle {
    use TerrainType::*;
    let (r, g, b) = match terrain {
        Citadel => (0x94, 0xa3, 0xb8),
        Plain => (0x4a, 0xde, 0x80),
        Forest => (0x15, 0x80, 0x3d),
        Mountain => (0x47, 0x55, 0x69),
        Swamp => (0x36, 0x53, 0x14),
        Desert => (0xfd, 0xe0, 0x47),
        Ashland => (0x18, 0x18, 0x1b),
        Coast => (0x38, 0xbd, 0xf8),
        Ocean => (0x1e, 0x3a, 0x8a),
        Palace => (0xef, 0x44, 0x44),
        Temple => (0xfb, 0xbf, 0x24),
        Village => (0xbe, 0xf2, 0x64),
        Battlefield => (0x7f, 0x1d, 0x1d),
        River => (0x60, 0xa5, 0xfa),
        Base => (0xcb, 0xd5, 0xe1),
        Station => (0x81, 0x8c, 0xf8),
        Planet => (0xa8, 0x55, 0xf7),
        Nebula => (0xdb, 0x27, 0x77),
        Ruins => (0x57, 0x53, 0x4e),
        City => (0x2d, 0xd4, 0xbf),
        DeepSpace => (0x02, 0x06, 0x17),
    };
    let opacity = match terrain {
        Ocean | DeepSpace => Opacity::Recede,
        _ => Opacity::Solid,
    };
    TerrainStyle {
        fill: Rgba::rgb(r, g, b),
        glyph: glyph_for(terrain),
        opacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_terrain_has_its_own_entry() {
        let table = StyleTable::standard();
        for terrain in TerrainType::ALL {
            assert_eq!(table.get(terrain), &standard_style(terrain));
        }
    }

    #[test]
    fn palette_samples() {
        let table = StyleTable::standard();
        assert_eq!(table.get(TerrainType::Plain).fill.to_string(), "#4ade80");
        assert_eq!(table.get(TerrainType::Nebula).fill.to_string(), "#db2777");
        assert_eq!(table.get(TerrainType::Palace).glyph, Glyph::Crown);
        assert_eq!(table.get(TerrainType::Station).glyph, Glyph::Crosshair);
        assert_eq!(table.get(TerrainType::Ruins).glyph, Glyph::Triangle);
        assert_eq!(table.get(TerrainType::Swamp).glyph, Glyph::Dot);
    }

    #[test]
    fn water_and_void_recede() {
        let table = StyleTable::standard();
        let ocean = table.get(TerrainType::Ocean);
        assert_eq!(ocean.opacity, Opacity::Recede);
        assert_eq!(ocean.effective_fill().a, 204);
        assert_eq!(table.get(TerrainType::Forest).effective_fill().a, 255);
    }

    #[test]
    fn overrides_replace_one_entry() {
        let custom = TerrainStyle {
            fill: Rgba::WHITE,
            glyph: Glyph::Orb,
            opacity: Opacity::Solid,
        };
        let table = StyleTable::standard().with_style(TerrainType::City, custom);
        assert_eq!(table.get(TerrainType::City), &custom);
        assert_eq!(table.get(TerrainType::Coast).glyph, Glyph::Dot);
    }

    #[test]
    fn backgrounds_by_theme() {
        assert_eq!(StyleTable::background(Theme::Space).to_string(), "#020617");
        assert_eq!(StyleTable::background(Theme::Terrestrial).to_string(), "#0f172a");
    }
}
