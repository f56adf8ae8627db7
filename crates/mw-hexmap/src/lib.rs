//! Hex map engine for Multiverse Atlas.
//!
//! Converts between axial hex coordinates and pixels, resolves the terrain of
//! every cell of an unbounded procedural grid, tracks the camera, draws the
//! visible part of the map onto a [`mw_core::Surface`], and turns pointer
//! input into hover and selection events.

/// Camera pan and zoom.
pub mod camera;
/// Map configuration.
pub mod config;
/// Pointer handling: drag, hover, and click selection.
pub mod controller;
/// Axial hex math and grid iteration.
pub mod layout;
/// Frame rendering of the hex map.
pub mod render;
/// Terrain style table.
pub mod style;
/// Deterministic terrain resolution.
pub mod terrain;

/// Re-export of [`camera::Camera`].
pub use camera::Camera;
/// Re-export of [`config::MapConfig`].
pub use config::MapConfig;
/// Re-exports of [`controller::MapController`] and [`controller::MapEvent`].
pub use controller::{MapController, MapEvent};
/// Re-export of [`layout::HexLayout`].
pub use layout::HexLayout;
/// Re-exports of [`render::HexMapRenderer`], [`render::MapFrame`] and [`render::FrameStats`].
pub use render::{FrameStats, HexMapRenderer, MapFrame};
/// Re-exports of [`style::StyleTable`] and [`style::TerrainStyle`].
pub use style::{StyleTable, TerrainStyle};
/// Re-export of [`terrain::TerrainResolver`].
pub use terrain::TerrainResolver;
