//! Core types for Multiverse Atlas: worlds, hex coordinates, graph nodes, and
//! the drawing contract shared by the map and graph renderers.
//!
//! Nothing in this crate draws pixels or owns a window. Renderers talk to a
//! [`Surface`]; hosts implement it for their backend, tests use
//! [`surface::Recorder`].

/// World catalogs loaded from JSON.
pub mod catalog;
/// RGBA colors with `#rrggbb` parsing.
pub mod color;
/// Axial hex lattice coordinates.
pub mod coord;
/// Error types used throughout the crate.
pub mod error;
/// 2D points in pixel and world space.
pub mod geom;
/// Nodes of the evolving universe graph.
pub mod graph;
/// The drawing contract implemented by rendering backends.
pub mod surface;
/// Terrain classification of map cells.
pub mod terrain;
/// Worlds, their declared locations and regions of influence.
pub mod world;

/// Re-export catalog types.
pub use catalog::WorldCatalog;
/// Re-export color types.
pub use color::Rgba;
/// Re-export coordinate types.
pub use coord::AxialCoord;
/// Re-export error types.
pub use error::{MwError, MwResult};
/// Re-export geometry types.
pub use geom::Point;
/// Re-export graph types.
pub use graph::{GraphNode, NodeId, NodeKind, NodeStats};
/// Re-export the drawing contract.
pub use surface::{Glyph, Surface};
/// Re-export terrain types.
pub use terrain::TerrainType;
/// Re-export world model types.
pub use world::{Theme, WorldLocation, WorldRegion, WorldView};
