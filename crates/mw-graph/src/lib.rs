//! Force-directed layout of the Multiverse Atlas node graph.
//!
//! [`ForceLayout`] owns the position and velocity of every node it has seen
//! and advances them one explicit step at a time. Node data itself stays with
//! the caller and is passed in on every call, so nodes may be added or
//! removed between steps. [`GraphRenderer`] draws the result onto a
//! [`mw_core::Surface`].

/// Physics and presentation constants.
pub mod config;
/// Pointer handling for the graph view.
pub mod controller;
/// The kinematic arena and its integration step.
pub mod layout;
/// Frame rendering of the graph.
pub mod render;
/// Per-kind node appearance.
pub mod style;

/// Re-export of [`config::ForceConfig`].
pub use config::ForceConfig;
/// Re-exports of [`controller::GraphController`] and [`controller::GraphEvent`].
pub use controller::{GraphController, GraphEvent};
/// Re-exports of [`layout::Body`] and [`layout::ForceLayout`].
pub use layout::{Body, ForceLayout};
/// Re-exports of [`render::GraphFrame`] and [`render::GraphRenderer`].
pub use render::{GraphFrame, GraphRenderer};
/// Re-export of [`style::NodeStyle`].
pub use style::NodeStyle;
