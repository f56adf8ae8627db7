//! Desktop viewer for Multiverse Atlas.
//!
//! A macroquad host around the `mw-hexmap` and `mw-graph` engines: it owns
//! the frame loop, feeds mouse and keyboard input to the engine controllers,
//! draws overlay panels, and grows the universe graph with a local stand-in
//! for a content generator.

pub mod app;
pub mod input;
pub mod screen;
pub mod surface;
pub mod theme;
pub mod widget;
