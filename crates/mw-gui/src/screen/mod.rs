//! Screen management: trait definition, screen identifiers, and transitions.

pub mod graph;
pub mod map;

use crate::app::AppState;

/// Identifies which screen to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// Hex map of the active world.
    Map,
    /// Universe node graph.
    Graph,
}

impl ScreenId {
    /// Look up a screen by its command-line name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "map" => Some(Self::Map),
            "graph" => Some(Self::Graph),
            _ => None,
        }
    }

    /// The command-line name of this screen.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Graph => "graph",
        }
    }

    /// The other view, reached with Tab.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Map => Self::Graph,
            Self::Graph => Self::Map,
        }
    }
}

/// A transition between screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Pop the current screen and return to the previous one.
    Pop,
    /// Replace the current screen.
    Replace(ScreenId),
    /// No transition.
    None,
}

/// Trait that all screens implement.
pub trait Screen {
    /// Update state based on input. Returns a transition if the screen should change.
    fn update(&mut self, app: &mut AppState) -> Transition;
    /// Draw the screen.
    fn draw(&self, app: &AppState);
}

/// Create a screen instance for a given screen id.
pub fn make_screen(id: ScreenId, app: &AppState) -> Box<dyn Screen> {
    tracing::debug!(screen = id.name(), "opening screen");
    match id {
        ScreenId::Map => Box::new(map::MapScreen::new(app)),
        ScreenId::Graph => Box::new(graph::GraphScreen::new(app)),
    }
}
