//! Application state shared across all screens.

use mw_core::graph::{leaves, level_for};
use mw_core::{
    GraphNode, MwResult, NodeId, NodeKind, NodeStats, WorldCatalog, WorldLocation, WorldView,
};
use mw_graph::{ForceConfig, ForceLayout};
use mw_hexmap::{MapConfig, MapController};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// World catalog compiled into the binary.
pub const BUNDLED_WORLDS: &str = include_str!("../assets/worlds.json");

/// How many leaves grow a new event per day.
const LEAVES_PER_DAY: usize = 3;
/// Chance that a new event forks the timeline.
const SPLIT_CHANCE: f64 = 0.25;
/// Largest change of a stat from parent to child.
const STAT_DRIFT: f32 = 15.0;

/// Events the local generator draws from: title and description.
const EVENTS: &[(&str, &str)] = &[
    ("First Rain", "Condensed vapour falls for the first time, pooling in craters."),
    ("Algae Bloom", "Green films spread across warm shallow seas."),
    ("Ice Age", "Glaciers crawl toward the equator and the oceans retreat."),
    ("Volcanic Winter", "Ash blots out the sun for a thousand years."),
    ("Oxygen Surge", "Photosynthesis floods the atmosphere with free oxygen."),
    ("Great Drought", "Rivers vanish and the inland seas turn to salt flats."),
    ("Forest Spread", "Towering ferns colonise every continent."),
    ("Impact Event", "A comet strikes the northern ocean."),
    ("Signal Detected", "A repeating pulse arrives from a neighbouring star."),
    ("Machine Awakening", "Self-replicating lattices assemble in the deep crust."),
];

/// Shared application state accessible by all screens.
pub struct AppState {
    catalog: WorldCatalog,
    world_index: usize,
    /// Selected location on the map.
    pub active_location: Option<String>,
    /// Location under the pointer on the map.
    pub hovered_location: Option<String>,
    /// The universe graph.
    pub nodes: Vec<GraphNode>,
    /// Node under the pointer on the graph.
    pub hovered_node: Option<NodeId>,
    /// Map tunables.
    pub map_config: MapConfig,
    /// Graph tunables.
    pub force_config: ForceConfig,
    /// Camera, drag and hover state of the map view.
    ///
    /// Lives here rather than in the screen so the view survives switching
    /// between map and graph.
    pub map_view: MapController,
    /// Kinematic arena of the graph, kept across screen switches.
    pub layout: ForceLayout,
    /// Number of days the universe has advanced.
    pub day: u32,
    /// Whether the app should quit.
    pub should_quit: bool,
    rng: StdRng,
}

impl AppState {
    /// Parse the catalog compiled into the binary.
    pub fn bundled_catalog() -> MwResult<WorldCatalog> {
        WorldCatalog::from_json_str(BUNDLED_WORLDS)
    }

    /// Create state showing `world` (or the first world) of `catalog`.
    pub fn new(
        catalog: WorldCatalog,
        world: Option<&str>,
        map_config: MapConfig,
        force_config: ForceConfig,
    ) -> MwResult<Self> {
        let id = catalog.resolve(world)?.id.clone();
        let world_index = catalog.position(&id).unwrap_or_default();
        let rng = StdRng::seed_from_u64(force_config.seed);
        let nodes = vec![genesis()];
        let mut layout = ForceLayout::new(force_config.clone());
        layout.sync(&nodes);
        Ok(Self {
            catalog,
            world_index,
            active_location: None,
            hovered_location: None,
            nodes,
            hovered_node: None,
            map_view: MapController::new(&map_config),
            layout,
            map_config,
            force_config,
            day: 0,
            should_quit: false,
            rng,
        })
    }

    /// All worlds.
    pub fn catalog(&self) -> &WorldCatalog {
        &self.catalog
    }

    /// The world on display.
    pub fn world(&self) -> &WorldView {
        &self.catalog.worlds()[self.world_index]
    }

    /// The selected location, if it exists in the current world.
    pub fn active_location(&self) -> Option<&WorldLocation> {
        self.active_location
            .as_deref()
            .and_then(|id| self.world().location(id))
    }

    /// The hovered location, if it exists in the current world.
    pub fn hovered_location(&self) -> Option<&WorldLocation> {
        self.hovered_location
            .as_deref()
            .and_then(|id| self.world().location(id))
    }

    /// The hovered graph node.
    pub fn hovered_node(&self) -> Option<&GraphNode> {
        let id = self.hovered_node.as_ref()?;
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// The map controller together with the world it operates on.
    pub fn map_parts(&mut self) -> (&mut MapController, &WorldView) {
        (&mut self.map_view, &self.catalog.worlds()[self.world_index])
    }

    /// Switch to the world with `id`.
    pub fn select_world(&mut self, id: &str) -> MwResult<()> {
        self.catalog.get(id)?;
        self.world_index = self.catalog.position(id).unwrap_or(self.world_index);
        self.on_world_changed();
        Ok(())
    }

    /// Move `step` worlds forward (negative: backward), wrapping around.
    pub fn cycle_world(&mut self, step: i64) {
        let len = self.catalog.len() as i64;
        if len == 0 {
            return;
        }
        self.world_index = (self.world_index as i64 + step).rem_euclid(len) as usize;
        self.on_world_changed();
    }

    fn on_world_changed(&mut self) {
        self.active_location = None;
        self.hovered_location = None;
        self.map_view.clear_hover();
        tracing::info!(world = %self.world().id, "switched world");
    }

    /// Advance the universe by one day.
    ///
    /// Up to three random leaves each grow one new event whose stats drift
    /// from its parent's. Returns the ids of the new nodes.
    pub fn grow(&mut self) -> Vec<NodeId> {
        let tips: Vec<GraphNode> = leaves(&self.nodes).into_iter().cloned().collect();
        let chosen: Vec<GraphNode> = tips
            .choose_multiple(&mut self.rng, LEAVES_PER_DAY)
            .cloned()
            .collect();

        let mut added = Vec::with_capacity(chosen.len());
        for parent in chosen {
            let node = self.next_event(&parent);
            added.push(node.id.clone());
            self.nodes.push(node);
        }
        self.day += 1;
        tracing::info!(day = self.day, added = added.len(), total = self.nodes.len(), "universe advanced");
        added
    }

    fn next_event(&mut self, parent: &GraphNode) -> GraphNode {
        let kind = if self.rng.random_bool(SPLIT_CHANCE) {
            NodeKind::Splitter
        } else {
            NodeKind::Branch
        };
        let (title, description) = EVENTS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(("Event", "Unknown event"));
        let stats = NodeStats {
            water: self.drift(parent.stats.water),
            oxygen: self.drift(parent.stats.oxygen),
            biomass: self.drift(parent.stats.biomass),
        };
        let mut node = GraphNode::child_of(parent, format!("node-{}", Uuid::new_v4()), kind, title)
            .with_description(description)
            .with_stats(stats);
        node.level = level_for(&self.nodes, &parent.id);
        node
    }

    fn drift(&mut self, value: f32) -> f32 {
        (value + self.rng.random_range(-STAT_DRIFT..=STAT_DRIFT)).clamp(0.0, 100.0)
    }
}

/// The root every universe starts from.
pub fn genesis() -> GraphNode {
    GraphNode::root("root", "BIG BANG").with_description(
        "The initialization of the Cyber Universe. Energy coalesces into digital matter.",
    )
}
