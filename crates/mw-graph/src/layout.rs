use std::collections::{HashMap, HashSet};
use std::f32::consts::TAU;

use mw_core::{GraphNode, NodeId, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ForceConfig;

/// Kinematic state of one node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    /// Position in world space; the origin is the canvas center.
    pub position: Point,
    /// Displacement applied on the last step.
    pub velocity: Point,
}

/// The kinematic arena of the graph.
///
/// Bodies are keyed by node id, created the first time a node is seen and
/// dropped once it disappears from the node list. Only [`ForceLayout::step`]
/// moves them.
pub struct ForceLayout {
    config: ForceConfig,
    bodies: HashMap<NodeId, Body>,
    rng: StdRng,
}

impl std::fmt::Debug for ForceLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForceLayout")
            .field("bodies", &self.bodies.len())
            .field("seed", &self.config.seed)
            .finish()
    }
}

impl Default for ForceLayout {
    fn default() -> Self {
        Self::new(ForceConfig::default())
    }
}

impl ForceLayout {
    /// Create an empty arena.
    pub fn new(config: ForceConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            bodies: HashMap::new(),
            rng,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ForceConfig {
        &self.config
    }

    /// Number of bodies in the arena.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Position of a node, if it has been seeded.
    pub fn position(&self, id: &NodeId) -> Option<Point> {
        self.bodies.get(id).map(|body| body.position)
    }

    /// Velocity of a node, if it has been seeded.
    pub fn velocity(&self, id: &NodeId) -> Option<Point> {
        self.bodies.get(id).map(|body| body.velocity)
    }

    /// Drop every body. Nodes are seeded again on the next sync.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Bring the arena in line with `nodes`.
    ///
    /// Bodies of vanished nodes are dropped. Each new node appears at
    /// `spawn_distance` from its parent's current position in a random
    /// direction; roots and nodes whose parent is missing spawn around the
    /// origin. Parents are always seeded before their children.
    pub fn sync(&mut self, nodes: &[GraphNode]) {
        let present: HashSet<&NodeId> = nodes.iter().map(|n| &n.id).collect();
        let before = self.bodies.len();
        self.bodies.retain(|id, _| present.contains(id));
        if self.bodies.len() < before {
            tracing::debug!(dropped = before - self.bodies.len(), "dropped stale bodies");
        }

        let mut pending: Vec<&GraphNode> = nodes
            .iter()
            .filter(|n| !self.bodies.contains_key(&n.id))
            .collect();
        while !pending.is_empty() {
            let mut waiting = Vec::new();
            let mut progressed = false;
            for node in pending {
                match self.anchor(node, &present) {
                    Some(anchor) => {
                        self.seed(node, anchor);
                        progressed = true;
                    }
                    None => waiting.push(node),
                }
            }
            if !progressed && !waiting.is_empty() {
                // Parent links form a cycle; break it at the first node.
                let node = waiting.remove(0);
                self.seed(node, Point::ZERO);
            }
            pending = waiting;
        }
    }

    /// Where a new node should spawn around, or `None` while its parent is
    /// still waiting to be seeded.
    fn anchor(&self, node: &GraphNode, present: &HashSet<&NodeId>) -> Option<Point> {
        let Some(parent) = &node.parent_id else {
            return Some(Point::ZERO);
        };
        match self.bodies.get(parent) {
            Some(body) => Some(body.position),
            None if present.contains(parent) && parent != &node.id => None,
            None => Some(Point::ZERO),
        }
    }

    fn seed(&mut self, node: &GraphNode, anchor: Point) {
        if self.bodies.contains_key(&node.id) {
            return;
        }
        let angle = self.rng.random::<f32>() * TAU;
        let position = anchor + Point::from_angle(angle, spawn_distance(&self.config));
        tracing::debug!(node = %node.id, x = position.x, y = position.y, "seeded node");
        self.bodies.insert(
            node.id.clone(),
            Body {
                position,
                velocity: Point::ZERO,
            },
        );
    }

    /// Advance the simulation by one step.
    ///
    /// Forces are computed from the positions at the start of the step, then
    /// every body is integrated. A body whose new state is not finite keeps
    /// its old position and loses its velocity.
    pub fn step(&mut self, nodes: &[GraphNode]) {
        self.sync(nodes);

        let mut seen = HashSet::new();
        let snapshot: Vec<(&GraphNode, Point)> = nodes
            .iter()
            .filter(|&n| seen.insert(&n.id))
            .filter_map(|n| self.bodies.get(&n.id).map(|b| (n, b.position)))
            .collect();

        let forces: Vec<(&NodeId, Point)> = snapshot
            .iter()
            .map(|&(node, position)| {
                let mut force = Point::ZERO;
                for &(other, other_position) in &snapshot {
                    if other.id != node.id {
                        force += self.repulsion(position, other_position);
                    }
                }
                if let Some(parent) = node.parent_id.as_ref().and_then(|p| self.bodies.get(p)) {
                    force += self.spring(position, parent.position);
                }
                force += position * -self.config.centering;
                (&node.id, force)
            })
            .collect();

        for (id, force) in forces {
            if let Some(body) = self.bodies.get_mut(id) {
                integrate(body, force, &self.config);
            }
        }
    }

    /// Advance the simulation by `ticks` steps.
    pub fn step_n(&mut self, nodes: &[GraphNode], ticks: usize) {
        for _ in 0..ticks {
            self.step(nodes);
        }
    }

    fn repulsion(&self, position: Point, other: Point) -> Point {
        let delta = position - other;
        let dist_sq = delta.length_squared() + 1.0;
        let dist = dist_sq.sqrt();
        delta / dist * (self.config.repulsion / dist_sq)
    }

    fn spring(&self, position: Point, parent: Point) -> Point {
        let delta = position - parent;
        let dist = delta.length();
        if dist == 0.0 {
            return Point::ZERO;
        }
        let stretch = (dist - self.config.spring_length) * self.config.spring_strength;
        -(delta / dist * stretch)
    }

    /// The node nearest to `point`, if strictly closer than `radius`.
    ///
    /// On a tie the node listed first wins.
    pub fn pick<'n>(
        &self,
        nodes: &'n [GraphNode],
        point: Point,
        radius: f32,
    ) -> Option<&'n GraphNode> {
        let mut best = None;
        let mut best_dist = radius;
        for node in nodes {
            let Some(body) = self.bodies.get(&node.id) else {
                continue;
            };
            let dist = body.position.distance(point);
            if dist < best_dist {
                best = Some(node);
                best_dist = dist;
            }
        }
        best
    }
}

/// Spawn distance of `config`, at least one pixel so a node never appears on
/// top of its anchor.
fn spawn_distance(config: &ForceConfig) -> f32 {
    config.spawn_distance.max(1.0)
}

fn integrate(body: &mut Body, force: Point, config: &ForceConfig) {
    let mut velocity = (body.velocity + force) * config.damping;
    let speed = velocity.length();
    if speed > config.max_speed {
        velocity = velocity * (config.max_speed / speed);
    }
    let position = body.position + velocity;
    if velocity.is_finite() && position.is_finite() {
        body.velocity = velocity;
        body.position = position;
    } else {
        tracing::warn!("discarded non-finite body state");
        body.velocity = Point::ZERO;
    }
}
